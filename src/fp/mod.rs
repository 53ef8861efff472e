pub mod builder;
pub mod combinations;
pub mod mining;
pub mod order;
pub mod storage;
pub mod streaming;
pub mod support_list;
pub mod tree;

pub use builder::{build_conditional_fp_tree, build_fp_tree, build_fp_tree_from_frequent_items};
pub use mining::{mine, FPGrowthMiner};
pub use order::{FrequencyOrder, FrequentItems};
pub use storage::{group_by_size, FrequentLevel, FrequentPattern};
pub use streaming::{ProcessingPhase, StreamingState};
pub use support_list::ItemSupportList;
pub use tree::{FPNode, FPTree};
