//! Frequent item set mining with FP-Growth.
//!
//! Transactions are [`ItemSupportList`]s whose items carry the transaction
//! weight. [`mine`] returns every item set whose summed weight reaches the
//! minimum support.

pub mod config;
pub mod error;
pub mod fp;

#[cfg(feature = "python")]
mod python;

pub use config::MinerConfig;
pub use error::{MiningError, MiningResult};
pub use fp::{
    group_by_size, mine, FPGrowthMiner, FPTree, FrequencyOrder, FrequentItems, FrequentLevel,
    FrequentPattern, ItemSupportList, StreamingState,
};
