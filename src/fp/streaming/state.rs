use tracing::debug;

use crate::config::MinerConfig;
use crate::error::{MiningError, MiningResult};
use crate::fp::order::FrequentItems;
use crate::fp::support_list::ItemSupportList;
use crate::fp::tree::FPTree;

/// State for two-pass mining over transaction batches
#[derive(Debug)]
pub struct StreamingState {
    /// Aggregate item supports during the counting phase
    pub aggregate: ItemSupportList,
    /// Total number of transactions counted
    pub num_transactions: usize,
    /// Transactions inserted so far in the building phase
    pub num_built: usize,
    /// Settings fixed when counting is finalized
    pub config: Option<MinerConfig>,
    /// The FP-Tree being built incrementally
    pub fp_tree: Option<FPTree>,
    /// Processing phase
    pub phase: ProcessingPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingPhase {
    Counting,
    CountingFinalized,
    Building,
    ReadyToMine,
}

impl Default for StreamingState {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingState {
    pub fn new() -> Self {
        Self {
            aggregate: ItemSupportList::new("frequent items"),
            num_transactions: 0,
            num_built: 0,
            config: None,
            fp_tree: None,
            phase: ProcessingPhase::Counting,
        }
    }

    pub(crate) fn expect_phase(
        &self,
        expected: ProcessingPhase,
        operation: &'static str,
    ) -> MiningResult<()> {
        if self.phase != expected {
            return Err(MiningError::InvalidPhase {
                operation,
                phase: self.phase,
            });
        }
        Ok(())
    }

    /// Add the supports of a transaction batch
    pub fn add_counts(&mut self, transactions: &[ItemSupportList]) {
        for transaction in transactions {
            self.num_transactions += 1;
            for (item, support) in transaction.iter() {
                self.aggregate.add_support(item, support);
            }
        }
    }

    /// Freeze the aggregate into a frequent-items snapshot
    pub fn finalize_counts(&mut self, config: MinerConfig) -> MiningResult<()> {
        self.expect_phase(ProcessingPhase::Counting, "finalize counts")?;
        config.validate()?;

        let aggregate = std::mem::take(&mut self.aggregate);
        let frequent_items = FrequentItems::from_aggregate(aggregate, config.threshold());
        debug!(
            transactions = self.num_transactions,
            frequent_items = frequent_items.len(),
            min_support = config.min_support,
            "counting finalized"
        );

        self.fp_tree = Some(FPTree::new(frequent_items));
        self.config = Some(config);
        self.phase = ProcessingPhase::CountingFinalized;
        Ok(())
    }

    /// Open the tree for building
    pub fn init_tree(&mut self) -> MiningResult<()> {
        self.expect_phase(ProcessingPhase::CountingFinalized, "init tree")?;
        self.phase = ProcessingPhase::Building;
        Ok(())
    }

    /// Complete building phase
    pub fn finalize_building(&mut self) -> MiningResult<()> {
        self.expect_phase(ProcessingPhase::Building, "finalize building")?;
        if let Some(fp_tree) = &self.fp_tree {
            debug!(nodes = fp_tree.len(), "building finalized");
        }
        self.phase = ProcessingPhase::ReadyToMine;
        Ok(())
    }

    /// Rank of an item in the frequency order, once counting is finalized
    pub fn item_rank(&self, item: &str) -> Option<usize> {
        self.fp_tree.as_ref()?.frequent_items().order().rank(item)
    }

    pub fn is_frequent(&self, item: &str) -> bool {
        self.fp_tree
            .as_ref()
            .is_some_and(|tree| tree.frequent_items().contains(item))
    }
}
