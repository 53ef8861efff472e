use tracing::{debug, info, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::combinations::all_combinations;
use super::storage::FrequentPattern;
use super::support_list::ItemSupportList;
use super::tree::FPTree;
use crate::config::MinerConfig;
use crate::error::{MiningError, MiningResult};

/// Mine every item set reaching `min_support` over `transactions`.
pub fn mine(
    transactions: &[ItemSupportList],
    min_support: i64,
) -> MiningResult<Vec<FrequentPattern>> {
    FPGrowthMiner::new(min_support)?.mine(transactions)
}

/// Recursive FP-Growth.
///
/// Every pattern grown from a conditional tree is unioned with the pattern
/// that conditioned it and returned to the caller, and the single-branch
/// base case prepends the conditioning pattern to each combination. The
/// result therefore holds every frequent item set exactly once.
#[derive(Debug, Clone, Default)]
pub struct FPGrowthMiner {
    config: MinerConfig,
}

impl FPGrowthMiner {
    pub fn new(min_support: i64) -> MiningResult<Self> {
        Self::from_config(MinerConfig::new(min_support))
    }

    pub fn from_config(config: MinerConfig) -> MiningResult<Self> {
        config.validate()?;
        if config.parallel && cfg!(not(feature = "parallel")) {
            warn!(
                "parallel mining requested but the `parallel` feature is disabled; \
                 mining sequentially"
            );
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold()
    }

    /// Validate `transactions` and build the initial tree over them.
    pub fn build_tree(&self, transactions: &[ItemSupportList]) -> MiningResult<FPTree> {
        validate_transactions(transactions)?;
        Ok(build_fp_tree(transactions, self.threshold()))
    }

    pub fn mine(&self, transactions: &[ItemSupportList]) -> MiningResult<Vec<FrequentPattern>> {
        let fp_tree = self.build_tree(transactions)?;
        debug!(
            transactions = transactions.len(),
            frequent_items = fp_tree.headers_descending().len(),
            nodes = fp_tree.len(),
            min_support = self.config.min_support,
            "built initial FP-tree"
        );

        // The empty conditioning pattern makes the general case seed one
        // single-item pattern per frequent item, least frequent first.
        let patterns = self.fp_growth(&fp_tree, &ItemSupportList::default());
        info!(patterns = patterns.len(), "mining complete");
        Ok(patterns)
    }

    /// Patterns of `fp_tree`, each unioned with `pattern_a`.
    pub fn fp_growth(&self, fp_tree: &FPTree, pattern_a: &ItemSupportList) -> Vec<FrequentPattern> {
        if fp_tree.has_one_branch() {
            return single_branch_patterns(fp_tree, pattern_a);
        }

        self.grow_items(fp_tree, pattern_a)
            .into_iter()
            .flatten()
            .collect()
    }

    fn grow_items(
        &self,
        fp_tree: &FPTree,
        pattern_a: &ItemSupportList,
    ) -> Vec<Vec<FrequentPattern>> {
        let items = fp_tree.headers_descending();

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                return items
                    .par_iter()
                    .rev()
                    .map(|item| self.grow_item(fp_tree, pattern_a, item))
                    .collect();
            }
        }

        items
            .iter()
            .rev()
            .map(|item| self.grow_item(fp_tree, pattern_a, item))
            .collect()
    }

    fn grow_item(
        &self,
        fp_tree: &FPTree,
        pattern_a: &ItemSupportList,
        item: &str,
    ) -> Vec<FrequentPattern> {
        let support = fp_tree
            .frequent_items()
            .support(item)
            .unwrap_or_else(|| fp_tree.item_support(item));
        let pattern_b = generate_pattern_b(item, support, pattern_a);

        let conditional_tree = build_conditional_fp_tree(fp_tree, item, self.threshold());
        trace!(
            item,
            support,
            depth = pattern_b.len(),
            conditional_nodes = conditional_tree.len(),
            "growing pattern"
        );

        let mut patterns = vec![FrequentPattern::from(&pattern_b)];
        patterns.extend(self.fp_growth(&conditional_tree, &pattern_b));
        patterns
    }
}

/// `pattern_a` plus `item`, every item carrying `support`.
pub fn generate_pattern_b(
    item: &str,
    support: f64,
    pattern_a: &ItemSupportList,
) -> ItemSupportList {
    let name = format!("{item}{}", pattern_a.name());
    let mut pattern_b =
        ItemSupportList::transaction(name, pattern_a.items().iter().cloned(), support);
    pattern_b.set_support(item, Some(support));
    pattern_b
}

/// Every ordered combination of the single branch's items, joined with
/// `pattern_a`. Node supports only shrink down a branch, so the support of a
/// combination is that of its deepest node.
pub fn single_branch_patterns(
    fp_tree: &FPTree,
    pattern_a: &ItemSupportList,
) -> Vec<FrequentPattern> {
    let branch = fp_tree.single_branch();
    all_combinations(&branch)
        .into_iter()
        .map(|combo| {
            let support = combo
                .iter()
                .map(|&(_, support)| support)
                .fold(f64::INFINITY, f64::min);
            let items = pattern_a
                .items()
                .iter()
                .cloned()
                .chain(combo.into_iter().map(|(item, _)| item))
                .collect();
            FrequentPattern::new(items, support)
        })
        .collect()
}

/// Reject weights that would corrupt the counts.
pub fn validate_transactions(transactions: &[ItemSupportList]) -> MiningResult<()> {
    for (index, transaction) in transactions.iter().enumerate() {
        for (item, weight) in transaction.iter() {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(MiningError::InvalidWeight {
                    index,
                    item: item.to_owned(),
                    weight,
                });
            }
        }
    }
    Ok(())
}
