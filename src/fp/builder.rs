use tracing::trace;

use super::order::FrequentItems;
use super::support_list::ItemSupportList;
use super::tree::FPTree;

/// Count `transactions`, keep the items reaching `threshold` and build the tree.
pub fn build_fp_tree(transactions: &[ItemSupportList], threshold: f64) -> FPTree {
    let frequent_items = FrequentItems::count(transactions, threshold);
    build_fp_tree_from_frequent_items(transactions, frequent_items)
}

/// Insert every transaction, pruned and sorted by `frequent_items`.
pub fn build_fp_tree_from_frequent_items(
    transactions: &[ItemSupportList],
    frequent_items: FrequentItems,
) -> FPTree {
    let mut fp_tree = FPTree::new(frequent_items);
    for transaction in transactions {
        fp_tree.insert_transaction(transaction);
    }

    trace!(
        transactions = transactions.len(),
        frequent_items = fp_tree.headers_descending().len(),
        nodes = fp_tree.len(),
        "built FP-tree"
    );
    fp_tree
}

/// Conditional tree for `item`, built from its conditional pattern base
/// under the same threshold.
pub fn build_conditional_fp_tree(fp_tree: &FPTree, item: &str, threshold: f64) -> FPTree {
    let pattern_base = fp_tree.conditional_pattern_base(item);
    build_fp_tree(&pattern_base, threshold)
}
