use std::cmp::Ordering;
use std::collections::HashMap;

use super::support_list::ItemSupportList;

/// Ranks items by descending support, ties broken by identifier.
///
/// Built only from a [`FrequentItems`] snapshot, so an order can never
/// disagree with the table it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyOrder {
    ranks: HashMap<String, usize>,
}

impl FrequencyOrder {
    fn from_sorted(items: &[String]) -> Self {
        let ranks = items
            .iter()
            .enumerate()
            .map(|(rank, item)| (item.clone(), rank))
            .collect();
        Self { ranks }
    }

    /// Position of `item` in the order; 0 is the most frequent.
    pub fn rank(&self, item: &str) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    /// Unranked items sort after every ranked one, by identifier.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match (self.rank(a), self.rank(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }
}

/// Immutable snapshot of the aggregate support table after pruning.
///
/// The pruned table, its descending item list and the comparator are made in
/// one constructor; there is no way to change the table afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequentItems {
    table: ItemSupportList,
    order: FrequencyOrder,
    threshold: f64,
}

impl FrequentItems {
    /// Sum every item's support over `transactions`, in a single pass.
    pub fn aggregate(transactions: &[ItemSupportList]) -> ItemSupportList {
        let mut table = ItemSupportList::new("frequent items");
        for transaction in transactions {
            for (item, support) in transaction.iter() {
                table.add_support(item, support);
            }
        }
        table
    }

    /// Count `transactions` and keep the items reaching `threshold`.
    pub fn count(transactions: &[ItemSupportList], threshold: f64) -> Self {
        Self::from_aggregate(Self::aggregate(transactions), threshold)
    }

    /// Drop the items below `threshold` and sort the survivors descending.
    pub fn from_aggregate(mut table: ItemSupportList, threshold: f64) -> Self {
        let infrequent: Vec<String> = table
            .iter()
            .filter(|&(_, support)| support < threshold)
            .map(|(item, _)| item.to_owned())
            .collect();
        for item in &infrequent {
            table.set_support(item, None);
        }
        table.sort_descending();
        let order = FrequencyOrder::from_sorted(table.items());
        Self {
            table,
            order,
            threshold,
        }
    }

    /// Frequent items, most frequent first.
    pub fn items(&self) -> &[String] {
        self.table.items()
    }

    pub fn support(&self, item: &str) -> Option<f64> {
        self.table.support(item)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.table.contains(item)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn order(&self) -> &FrequencyOrder {
        &self.order
    }

    pub fn table(&self) -> &ItemSupportList {
        &self.table
    }

    /// Remove the items of `transaction` this snapshot does not know, keep
    /// the per-item supports of the survivors and sort them by this order.
    pub fn prune_and_sort(&self, transaction: &ItemSupportList) -> ItemSupportList {
        let mut pruned = ItemSupportList::new(format!("{}pruned", transaction.name()));
        for (item, support) in transaction.iter() {
            if self.contains(item) {
                pruned.set_support(item, Some(support));
            }
        }
        pruned.sort_items(&self.order);
        pruned
    }
}
