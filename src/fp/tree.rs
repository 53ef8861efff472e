use std::collections::HashMap;

use super::order::FrequentItems;
use super::support_list::ItemSupportList;

#[derive(Debug, Clone)]
pub struct FPNode {
    pub item: Option<String>,
    pub support: f64,
    pub parent: Option<usize>,
    pub children: HashMap<String, usize>,
}

/// Prefix tree over frequency-sorted transactions.
///
/// Nodes live in `nodes`; parents own children through indices and the
/// header table keeps the same indices, per item, in insertion order.
#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    pub header_table: HashMap<String, Vec<usize>>,
    pub root_index: usize,
    frequent_items: FrequentItems,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            support: 0.0,
            parent: None,
            children: HashMap::new(),
        }
    }

    pub fn new_item(item: &str, parent: usize) -> Self {
        Self {
            item: Some(item.to_owned()),
            support: 0.0,
            parent: Some(parent),
            children: HashMap::new(),
        }
    }
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new(FrequentItems::default())
    }
}

impl FPTree {
    pub fn new(frequent_items: FrequentItems) -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
            root_index: 0,
            frequent_items,
        }
    }

    pub fn frequent_items(&self) -> &FrequentItems {
        &self.frequent_items
    }

    /// Frequent items, most frequent first. Mining walks this backwards.
    pub fn headers_descending(&self) -> &[String] {
        self.frequent_items.items()
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[self.root_index].children.is_empty()
    }

    pub fn occurrences(&self, item: &str) -> &[usize] {
        self.header_table.get(item).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Prune `transaction` to this tree's frequent items, sort it and insert it.
    pub fn insert_transaction(&mut self, transaction: &ItemSupportList) {
        let pruned = self.frequent_items.prune_and_sort(transaction);
        let path: Vec<(&str, f64)> = pruned.iter().collect();
        self.insert(self.root_index, &path);
    }

    /// Add `path` below `node`, each step adding its weight to the node it
    /// passes through.
    pub fn insert(&mut self, node: usize, path: &[(&str, f64)]) {
        let Some((&(item, weight), rest)) = path.split_first() else {
            return;
        };

        let child = match self.nodes[node].children.get(item) {
            Some(&child) => child,
            None => {
                let child = self.nodes.len();
                self.nodes.push(FPNode::new_item(item, node));
                self.nodes[node].children.insert(item.to_owned(), child);
                self.header_table.entry(item.to_owned()).or_default().push(child);
                child
            }
        };
        self.nodes[child].support += weight;
        self.insert(child, rest);
    }

    /// Support of `item` summed over all of its occurrences.
    pub fn item_support(&self, item: &str) -> f64 {
        self.occurrences(item)
            .iter()
            .map(|&idx| self.nodes[idx].support)
            .sum()
    }

    /// Items on the path from the root down to `idx`, excluding `idx` itself.
    fn prefix_of(&self, idx: usize) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self.nodes[idx].parent;

        while let Some(i) = current {
            if let Some(item) = &self.nodes[i].item {
                path.push(item.as_str());
            }
            current = self.nodes[i].parent;
        }

        path.reverse();
        path
    }

    /// One synthetic transaction per occurrence of `item`: the items above it,
    /// root first, all carrying the occurrence's own support. Occurrences
    /// hanging directly off the root have no prefix and contribute nothing.
    pub fn conditional_pattern_base(&self, item: &str) -> Vec<ItemSupportList> {
        self.occurrences(item)
            .iter()
            .filter_map(|&idx| {
                let path = self.prefix_of(idx);
                (!path.is_empty()).then(|| {
                    ItemSupportList::transaction(
                        format!("{item}-prefix"),
                        path,
                        self.nodes[idx].support,
                    )
                })
            })
            .collect()
    }

    /// Every root-to-occurrence path of `item`, the item included, carrying
    /// the occurrence's support.
    pub fn patterns_ending_with(&self, item: &str) -> Vec<ItemSupportList> {
        self.occurrences(item)
            .iter()
            .map(|&idx| {
                let mut path = self.prefix_of(idx);
                path.push(item);
                ItemSupportList::transaction(format!("{item}-path"), path, self.nodes[idx].support)
            })
            .collect()
    }

    /// True when no node has more than one child.
    pub fn has_one_branch(&self) -> bool {
        self.nodes.iter().all(|node| node.children.len() <= 1)
    }

    /// `(item, support)` for each node of the branch, root side first. Only
    /// meaningful when [`has_one_branch`](Self::has_one_branch) holds.
    pub fn single_branch(&self) -> Vec<(String, f64)> {
        let mut path = Vec::new();
        let mut current_index = self.root_index;

        while let Some(&child_index) = self.nodes[current_index].children.values().next() {
            let child_node = &self.nodes[child_index];
            if let Some(item) = &child_node.item {
                path.push((item.clone(), child_node.support));
            }
            current_index = child_index;
        }
        path
    }
}
