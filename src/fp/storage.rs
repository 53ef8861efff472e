use serde::{Deserialize, Serialize};

use super::support_list::ItemSupportList;

/// A frequent item set and the support it was discovered with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequentPattern {
    /// Sorted ascending, no duplicates.
    pub items: Vec<String>,
    pub support: f64,
}

impl FrequentPattern {
    pub fn new(mut items: Vec<String>, support: f64) -> Self {
        items.sort_unstable();
        items.dedup();
        Self { items, support }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.binary_search_by(|candidate| candidate.as_str().cmp(item)).is_ok()
    }
}

impl From<&ItemSupportList> for FrequentPattern {
    /// A growing pattern; its support is the one all of its items share.
    fn from(pattern: &ItemSupportList) -> Self {
        Self::new(pattern.items().to_vec(), pattern.min_support().unwrap_or(0.0))
    }
}

/// All patterns of one size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequentLevel {
    pub itemset_size: usize,
    pub patterns: Vec<FrequentPattern>,
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            itemset_size,
            patterns: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[String]> {
        self.patterns.iter().map(|pattern| pattern.items.as_slice())
    }
}

/// Group patterns by size; `levels[k - 1]` holds the k-item patterns.
pub fn group_by_size(patterns: &[FrequentPattern]) -> Vec<FrequentLevel> {
    let mut levels: Vec<FrequentLevel> = Vec::new();
    for pattern in patterns.iter().filter(|pattern| !pattern.is_empty()) {
        let size = pattern.len();
        while levels.len() < size {
            levels.push(FrequentLevel::new(levels.len() + 1));
        }
        levels[size - 1].patterns.push(pattern.clone());
    }
    levels
}
