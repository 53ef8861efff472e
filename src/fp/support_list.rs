use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::order::FrequencyOrder;

/// Ordered, duplicate-free items with a support value per item.
///
/// The same structure plays three roles: a transaction (every item carries
/// the transaction weight), an aggregate table (every item carries its summed
/// weight) and a growing pattern (every item carries the pattern support).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawItemSupportList")]
pub struct ItemSupportList {
    name: String,
    items: Vec<String>,
    supports: HashMap<String, f64>,
}

/// Unchecked wire form; every item must be listed once and carry a support.
#[derive(Deserialize)]
struct RawItemSupportList {
    #[serde(default)]
    name: String,
    items: Vec<String>,
    supports: HashMap<String, f64>,
}

impl TryFrom<RawItemSupportList> for ItemSupportList {
    type Error = String;

    fn try_from(raw: RawItemSupportList) -> Result<Self, Self::Error> {
        let mut list = Self::new(raw.name);
        for item in raw.items {
            if list.contains(&item) {
                return Err(format!("item `{item}` is listed more than once"));
            }
            let Some(&support) = raw.supports.get(&item) else {
                return Err(format!("item `{item}` has no support"));
            };
            list.set_support(&item, Some(support));
        }
        if list.supports.len() != raw.supports.len() {
            return Err("supports name items missing from the item list".to_owned());
        }
        Ok(list)
    }
}

impl ItemSupportList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            supports: HashMap::new(),
        }
    }

    /// A transaction whose items all carry `weight`. Repeated items are kept once.
    pub fn transaction<I, S>(name: impl Into<String>, items: I, weight: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new(name);
        for item in items {
            let item = item.into();
            if !list.supports.contains_key(&item) {
                list.set_support(&item, Some(weight));
            }
        }
        list
    }

    /// An unnamed transaction of weight 1.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::transaction("", items, 1.0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.supports.contains_key(item)
    }

    pub fn support(&self, item: &str) -> Option<f64> {
        self.supports.get(item).copied()
    }

    /// Items paired with their supports, in list order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.items
            .iter()
            .map(move |item| (item.as_str(), self.supports[item]))
    }

    /// Accumulate `delta` onto `item`, appending it if absent.
    pub fn add_support(&mut self, item: &str, delta: f64) {
        match self.supports.get_mut(item) {
            Some(support) => *support += delta,
            None => {
                self.items.push(item.to_owned());
                self.supports.insert(item.to_owned(), delta);
            }
        }
    }

    /// Overwrite the support of `item`. `None` removes the item entirely.
    pub fn set_support(&mut self, item: &str, support: Option<f64>) {
        match support {
            Some(value) => {
                if self.supports.insert(item.to_owned(), value).is_none() {
                    self.items.push(item.to_owned());
                }
            }
            None => {
                if self.supports.remove(item).is_some() {
                    self.items.retain(|existing| existing != item);
                }
            }
        }
    }

    /// Reorder the items by `order`.
    pub fn sort_items(&mut self, order: &FrequencyOrder) {
        self.items.sort_by(|a, b| order.compare(a, b));
    }

    /// Reorder by this list's own supports, descending, ties by identifier.
    pub fn sort_descending(&mut self) {
        let supports = &self.supports;
        self.items
            .sort_by(|a, b| supports[b].total_cmp(&supports[a]).then_with(|| a.cmp(b)));
    }

    /// Smallest support carried by any item; the weight of a transaction.
    pub fn min_support(&self) -> Option<f64> {
        self.supports.values().copied().reduce(f64::min)
    }
}
