//! The chart: one column per token boundary, each a deduplicated,
//! insertion-ordered list of items.
//!
//! All items live in a single arena owned by the chart and are addressed by
//! [`ItemId`]; columns and backpointer slots only ever hold ids.

use std::collections::HashMap;

use crate::earley::Changed;
use crate::item::{Item, ItemId, Signature};
use crate::node::ParseTree;

use log::trace;

#[derive(Debug, Default)]
struct Column {
    ids: Vec<ItemId>,
    index: HashMap<Signature, ItemId>,
}

#[derive(Debug)]
pub struct Chart {
    items: Vec<Item>,
    columns: Vec<Column>,
}

impl Chart {
    /// An empty chart for `token_count` tokens, i.e. `token_count + 1` columns.
    pub fn new(token_count: usize) -> Chart {
        let columns = (0..=token_count).map(|_| Column::default()).collect();
        Chart { items: Vec::new(), columns }
    }

    /// Inserts `item` into `column`, or merges its backpointers into the
    /// structurally equal item already there.
    ///
    /// Returns `Changed` if a new item was stored or an existing one gained a
    /// backpointer.
    pub fn add_or_merge(&mut self, item: Item, column: usize) -> Changed {
        assert_eq!(item.current(), column, "item ends at {} but is filed under column {}", item.current(), column);
        let signature = item.signature();
        if let Some(&existing) = self.columns[column].index.get(&signature) {
            let changed = self.items[existing.0].merge_backpointers(item.backpointers());
            if changed == Changed::Changed {
                trace!("merged into {}: {}", existing, self.items[existing.0]);
            }
            return changed;
        }
        let id = ItemId(self.items.len());
        trace!("added {}: {}", id, item);
        self.items.push(item);
        let col = &mut self.columns[column];
        col.ids.push(id);
        col.index.insert(signature, id);
        Changed::Changed
    }

    /// Number of columns (one more than the number of tokens).
    pub fn len(&self) -> usize { self.columns.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Ids in column `index`, in insertion order.
    pub fn column(&self, index: usize) -> &[ItemId] { &self.columns[index].ids }

    pub fn column_len(&self, index: usize) -> usize { self.columns[index].ids.len() }

    pub fn item(&self, id: ItemId) -> &Item { &self.items[id.0] }

    pub fn get(&self, id: ItemId) -> Option<ItemRef<'_>> {
        if id.0 < self.items.len() { Some(ItemRef { chart: self, id }) } else { None }
    }

    /// Every item, in id order.
    pub fn items(&self) -> impl Iterator<Item = ItemRef<'_>> {
        (0..self.items.len()).map(move |i| ItemRef { chart: self, id: ItemId(i) })
    }

    /// The first completed `root` item in the last column that spans the
    /// whole input.
    pub fn finished_root(&self, root: &str) -> Option<ItemRef<'_>> {
        self.finished_roots(root).into_iter().next()
    }

    /// Every completed `root` item spanning the whole input, one per root
    /// alternative that derived it.
    pub fn finished_roots(&self, root: &str) -> Vec<ItemRef<'_>> {
        let last = match self.columns.last() {
            Some(col) => col,
            None => return vec![],
        };
        last.ids
            .iter()
            .map(|&id| ItemRef { chart: self, id })
            .filter(|r| r.is_complete() && r.origin() == 0 && r.lhs().as_str() == root)
            .collect()
    }

    pub fn accepts(&self, root: &str) -> bool { self.finished_root(root).is_some() }

    /// All parse trees of the input, across every finished root item.
    pub fn trees(&self, root: &str) -> Vec<ParseTree> {
        self.finished_roots(root).iter().flat_map(|r| r.traverse()).collect()
    }
}

/// An item together with the chart that owns it, so that its children can be
/// followed.
#[derive(Copy, Clone)]
pub struct ItemRef<'c> {
    pub(crate) chart: &'c Chart,
    pub(crate) id: ItemId,
}

impl<'c> ItemRef<'c> {
    pub fn id(&self) -> ItemId { self.id }

    pub fn chart(&self) -> &'c Chart { self.chart }

    pub fn item(&self) -> &'c Item { self.chart.item(self.id) }

    /// Children recorded for right-hand-side position `slot`.
    pub fn children(&self, slot: usize) -> impl Iterator<Item = ItemRef<'c>> + 'c {
        let chart = self.chart;
        self.item().backpointers()[slot].iter().map(move |&id| ItemRef { chart, id })
    }
}

impl<'c> std::ops::Deref for ItemRef<'c> {
    type Target = Item;
    fn deref(&self) -> &Item { self.item() }
}

impl std::fmt::Debug for ItemRef<'_> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "ItemRef({}, {:?})", self.id, self.item())
    }
}

#[cfg(test)]
#[path = "tests/chart.rs"]
mod tests_for_chart;
