//! Earley items: dotted rules with a span and per-slot backpointers.
//!
//! An item `(lhs, rhs, dot, origin, current)` records that `rhs[..dot]` has
//! been matched against the input from `origin` to `current`. Each position of
//! `rhs` has a backpointer slot holding the ids of the completed items that
//! matched it; more than one id in a slot is how ambiguity is recorded.

use crate::chart::Chart;
use crate::earley::Changed;
use crate::grammar::{Alternative, Grammar, Symbol};

use derive_more::Display;
use linear_map::set::LinearSet;

/// Position of an item in its chart. Assigned at first insertion, never reused.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display)]
pub struct ItemId(pub(crate) usize);

impl ItemId {
    pub fn index(self) -> usize { self.0 }
}

/// Children that matched one right-hand-side position.
pub type Slot = LinearSet<ItemId>;

/// The structural identity of an item; backpointers play no part in it.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct Signature {
    lhs: Symbol,
    rhs: Alternative,
    dot: usize,
    origin: usize,
    current: usize,
}

#[derive(Clone, Debug)]
pub struct Item {
    lhs: Symbol,
    rhs: Alternative,
    dot: usize,
    origin: usize,
    current: usize,
    backpointers: Vec<Slot>,
}

impl PartialEq for Item {
    fn eq(&self, other: &Item) -> bool {
        self.lhs == other.lhs &&
            self.dot == other.dot &&
            self.origin == other.origin &&
            self.current == other.current &&
            self.rhs == other.rhs
    }
}

impl Eq for Item {}

impl Item {
    pub fn new(lhs: Symbol, rhs: Alternative, dot: usize, origin: usize, current: usize) -> Item {
        assert!(dot <= rhs.len(), "dot {} past end of {} symbols", dot, rhs.len());
        let backpointers = (0..rhs.len()).map(|_| Slot::new()).collect();
        Item { lhs, rhs, dot, origin, current, backpointers }
    }

    /// A freshly predicted item at `position`, with its dot past any leading
    /// epsilon markers.
    pub fn predicted(lhs: Symbol, rhs: Alternative, position: usize, grammar: &Grammar) -> Item {
        let dot = grammar.skip_epsilons(&rhs, 0);
        Item::new(lhs, rhs, dot, position, position)
    }

    pub fn lhs(&self) -> &Symbol { &self.lhs }
    pub fn rhs(&self) -> &[Symbol] { &self.rhs }
    pub fn dot(&self) -> usize { self.dot }
    pub fn origin(&self) -> usize { self.origin }
    pub fn current(&self) -> usize { self.current }
    pub fn backpointers(&self) -> &[Slot] { &self.backpointers }

    pub fn is_complete(&self) -> bool { self.dot == self.rhs.len() }

    /// The symbol right after the dot, if any.
    pub fn next_symbol(&self) -> Option<&Symbol> { self.rhs.get(self.dot) }

    pub fn expects_nonterminal(&self, grammar: &Grammar) -> bool {
        self.next_symbol().map_or(false, |s| grammar.is_nonterminal(s.as_str()))
    }

    /// True when no slot has a child: a scanned token, or an empty production.
    pub fn is_leaf(&self) -> bool {
        self.backpointers.iter().all(|slot| slot.is_empty())
    }

    pub(crate) fn signature(&self) -> Signature {
        Signature {
            lhs: self.lhs.clone(),
            rhs: self.rhs.clone(),
            dot: self.dot,
            origin: self.origin,
            current: self.current,
        }
    }

    /// Items for every alternative of the nonterminal after the dot.
    pub fn predictions(&self, grammar: &Grammar) -> Vec<Item> {
        let nonterm = match self.next_symbol() {
            Some(s) if !self.is_complete() => s,
            _ => return vec![],
        };
        grammar.right_hand_sides(nonterm.as_str())
            .unwrap_or(&[])
            .iter()
            .map(|rhs| Item::predicted(nonterm.clone(), rhs.clone(), self.current, grammar))
            .collect()
    }

    /// The completed one-symbol item for `token`, if it satisfies the terminal
    /// after the dot. `token` is `None` past the end of input.
    pub fn scan(&self, grammar: &Grammar, token: Option<&str>) -> Option<Item> {
        let term = self.next_symbol()?;
        let token = token?;
        if !grammar.terminals_for(token).contains(term) {
            return None;
        }
        let matched: Alternative = vec![Symbol::from(token)].into();
        Some(Item::new(term.clone(), matched, 1, self.current, self.current + 1))
    }

    /// Advances this (waiting) item over its next symbol, which `child`
    /// completed up to position `current`.
    pub fn advanced(&self, child: ItemId, current: usize, grammar: &Grammar) -> Item {
        let dot = grammar.skip_epsilons(&self.rhs, self.dot + 1);
        let mut backpointers = self.backpointers.clone();
        backpointers[self.dot].insert(child);
        Item {
            lhs: self.lhs.clone(),
            rhs: self.rhs.clone(),
            dot,
            origin: self.origin,
            current,
            backpointers,
        }
    }

    /// Items advanced by this completed item (known in the chart as `id`)
    /// among those waiting on `lhs` in column `origin`.
    pub fn completions(&self, id: ItemId, grammar: &Grammar, chart: &Chart) -> Vec<Item> {
        if !self.is_complete() {
            return vec![];
        }
        chart.column(self.origin)
            .iter()
            .map(|&waiting| chart.item(waiting))
            .filter(|waiting| waiting.next_symbol() == Some(&self.lhs))
            .map(|waiting| waiting.advanced(id, self.current, grammar))
            .collect()
    }

    /// Unions `other` into this item's slots, reporting whether any slot grew.
    pub fn merge_backpointers(&mut self, other: &[Slot]) -> Changed {
        let mut changed = Changed::Unchanged;
        for (mine, theirs) in self.backpointers.iter_mut().zip(other) {
            for &child in theirs.iter() {
                if mine.insert(child) {
                    changed = Changed::Changed;
                }
            }
        }
        changed
    }
}

#[cfg(test)]
#[path = "tests/item.rs"]
mod tests_for_item;
