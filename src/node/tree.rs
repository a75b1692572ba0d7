//! Parse trees, and their extraction from a chart's backpointers.
//!
//! Extraction is exponential in the worst case: an ambiguous grammar can give
//! a sentence exponentially many trees, and every one of them is built. Callers
//! that need a bound must constrain their grammar or their input.

use crate::chart::{Chart, ItemRef};
use crate::item::ItemId;
use crate::node::Label;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ParseTree {
    pub root: Label,
    pub left: usize,
    pub right: usize,
    pub subtrees: Vec<ParseTree>,
}

impl ParseTree {
    pub fn is_leaf(&self) -> bool { self.subtrees.is_empty() }

    /// The matched input under this tree, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut accum = Vec::new();
        self.collect_leaves(&mut accum);
        accum
    }

    fn collect_leaves<'a>(&'a self, accum: &mut Vec<&'a str>) {
        if let Label::Matched(m) = &self.root {
            accum.extend(m.iter().map(|s| s.as_str()));
        }
        for t in &self.subtrees {
            t.collect_leaves(accum);
        }
    }

    /// Number of nodes, leaves included.
    pub fn size(&self) -> usize {
        1 + self.subtrees.iter().map(|t| t.size()).sum::<usize>()
    }
}

impl<'c> ItemRef<'c> {
    /// Every parse tree rooted at this item.
    ///
    /// A child that is already on the path from the root is skipped, so cyclic
    /// derivations (`A -> A`) contribute nothing instead of recursing forever.
    pub fn traverse(&self) -> Vec<ParseTree> {
        let mut path = Vec::new();
        traverse(self.chart, self.id, &mut path)
    }
}

fn traverse(chart: &Chart, id: ItemId, path: &mut Vec<ItemId>) -> Vec<ParseTree> {
    let item = chart.item(id);
    let (left, right) = (item.origin(), item.current());

    if item.is_leaf() {
        // A scanned token spans one position; an empty production spans none
        // and matched nothing, whatever epsilon markers its rhs holds.
        let matched = if left == right { vec![] } else { item.rhs().to_vec() };
        let leaf = ParseTree { root: Label::Matched(matched), left, right, subtrees: vec![] };
        return vec![ParseTree { root: Label::Symbol(item.lhs().clone()), left, right, subtrees: vec![leaf] }];
    }

    path.push(id);
    let mut rhs_subtrees: Vec<Vec<ParseTree>> = Vec::new();
    for slot in item.backpointers() {
        // skipped epsilon positions
        if slot.is_empty() {
            continue;
        }
        let mut alternatives = Vec::new();
        for &child in slot.iter() {
            if path.contains(&child) {
                continue;
            }
            alternatives.extend(traverse(chart, child, path));
        }
        rhs_subtrees.push(alternatives);
    }
    path.pop();

    let mut possible = Vec::new();
    combinations(&rhs_subtrees, &mut Vec::new(), &mut possible);
    possible
        .into_iter()
        .map(|subtrees| ParseTree { root: Label::Symbol(item.lhs().clone()), left, right, subtrees })
        .collect()
}

/// Every choice of one tree per slot in which each tree starts where the
/// previous one ended, e.g. `[[a(0,1), b(0,2)], [c(1,2), d(2,3)]]` yields
/// `[a, c]` and `[b, d]`.
fn combinations<'t>(
    slots: &'t [Vec<ParseTree>],
    stack: &mut Vec<&'t ParseTree>,
    result: &mut Vec<Vec<ParseTree>>,
) {
    let (first, rest) = match slots.split_first() {
        Some(split) => split,
        None => {
            result.push(stack.iter().map(|&t| t.clone()).collect());
            return;
        }
    };
    for tree in first {
        if stack.last().map_or(true, |prev| prev.right == tree.left) {
            stack.push(tree);
            combinations(rest, stack, result);
            stack.pop();
        }
    }
}

#[cfg(test)]
#[path = "../tests/tree.rs"]
mod tests_for_tree;
