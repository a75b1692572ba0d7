//! Traditional Earley: gradually build, from left to right, the set of Earley
//! items for each position in the input.
//!
//! Column `i` is driven to a fixpoint before column `i+1` is looked at. Within
//! a column, the predictor, scanner and completer are applied to every item in
//! insertion order, re-reading the column length as items are appended, and
//! whole passes are repeated until one of them changes nothing. The repetition
//! is what makes epsilon productions work: completing an empty item can enable
//! a prediction that was already made, and vice versa.
//!
//! Termination follows from deduplication: a column can only ever hold one
//! item per `(lhs, rhs, dot, origin)` and a backpointer slot can only ever hold
//! ids of existing items, so the amount of information in a column is bounded.

use crate::chart::Chart;
use crate::grammar::Grammar;
use crate::item::{Item, ItemId};

use log::debug;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Changed { Unchanged, Changed }

impl std::ops::BitOrAssign for Changed {
    fn bitor_assign(&mut self, rhs: Changed) {
        if rhs == Changed::Changed {
            *self = Changed::Changed;
        }
    }
}

/// Knobs that affect diagnostics only, never the resulting chart.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Log every converged column at `debug` level.
    pub trace_columns: bool,
}

/// Called with each column index once that column has converged.
pub type ColumnObserver<'o> = &'o mut dyn FnMut(usize, &Chart);

/// Parses `tokens` against `grammar` starting from `root`, returning the
/// converged chart. Check [`Chart::finished_root`] for the outcome.
pub fn parse<S: AsRef<str>>(tokens: &[S], grammar: &Grammar, root: &str) -> Chart {
    parse_with(tokens, grammar, root, ParseOptions::default(), None)
}

pub fn parse_with<S: AsRef<str>>(
    tokens: &[S],
    grammar: &Grammar,
    root: &str,
    options: ParseOptions,
    mut observer: Option<ColumnObserver<'_>>,
) -> Chart {
    let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
    let mut config = EarleyConfig::new(grammar, &tokens);
    config.seed(root);
    for i in 0..=tokens.len() {
        config.step(i);
        if options.trace_columns {
            debug!("{}", config.chart.display_column(i));
        }
        if let Some(observer) = observer.as_deref_mut() {
            observer(i, &config.chart);
        }
    }
    debug!("parsed {} tokens in {} passes; {} items", tokens.len(), config.pass_count, config.chart.items().count());
    config.chart
}

struct EarleyConfig<'g, 't> {
    grammar: &'g Grammar,
    tokens: &'t [&'t str],
    chart: Chart,
    pass_count: usize,
}

impl<'g, 't> EarleyConfig<'g, 't> {
    fn new(grammar: &'g Grammar, tokens: &'t [&'t str]) -> Self {
        EarleyConfig { grammar, tokens, chart: Chart::new(tokens.len()), pass_count: 0 }
    }

    fn seed(&mut self, root: &str) {
        let alternatives = match self.grammar.right_hand_sides(root) {
            Some(alternatives) => alternatives,
            None => {
                debug!("root symbol `{}` has no rules", root);
                return;
            }
        };
        for rhs in alternatives {
            let item = Item::predicted(root.into(), rhs.clone(), 0, self.grammar);
            self.chart.add_or_merge(item, 0);
        }
    }

    /// Drives column `i` to its fixpoint.
    fn step(&mut self, i: usize) {
        loop {
            if let Changed::Unchanged = self.apply_rules(i) {
                break;
            }
        }
    }

    /// One pass over column `i`, including items appended during the pass.
    fn apply_rules(&mut self, i: usize) -> Changed {
        self.pass_count += 1;
        let mut changed = Changed::Unchanged;
        let mut j = 0;
        while j < self.chart.column_len(i) {
            let id = self.chart.column(i)[j];
            let (complete, expects_nonterminal) = {
                let item = self.chart.item(id);
                (item.is_complete(), item.expects_nonterminal(self.grammar))
            };
            changed |= match (complete, expects_nonterminal) {
                (true, _) => self.completer(id),
                (false, true) => self.predictor(id),
                (false, false) => self.scanner(id, i),
            };
            j += 1;
        }
        changed
    }

    fn predictor(&mut self, id: ItemId) -> Changed {
        let predicted = self.chart.item(id).predictions(self.grammar);
        self.insert_all(predicted)
    }

    fn scanner(&mut self, id: ItemId, i: usize) -> Changed {
        let token = self.tokens.get(i).copied();
        match self.chart.item(id).scan(self.grammar, token) {
            Some(scanned) => {
                let column = scanned.current();
                self.chart.add_or_merge(scanned, column)
            }
            None => Changed::Unchanged,
        }
    }

    fn completer(&mut self, id: ItemId) -> Changed {
        let advanced = self.chart.item(id).completions(id, self.grammar, &self.chart);
        self.insert_all(advanced)
    }

    fn insert_all(&mut self, items: Vec<Item>) -> Changed {
        let mut changed = Changed::Unchanged;
        for item in items {
            let column = item.current();
            changed |= self.chart.add_or_merge(item, column);
        }
        changed
    }
}

#[cfg(test)]
#[path = "tests/earley.rs"]
mod tests_for_earley;
