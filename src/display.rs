use crate::chart::{Chart, ItemRef};
use crate::grammar::Grammar;
use crate::item::Item;

/// `S → NP • VP [0, 1]`
impl std::fmt::Display for Item {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "{} →", self.lhs())?;
        for (i, s) in self.rhs().iter().enumerate() {
            if i == self.dot() {
                write!(w, " •")?;
            }
            write!(w, " {}", s)?;
        }
        if self.is_complete() {
            write!(w, " •")?;
        }
        write!(w, " [{}, {}]", self.origin(), self.current())
    }
}

/// `(id: 4) S → NP VP • [0, 2] {0: [1], 1: [3]}`; slots without children are
/// left out.
impl std::fmt::Display for ItemRef<'_> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "(id: {}) {}", self.id(), self.item())?;
        let filled: Vec<String> = self.backpointers()
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_empty())
            .map(|(i, slot)| {
                let ids: Vec<String> = slot.iter().map(|id| id.to_string()).collect();
                format!("{}: [{}]", i, ids.join(", "))
            })
            .collect();
        if !filled.is_empty() {
            write!(w, " {{{}}}", filled.join(", "))?;
        }
        Ok(())
    }
}

pub struct ColumnDisplay<'c> { chart: &'c Chart, index: usize }

impl Chart {
    pub fn display_column(&self, index: usize) -> ColumnDisplay<'_> {
        ColumnDisplay { chart: self, index }
    }
}

impl std::fmt::Display for ColumnDisplay<'_> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(w, "Column {}:", self.index)?;
        for &id in self.chart.column(self.index) {
            if let Some(item) = self.chart.get(id) {
                writeln!(w, "  {}", item)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Chart {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        for i in 0..self.len() {
            write!(w, "{}", self.display_column(i))?;
        }
        Ok(())
    }
}

/// Prints the rules back in `LHS -> A B | C` form, one line per left-hand
/// symbol.
impl std::fmt::Display for Grammar {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (lhs, alternatives) in self.rules() {
            let alternatives: Vec<String> = alternatives
                .iter()
                .map(|rhs| rhs.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(" "))
                .collect();
            writeln!(w, "{} -> {}", lhs, alternatives.join(" | "))?;
        }
        Ok(())
    }
}
