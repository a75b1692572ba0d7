use crate::grammar::Symbol;
use crate::node::{Label, ParseTree};

/// Multi-line rendering, for reading trees rather than comparing them.
pub trait Rendered {
    fn rendered(&self) -> String;
}

/// One node per line, indented by depth, with its span:
///
/// ```text
/// S [0, 2)
///   A [0, 1)
///     "a" [0, 1)
/// ```
impl Rendered for ParseTree {
    fn rendered(&self) -> String {
        let mut out = String::new();
        render_into(self, 0, &mut out);
        out
    }
}

fn render_into(tree: &ParseTree, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&format!("{} [{}, {})\n", tree.root.rendered(), tree.left, tree.right));
    for t in &tree.subtrees {
        render_into(t, depth + 1, out);
    }
}

impl Rendered for [ParseTree] {
    fn rendered(&self) -> String {
        self.iter().map(|t| t.rendered()).collect::<Vec<_>>().join("\n")
    }
}

impl Rendered for [Symbol] {
    fn rendered(&self) -> String {
        self.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(" ")
    }
}

impl Rendered for Label {
    fn rendered(&self) -> String {
        match self {
            Label::Symbol(s) => s.to_string(),
            Label::Matched(m) => format!("\"{}\"", m.rendered()),
        }
    }
}
