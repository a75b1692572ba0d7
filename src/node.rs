use crate::grammar::Symbol;

mod tree;

pub use tree::ParseTree;

/// What a parse-tree node stands for.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Label {
    /// An interior node: the left-hand symbol that was derived.
    Symbol(Symbol),
    /// A leaf: the input that was matched. Empty for an empty production.
    Matched(Vec<Symbol>),
}

const NONTERM_BRACKETS: (char, char) = ('(', ')');

impl Label {
    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Label::Symbol(s) => Some(s),
            Label::Matched(_) => None,
        }
    }

    pub fn matched(&self) -> Option<&[Symbol]> {
        match self {
            Label::Symbol(_) => None,
            Label::Matched(m) => Some(m),
        }
    }

    /// Writes the label, then `children` inside brackets if there are any.
    fn fmt_map(
        &self,
        w: &mut std::fmt::Formatter,
        children: &[ParseTree],
        f: impl Fn(&ParseTree, &mut std::fmt::Formatter) -> std::fmt::Result) -> std::fmt::Result
    {
        match self {
            Label::Matched(m) => {
                let words: Vec<&str> = m.iter().map(|s| s.as_str()).collect();
                write!(w, "\"{}\"", words.join(" "))?;
            }
            Label::Symbol(s) => write!(w, "{}", s)?,
        }
        if children.is_empty() {
            return Ok(());
        }
        let (b, d) = NONTERM_BRACKETS;
        write!(w, "{}", b)?;
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                write!(w, " ")?;
            }
            f(child, w)?;
        }
        write!(w, "{}", d)
    }
}

impl std::fmt::Display for ParseTree {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.root.fmt_map(w, &self.subtrees, |t, w| write!(w, "{}", t))
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.fmt_map(w, &[], |_, _| Ok(()))
    }
}
