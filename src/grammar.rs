//! Context-free grammars in the plain `LHS -> A B | C` notation.
//!
//! A grammar maps each left-hand symbol to its alternatives, in declaration
//! order. Any symbol that never appears on a left-hand side is a terminal. The
//! reserved epsilon marker (by default [`EPSILON`]) denotes an empty
//! alternative and is skipped wherever a dot would otherwise rest on it.

use std::borrow::Borrow;
use std::path::Path;
use std::rc::Rc;
use std::sync::OnceLock;

use derive_more::{Display, From};
use linear_map::LinearMap;
use regex::Regex;
use thiserror::Error;

/// Epsilon marker used unless a grammar is built with another one.
pub const EPSILON: &str = "_EPSILON_";

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug, Display, From)]
pub struct Symbol(String);

impl Symbol {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for Symbol { fn from(s: &str) -> Self { Symbol(s.to_string()) } }
impl AsRef<str> for Symbol { fn as_ref(&self) -> &str { &self.0 } }
impl Borrow<str> for Symbol { fn borrow(&self) -> &str { &self.0 } }

/// One right-hand side. Shared between the grammar and every item built from it.
pub type Alternative = Rc<[Symbol]>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("rule `{rule}` has no `->` separator")]
    MissingArrow { rule: String },
    #[error("rule `{rule}` has nothing before `->`")]
    EmptyLeftHandSide { rule: String },
    #[error("rule `{rule}` has more than one symbol before `->`")]
    MultipleLeftHandSymbols { rule: String },
    #[error("lexicon line `{line}` has no `:` separator")]
    MissingCategorySeparator { line: String },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("grammar io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("grammar format error: {0}")]
    Format(#[from] FormatError),
}

fn rule_shape() -> &'static Regex {
    static RULE: OnceLock<Regex> = OnceLock::new();
    RULE.get_or_init(|| {
        Regex::new(r"(?s)^\s*(?P<lhs>.*?)\s*->(?P<rhs>.*)$").expect("rule pattern compiles")
    })
}

fn parse_rule(rule: &str) -> Result<(Symbol, Vec<Alternative>), FormatError> {
    let caps = rule_shape()
        .captures(rule)
        .ok_or_else(|| FormatError::MissingArrow { rule: rule.to_string() })?;
    let lhs = &caps["lhs"];
    if lhs.is_empty() {
        return Err(FormatError::EmptyLeftHandSide { rule: rule.to_string() });
    }
    if lhs.split_whitespace().nth(1).is_some() {
        return Err(FormatError::MultipleLeftHandSymbols { rule: rule.to_string() });
    }
    let alternatives: Vec<Alternative> = caps["rhs"]
        .split('|')
        .map(|alt| -> Alternative { alt.split_whitespace().map(Symbol::from).collect::<Vec<_>>().into() })
        .collect();
    Ok((lhs.into(), alternatives))
}

/// Maps a raw input token to the terminal categories it may satisfy.
///
/// The literal token is always tried as well, so an implementation only has
/// to report the categories beyond the token itself.
pub trait Classify {
    fn classify(&self, token: &str) -> Vec<Symbol>;
}

impl<F> Classify for F where F: Fn(&str) -> Vec<Symbol> {
    fn classify(&self, token: &str) -> Vec<Symbol> { self(token) }
}

/// A word list: token to categories, kept in the order entries were added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lexicon { words: LinearMap<String, Vec<Symbol>> }

impl Lexicon {
    pub fn new() -> Self { Lexicon { words: LinearMap::new() } }

    /// Adds `categories` to the ones already recorded for `token`.
    pub fn entry(mut self, token: &str, categories: &[&str]) -> Self {
        self.insert(token, categories);
        self
    }

    pub fn insert(&mut self, token: &str, categories: &[&str]) {
        let known = self.words.entry(token.to_string()).or_insert(Vec::new());
        for &c in categories {
            if !known.iter().any(|k| k.as_str() == c) {
                known.push(c.into());
            }
        }
    }

    /// Reads lines of the form `N: fish | fork | she`, one category per line.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let mut lexicon = Lexicon::new();
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (category, words) = line
                .split_once(':')
                .ok_or_else(|| FormatError::MissingCategorySeparator { line: line.to_string() })?;
            let category = category.trim();
            for word in words.split('|').flat_map(str::split_whitespace) {
                lexicon.insert(word, &[category]);
            }
        }
        Ok(lexicon)
    }

    pub fn categories(&self, token: &str) -> &[Symbol] {
        self.words.get(token).map(|v| &v[..]).unwrap_or(&[])
    }
}

impl Classify for Lexicon {
    fn classify(&self, token: &str) -> Vec<Symbol> { self.categories(token).to_vec() }
}

pub struct Grammar {
    rules: LinearMap<Symbol, Vec<Alternative>>,
    epsilon: Symbol,
    classifier: Option<Box<dyn Classify>>,
}

impl std::fmt::Debug for Grammar {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        w.debug_struct("Grammar")
            .field("rules", &self.rules)
            .field("epsilon", &self.epsilon)
            .field("classifier", &self.classifier.as_ref().map(|_| "<classifier>"))
            .finish()
    }
}

impl Grammar {
    /// Builds a grammar from rule strings, with the default epsilon marker and
    /// no terminal classification.
    pub fn new<I, S>(rules: I) -> Result<Self, FormatError>
    where I: IntoIterator<Item = S>, S: AsRef<str>
    {
        Grammar::builder().rules(rules).build()
    }

    pub fn builder() -> GrammarBuilder { GrammarBuilder::default() }

    /// One rule per line; blank lines and lines starting with `#` are ignored.
    pub fn from_text(text: &str) -> Result<Self, FormatError> {
        Grammar::builder().text(text).build()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = fs_err::read_to_string(path.as_ref())?;
        Ok(Grammar::from_text(&text)?)
    }

    /// `None` means `symbol` is a terminal.
    pub fn right_hand_sides(&self, symbol: &str) -> Option<&[Alternative]> {
        self.rules.get(symbol).map(|v| &v[..])
    }

    pub fn is_nonterminal(&self, symbol: &str) -> bool {
        self.rules.contains_key(symbol)
    }

    pub fn is_epsilon(&self, symbol: &str) -> bool {
        self.epsilon.as_str() == symbol
    }

    pub fn epsilon(&self) -> &Symbol { &self.epsilon }

    pub fn nonterminals(&self) -> impl Iterator<Item = &Symbol> {
        self.rules.keys()
    }

    pub(crate) fn rules(&self) -> impl Iterator<Item = (&Symbol, &Vec<Alternative>)> {
        self.rules.iter()
    }

    /// First position at or after `dot` whose symbol is not the epsilon marker.
    pub fn skip_epsilons(&self, rhs: &[Symbol], mut dot: usize) -> usize {
        while dot < rhs.len() && self.is_epsilon(rhs[dot].as_str()) {
            dot += 1;
        }
        dot
    }

    /// Every terminal symbol `token` may satisfy: its classification plus the
    /// literal token. The epsilon marker is never among them.
    pub fn terminals_for(&self, token: &str) -> Vec<Symbol> {
        if self.is_epsilon(token) {
            return vec![];
        }
        let mut terminals = match &self.classifier {
            Some(c) => c.classify(token),
            None => vec![],
        };
        terminals.retain(|t| !self.is_epsilon(t.as_str()));
        if !terminals.iter().any(|t| t.as_str() == token) {
            terminals.push(token.into());
        }
        terminals
    }
}

#[derive(Default)]
pub struct GrammarBuilder {
    rules: Vec<String>,
    epsilon: Option<Symbol>,
    classifier: Option<Box<dyn Classify>>,
}

impl GrammarBuilder {
    pub fn rule(mut self, rule: impl AsRef<str>) -> Self {
        self.rules.push(rule.as_ref().to_string());
        self
    }

    pub fn rules<I, S>(self, rules: I) -> Self
    where I: IntoIterator<Item = S>, S: AsRef<str>
    {
        rules.into_iter().fold(self, |b, r| b.rule(r))
    }

    pub fn text(self, text: &str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'));
        self.rules(lines)
    }

    pub fn epsilon(mut self, marker: impl Into<Symbol>) -> Self {
        self.epsilon = Some(marker.into());
        self
    }

    pub fn classifier(mut self, classifier: impl Classify + 'static) -> Self {
        self.classifier = Some(Box::new(classifier));
        self
    }

    pub fn build(self) -> Result<Grammar, FormatError> {
        let mut rules: LinearMap<Symbol, Vec<Alternative>> = LinearMap::new();
        for rule in &self.rules {
            let (lhs, alternatives) = parse_rule(rule)?;
            rules.entry(lhs).or_insert(Vec::new()).extend(alternatives);
        }
        Ok(Grammar {
            rules,
            epsilon: self.epsilon.unwrap_or_else(|| EPSILON.into()),
            classifier: self.classifier,
        })
    }
}

#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests_for_grammar;
