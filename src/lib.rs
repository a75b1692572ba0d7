//! An Earley chart parser for arbitrary context-free grammars, including
//! ambiguous ones and ones with empty (epsilon) productions.
//!
//! ```
//! use earley_chart::{parse, Grammar, Lexicon};
//!
//! let lexicon = Lexicon::new()
//!     .entry("she", &["N"])
//!     .entry("eats", &["V"])
//!     .entry("fish", &["N"]);
//! let grammar = Grammar::builder()
//!     .rules(["S -> NP VP", "VP -> V NP", "NP -> N"])
//!     .classifier(lexicon)
//!     .build()
//!     .unwrap();
//!
//! let chart = parse(&["she", "eats", "fish"], &grammar, "S");
//! let trees = chart.finished_root("S").unwrap().traverse();
//! assert_eq!(trees.len(), 1);
//! assert_eq!(trees[0].to_string(), r#"S(NP(N("she")) VP(V("eats") NP(N("fish"))))"#);
//! ```
//!
//! Tokenization is the caller's business: `parse` takes the tokens already
//! split. A token matches a terminal symbol if it is spelled the same, or if
//! the grammar's [`Classify`] implementation lists that symbol for it.

pub mod grammar;
pub mod item;
pub mod chart;
pub mod earley;
pub mod node;

mod display;
mod rendering;

pub use chart::{Chart, ItemRef};
pub use display::ColumnDisplay;
pub use earley::{parse, parse_with, Changed, ColumnObserver, ParseOptions};
pub use grammar::{Classify, FormatError, Grammar, GrammarBuilder, Lexicon, LoadError, Symbol, EPSILON};
pub use item::{Item, ItemId};
pub use node::{Label, ParseTree};
pub use rendering::Rendered;
