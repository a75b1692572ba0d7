// This is actually defined at `crate::grammar::tests_for_grammar`

use crate::grammar::*;
use crate::tests::*;

use expect_test::expect;

fn spelled(rhs: &[Symbol]) -> Vec<&str> {
    rhs.iter().map(|s| s.as_str()).collect()
}

#[test]
fn alternatives_in_declaration_order() {
    let g = Grammar::new(["S -> NP VP", "VP -> VP PP | V NP | V"]).unwrap();
    let vp = g.right_hand_sides("VP").unwrap();
    assert_eq!(vp.len(), 3);
    assert_eq!(spelled(&vp[0]), vec!["VP", "PP"]);
    assert_eq!(spelled(&vp[1]), vec!["V", "NP"]);
    assert_eq!(spelled(&vp[2]), vec!["V"]);
    assert!(g.right_hand_sides("V").is_none());
    assert!(g.is_nonterminal("S"));
    assert!(!g.is_nonterminal("NP"));
    assert_eq!(g.nonterminals().map(|s| s.as_str()).collect::<Vec<_>>(), vec!["S", "VP"]);
}

#[test]
fn repeated_left_hand_side_appends() {
    let g = Grammar::new(["A -> a", "B -> b", "A -> c | d"]).unwrap();
    let a: Vec<Vec<&str>> = g.right_hand_sides("A").unwrap().iter().map(|r| spelled(r)).collect();
    assert_eq!(a, vec![vec!["a"], vec!["c"], vec!["d"]]);
}

#[test]
fn whitespace_is_insignificant() {
    let g = Grammar::new(["  S->A   b|  c  "]).unwrap();
    let s: Vec<Vec<&str>> = g.right_hand_sides("S").unwrap().iter().map(|r| spelled(r)).collect();
    assert_eq!(s, vec![vec!["A", "b"], vec!["c"]]);
}

#[test]
fn empty_alternative() {
    let g = Grammar::new(["A -> a |"]).unwrap();
    let a = g.right_hand_sides("A").unwrap();
    assert_eq!(a.len(), 2);
    assert!(a[1].is_empty());
}

#[test]
fn format_errors() {
    assert_eq!(Grammar::new(["S NP VP"]).unwrap_err(),
               FormatError::MissingArrow { rule: "S NP VP".into() });
    assert_eq!(Grammar::new(["S -> a", "-> b"]).unwrap_err(),
               FormatError::EmptyLeftHandSide { rule: "-> b".into() });
    assert_eq!(Grammar::new(["A B -> c"]).unwrap_err(),
               FormatError::MultipleLeftHandSymbols { rule: "A B -> c".into() });
    assert_eq!(Grammar::new(["S NP VP"]).unwrap_err().to_string(),
               "rule `S NP VP` has no `->` separator");
}

#[test]
fn epsilon_marker() {
    let g = Grammar::new(["A -> _EPSILON_ | a"]).unwrap();
    assert!(g.is_epsilon(EPSILON));
    assert!(!g.is_epsilon("a"));
    let g = Grammar::builder().rule("A -> ε | a").epsilon("ε").build().unwrap();
    assert!(g.is_epsilon("ε"));
    assert!(!g.is_epsilon(EPSILON));
    let rhs = &g.right_hand_sides("A").unwrap()[0];
    assert_eq!(g.skip_epsilons(rhs, 0), 1);
}

#[test]
fn skip_epsilons_stops_at_first_real_symbol() {
    let g = Grammar::new(["A -> _EPSILON_ b _EPSILON_ _EPSILON_"]).unwrap();
    let rhs = &g.right_hand_sides("A").unwrap()[0];
    assert_eq!(g.skip_epsilons(rhs, 0), 1);
    assert_eq!(g.skip_epsilons(rhs, 1), 1);
    assert_eq!(g.skip_epsilons(rhs, 2), 4);
}

#[test]
fn terminals_for_token() {
    let g = pp_attachment();
    assert_eq!(spelled(&g.terminals_for("fish")), vec!["N", "fish"]);
    assert_eq!(spelled(&g.terminals_for("zebra")), vec!["zebra"]);
    let g = Grammar::new(["S -> a"]).unwrap();
    assert_eq!(spelled(&g.terminals_for("a")), vec!["a"]);
    assert!(g.terminals_for(EPSILON).is_empty());
}

#[test]
fn classification_never_yields_epsilon() {
    let g = Grammar::builder()
        .rule("S -> x")
        .classifier(Lexicon::new().entry("x", &[EPSILON, "X", "x"]))
        .build()
        .unwrap();
    assert_eq!(spelled(&g.terminals_for("x")), vec!["X", "x"]);
}

#[test]
fn closure_classifier() {
    let g = arithmetic();
    assert_eq!(spelled(&g.terminals_for("42")), vec!["n", "42"]);
    assert_eq!(spelled(&g.terminals_for("+")), vec!["+"]);
}

#[test]
fn lexicon_text() {
    let lexicon = Lexicon::parse("
        # nouns
        N: fish | fork | she
        V: eats
        N: eats
    ").unwrap();
    assert_eq!(spelled(lexicon.categories("fork")), vec!["N"]);
    assert_eq!(spelled(lexicon.categories("eats")), vec!["V", "N"]);
    assert!(lexicon.categories("a").is_empty());
    assert_eq!(Lexicon::parse("N fish").unwrap_err(),
               FormatError::MissingCategorySeparator { line: "N fish".into() });
}

#[test]
fn from_text_and_display() {
    let g = Grammar::from_text("
        # toy grammar
        S -> NP VP

        VP -> V NP | V
        NP -> she | fish
    ").unwrap();
    expect![[r#"
        S -> NP VP
        VP -> V NP | V
        NP -> she | fish
    "#]].assert_eq(&g.to_string());
}

#[test]
fn from_path() {
    let file = temp_file::with_contents(b"S -> a S | a\n");
    let g = Grammar::from_path(file.path()).unwrap();
    assert_eq!(g.right_hand_sides("S").unwrap().len(), 2);

    let bad = temp_file::with_contents(b"S a\n");
    assert!(matches!(Grammar::from_path(bad.path()), Err(LoadError::Format(FormatError::MissingArrow { .. }))));

    let gone = temp_file::empty();
    let path = gone.path().to_path_buf();
    drop(gone);
    assert!(matches!(Grammar::from_path(&path), Err(LoadError::Io(_))));
}
