// This is actually defined at `crate::node::tree::tests_for_tree`

use super::*;
use crate::earley::parse;
use crate::grammar::{Grammar, Symbol};
use crate::rendering::Rendered;
use crate::tests::*;

use expect_test::expect;

fn leaf(word: &str, left: usize, right: usize) -> ParseTree {
    ParseTree { root: Label::Matched(vec![Symbol::from(word)]), left, right, subtrees: vec![] }
}

#[test]
fn unambiguous_single_tree() {
    let g = arithmetic();
    let input = tokens("2 + 3 * 4");
    let chart = parse(&input, &g, "E");
    let trees = chart.finished_root("E").unwrap().traverse();
    assert_eq!(trees.len(), 1);
    assert_eq!(trees[0].to_string(),
               r#"E(E(T(F(n("2")))) +("+") T(T(F(n("3"))) *("*") F(n("4"))))"#);
    assert_eq!(trees[0].leaves(), input);
    assert_eq!((trees[0].left, trees[0].right), (0, 5));
}

#[test]
fn pp_attachment_is_ambiguous() {
    let g = pp_attachment();
    let input = tokens("she eats a fish with a fork");
    let trees = parse(&input, &g, "S").finished_root("S").unwrap().traverse();
    assert_eq!(trees.len(), 2);
    assert_ne!(trees[0], trees[1]);
    for t in &trees {
        assert_eq!(t.leaves(), input);
    }
    // one more PP: five attachments for the two PPs
    let input = tokens("she eats a fish with a fork with a fork");
    let trees = parse(&input, &g, "S").trees("S");
    assert_eq!(trees.len(), 5);
    for t in &trees {
        assert_eq!(t.leaves(), input);
    }
}

#[test]
fn epsilon_slots_are_omitted() {
    let g = Grammar::new(["S -> a _EPSILON_ B c", "B -> _EPSILON_ | b"]).unwrap();
    let trees = parse(&tokens("a c"), &g, "S").trees("S");
    assert_eq!(sorted_strings(&trees), vec![r#"S(a("a") B("") c("c"))"#]);
    assert_eq!(trees[0].leaves(), vec!["a", "c"]);
    let trees = parse(&tokens("a b c"), &g, "S").trees("S");
    assert_eq!(sorted_strings(&trees), vec![r#"S(a("a") B(b("b")) c("c"))"#]);
}

#[test]
fn rendered_outline() {
    let g = Grammar::new(["S -> A b", "A -> a"]).unwrap();
    let trees = parse(&tokens("a b"), &g, "S").trees("S");
    expect![[r#"
        S [0, 2)
          A [0, 1)
            a [0, 1)
              "a" [0, 1)
          b [1, 2)
            "b" [1, 2)
    "#]].assert_eq(&trees.rendered());
    assert_eq!(trees[0].size(), 6);
    assert!(trees[0].subtrees[1].subtrees[0].is_leaf());
}

#[test]
fn combinations_require_adjacent_spans() {
    let slots = vec![
        vec![leaf("a", 0, 1), leaf("b", 0, 2)],
        vec![leaf("c", 1, 2), leaf("d", 2, 3)],
    ];
    let mut result = Vec::new();
    combinations(&slots, &mut Vec::new(), &mut result);
    let shown: Vec<Vec<String>> = result
        .iter()
        .map(|combo| combo.iter().map(|t| t.to_string()).collect())
        .collect();
    assert_eq!(shown, vec![vec![r#""a""#, r#""c""#], vec![r#""b""#, r#""d""#]]);
}

#[test]
fn combinations_of_nothing() {
    let mut result = Vec::new();
    combinations(&[], &mut Vec::new(), &mut result);
    assert_eq!(result, vec![Vec::<ParseTree>::new()]);

    let slots = vec![vec![leaf("a", 0, 1)], vec![]];
    let mut result = Vec::new();
    combinations(&slots, &mut Vec::new(), &mut result);
    assert!(result.is_empty());
}

#[test]
fn trees_are_independent_of_the_chart() {
    let g = pp_attachment();
    let trees = {
        let chart = parse(&tokens("she eats"), &g, "S");
        chart.trees("S")
    };
    assert_eq!(trees.len(), 1);
    assert_eq!(trees[0].to_string(), r#"S(NP(N("she")) VP(V("eats")))"#);
    assert_eq!(trees[0].root.symbol().map(|s| s.as_str()), Some("S"));
    assert_eq!(trees[0].subtrees[0].subtrees[0].subtrees[0].root.matched().map(|m| m.len()), Some(1));
}
