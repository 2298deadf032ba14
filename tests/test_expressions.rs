//! End-to-end tests for the expression surface: construction styles,
//! parsing, display, and evaluation.

use quine_logic::{expr, EvalError, Node, ParseError, Tree};
use std::collections::HashMap;
use std::sync::Arc;

#[test]
fn test_builder_styles_agree() {
    let a = Node::variable("a");
    let b = Node::variable("b");
    let c = Node::variable("c");

    let methods = a.and(&b).or(&c);
    let operators = &(&a * &b) + &c;
    let macro_form = expr!(a * b + c);
    let parsed = Node::parse("a and b or c").unwrap();

    assert_eq!(methods, operators);
    assert_eq!(methods, macro_form);
    assert_eq!(methods, parsed);
    assert_eq!(methods.to_string(), "((a and b) or c)");
}

#[test]
fn test_xor_expression() {
    // XOR: a*~b + ~a*b
    let a = Node::variable("a");
    let b = Node::variable("b");
    let xor = expr!(a * !b + !a * b);

    let mut assignment = HashMap::new();

    // 0 xor 0 = 0
    assignment.insert(Arc::from("a"), false);
    assignment.insert(Arc::from("b"), false);
    assert!(!xor.evaluate(&assignment).unwrap());

    // 0 xor 1 = 1
    assignment.insert(Arc::from("b"), true);
    assert!(xor.evaluate(&assignment).unwrap());

    // 1 xor 0 = 1
    assignment.insert(Arc::from("a"), true);
    assignment.insert(Arc::from("b"), false);
    assert!(xor.evaluate(&assignment).unwrap());

    // 1 xor 1 = 0
    assignment.insert(Arc::from("b"), true);
    assert!(!xor.evaluate(&assignment).unwrap());

    // The dedicated operator agrees on every row
    let built_in = a.xor(&b);
    for row in 0..4 {
        let mut assignment = HashMap::new();
        assignment.insert(Arc::from("a"), row >> 1 & 1 == 1);
        assignment.insert(Arc::from("b"), row & 1 == 1);
        assert_eq!(
            built_in.evaluate(&assignment).unwrap(),
            xor.evaluate(&assignment).unwrap()
        );
    }
}

#[test]
fn test_xnor_expression() {
    // XNOR: a*b + ~a*~b
    let a = Node::variable("a");
    let b = Node::variable("b");
    let xnor = expr!(a * b + !a * !b);

    let built_in = a.xnor(&b);
    for row in 0..4 {
        let mut assignment = HashMap::new();
        assignment.insert(Arc::from("a"), row >> 1 & 1 == 1);
        assignment.insert(Arc::from("b"), row & 1 == 1);

        let expected = (row >> 1 & 1) == (row & 1);
        assert_eq!(xnor.evaluate(&assignment).unwrap(), expected);
        assert_eq!(built_in.evaluate(&assignment).unwrap(), expected);
    }
}

#[test]
fn test_de_morgan_laws() {
    let a = Node::variable("a");
    let b = Node::variable("b");

    // ~(a * b) = ~a + ~b
    let conjunction = expr!(!(a * b));
    let split_or = expr!(!a + !b);

    // ~(a + b) = ~a * ~b
    let disjunction = expr!(!(a + b));
    let split_and = expr!(!a * !b);

    for row in 0..4 {
        let mut assignment = HashMap::new();
        assignment.insert(Arc::from("a"), row >> 1 & 1 == 1);
        assignment.insert(Arc::from("b"), row & 1 == 1);

        assert_eq!(
            conjunction.evaluate(&assignment).unwrap(),
            split_or.evaluate(&assignment).unwrap()
        );
        assert_eq!(
            disjunction.evaluate(&assignment).unwrap(),
            split_and.evaluate(&assignment).unwrap()
        );
    }
}

#[test]
fn test_absorption_laws() {
    let a = Node::variable("a");
    let b = Node::variable("b");

    // a + a*b = a and a * (a + b) = a
    let absorbed = expr!(a + a * b);
    let factored = expr!(a * (a + b));

    for row in 0..4 {
        let mut assignment = HashMap::new();
        assignment.insert(Arc::from("a"), row >> 1 & 1 == 1);
        assignment.insert(Arc::from("b"), row & 1 == 1);

        let expected = a.evaluate(&assignment).unwrap();
        assert_eq!(absorbed.evaluate(&assignment).unwrap(), expected);
        assert_eq!(factored.evaluate(&assignment).unwrap(), expected);
    }
}

#[test]
fn test_operator_words_and_symbols_agree() {
    let word = Node::parse("a and b or not c").unwrap();
    assert_eq!(Node::parse("a * b + ~c").unwrap(), word);
    assert_eq!(Node::parse("a & b | !c").unwrap(), word);
    assert_eq!(Node::parse("a && b || !c").unwrap(), word);

    assert_eq!(
        Node::parse("a ^ b").unwrap(),
        Node::parse("a xor b").unwrap()
    );
    assert_eq!(
        Node::parse("a -^ b").unwrap(),
        Node::parse("a xnor b").unwrap()
    );
    assert_eq!(
        Node::parse("a -* b").unwrap(),
        Node::parse("a nand b").unwrap()
    );
    assert_eq!(
        Node::parse("a -+ b").unwrap(),
        Node::parse("a nor b").unwrap()
    );
}

#[test]
fn test_parse_precedence() {
    assert_eq!(
        Node::parse("not a or b").unwrap().to_string(),
        "(not(a) or b)"
    );
    assert_eq!(
        Node::parse("a or b and c").unwrap().to_string(),
        "(a or (b and c))"
    );
    assert_eq!(
        Node::parse("a and b xor c").unwrap().to_string(),
        "(a and (b xor c))"
    );
    assert_eq!(
        Node::parse("a xor b xnor c").unwrap().to_string(),
        "(a xor (b xnor c))"
    );
    // Same-level operators associate left
    assert_eq!(
        Node::parse("a or b or c").unwrap().to_string(),
        "((a or b) or c)"
    );
}

#[test]
fn test_display_parse_round_trip() {
    let sources = [
        "(a and b)",
        "((a or not(b)) xor (c nand a))",
        "not(a nor b)",
        "((a xnor b) or false)",
        "(true and not(c))",
    ];

    for source in sources {
        let parsed = Node::parse(source).unwrap();
        assert_eq!(parsed.to_string(), source);
        assert_eq!(Node::parse(&parsed.to_string()).unwrap(), parsed);
    }
}

#[test]
fn test_tree_surface() {
    let tree: Tree = "b or not(a) and b".parse().unwrap();

    // Variables in first-seen order, negations included
    assert_eq!(tree.variables(), [Arc::<str>::from("b"), Arc::from("a")]);
    assert_eq!(tree.to_string(), "(b or (not(a) and b))");

    let mut assignment = HashMap::new();
    assignment.insert(Arc::from("a"), true);
    assignment.insert(Arc::from("b"), false);
    assert!(!tree.evaluate(&assignment).unwrap());

    assignment.insert(Arc::from("b"), true);
    assert!(tree.evaluate(&assignment).unwrap());
}

#[test]
fn test_evaluate_reports_unbound_variable() {
    let tree = Tree::parse("a and b").unwrap();

    let mut assignment = HashMap::new();
    assignment.insert(Arc::from("a"), true);

    let error = tree.evaluate(&assignment).unwrap_err();
    assert_eq!(
        error,
        EvalError::UnboundVariable {
            name: Arc::from("b")
        }
    );
}

#[test]
fn test_malformed_inputs_are_rejected() {
    let inputs = [
        "",
        "a and and b",
        "a b",
        "a +",
        "and a",
        "(a + b",
        "a + b)",
        "[a or b",
        "not",
        "a xor",
        "a @ b",
    ];

    for input in inputs {
        assert!(
            Node::parse(input).is_err(),
            "parser accepted {:?}",
            input
        );
    }
}

#[test]
fn test_parse_error_reports_location() {
    let ParseError::InvalidSyntax {
        input, position, ..
    } = Node::parse("a and or b").unwrap_err();

    assert_eq!(input.as_ref(), "a and or b");
    assert_eq!(position, Some(6));
}

#[test]
fn test_keyword_prefix_identifiers() {
    // Longest match wins: these are variables, not operators
    let tree = Tree::parse("android and orange or note").unwrap();

    assert_eq!(
        tree.variables(),
        [
            Arc::<str>::from("android"),
            Arc::from("orange"),
            Arc::from("note")
        ]
    );
    assert_eq!(tree.to_string(), "((android and orange) or note)");
}

#[test]
fn test_expr_macro_composes_sub_expressions() {
    let a = Node::variable("a");
    let b = Node::variable("b");
    let c = Node::variable("c");

    let carry = expr!(a * b);
    let sum = expr!(a ^ b);
    let full = expr!(carry + sum * c);

    assert_eq!(full, carry.or(&sum.and(&c)));
    assert_eq!(full.to_string(), "((a and b) or ((a xor b) and c))");
}

#[test]
fn test_json_document_round_trip() {
    let document = serde_json::json!({
        "operator": "or",
        "left": { "variable": "a" },
        "right": {
            "operator": "and",
            "left": { "variable": "b", "has_not": true },
            "right": { "constant": true },
        },
    });

    let tree = Tree::from_json(&document).unwrap();
    assert_eq!(tree.to_string(), "(a or (not(b) and true))");

    // The same document as text goes through from_json_str
    let text = document.to_string();
    assert_eq!(Tree::from_json_str(&text).unwrap(), tree);
}

#[test]
fn test_half_adder_truth_tables() {
    let a = Node::variable("a");
    let b = Node::variable("b");

    let sum = Tree::new(expr!(a ^ b)).truth_table();
    let carry = Tree::new(expr!(a * b)).truth_table();

    assert_eq!(sum.values(), [false, true, true, false]);
    assert_eq!(carry.values(), [false, false, false, true]);
    assert_eq!(sum.minterms(), [1, 2]);
    assert_eq!(carry.minterms(), [3]);
}
