// Integration tests for the formula analysis pipeline

use logitty::export::export;
use logitty::parser::Analysis;

#[test]
fn test_valid_formula_end_to_end() {
    let analysis = Analysis::new("((p=>q)^p)");

    assert!(analysis.is_valid());
    assert!(analysis.lexical_errors.is_empty());
    assert_eq!(analysis.tokens.len(), 9);

    let ast = analysis.result.expect("parse failed");
    assert_eq!(ast.to_string(), "((p=>q)^p)");

    let graph = export(&ast);
    assert_eq!(graph.nodes.len(), 5);
    assert_eq!(graph.edges.len(), 4);
}

#[test]
fn test_demo_formula_verdicts() {
    // The built-in demo set: everything parses except the formula with a
    // leading connective
    let cases = [
        ("p", true),
        ("~q", true),
        ("(p^q)", true),
        ("(0=>(ros))", true),
        ("^(p^q)", false),
        ("(p<=>~p)", true),
        ("((p=>q)^p)", true),
        ("(*(p^(qor))os)", true),
    ];

    for (formula, expected) in cases {
        let analysis = Analysis::new(formula);
        assert_eq!(
            analysis.is_valid(),
            expected,
            "wrong verdict for {:?}",
            formula
        );
    }
}

#[test]
fn test_invalid_formula_keeps_its_tokens() {
    let analysis = Analysis::new("(p^q");

    assert!(!analysis.is_valid());
    assert_eq!(analysis.tokens.len(), 4);
    assert!(analysis.lexical_errors.is_empty());

    let error = analysis.result.expect_err("parse should fail");
    assert_eq!(error.position(), 4);
}

#[test]
fn test_lexical_recovery_still_parses() {
    // The '*' is recorded and skipped; what remains is a valid formula
    let analysis = Analysis::new("(*(p^(qor))os)");

    assert_eq!(analysis.lexical_errors.len(), 1);
    assert_eq!(analysis.lexical_errors[0].character, '*');
    assert_eq!(analysis.lexical_errors[0].position, 1);

    let ast = analysis.result.expect("parse failed");
    assert_eq!(ast.to_string(), "((p^(qor))os)");
}

#[test]
fn test_export_is_deterministic_across_parses() {
    let first = Analysis::new("(p^q)").result.expect("parse failed");
    let second = Analysis::new("(p^q)").result.expect("parse failed");

    assert_eq!(export(&first), export(&second));
}

#[test]
fn test_export_ids_restart_at_zero_per_call() {
    let big = Analysis::new("((p=>q)^(r o ~s))")
        .result
        .expect("parse failed");
    let _ = export(&big);

    let small = Analysis::new("p").result.expect("parse failed");
    let graph = export(&small);
    assert_eq!(graph.nodes[0].id, 0);
}

#[test]
fn test_canonical_form_reparses_to_equal_ast() {
    let corpus = [
        "p o q ^ r",
        "~p^q",
        "p o q o r",
        "(p=>q)<=>~r",
        "~~0",
        "(0=>(ros))",
    ];

    for formula in corpus {
        let ast = Analysis::new(formula).result.expect("parse failed");
        let canonical = ast.to_string();

        let reparsed = Analysis::new(&canonical).result.expect("reparse failed");
        assert_eq!(reparsed, ast, "canonical form of {:?} changed shape", formula);
        assert_eq!(
            reparsed.to_string(),
            canonical,
            "canonical form of {:?} is not a fixed point",
            formula
        );
    }
}

#[test]
fn test_token_positions_are_source_offsets() {
    let analysis = Analysis::new(" p ^ q");
    let positions: Vec<usize> = analysis.tokens.iter().map(|t| t.position()).collect();
    assert_eq!(positions, [1, 3, 5]);
}

#[test]
fn test_analyses_on_separate_threads_do_not_interact() {
    let handles: Vec<_> = ["p", "(p^q)", "p o q ^ r", "(p<=>~p)"]
        .into_iter()
        .map(|formula| std::thread::spawn(move || Analysis::new(formula).is_valid()))
        .collect();

    for handle in handles {
        assert!(handle.join().expect("analysis thread panicked"));
    }
}
