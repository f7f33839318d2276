//! Edge case tests for hydroc-par.

use hydroc_lex::Tokenizer;
use hydroc_util::Arena;

use crate::{ParseError, Parser, Prog, Stmt, ARENA_CAPACITY};

fn with_prog<R>(source: &str, check: impl FnOnce(&Prog<'_>) -> R) -> R {
    let arena = Arena::with_capacity(ARENA_CAPACITY);
    let tokens = Tokenizer::new(source).tokenize().expect("lexes cleanly");
    let prog = Parser::new(tokens, &arena).parse_prog().expect("parses cleanly");
    check(&prog)
}

fn parse_err(source: &str) -> ParseError {
    let arena = Arena::with_capacity(ARENA_CAPACITY);
    let tokens = Tokenizer::new(source).tokenize().expect("lexes cleanly");
    Parser::new(tokens, &arena)
        .parse_prog()
        .map(|_| ())
        .expect_err("parse should fail")
}

#[test]
fn test_edge_deeply_nested_scopes() {
    let mut source = String::new();
    for _ in 0..64 {
        source.push('{');
    }
    source.push_str("exit(0);");
    for _ in 0..64 {
        source.push('}');
    }
    with_prog(&source, |prog| {
        assert_eq!(prog.stmts.len(), 1);
    });
}

#[test]
fn test_edge_deep_elif_chain() {
    let mut source = String::from("let x = 0; if (x) { exit(1); }");
    for i in 2..16 {
        source.push_str(&format!(" elif (x) {{ exit({i}); }}"));
    }
    source.push_str(" else { exit(0); }");
    with_prog(&source, |prog| {
        assert_eq!(prog.stmts.len(), 2);
    });
}

#[test]
fn test_edge_long_expression_chain() {
    let terms: Vec<String> = (1..=100).map(|i| i.to_string()).collect();
    let source = format!("exit({});", terms.join(" + "));
    with_prog(&source, |prog| {
        assert!(matches!(prog.stmts[0], Stmt::Exit(_)));
    });
}

#[test]
fn test_edge_empty_scope() {
    with_prog("{}", |prog| {
        let Stmt::Scope(scope) = prog.stmts[0] else {
            panic!("expected scope");
        };
        assert!(scope.stmts.is_empty());
    });
}

#[test]
fn test_edge_exit_without_paren_is_residue() {
    // `exit` not followed by `(` begins no statement form.
    assert!(matches!(parse_err("exit 0;"), ParseError::NoStatement { line: 1 }));
}

#[test]
fn test_edge_let_without_eq_is_residue() {
    assert!(matches!(parse_err("let x;"), ParseError::NoStatement { line: 1 }));
}

#[test]
fn test_edge_keyword_line_numbers_in_errors() {
    let err = parse_err("let a = 1;\nlet b = 2;\nexit(a + b)\n");
    assert_eq!(
        err,
        ParseError::Expected {
            what: "`;`".to_string(),
            line: 3,
        }
    );
}

#[test]
fn test_edge_else_without_if_is_residue() {
    assert!(matches!(parse_err("else { exit(0); }"), ParseError::NoStatement { .. }));
}

#[test]
fn test_edge_double_else_is_rejected() {
    let err = parse_err("if (1) { } else { } else { }");
    assert!(matches!(err, ParseError::NoStatement { .. }));
}

#[test]
fn test_edge_assignment_inside_scope() {
    with_prog("let x = 1; { x = 2; }", |prog| {
        let Stmt::Scope(scope) = prog.stmts[1] else {
            panic!("expected scope");
        };
        assert!(matches!(scope.stmts[0], Stmt::Assign { .. }));
    });
}

#[test]
fn test_edge_arena_exhaustion_surfaces_as_error() {
    // A deliberately tiny arena cannot hold the AST of a long expression,
    // whatever the allocator rounds the initial chunk up to.
    let arena = Arena::with_capacity(16);
    let terms: Vec<String> = (1..=512).map(|i| i.to_string()).collect();
    let source = format!("exit({});", terms.join(" + "));
    let tokens = Tokenizer::new(&source)
        .tokenize()
        .expect("lexes cleanly");
    let err = Parser::new(tokens, &arena)
        .parse_prog()
        .map(|_| ())
        .expect_err("arena should overflow");
    assert!(matches!(err, ParseError::Arena(_)));
}
