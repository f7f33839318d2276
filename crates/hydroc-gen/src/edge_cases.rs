//! Edge case tests for hydroc-gen.

use hydroc_lex::Tokenizer;
use hydroc_par::{Parser, ARENA_CAPACITY};
use hydroc_util::Arena;

use crate::{GenError, Generator};

fn gen(source: &str) -> Result<String, GenError> {
    let arena = Arena::with_capacity(ARENA_CAPACITY);
    let tokens = Tokenizer::new(source).tokenize().expect("lexes cleanly");
    let prog = Parser::new(tokens, &arena).parse_prog().expect("parses cleanly");
    Generator::new(prog).generate()
}

fn gen_ok(source: &str) -> String {
    gen(source).expect("generates cleanly")
}

#[test]
fn test_edge_output_always_ends_with_fallback_exit() {
    for source in ["", "let x = 1;", "exit(0);", "{ let y = 2; }"] {
        let asm = gen_ok(source);
        assert!(
            asm.ends_with("    mov rax, 60\n    mov rdi, 0\n    syscall\n"),
            "missing fallback exit for {source:?}:\n{asm}"
        );
    }
}

#[test]
fn test_edge_nested_scopes_restore_independently() {
    let asm = gen_ok("{ let a = 1; { let b = 2; let c = 3; } let d = 4; }");
    // Inner scope drops b and c (16 bytes), outer drops a and d (16 bytes).
    let adjusts: Vec<&str> = asm
        .lines()
        .map(str::trim_start)
        .filter(|line| line.starts_with("add rsp"))
        .collect();
    assert_eq!(adjusts, vec!["add rsp, 16", "add rsp, 16"]);
}

#[test]
fn test_edge_scope_variable_count_restored() {
    // d resolves to slot 1 after the inner scope released b and c.
    let asm = gen_ok("{ let a = 1; { let b = 2; let c = 3; } let d = 4; exit(d); }");
    assert!(asm.contains("push QWORD [rsp + 0]"), "{asm}");
}

#[test]
fn test_edge_same_name_in_sibling_scopes() {
    assert!(gen("{ let x = 1; } { let x = 2; }").is_ok());
}

#[test]
fn test_edge_deep_if_nesting_keeps_labels_unique() {
    let source = "let x = 1;
if (x) {
    if (x) {
        if (x) { exit(1); } else { exit(2); }
    } else { exit(3); }
} else { exit(4); }
";
    let asm = gen_ok(source);
    let mut labels: Vec<&str> = asm
        .lines()
        .filter(|line| line.ends_with(':') && *line != "_start:")
        .collect();
    let count = labels.len();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(count, labels.len(), "duplicate labels:\n{asm}");
    assert_eq!(count, 6, "two labels per if/else:\n{asm}");
}

#[test]
fn test_edge_condition_uses_truthiness_not_comparison() {
    let asm = gen_ok("let x = 5; if (x) { exit(1); }");
    assert!(asm.contains("test rax, rax"));
    assert!(!asm.contains("cmp"));
}

#[test]
fn test_edge_if_condition_balances_stack() {
    // The condition's slot is consumed by the pop before the branch, so a
    // variable declared after the if sits at the same depth as one
    // declared before it.
    let asm = gen_ok("let a = 1; if (a) { } let b = 2; exit(b);");
    assert!(asm.contains("push QWORD [rsp + 0]"), "{asm}");
}

#[test]
fn test_edge_let_cannot_read_its_own_slot() {
    // `let x = x;` finds the name but its slot holds no value yet.
    let err = gen("let x = x;").unwrap_err();
    assert_eq!(
        err,
        GenError::Undeclared {
            name: "x".to_string(),
            line: 1,
        }
    );
}

#[test]
fn test_edge_undeclared_reports_reference_line() {
    let err = gen("let a = 1;\nexit(missing);").unwrap_err();
    assert_eq!(
        err,
        GenError::Undeclared {
            name: "missing".to_string(),
            line: 2,
        }
    );
}

#[test]
fn test_edge_redeclared_reports_second_let_line() {
    let err = gen("let a = 1;\nlet a = 2;").unwrap_err();
    assert_eq!(
        err,
        GenError::Redeclared {
            name: "a".to_string(),
            line: 2,
        }
    );
}

#[test]
fn test_edge_statements_emit_in_source_order() {
    let asm = gen_ok("exit(11); exit(22);");
    let first = asm.find("mov rax, 11").expect("first exit");
    let second = asm.find("mov rax, 22").expect("second exit");
    assert!(first < second);
}

#[test]
fn test_edge_large_literal_passes_through() {
    let asm = gen_ok("exit(18446744073709551615);");
    assert!(asm.contains("mov rax, 18446744073709551615"));
}
