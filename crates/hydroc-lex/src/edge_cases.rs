//! Edge case tests for hydroc-lex.

use crate::{Token, Tokenizer, TokenKind};

use proptest::prelude::*;

fn lex_all(source: &str) -> Vec<Token<'_>> {
    Tokenizer::new(source).tokenize().expect("lexes cleanly")
}

#[test]
fn test_edge_whitespace_only() {
    assert!(lex_all(" \t\r\n  \n").is_empty());
}

#[test]
fn test_edge_single_char_ident() {
    let tokens = lex_all("x");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].lexeme, Some("x"));
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10_000);
    let source = format!("let {name} = 1;");
    let tokens = lex_all(&source);
    assert_eq!(tokens[1].lexeme, Some(name.as_str()));
}

#[test]
fn test_edge_no_space_between_tokens() {
    let tokens = lex_all("exit(1+2);");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Exit,
            TokenKind::LParen,
            TokenKind::IntLit,
            TokenKind::Plus,
            TokenKind::IntLit,
            TokenKind::RParen,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_edge_slash_is_division_not_comment() {
    let tokens = lex_all("8 / 2");
    assert_eq!(tokens[1].kind, TokenKind::Slash);
}

#[test]
fn test_edge_comment_at_end_of_input_without_newline() {
    assert!(lex_all("exit(0); // no trailing newline").len() == 5);
}

#[test]
fn test_edge_block_comment_with_stars_inside() {
    let tokens = lex_all("/* ** * ** */ exit(0);");
    assert_eq!(tokens[0].kind, TokenKind::Exit);
}

#[test]
fn test_edge_block_comments_do_not_nest() {
    // The first `*/` closes the comment; the trailing `*/` lexes as tokens.
    let tokens = lex_all("/* outer /* inner */ */");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Star, TokenKind::Slash]);
}

#[test]
fn test_edge_empty_block_comment() {
    assert!(lex_all("/**/").is_empty());
}

#[test]
fn test_edge_leading_zeros_stay_in_lexeme() {
    let tokens = lex_all("007");
    assert_eq!(tokens[0].lexeme, Some("007"));
}

#[test]
fn test_edge_crlf_counts_one_line() {
    let tokens = lex_all("exit(0);\r\nexit(1);");
    assert_eq!(tokens[5].line, 2);
}

proptest! {
    #[test]
    fn prop_digit_runs_lex_to_single_int_lit(digits in "[0-9]{1,32}") {
        let tokens = lex_all(&digits);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::IntLit);
        prop_assert_eq!(tokens[0].lexeme, Some(digits.as_str()));
    }

    #[test]
    fn prop_words_classify_as_keyword_or_ident(word in "[A-Za-z][A-Za-z0-9]{0,16}") {
        let tokens = lex_all(&word);
        prop_assert_eq!(tokens.len(), 1);
        let expected = TokenKind::keyword(&word).unwrap_or(TokenKind::Ident);
        prop_assert_eq!(tokens[0].kind, expected);
    }

    #[test]
    fn prop_tokenizing_is_deterministic(source in "[a-z0-9 ();=+*/{}-]{0,64}") {
        let first = Tokenizer::new(&source).tokenize();
        let second = Tokenizer::new(&source).tokenize();
        prop_assert_eq!(first, second);
    }
}
