// Copyright (c) ZeroC, Inc.

use svlex::diagnostics::{Diagnostics, Error};
use svlex::lexer::tokens::TokenKind;
use svlex::lexer_options::LexerOptions;
use svlex::test_helpers::*;
use test_case::test_case;

fn string(decoded: &[u8]) -> TokenKind<'static> {
    TokenKind::StringLiteral(decoded.to_vec())
}

#[test_case(r#""hello""#, b"hello"; "plain")]
#[test_case(r#""""#, b""; "empty")]
#[test_case(r#""a\nb""#, b"a\nb"; "newline_escape")]
#[test_case(r#""a\tb""#, b"a\tb"; "tab_escape")]
#[test_case(r#""a\\b""#, b"a\\b"; "backslash_escape")]
#[test_case(r#""a\"b""#, b"a\"b"; "quote_escape")]
#[test_case(r#""a\vb""#, b"a\x0Bb"; "vertical_tab_escape")]
#[test_case(r#""a\fb""#, b"a\x0Cb"; "form_feed_escape")]
#[test_case(r#""a\ab""#, b"a\x07b"; "alert_escape")]
#[test_case(r#""\101""#, b"A"; "three_octal_digits")]
#[test_case(r#""\1018""#, b"A8"; "octal_stops_after_three_digits")]
#[test_case(r#""\42""#, b"\x22"; "two_octal_digits")]
#[test_case(r#""\7!""#, b"\x07!"; "one_octal_digit")]
#[test_case(r#""\x4A""#, b"J"; "two_hex_digits")]
#[test_case(r#""\xF!""#, b"\x0F!"; "one_hex_digit")]
fn escape_sequences_decode(source: &str, expected: &[u8]) {
    // Act
    let kinds = lex_for_kinds(source);

    // Assert
    assert_eq!(kinds, vec![string(expected)]);
}

#[test]
fn decoded_value_and_raw_lexeme_are_both_preserved() {
    // Arrange
    let source = r#""a\n\x4A\101""#;

    // Act
    let tokens = lex_for_tokens(source);

    // Assert
    assert_eq!(tokens[0].kind, string(b"a\nJA"));
    assert_eq!(tokens[0].lexeme, source.as_bytes());
}

#[test]
fn escaped_newline_is_a_line_continuation() {
    // Arrange
    let source = "\"split \\\nline\"";

    // Act
    let kinds = lex_for_kinds(source);

    // Assert: the backslash-newline pair decodes to nothing.
    assert_eq!(kinds, vec![string(b"split line")]);
}

#[test]
fn escaped_carriage_return_newline_is_a_line_continuation() {
    // Arrange
    let source = "\"split \\\r\nline\"";

    // Act
    let kinds = lex_for_kinds(source);

    // Assert
    assert_eq!(kinds, vec![string(b"split line")]);
}

#[test]
fn multi_byte_characters_pass_through_unchanged() {
    // Arrange: non-ASCII bytes are only diagnosed outside of string literals.
    let source = "\"héllo\"";

    // Act
    let kinds = lex_for_kinds(source);

    // Assert
    assert_eq!(kinds, vec![string("héllo".as_bytes())]);
}

#[test]
fn octal_escape_above_one_byte_diagnoses_and_truncates() {
    // Arrange
    let mut diagnostics = Diagnostics::new();

    // Act
    let tokens = lex(r#""\777""#, &mut diagnostics);

    // Assert: 0o777 is 511; the low byte (255) is kept.
    assert_eq!(tokens[0].kind, string(b"\xFF"));
    check_diagnostics(
        diagnostics.into_updated(&LexerOptions::default()),
        [Error::OctalEscapeCodeTooBig { value: 511 }],
    );
}

#[test]
fn hex_escape_without_digits_diagnoses_and_passes_the_x_through() {
    // Arrange
    let mut diagnostics = Diagnostics::new();

    // Act
    let tokens = lex(r#""\xg""#, &mut diagnostics);

    // Assert
    assert_eq!(tokens[0].kind, string(b"xg"));
    check_diagnostics(
        diagnostics.into_updated(&LexerOptions::default()),
        [Error::InvalidHexEscapeCode],
    );
}

#[test]
fn unknown_escape_diagnoses_and_passes_through() {
    // Arrange
    let mut diagnostics = Diagnostics::new();

    // Act
    let tokens = lex(r#""\9""#, &mut diagnostics);

    // Assert
    assert_eq!(tokens[0].kind, string(b"9"));
    check_diagnostics(
        diagnostics.into_updated(&LexerOptions::default()),
        [Error::UnknownEscapeCode { escape: '9' }],
    );
}

#[test]
fn unescaped_newline_terminates_the_literal() {
    // Arrange
    let mut diagnostics = Diagnostics::new();

    // Act
    let tokens = lex("\"abc\ndef", &mut diagnostics);

    // Assert: the literal ends at the newline, which becomes trivia of the next token.
    assert_eq!(tokens[0].kind, string(b"abc"));
    assert!(matches!(tokens[1].kind, TokenKind::Identifier { name: "def", .. }));
    check_diagnostics(
        diagnostics.into_updated(&LexerOptions::default()),
        [Error::NewlineInStringLiteral],
    );
}

#[test]
fn unterminated_literal_is_diagnosed_at_end_of_input() {
    // Arrange
    let mut diagnostics = Diagnostics::new();

    // Act
    let tokens = lex("\"abc", &mut diagnostics);

    // Assert
    assert_eq!(tokens[0].kind, string(b"abc"));
    assert_eq!(tokens[1].kind, TokenKind::EndOfFile);
    check_diagnostics(
        diagnostics.into_updated(&LexerOptions::default()),
        [Error::UnterminatedStringLiteral],
    );
}

#[test]
fn embedded_null_inside_a_literal_is_diagnosed_and_skipped() {
    // Arrange
    let mut diagnostics = Diagnostics::new();

    // Act
    let tokens = lex("\"a\0b\"", &mut diagnostics);

    // Assert
    assert_eq!(tokens[0].kind, string(b"ab"));
    check_diagnostics(
        diagnostics.into_updated(&LexerOptions::default()),
        [Error::EmbeddedNull],
    );
}
