// Copyright (c) ZeroC, Inc.

use svlex::diagnostics::{Diagnostics, Error};
use svlex::lexer::tokens::{IdentifierKind, TokenKind};
use svlex::lexer_options::LexerOptions;
use svlex::syntax_facts;
use svlex::test_helpers::*;
use test_case::test_case;

fn identifier(name: &str, kind: IdentifierKind) -> TokenKind<'_> {
    TokenKind::Identifier { name, kind }
}

#[test_case("foo"; "plain")]
#[test_case("_bus"; "leading_underscore")]
#[test_case("n401"; "digits")]
#[test_case("bus$2"; "dollar_in_body")]
#[test_case("CamelCase"; "mixed_case")]
fn plain_identifiers(name: &str) {
    // Act
    let kinds = lex_for_kinds(name);

    // Assert
    assert_eq!(kinds, vec![identifier(name, IdentifierKind::Normal)]);
}

#[test]
fn keywords_lex_as_identifiers() {
    // The lexer never reclassifies reserved words; that's a parser's job, using the syntax facts
    // table.
    assert!(syntax_facts::is_keyword("module"));

    // Act
    let kinds = lex_for_kinds("module");

    // Assert
    assert_eq!(kinds, vec![identifier("module", IdentifierKind::Normal)]);
}

#[test_case("module"; "module_keyword")]
#[test_case("endmodule"; "endmodule_keyword")]
#[test_case("always_ff"; "always_ff_keyword")]
#[test_case("wire"; "wire_keyword")]
#[test_case("posedge"; "posedge_keyword")]
fn reserved_words_are_in_the_keyword_table(keyword: &str) {
    assert!(syntax_facts::is_keyword(keyword));
}

#[test]
fn non_keywords_are_not_in_the_keyword_table() {
    assert!(!syntax_facts::is_keyword("fulladder"));
}

mod system_identifiers {
    use super::*;
    use test_case::test_case;

    #[test]
    fn system_identifiers_keep_their_dollar_sign() {
        // Act
        let kinds = lex_for_kinds("$display");

        // Assert
        assert_eq!(kinds, vec![TokenKind::SystemIdentifier("$display")]);
    }

    #[test]
    fn a_lone_dollar_is_the_dollar_token() {
        // Act
        let kinds = lex_for_kinds("[$]");

        // Assert
        assert_eq!(
            kinds,
            vec![TokenKind::LeftBracket, TokenKind::Dollar, TokenKind::RightBracket],
        );
    }
}

mod escaped_identifiers {
    use super::*;
    use test_case::test_case;

    #[test]
    fn escaped_identifiers_take_any_printable_characters() {
        // Act
        let tokens = lex_for_tokens("\\bus+index ");

        // Assert: the backslash is in the lexeme but not the name.
        assert_eq!(tokens[0].kind, identifier("bus+index", IdentifierKind::Escaped));
        assert_eq!(tokens[0].lexeme, b"\\bus+index");
    }

    #[test]
    fn escaped_identifiers_end_at_whitespace() {
        // Act
        let kinds = lex_for_kinds("\\a?b c");

        // Assert
        assert_eq!(
            kinds,
            vec![
                identifier("a?b", IdentifierKind::Escaped),
                identifier("c", IdentifierKind::Normal),
            ],
        );
    }

    #[test]
    fn escaped_keywords_are_still_identifiers() {
        // Act
        let kinds = lex_for_kinds("\\module ");

        // Assert
        assert_eq!(kinds, vec![identifier("module", IdentifierKind::Escaped)]);
    }

    #[test]
    fn whitespace_after_the_backslash_is_diagnosed() {
        // Arrange
        let mut diagnostics = Diagnostics::new();

        // Act
        let tokens = lex("\\ foo", &mut diagnostics);

        // Assert
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        check_diagnostics(
            diagnostics.into_updated(&LexerOptions::default()),
            [Error::EscapedWhitespace],
        );
    }

    #[test]
    fn a_backslash_at_end_of_input_is_diagnosed() {
        // Arrange
        let mut diagnostics = Diagnostics::new();

        // Act
        let tokens = lex("\\", &mut diagnostics);

        // Assert
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        check_diagnostics(
            diagnostics.into_updated(&LexerOptions::default()),
            [Error::EscapedWhitespace],
        );
    }
}
