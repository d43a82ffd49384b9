// Copyright (c) ZeroC, Inc.

use svlex::lexer::tokens::TokenKind;
use svlex::test_helpers::*;
use test_case::test_case;

#[test_case("(", TokenKind::LeftParenthesis; "left_parenthesis")]
#[test_case(")", TokenKind::RightParenthesis; "right_parenthesis")]
#[test_case("(*", TokenKind::LeftParenthesisStar; "left_parenthesis_star")]
#[test_case("*)", TokenKind::StarRightParenthesis; "star_right_parenthesis")]
#[test_case("[", TokenKind::LeftBracket; "left_bracket")]
#[test_case("]", TokenKind::RightBracket; "right_bracket")]
#[test_case("{", TokenKind::LeftBrace; "left_brace")]
#[test_case("}", TokenKind::RightBrace; "right_brace")]
#[test_case("'{", TokenKind::ApostropheLeftBrace; "apostrophe_left_brace")]
#[test_case(";", TokenKind::Semicolon; "semicolon")]
#[test_case(":", TokenKind::Colon; "colon")]
#[test_case("::", TokenKind::DoubleColon; "double_colon")]
#[test_case(":=", TokenKind::ColonEquals; "colon_equals")]
#[test_case(":/", TokenKind::ColonSlash; "colon_slash")]
#[test_case(",", TokenKind::Comma; "comma")]
#[test_case(".", TokenKind::Dot; "dot")]
#[test_case(".*", TokenKind::DotStar; "dot_star")]
#[test_case("?", TokenKind::QuestionMark; "question_mark")]
#[test_case("@", TokenKind::At; "at")]
#[test_case("@@", TokenKind::DoubleAt; "double_at")]
#[test_case("#", TokenKind::Hash; "hash")]
#[test_case("##", TokenKind::DoubleHash; "double_hash")]
#[test_case("#-#", TokenKind::HashMinusHash; "hash_minus_hash")]
#[test_case("#=#", TokenKind::HashEqualsHash; "hash_equals_hash")]
#[test_case("$", TokenKind::Dollar; "dollar")]
#[test_case("=", TokenKind::Equals; "equals")]
#[test_case("==", TokenKind::DoubleEquals; "double_equals")]
#[test_case("===", TokenKind::TripleEquals; "triple_equals")]
#[test_case("==?", TokenKind::DoubleEqualsQuestion; "double_equals_question")]
#[test_case("=>", TokenKind::EqualsArrow; "equals_arrow")]
#[test_case("+", TokenKind::Plus; "plus")]
#[test_case("++", TokenKind::DoublePlus; "double_plus")]
#[test_case("+=", TokenKind::PlusEquals; "plus_equals")]
#[test_case("+:", TokenKind::PlusColon; "plus_colon")]
#[test_case("-", TokenKind::Minus; "minus")]
#[test_case("--", TokenKind::DoubleMinus; "double_minus")]
#[test_case("-=", TokenKind::MinusEquals; "minus_equals")]
#[test_case("-:", TokenKind::MinusColon; "minus_colon")]
#[test_case("->", TokenKind::Arrow; "arrow")]
#[test_case("->>", TokenKind::DoubleArrow; "double_arrow")]
#[test_case("*", TokenKind::Star; "star")]
#[test_case("**", TokenKind::DoubleStar; "double_star")]
#[test_case("*=", TokenKind::StarEquals; "star_equals")]
#[test_case("*>", TokenKind::StarArrow; "star_arrow")]
#[test_case("*::*", TokenKind::StarDoubleColonStar; "star_double_colon_star")]
#[test_case("/", TokenKind::Slash; "slash")]
#[test_case("/=", TokenKind::SlashEquals; "slash_equals")]
#[test_case("%", TokenKind::Percent; "percent")]
#[test_case("%=", TokenKind::PercentEquals; "percent_equals")]
#[test_case("&", TokenKind::Ampersand; "ampersand")]
#[test_case("&&", TokenKind::DoubleAmpersand; "double_ampersand")]
#[test_case("&&&", TokenKind::TripleAmpersand; "triple_ampersand")]
#[test_case("&=", TokenKind::AmpersandEquals; "ampersand_equals")]
#[test_case("|", TokenKind::Pipe; "pipe")]
#[test_case("||", TokenKind::DoublePipe; "double_pipe")]
#[test_case("|=", TokenKind::PipeEquals; "pipe_equals")]
#[test_case("|->", TokenKind::PipeArrow; "pipe_arrow")]
#[test_case("|=>", TokenKind::PipeEqualsArrow; "pipe_equals_arrow")]
#[test_case("^", TokenKind::Caret; "caret")]
#[test_case("^=", TokenKind::CaretEquals; "caret_equals")]
#[test_case("^~", TokenKind::CaretTilde; "caret_tilde")]
#[test_case("~", TokenKind::Tilde; "tilde")]
#[test_case("~&", TokenKind::TildeAmpersand; "tilde_ampersand")]
#[test_case("~|", TokenKind::TildePipe; "tilde_pipe")]
#[test_case("~^", TokenKind::TildeCaret; "tilde_caret")]
#[test_case("!", TokenKind::Exclamation; "exclamation")]
#[test_case("!=", TokenKind::ExclamationEquals; "exclamation_equals")]
#[test_case("!==", TokenKind::ExclamationDoubleEquals; "exclamation_double_equals")]
#[test_case("!=?", TokenKind::ExclamationEqualsQuestion; "exclamation_equals_question")]
#[test_case("<", TokenKind::LessThan; "less_than")]
#[test_case("<=", TokenKind::LessThanEquals; "less_than_equals")]
#[test_case("<->", TokenKind::BidirectionalArrow; "bidirectional_arrow")]
#[test_case("<<", TokenKind::LeftShift; "left_shift")]
#[test_case("<<=", TokenKind::LeftShiftEqual; "left_shift_equal")]
#[test_case("<<<", TokenKind::TripleLeftShift; "triple_left_shift")]
#[test_case("<<<=", TokenKind::TripleLeftShiftEqual; "triple_left_shift_equal")]
#[test_case(">", TokenKind::GreaterThan; "greater_than")]
#[test_case(">=", TokenKind::GreaterThanEquals; "greater_than_equals")]
#[test_case(">>", TokenKind::RightShift; "right_shift")]
#[test_case(">>=", TokenKind::RightShiftEqual; "right_shift_equal")]
#[test_case(">>>", TokenKind::TripleRightShift; "triple_right_shift")]
#[test_case(">>>=", TokenKind::TripleRightShiftEqual; "triple_right_shift_equal")]
fn operators_lex_as_single_tokens(source: &str, expected: TokenKind) {
    // Act
    let kinds = lex_for_kinds(source);

    // Assert
    assert_eq!(kinds, vec![expected]);
}

#[test]
fn maximal_munch_prefers_the_longest_operator() {
    // Arrange
    let source = "<<<< <<<=<<= <= <";

    // Act
    let kinds = lex_for_kinds(source);

    // Assert
    assert_eq!(
        kinds,
        vec![
            TokenKind::TripleLeftShift,
            TokenKind::LessThan,
            TokenKind::TripleLeftShiftEqual,
            TokenKind::LeftShiftEqual,
            TokenKind::LessThanEquals,
            TokenKind::LessThan,
        ],
    );
}

#[test]
fn adjacent_operators_split_at_longest_match() {
    // Arrange
    let source = "a==?b!==c|->d";

    // Act
    let kinds = lex_for_kinds(source);

    // Assert
    let operators = kinds
        .into_iter()
        .filter(|kind| !matches!(kind, TokenKind::Identifier { .. }))
        .collect::<Vec<_>>();
    assert_eq!(
        operators,
        vec![
            TokenKind::DoubleEqualsQuestion,
            TokenKind::ExclamationDoubleEquals,
            TokenKind::PipeArrow,
        ],
    );
}

#[test]
fn lone_apostrophe_is_the_apostrophe_token() {
    // An apostrophe that starts neither a literal nor "'{" is used by cast syntax, but the lexer
    // still reports it as an invalid unsized literal and recovers with the plain token.
    let mut diagnostics = svlex::diagnostics::Diagnostics::new();

    // Act
    let tokens = lex("'", &mut diagnostics);

    // Assert
    assert_eq!(tokens[0].kind, TokenKind::Apostrophe);
    assert!(!diagnostics.is_empty());
}
