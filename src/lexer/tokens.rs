// Copyright (c) ZeroC, Inc.

//! This module defines all the tokens and trivia that the [Lexer](super::lexer::Lexer) can return.

use crate::source_file::Location;
use crate::syntax_facts::DirectiveKind;
use std::fmt;

/// A single token of SystemVerilog source text.
///
/// Tokens borrow their raw text directly from the source buffer, so a token's `lexeme` is always
/// byte-for-byte identical to the source slice it covers. The whitespace, comments, and line
/// endings that preceded the token are attached to it as [leading trivia](Trivium), which makes
/// the token stream lossless: concatenating every token's trivia and lexeme reproduces the input.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'input> {
    pub kind: TokenKind<'input>,
    /// The raw bytes of this token, taken directly from the input.
    pub lexeme: &'input [u8],
    /// The starting [Location] of this token in its source file.
    pub start: Location,
    /// The ending [Location] of this token in its source file.
    pub end: Location,
    /// The trivia between the previous token and this one.
    pub trivia: Vec<Trivium<'input>>,
}

/// Source-significant but syntactically inert text: whitespace, comments, and line endings.
/// Each trivium is attached to the token that follows it.
#[derive(Clone, Debug, PartialEq)]
pub struct Trivium<'input> {
    pub kind: TriviaKind,
    /// The raw bytes of this trivium, taken directly from the input.
    pub raw: &'input [u8],
}

/// This enum specifies the kinds of trivia the lexer records.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TriviaKind {
    /// A run of horizontal whitespace (spaces and tabs), collapsed into a single trivium.
    Whitespace,

    /// A single line ending: "\r\n", "\r", or "\n".
    EndOfLine,

    /// A comment beginning with "//" and running to (but not including) the end of the line.
    LineComment,

    /// A comment delimited by "/*" and "*/". Block comments do not nest.
    BlockComment,

    /// A backslash immediately followed by a line ending, inside a directive.
    /// It escapes the newline so the directive continues onto the next line.
    LineContinuation,
}

/// Which flavor of identifier a [`TokenKind::Identifier`] is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IdentifierKind {
    /// A plain identifier: a letter or underscore followed by letters, digits, underscores, and
    /// dollar signs.
    Normal,

    /// An escaped identifier: a backslash followed by printable non-whitespace characters.
    /// The backslash is not counted as part of the identifier's name.
    Escaped,
}

/// The base of a vector literal's digits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumericBase {
    Binary,  // 'b
    Octal,   // 'o
    Decimal, // 'd
    Hex,     // 'h
}

/// A single digit of a four-valued logic literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogicDigit {
    /// A known digit value, 0 through 15 depending on the base.
    Value(u8),

    /// The unknown value, written 'x' or 'X'.
    X,

    /// The high-impedance value, written 'z', 'Z', or '?'.
    Z,
}

/// The digits of a sized or unsized vector literal, e.g. `4'sb10xz` or `'hFF`.
#[derive(Clone, Debug, PartialEq)]
pub struct LogicVector {
    /// The declared size in bits, or `None` for an unsized literal.
    pub size: Option<u32>,
    /// True if the literal carried the 's'/'S' signedness flag.
    pub signed: bool,
    pub base: NumericBase,
    /// The literal's digits in source order, with underscores removed.
    pub digits: Vec<LogicDigit>,
}

/// The decoded value of an integer literal.
#[derive(Clone, Debug, PartialEq)]
pub enum IntegerValue {
    /// A plain decimal literal, clamped to `i32::MAX` on overflow.
    Integer(i32),

    /// A sized or unsized vector literal.
    Vector(LogicVector),

    /// An unsized single-bit literal: `'0`, `'1`, `'x`, or `'z`.
    SingleBit(LogicDigit),
}

/// This enum specifies all the kinds of tokens that the [Lexer](super::lexer::Lexer) can return.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind<'input> {
    /// An identifier. Reserved words also lex as identifiers; parsers reclassify them with the
    /// [syntax facts](crate::syntax_facts::is_keyword) table.
    Identifier {
        name: &'input str,
        kind: IdentifierKind,
    },

    /// A system task or function name: a '$' followed by identifier characters, e.g. "$display".
    /// The '$' is part of the name. A lone '$' is the [Dollar](TokenKind::Dollar) token instead.
    SystemIdentifier(&'input str),

    /// A built-in directive: a backquote followed by one of the names the preprocessor
    /// understands, e.g. "`include". The backquote is not part of the name.
    Directive {
        name: &'input str,
        kind: DirectiveKind,
    },

    /// A backquote followed by a name that isn't a built-in directive, i.e. a usage of a
    /// user-defined macro.
    MacroUsage(&'input str),

    /// An integer or vector literal. See [IntegerValue].
    IntegerLiteral(IntegerValue),

    /// A real (floating point) literal, e.g. "1.5e2".
    RealLiteral(f64),

    /// A string literal. The value holds the decoded bytes: escape sequences have been processed
    /// and the enclosing quotation marks removed. The original spelling is in the token's lexeme.
    StringLiteral(Vec<u8>),

    // Macro escapes
    MacroQuote,        // `"
    MacroPaste,        // ``
    MacroEscapedQuote, // `\`"

    // Brackets
    LeftParenthesis,      // "("
    RightParenthesis,     // ")"
    LeftParenthesisStar,  // "(*"
    StarRightParenthesis, // "*)"
    LeftBracket,          // "["
    RightBracket,         // "]"
    LeftBrace,            // "{"
    RightBrace,           // "}"
    ApostropheLeftBrace,  // "'{"

    // Symbols
    Semicolon,                // ";"
    Colon,                    // ":"
    DoubleColon,              // "::"
    ColonEquals,              // ":="
    ColonSlash,               // ":/"
    Comma,                    // ","
    Dot,                      // "."
    DotStar,                  // ".*"
    QuestionMark,             // "?"
    At,                       // "@"
    DoubleAt,                 // "@@"
    Hash,                     // "#"
    DoubleHash,               // "##"
    HashMinusHash,            // "#-#"
    HashEqualsHash,           // "#=#"
    Dollar,                   // "$"
    Apostrophe,               // "'"
    Equals,                   // "="
    DoubleEquals,             // "=="
    TripleEquals,             // "==="
    DoubleEqualsQuestion,     // "==?"
    EqualsArrow,              // "=>"
    Plus,                     // "+"
    DoublePlus,               // "++"
    PlusEquals,               // "+="
    PlusColon,                // "+:"
    Minus,                    // "-"
    DoubleMinus,              // "--"
    MinusEquals,              // "-="
    MinusColon,               // "-:"
    Arrow,                    // "->"
    DoubleArrow,              // "->>"
    Star,                     // "*"
    DoubleStar,               // "**"
    StarEquals,               // "*="
    StarArrow,                // "*>"
    StarDoubleColonStar,      // "*::*"
    Slash,                    // "/"
    SlashEquals,              // "/="
    Percent,                  // "%"
    PercentEquals,            // "%="
    Ampersand,                // "&"
    DoubleAmpersand,          // "&&"
    TripleAmpersand,          // "&&&"
    AmpersandEquals,          // "&="
    Pipe,                     // "|"
    DoublePipe,               // "||"
    PipeEquals,               // "|="
    PipeArrow,                // "|->"
    PipeEqualsArrow,          // "|=>"
    Caret,                    // "^"
    CaretEquals,              // "^="
    CaretTilde,               // "^~"
    Tilde,                    // "~"
    TildeAmpersand,           // "~&"
    TildePipe,                // "~|"
    TildeCaret,               // "~^"
    Exclamation,              // "!"
    ExclamationEquals,        // "!="
    ExclamationDoubleEquals,  // "!=="
    ExclamationEqualsQuestion, // "!=?"
    LessThan,                 // "<"
    LessThanEquals,           // "<="
    BidirectionalArrow,       // "<->"
    LeftShift,                // "<<"
    LeftShiftEqual,           // "<<="
    TripleLeftShift,          // "<<<"
    TripleLeftShiftEqual,     // "<<<="
    GreaterThan,              // ">"
    GreaterThanEquals,        // ">="
    RightShift,               // ">>"
    RightShiftEqual,          // ">>="
    TripleRightShift,         // ">>>"
    TripleRightShiftEqual,    // ">>>="

    /// A token produced when the lexer reaches the end of a directive: either an unescaped
    /// newline while in directive mode, or end of input. Its lexeme is empty.
    EndOfDirective,

    /// A token produced when the lexer reaches the end of its input. Its lexeme is empty, and it
    /// carries any trailing trivia. Lexing past this point keeps returning it.
    EndOfFile,

    /// A token produced when the input couldn't be classified: a malformed UTF-8 sequence, a
    /// non-printable character, an embedded NUL, or a stray escape. The offending bytes are in
    /// the token's lexeme, and a diagnostic has always been reported alongside it.
    Unknown,
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name, .. } => return f.write_str(name),
            Self::SystemIdentifier(name) => return f.write_str(name),
            Self::Directive { name, .. } => return write!(f, "`{name}"),
            Self::MacroUsage(name) => return write!(f, "`{name}"),
            Self::IntegerLiteral(value) => return write!(f, "{value}"),
            Self::RealLiteral(value) => return write!(f, "{value}"),
            Self::StringLiteral(value) => return write!(f, "\"{}\"", String::from_utf8_lossy(value)),
            fixed => return f.write_str(fixed.fixed_text()),
        }
    }
}

impl TokenKind<'_> {
    /// Returns the source spelling of a token kind with a fixed lexeme.
    /// Panics if called on a kind that carries a payload.
    fn fixed_text(&self) -> &'static str {
        match self {
            // Macro escapes
            Self::MacroQuote => "`\"",
            Self::MacroPaste => "``",
            Self::MacroEscapedQuote => "`\\`\"",

            // Brackets
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftParenthesisStar => "(*",
            Self::StarRightParenthesis => "*)",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::ApostropheLeftBrace => "'{",

            // Symbols
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::DoubleColon => "::",
            Self::ColonEquals => ":=",
            Self::ColonSlash => ":/",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::DotStar => ".*",
            Self::QuestionMark => "?",
            Self::At => "@",
            Self::DoubleAt => "@@",
            Self::Hash => "#",
            Self::DoubleHash => "##",
            Self::HashMinusHash => "#-#",
            Self::HashEqualsHash => "#=#",
            Self::Dollar => "$",
            Self::Apostrophe => "'",
            Self::Equals => "=",
            Self::DoubleEquals => "==",
            Self::TripleEquals => "===",
            Self::DoubleEqualsQuestion => "==?",
            Self::EqualsArrow => "=>",
            Self::Plus => "+",
            Self::DoublePlus => "++",
            Self::PlusEquals => "+=",
            Self::PlusColon => "+:",
            Self::Minus => "-",
            Self::DoubleMinus => "--",
            Self::MinusEquals => "-=",
            Self::MinusColon => "-:",
            Self::Arrow => "->",
            Self::DoubleArrow => "->>",
            Self::Star => "*",
            Self::DoubleStar => "**",
            Self::StarEquals => "*=",
            Self::StarArrow => "*>",
            Self::StarDoubleColonStar => "*::*",
            Self::Slash => "/",
            Self::SlashEquals => "/=",
            Self::Percent => "%",
            Self::PercentEquals => "%=",
            Self::Ampersand => "&",
            Self::DoubleAmpersand => "&&",
            Self::TripleAmpersand => "&&&",
            Self::AmpersandEquals => "&=",
            Self::Pipe => "|",
            Self::DoublePipe => "||",
            Self::PipeEquals => "|=",
            Self::PipeArrow => "|->",
            Self::PipeEqualsArrow => "|=>",
            Self::Caret => "^",
            Self::CaretEquals => "^=",
            Self::CaretTilde => "^~",
            Self::Tilde => "~",
            Self::TildeAmpersand => "~&",
            Self::TildePipe => "~|",
            Self::TildeCaret => "~^",
            Self::Exclamation => "!",
            Self::ExclamationEquals => "!=",
            Self::ExclamationDoubleEquals => "!==",
            Self::ExclamationEqualsQuestion => "!=?",
            Self::LessThan => "<",
            Self::LessThanEquals => "<=",
            Self::BidirectionalArrow => "<->",
            Self::LeftShift => "<<",
            Self::LeftShiftEqual => "<<=",
            Self::TripleLeftShift => "<<<",
            Self::TripleLeftShiftEqual => "<<<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEquals => ">=",
            Self::RightShift => ">>",
            Self::RightShiftEqual => ">>=",
            Self::TripleRightShift => ">>>",
            Self::TripleRightShiftEqual => ">>>=",

            Self::EndOfDirective => "end of directive",
            Self::EndOfFile => "end of file",
            Self::Unknown => "unknown token",

            _ => unreachable!("fixed_text called on a payload-carrying token kind"),
        }
    }
}

impl fmt::Display for IntegerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::SingleBit(digit) => write!(f, "'{digit}"),
            Self::Vector(vector) => {
                if let Some(size) = vector.size {
                    write!(f, "{size}")?;
                }
                f.write_str("'")?;
                if vector.signed {
                    f.write_str("s")?;
                }
                f.write_str(match vector.base {
                    NumericBase::Binary => "b",
                    NumericBase::Octal => "o",
                    NumericBase::Decimal => "d",
                    NumericBase::Hex => "h",
                })?;
                for digit in &vector.digits {
                    write!(f, "{digit}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for LogicDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value:x}"),
            Self::X => f.write_str("x"),
            Self::Z => f.write_str("z"),
        }
    }
}
