// Copyright (c) ZeroC, Inc.

use crate::implement_diagnostic_functions;

#[derive(Debug)]
pub enum Error {
    // ----------------  Generic Errors ---------------- //
    IO {
        action: &'static str,
        path: String,
        error: std::io::Error,
    },

    // ----------------  Byte-Level Errors ---------------- //
    /// A NUL byte was found before the end of the source buffer.
    EmbeddedNull,

    // ----------------  String Literal Errors ---------------- //
    /// A string literal was missing its closing quotation mark when the end of the file was reached.
    UnterminatedStringLiteral,

    /// An unescaped newline was found inside a string literal.
    NewlineInStringLiteral,

    /// An octal escape code in a string literal doesn't fit in a single byte.
    OctalEscapeCodeTooBig {
        /// The value the escape code evaluated to.
        value: u32,
    },

    /// A hexadecimal escape code in a string literal had no hex digits after the 'x'.
    InvalidHexEscapeCode,

    /// A string literal contained an escape code the language doesn't define.
    UnknownEscapeCode {
        /// The character that followed the backslash.
        escape: char,
    },

    // ----------------  Identifier & Directive Errors ---------------- //
    /// An escaped identifier's backslash was immediately followed by whitespace.
    EscapedWhitespace,

    /// A backquote was not followed by a directive name.
    MisplacedDirectiveChar,

    // ----------------  Numeric Literal Errors ---------------- //
    /// A real literal had no digits after its decimal point.
    MissingFractionalDigits,

    /// A real literal's exponent had no digits.
    MissingExponentDigits,

    /// A real literal's magnitude is too large to represent as a double.
    RealExponentTooLarge,

    /// A decimal literal was outside the representable range of a signed 32-bit integer.
    SignedLiteralTooLarge {
        /// The value that was scanned before clamping.
        value: u64,
    },

    /// A vector literal declared a size of zero bits.
    IntegerSizeZero,

    /// A vector literal declared a size wider than the maximum supported width.
    IntegerSizeTooLarge,

    /// A vector literal's apostrophe was not followed by a base specifier.
    MissingVectorBase,

    /// A vector literal's base specifier was not followed by any digits.
    MissingVectorDigits,

    /// An apostrophe began an unsized literal, but what followed was neither a base specifier nor
    /// a single-bit value.
    InvalidUnsizedLiteral,

    // ----------------  Comment Errors ---------------- //
    /// A block comment was missing its closing "*/" when the end of the file was reached.
    UnterminatedBlockComment,

    /// A block comment inside a directive spanned multiple lines.
    SplitBlockCommentInDirective,
}

implement_diagnostic_functions!(
    Error,
    (
        "E001",
        IO,
        format!("unable to {action} '{path}': {}", io_error_message(error)),
        action,
        path,
        error
    ),
    (
        "E002",
        EmbeddedNull,
        "embedded NUL bytes are not allowed in source text"
    ),
    (
        "E003",
        UnterminatedStringLiteral,
        "string literal is missing its closing quotation mark"
    ),
    (
        "E004",
        NewlineInStringLiteral,
        "string literals cannot contain unescaped newlines"
    ),
    (
        "E005",
        OctalEscapeCodeTooBig,
        format!("octal escape code '{value}' is too large to fit in a single byte"),
        value
    ),
    (
        "E006",
        InvalidHexEscapeCode,
        "hexadecimal escape code is missing its hex digits"
    ),
    (
        "E007",
        UnknownEscapeCode,
        format!("unknown character escape code '\\{escape}'"),
        escape
    ),
    (
        "E008",
        EscapedWhitespace,
        "escaped identifiers cannot start with whitespace"
    ),
    (
        "E009",
        MisplacedDirectiveChar,
        "expected a directive name after '`'"
    ),
    (
        "E010",
        MissingFractionalDigits,
        "real literal is missing digits after its decimal point"
    ),
    (
        "E011",
        MissingExponentDigits,
        "real literal exponent is missing its digits"
    ),
    (
        "E012",
        RealExponentTooLarge,
        "real literal is too large to represent"
    ),
    (
        "E013",
        SignedLiteralTooLarge,
        format!("decimal literal '{value}' is too large for a signed 32-bit integer"),
        value
    ),
    (
        "E014",
        IntegerSizeZero,
        "vector literals cannot have a size of zero"
    ),
    (
        "E015",
        IntegerSizeTooLarge,
        "vector literal size exceeds the maximum supported width"
    ),
    (
        "E016",
        MissingVectorBase,
        "expected a base specifier after the vector size"
    ),
    (
        "E017",
        MissingVectorDigits,
        "vector literal is missing its digits"
    ),
    (
        "E018",
        InvalidUnsizedLiteral,
        "expected a base specifier or single-bit value after \"'\""
    ),
    (
        "E019",
        UnterminatedBlockComment,
        "block comment is missing its closing \"*/\""
    ),
    (
        "E020",
        SplitBlockCommentInDirective,
        "block comments within directives cannot contain newlines"
    )
);

fn io_error_message(error: &std::io::Error) -> String {
    match error.kind() {
        std::io::ErrorKind::NotFound => "No such file or directory".to_owned(),
        _ => error.to_string(),
    }
}
