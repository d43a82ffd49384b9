// Copyright (c) ZeroC, Inc.

use super::DiagnosticLevel;
use crate::implement_diagnostic_functions;

#[derive(Debug)]
pub enum Lint {
    /// An input filename was provided multiple times.
    DuplicateFile {
        /// The path of the file that was supplied more than once.
        path: String,
    },

    /// A Unicode byte order mark was found at the very start of a file.
    /// Only a BOM at offset 0 triggers this; the same byte sequences later in a file are lexed as
    /// ordinary (malformed) characters.
    UnicodeBom,

    /// A multi-byte UTF-8 sequence was found outside of a string literal or comment.
    Utf8Char,

    /// A non-printable ASCII character was found outside of a string literal or comment.
    NonPrintableChar {
        /// The offending byte.
        byte: u8,
    },

    /// A "/*" sequence was found inside a block comment. Block comments do not nest; the inner
    /// "/*" is ignored and scanning continues to the first "*/".
    NestedBlockComment,
}

impl Lint {
    /// Returns the default diagnostic level this lint should use when reporting violations.
    pub fn get_default_level(&self) -> DiagnosticLevel {
        match self {
            Self::DuplicateFile { .. } => DiagnosticLevel::Warning,
            Self::UnicodeBom => DiagnosticLevel::Warning,
            Self::Utf8Char => DiagnosticLevel::Warning,
            Self::NonPrintableChar { .. } => DiagnosticLevel::Warning,
            Self::NestedBlockComment => DiagnosticLevel::Warning,
        }
    }
}

implement_diagnostic_functions!(
    Lint,
    (
        DuplicateFile,
        format!("source file was provided more than once: '{path}'"),
        path
    ),
    (
        UnicodeBom,
        "Unicode byte order mark found at the start of the file"
    ),
    (
        Utf8Char,
        "non-ASCII characters are not allowed outside of string literals and comments"
    ),
    (
        NonPrintableChar,
        format!("non-printable character (0x{byte:02X}) in source text"),
        byte
    ),
    (
        NestedBlockComment,
        "block comments cannot be nested"
    )
);
