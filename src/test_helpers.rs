// Copyright (c) ZeroC, Inc.

//! This module contains helper functions that are useful for testing the lexer and the tools
//! built on top of it.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::lexer::tokens::{Token, TokenKind};
use crate::lexer::Lexer;
use crate::lexer_options::LexerOptions;

/// Lexes the provided string (as the file "string-0") and returns the token stream, including the
/// final `EndOfFile` token. Diagnostics are reported into the provided container.
pub fn lex<'input>(source: &'input str, diagnostics: &mut Diagnostics) -> Vec<Token<'input>> {
    Lexer::new("string-0", source.as_bytes(), diagnostics).collect()
}

/// Lexes the provided string and returns the token stream.
/// This function asserts that no diagnostics were reported; use [lex] to inspect them instead.
#[must_use]
pub fn lex_for_tokens(source: &str) -> Vec<Token<'_>> {
    let mut diagnostics = Diagnostics::new();
    let tokens = lex(source, &mut diagnostics);
    let diagnostics = diagnostics.into_inner();
    assert!(
        diagnostics.is_empty(),
        "expected no diagnostics, but got: {diagnostics:?}",
    );
    tokens
}

/// Lexes the provided string and returns the kinds of its tokens, without the final `EndOfFile`.
/// This function asserts that no diagnostics were reported.
#[must_use]
pub fn lex_for_kinds(source: &str) -> Vec<TokenKind<'_>> {
    let mut tokens = lex_for_tokens(source);
    assert!(matches!(tokens.pop().map(|token| token.kind), Some(TokenKind::EndOfFile)));
    tokens.into_iter().map(|token| token.kind).collect()
}

/// Lexes the provided string and returns the diagnostics that were reported, with lint levels
/// updated according to the default options.
#[must_use]
pub fn lex_for_diagnostics(source: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Diagnostics::new();
    let _tokens = lex(source, &mut diagnostics);
    diagnostics.into_updated(&LexerOptions::default())
}

/// Compares diagnostics emitted by the lexer to an array of expected diagnostics.
/// It ensures that the expected number of diagnostics were emitted (ie: that both lists are the same length).
///
/// If the correct number were emitted, it checks each diagnostic against the expected array in order.
/// For each diagnostic we ensure:
/// - It has the correct code.
/// - It has the correct message.
/// - If a span was expected, that it has the correct span.
/// - If notes are expected, we check that all the notes have correct messages and spans.
///
/// If the expected diagnostics don't include spans or notes, this function doesn't check them.
/// This is useful for the majority of tests that aren't explicitly testing spans or notes.
pub fn check_diagnostics<const L: usize>(diagnostics: Vec<Diagnostic>, expected: [impl Into<Diagnostic>; L]) {
    // Check that the correct number of diagnostics were emitted.
    if expected.len() != diagnostics.len() {
        eprintln!(
            "Expected {} diagnostics, but got {}.",
            expected.len(),
            diagnostics.len()
        );
        eprintln!("The emitted diagnostics were:");
        for diagnostic in diagnostics {
            eprintln!("\t{diagnostic:?}");
        }
        eprintln!();
        panic!("test failure");
    }

    // Check that the emitted diagnostics match what was expected.
    for (expect, diagnostic) in expected.into_iter().zip(diagnostics) {
        let expect: Diagnostic = expect.into();
        let mut failed = false;

        // Check that the codes match.
        if expect.code() != diagnostic.code() {
            eprintln!("diagnostic codes didn't match:");
            eprintln!("\texpected '{:?}', but got '{:?}'", expect.code(), diagnostic.code());
            failed = true;
        }

        // Check that the messages match.
        if expect.message() != diagnostic.message() {
            eprintln!("diagnostic messages didn't match:");
            eprintln!("\texpected: \"{}\"", expect.message());
            eprintln!("\t but got: \"{}\"", diagnostic.message());
            failed = true;
        }

        // If a span was provided, check that it matches.
        if expect.span().is_some() && expect.span() != diagnostic.span() {
            eprintln!("diagnostic spans didn't match:");
            eprintln!("\texpected: \"{:?}\"", expect.span());
            eprintln!("\t but got: \"{:?}\"", diagnostic.span());
            failed = true;
        }

        // If notes were provided, check that they match.
        if !expect.notes().is_empty() {
            let expected_notes = expect.notes();
            let emitted_notes = diagnostic.notes();
            if expected_notes.len() != emitted_notes.len() {
                eprintln!(
                    "Expected {} notes, but got {}.",
                    expected_notes.len(),
                    emitted_notes.len()
                );
                eprintln!("The emitted notes were:");
                for note in emitted_notes {
                    eprintln!("\t{note:?}");
                }
                failed = true;
            } else {
                for (expected_note, emitted_note) in expected_notes.iter().zip(emitted_notes) {
                    // Check that the messages match.
                    if expected_note.message != emitted_note.message {
                        eprintln!("note messages didn't match:");
                        eprintln!("\texpected: \"{}\"", expected_note.message);
                        eprintln!("\t but got: \"{}\"", emitted_note.message);
                        failed = true;
                    }

                    // If a span was provided, check that it matches.
                    if expected_note.span.is_some() && expected_note.span != emitted_note.span {
                        eprintln!("note spans didn't match:");
                        eprintln!("\texpected: \"{:?}\"", expected_note.span);
                        eprintln!("\t but got: \"{:?}\"", emitted_note.span);
                        failed = true;
                    }
                }
            }
        }

        // If the checks failed, panic to signal a test failure.
        if failed {
            eprintln!();
            panic!("test failure");
        }
    }
}
