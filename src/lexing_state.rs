// Copyright (c) ZeroC, Inc.

use crate::diagnostic_emitter::{emit_totals, DiagnosticEmitter};
use crate::diagnostics::{get_totals, Diagnostic, Diagnostics};
use crate::lexer::tokens::Token;
use crate::lexer::Lexer;
use crate::lexer_options::LexerOptions;
use crate::source_file::SourceFile;
use std::collections::HashMap;
use std::io::Write;

/// Holds the source files being lexed and every diagnostic reported along the way, from file
/// loading through tokenization.
#[derive(Debug, Default)]
pub struct LexingState {
    pub files: HashMap<String, SourceFile>,
    pub diagnostics: Diagnostics,
}

impl LexingState {
    pub fn create() -> Self {
        LexingState {
            files: HashMap::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Runs the lexer over every file held by this state and returns the per-file token streams.
    /// The tokens borrow their lexemes from the files, so they only live as long as this state.
    /// Diagnostics reported while lexing are collected into this state's [Diagnostics] container.
    pub fn tokenize(&mut self) -> HashMap<String, Vec<Token<'_>>> {
        let mut tokens = HashMap::new();
        for (path, file) in &self.files {
            let lexer = Lexer::from_file(file, &mut self.diagnostics);
            tokens.insert(path.clone(), lexer.collect::<Vec<_>>());
        }
        tokens
    }

    /// Emits every diagnostic this state holds to the provided output, in the format the options
    /// ask for.
    pub fn emit_diagnostics<T: Write>(self, options: &LexerOptions, output: &mut T) {
        let diagnostics = self.diagnostics.into_updated(options);
        let mut emitter = DiagnosticEmitter::new(output, options, &self.files);
        emitter.emit_diagnostics(diagnostics).expect("failed to emit diagnostics");
    }

    /// Emits every diagnostic this state holds to stderr, prints the warning and error totals to
    /// stdout, and returns the process exit code lexing should finish with: 1 if any errors were
    /// reported (or any warnings, when warnings are treated as errors), and 0 otherwise.
    pub fn into_exit_code(self, options: &LexerOptions) -> i32 {
        let diagnostics = self.diagnostics.into_updated(options);
        let (total_warnings, total_errors) = get_totals(&diagnostics);

        let mut stderr = console::Term::stderr();
        let mut emitter = DiagnosticEmitter::new(&mut stderr, options, &self.files);
        emitter.emit_diagnostics(diagnostics).expect("failed to emit diagnostics");
        emit_totals(total_warnings, total_errors).expect("failed to emit totals");

        let failed = total_errors != 0 || (options.warn_as_error && total_warnings != 0);
        i32::from(failed)
    }

    /// Consumes this state and returns the diagnostics it contains, with lint levels updated
    /// according to the provided options.
    pub fn into_diagnostics(self, options: &LexerOptions) -> Vec<Diagnostic> {
        self.diagnostics.into_updated(options)
    }
}
