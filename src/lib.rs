// Copyright (c) ZeroC, Inc.

pub mod diagnostic_emitter;
pub mod diagnostics;
pub mod lexer;
pub mod lexer_options;
pub mod lexing_state;
pub mod source_file;
pub mod syntax_facts;
pub mod test_helpers;
pub mod utils;

// Re-export the `clap` dependency.
pub extern crate clap;

use crate::lexer_options::LexerOptions;
use crate::lexing_state::LexingState;
use crate::source_file::SourceFile;

/// Loads the source files named by the provided options and returns a [LexingState] holding them,
/// ready to be tokenized. File loading problems (missing files, duplicates, wrong extensions) are
/// reported into the state's diagnostics; lexing itself proceeds with whatever files loaded.
pub fn lex_from_options(options: &LexerOptions) -> LexingState {
    let mut state = LexingState::create();
    for file in utils::file_util::resolve_files_from(options, &mut state.diagnostics) {
        state.files.insert(file.relative_path.clone(), file);
    }
    state
}

/// Wraps the provided strings in in-memory source files (named "string-0", "string-1", ...) and
/// returns a [LexingState] holding them, ready to be tokenized.
pub fn lex_from_strings(inputs: &[&str]) -> LexingState {
    let mut state = LexingState::create();
    for (index, input) in inputs.iter().enumerate() {
        let file = SourceFile::new(format!("string-{index}"), input.as_bytes().to_vec());
        state.files.insert(file.relative_path.clone(), file);
    }
    state
}
