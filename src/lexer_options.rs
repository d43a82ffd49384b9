// Copyright (c) ZeroC, Inc.

use clap::ArgAction::Append;
use clap::{Parser, ValueEnum};
use serde::Serialize;

// Note: clap uses the doc-comments of fields to populate the '--help' output of tools built on
// this crate. Boolean flags automatically default to false, and strings automatically default to
// empty.

/// This struct is responsible for parsing the command line options common to all tools built on
/// top of the lexer. The option parsing capabilities are generated on the struct by the `clap`
/// macro.
#[derive(Debug, Default, Parser)]
#[command(rename_all = "kebab-case")]
pub struct LexerOptions {
    /// List of SystemVerilog files to lex.
    #[arg(required = true)]
    pub sources: Vec<String>,

    /// Instruct the lexer to treat warnings as errors.
    #[arg(short = 'W', long)]
    pub warn_as_error: bool,

    /// Instruct the lexer to allow (not emit) the specified lint.
    #[arg(short = 'A', long = "allow", value_name = "LINT", num_args = 1, action = Append)]
    pub allowed_lints: Vec<String>,

    /// Set the output format for emitted diagnostics.
    #[arg(value_enum, default_value_t = DiagnosticFormat::Human, long, ignore_case = true)]
    pub diagnostic_format: DiagnosticFormat,

    /// Disable ANSI color codes in diagnostic output.
    #[arg(long)]
    pub disable_color: bool,
}

/// This enum is used to specify the format for emitted diagnostics.
#[derive(Serialize, Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum DiagnosticFormat {
    /// Emitted diagnostics will be printed in an easily readable format. This is the default.
    #[default]
    Human,

    /// Emitted diagnostics will be serialized as a single line of JSON.
    Json,
}
