// Copyright (c) ZeroC, Inc.

use crate::diagnostics::{Diagnostic, Diagnostics, Error, Lint};
use crate::lexer_options::LexerOptions;
use crate::source_file::SourceFile;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::{fs, io};

/// A wrapper around a file path that implements Hash and Eq. This allows us to use a HashMap to store the path the
/// user supplied while using the canonicalized path as the key.
#[derive(Debug, Eq)]
struct FilePath {
    // The path that the user supplied
    path: String,
    // The canonicalized path
    canonicalized_path: PathBuf,
}

impl TryFrom<&String> for FilePath {
    type Error = io::Error;

    /// Creates a new [FilePath] from the given path. If the path does not exist, an error is returned.
    fn try_from(path: &String) -> Result<Self, Self::Error> {
        PathBuf::from(&path).canonicalize().map(|canonicalized_path| Self {
            path: path.clone(),
            canonicalized_path,
        })
    }
}

impl Hash for FilePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonicalized_path.hash(state);
    }
}

impl PartialEq for FilePath {
    fn eq(&self, other: &Self) -> bool {
        self.canonicalized_path == other.canonicalized_path
    }
}

/// Locates and reads the source files named by the provided options.
/// Duplicated files are reported as lints, and unreadable files are reported as errors.
pub fn resolve_files_from(options: &LexerOptions, diagnostics: &mut Diagnostics) -> Vec<SourceFile> {
    // Create a map of all the source files. A HashMap protects against files being passed twice;
    // the canonicalized path is the key, so the same file reached through different paths still
    // counts as a duplicate.
    let mut file_paths = HashMap::new();

    for path in &options.sources {
        let path_buf = PathBuf::from(path);

        // If the path is not a SystemVerilog file, report an error and continue to the next path.
        if !is_source_file(&path_buf) {
            let io_error = io::Error::other("SystemVerilog files must end with a '.sv' or '.svh' extension");
            Diagnostic::new(Error::IO {
                action: "read",
                path: path.to_owned(),
                error: io_error,
            })
            .push_into(diagnostics);
            continue;
        }

        // If the path cannot be canonicalized (most commonly because it doesn't exist), report an
        // error and continue to the next path.
        let file_path = match FilePath::try_from(path) {
            Ok(file_path) => file_path,
            Err(error) => {
                Diagnostic::new(Error::IO {
                    action: "read",
                    path: path.to_owned(),
                    error,
                })
                .push_into(diagnostics);
                continue;
            }
        };

        // Any duplicate source files are reported as a lint.
        let supplied_path = file_path.path.clone();
        if file_paths.insert(file_path, ()).is_some() {
            Diagnostic::new(Lint::DuplicateFile { path: supplied_path }).push_into(diagnostics);
        }
    }

    // Iterate through the discovered files and try to read them into byte buffers.
    // Report an error if it fails, otherwise create a new `SourceFile` to hold the data.
    let mut files = Vec::new();
    for (file_path, _) in file_paths {
        match fs::read(&file_path.path) {
            Ok(raw_bytes) => files.push(SourceFile::new(file_path.path, raw_bytes)),
            Err(error) => Diagnostic::new(Error::IO {
                action: "read",
                path: file_path.path,
                error,
            })
            .push_into(diagnostics),
        }
    }

    files
}

/// Returns true if the path has the 'sv' or 'svh' extension.
fn is_source_file(path: &Path) -> bool {
    path.extension()
        .filter(|ext| matches!(ext.to_str(), Some("sv") | Some("svh")))
        .is_some()
}
