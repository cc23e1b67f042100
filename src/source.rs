//! Source text for the consoles.
//!
//! The built-in text is a fake kernel module compiled into the binary;
//! `--source` swaps in any text file.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Text typed out when no `--source` file is given.
pub const BUILTIN_SOURCE: &str = include_str!("../assets/kernel.c");

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read source file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source file '{path}' is empty")]
    Empty { path: PathBuf },
}

/// Load the console text from `path`, or the built-in text.
pub fn load_source(path: Option<&Path>) -> Result<String, SourceError> {
    let Some(path) = path else {
        return Ok(BUILTIN_SOURCE.to_string());
    };

    let text = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if text.trim().is_empty() {
        return Err(SourceError::Empty {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(path = %path.display(), chars = text.chars().count(), "source loaded");
    Ok(text)
}
