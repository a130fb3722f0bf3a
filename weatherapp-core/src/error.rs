use std::{io, path::PathBuf};

use thiserror::Error;

/// A field was present in the payload but had the wrong JSON type.
///
/// Only used inside the parser to discard the affected record; it never
/// reaches callers.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("field `{key}` expected {expected}, found {found}")]
pub struct FieldError {
    pub key: &'static str,
    pub expected: &'static str,
    pub found: &'static str,
}

/// Failure while persisting a downloaded icon.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("Failed to create icon file")]
    Create(#[source] io::Error),

    #[error("Failed to write icon file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to resolve absolute path of icon file: {}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
