//! Error types for the regeneration pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading a generated header into the IR.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected '{{' after namespace {name}")]
    ExpectedBrace { name: String, line: usize },

    #[error("line {line}: unmatched closing brace")]
    UnmatchedBrace { line: usize },

    #[error("line {line}: ID definition outside any namespace")]
    DefOutsideNamespace { line: usize },

    #[error("line {line}: invalid ID value in {text:?}")]
    InvalidValue { line: usize, text: String },

    #[error("line {line}: unrecognized line {text:?}")]
    UnrecognizedLine { line: usize, text: String },

    #[error("line {line}: unexpected namespace {name}")]
    UnexpectedNamespace { name: String, line: usize },

    #[error("line {line}: group {name} has no GROUP constant")]
    MissingGroupId { name: String, line: usize },

    #[error("expected a single root namespace AK")]
    MissingRoot,

    #[error("unterminated namespace at end of input")]
    UnterminatedNamespace,
}

/// Semantic errors in an otherwise well-formed header.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidateError {
    #[error(
        "duplicate identifier {ident} in namespace {namespace} (lines {first} and {second})"
    )]
    DuplicateIdent {
        namespace: String,
        ident: String,
        first: usize,
        second: usize,
    },

    #[error("identifier {ident} appears with conflicting values {first} and {second}")]
    ConflictingValue {
        ident: String,
        first: u32,
        second: u32,
    },
}

/// Top-level error type for the tool.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validate(#[from] ValidateError),

    #[error("{path} is out of date with the authoring export; rerun wwise-ids-gen")]
    Stale { path: PathBuf },
}
