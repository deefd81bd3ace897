//! Error types for ferro-sifts
//!
//! Translation failures are reported through a single error kind,
//! [`PositionMappingError`], whose variants separate "the request was
//! malformed" from "the request was fine but nothing covers it". Callers are
//! expected to handle those two classes differently.
//!
//! [`FerroError`] is the crate-level error used by the document adapter,
//! configuration loading and the CLI. It wraps [`PositionMappingError`] so a
//! translation failure can be propagated with `?` alongside I/O errors.

use std::fmt;
use thiserror::Error;

use crate::translate::Direction;

/// Error codes for categorizing errors
///
/// These codes can be used for programmatic error handling
/// and for documentation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Translation errors (E1xxx)
    /// Mapping set has no segments
    EmptyMappingSet = 1001,
    /// Requested range is malformed
    InvalidRange = 1002,
    /// No segment overlaps the requested range
    NoStructuralCoverage = 1003,

    // Document errors (E2xxx)
    /// Alignment document is structurally invalid
    InvalidDocument = 2001,
    /// Requested entry or accession is absent from the document
    EntryNotFound = 2002,
    /// Command-line or batch input could not be parsed
    InvalidInput = 2003,

    // IO errors (E9xxx)
    /// File IO error
    IoError = 9001,
    /// JSON parsing error
    JsonError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a brief description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::EmptyMappingSet => "mapping set is empty",
            ErrorCode::InvalidRange => "invalid residue range",
            ErrorCode::NoStructuralCoverage => "no structural coverage for this region",
            ErrorCode::InvalidDocument => "invalid alignment document",
            ErrorCode::EntryNotFound => "entry not found in alignment document",
            ErrorCode::InvalidInput => "invalid input",
            ErrorCode::IoError => "file I/O error",
            ErrorCode::JsonError => "JSON parsing error",
            ErrorCode::ConfigError => "configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure of a single translation call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionMappingError {
    /// The mapping set contains no segments
    #[error("Mapping set is empty")]
    EmptyMappingSet,

    /// The requested range is malformed (`start > end` or non-positive bounds)
    #[error("Invalid range {start}-{end}: {msg}")]
    InvalidRange { start: i64, end: i64, msg: String },

    /// No segment overlaps the requested range
    #[error("No segment overlaps {} range {start}-{end}", .direction.source_label())]
    NoOverlap {
        start: i64,
        end: i64,
        direction: Direction,
    },
}

impl PositionMappingError {
    /// Get the error code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            PositionMappingError::EmptyMappingSet => ErrorCode::EmptyMappingSet,
            PositionMappingError::InvalidRange { .. } => ErrorCode::InvalidRange,
            PositionMappingError::NoOverlap { .. } => ErrorCode::NoStructuralCoverage,
        }
    }

    /// True when the request itself was well formed but nothing covers it.
    ///
    /// Such failures are not fatal to a viewer session: a user may select a
    /// UniProt region with no resolved structure.
    pub fn is_missing_coverage(&self) -> bool {
        matches!(
            self,
            PositionMappingError::EmptyMappingSet | PositionMappingError::NoOverlap { .. }
        )
    }

    /// Message suitable for showing to an end user
    pub fn user_message(&self) -> String {
        match self {
            PositionMappingError::InvalidRange { .. } => self.to_string(),
            _ => "No structural coverage for this region".to_string(),
        }
    }

    /// Format the error with its code prefix, e.g. `[E1003] No segment overlaps ...`
    pub fn detailed_message(&self) -> String {
        format!("[{}] {}", self.code(), self)
    }
}

/// Main error type for ferro-sifts operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FerroError {
    /// Translation failure
    #[error(transparent)]
    Mapping(#[from] PositionMappingError),

    /// Alignment document does not have the expected layout
    #[error("Invalid alignment document: {msg}")]
    InvalidDocument { msg: String },

    /// Entry or accession not present in the document
    #[error("Not found in alignment document: {id}")]
    EntryNotFound { id: String },

    /// Unparseable command-line or batch input
    #[error("Invalid input: {msg}")]
    InvalidInput { msg: String },

    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON parsing error
    #[error("JSON error: {msg}")]
    Json { msg: String },

    /// Configuration file error
    #[error("Config error: {msg}")]
    Config { msg: String },
}

impl FerroError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            FerroError::Mapping(e) => e.code(),
            FerroError::InvalidDocument { .. } => ErrorCode::InvalidDocument,
            FerroError::EntryNotFound { .. } => ErrorCode::EntryNotFound,
            FerroError::InvalidInput { .. } => ErrorCode::InvalidInput,
            FerroError::Io { .. } => ErrorCode::IoError,
            FerroError::Json { .. } => ErrorCode::JsonError,
            FerroError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Get a formatted error including the code
    pub fn detailed_message(&self) -> String {
        format!("[{}] {}", self.code(), self)
    }
}

impl From<std::io::Error> for FerroError {
    fn from(err: std::io::Error) -> Self {
        FerroError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FerroError {
    fn from(err: serde_json::Error) -> Self {
        FerroError::Json {
            msg: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FerroError {
    fn from(err: toml::de::Error) -> Self {
        FerroError::Config {
            msg: err.to_string(),
        }
    }
}
