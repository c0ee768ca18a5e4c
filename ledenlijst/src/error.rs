//! Error types for the ledenlijst pipeline.
//!
//! - [`SheetError`] - reading the input spreadsheet (fatal)
//! - [`ExportError`] - writing xlsx workbooks
//! - [`ConfigError`] - invalid settings
//! - [`PipelineError`] - top-level, wraps all of the above
//!
//! Conversion is automatic via `From` implementations so `?` works across
//! layers. Best-effort conditions (unknown ban, unparseable phone or date,
//! unknown postal code) are never errors: they are logged and counted.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Input Errors
// =============================================================================

/// Errors while reading the membership spreadsheet.
///
/// Every variant carries the path so the user can locate the bad input.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Failed to read the file.
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The workbook could not be opened or parsed.
    #[error("Cannot open workbook '{}': {message}", .path.display())]
    Workbook { path: PathBuf, message: String },

    /// The workbook contains no worksheet at all.
    #[error("Workbook '{}' has no worksheet", .0.display())]
    NoWorksheet(PathBuf),

    /// File extension is not a supported spreadsheet format.
    #[error("Unsupported input format '{}' (expected xlsx, xls, ods or csv)", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Invalid CSV content.
    #[error("Invalid CSV in '{}' at line {line}: {message}", .path.display())]
    Csv {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A row does not carry the expected number of columns.
    #[error("'{}' row {row}: found {found} columns, expected at least {expected}", .path.display())]
    RowShape {
        path: PathBuf,
        row: usize,
        found: usize,
        expected: usize,
    },
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while writing exported workbooks.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The xlsx writer rejected the workbook.
    #[error("Workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Output directory could not be created.
    #[error("Cannot create output directory '{}': {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Invalid runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting has an unusable value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level errors returned by the binary and the pipeline functions.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input reading error.
    #[error("Input error: {0}")]
    Sheet(#[from] SheetError),

    /// Export error.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for input reading.
pub type SheetResult<T> = Result<T, SheetError>;

/// Result type for exports.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
