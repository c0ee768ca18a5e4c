//! # Ledenlijst - membership list normalizer
//!
//! Ledenlijst reads the membership spreadsheet of a youth organization,
//! normalizes contact and address fields, and groups members per ban
//! (age/role category) for console tables or xlsx exports.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ xlsx / csv  │────▶│   Parser    │────▶│  Normalize  │────▶│ BanRegistry │
//! │ (leden)     │     │ (RawRow)    │     │  (Member)   │     │ (per ban)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────┬──────┘
//!                                                                    │
//!                                              ┌─────────────────────┼──────────┐
//!                                              ▼                     ▼          ▼
//!                                          render (tables)   export (xlsx)   JSON
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ledenlijst::{load_registry, render_all, PostcodeDirectory};
//! use std::path::Path;
//!
//! let result = load_registry(Path::new("leden.xlsx"), &PostcodeDirectory::builtin())?;
//! println!("{}", render_all(&result.registry));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Settings from the environment
//! - [`logging`] - tracing subscriber setup
//! - [`models`] - Cells, rows, members and bans
//! - [`postcode`] - Postal code to place name
//! - [`parser`] - Workbook and CSV readers
//! - [`transform`] - Normalizers, registry and pipeline
//! - [`render`] - Console tables
//! - [`export`] - xlsx workbooks

// Core modules
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

// Reading
pub mod parser;
pub mod postcode;

// Transformation
pub mod transform;

// Output
pub mod export;
pub mod render;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::Settings;
pub use error::{
    ConfigError, ExportError, ExportResult, PipelineError, PipelineResult, SheetError, SheetResult,
};
pub use export::{export_all, export_bans, ExportOptions};
pub use models::{Ban, CellValue, Member, MemberField, MemberKey, RawRow};
pub use parser::{read_sheet, SheetData, SheetFormat, SheetInfo};
pub use postcode::PostcodeDirectory;
pub use render::{render_all, render_ban};
pub use transform::{
    build_registry, capitalize, clean_ban, load_members, load_registry, normalize_date,
    normalize_phone, BanRegistry, InsertOutcome, InsertSummary, LoadResult,
};
