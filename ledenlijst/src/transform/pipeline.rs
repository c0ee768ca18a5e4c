//! High-level pipeline: read the membership file and group it per ban.
//!
//! ```rust,ignore
//! use ledenlijst::{load_registry, PostcodeDirectory};
//! use std::path::Path;
//!
//! let result = load_registry(Path::new("leden.xlsx"), &PostcodeDirectory::builtin())?;
//! println!("{} members placed", result.summary.inserted);
//! ```
//!
//! Input errors abort the run. Everything after reading is best-effort:
//! members are always built, unknown bans are only counted.

use std::path::Path;

use crate::error::{PipelineResult, SheetResult};
use crate::models::Member;
use crate::parser::{read_sheet, SheetInfo};
use crate::postcode::PostcodeDirectory;

use super::registry::{BanRegistry, InsertSummary};

/// Result of [`load_registry`].
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub registry: BanRegistry,
    pub summary: InsertSummary,
    pub info: SheetInfo,
}

/// Read the file and build one member per non-blank data row.
pub fn load_members(
    path: &Path,
    postcodes: &PostcodeDirectory,
) -> SheetResult<(SheetInfo, Vec<Member>)> {
    let data = read_sheet(path)?;
    let members = data
        .rows
        .iter()
        .map(|row| Member::from_row(row, postcodes))
        .collect();
    Ok((data.info, members))
}

/// Group members per ban, in input order.
pub fn build_registry(members: Vec<Member>) -> (BanRegistry, InsertSummary) {
    let mut registry = BanRegistry::new();
    let summary = registry.insert_all(members);
    (registry, summary)
}

/// Read, normalize and group the membership file.
pub fn load_registry(path: &Path, postcodes: &PostcodeDirectory) -> PipelineResult<LoadResult> {
    let (info, members) = load_members(path, postcodes)?;
    tracing::info!(path = %path.display(), rows = info.row_count, "read membership sheet");

    let (registry, summary) = build_registry(members);
    tracing::info!(
        inserted = summary.inserted,
        duplicates = summary.duplicates,
        unrecognized = summary.unrecognized,
        "grouped members per ban"
    );

    Ok(LoadResult {
        registry,
        summary,
        info,
    })
}
