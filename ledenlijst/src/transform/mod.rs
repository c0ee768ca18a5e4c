//! Transformation module.
//!
//! - Normalize: phone, date, ban label and capitalization helpers
//! - Registry: members grouped per ban
//! - Pipeline: file → rows → members → registry

pub mod normalize;
pub mod pipeline;
pub mod registry;

pub use normalize::{capitalize, clean_ban, normalize_date, normalize_phone};
pub use pipeline::{build_registry, load_members, load_registry, LoadResult};
pub use registry::{BanRegistry, InsertOutcome, InsertSummary};
