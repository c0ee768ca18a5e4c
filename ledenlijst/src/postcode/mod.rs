//! Postal code resolver.
//!
//! Turns the "Gemeente" column into a place name. Numeric tokens are looked
//! up as postal codes; anything else is taken as the place name itself. The
//! result is always capitalized (`"LEUVEN"` → `"Leuven"`).
//!
//! Unknown postal codes echo the raw code.

mod table;

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

use crate::error::SheetResult;
use crate::models::CellValue;
use crate::parser::read_csv_table;
use crate::transform::normalize::capitalize;

static BUILTIN: Lazy<HashMap<String, String>> = Lazy::new(|| {
    table::POSTCODES
        .iter()
        .map(|(code, place)| (code.to_string(), place.to_string()))
        .collect()
});

/// Lookup table from postal code to place name.
#[derive(Debug, Clone)]
pub struct PostcodeDirectory {
    entries: HashMap<String, String>,
}

impl PostcodeDirectory {
    /// Directory holding only the built-in table.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN.clone(),
        }
    }

    /// Built-in table extended with `postcode;gemeente` rows from a CSV
    /// file (header line required, later rows win).
    pub fn with_overrides(path: &Path) -> SheetResult<Self> {
        let mut directory = Self::builtin();
        let table = read_csv_table(path)?;
        let mut added = 0;
        for row in &table.rows {
            if let (Some(code), Some(place)) = (row.first(), row.get(1)) {
                let code = code.trim();
                if is_postcode(code) && !place.trim().is_empty() {
                    directory.insert(code, place.trim());
                    added += 1;
                }
            }
        }
        tracing::info!(path = %path.display(), added, "loaded postcode overrides");
        Ok(directory)
    }

    pub fn insert(&mut self, code: impl Into<String>, place: impl Into<String>) {
        self.entries.insert(code.into(), place.into());
    }

    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a raw "Gemeente" cell to a capitalized place name.
    ///
    /// Numeric cells are treated as postal codes. Only an all-digit token
    /// is looked up; anything else, padding included, is a place name.
    /// Empty input gives `""`.
    pub fn resolve_place(&self, cell: &CellValue) -> String {
        let token = cell.to_text();
        if !is_postcode(&token) {
            return capitalize(&token);
        }

        match self.lookup(&token) {
            Some(place) => capitalize(place),
            None => {
                tracing::debug!(postcode = %token, "unknown postal code, keeping raw value");
                capitalize(&token)
            }
        }
    }
}

impl Default for PostcodeDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

fn is_postcode(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}
