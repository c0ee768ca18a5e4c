//! Runtime configuration.
//!
//! Settings come from the environment (a `.env` file is loaded by the
//! binary through dotenvy). Command-line flags override them.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `LEDENLIJST_OUTPUT_DIR` | `.` |
//! | `LEDENLIJST_EXPORT_FILE` | `bans_export.xlsx` |
//! | `LEDENLIJST_FONT` | `Verdana` |
//! | `LEDENLIJST_POSTCODES` | unset |

use std::path::PathBuf;

use crate::error::ConfigError;

pub const OUTPUT_DIR_VAR: &str = "LEDENLIJST_OUTPUT_DIR";
pub const EXPORT_FILE_VAR: &str = "LEDENLIJST_EXPORT_FILE";
pub const FONT_VAR: &str = "LEDENLIJST_FONT";
pub const POSTCODES_VAR: &str = "LEDENLIJST_POSTCODES";

/// File name of the workbook holding every ban.
pub const DEFAULT_EXPORT_FILE: &str = "bans_export.xlsx";

/// Font used in exported sheets.
pub const DEFAULT_FONT: &str = "Verdana";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory receiving exported workbooks.
    pub output_dir: PathBuf,
    /// File name of the all-bans workbook.
    pub export_file: String,
    /// Font for exported sheets.
    pub font: String,
    /// Optional CSV with extra `postcode;gemeente` rows.
    pub postcodes: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            export_file: DEFAULT_EXPORT_FILE.to_string(),
            font: DEFAULT_FONT.to_string(),
            postcodes: None,
        }
    }
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(dir) = non_empty(&lookup, OUTPUT_DIR_VAR)? {
            settings.output_dir = PathBuf::from(dir);
        }
        if let Some(file) = non_empty(&lookup, EXPORT_FILE_VAR)? {
            if !file.to_ascii_lowercase().ends_with(".xlsx") {
                return Err(ConfigError::InvalidValue {
                    key: EXPORT_FILE_VAR.to_string(),
                    message: format!("'{file}' must end in .xlsx"),
                });
            }
            settings.export_file = file;
        }
        if let Some(font) = non_empty(&lookup, FONT_VAR)? {
            settings.font = font;
        }
        settings.postcodes = non_empty(&lookup, POSTCODES_VAR)?.map(PathBuf::from);

        Ok(settings)
    }
}

/// A set variable must not be blank.
fn non_empty<F>(lookup: &F, key: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "must not be empty".to_string(),
        }),
        Some(value) => Ok(Some(value.trim().to_string())),
    }
}
