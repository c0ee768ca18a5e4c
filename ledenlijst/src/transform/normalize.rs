//! Field normalizers.
//!
//! Pure functions turning raw cell values into canonical member fields.
//! None of them fail: when a value cannot be normalized the original text
//! is returned unchanged.
//!
//! | Field | Canonical form | Fallback |
//! |-------|----------------|----------|
//! | phone | `0456 78 90 12` | original input |
//! | date | `dd/mm/yyyy` | original text |
//! | ban | label without `(...)` annotations | - |
//! | place | see [`crate::postcode`] | raw code |

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::CellValue;

/// International prefix such as `+32 ` at the start of a phone number.
static INTERNATIONAL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+\d{1,3}\s*").expect("valid prefix pattern"));

/// Parenthesized annotation, including the whitespace before it.
static BAN_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(.*?\)").expect("valid annotation pattern"));

/// Text accepted by the date parser, nothing around it.
static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").expect("valid date pattern"));

/// Minimum number of digits for the grouped phone format.
const PHONE_DIGITS: usize = 10;

// =============================================================================
// Phone
// =============================================================================

/// Format a phone number as `<rest> <2> <2> <2>`.
///
/// An international prefix is replaced by a single `0`, every non-digit is
/// dropped and numbers shorter than 10 digits get one leading `0`. If that
/// still leaves fewer than 10 digits the input is returned unchanged.
///
/// ```
/// use ledenlijst::transform::normalize::normalize_phone;
///
/// assert_eq!(normalize_phone("+32 456 78 90 12"), "0456 78 90 12");
/// assert_eq!(normalize_phone("0456/78.90.12"), "0456 78 90 12");
/// assert_eq!(normalize_phone(""), "");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let local = INTERNATIONAL_PREFIX.replace(raw, "0");
    let mut digits: String = local.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < PHONE_DIGITS {
        digits.insert(0, '0');
    }

    if digits.len() < PHONE_DIGITS {
        return raw.to_string();
    }

    let n = digits.len();
    format!(
        "{} {} {} {}",
        &digits[..n - 6],
        &digits[n - 6..n - 4],
        &digits[n - 4..n - 2],
        &digits[n - 2..]
    )
}

// =============================================================================
// Date
// =============================================================================

/// Format a birth date as `dd/mm/yyyy`.
///
/// Date cells are formatted directly, text is parsed as `yyyy-mm-dd`.
/// Anything else keeps its original text; empty cells give `""`.
pub fn normalize_date(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => String::new(),
        CellValue::Date(date) => format_date(date),
        CellValue::Text(text) if ISO_DATE.is_match(text) => {
            match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                Ok(date) => format_date(&date),
                Err(_) => text.clone(),
            }
        }
        CellValue::Text(text) => text.clone(),
        CellValue::Number(_) => cell.to_text(),
    }
}

fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

// =============================================================================
// Ban label
// =============================================================================

/// Strip parenthesized annotations and surrounding whitespace from a ban
/// label: `"Leiding (2024)"` → `"Leiding"`.
pub fn clean_ban(label: &str) -> String {
    BAN_ANNOTATION.replace_all(label, "").trim().to_string()
}

// =============================================================================
// Capitalization
// =============================================================================

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
