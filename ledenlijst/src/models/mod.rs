//! Domain models for the ledenlijst pipeline.
//!
//! - [`CellValue`] - a typed spreadsheet cell (text, number, date or empty)
//! - [`MemberField`] - the 10 positional input columns
//! - [`RawRow`] - one validated input row
//! - [`Ban`] - the fixed set of member categories
//! - [`Member`] - the normalized member record
//! - [`MemberKey`] - identity key used for deduplication

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::error::{SheetError, SheetResult};
use crate::postcode::PostcodeDirectory;
use crate::transform::normalize::{clean_ban, normalize_date, normalize_phone};

// =============================================================================
// Cell Values
// =============================================================================

/// A single spreadsheet cell as delivered by the readers.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl CellValue {
    /// Build a text cell, mapping the empty string to [`CellValue::Empty`].
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Render the cell as plain text.
    ///
    /// Whole numbers print without a fractional part (`12.0` → `"12"`),
    /// dates print as `yyyy-mm-dd`.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

// =============================================================================
// Row Schema
// =============================================================================

/// The positional columns of the membership sheet, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    FirstName,
    LastName,
    Email,
    Phone,
    ExtraPhone,
    Street,
    HouseNumber,
    Place,
    BirthDate,
    Ban,
}

impl MemberField {
    /// All fields in column order.
    pub const ALL: [MemberField; 10] = [
        MemberField::FirstName,
        MemberField::LastName,
        MemberField::Email,
        MemberField::Phone,
        MemberField::ExtraPhone,
        MemberField::Street,
        MemberField::HouseNumber,
        MemberField::Place,
        MemberField::BirthDate,
        MemberField::Ban,
    ];

    /// Number of columns a row must provide.
    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based column index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column label as shown in tables.
    pub fn label(self) -> &'static str {
        match self {
            MemberField::FirstName => "Voornaam",
            MemberField::LastName => "Naam",
            MemberField::Email => "Emailadres",
            MemberField::Phone => "Telefoon",
            MemberField::ExtraPhone => "Extra Telefoon",
            MemberField::Street => "Straat",
            MemberField::HouseNumber => "Huisnummer",
            MemberField::Place => "Gemeente",
            MemberField::BirthDate => "Geboortedatum",
            MemberField::Ban => "Ban",
        }
    }
}

/// One input row, validated to carry exactly [`MemberField::COUNT`] cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based row number in the source file (header is row 1).
    pub row: usize,
    cells: Vec<CellValue>,
}

impl RawRow {
    /// Validate the row shape. Extra trailing columns are dropped.
    pub fn from_cells(path: &Path, row: usize, mut cells: Vec<CellValue>) -> SheetResult<Self> {
        if cells.len() < MemberField::COUNT {
            return Err(SheetError::RowShape {
                path: path.to_path_buf(),
                row,
                found: cells.len(),
                expected: MemberField::COUNT,
            });
        }
        cells.truncate(MemberField::COUNT);
        Ok(Self { row, cells })
    }

    pub fn get(&self, field: MemberField) -> &CellValue {
        &self.cells[field.index()]
    }

    /// True when every cell is empty.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(CellValue::is_empty)
    }
}

// =============================================================================
// Bans
// =============================================================================

/// Member category ("ban"), ordered by age group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ban {
    Piepedollen,
    Speelvogels,
    Krabbekoningen,
    Knapen,
    Jonghernieuwers,
    Hernieuwers,
    Leiding,
    OndersteunendLid,
}

impl Ban {
    /// All bans in display order.
    pub const ALL: [Ban; 8] = [
        Ban::Piepedollen,
        Ban::Speelvogels,
        Ban::Krabbekoningen,
        Ban::Knapen,
        Ban::Jonghernieuwers,
        Ban::Hernieuwers,
        Ban::Leiding,
        Ban::OndersteunendLid,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical name, as it appears in the membership sheet.
    pub fn name(self) -> &'static str {
        match self {
            Ban::Piepedollen => "Piepedollen",
            Ban::Speelvogels => "Speelvogels",
            Ban::Krabbekoningen => "Krabbekoningen",
            Ban::Knapen => "Knapen",
            Ban::Jonghernieuwers => "Jonghernieuwers",
            Ban::Hernieuwers => "Hernieuwers",
            Ban::Leiding => "Leiding",
            Ban::OndersteunendLid => "Ondersteunend lid",
        }
    }

    /// Two-letter code used for sheet names.
    pub fn short_code(self) -> &'static str {
        match self {
            Ban::Piepedollen => "PP",
            Ban::Speelvogels => "SP",
            Ban::Krabbekoningen => "KR",
            Ban::Knapen => "KN",
            Ban::Jonghernieuwers => "JH",
            Ban::Hernieuwers => "HN",
            Ban::Leiding => "LD",
            Ban::OndersteunendLid => "OD",
        }
    }

    /// Exact match on the canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    /// Lenient match for command-line arguments: name or short code,
    /// case-insensitive.
    pub fn from_cli(arg: &str) -> Option<Self> {
        let arg = arg.trim();
        Self::ALL.into_iter().find(|b| {
            b.name().eq_ignore_ascii_case(arg) || b.short_code().eq_ignore_ascii_case(arg)
        })
    }
}

impl fmt::Display for Ban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Member Record
// =============================================================================

/// Identity of a member: lower-cased (first name, last name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberKey {
    pub first_name: String,
    pub last_name: String,
}

/// A normalized member record.
///
/// No `PartialEq`: identity goes through [`Member::key`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub extra_phone: String,
    pub street: String,
    pub house_number: String,
    pub place: String,
    pub birth_date: String,
    /// Cleaned ban label. Not guaranteed to name a known [`Ban`].
    pub ban: String,
}

impl Member {
    /// Build a member from a raw row. Never fails: fields that cannot be
    /// normalized keep their original text.
    pub fn from_row(row: &RawRow, postcodes: &PostcodeDirectory) -> Self {
        let text = |field: MemberField| row.get(field).to_text();
        let phone = |field: MemberField| normalize_phone(&row.get(field).to_text());

        Self {
            first_name: text(MemberField::FirstName),
            last_name: text(MemberField::LastName),
            email: text(MemberField::Email),
            phone: phone(MemberField::Phone),
            extra_phone: phone(MemberField::ExtraPhone),
            street: text(MemberField::Street),
            house_number: text(MemberField::HouseNumber),
            place: postcodes.resolve_place(row.get(MemberField::Place)),
            birth_date: normalize_date(row.get(MemberField::BirthDate)),
            ban: clean_ban(&text(MemberField::Ban)),
        }
    }

    pub fn key(&self) -> MemberKey {
        MemberKey {
            first_name: self.first_name.to_lowercase(),
            last_name: self.last_name.to_lowercase(),
        }
    }

    pub fn same_identity(&self, other: &Member) -> bool {
        self.key() == other.key()
    }

    /// The recognized ban, if the label names one.
    pub fn category(&self) -> Option<Ban> {
        Ban::from_name(&self.ban)
    }

    /// Field values in [`MemberField::ALL`] order.
    pub fn fields(&self) -> [&str; MemberField::COUNT] {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.extra_phone.as_str(),
            self.street.as_str(),
            self.house_number.as_str(),
            self.place.as_str(),
            self.birth_date.as_str(),
            self.ban.as_str(),
        ]
    }

    pub fn field(&self, field: MemberField) -> &str {
        self.fields()[field.index()]
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, {}, {}, {}, {}, {}, {}, {}",
            self.first_name,
            self.last_name,
            self.email,
            self.phone,
            self.extra_phone,
            self.street,
            self.house_number,
            self.place,
            self.birth_date,
            self.ban
        )
    }
}
