//! Spreadsheet export of the grouped members.
//!
//! Two modes:
//!
//! - [`export_all`] - one workbook, one sheet per ban (named by short code)
//! - [`export_bans`] - one workbook per requested ban (`<ban>.xlsx`)
//!
//! Sheet layout:
//!
//! ```text
//! row 1   ┌──────────── KNAPEN (   /12) ────────────┐  merged, bold 14pt
//! row 2   │                                           │
//! row 3   │Voornaam│Naam│Tel 1│Tel 2│Straat│HuisN°│…  │  grey header
//! row 4+  │ members, sorted                           │
//! ```

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{ExportError, ExportResult};
use crate::models::{Ban, Member, MemberField};
use crate::transform::BanRegistry;

const COLUMN_COUNT: usize = 8;

/// Exported columns with their sheet headers.
const COLUMNS: [(MemberField, &str); COLUMN_COUNT] = [
    (MemberField::FirstName, "Voornaam"),
    (MemberField::LastName, "Naam"),
    (MemberField::Phone, "Tel 1"),
    (MemberField::ExtraPhone, "Tel 2"),
    (MemberField::Street, "Straat"),
    (MemberField::HouseNumber, "HuisN°"),
    (MemberField::Place, "Gemeente"),
    (MemberField::BirthDate, "Dob"),
];

const HEADER_ROW: u32 = 2;
const FIRST_MEMBER_ROW: u32 = 3;
const HEADER_FILL: u32 = 0xBFBFBF;
const WIDTH_PADDING: usize = 2;
/// Extra room for the "Tel 2" column.
const SECOND_PHONE_EXTRA: f64 = 5.0;

/// Where and how workbooks are written.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub export_file: String,
    pub font: String,
}

impl From<&Settings> for ExportOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            output_dir: settings.output_dir.clone(),
            export_file: settings.export_file.clone(),
            font: settings.font.clone(),
        }
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

/// Write every ban into a single workbook. Returns the file written.
pub fn export_all(registry: &BanRegistry, options: &ExportOptions) -> ExportResult<PathBuf> {
    ensure_dir(&options.output_dir)?;

    let mut workbook = Workbook::new();
    for (ban, members) in registry.iter() {
        let worksheet = workbook.add_worksheet();
        write_ban_sheet(worksheet, ban, members, &options.font)?;
    }

    let path = options.output_dir.join(&options.export_file);
    workbook.save(&path)?;
    tracing::info!(path = %path.display(), "exported all bans");
    Ok(path)
}

/// Write one workbook per ban. Returns the files written, in input order.
pub fn export_bans(
    registry: &BanRegistry,
    bans: &[Ban],
    options: &ExportOptions,
) -> ExportResult<Vec<PathBuf>> {
    ensure_dir(&options.output_dir)?;

    let mut written = Vec::with_capacity(bans.len());
    for &ban in bans {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        write_ban_sheet(worksheet, ban, registry.members(ban), &options.font)?;

        let path = options.output_dir.join(ban_file_name(ban));
        workbook.save(&path)?;
        tracing::info!(ban = %ban, path = %path.display(), "exported ban");
        written.push(path);
    }
    Ok(written)
}

/// `Knapen` → `knapen.xlsx`.
pub fn ban_file_name(ban: Ban) -> String {
    format!("{}.xlsx", ban.name().to_lowercase())
}

/// Sheet title: upper-case name and a blank attendance counter.
pub fn sheet_title(ban: Ban, count: usize) -> String {
    format!("{} (   /{})", ban.name().to_uppercase(), count)
}

/// Column widths: longest text per column plus padding. The title counts
/// for the first column since it lives in cell A1.
pub fn column_widths(title: &str, members: &[Member]) -> [f64; COLUMN_COUNT] {
    let mut longest = [0usize; COLUMN_COUNT];
    longest[0] = title.chars().count();

    for (i, (field, header)) in COLUMNS.iter().enumerate() {
        longest[i] = longest[i].max(header.chars().count());
        for member in members {
            longest[i] = longest[i].max(member.field(*field).chars().count());
        }
    }

    let mut widths = longest.map(|len| (len + WIDTH_PADDING) as f64);
    widths[3] += SECOND_PHONE_EXTRA;
    widths
}

fn write_ban_sheet(
    worksheet: &mut Worksheet,
    ban: Ban,
    members: &[Member],
    font: &str,
) -> ExportResult<()> {
    let title_format = Format::new()
        .set_font_name(font)
        .set_font_size(14)
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);
    let header_format = Format::new()
        .set_font_name(font)
        .set_font_size(11)
        .set_background_color(Color::RGB(HEADER_FILL));
    let cell_format = Format::new().set_font_name(font).set_font_size(11);
    let number_format = cell_format.clone().set_align(FormatAlign::Right);

    worksheet.set_name(ban.short_code())?;

    let title = sheet_title(ban, members.len());
    let last_col = (COLUMN_COUNT - 1) as u16;
    worksheet.merge_range(0, 0, 0, last_col, &title, &title_format)?;

    for (col, (_, header)) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(HEADER_ROW, col as u16, *header, &header_format)?;
    }

    for (offset, member) in members.iter().enumerate() {
        let row = FIRST_MEMBER_ROW + offset as u32;
        for (col, (field, _)) in COLUMNS.iter().enumerate() {
            let col = col as u16;
            let value = member.field(*field);
            if *field != MemberField::HouseNumber {
                worksheet.write_string_with_format(row, col, value, &cell_format)?;
            } else if let Some(number) = plain_integer(value) {
                worksheet.write_number_with_format(row, col, number, &number_format)?;
            } else {
                worksheet.write_string_with_format(row, col, value, &number_format)?;
            }
        }
    }

    for (col, width) in column_widths(&title, members).into_iter().enumerate() {
        worksheet.set_column_width(col as u16, width)?;
    }

    Ok(())
}

/// A house number that reads back unchanged as a number: digits only, no
/// leading zero.
fn plain_integer(value: &str) -> Option<f64> {
    let number = value.parse::<u32>().ok()?;
    (number.to_string() == value).then_some(f64::from(number))
}

fn ensure_dir(dir: &Path) -> ExportResult<()> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook_auto, Data, Reader};

    fn registry() -> BanRegistry {
        BanRegistry::from_members([
            Member {
                first_name: "Zoe".into(),
                last_name: "Aerts".into(),
                phone: "0456 78 90 12".into(),
                house_number: "12".into(),
                place: "Leuven".into(),
                birth_date: "03/05/2012".into(),
                ban: "Knapen".into(),
                ..Default::default()
            },
            Member {
                first_name: "Anna".into(),
                last_name: "Bosmans".into(),
                house_number: "3b".into(),
                ban: "Knapen".into(),
                ..Default::default()
            },
            Member {
                first_name: "Bram".into(),
                last_name: "Claes".into(),
                house_number: "007".into(),
                ban: "Knapen".into(),
                ..Default::default()
            },
            Member {
                first_name: "Cas".into(),
                last_name: "Dewit".into(),
                house_number: "1e3".into(),
                ban: "Knapen".into(),
                ..Default::default()
            },
            Member {
                first_name: "Lien".into(),
                last_name: "Claes".into(),
                ban: "Ondersteunend lid".into(),
                ..Default::default()
            },
        ])
    }

    fn options(dir: &Path) -> ExportOptions {
        ExportOptions {
            output_dir: dir.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sheet_title() {
        assert_eq!(sheet_title(Ban::Knapen, 12), "KNAPEN (   /12)");
        assert_eq!(sheet_title(Ban::OndersteunendLid, 0), "ONDERSTEUNEND LID (   /0)");
    }

    #[test]
    fn test_ban_file_name() {
        assert_eq!(ban_file_name(Ban::Leiding), "leiding.xlsx");
        assert_eq!(ban_file_name(Ban::OndersteunendLid), "ondersteunend lid.xlsx");
    }

    #[test]
    fn test_column_widths() {
        let members = registry().members(Ban::Knapen).to_vec();
        let widths = column_widths("KNAPEN (   /4)", &members);

        assert_eq!(widths[0], 16.0); // title, 14 chars
        assert_eq!(widths[1], 9.0); // "Bosmans"
        assert_eq!(widths[2], 15.0); // "0456 78 90 12"
        assert_eq!(widths[3], 12.0); // "Tel 2" + extra
        assert_eq!(widths[5], 8.0); // "HuisN°"
    }

    #[test]
    fn test_export_all() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_all(&registry(), &options(dir.path())).unwrap();
        assert_eq!(path, dir.path().join("bans_export.xlsx"));

        let mut workbook = open_workbook_auto(&path).unwrap();
        let codes: Vec<String> = Ban::ALL.iter().map(|b| b.short_code().to_string()).collect();
        assert_eq!(workbook.sheet_names(), codes);

        let knapen = workbook.worksheet_range_at(Ban::Knapen.index()).unwrap().unwrap();
        assert_eq!(knapen.get_value((0, 0)), Some(&Data::String("KNAPEN (   /4)".into())));
        assert_eq!(knapen.get_value((2, 0)), Some(&Data::String("Voornaam".into())));
        assert_eq!(knapen.get_value((2, 5)), Some(&Data::String("HuisN°".into())));
        assert_eq!(knapen.get_value((3, 0)), Some(&Data::String("Anna".into())));
        assert_eq!(knapen.get_value((3, 5)), Some(&Data::String("3b".into())));
        assert_eq!(knapen.get_value((6, 0)), Some(&Data::String("Zoe".into())));
        assert_eq!(knapen.get_value((6, 5)), Some(&Data::Float(12.0)));
        assert_eq!(knapen.get_value((6, 6)), Some(&Data::String("Leuven".into())));
    }

    #[test]
    fn test_house_number_text_kept() {
        let dir = tempfile::tempdir().unwrap();
        let written = export_bans(&registry(), &[Ban::Knapen], &options(dir.path())).unwrap();

        let mut workbook = open_workbook_auto(&written[0]).unwrap();
        let sheet = workbook.worksheet_range_at(0).unwrap().unwrap();
        assert_eq!(sheet.get_value((4, 0)), Some(&Data::String("Bram".into())));
        assert_eq!(sheet.get_value((4, 5)), Some(&Data::String("007".into())));
        assert_eq!(sheet.get_value((5, 0)), Some(&Data::String("Cas".into())));
        assert_eq!(sheet.get_value((5, 5)), Some(&Data::String("1e3".into())));
    }

    #[test]
    fn test_plain_integer() {
        assert_eq!(plain_integer("12"), Some(12.0));
        assert_eq!(plain_integer("007"), None);
        assert_eq!(plain_integer("1e3"), None);
        assert_eq!(plain_integer("inf"), None);
        assert_eq!(plain_integer("NaN"), None);
        assert_eq!(plain_integer("+12"), None);
        assert_eq!(plain_integer("3b"), None);
    }

    #[test]
    fn test_export_bans() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("export");
        let written = export_bans(
            &registry(),
            &[Ban::OndersteunendLid, Ban::Leiding],
            &options(&out),
        )
        .unwrap();

        assert_eq!(
            written,
            vec![out.join("ondersteunend lid.xlsx"), out.join("leiding.xlsx")]
        );
        assert!(written.iter().all(|p| p.exists()));

        let mut workbook = open_workbook_auto(&written[0]).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["OD".to_string()]);
        let sheet = workbook.worksheet_range_at(0).unwrap().unwrap();
        assert_eq!(
            sheet.get_value((0, 0)),
            Some(&Data::String("ONDERSTEUNEND LID (   /1)".into()))
        );
        assert_eq!(sheet.get_value((3, 0)), Some(&Data::String("Lien".into())));

        let mut empty = open_workbook_auto(&written[1]).unwrap();
        let sheet = empty.worksheet_range_at(0).unwrap().unwrap();
        assert_eq!(sheet.get_value((0, 0)), Some(&Data::String("LEIDING (   /0)".into())));
    }
}
