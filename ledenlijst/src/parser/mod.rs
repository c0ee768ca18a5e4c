//! Spreadsheet readers.
//!
//! Produces validated [`RawRow`]s from the membership file. Workbooks
//! (xlsx, xlsm, xls, ods) are read with calamine; CSV exports are read with
//! encoding and delimiter auto-detection.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ leden.xlsx  │────▶│  calamine    │──┐  │             │
//! └─────────────┘     └──────────────┘  ├─▶│  Vec<RawRow>│
//! ┌─────────────┐     ┌──────────────┐  │  │ (10 cells)  │
//! │ leden.csv   │────▶│ chardet + csv│──┘  │             │
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! Row 1 is always the header. Rows with fewer than 10 columns abort the
//! read with [`SheetError::RowShape`]; rows with no content are skipped.

use calamine::{open_workbook_auto, Data, Reader};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{SheetError, SheetResult};
use crate::models::{CellValue, RawRow};

// =============================================================================
// Results
// =============================================================================

/// Kind of input file, chosen from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetFormat {
    Workbook,
    Csv,
}

impl SheetFormat {
    pub fn from_path(path: &Path) -> SheetResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SheetFormat::Workbook),
            "csv" | "txt" => Ok(SheetFormat::Csv),
            _ => Err(SheetError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Metadata about the file that was read.
#[derive(Debug, Clone, Serialize)]
pub struct SheetInfo {
    pub path: PathBuf,
    pub format: SheetFormat,
    /// Worksheet name (workbooks only).
    pub sheet: Option<String>,
    /// Detected encoding (CSV only).
    pub encoding: Option<String>,
    /// Detected delimiter (CSV only).
    pub delimiter: Option<char>,
    pub headers: Vec<String>,
    /// Data rows kept, blank rows excluded.
    pub row_count: usize,
}

/// Validated rows plus file metadata.
#[derive(Debug, Clone)]
pub struct SheetData {
    pub info: SheetInfo,
    pub rows: Vec<RawRow>,
}

/// A decoded CSV file: header plus trimmed string cells.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
    pub encoding: String,
    pub delimiter: char,
}

/// One CSV record with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRow {
    pub line: usize,
    pub cells: Vec<String>,
}

impl CsvRow {
    pub fn first(&self) -> Option<&String> {
        self.cells.first()
    }

    pub fn get(&self, i: usize) -> Option<&String> {
        self.cells.get(i)
    }
}

// =============================================================================
// Entry point
// =============================================================================

/// Read the membership sheet at `path`.
pub fn read_sheet(path: &Path) -> SheetResult<SheetData> {
    match SheetFormat::from_path(path)? {
        SheetFormat::Workbook => read_workbook(path),
        SheetFormat::Csv => read_csv_sheet(path),
    }
}

// =============================================================================
// Workbooks
// =============================================================================

/// Read the first worksheet of a workbook.
pub fn read_workbook(path: &Path) -> SheetResult<SheetData> {
    let workbook_error = |e: calamine::Error| SheetError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let sheet = workbook.sheet_names().first().cloned();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetError::NoWorksheet(path.to_path_buf()))?
        .map_err(workbook_error)?;

    let mut info = SheetInfo {
        path: path.to_path_buf(),
        format: SheetFormat::Workbook,
        sheet,
        encoding: None,
        delimiter: None,
        headers: Vec::new(),
        row_count: 0,
    };

    let (Some(start), Some(end)) = (range.start(), range.end()) else {
        return Ok(SheetData { info, rows: Vec::new() });
    };

    // Positions are absolute: column A is 0 even when the sheet starts later.
    let width = end.1 + 1;
    let cells_at = |r: u32| -> Vec<CellValue> {
        (0..width)
            .map(|c| {
                range
                    .get_value((r, c))
                    .map_or(CellValue::Empty, cell_from_data)
            })
            .collect()
    };

    if start.0 == 0 {
        info.headers = cells_at(0).iter().map(CellValue::to_text).collect();
    }

    let mut rows = Vec::new();
    for r in start.0.max(1)..=end.0 {
        let row = RawRow::from_cells(path, r as usize + 1, cells_at(r))?;
        if row.is_blank() {
            tracing::debug!(row = row.row, "skipping blank row");
            continue;
        }
        rows.push(row);
    }

    info.row_count = rows.len();
    Ok(SheetData { info, rows })
}

/// Map a calamine cell onto the row schema.
pub fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => CellValue::Date(datetime.date()),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => parse_iso_date(s)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::text(s.clone())),
        Data::DurationIso(s) => CellValue::text(s.clone()),
    }
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

// =============================================================================
// CSV
// =============================================================================

fn read_csv_sheet(path: &Path) -> SheetResult<SheetData> {
    let table = read_csv_table(path)?;

    let mut rows = Vec::new();
    for record in table.rows {
        let cells = record.cells.into_iter().map(CellValue::text).collect();
        let row = RawRow::from_cells(path, record.line, cells)?;
        if row.is_blank() {
            tracing::debug!(row = row.row, "skipping blank row");
            continue;
        }
        rows.push(row);
    }

    let info = SheetInfo {
        path: path.to_path_buf(),
        format: SheetFormat::Csv,
        sheet: None,
        encoding: Some(table.encoding),
        delimiter: Some(table.delimiter),
        headers: table.headers,
        row_count: rows.len(),
    };
    Ok(SheetData { info, rows })
}

/// Read a CSV file with encoding and delimiter auto-detection.
pub fn read_csv_table(path: &Path) -> SheetResult<CsvTable> {
    let bytes = std::fs::read(path).map_err(|source| SheetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let encoding = detect_encoding(&bytes);
    let content = decode_content(&bytes, &encoding);
    let delimiter = detect_delimiter(&content);
    let (headers, rows) = parse_csv_str(&content, delimiter, path)?;

    Ok(CsvTable {
        headers,
        rows,
        encoding,
        delimiter,
    })
}

/// Parse CSV text: the first line is the header, the rest are records.
///
/// Records may have any width; shape checks belong to the caller.
pub fn parse_csv_str(
    content: &str,
    delimiter: char,
    path: &Path,
) -> SheetResult<(Vec<String>, Vec<CsvRow>)> {
    let csv_error = |line: usize, message: String| SheetError::Csv {
        path: path.to_path_buf(),
        line,
        message,
    };

    let delimiter = u8::try_from(delimiter)
        .map_err(|_| csv_error(1, format!("delimiter '{delimiter}' is not ASCII")))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(1, e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(csv_error(1, "Empty CSV file".to_string()));
    }

    // The reader's own line counter does not see blank lines.
    let line_at = |pos: Option<&csv::Position>| {
        pos.map(|p| line_of_offset(content, p.byte() as usize)).unwrap_or(0)
    };

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(line_at(e.position()), e.to_string()))?;
        let line = line_at(record.position());
        rows.push(CsvRow {
            line,
            cells: record.iter().map(str::to_string).collect(),
        });
    }

    Ok((headers, rows))
}

/// 1-based line of the record whose position is `offset`.
///
/// The reader records a position before skipping blank lines, so line
/// breaks at `offset` belong to the gap, not to the record.
fn line_of_offset(content: &str, offset: usize) -> usize {
    let bytes = content.as_bytes();
    let mut start = offset.min(bytes.len());
    while start < bytes.len() && matches!(bytes[start], b'\r' | b'\n') {
        start += 1;
    }
    bytes[..start].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _confidence, _language) = chardet::detect(bytes);

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes with the given encoding, falling back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.into_owned()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Detect the delimiter by counting occurrences in the first line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let mut best_sep = ';';
    let mut best_count = 0;
    for sep in [';', ',', '\t', '|'] {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemberField;
    use std::io::Write;

    const HEADER: &str = "Voornaam;Naam;Email;Tel;Tel2;Straat;Nr;Gemeente;Geboortedatum;Ban";

    fn write_csv(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SheetFormat::from_path(Path::new("a.XLSX")).unwrap(), SheetFormat::Workbook);
        assert_eq!(SheetFormat::from_path(Path::new("a.ods")).unwrap(), SheetFormat::Workbook);
        assert_eq!(SheetFormat::from_path(Path::new("a.csv")).unwrap(), SheetFormat::Csv);
        assert!(matches!(
            SheetFormat::from_path(Path::new("a.pdf")),
            Err(SheetError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_csv_str() {
        let csv = "a;b\n1;2\n\n3;4\n";
        let (headers, rows) = parse_csv_str(csv, ';', Path::new("t.csv")).unwrap();
        assert_eq!(headers, vec!["a", "b"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells, vec!["1", "2"]);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].line, 4);
    }

    #[test]
    fn test_quoted_values() {
        let csv = "name;value\n\"Peeters\";\"Leiding (2024)\"";
        let (_, rows) = parse_csv_str(csv, ';', Path::new("t.csv")).unwrap();
        assert_eq!(rows[0].cells, vec!["Peeters", "Leiding (2024)"]);
    }

    #[test]
    fn test_empty_csv_error() {
        let err = parse_csv_str("", ';', Path::new("t.csv")).unwrap_err();
        assert!(err.to_string().contains("Empty CSV"));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), '\t');
        assert_eq!(detect_delimiter("a|b|c\n1|2|3"), '|');
    }

    #[test]
    fn test_latin1_decoding() {
        // "Geëmigreerd" in ISO-8859-1
        let bytes: &[u8] = &[0x47, 0x65, 0xEB, 0x6D, 0x69, 0x67, 0x72, 0x65, 0x65, 0x72, 0x64];
        assert_eq!(decode_content(bytes, "iso-8859-1"), "Geëmigreerd");
    }

    #[test]
    fn test_read_csv_sheet() {
        let content = format!(
            "{HEADER}\n\
             Jan;Peeters;jan@example.org;0456789012;;Kerkstraat;12;3000;2012-05-03;Knapen\n\
             ;;;;;;;;;\n\
             Zoe;Aerts;;;;;;Gent;;Leiding (2024)\n"
        );
        let file = write_csv(content.as_bytes());
        let data = read_sheet(file.path()).unwrap();

        assert_eq!(data.info.format, SheetFormat::Csv);
        assert_eq!(data.info.delimiter, Some(';'));
        assert_eq!(data.info.headers.len(), 10);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.info.row_count, 2);
        assert_eq!(data.rows[0].row, 2);
        assert_eq!(data.rows[1].row, 4);
        assert_eq!(data.rows[0].get(MemberField::Place), &CellValue::text("3000"));
        assert_eq!(data.rows[1].get(MemberField::Email), &CellValue::Empty);
    }

    #[test]
    fn test_csv_short_row_is_fatal() {
        let content = format!("{HEADER}\nJan;Peeters;jan@example.org\n");
        let file = write_csv(content.as_bytes());
        match read_sheet(file.path()) {
            Err(SheetError::RowShape { row, found, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected row shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_csv_row_numbers_count_blank_lines() {
        let content = format!(
            "{HEADER}\n\
             Jan;Peeters;;;;;;3000;;Knapen\n\
             \n\
             \n\
             Bad;Row\n"
        );
        let file = write_csv(content.as_bytes());
        match read_sheet(file.path()) {
            Err(SheetError::RowShape { row, found, .. }) => {
                assert_eq!(row, 5);
                assert_eq!(found, 2);
            }
            other => panic!("expected row shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_line_of_offset() {
        let content = "a;b\r\n1;2\r\n\r\n3;4";
        assert_eq!(line_of_offset(content, 0), 1);
        assert_eq!(line_of_offset(content, 5), 2);
        // position taken before the blank line
        assert_eq!(line_of_offset(content, 10), 4);
        assert_eq!(line_of_offset(content, content.find('3').unwrap()), 4);
    }

    #[test]
    fn test_missing_file() {
        let err = read_sheet(Path::new("/nonexistent/leden.csv")).unwrap_err();
        assert!(matches!(err, SheetError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/leden.csv"));
    }

    #[test]
    fn test_cell_from_data() {
        assert_eq!(cell_from_data(&Data::Empty), CellValue::Empty);
        assert_eq!(cell_from_data(&Data::String(String::new())), CellValue::Empty);
        assert_eq!(cell_from_data(&Data::Int(3000)), CellValue::Number(3000.0));
        assert_eq!(cell_from_data(&Data::Float(12.0)), CellValue::Number(12.0));
        assert_eq!(
            cell_from_data(&Data::DateTimeIso("2012-05-03T00:00:00".into())),
            CellValue::Date(NaiveDate::from_ymd_opt(2012, 5, 3).unwrap())
        );
    }
}
