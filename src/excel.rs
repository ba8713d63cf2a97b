use crate::error::ExportError;
use crate::transform::Row;
use rust_xlsxwriter::Workbook;
use std::path::Path;

const HEADER: [&str; 3] = ["User ID", "Timestamp (JST)", "Text"];

/// Single sheet, header in row 0, one data row per transformed row in the
/// supplied order. All cells are written as strings.
pub fn build_workbook(rows: &[Row]) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, title) in HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *title)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_string(r, 0, row.user.as_str())?;
        sheet.write_string(r, 1, row.timestamp.as_str())?;
        sheet.write_string(r, 2, row.text.as_str())?;
    }

    Ok(workbook)
}

/// Overwrites any existing file at `path`. An empty row sequence yields a
/// header-only workbook.
pub fn save_rows(rows: &[Row], path: &Path) -> Result<(), ExportError> {
    let mut workbook = build_workbook(rows)?;
    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(user: &str, timestamp: &str, text: &str) -> Row {
        Row {
            user: user.to_string(),
            timestamp: timestamp.to_string(),
            text: text.to_string(),
        }
    }

    fn saved_bytes(rows: &[Row]) -> Vec<u8> {
        build_workbook(rows).unwrap().save_to_buffer().unwrap()
    }

    #[test]
    fn empty_input_yields_header_only_workbook() {
        let bytes = saved_bytes(&[]);
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn single_row_saves() {
        let bytes = saved_bytes(&[row("U111", "1970/01/01 09:00:00", "hello")]);
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn thousand_rows_save() {
        let rows: Vec<Row> = (0..1000)
            .map(|i| row(&format!("U{i}"), "1970/01/01 09:00:00", &format!("msg {i}")))
            .collect();
        assert!(saved_bytes(&rows).starts_with(b"PK"));
    }

    #[test]
    fn non_ascii_text_saves() {
        let bytes = saved_bytes(&[row("U111", "2024/05/01 12:34:56", "こんにちは 🙂")]);
        assert!(bytes.starts_with(b"PK"));
    }
}
