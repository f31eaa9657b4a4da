//! Formatted spreadsheet export.
//!
//! Reads the activity table, appends a per-row `Total` column and a final
//! `Average` row, renders every numeric (seconds) cell as human-readable
//! duration text, strips the `Objective:`/`Summary:` placeholder prefixes,
//! and writes the result as `<stem>_fancy.xlsx` with the header row and the
//! date column frozen.

use crate::errors::{AppError, AppResult};
use crate::store::Table;
use crate::ui::messages;
use crate::utils::path::fancy_output_path;
use crate::utils::time::hours_minutes;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, XlsxError};
use std::io;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

const DATE_COLUMN: &str = "Date";
const AVERAGE_LABEL: &str = "Average";

pub struct FancyExport;

impl FancyExport {
    /// Transform the table at `table_path` and write the spreadsheet next to
    /// it. Returns the destination path.
    pub fn export(table_path: &Path, categories: &[String]) -> AppResult<PathBuf> {
        let table = Table::read(table_path)?;
        let out = fancy_output_path(table_path);

        let (headers, rows) = build_grid(&table, categories);
        write_workbook(&out, &headers, &rows)?;

        Ok(out)
    }
}

/// Build the display grid: original columns plus `Total`, one extra
/// `Average` row, every cell already formatted for presentation.
fn build_grid(table: &Table, categories: &[String]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers: Vec<String> = table.headers().to_vec();
    headers.push("Total".to_string());

    let date_col = table.column(DATE_COLUMN);
    let category_cols: Vec<usize> = categories
        .iter()
        .filter_map(|c| table.column(c))
        .collect();

    // raw numeric grid, one extra Total column; text cells become None
    let mut numeric: Vec<Vec<Option<f64>>> = Vec::with_capacity(table.rows().len());
    for row in table.rows() {
        let mut values: Vec<Option<f64>> = row.iter().map(|cell| parse_seconds(cell)).collect();

        // a single unparsable category cell poisons the row total
        let total = category_cols
            .iter()
            .map(|&c| values.get(c).copied().flatten().unwrap_or(f64::NAN))
            .sum::<f64>();
        values.push(if total.is_nan() { None } else { Some(total) });
        numeric.push(values);
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(numeric.len() + 1);
    for (row, values) in table.rows().iter().zip(&numeric) {
        let mut out_row: Vec<String> = Vec::with_capacity(headers.len());
        for (col, cell) in row.iter().enumerate() {
            out_row.push(match values[col] {
                Some(secs) => hours_minutes(secs),
                None => strip_label_prefix(cell).to_string(),
            });
        }
        out_row.push(values[row.len()].map(hours_minutes).unwrap_or_default());
        rows.push(out_row);
    }

    // column-wise mean over the cells that held numbers
    let mut average: Vec<String> = (0..headers.len())
        .map(|col| {
            let mut sum = 0.0;
            let mut count = 0usize;
            for values in &numeric {
                if let Some(v) = values.get(col).copied().flatten() {
                    sum += v;
                    count += 1;
                }
            }
            if count == 0 {
                String::new()
            } else {
                hours_minutes(sum / count as f64)
            }
        })
        .collect();
    if let Some(col) = date_col {
        average[col] = AVERAGE_LABEL.to_string();
    }
    rows.push(average);

    (headers, rows)
}

fn parse_seconds(cell: &str) -> Option<f64> {
    let v: f64 = cell.trim().parse().ok()?;
    if v.is_nan() { None } else { Some(v) }
}

/// Strip a literal leading metadata placeholder from a text cell.
fn strip_label_prefix(cell: &str) -> &str {
    for prefix in ["Summary: ", "Summary:", "Objective: ", "Objective:"] {
        if let Some(stripped) = cell.strip_prefix(prefix) {
            return stripped;
        }
    }
    cell
}

/// Write the grid: bold header on blue, banded rows, thin borders, columns
/// sized to content, header row and first column frozen for scrolling.
fn write_workbook(path: &Path, headers: &[String], rows: &[Vec<String>]) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 1).ok();

    let mut col_widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, row) in rows.iter().enumerate() {
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };
        let fmt = Format::new()
            .set_background_color(band_color)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        for (col, value) in row.iter().enumerate() {
            worksheet
                .write_with_format((row_index + 1) as u32, col as u16, value.as_str(), &fmt)
                .map_err(to_app_error)?;

            if col < col_widths.len() {
                col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (col, width) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    let path_str = path
        .to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))?;

    workbook.save(path_str).map_err(|e| match e {
        XlsxError::IoError(ref io_err) if io_err.kind() == io::ErrorKind::PermissionDenied => {
            AppError::ExportLocked(path.display().to_string())
        }
        other => AppError::Export(other.to_string()),
    })?;

    messages::success(format!("Formatted export completed: {}", path.display()));
    Ok(())
}

fn to_app_error(e: XlsxError) -> AppError {
    AppError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn cats(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn table_from(content: &str, name: &str) -> Table {
        let mut p = env::temp_dir();
        p.push(format!("{name}_daytally_fancy.csv"));
        fs::write(&p, content).unwrap();
        let t = Table::read(&p).unwrap();
        fs::remove_file(&p).ok();
        t
    }

    #[test]
    fn strips_placeholder_prefixes() {
        assert_eq!(strip_label_prefix("Summary: wrote docs"), "wrote docs");
        assert_eq!(strip_label_prefix("Summary:wrote docs"), "wrote docs");
        assert_eq!(strip_label_prefix("Objective: ship"), "ship");
        assert_eq!(strip_label_prefix("Objective:"), "");
        assert_eq!(strip_label_prefix("plain text"), "plain text");
    }

    #[test]
    fn grid_appends_total_column_and_average_row() {
        let t = table_from(
            "Date|Objective|Summary|Coding|Reading\n\
             01/01/2024|Objective: a|Summary: b|3600.00|1800.00\n\
             02/01/2024|Objective:|Summary:|7200.00|0.00\n",
            "grid_totals",
        );
        let (headers, rows) = build_grid(&t, &cats(&["Coding", "Reading"]));

        assert_eq!(headers.last().unwrap(), "Total");
        assert_eq!(rows.len(), 3);

        // first row: 3600 + 1800 = 5400 s
        assert_eq!(rows[0].last().unwrap(), "1 hours, 30 minutes");
        assert_eq!(rows[0][1], "a");
        assert_eq!(rows[0][3], "1 hours, 0 minutes");

        // average row: Coding mean = 5400 s, Total mean = 6300 s
        let avg = rows.last().unwrap();
        assert_eq!(avg[0], "Average");
        assert_eq!(avg[1], "");
        assert_eq!(avg[3], "1 hours, 30 minutes");
        assert_eq!(avg.last().unwrap(), "1 hours, 45 minutes");
    }

    #[test]
    fn blank_category_cell_blanks_the_total() {
        let t = table_from(
            "Date|Objective|Summary|Coding|Reading\n\
             01/01/2024|Objective:|Summary:|3600.00|\n",
            "grid_blank",
        );
        let (_, rows) = build_grid(&t, &cats(&["Coding", "Reading"]));
        assert_eq!(rows[0].last().unwrap(), "");
        // the parseable cell still renders
        assert_eq!(rows[0][3], "1 hours, 0 minutes");
    }

    #[test]
    fn export_writes_the_fancy_workbook() {
        let mut table_path = env::temp_dir();
        table_path.push("export_workbook_daytally.csv");
        fs::write(
            &table_path,
            "Date|Objective|Summary|Coding\n01/01/2024|Objective:|Summary:|3600.00\n",
        )
        .unwrap();

        let out = FancyExport::export(&table_path, &cats(&["Coding"])).unwrap();
        assert!(out.ends_with("export_workbook_daytally_fancy.xlsx"));
        assert!(out.exists());

        fs::remove_file(&table_path).ok();
        fs::remove_file(&out).ok();
    }
}
