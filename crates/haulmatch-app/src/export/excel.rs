//! Excel export functionality

use crate::report::{ReportSection, COLUMNS};
use haulmatch_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;
use tracing::info;

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export comparison sections and notes to an Excel file
pub fn export_to_excel(sections: &[ReportSection], notes: &[String], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_comparison_sheet(sheet, sections, notes)?;

    workbook.save(output_path).map_err(excel_err)?;
    info!(path = %output_path.display(), "comparison exported");

    Ok(())
}

fn write_comparison_sheet(
    sheet: &mut Worksheet,
    sections: &[ReportSection],
    notes: &[String],
) -> Result<()> {
    sheet.set_name("Productivity Study").map_err(excel_err)?;

    let title_format = Format::new().set_bold().set_font_size(14);
    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Bucket Productivity Comparison", &title_format)
        .map_err(excel_err)?;
    sheet.write_string(1, 0, "Generated:").map_err(excel_err)?;
    sheet
        .write_string(1, 1, chrono::Local::now().format("%Y-%m-%d %H:%M").to_string())
        .map_err(excel_err)?;

    let mut row: u32 = 3;
    for section in sections {
        sheet
            .write_string_with_format(row, 0, &section.title, &header_format)
            .map_err(excel_err)?;
        row += 1;

        for (col, heading) in COLUMNS.iter().enumerate() {
            sheet
                .write_string_with_format(row, col as u16, *heading, &header_format)
                .map_err(excel_err)?;
        }
        row += 1;

        for report_row in &section.rows {
            for (col, cell) in report_row.cells().iter().enumerate() {
                sheet.write_string(row, col as u16, *cell).map_err(excel_err)?;
            }
            row += 1;
        }
        row += 1;
    }

    for note in notes {
        sheet.write_string(row, 0, note).map_err(excel_err)?;
        row += 1;
    }

    sheet.set_column_width(0, 44).map_err(excel_err)?;
    for col in 1..COLUMNS.len() as u16 {
        sheet.set_column_width(col, 16).map_err(excel_err)?;
    }

    Ok(())
}
