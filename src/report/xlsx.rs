use std::path::Path;

use rust_xlsxwriter::{Format, FormatBorder, Workbook};

use crate::{
    Res,
    report::{
        export::{FormatSpec, TabularWriter, TableData},
        table::FieldValue,
    },
};

/// Writes one worksheet with a frozen, filterable header row.
pub struct XlsxWriter;

impl TabularWriter for XlsxWriter {
    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn write(&self, data: &TableData, spec: &FormatSpec, destination: &Path) -> Res<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(spec.sheet_name.as_str())?;

        let mut header_format = Format::new().set_border_bottom(FormatBorder::Thin);
        if spec.header_bold {
            header_format = header_format.set_bold();
        }

        let columns: Vec<_> = data.headers.iter().map(|&h| spec.column(h)).collect();
        let number_formats: Vec<Format> = columns
            .iter()
            .map(|c| Format::new().set_num_format(c.numeric_format.excel_code()))
            .collect();

        for (col_idx, (header, column)) in data.headers.iter().zip(&columns).enumerate() {
            let col = col_idx as u16;
            worksheet.set_column_width(col, column.width)?;
            worksheet.write_string_with_format(0, col, *header, &header_format)?;
        }

        for (row_idx, row) in data.rows.iter().enumerate() {
            let row_num = (row_idx + 1) as u32;
            for (col_idx, value) in row.iter().enumerate() {
                let col = col_idx as u16;
                match value {
                    FieldValue::Text(text) => {
                        worksheet.write_string(row_num, col, text.as_str())?;
                    }
                    FieldValue::Integer(n) => {
                        worksheet.write_number_with_format(
                            row_num,
                            col,
                            *n as f64,
                            &number_formats[col_idx],
                        )?;
                    }
                }
            }
        }

        let last_col = (data.headers.len() as u16).saturating_sub(1);
        worksheet.set_freeze_panes(1, 0)?;
        worksheet.autofilter(0, 0, data.rows.len() as u32, last_col)?;

        workbook.save(destination)?;
        Ok(())
    }
}
