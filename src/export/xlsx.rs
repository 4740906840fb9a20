use super::layout::{Orientation, ScheduleSheet};
use rust_xlsxwriter::{Format, FormatBorder, Workbook, XlsxError};

/// Sérialise la feuille en XLSX, entièrement en mémoire.
pub(super) fn render(sheet: &ScheduleSheet) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let cell = Format::new()
        .set_text_wrap()
        .set_border(FormatBorder::Thin);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&sheet.name)?;

    for (r, row) in sheet.rows.iter().enumerate() {
        let r = u32::try_from(r).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (c, value) in row.iter().enumerate() {
            let c = u16::try_from(c).map_err(|_| XlsxError::RowColumnLimitError)?;
            if value.is_empty() {
                // cellule vide mais bordée
                worksheet.write_blank(r, c, &cell)?;
            } else {
                worksheet.write_string_with_format(r, c, value, &cell)?;
            }
        }
    }

    for (c, width) in sheet.column_widths.iter().enumerate() {
        let c = u16::try_from(c).map_err(|_| XlsxError::RowColumnLimitError)?;
        worksheet.set_column_width(c, *width)?;
    }

    let page = &sheet.page;
    let m = page.margins;
    worksheet.set_margins(m.left, m.right, m.top, m.bottom, m.header, m.footer);
    match page.orientation {
        Orientation::Landscape => worksheet.set_landscape(),
        Orientation::Portrait => worksheet.set_portrait(),
    };
    worksheet.set_paper_size(page.paper.xlsx_code());

    workbook.save_to_buffer()
}
