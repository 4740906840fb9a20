//! Export du planning hebdomadaire en XLSX.
//!
//! Une ligne par employé (ordre de la liste), une colonne `Employee` puis les
//! 7 jours de la semaine, cellules de jours vides.

mod layout;
mod xlsx;

pub use layout::{
    rendered_width, Margins, Orientation, PageSetup, PaperSize, ScheduleSheet, EMPLOYEE_HEADER,
    SHEET_NAME,
};

use crate::model::EmployeeName;
use crate::week::WeekStart;
use chrono::NaiveDate;
use rust_xlsxwriter::XlsxError;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const DEFAULT_FILE_NAME: &str = "schedule.xlsx";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no employees to schedule, add employees first")]
    EmptyRoster,
    #[error("date out of range: the week of {0} cannot be represented")]
    DateOutOfRange(NaiveDate),
    #[error("spreadsheet serialization failed: {0}")]
    Serialization(#[from] XlsxError),
}

/// Document binaire produit, à enregistrer ou transmettre par l'appelant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        fs::write(path, &self.bytes)
    }
}

/// Options de mise en forme du planning.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleExporter {
    pub min_column_width: usize,
    pub column_padding: usize,
    pub page: PageSetup,
    pub file_name: String,
}

impl Default for ScheduleExporter {
    fn default() -> Self {
        Self {
            min_column_width: 15,
            column_padding: 2,
            page: PageSetup::default(),
            file_name: DEFAULT_FILE_NAME.to_owned(),
        }
    }
}

impl ScheduleExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construit la feuille (cellules + mise en forme) sans la sérialiser.
    pub fn build_sheet(
        &self,
        roster: &[EmployeeName],
        reference: NaiveDate,
    ) -> Result<ScheduleSheet, ExportError> {
        if roster.is_empty() {
            return Err(ExportError::EmptyRoster);
        }
        let week = week_of(reference)?;
        self.build_sheet_for_week(roster, &week)
    }

    /// Variante pour une semaine déjà résolue par l'appelant.
    pub fn build_sheet_for_week(
        &self,
        roster: &[EmployeeName],
        week: &WeekStart,
    ) -> Result<ScheduleSheet, ExportError> {
        if roster.is_empty() {
            return Err(ExportError::EmptyRoster);
        }
        let rows = layout::build_rows(roster, week);
        let column_widths =
            layout::column_widths(&rows, self.column_padding, self.min_column_width);
        Ok(ScheduleSheet {
            name: SHEET_NAME.to_owned(),
            week: *week,
            rows,
            column_widths,
            page: self.page,
        })
    }

    pub fn generate(
        &self,
        roster: &[EmployeeName],
        reference: NaiveDate,
    ) -> Result<Document, ExportError> {
        let sheet = self.build_sheet(roster, reference)?;
        self.serialize(&sheet)
    }

    pub fn generate_for_week(
        &self,
        roster: &[EmployeeName],
        week: &WeekStart,
    ) -> Result<Document, ExportError> {
        let sheet = self.build_sheet_for_week(roster, week)?;
        self.serialize(&sheet)
    }

    fn serialize(&self, sheet: &ScheduleSheet) -> Result<Document, ExportError> {
        let bytes = xlsx::render(sheet)?;
        debug!(
            monday = %sheet.week.monday,
            rows = sheet.body().len(),
            size = bytes.len(),
            "schedule generated"
        );
        Ok(Document {
            file_name: self.file_name.clone(),
            mime: XLSX_MIME,
            bytes,
        })
    }
}

/// Semaine de `reference`, ou `DateOutOfRange` aux bornes du calendrier.
pub fn week_of(reference: NaiveDate) -> Result<WeekStart, ExportError> {
    WeekStart::from_reference(reference).ok_or(ExportError::DateOutOfRange(reference))
}

/// Génère le planning avec la mise en forme par défaut.
pub fn generate(roster: &[EmployeeName], reference: NaiveDate) -> Result<Document, ExportError> {
    ScheduleExporter::default().generate(roster, reference)
}
