use crate::model::EmployeeName;
use crate::week::{WeekStart, DAYS_PER_WEEK};

pub const EMPLOYEE_HEADER: &str = "Employee";
pub const SHEET_NAME: &str = "Schedule";

/// Orientation de la page imprimée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Format papier, avec son code XLSX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSize {
    Letter,
    A4,
}

impl PaperSize {
    pub fn xlsx_code(self) -> u8 {
        match self {
            PaperSize::Letter => 1,
            PaperSize::A4 => 9,
        }
    }
}

/// Marges en pouces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub header: f64,
    pub footer: f64,
}

impl Margins {
    pub const NARROW: Margins = Margins {
        left: 0.25,
        right: 0.25,
        top: 0.25,
        bottom: 0.25,
        header: 0.1,
        footer: 0.1,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub margins: Margins,
    pub orientation: Orientation,
    pub paper: PaperSize,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            margins: Margins::NARROW,
            orientation: Orientation::Landscape,
            paper: PaperSize::Letter,
        }
    }
}

/// Feuille prête à sérialiser : cellules, largeurs de colonnes et mise en page.
///
/// `rows[0]` est l'en-tête ; chaque ligne a `1 + 7` cellules. Toutes les
/// cellules sont rendues avec retour à la ligne et bordure fine.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSheet {
    pub name: String,
    pub week: WeekStart,
    pub rows: Vec<Vec<String>>,
    pub column_widths: Vec<f64>,
    pub page: PageSetup,
}

impl ScheduleSheet {
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Lignes d'employés (sans l'en-tête).
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

pub(super) fn build_rows(names: &[EmployeeName], week: &WeekStart) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(names.len() + 1);

    let mut header = Vec::with_capacity(DAYS_PER_WEEK + 1);
    header.push(EMPLOYEE_HEADER.to_owned());
    header.extend(week.labels());
    rows.push(header);

    for name in names {
        let mut row = vec![String::new(); DAYS_PER_WEEK + 1];
        row[0] = name.as_str().to_owned();
        rows.push(row);
    }
    rows
}

/// Largeur affichée d'une cellule : longueur de sa plus longue ligne, en caractères.
pub fn rendered_width(cell: &str) -> usize {
    cell.split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

pub(super) fn column_widths(rows: &[Vec<String>], padding: usize, min_width: usize) -> Vec<f64> {
    let columns = rows.first().map(Vec::len).unwrap_or(0);
    (0..columns)
        .map(|col| {
            let longest = rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| rendered_width(cell))
                .max()
                .unwrap_or(0);
            (longest + padding).max(min_width) as f64
        })
        .collect()
}
