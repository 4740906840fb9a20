#![forbid(unsafe_code)]
//! Horaire — liste d'employés persistée et planning hebdomadaire XLSX.
//!
//! - Stockage fichier texte, un nom par ligne, réécrit à chaque modification.
//! - Ajout / retrait / réordonnancement, refus des doublons exacts.
//! - Export d'une semaine (alignée sur le lundi) en XLSX mis en forme, en mémoire.

pub mod error;
pub mod export;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod roster;
pub mod storage;
pub mod week;

pub use error::Error;
pub use export::{generate, Document, ExportError, ScheduleExporter, ScheduleSheet};
pub use model::{EmployeeName, Roster};
pub use roster::{ImportReport, RosterError, RosterStore};
pub use storage::{Storage, StorageError, TextStorage};
pub use week::{day_label, monday_of, week_days, WeekStart};
