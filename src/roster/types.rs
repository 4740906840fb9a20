use crate::model::EmployeeName;
use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("invalid name: must not be empty or whitespace only")]
    InvalidName,
    #[error("duplicate name: {0} is already in the roster")]
    DuplicateName(String),
    #[error("invalid reorder: new order is not a permutation of the current roster")]
    InvalidReorder,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Bilan d'un import en masse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub added: Vec<EmployeeName>,
    /// Entrées ignorées (vides ou déjà présentes), telles que lues.
    pub skipped: Vec<String>,
}
