use crate::export::ExportError;
use crate::roster::RosterError;
use crate::storage::StorageError;
use thiserror::Error;

/// Erreur remontée à la frontière d'une action utilisateur.
///
/// Aucune n'est fatale : la liste en mémoire reste utilisable après coup.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Saisie refusée avant tout appel à la bibliothèque (date, position...).
    #[error("{0}")]
    Input(String),
    /// Import/export CSV ou JSON.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Code de sortie : 1 = saisie refusée, 2 = échec d'écriture/lecture ou de sérialisation.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Roster(e) => e.exit_code(),
            Error::Export(e) => e.exit_code(),
            Error::Input(_) => 1,
            Error::Storage(_) | Error::Other(_) => 2,
        }
    }
}

impl RosterError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RosterError::Storage(_) => 2,
            _ => 1,
        }
    }
}

impl ExportError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ExportError::EmptyRoster | ExportError::DateOutOfRange(_) => 1,
            ExportError::Serialization(_) => 2,
        }
    }
}
