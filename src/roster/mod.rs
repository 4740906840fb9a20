mod mutate;
mod types;

pub use types::{ImportReport, RosterError};

use crate::model::Roster;
use crate::storage::Storage;
use tracing::debug;

/// RosterStore : opérations sur la liste, persistées à chaque succès.
///
/// L'appelant garde la liste qui fait foi ; chaque opération l'emprunte et
/// renvoie la nouvelle version. En cas d'erreur, rien n'est écrit.
#[derive(Debug)]
pub struct RosterStore<S: Storage> {
    storage: S,
}

impl<S: Storage> RosterStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Result<Roster, RosterError> {
        Ok(self.storage.load()?)
    }

    pub fn save(&self, roster: &Roster) -> Result<(), RosterError> {
        Ok(self.storage.save(roster)?)
    }

    /// Ajoute un nom (trim) en fin de liste.
    pub fn add(&self, roster: &Roster, name: &str) -> Result<Roster, RosterError> {
        let next = mutate::add(roster, name)?;
        self.storage.save(&next)?;
        debug!(name = name.trim(), count = next.len(), "employee added");
        Ok(next)
    }

    /// Retire tous les noms sélectionnés ; les inconnus sont ignorés.
    pub fn remove<I, T>(&self, roster: &Roster, selected: I) -> Result<Roster, RosterError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let next = mutate::remove(roster, selected);
        self.storage.save(&next)?;
        debug!(removed = roster.len() - next.len(), "employees removed");
        Ok(next)
    }

    /// Remplace l'ordre, à condition que `new_order` soit une permutation de la liste.
    pub fn reorder<I, T>(&self, roster: &Roster, new_order: I) -> Result<Roster, RosterError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let next = mutate::reorder(roster, new_order)?;
        self.storage.save(&next)?;
        debug!("roster reordered");
        Ok(next)
    }

    /// Déplace `name` à la position `to` (base 0).
    pub fn move_to(&self, roster: &Roster, name: &str, to: usize) -> Result<Roster, RosterError> {
        let next = mutate::move_to(roster, name, to)?;
        self.storage.save(&next)?;
        debug!(name, to, "employee moved");
        Ok(next)
    }

    /// Ajout en masse : doublons et noms vides sont ignorés, une seule écriture.
    pub fn import<I, T>(
        &self,
        roster: &Roster,
        names: I,
    ) -> Result<(Roster, ImportReport), RosterError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let (next, report) = mutate::import(roster, names);
        self.storage.save(&next)?;
        debug!(
            added = report.added.len(),
            skipped = report.skipped.len(),
            "employees imported"
        );
        Ok((next, report))
    }
}
