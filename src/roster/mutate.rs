use super::{ImportReport, RosterError};
use crate::model::{EmployeeName, Roster};
use std::collections::HashSet;

pub(super) fn add(roster: &Roster, raw: &str) -> Result<Roster, RosterError> {
    let name = EmployeeName::parse(raw)?;
    if roster.contains(name.as_str()) {
        return Err(RosterError::DuplicateName(name.into()));
    }
    let mut names = roster.names().to_vec();
    names.push(name);
    Ok(Roster::from_unique(names))
}

pub(super) fn remove<I, S>(roster: &Roster, selected: I) -> Roster
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let selected: HashSet<String> = selected
        .into_iter()
        .map(|s| s.as_ref().trim().to_owned())
        .collect();
    let kept = roster
        .iter()
        .filter(|n| !selected.contains(n.as_str()))
        .cloned()
        .collect();
    Roster::from_unique(kept)
}

pub(super) fn reorder<I, S>(roster: &Roster, new_order: I) -> Result<Roster, RosterError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let proposed = new_order
        .into_iter()
        .map(EmployeeName::parse)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| RosterError::InvalidReorder)?;

    if !is_permutation(roster.names(), &proposed) {
        return Err(RosterError::InvalidReorder);
    }
    Ok(Roster::from_unique(proposed))
}

/// Déplace un nom à une position (base 0, bornée à la fin de la liste).
pub(super) fn move_to(roster: &Roster, name: &str, to: usize) -> Result<Roster, RosterError> {
    let from = roster
        .position(name.trim())
        .ok_or(RosterError::InvalidReorder)?;
    let mut names = roster.clone().into_names();
    let moved = names.remove(from);
    let to = to.min(names.len());
    names.insert(to, moved);
    Ok(Roster::from_unique(names))
}

pub(super) fn import<I, S>(roster: &Roster, raw_names: I) -> (Roster, ImportReport)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut current = roster.clone();
    let mut report = ImportReport::default();
    for raw in raw_names {
        match add(&current, raw.as_ref()) {
            Ok(next) => {
                if let Some(last) = next.names().last() {
                    report.added.push(last.clone());
                }
                current = next;
            }
            Err(_) => report.skipped.push(raw.as_ref().to_owned()),
        }
    }
    (current, report)
}

fn is_permutation(current: &[EmployeeName], proposed: &[EmployeeName]) -> bool {
    if current.len() != proposed.len() {
        return false;
    }
    let mut a: Vec<&EmployeeName> = current.iter().collect();
    let mut b: Vec<&EmployeeName> = proposed.iter().collect();
    a.sort();
    b.sort();
    a == b
}
