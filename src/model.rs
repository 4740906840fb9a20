use crate::roster::RosterError;
use std::fmt;

/// Nom d'employé : non vide, sans espaces en bordure.
///
/// La comparaison est exacte et sensible à la casse (`"Alice" != "alice"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct EmployeeName(String);

impl EmployeeName {
    /// Normalise (trim) puis valide un nom saisi.
    pub fn parse<S: AsRef<str>>(raw: S) -> Result<Self, RosterError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(RosterError::InvalidName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmployeeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmployeeName {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EmployeeName> for String {
    fn from(name: EmployeeName) -> Self {
        name.0
    }
}

impl PartialEq<str> for EmployeeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EmployeeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Liste ordonnée des employés, sans doublons.
///
/// L'ordre est celui des lignes du planning. Une `Roster` ne se modifie pas en
/// place : les opérations de [`crate::roster::RosterStore`] en renvoient une nouvelle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Roster {
    names: Vec<EmployeeName>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construit une liste à partir de noms bruts (trim + refus des doublons).
    pub fn parse<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for raw in names {
            let name = EmployeeName::parse(raw)?;
            if roster.contains(name.as_str()) {
                return Err(RosterError::DuplicateName(name.into()));
            }
            roster.names.push(name);
        }
        Ok(roster)
    }

    pub fn names(&self) -> &[EmployeeName] {
        &self.names
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmployeeName> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub(crate) fn from_unique(names: Vec<EmployeeName>) -> Self {
        Self { names }
    }

    pub(crate) fn into_names(self) -> Vec<EmployeeName> {
        self.names
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a EmployeeName;
    type IntoIter = std::slice::Iter<'a, EmployeeName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
