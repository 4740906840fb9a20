use crate::model::{EmployeeName, Roster};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("reading {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("writing {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub trait Storage {
    /// Charge la liste ; un support absent donne une liste vide.
    fn load(&self) -> Result<Roster, StorageError>;
    /// Réécrit entièrement le support, de manière atomique.
    fn save(&self, roster: &Roster) -> Result<(), StorageError>;
}

/// Fichier texte UTF-8, un nom par ligne.
#[derive(Debug, Clone)]
pub struct TextStorage {
    path: PathBuf,
}

impl TextStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_err(&self, source: io::Error) -> StorageError {
        StorageError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_err(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl Storage for TextStorage {
    fn load(&self) -> Result<Roster, StorageError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no roster file, starting empty");
                return Ok(Roster::new());
            }
            Err(err) => return Err(self.read_err(err)),
        };

        let roster = parse_lines(&data);
        debug!(path = %self.path.display(), count = roster.len(), "roster loaded");
        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.write_err(e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.write_err(e))?;
        tmp.write_all(render_lines(roster).as_bytes())
            .map_err(|e| self.write_err(e))?;
        tmp.flush().map_err(|e| self.write_err(e))?;
        tmp.as_file().sync_all().map_err(|e| self.write_err(e))?;
        tmp.persist(&self.path).map_err(|e| self.write_err(e.error))?;

        debug!(path = %self.path.display(), count = roster.len(), "roster saved");
        Ok(())
    }
}

fn parse_lines(data: &str) -> Roster {
    let mut names: Vec<EmployeeName> = Vec::new();
    for (lineno, line) in data.lines().enumerate() {
        // les lignes vides (ou blanches) sont ignorées
        let Ok(name) = EmployeeName::parse(line) else {
            continue;
        };
        if names.contains(&name) {
            warn!(line = lineno + 1, name = %name, "duplicate name in roster file, ignored");
            continue;
        }
        names.push(name);
    }
    Roster::from_unique(names)
}

fn render_lines(roster: &Roster) -> String {
    let mut out = String::new();
    for name in roster {
        out.push_str(name.as_str());
        out.push('\n');
    }
    out
}
