use crate::model::Roster;
use anyhow::Context;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de noms depuis CSV: header `name[,...]`, seule la première colonne compte.
///
/// Les cellules vides sont ignorées ; les doublons sont laissés à
/// [`crate::roster::RosterStore::import`].
pub fn import_names_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<String>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("reading {}", path.display()))?;
        let name = rec.get(0).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        out.push(name.to_string());
    }
    Ok(out)
}

/// Export JSON de la liste (tableau de noms, jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV de la liste: header `position,name` (position en base 1)
pub fn export_roster_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["position", "name"])?;
    for (i, name) in roster.iter().enumerate() {
        let pos = (i + 1).to_string();
        w.write_record([pos.as_str(), name.as_str()])?;
    }
    w.flush()?;
    Ok(())
}
