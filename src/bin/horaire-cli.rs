#![forbid(unsafe_code)]
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use horaire::{
    export::{self, ScheduleExporter},
    io,
    roster::RosterStore,
    storage::{StorageError, TextStorage},
    Error,
};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planning hebdomadaire
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier texte de la liste (un nom par ligne)
    #[arg(long, global = true, env = "HORAIRE_ROSTER", default_value = "employees.txt")]
    roster: PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher la liste et optionnellement l'exporter
    List {
        #[arg(long)]
        out_json: Option<PathBuf>,
        #[arg(long)]
        out_csv: Option<PathBuf>,
    },

    /// Ajouter un employé
    Add { name: String },

    /// Retirer un ou plusieurs employés
    Remove { names: Vec<String> },

    /// Remplacer l'ordre complet de la liste
    Reorder {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Déplacer un employé à une position (base 1)
    Move {
        name: String,
        #[arg(long)]
        to: usize,
    },

    /// Importer des noms depuis un CSV (colonne `name`)
    Import {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Générer le planning XLSX de la semaine contenant `--date`
    Generate {
        /// YYYY-MM-DD, aujourd'hui par défaut
        #[arg(long)]
        date: Option<String>,
        /// Fichier de sortie, `schedule.xlsx` par défaut
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            err.exit_code()
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32, Error> {
    let store = RosterStore::new(TextStorage::open(&cli.roster));
    let roster = store.load()?;

    match cli.cmd {
        Commands::List { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_roster_json(path, &roster)?;
            }
            if let Some(path) = out_csv {
                io::export_roster_csv(path, &roster)?;
            }
            if roster.is_empty() {
                println!("(no employees)");
            }
            for (i, name) in roster.iter().enumerate() {
                println!("{}. {}", i + 1, name);
            }
        }
        Commands::Add { name } => {
            let roster = store.add(&roster, &name)?;
            if let Some(added) = roster.names().last() {
                println!("{added} added");
            }
        }
        Commands::Remove { names } => {
            if names.is_empty() {
                eprintln!("warning: no employee selected for removal");
                return Ok(0);
            }
            let next = store.remove(&roster, &names)?;
            println!("{} employee(s) removed", roster.len() - next.len());
        }
        Commands::Reorder { names } => {
            store.reorder(&roster, &names)?;
            println!("employee list reordered");
        }
        Commands::Move { name, to } => {
            if to == 0 {
                return Err(Error::Input("position starts at 1".into()));
            }
            store.move_to(&roster, &name, to - 1)?;
            println!("employee list reordered");
        }
        Commands::Import { csv } => {
            let names = io::import_names_csv(csv)?;
            let (_, report) = store.import(&roster, names)?;
            println!(
                "{} added, {} skipped",
                report.added.len(),
                report.skipped.len()
            );
        }
        Commands::Generate { date, out } => {
            let reference = match date {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|e| {
                    Error::Input(format!("invalid date (expected YYYY-MM-DD): {raw}: {e}"))
                })?,
                None => Local::now().date_naive(),
            };
            let week = export::week_of(reference)?;
            if week.adjusted() {
                eprintln!(
                    "warning: {} is not a Monday, using {}",
                    week.reference, week.monday
                );
            }

            let exporter = ScheduleExporter::default();
            let doc = exporter.generate_for_week(roster.names(), &week)?;
            let path = out.unwrap_or_else(|| PathBuf::from(&doc.file_name));
            doc.write_to(&path).map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;
            println!("schedule generated: {}", path.display());
        }
    }

    Ok(0)
}
