use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use eyre::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{Level, debug};
use trainlog::validate::{DATE_FORMAT, parse_date};
use trainlog::{
    Config, Query, RawFields, RecordId, RecordStore, SortOrder, StoredRecord, exercise_names, export_csv,
    import_csv, load_json_or_empty, save_json, series_for, validate,
};

#[derive(Parser)]
#[command(name = "trainlog")]
#[command(about = "Training journal - log sets, filter them, chart progress")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to the config file (default: <config dir>/trainlog/trainlog.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the JSON journal (overrides the config file)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a set
    Add {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(short, long)]
        exercise: String,

        /// Weight in kg
        #[arg(short, long, allow_hyphen_values = true)]
        weight: String,

        #[arg(short, long, allow_hyphen_values = true)]
        reps: String,
    },

    /// Replace every field of a logged set
    Update {
        id: RecordId,

        #[arg(long)]
        date: String,

        #[arg(short, long)]
        exercise: String,

        #[arg(short, long, allow_hyphen_values = true)]
        weight: String,

        #[arg(short, long, allow_hyphen_values = true)]
        reps: String,
    },

    /// Remove a logged set
    Delete { id: RecordId },

    /// Show logged sets, optionally filtered and sorted
    List {
        /// Earliest date, inclusive
        #[arg(long)]
        from: Option<String>,

        /// Latest date, inclusive
        #[arg(long)]
        to: Option<String>,

        /// Case-insensitive exercise keyword
        #[arg(short, long)]
        search: Option<String>,

        /// Sort by date
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },

    /// Write all sets to a CSV file
    ExportCsv { path: PathBuf },

    /// Append all sets from a CSV file (all rows or none)
    ImportCsv { path: PathBuf },

    /// Show the weight progression of one exercise
    Progress {
        exercise: String,

        /// Print the series as JSON for charting tools
        #[arg(long)]
        json: bool,
    },

    /// List the distinct exercises in the journal
    Exercises,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortOrder::Ascending,
            SortArg::Desc => SortOrder::Descending,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Setup tracing
    let level = if cli.verbose { Level::DEBUG } else { config.level()? };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let data_file = cli.data_file.unwrap_or(config.data_file);
    match &config.source {
        Some(path) => debug!(config = ?path, data_file = ?data_file, log_level = %level, "Loaded config"),
        None => debug!(data_file = ?data_file, log_level = %level, "No config file, using defaults"),
    }
    let mut store = load_json_or_empty(&data_file)
        .with_context(|| format!("Failed to load journal {}", data_file.display()))?;

    match cli.command {
        Commands::Add {
            date,
            exercise,
            weight,
            reps,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string());
            let record = validate(&RawFields::new(&date, &exercise, &weight, &reps))?;
            let id = store.add(record);
            persist(&store, &data_file)?;
            println!("{} {}", "Added".green(), id);
        }
        Commands::Update {
            id,
            date,
            exercise,
            weight,
            reps,
        } => {
            store.update(id, &RawFields::new(&date, &exercise, &weight, &reps))?;
            persist(&store, &data_file)?;
            println!("{} {}", "Updated".green(), id);
        }
        Commands::Delete { id } => {
            let removed = store.delete(id)?;
            persist(&store, &data_file)?;
            println!(
                "{} {} ({} {} {}x{})",
                "Deleted".green(),
                id,
                removed.date(),
                removed.exercise(),
                removed.weight(),
                removed.reps()
            );
        }
        Commands::List {
            from,
            to,
            search,
            sort,
        } => {
            let mut query = Query::new();
            if let Some(from) = from {
                query = query.from(parse_date(&from)?);
            }
            if let Some(to) = to {
                query = query.to(parse_date(&to)?);
            }
            if let Some(keyword) = search {
                query = query.keyword(keyword);
            }
            if let Some(sort) = sort {
                query = query.order(sort.into());
            }

            debug!(%query, "Listing records");
            let view = query.apply(&store);
            if view.is_empty() {
                println!("{} ({})", "No records".yellow(), query);
            } else {
                let count = view.len();
                print_records(view);
                if query.order != SortOrder::Insertion {
                    println!("{} records, sorted by date ({})", count, query.order);
                }
            }
        }
        Commands::ExportCsv { path } => {
            export_csv(&store, &path).with_context(|| format!("Failed to export {}", path.display()))?;
            println!("{} {} records to {}", "Exported".green(), store.len(), path.display());
        }
        Commands::ImportCsv { path } => {
            let ids = import_csv(&mut store, &path).with_context(|| format!("Failed to import {}", path.display()))?;
            persist(&store, &data_file)?;
            println!("{} {} records from {}", "Imported".green(), ids.len(), path.display());
        }
        Commands::Progress { exercise, json } => {
            let series = series_for(&store, &exercise);
            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else if series.is_empty() {
                println!("{} {}", "No records for".yellow(), exercise);
            } else {
                println!("{}", format!("{:<10}  {:>8}", "Date", "Weight").bold());
                for point in series {
                    println!("{:<10}  {:>8}", point.date.to_string(), point.weight);
                }
            }
        }
        Commands::Exercises => {
            for name in exercise_names(&store) {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

fn persist(store: &RecordStore, data_file: &Path) -> Result<()> {
    save_json(store, data_file).with_context(|| format!("Failed to save journal {}", data_file.display()))
}

fn print_records<'a>(rows: impl IntoIterator<Item = &'a StoredRecord>) {
    println!(
        "{}",
        format!("{:>5}  {:<10}  {:<24}  {:>8}  {:>5}", "ID", "Date", "Exercise", "Weight", "Reps").bold()
    );
    for stored in rows {
        let record = &stored.record;
        println!(
            "{:>5}  {:<10}  {:<24}  {:>8}  {:>5}",
            stored.id.get(),
            record.date().to_string(),
            record.exercise(),
            record.weight(),
            record.reps()
        );
    }
}
