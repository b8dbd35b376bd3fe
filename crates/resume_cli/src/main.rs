//! `resume` command-line host.
//!
//! # Responsibility
//! - Load the stored document from SQLite, apply one command, persist it back.
//! - Map failures to stable exit codes: 1 for input errors, 2 for storage.
//!
//! # Invariants
//! - A failed command never writes a partially edited document.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::info;

use resume_core::store::ordering::move_section;
use resume_core::{
    export_to_file, import_from_file, init_logging, open_db, render_document, AppConfig,
    ConfigError, DbError, DocumentStore, LoggingError, PersistenceError, PersistenceService,
    SqliteSnapshotRepository, TextRenderer,
};

/// Résumé document store.
#[derive(Parser, Debug)]
#[command(name = "resume", version, about = "Edit and export a stored résumé document")]
struct Cli {
    /// SQLite database file (default: $RESUME_DB_PATH or the user data directory).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Storage key of the document (default: resume-builder-storage).
    #[arg(long, global = true)]
    key: Option<String>,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for log files; logging is off without one.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Store a fresh default document.
    Init {
        /// Replace an existing document.
        #[arg(long)]
        force: bool,
    },
    /// Load a JSON export into the stored document.
    Import {
        /// JSON file to read.
        file: PathBuf,
    },
    /// Write the stored document as JSON.
    Export {
        /// Output file (default: resume-data.json).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print a text rendering of the visible sections.
    Preview,
    /// List sections in display order.
    Sections,
    /// Flip a section between visible and hidden.
    Toggle {
        /// Section id as shown by `sections`.
        section_id: String,
    },
    /// Move the section at display position FROM to position TO.
    Move { from: usize, to: usize },
    /// Append a custom section with a placeholder block.
    AddCustom,
}

#[derive(Debug)]
enum CliError {
    Usage(String),
    Config(ConfigError),
    Logging(LoggingError),
    Import(PersistenceError),
    Db(DbError),
    Persistence(PersistenceError),
    Output(std::io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::Config(_) | Self::Logging(_) | Self::Import(_) => 1,
            Self::Db(_) | Self::Persistence(_) | Self::Output(_) => 2,
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage(message) => write!(f, "{message}"),
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::Import(err) => write!(f, "import failed: {err}"),
            Self::Db(err) => write!(f, "database error: {err}"),
            Self::Persistence(err) => write!(f, "storage error: {err}"),
            Self::Output(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Usage(_) => None,
            Self::Config(err) => Some(err),
            Self::Logging(err) => Some(err),
            Self::Import(err) | Self::Persistence(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<PersistenceError> for CliError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

impl From<DbError> for CliError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Output(value)
    }
}

fn main() {
    let cli = Cli::parse();
    let result = AppConfig::load()
        .map_err(CliError::Config)
        .and_then(|base| resolve_config(&cli, base))
        .and_then(|config| {
            let mut stdout = std::io::stdout().lock();
            run(&cli.command, &config, &mut stdout)
        });

    if let Err(err) = result {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Overlays command-line flags on `base` and starts logging when requested.
fn resolve_config(cli: &Cli, mut base: AppConfig) -> Result<AppConfig, CliError> {
    if let Some(db) = &cli.db {
        base.db_path = db.clone();
    }
    if let Some(key) = &cli.key {
        base.storage_key = key.clone();
    }
    if let Some(level) = &cli.log_level {
        base.log_level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        base.log_dir = Some(dir.clone());
    }
    base.validate().map_err(CliError::Config)?;

    if let Some(dir) = &base.log_dir {
        init_logging(&base.log_level, dir).map_err(CliError::Logging)?;
    }
    Ok(base)
}

fn run(command: &Commands, config: &AppConfig, out: &mut impl Write) -> Result<(), CliError> {
    let conn = open_db(&config.db_path)?;
    let repo = SqliteSnapshotRepository::try_new(&conn).map_err(PersistenceError::from)?;
    let persistence = PersistenceService::new(repo, config.storage_key.as_str());

    match command {
        Commands::Init { force } => {
            if !force && persistence.has_saved()? {
                return Err(CliError::Usage(format!(
                    "a document is already stored under `{}`; pass --force to replace it",
                    persistence.storage_key()
                )));
            }
            persistence.save(&DocumentStore::new())?;
            writeln!(out, "initialized `{}`", persistence.storage_key())?;
        }
        Commands::Import { file } => {
            let mut store = load_store(&persistence)?;
            import_from_file(&mut store, file).map_err(CliError::Import)?;
            persistence.save(&store)?;
            writeln!(out, "imported {}", file.display())?;
        }
        Commands::Export { out: target } => {
            let store = load_store(&persistence)?;
            let path = target
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.export_file_name));
            export_to_file(&store, &path)?;
            writeln!(out, "exported {}", path.display())?;
        }
        Commands::Preview => {
            let store = load_store(&persistence)?;
            let mut renderer = TextRenderer::new();
            render_document(&store, &mut renderer);
            write!(out, "{}", renderer.finish())?;
        }
        Commands::Sections => {
            let store = load_store(&persistence)?;
            for (position, section) in store.ordered_sections().into_iter().enumerate() {
                let visibility = if section.visible { "visible" } else { "hidden" };
                writeln!(
                    out,
                    "{position}\t{}\t{}\t{visibility}\t{}",
                    section.id, section.kind, section.title
                )?;
            }
        }
        Commands::Toggle { section_id } => {
            let mut store = load_store(&persistence)?;
            if !store.toggle_visibility(section_id) {
                return Err(CliError::Usage(format!("no section with id `{section_id}`")));
            }
            persistence.save(&store)?;
            let visible = store.section(section_id).is_some_and(|section| section.visible);
            writeln!(
                out,
                "{section_id} is now {}",
                if visible { "visible" } else { "hidden" }
            )?;
        }
        Commands::Move { from, to } => {
            let mut store = load_store(&persistence)?;
            let count = store.sections().len();
            if *from >= count {
                return Err(CliError::Usage(format!(
                    "position {from} is out of range; there are {count} sections"
                )));
            }
            let moved = move_section(store.sections(), *from, *to);
            store.reorder_sections(moved);
            persistence.save(&store)?;
            writeln!(out, "moved section {from} -> {}", (*to).min(count - 1))?;
        }
        Commands::AddCustom => {
            let mut store = load_store(&persistence)?;
            let ids = store.add_custom_section();
            persistence.save(&store)?;
            writeln!(out, "added section {} with block {}", ids.section_id, ids.block_id)?;
        }
    }

    info!("event=cli_command module=cli status=ok command={}", command_name(command));
    Ok(())
}

/// Stored document, or the default document when nothing is stored yet.
fn load_store(
    persistence: &PersistenceService<SqliteSnapshotRepository<'_>>,
) -> Result<DocumentStore, CliError> {
    let mut store = DocumentStore::new();
    persistence.restore(&mut store)?;
    Ok(store)
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init { .. } => "init",
        Commands::Import { .. } => "import",
        Commands::Export { .. } => "export",
        Commands::Preview => "preview",
        Commands::Sections => "sections",
        Commands::Toggle { .. } => "toggle",
        Commands::Move { .. } => "move",
        Commands::AddCustom => "add-custom",
    }
}
