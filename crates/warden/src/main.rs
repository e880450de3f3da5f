use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::Result;
use color_eyre::eyre::eyre;
#[cfg(not(windows))]
use jemallocator::Jemalloc;
#[cfg(windows)]
use mimalloc::MiMalloc;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::Mutex;
use time::OffsetDateTime;
use tracing::info;
use tracing_subscriber::EnvFilter;
use warden_ui::{DetailContext, DetailViewState, SystemClipboard, UiConfig, open_detail_view, run_detail_view};
use warden_vault::{ItemType, VaultFolder, VaultItem, read_folders, read_item, write_item};

#[cfg(windows)]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Parser, Debug)]
#[command(
    name = "warden",
    about = "View, edit and create vault items in the terminal",
    long_about = "Warden opens a single vault item in a full-screen editor. Items and folders are \
                  read from JSON documents and the item is written back only when the edit is \
                  saved.\n\n\
                  Examples:\n\
                  warden open card.json --folders folders.json\n\
                  warden open card.json --state view\n\
                  warden new card new-card.json"
)]
struct Cli {
    /// Configuration file (defaults to ui_config.json in the Warden config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open an existing item
    Open {
        /// JSON document holding the item
        item: PathBuf,
        /// JSON document holding the folder list
        #[arg(short, long)]
        folders: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = OpenMode::Edit)]
        state: OpenMode,
    },

    /// Create a new item and write it to a file when saved
    New {
        /// Item type: login, securenote, card, identity
        kind: String,
        /// Where to write the new item
        item: PathBuf,
        #[arg(short, long)]
        folders: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OpenMode {
    View,
    Edit,
}

impl From<OpenMode> for DetailViewState {
    fn from(mode: OpenMode) -> Self {
        match mode {
            OpenMode::View => DetailViewState::View,
            OpenMode::Edit => DetailViewState::Edit,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => UiConfig::load_from(path)?,
        None => UiConfig::load_default()?,
    };
    init_logging(&config)?;

    let (item_path, folders_path, item, state) = match cli.command {
        Commands::Open { item, folders, state } => {
            let loaded = read_item(&item)?;
            (item, folders, loaded, DetailViewState::from(state))
        }
        Commands::New { kind, item, folders } => {
            if item.exists() {
                return Err(eyre!("{} already exists; use `warden open` to edit it", item.display()));
            }
            let item_type = ItemType::from_str(&kind)?;
            (item, folders, VaultItem::new(item_type), DetailViewState::Add)
        }
    };

    let folders: Rc<[VaultFolder]> = match &folders_path {
        Some(path) => read_folders(path)?.into(),
        None => Rc::from(Vec::new()),
    };

    let lists = config.code_list_manager();
    let ctx = DetailContext {
        lists: &lists,
        config: &config,
    };
    let view = open_detail_view(item, folders, state, ctx)?;
    let mut clipboard = SystemClipboard::new();

    crossterm::terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;

    let res = run_detail_view(view, &mut clipboard);

    crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;

    let outcome = res?;
    if outcome.confirmed {
        let mut item = outcome.item;
        stamp(&mut item, OffsetDateTime::now_utc());
        write_item(&item_path, &item)?;
        info!("Wrote item '{}' to {}", item.id, item_path.display());
        println!("✅ Saved '{}' to {}", item.name, item_path.display());
    } else {
        println!("No changes written.");
    }
    Ok(())
}

fn init_logging(config: &UiConfig) -> Result<()> {
    if let Some(parent) = config.log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .map_err(|e| eyre!("Failed to open log file {}: {e}", config.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(config)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("Failed to initialize logging: {e}"))
}

/// `WARDEN_LOG` wins over the configured filter.
fn log_filter(config: &UiConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_env("WARDEN_LOG") {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .map_err(|e| eyre!("Invalid log filter '{}': {e}", config.log_filter)),
    }
}

fn stamp(item: &mut VaultItem, now: OffsetDateTime) {
    item.creation_date.get_or_insert(now);
    item.revision_date = Some(now);
}
