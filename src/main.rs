//! Binary entrypoint for the qrescape CLI.
//!
//! Commands:
//! - `play` - run the interactive room session
//! - `scan <code>` - resolve one decoded QR payload and exit (scanner integrations)
//! - `init` - create a starter `config.toml` and an editable room definition
//! - `status` - print progress, clock checkpoint, and gate state
//! - `start` / `reset` - operator controls for the session
//! - `codes` - list scan codes with printable QR links
//!
//! See the library crate docs for module-level details: `qrescape::`.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use qrescape::config::Config;
use qrescape::game::catalog::ContentCatalog;
use qrescape::game::gate::FinalGate;
use qrescape::game::resolver::ScanOutcome;
use qrescape::game::seed::{canonical_room_seed, load_catalog_seed, write_catalog_seed};
use qrescape::game::storage::ProgressStore;
use qrescape::game::store::{GameStore, SessionRestore};
use qrescape::play;

#[derive(Parser)]
#[command(name = "qrescape")]
#[command(about = "A QR code escape room for the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive room session
    Play,
    /// Resolve one decoded QR payload and exit
    Scan {
        /// The decoded string, exactly as the scanner produced it
        code: String,
    },
    /// Create a starter configuration and an editable room definition
    Init,
    /// Show session progress and room state
    Status,
    /// Start the game clock
    Start,
    /// Erase all stored progress
    Reset,
    /// List every scan code with a printable QR link
    Codes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config early to configure logging (except for Init, which writes
    // the config itself).
    let pre_config = match cli.command {
        Commands::Init => None,
        _ => load_optional_config(&cli.config).await?,
    };
    init_logging(&pre_config, cli.verbose);

    match cli.command {
        Commands::Play => {
            let config = config_or_default(pre_config);
            let mut game = open_game(&config)?;
            play::run(&config, &mut game).await?;
        }
        Commands::Scan { code } => {
            let config = config_or_default(pre_config);
            let mut game = open_game(&config)?;
            match game.scan(&code)? {
                ScanOutcome::Discovered(item) => {
                    println!("New {} discovered!", item.kind().label().to_lowercase());
                    print!("{}", play::render_card(&item));
                }
                ScanOutcome::Rediscovered(item) => {
                    println!("Already discovered.");
                    print!("{}", play::render_card(&item));
                }
                ScanOutcome::Unrecognized => {
                    println!("That code is not part of this room.");
                }
            }
        }
        Commands::Init => {
            info!("Initializing room configuration");
            if std::path::Path::new(&cli.config).exists() {
                anyhow::bail!("refusing to overwrite existing {}", cli.config);
            }
            let mut config = Config::default();
            let seed_path = format!("{}/room.json", config.storage.data_dir.trim_end_matches('/'));
            config.content.seed_file = Some(seed_path.clone());
            let serialized = toml::to_string_pretty(&config)?;
            tokio::fs::write(&cli.config, serialized).await?;
            info!("Configuration file created at {}", cli.config);

            write_catalog_seed(&seed_path, &canonical_room_seed())?;
            info!("Room definition written to {}; edit it to re-theme the room", seed_path);
        }
        Commands::Status => {
            let config = config_or_default(pre_config);
            let game = open_game(&config)?;
            let gate = FinalGate::new(
                config.room.final_password.clone(),
                config.room.final_password_threshold,
            );
            print!("{}", play::render_status(&config.room.name, &game, &gate, None));
        }
        Commands::Start => {
            let config = config_or_default(pre_config);
            let mut game = open_game(&config)?;
            game.start_game()?;
            println!("Game started.");
        }
        Commands::Reset => {
            let config = config_or_default(pre_config);
            let mut game = open_game(&config)?;
            game.reset_game()?;
            println!("All progress erased.");
        }
        Commands::Codes => {
            let config = config_or_default(pre_config);
            let catalog = build_catalog(&config)?;
            let mut rows: Vec<(String, String, String, String)> = Vec::new();
            for (code, id) in catalog.codes() {
                if let Some(item) = catalog.get(id) {
                    rows.push((
                        code.to_string(),
                        item.kind().label().to_string(),
                        item.title.clone(),
                        qr_url(code),
                    ));
                }
            }
            rows.sort();
            for (code, kind, title, url) in rows {
                println!("{:<12} {:<11} {:<28} {}", code, kind, title, url);
            }
        }
    }

    Ok(())
}

/// Load the config file if there is one. A missing file is fine; a file that
/// exists but cannot be read or parsed is an error for every command.
async fn load_optional_config(path: &str) -> Result<Option<Config>> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }
    Ok(Some(Config::load(path).await?))
}

/// Every command can run without a config file, so `qrescape scan pista1`
/// works in a bare checkout with the built-in room.
fn config_or_default(pre_config: Option<Config>) -> Config {
    match pre_config {
        Some(config) => config,
        None => {
            info!("no config file found; using defaults and the built-in room");
            Config::default()
        }
    }
}

fn build_catalog(config: &Config) -> Result<ContentCatalog> {
    let seed = match &config.content.seed_file {
        Some(path) => load_catalog_seed(path)
            .with_context(|| format!("loading room definition {}", path))?,
        None => canonical_room_seed(),
    };
    Ok(ContentCatalog::from_seed(seed))
}

/// Build the catalog, open the progress database, and restore the session.
/// Restore outcomes are reported here: a corrupt snapshot is logged and play
/// starts fresh instead of crashing.
fn open_game(config: &Config) -> Result<GameStore> {
    let catalog = build_catalog(config)?;
    let progress = ProgressStore::open(config.storage.progress_db_path())
        .with_context(|| format!("opening progress database in {}", config.storage.data_dir))?;
    let (game, restore) = GameStore::open(catalog, progress);
    match restore {
        SessionRestore::Fresh => info!("no stored progress; starting a fresh session"),
        SessionRestore::Resumed => info!(
            "resumed stored progress ({} discovered)",
            game.session().discovered.len()
        ),
        SessionRestore::Discarded(err) => warn!(
            "stored progress was unreadable and has been ignored: {}",
            err
        ),
    }
    Ok(game)
}

fn qr_url(code: &str) -> String {
    format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data={}",
        urlencoding::encode(code)
    )
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity wins; otherwise the config file decides.
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .and_then(|cfg| cfg.logging.level.parse::<log::LevelFilter>().ok())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    let log_file = config.as_ref().and_then(|cfg| cfg.logging.file.clone());
    if let Some(ref file) = log_file {
        if let Ok(f) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
        {
            let mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            let write_mutex = mutex.clone();

            // When stdout is a terminal, mirror the file output to the console.
            let is_tty = atty::is(atty::Stream::Stdout);

            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());

                if let Ok(mut guard) = write_mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }

                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        } else {
            builder.format(|fmt, record| {
                writeln!(
                    fmt,
                    "{} [{}] {}",
                    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                    record.level(),
                    record.args()
                )
            });
        }
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
