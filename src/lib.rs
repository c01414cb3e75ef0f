//! # Qrescape - A QR Code Escape Room for the Terminal
//!
//! Qrescape runs the game half of a physical escape room: QR codes hidden
//! around a real space decode to short scan codes, and this crate turns those
//! codes into hints, riddles, and easter eggs with durable player progress.
//!
//! ## Features
//!
//! - **Scan Resolution**: Decoded QR payloads map to room content; repeat scans hand back what was already discovered instead of duplicating it.
//! - **Typed Content**: Hints and easter eggs are found, riddles carry an answer and get solved; mixing the two is impossible by construction.
//! - **Durable Progress**: A sled-backed snapshot restores the session across restarts and is erased outright on reset.
//! - **Final Gate**: After enough discoveries a password prompt opens; the escape password ends the game.
//! - **Re-themeable Rooms**: Room definitions are JSON seed files loaded at startup; `init` writes the built-in room out for editing.
//! - **Terminal Front End**: An interactive play loop plus a one-shot `scan` command for wiring up real QR scanners.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qrescape::config::Config;
//! use qrescape::game::catalog::ContentCatalog;
//! use qrescape::game::seed::canonical_room_seed;
//! use qrescape::game::storage::ProgressStore;
//! use qrescape::game::store::GameStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     let catalog = ContentCatalog::from_seed(canonical_room_seed());
//!     let progress = ProgressStore::open(config.storage.progress_db_path())?;
//!     let (mut game, _restore) = GameStore::open(catalog, progress);
//!
//!     game.scan("pista1")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - Catalog, scan resolution, session state, and persistence: the game core
//! - [`play`] - Interactive terminal front end
//! - [`config`] - Configuration management
//! - [`logutil`] - Log sanitation for untrusted scan payloads

pub mod config;
pub mod game;
pub mod logutil;
pub mod play;
