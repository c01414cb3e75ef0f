//! Escape room game core: content catalog, scan resolution, session state,
//! and sled-backed persistence. The front end in `crate::play` drives this
//! module; nothing in here prints or prompts.

pub mod catalog;
pub mod errors;
pub mod gate;
pub mod resolver;
pub mod seed;
pub mod stats;
pub mod storage;
pub mod store;
pub mod timer;
pub mod types;

pub use catalog::ContentCatalog;
pub use errors::GameError;
pub use gate::FinalGate;
pub use resolver::{resolve_scan, ScanOutcome};
pub use seed::{canonical_room_seed, load_catalog_seed, write_catalog_seed, CatalogSeed};
pub use stats::ProgressStats;
pub use storage::ProgressStore;
pub use store::{GameStore, SessionRestore};
pub use timer::{format_elapsed, pace, status_label, TimerPace};
pub use types::{ContentDetail, ContentItem, ContentKind, GameSession};
