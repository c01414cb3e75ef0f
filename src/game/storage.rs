use std::path::Path;

use sled::IVec;

use crate::game::errors::GameError;
use crate::game::types::GameSession;

const TREE_PROGRESS: &str = "escape_progress";
const SESSION_KEY: &[u8] = b"escape-room-progress";

/// Sled-backed slot for the session snapshot.
///
/// One fixed key holds the whole session as JSON. `clear` removes the key
/// outright, so a reset leaves nothing behind on disk.
pub struct ProgressStore {
    _db: sled::Db,
    progress: sled::Tree,
}

impl ProgressStore {
    /// Open (or create) the progress database rooted at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let path_ref = path.as_ref();
        std::fs::create_dir_all(path_ref)?;
        let db = sled::open(path_ref)?;
        let progress = db.open_tree(TREE_PROGRESS)?;
        Ok(Self { _db: db, progress })
    }

    fn decode(bytes: IVec) -> Result<GameSession, GameError> {
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetch the stored snapshot. `Ok(None)` when nothing has been saved yet;
    /// bytes that fail to decode surface as an error for the caller to handle.
    pub fn load(&self) -> Result<Option<GameSession>, GameError> {
        let Some(bytes) = self.progress.get(SESSION_KEY)? else {
            return Ok(None);
        };
        Ok(Some(Self::decode(bytes)?))
    }

    /// Persist the snapshot, flushing before returning.
    pub fn save(&self, session: &GameSession) -> Result<(), GameError> {
        let bytes = serde_json::to_vec(session)?;
        self.progress.insert(SESSION_KEY, bytes)?;
        self.progress.flush()?;
        Ok(())
    }

    /// Erase the slot entirely.
    pub fn clear(&self) -> Result<(), GameError> {
        self.progress.remove(SESSION_KEY)?;
        self.progress.flush()?;
        Ok(())
    }

    /// Whether a snapshot currently exists on disk.
    pub fn has_snapshot(&self) -> Result<bool, GameError> {
        Ok(self.progress.contains_key(SESSION_KEY)?)
    }

    /// Overwrite the slot with raw bytes, bypassing serialization. Exists so
    /// corruption drills can plant unreadable snapshots.
    pub fn put_raw_snapshot(&self, bytes: &[u8]) -> Result<(), GameError> {
        self.progress.insert(SESSION_KEY, bytes)?;
        self.progress.flush()?;
        Ok(())
    }
}
