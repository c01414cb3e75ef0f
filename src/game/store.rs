use log::{debug, info};

use crate::game::catalog::ContentCatalog;
use crate::game::errors::GameError;
use crate::game::resolver::{resolve_scan, ScanOutcome};
use crate::game::storage::ProgressStore;
use crate::game::types::{ContentItem, GameSession};

/// How `GameStore::open` obtained its starting session.
#[derive(Debug)]
pub enum SessionRestore {
    /// No snapshot on disk; starting empty.
    Fresh,
    /// Snapshot loaded and back in play.
    Resumed,
    /// A snapshot existed but would not decode. Play starts empty and the
    /// caller decides how loudly to report the error.
    Discarded(GameError),
}

/// Owns the room catalog, the live session, and the durable slot.
///
/// Every mutating operation persists before it returns: the next session is
/// written to disk first and only swapped into memory once the write
/// succeeded, so a failed write never leaves memory ahead of the snapshot.
pub struct GameStore {
    catalog: ContentCatalog,
    progress: ProgressStore,
    session: GameSession,
}

impl GameStore {
    /// Open the store, restoring whatever the slot holds. Never fails over a
    /// bad snapshot; the outcome says what happened.
    pub fn open(catalog: ContentCatalog, progress: ProgressStore) -> (Self, SessionRestore) {
        let (session, restore) = match progress.load() {
            Ok(Some(session)) => (session, SessionRestore::Resumed),
            Ok(None) => (GameSession::new(), SessionRestore::Fresh),
            Err(err) => (GameSession::new(), SessionRestore::Discarded(err)),
        };
        (
            Self {
                catalog,
                progress,
                session,
            },
            restore,
        )
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Resolve one scanned code. Recognized scans (first or repeat) persist
    /// the updated session; unknown codes change nothing and write nothing.
    pub fn scan(&mut self, raw_scan: &str) -> Result<ScanOutcome, GameError> {
        let mut next = self.session.clone();
        let outcome = resolve_scan(&self.catalog, &mut next, raw_scan);
        if !outcome.is_unrecognized() {
            self.commit(next)?;
        }
        Ok(outcome)
    }

    /// Mark a discovered riddle as solved. Ids that are unknown, not yet
    /// discovered, or not riddles are quietly ignored; `found` flags are
    /// never touched. Safe to call repeatedly.
    pub fn solve_riddle(&mut self, content_id: &str) -> Result<(), GameError> {
        let mut next = self.session.clone();
        for item in next.discovered.iter_mut() {
            if item.id == content_id {
                item.mark_solved();
            }
        }
        if let Some(current) = next.current.as_mut() {
            if current.id == content_id {
                current.mark_solved();
            }
        }
        debug!("solve_riddle('{}')", content_id);
        self.commit(next)
    }

    /// Mark a discovered hint or easter egg as found. Riddles and unknown ids
    /// are quietly ignored; `solved` flags are never touched. Safe to call
    /// repeatedly.
    pub fn mark_found(&mut self, content_id: &str) -> Result<(), GameError> {
        let mut next = self.session.clone();
        for item in next.discovered.iter_mut() {
            if item.id == content_id {
                item.mark_found();
            }
        }
        if let Some(current) = next.current.as_mut() {
            if current.id == content_id {
                current.mark_found();
            }
        }
        debug!("mark_found('{}')", content_id);
        self.commit(next)
    }

    /// Put an item on screen. The caller picks it, normally out of
    /// `session().discovered`; no existence check happens here.
    pub fn select_content(&mut self, item: ContentItem) -> Result<(), GameError> {
        let mut next = self.session.clone();
        next.current = Some(item);
        self.commit(next)
    }

    /// Begin the game: flips the started flag and zeroes the time checkpoint.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        let mut next = self.session.clone();
        next.game_started = true;
        next.game_time = 0;
        self.commit(next)?;
        info!("game started");
        Ok(())
    }

    /// Wipe progress: empty session in memory and the slot removed on disk.
    pub fn reset_game(&mut self) -> Result<(), GameError> {
        self.progress.clear()?;
        self.session = GameSession::new();
        info!("game reset; stored progress erased");
        Ok(())
    }

    fn commit(&mut self, next: GameSession) -> Result<(), GameError> {
        self.progress.save(&next)?;
        self.session = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_catalog() -> ContentCatalog {
        let mut catalog = ContentCatalog::new();
        catalog.insert_item(ContentItem::hint("hint-1", "Pista", "Mira abajo."));
        catalog.insert_item(ContentItem::riddle("riddle-1", "Enigma", "¿Qué soy?", "eco"));
        catalog.insert_item(ContentItem::easter_egg("egg-1", "Sorpresa", "Hola."));
        catalog.map_code("pista1", "hint-1");
        catalog.map_code("acertijo1", "riddle-1");
        catalog.map_code("huevo1", "egg-1");
        catalog
    }

    fn open_store(dir: &TempDir) -> (GameStore, SessionRestore) {
        let progress = ProgressStore::open(dir.path()).expect("progress store");
        GameStore::open(test_catalog(), progress)
    }

    #[test]
    fn scan_discovers_and_persists() {
        let dir = TempDir::new().expect("tempdir");
        {
            let (mut game, restore) = open_store(&dir);
            assert!(matches!(restore, SessionRestore::Fresh));
            let outcome = game.scan("pista1").expect("scan");
            assert!(matches!(outcome, ScanOutcome::Discovered(_)));
        }
        let (game, restore) = open_store(&dir);
        assert!(matches!(restore, SessionRestore::Resumed));
        assert!(game.session().is_discovered("hint-1"));
    }

    #[test]
    fn unknown_scan_writes_nothing() {
        let dir = TempDir::new().expect("tempdir");
        let (mut game, _) = open_store(&dir);
        let outcome = game.scan("nope").expect("scan");
        assert!(outcome.is_unrecognized());
        drop(game);

        let (_, restore) = open_store(&dir);
        assert!(
            matches!(restore, SessionRestore::Fresh),
            "an unrecognized scan must not create a snapshot"
        );
    }

    #[test]
    fn solve_riddle_updates_both_copies() {
        let dir = TempDir::new().expect("tempdir");
        let (mut game, _) = open_store(&dir);
        game.scan("acertijo1").expect("scan");
        game.solve_riddle("riddle-1").expect("solve");

        let session = game.session();
        assert!(session.find_discovered("riddle-1").expect("listed").is_complete());
        assert!(session.current.as_ref().expect("current").is_complete());
    }

    #[test]
    fn solve_riddle_ignores_hints() {
        let dir = TempDir::new().expect("tempdir");
        let (mut game, _) = open_store(&dir);
        game.scan("pista1").expect("scan");
        game.solve_riddle("hint-1").expect("solve call");

        let hint = game.session().find_discovered("hint-1").expect("listed");
        assert!(!hint.is_complete(), "a hint cannot be solved");
    }

    #[test]
    fn mark_found_ignores_riddles() {
        let dir = TempDir::new().expect("tempdir");
        let (mut game, _) = open_store(&dir);
        game.scan("acertijo1").expect("scan");
        game.mark_found("riddle-1").expect("mark call");

        let riddle = game.session().find_discovered("riddle-1").expect("listed");
        assert!(!riddle.is_complete(), "a riddle cannot be found");
    }

    #[test]
    fn reset_erases_the_slot() {
        let dir = TempDir::new().expect("tempdir");
        let (mut game, _) = open_store(&dir);
        game.scan("pista1").expect("scan");
        game.start_game().expect("start");
        game.reset_game().expect("reset");
        assert_eq!(game.session(), &GameSession::new());
        drop(game);

        let (_, restore) = open_store(&dir);
        assert!(matches!(restore, SessionRestore::Fresh));
    }

    #[test]
    fn corrupt_snapshot_is_discarded_not_fatal() {
        let dir = TempDir::new().expect("tempdir");
        let progress = ProgressStore::open(dir.path()).expect("progress store");
        progress.put_raw_snapshot(b"][").expect("plant corruption");
        let (mut game, restore) = GameStore::open(test_catalog(), progress);
        assert!(matches!(restore, SessionRestore::Discarded(_)));
        assert_eq!(game.session(), &GameSession::new());

        // The slot is usable again as soon as something commits.
        game.scan("huevo1").expect("scan");
        drop(game);
        let (game, restore) = open_store(&dir);
        assert!(matches!(restore, SessionRestore::Resumed));
        assert!(game.session().is_discovered("egg-1"));
    }
}
