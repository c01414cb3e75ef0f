//! Scan code resolution.
//!
//! Decoded QR payloads arrive as raw strings. Resolution trims surrounding
//! whitespace, looks the code up in the catalog, and applies the discovery
//! rules: the first scan clones the template into the session, a repeat scan
//! hands back the already-discovered element with whatever solved/found state
//! it has earned, and an unknown code leaves the session untouched.

use log::{debug, info, warn};

use crate::game::catalog::ContentCatalog;
use crate::game::types::{ContentItem, GameSession};
use crate::logutil::preview;

/// Result of resolving one scanned code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// First time this content has been scanned; it joined the session.
    Discovered(ContentItem),
    /// Already in the session; the carried copy keeps its earned state.
    Rediscovered(ContentItem),
    /// The code is not part of this room.
    Unrecognized,
}

impl ScanOutcome {
    pub fn content(&self) -> Option<&ContentItem> {
        match self {
            ScanOutcome::Discovered(item) | ScanOutcome::Rediscovered(item) => Some(item),
            ScanOutcome::Unrecognized => None,
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, ScanOutcome::Unrecognized)
    }
}

/// Resolve one raw scan against the catalog, updating the session in place.
pub fn resolve_scan(
    catalog: &ContentCatalog,
    session: &mut GameSession,
    raw_scan: &str,
) -> ScanOutcome {
    let code = raw_scan.trim();

    let Some(content_id) = catalog.lookup_content_id(code) else {
        debug!("unrecognized scan: {}", preview(raw_scan));
        return ScanOutcome::Unrecognized;
    };
    let Some(template) = catalog.get(content_id) else {
        // A code mapped to a missing id is an authoring hole in the room
        // definition; the player just sees an unknown code.
        warn!(
            "scan code '{}' points at missing content '{}'",
            code, content_id
        );
        return ScanOutcome::Unrecognized;
    };

    if let Some(existing) = session.find_discovered(&template.id) {
        let item = existing.clone();
        session.current = Some(item.clone());
        debug!("rediscovered '{}' via code '{}'", item.id, code);
        return ScanOutcome::Rediscovered(item);
    }

    let item = template.clone();
    session.discovered.push(item.clone());
    session.current = Some(item.clone());
    info!(
        "discovered '{}' ({}) via code '{}'",
        item.id,
        item.kind().label(),
        code
    );
    ScanOutcome::Discovered(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_item_catalog() -> ContentCatalog {
        let mut catalog = ContentCatalog::new();
        catalog.insert_item(ContentItem::hint("hint-1", "Pista", "Mira abajo."));
        catalog.insert_item(ContentItem::riddle("riddle-1", "Enigma", "¿Qué soy?", "eco"));
        catalog.map_code("pista1", "hint-1");
        catalog.map_code("acertijo1", "riddle-1");
        catalog
    }

    #[test]
    fn scan_is_trimmed_before_lookup() {
        let catalog = two_item_catalog();
        let mut session = GameSession::new();
        let outcome = resolve_scan(&catalog, &mut session, "  pista1 \n");
        match outcome {
            ScanOutcome::Discovered(item) => assert_eq!(item.id, "hint-1"),
            other => panic!("expected discovery, got {:?}", other),
        }
        assert_eq!(session.discovered.len(), 1);
    }

    #[test]
    fn unknown_code_leaves_session_untouched() {
        let catalog = two_item_catalog();
        let mut session = GameSession::new();
        resolve_scan(&catalog, &mut session, "pista1");
        let before = session.clone();
        let outcome = resolve_scan(&catalog, &mut session, "no-such-code");
        assert!(outcome.is_unrecognized());
        assert_eq!(session, before, "session must not change on unknown codes");
    }

    #[test]
    fn rescan_returns_existing_copy_with_state() {
        let catalog = two_item_catalog();
        let mut session = GameSession::new();
        resolve_scan(&catalog, &mut session, "acertijo1");
        session.discovered[0].mark_solved();

        let outcome = resolve_scan(&catalog, &mut session, "acertijo1");
        match outcome {
            ScanOutcome::Rediscovered(item) => {
                assert!(item.is_complete(), "rescan must keep the solved state");
            }
            other => panic!("expected rediscovery, got {:?}", other),
        }
        assert_eq!(session.discovered.len(), 1, "no duplicate entries");
        let current = session.current.as_ref().expect("current focused");
        assert!(current.is_complete());
    }

    #[test]
    fn aliased_codes_discover_once() {
        let mut catalog = two_item_catalog();
        catalog.map_code("pista1-lateral", "hint-1");
        let mut session = GameSession::new();

        let first = resolve_scan(&catalog, &mut session, "pista1");
        assert!(matches!(first, ScanOutcome::Discovered(_)));
        let second = resolve_scan(&catalog, &mut session, "pista1-lateral");
        assert!(matches!(second, ScanOutcome::Rediscovered(_)));
        assert_eq!(session.discovered.len(), 1);
    }

    #[test]
    fn dangling_mapping_is_unrecognized() {
        let mut catalog = two_item_catalog();
        catalog.map_code("fantasma", "missing-id");
        let mut session = GameSession::new();
        let outcome = resolve_scan(&catalog, &mut session, "fantasma");
        assert!(outcome.is_unrecognized());
        assert!(session.discovered.is_empty());
    }
}
