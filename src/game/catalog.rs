use std::collections::HashMap;

use log::warn;

use crate::game::seed::CatalogSeed;
use crate::game::types::{ContentItem, ContentKind};

/// The room definition: content templates plus the scan-code index.
///
/// Templates never change during play. Discovery clones a template into the
/// session and all progress flags live on that copy.
#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    items: HashMap<String, ContentItem>,
    scan_codes: HashMap<String, String>,
}

impl ContentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a room definition: all items first, then the
    /// scan-code map.
    pub fn from_seed(seed: CatalogSeed) -> Self {
        let mut catalog = Self::new();
        for hint in seed.hints {
            catalog.insert_item(ContentItem::hint(&hint.id, &hint.title, &hint.content));
        }
        for riddle in seed.riddles {
            catalog.insert_item(ContentItem::riddle(
                &riddle.id,
                &riddle.title,
                &riddle.content,
                &riddle.answer,
            ));
        }
        for egg in seed.easter_eggs {
            catalog.insert_item(ContentItem::easter_egg(&egg.id, &egg.title, &egg.content));
        }
        for (code, id) in seed.scan_codes {
            catalog.map_code(&code, &id);
        }
        catalog
    }

    /// Register a content template. Room definitions are operator input, so a
    /// repeated id replaces the earlier entry with a warning instead of
    /// failing the whole load.
    pub fn insert_item(&mut self, item: ContentItem) {
        if self.items.contains_key(&item.id) {
            warn!(
                "duplicate content id '{}' in room definition; keeping the later entry",
                item.id
            );
        }
        self.items.insert(item.id.clone(), item);
    }

    /// Map a scan code to a content id. Several codes may point at the same
    /// content. Remapping an existing code warns and overwrites.
    pub fn map_code(&mut self, code: &str, content_id: &str) {
        if let Some(previous) = self.scan_codes.get(code) {
            if previous != content_id {
                warn!(
                    "scan code '{}' remapped from '{}' to '{}'",
                    code, previous, content_id
                );
            }
        }
        self.scan_codes
            .insert(code.to_string(), content_id.to_string());
    }

    /// Exact-match lookup of an already-normalized scan code.
    pub fn lookup_content_id(&self, code: &str) -> Option<&str> {
        self.scan_codes.get(code).map(String::as_str)
    }

    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.get(id)
    }

    pub fn items(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.values()
    }

    /// Iterate (scan code, content id) pairs in arbitrary order.
    pub fn codes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.scan_codes
            .iter()
            .map(|(code, id)| (code.as_str(), id.as_str()))
    }

    pub fn count_kind(&self, kind: ContentKind) -> usize {
        self.items().filter(|item| item.kind() == kind).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
