use serde::{Deserialize, Serialize};

/// The three kinds of discoverable content in a room.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Hint,
    Riddle,
    EasterEgg,
}

impl ContentKind {
    /// Display label for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Hint => "Hint",
            ContentKind::Riddle => "Riddle",
            ContentKind::EasterEgg => "Easter egg",
        }
    }
}

/// Kind-specific payload and progress flags for a content item.
///
/// The serde `type` tag flattens into the item record, so the stored shape is
/// the familiar flat object while a hint carrying an `answer` or a riddle
/// carrying a `found` flag simply cannot be expressed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentDetail {
    Hint {
        #[serde(default)]
        found: bool,
    },
    Riddle {
        answer: String,
        #[serde(default)]
        solved: bool,
    },
    EasterEgg {
        #[serde(default)]
        found: bool,
    },
}

/// One piece of room content: a hint, a riddle, or an easter egg.
///
/// Catalog entries are pristine templates; the copies inside a session carry
/// the player's solved/found progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    /// Body text revealed when the item is opened.
    pub content: String,
    #[serde(flatten)]
    pub detail: ContentDetail,
}

impl ContentItem {
    pub fn hint(id: &str, title: &str, content: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            detail: ContentDetail::Hint { found: false },
        }
    }

    pub fn riddle(id: &str, title: &str, content: &str, answer: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            detail: ContentDetail::Riddle {
                answer: answer.to_string(),
                solved: false,
            },
        }
    }

    pub fn easter_egg(id: &str, title: &str, content: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            detail: ContentDetail::EasterEgg { found: false },
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self.detail {
            ContentDetail::Hint { .. } => ContentKind::Hint,
            ContentDetail::Riddle { .. } => ContentKind::Riddle,
            ContentDetail::EasterEgg { .. } => ContentKind::EasterEgg,
        }
    }

    /// Whether the player is done with this item: riddles solved, hints and
    /// easter eggs found.
    pub fn is_complete(&self) -> bool {
        match &self.detail {
            ContentDetail::Hint { found } | ContentDetail::EasterEgg { found } => *found,
            ContentDetail::Riddle { solved, .. } => *solved,
        }
    }

    /// The expected answer, present only on riddles.
    pub fn answer(&self) -> Option<&str> {
        match &self.detail {
            ContentDetail::Riddle { answer, .. } => Some(answer),
            _ => None,
        }
    }

    /// Compare a player's guess against the riddle answer. Both sides are
    /// trimmed and lowercased first. Always false for non-riddles.
    pub fn answer_matches(&self, guess: &str) -> bool {
        match &self.detail {
            ContentDetail::Riddle { answer, .. } => {
                guess.trim().to_lowercase() == answer.trim().to_lowercase()
            }
            _ => false,
        }
    }

    /// Flip the solved flag. Only riddles can be solved; for anything else
    /// (or an already-solved riddle) this does nothing. Returns whether the
    /// flag changed.
    pub fn mark_solved(&mut self) -> bool {
        match &mut self.detail {
            ContentDetail::Riddle { solved, .. } if !*solved => {
                *solved = true;
                true
            }
            _ => false,
        }
    }

    /// Flip the found flag. Only hints and easter eggs can be found; riddles
    /// and already-found items are left alone. Returns whether the flag
    /// changed.
    pub fn mark_found(&mut self) -> bool {
        match &mut self.detail {
            ContentDetail::Hint { found } | ContentDetail::EasterEgg { found } if !*found => {
                *found = true;
                true
            }
            _ => false,
        }
    }
}

/// A player's progress through the room. This is exactly the record that gets
/// persisted; every field defaults individually so a snapshot written by an
/// older build (or trimmed by hand) still loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSession {
    /// Items in discovery order, each carrying its live solved/found state.
    #[serde(default)]
    pub discovered: Vec<ContentItem>,
    /// The item currently on screen, if any.
    #[serde(default)]
    pub current: Option<ContentItem>,
    #[serde(default)]
    pub game_started: bool,
    /// Elapsed-seconds checkpoint. The live clock is front-end state; this
    /// field only changes when the game starts or resets.
    #[serde(default)]
    pub game_time: u64,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_discovered(&self, id: &str) -> Option<&ContentItem> {
        self.discovered.iter().find(|item| item.id == id)
    }

    pub fn is_discovered(&self, id: &str) -> bool {
        self.find_discovered(id).is_some()
    }
}
