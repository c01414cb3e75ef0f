//! Progress tallies over the discovered set.

use crate::game::types::{ContentKind, GameSession};

/// Per-kind progress counts. Totals count what the player has discovered so
/// far, not the whole room; completion is measured against what is in hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub hints_found: usize,
    pub hints_total: usize,
    pub riddles_solved: usize,
    pub riddles_total: usize,
    pub eggs_found: usize,
    pub eggs_total: usize,
}

impl ProgressStats {
    pub fn for_session(session: &GameSession) -> Self {
        let mut stats = Self::default();
        for item in &session.discovered {
            match item.kind() {
                ContentKind::Hint => {
                    stats.hints_total += 1;
                    if item.is_complete() {
                        stats.hints_found += 1;
                    }
                }
                ContentKind::Riddle => {
                    stats.riddles_total += 1;
                    if item.is_complete() {
                        stats.riddles_solved += 1;
                    }
                }
                ContentKind::EasterEgg => {
                    stats.eggs_total += 1;
                    if item.is_complete() {
                        stats.eggs_found += 1;
                    }
                }
            }
        }
        stats
    }

    pub fn discovered_total(&self) -> usize {
        self.hints_total + self.riddles_total + self.eggs_total
    }

    pub fn completed(&self) -> usize {
        self.hints_found + self.riddles_solved + self.eggs_found
    }

    /// Share of discovered content completed, rounded to a whole percent.
    /// Zero while nothing has been discovered.
    pub fn completion_percent(&self) -> u32 {
        let total = self.discovered_total();
        if total == 0 {
            return 0;
        }
        ((self.completed() as f64 / total as f64) * 100.0).round() as u32
    }

    /// One line for status output, e.g.
    /// `hints 2/3, riddles 1/2, eggs 0/1 (50%)`.
    pub fn summary_line(&self) -> String {
        format!(
            "hints {}/{}, riddles {}/{}, eggs {}/{} ({}%)",
            self.hints_found,
            self.hints_total,
            self.riddles_solved,
            self.riddles_total,
            self.eggs_found,
            self.eggs_total,
            self.completion_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::ContentItem;

    #[test]
    fn empty_session_is_zero_percent() {
        let stats = ProgressStats::for_session(&GameSession::new());
        assert_eq!(stats.discovered_total(), 0);
        assert_eq!(stats.completion_percent(), 0);
        assert_eq!(stats.summary_line(), "hints 0/0, riddles 0/0, eggs 0/0 (0%)");
    }

    #[test]
    fn counts_split_by_kind_and_completion() {
        let mut session = GameSession::new();
        session.discovered.push(ContentItem::hint("hint-1", "A", "a"));
        session.discovered.push(ContentItem::hint("hint-2", "B", "b"));
        session
            .discovered
            .push(ContentItem::riddle("riddle-1", "C", "c", "eco"));
        session
            .discovered
            .push(ContentItem::easter_egg("egg-1", "D", "d"));
        session.discovered[0].mark_found();
        session.discovered[2].mark_solved();

        let stats = ProgressStats::for_session(&session);
        assert_eq!(stats.hints_found, 1);
        assert_eq!(stats.hints_total, 2);
        assert_eq!(stats.riddles_solved, 1);
        assert_eq!(stats.riddles_total, 1);
        assert_eq!(stats.eggs_found, 0);
        assert_eq!(stats.eggs_total, 1);
        assert_eq!(stats.completed(), 2);
        assert_eq!(stats.completion_percent(), 50);
    }

    #[test]
    fn percent_rounds_to_nearest() {
        let mut session = GameSession::new();
        for n in 0..3 {
            session
                .discovered
                .push(ContentItem::hint(&format!("hint-{}", n), "T", "t"));
        }
        session.discovered[0].mark_found();
        // 1 of 3 rounds to 33, 2 of 3 rounds to 67.
        assert_eq!(ProgressStats::for_session(&session).completion_percent(), 33);
        session.discovered[1].mark_found();
        assert_eq!(ProgressStats::for_session(&session).completion_percent(), 67);
    }
}
