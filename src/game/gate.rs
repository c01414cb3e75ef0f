//! The final escape gate.
//!
//! Once the session holds enough discoveries the room reveals a password
//! prompt; the escape password ends the game. Gate state is ephemeral on
//! purpose: attempts and the unlocked flag reset every run, only discovery
//! progress persists.

use crate::game::types::GameSession;

#[derive(Debug, Clone)]
pub struct FinalGate {
    password: String,
    threshold: usize,
    attempts: u32,
    unlocked: bool,
}

impl FinalGate {
    pub fn new(password: impl Into<String>, threshold: usize) -> Self {
        Self {
            password: password.into(),
            threshold,
            attempts: 0,
            unlocked: false,
        }
    }

    /// The prompt only opens once the session has enough discoveries.
    pub fn is_visible(&self, session: &GameSession) -> bool {
        session.discovered.len() >= self.threshold
    }

    /// Try the escape password. Both sides are compared uppercased; a failed
    /// try bumps the attempt counter.
    pub fn try_unlock(&mut self, attempt: &str) -> bool {
        if attempt.to_uppercase() == self.password.to_uppercase() {
            self.unlocked = true;
            true
        } else {
            self.attempts += 1;
            false
        }
    }

    pub fn unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}
