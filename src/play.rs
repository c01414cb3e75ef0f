//! Interactive terminal front end.
//!
//! One line per action, mirroring the physical flow of the room: players scan
//! codes, read what they uncover, answer riddles, and eventually try the
//! escape password. All state changes go through the [`GameStore`]; this
//! module only parses lines and renders output.

use std::time::Instant;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::game::gate::FinalGate;
use crate::game::resolver::ScanOutcome;
use crate::game::stats::ProgressStats;
use crate::game::store::GameStore;
use crate::game::timer::{format_elapsed, pace, status_label, TimerPace};
use crate::game::types::{ContentDetail, ContentItem, ContentKind, GameSession};

/// One parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Scan(String),
    Answer(String),
    Collect,
    Select(String),
    List,
    Password(String),
    Start,
    Time,
    Status,
    Help,
    Quit,
}

impl PlayCommand {
    /// Parse one input line. Command words are case-insensitive; arguments
    /// keep their original form, since scan codes and riddle answers are
    /// normalized elsewhere (or not at all).
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };
        match word.to_ascii_lowercase().as_str() {
            "scan" | "s" if !rest.is_empty() => Some(Self::Scan(rest.to_string())),
            "answer" | "a" if !rest.is_empty() => Some(Self::Answer(rest.to_string())),
            "collect" | "c" => Some(Self::Collect),
            "select" | "open" if !rest.is_empty() => Some(Self::Select(rest.to_string())),
            "list" | "l" => Some(Self::List),
            "password" | "p" if !rest.is_empty() => Some(Self::Password(rest.to_string())),
            "start" => Some(Self::Start),
            "time" | "t" => Some(Self::Time),
            "status" => Some(Self::Status),
            "help" | "h" | "?" => Some(Self::Help),
            "quit" | "q" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

fn kind_tag(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Hint => "[hint]",
        ContentKind::Riddle => "[riddle]",
        ContentKind::EasterEgg => "[egg]",
    }
}

fn kind_plural(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Hint => "Hints",
        ContentKind::Riddle => "Riddles",
        ContentKind::EasterEgg => "Easter eggs",
    }
}

/// Render one content card: tag, title, body, and what to do next.
pub fn render_card(item: &ContentItem) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", kind_tag(item.kind()), item.title));
    out.push_str(&format!("  {}\n", item.content));
    match &item.detail {
        ContentDetail::Riddle { answer, solved } => {
            if *solved {
                out.push_str(&format!("  Solved. The answer was '{}'.\n", answer));
            } else {
                out.push_str("  Unsolved. Reply with: answer <your guess>\n");
            }
        }
        ContentDetail::Hint { found } | ContentDetail::EasterEgg { found } => {
            if *found {
                out.push_str("  Collected.\n");
            } else {
                out.push_str("  Not collected yet. Reply with: collect\n");
            }
        }
    }
    out
}

/// Render the discovery list grouped by kind, with completion marks.
pub fn render_list(session: &GameSession) -> String {
    if session.discovered.is_empty() {
        return "Nothing discovered yet. Scan a code to begin.\n".to_string();
    }
    let mut out = String::new();
    for kind in [ContentKind::Hint, ContentKind::Riddle, ContentKind::EasterEgg] {
        let group: Vec<&ContentItem> = session
            .discovered
            .iter()
            .filter(|item| item.kind() == kind)
            .collect();
        if group.is_empty() {
            continue;
        }
        out.push_str(&format!("{}:\n", kind_plural(kind)));
        for item in group {
            let mark = if item.is_complete() { "x" } else { " " };
            out.push_str(&format!("  [{}] {} ({})\n", mark, item.title, item.id));
        }
    }
    out.push_str(&format!(
        "Progress: {}\n",
        ProgressStats::for_session(session).summary_line()
    ));
    out
}

/// Render the operator status view shared by the play loop and the `status`
/// subcommand. `live_elapsed` carries the running clock when one exists;
/// otherwise the persisted checkpoint is shown.
pub fn render_status(
    room_name: &str,
    game: &GameStore,
    gate: &FinalGate,
    live_elapsed: Option<u64>,
) -> String {
    let session = game.session();
    let stats = ProgressStats::for_session(session);
    let mut out = String::new();
    out.push_str(&format!("{}\n", room_name));
    out.push_str(&format!("Phase: {}\n", status_label(session.game_started)));
    match live_elapsed {
        Some(secs) => out.push_str(&format!("Clock: {}\n", format_elapsed(secs))),
        None => out.push_str(&format!(
            "Last checkpoint: {}\n",
            format_elapsed(session.game_time)
        )),
    }
    out.push_str(&format!(
        "Discovered: {} of {} in the room\n",
        session.discovered.len(),
        game.catalog().len()
    ));
    out.push_str(&format!("Progress: {}\n", stats.summary_line()));
    let gate_state = if gate.unlocked() {
        "open".to_string()
    } else if gate.is_visible(session) {
        "accepting attempts".to_string()
    } else {
        format!("sealed until {} discoveries", gate.threshold())
    };
    out.push_str(&format!("Final gate: {}\n", gate_state));
    if let Some(current) = &session.current {
        out.push_str(&format!("Open now: {} ({})\n", current.title, current.id));
    }
    out
}

fn help_text() -> &'static str {
    "Commands:\n\
     \x20 scan <code>       resolve a decoded QR code\n\
     \x20 answer <guess>    answer the open riddle\n\
     \x20 collect           collect the open hint or easter egg\n\
     \x20 select <id>       reopen something already discovered\n\
     \x20 list              show everything discovered so far\n\
     \x20 password <word>   try the final escape password\n\
     \x20 start             start the game clock\n\
     \x20 time              show the clock\n\
     \x20 status            show the full room status\n\
     \x20 quit              leave (progress is already saved)"
}

fn print_prompt() {
    use std::io::Write;
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn announce_gate_if_ready(gate: &FinalGate, game: &GameStore, announced: &mut bool) {
    if !*announced && !gate.unlocked() && gate.is_visible(game.session()) {
        println!("The final gate is listening. Type 'password <word>' when you think you know it.");
        *announced = true;
    }
}

fn handle_scan(game: &mut GameStore, code: &str) -> Result<()> {
    match game.scan(code)? {
        ScanOutcome::Discovered(item) => {
            println!("New {} discovered!", item.kind().label().to_lowercase());
            print!("{}", render_card(&item));
        }
        ScanOutcome::Rediscovered(item) => {
            println!("Already discovered; here it is again.");
            print!("{}", render_card(&item));
        }
        ScanOutcome::Unrecognized => {
            println!("That code is not part of this room.");
        }
    }
    Ok(())
}

fn handle_answer(game: &mut GameStore, guess: &str) -> Result<()> {
    let Some(current) = game.session().current.clone() else {
        println!("Nothing is open. Scan or select a riddle first.");
        return Ok(());
    };
    match &current.detail {
        ContentDetail::Riddle { answer, solved } => {
            if *solved {
                println!("'{}' is already solved.", current.title);
            } else if current.answer_matches(guess) {
                game.solve_riddle(&current.id)?;
                println!("Correct! '{}' is solved; the answer was '{}'.", current.title, answer);
            } else {
                println!("Not quite. Think it over and try again.");
            }
        }
        _ => println!("'{}' is not a riddle; use 'collect' instead.", current.title),
    }
    Ok(())
}

fn handle_collect(game: &mut GameStore) -> Result<()> {
    let Some(current) = game.session().current.clone() else {
        println!("Nothing is open. Scan or select something first.");
        return Ok(());
    };
    match current.kind() {
        ContentKind::Riddle => {
            println!("'{}' is a riddle; use 'answer <guess>'.", current.title);
        }
        _ => {
            if current.is_complete() {
                println!("'{}' is already in your collection.", current.title);
            } else {
                game.mark_found(&current.id)?;
                println!("'{}' added to your collection.", current.title);
            }
        }
    }
    Ok(())
}

fn handle_select(game: &mut GameStore, id: &str) -> Result<()> {
    match game.session().find_discovered(id).cloned() {
        Some(item) => {
            game.select_content(item.clone())?;
            print!("{}", render_card(&item));
        }
        None => println!("No discovered content has id '{}'. Try 'list'.", id),
    }
    Ok(())
}

fn handle_password(game: &GameStore, gate: &mut FinalGate, attempt: &str) {
    if gate.unlocked() {
        println!("The door is already open. Enjoy the fresh air.");
    } else if !gate.is_visible(game.session()) {
        println!("The final gate is still sealed. Keep exploring.");
    } else if gate.try_unlock(attempt) {
        let stats = ProgressStats::for_session(game.session());
        println!("The final password is correct. The lock clicks open!");
        println!(
            "You escaped with {} of {} discoveries completed.",
            stats.completed(),
            stats.discovered_total()
        );
    } else {
        println!("Wrong password. Failed attempts: {}.", gate.attempts());
    }
}

fn print_time(clock: &Option<Instant>) {
    match clock {
        Some(started) => {
            let secs = started.elapsed().as_secs();
            let note = match pace(secs) {
                TimerPace::Early => "",
                TimerPace::Mid => ", over half an hour",
                TimerPace::Late => ", past the hour",
            };
            println!("Time: {} ({}{})", format_elapsed(secs), status_label(true), note);
        }
        None => println!("Time: {} ({})", format_elapsed(0), status_label(false)),
    }
}

/// Run the interactive loop until the player quits or stdin closes.
pub async fn run(config: &Config, game: &mut GameStore) -> Result<()> {
    let mut gate = FinalGate::new(
        config.room.final_password.clone(),
        config.room.final_password_threshold,
    );
    // Like a fresh page load: the clock restarts at zero even for a resumed
    // session, and only runs once the game has been started.
    let mut clock: Option<Instant> = if game.session().game_started {
        Some(Instant::now())
    } else {
        None
    };
    let mut gate_announced = false;

    println!("{}", config.room.name);
    println!("{}", config.room.welcome_message);
    if game.session().discovered.is_empty() {
        println!("Type 'scan <code>' after decoding a QR code, or 'help' for everything else.");
    } else {
        println!(
            "Welcome back. Progress so far: {}",
            ProgressStats::for_session(game.session()).summary_line()
        );
    }
    announce_gate_if_ready(&gate, game, &mut gate_announced);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    print_prompt();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = PlayCommand::parse(&line) else {
            if !line.trim().is_empty() {
                println!("Unrecognized command. Type 'help' for the list.");
            }
            print_prompt();
            continue;
        };
        match command {
            PlayCommand::Scan(code) => {
                handle_scan(game, &code)?;
                announce_gate_if_ready(&gate, game, &mut gate_announced);
            }
            PlayCommand::Answer(guess) => handle_answer(game, &guess)?,
            PlayCommand::Collect => handle_collect(game)?,
            PlayCommand::Select(id) => handle_select(game, &id)?,
            PlayCommand::List => print!("{}", render_list(game.session())),
            PlayCommand::Password(attempt) => handle_password(game, &mut gate, &attempt),
            PlayCommand::Start => {
                if game.session().game_started {
                    println!("The game is already running.");
                } else {
                    game.start_game()?;
                    clock = Some(Instant::now());
                    println!("Game started. The clock is running.");
                }
            }
            PlayCommand::Time => print_time(&clock),
            PlayCommand::Status => {
                let elapsed = clock.as_ref().map(|started| started.elapsed().as_secs());
                print!("{}", render_status(&config.room.name, game, &gate, elapsed));
            }
            PlayCommand::Help => println!("{}", help_text()),
            PlayCommand::Quit => {
                println!("Progress saved. Goodbye.");
                break;
            }
        }
        print_prompt();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases_and_keeps_argument_case() {
        assert_eq!(
            PlayCommand::parse("SCAN Pista1"),
            Some(PlayCommand::Scan("Pista1".to_string()))
        );
        assert_eq!(
            PlayCommand::parse("  a  El Reloj "),
            Some(PlayCommand::Answer("El Reloj".to_string()))
        );
        assert_eq!(PlayCommand::parse("l"), Some(PlayCommand::List));
        assert_eq!(PlayCommand::parse("?"), Some(PlayCommand::Help));
        assert_eq!(PlayCommand::parse("exit"), Some(PlayCommand::Quit));
    }

    #[test]
    fn parse_rejects_blank_and_unknown_lines() {
        assert_eq!(PlayCommand::parse(""), None);
        assert_eq!(PlayCommand::parse("   "), None);
        assert_eq!(PlayCommand::parse("dance"), None);
        assert_eq!(PlayCommand::parse("scan"), None, "scan needs a code");
        assert_eq!(PlayCommand::parse("password"), None, "password needs a word");
    }

    #[test]
    fn card_shows_the_answer_only_once_solved() {
        let mut item = ContentItem::riddle("riddle-1", "Enigma", "¿Qué soy?", "eco");
        let before = render_card(&item);
        assert!(before.contains("Unsolved"));
        assert!(!before.contains("'eco'"), "unsolved card must not leak the answer");

        item.mark_solved();
        let after = render_card(&item);
        assert!(after.contains("Solved. The answer was 'eco'."));
    }

    #[test]
    fn list_groups_by_kind_with_marks() {
        let mut session = GameSession::new();
        session.discovered.push(ContentItem::hint("hint-1", "Pista", "Texto."));
        session
            .discovered
            .push(ContentItem::riddle("riddle-1", "Enigma", "¿Qué soy?", "eco"));
        session.discovered[0].mark_found();

        let listing = render_list(&session);
        assert!(listing.contains("Hints:"));
        assert!(listing.contains("[x] Pista (hint-1)"));
        assert!(listing.contains("Riddles:"));
        assert!(listing.contains("[ ] Enigma (riddle-1)"));
        assert!(listing.contains("Progress: hints 1/1, riddles 0/1, eggs 0/0 (50%)"));
    }

    #[test]
    fn empty_list_nudges_toward_scanning() {
        let listing = render_list(&GameSession::new());
        assert!(listing.contains("Scan a code to begin"));
    }
}
