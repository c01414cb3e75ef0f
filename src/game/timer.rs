//! Elapsed-time display helpers.
//!
//! The live clock is wall-clock state owned by the front end and restarts at
//! zero each run; only formatting and pacing rules live here.

/// Render seconds as `mm:ss`, growing to `h:mm:ss` past the first hour.
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Phase label shown beside the clock.
pub fn status_label(game_started: bool) -> &'static str {
    if game_started {
        "in progress"
    } else {
        "waiting to start"
    }
}

/// Pace bands: under half an hour, under the hour, beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPace {
    Early,
    Mid,
    Late,
}

pub fn pace(total_seconds: u64) -> TimerPace {
    if total_seconds < 1800 {
        TimerPace::Early
    } else if total_seconds < 3600 {
        TimerPace::Mid
    } else {
        TimerPace::Late
    }
}
