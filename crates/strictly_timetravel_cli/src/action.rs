//! Parsing of interactive input lines.

use derive_more::{Display, Error};
use std::str::FromStr;
use strictly_timetravel::Position;
use tracing::instrument;

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Click a cell (forwarded as-is; the engine ignores illegal cells).
    Play(usize),
    /// Click a history entry.
    Jump(usize),
    /// Click the reset control.
    Reset,
    /// Print the history list.
    History,
    /// Print the status line.
    Status,
    /// Print the engine view as JSON.
    Json,
    /// Print the command summary.
    Help,
    /// Leave the session.
    Quit,
}

impl FromStr for Action {
    type Err = ActionError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ActionError::new("Empty command".to_string()));
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(ActionError::new(format!("Too many arguments: {}", line.trim())));
        }

        let head = head.to_lowercase();
        match (head.as_str(), arg) {
            (word, None) if word.parse::<usize>().is_ok() => word
                .parse()
                .map(Action::Play)
                .map_err(|e| ActionError::new(format!("Invalid cell: {}", e))),
            ("play" | "p", Some(arg)) => parse_cell(arg).map(Action::Play),
            ("jump" | "j" | "goto", Some(arg)) => arg
                .parse()
                .map(Action::Jump)
                .map_err(|_| ActionError::new(format!("Invalid history index: {}", arg))),
            ("reset" | "r", None) => Ok(Action::Reset),
            ("history" | "h", None) => Ok(Action::History),
            ("status" | "s", None) => Ok(Action::Status),
            ("json", None) => Ok(Action::Json),
            ("help" | "?", None) => Ok(Action::Help),
            ("quit" | "exit" | "q", None) => Ok(Action::Quit),
            ("play" | "p" | "jump" | "j" | "goto", None) => {
                Err(ActionError::new(format!("'{}' needs an argument", head)))
            }
            _ => Err(ActionError::new(format!("Unknown command: {}", line.trim()))),
        }
    }
}

/// Accepts a raw index (kept even when off the board) or a cell label.
fn parse_cell(arg: &str) -> Result<usize, ActionError> {
    if let Ok(index) = arg.parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(arg)
        .map(Position::to_index)
        .ok_or_else(|| ActionError::new(format!("Unknown cell: {}", arg)))
}

/// Input that is not a command.
#[derive(Debug, Clone, Display, Error)]
#[display("{}", message)]
pub struct ActionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ActionError {
    /// Creates a new parse error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
