//! Interactive session: one engine, driven line by line.

use super::action::Action;
use super::config::DisplayConfig;
use super::render::{render_frame, render_history, render_json};
use std::io::{BufRead, Write};
use strictly_timetravel::{GameEngine, HistoryError, PlayOutcome};
use tracing::{debug, info, instrument, warn};

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  <0-8> | play <cell>   place the next mark (cell index or label, e.g. center)
  jump <n>              show snapshot n of the history
  reset                 start over
  history               list snapshots
  status                print the status line
  json                  print the full view as JSON
  help                  this text
  quit                  leave";

/// What the session wants printed after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A fresh frame of the game.
    Frame(String),
    /// A message that does not redraw the board.
    Text(String),
    /// End of session.
    Quit,
}

/// A game session owning its engine.
#[derive(Debug, Clone)]
pub struct Session {
    engine: GameEngine,
    display: DisplayConfig,
}

impl Session {
    /// Starts a session on a fresh engine.
    pub fn new(display: DisplayConfig) -> Self {
        Self::with_engine(GameEngine::new(), display)
    }

    /// Starts a session on an existing engine.
    pub fn with_engine(engine: GameEngine, display: DisplayConfig) -> Self {
        Self { engine, display }
    }

    /// Starts a session on `moves` replayed from an empty board, then shows
    /// snapshot `jump` if one is given.
    #[instrument(skip(display))]
    pub fn replay(
        moves: &[usize],
        jump: Option<usize>,
        display: DisplayConfig,
    ) -> Result<Self, HistoryError> {
        let mut engine = GameEngine::replay(moves.iter().copied());
        if let Some(index) = jump {
            engine.jump_to(index)?;
        }
        info!(history_len = engine.history_len(), pointer = engine.pointer(), "Replay finished");
        Ok(Self::with_engine(engine, display))
    }

    /// The engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Current frame.
    pub fn frame(&self) -> String {
        render_frame(&self.engine, &self.display).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to render frame");
            format!("Failed to render frame: {}", e)
        })
    }

    /// Applies one action to the engine.
    #[instrument(skip(self), fields(pointer = self.engine.pointer()))]
    pub fn execute(&mut self, action: Action) -> Reply {
        match action {
            Action::Play(cell) => match self.engine.play(cell) {
                PlayOutcome::Placed(mov) => {
                    debug!(%mov, "Placed");
                    Reply::Frame(self.frame())
                }
                PlayOutcome::Ignored(rejection) => {
                    debug!(%rejection, "Play ignored");
                    Reply::Text(format!("Ignored: {}", rejection))
                }
            },
            Action::Jump(index) => match self.engine.jump_to(index) {
                Ok(()) => Reply::Frame(self.frame()),
                Err(e) => {
                    warn!(error = %e, "Jump rejected");
                    Reply::Text(e.to_string())
                }
            },
            Action::Reset => {
                self.engine.reset();
                Reply::Frame(self.frame())
            }
            Action::History => Reply::Text(render_history(&self.engine)),
            Action::Status => Reply::Text(self.engine.status().to_string()),
            Action::Json => Reply::Text(
                render_json(&self.engine).unwrap_or_else(|e| format!("Failed to encode view: {}", e)),
            ),
            Action::Help => Reply::Text(HELP.to_string()),
            Action::Quit => Reply::Quit,
        }
    }

    /// Reads actions from `input` until EOF or `quit`, writing replies to `output`.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        info!("Session started");
        writeln!(output, "{}", self.frame())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let reply = match line.parse::<Action>() {
                Ok(action) => self.execute(action),
                Err(e) => Reply::Text(format!("{} (type 'help')", e)),
            };
            match reply {
                Reply::Frame(text) | Reply::Text(text) => writeln!(output, "{}", text)?,
                Reply::Quit => break,
            }
        }

        info!(history_len = self.engine.history_len(), "Session ended");
        Ok(())
    }
}
