//! Terminal front end for the time-travel tic-tac-toe engine.
//!
//! Renders the engine view as text (or JSON) and forwards typed commands
//! into it. All game rules live in `strictly_timetravel`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cli;
mod config;
mod render;
mod session;

pub use action::{Action, ActionError};
pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DisplayConfig, OutputFormat};
pub use render::{render_board, render_frame, render_history, render_json};
pub use session::{HELP, Reply, Session};
