//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here knows about
//! history or whose turn it is; the engine derives those from its pointer.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full, is_terminal};
pub use win::{LINES, check_winner, winning_line};
