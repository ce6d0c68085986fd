//! Text rendering of the engine view.

use super::config::{DisplayConfig, OutputFormat};
use strictly_timetravel::{Board, GameEngine, Square};

/// Renders the board as three rows of `a | b | c`.
pub fn render_board(board: &Board, display: &DisplayConfig) -> String {
    let rows: Vec<String> = board
        .squares()
        .chunks(3)
        .enumerate()
        .map(|(row, squares)| {
            squares
                .iter()
                .enumerate()
                .map(|(col, square)| match square {
                    Square::Empty if *display.number_empty_cells() => {
                        format!(" {} ", row * 3 + col)
                    }
                    Square::Empty => format!(" {} ", display.empty_glyph()),
                    Square::Occupied(_) => format!(" {} ", square.symbol()),
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// One line per snapshot; `>` marks the one on display.
pub fn render_history(engine: &GameEngine) -> String {
    engine
        .snapshots()
        .iter()
        .enumerate()
        .map(|(index, snap)| {
            let marker = if index == engine.pointer() { '>' } else { ' ' };
            match snap.last_move() {
                Some(mov) => format!("{} {}: {} ({})", marker, index, snap.label(), mov),
                None => format!("{} {}: {}", marker, index, snap.label()),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty JSON of the engine view.
pub fn render_json(engine: &GameEngine) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&engine.view())
}

/// Board, status line and (optionally) history, or JSON per `display.format`.
pub fn render_frame(engine: &GameEngine, display: &DisplayConfig) -> Result<String, serde_json::Error> {
    match display.format() {
        OutputFormat::Json => render_json(engine),
        OutputFormat::Text => {
            let mut frame = render_board(engine.current_board(), display);
            frame.push_str("\n\n");
            frame.push_str(&engine.status().to_string());
            if *display.show_history() {
                frame.push_str("\n\n");
                frame.push_str(&render_history(engine));
            }
            Ok(frame)
        }
    }
}
