//! GameView: renders engine state into styled text lines.
//!
//! Pure with respect to the terminal: the view only builds lines, the
//! renderer flushes them. Each board cell is two characters wide so the
//! playfield reads roughly square in a monospace font.

use crossterm::style::Color;

use crate::core::Engine;
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MATRIX_SIZE};

/// One styled character on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub ch: char,
    pub color: Color,
}

impl Tile {
    fn plain(ch: char) -> Self {
        Self {
            ch,
            color: Color::White,
        }
    }
}

pub type Line = Vec<Tile>;

const BORDER_COLOR: Color = Color::DarkGrey;
const EMPTY_CELL: &str = " .";
const FILLED_CELL: &str = "[]";

/// Display color for each piece kind.
fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::DarkYellow,
        PieceKind::O => Color::Yellow,
        PieceKind::S => Color::Green,
        PieceKind::T => Color::Magenta,
        PieceKind::Z => Color::Red,
    }
}

/// Stateless view over the engine.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Build the full frame: bordered playfield, side panel, status line.
    pub fn render(&self, engine: &Engine, status: &str) -> Vec<Line> {
        let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize + 3);

        lines.push(self.border_line());
        for y in 0..BOARD_HEIGHT as i8 {
            let mut line = Vec::new();
            line.push(Tile {
                ch: '|',
                color: BORDER_COLOR,
            });
            for x in 0..BOARD_WIDTH as i8 {
                self.push_cell(&mut line, engine, x, y);
            }
            line.push(Tile {
                ch: '|',
                color: BORDER_COLOR,
            });
            self.push_panel(&mut line, engine, y);
            lines.push(line);
        }
        lines.push(self.border_line());

        let mut status_line = Vec::new();
        push_str(&mut status_line, status, Color::White);
        lines.push(status_line);

        lines
    }

    fn border_line(&self) -> Line {
        let width = BOARD_WIDTH as usize * 2 + 2;
        (0..width)
            .map(|i| Tile {
                ch: if i == 0 || i == width - 1 { '+' } else { '-' },
                color: BORDER_COLOR,
            })
            .collect()
    }

    fn push_cell(&self, line: &mut Line, engine: &Engine, x: i8, y: i8) {
        if let Some(kind) = self.cell_kind(engine, x, y) {
            push_str(line, FILLED_CELL, piece_color(kind));
        } else {
            push_str(line, EMPTY_CELL, Color::DarkGrey);
        }
    }

    /// Kind shown at a board cell: the active piece overlays locked cells.
    fn cell_kind(&self, engine: &Engine, x: i8, y: i8) -> Option<PieceKind> {
        if let Some(piece) = engine.current() {
            let col = x - piece.x;
            let row = y - piece.y;
            if (0..MATRIX_SIZE as i8).contains(&col)
                && (0..MATRIX_SIZE as i8).contains(&row)
                && piece.matrix[row as usize][col as usize]
            {
                return Some(piece.kind);
            }
        }
        engine.board().get(x, y).flatten()
    }

    /// Score, counters, next-piece preview, and phase banner beside the field.
    fn push_panel(&self, line: &mut Line, engine: &Engine, y: i8) {
        push_str(line, "  ", Color::White);
        match y {
            0 => push_str(line, &format!("Score: {}", engine.score()), Color::White),
            1 => push_str(line, &format!("Lines: {}", engine.lines()), Color::White),
            2 => push_str(line, &format!("Level: {}", engine.level()), Color::White),
            4 => push_str(line, "Next:", Color::White),
            5..=8 => {
                if let Some(next) = engine.next_piece() {
                    let row = (y - 5) as usize;
                    for col in 0..MATRIX_SIZE {
                        if next.matrix[row][col] {
                            push_str(line, FILLED_CELL, piece_color(next.kind));
                        } else {
                            push_str(line, "  ", Color::White);
                        }
                    }
                }
            }
            10 => match engine.phase() {
                Phase::Paused => push_str(line, "PAUSED", Color::Yellow),
                Phase::GameOver => push_str(line, "GAME OVER", Color::Red),
                Phase::Idle | Phase::Running => {}
            },
            11 => {
                if engine.phase() == Phase::GameOver {
                    push_str(line, "press r to restart", Color::White);
                }
            }
            13 => push_str(line, "arrows/hjkl move", Color::DarkGrey),
            14 => push_str(line, "space drop  p pause  q quit", Color::DarkGrey),
            _ => {}
        }
    }
}

fn push_str(line: &mut Line, text: &str, color: Color) {
    for ch in text.chars() {
        line.push(Tile { ch, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameAction;

    fn line_text(line: &Line) -> String {
        line.iter().map(|t| t.ch).collect()
    }

    #[test]
    fn frame_has_bordered_playfield_and_status() {
        let mut engine = Engine::new(1);
        engine.initialize();
        let lines = GameView.render(&engine, "");

        assert_eq!(lines.len(), BOARD_HEIGHT as usize + 3);
        assert!(line_text(&lines[0]).starts_with('+'));
        assert!(line_text(&lines[BOARD_HEIGHT as usize + 1]).ends_with('+'));
        for y in 1..=BOARD_HEIGHT as usize {
            assert_eq!(lines[y][0].ch, '|');
        }
    }

    #[test]
    fn panel_shows_counters() {
        let mut engine = Engine::new(1);
        engine.initialize();
        let lines = GameView.render(&engine, "");

        assert!(line_text(&lines[1]).contains("Score: 0"));
        assert!(line_text(&lines[2]).contains("Lines: 0"));
        assert!(line_text(&lines[3]).contains("Level: 1"));
        assert!(line_text(&lines[5]).contains("Next:"));
    }

    #[test]
    fn active_piece_is_drawn_in_its_color() {
        let mut engine = Engine::new(1);
        engine.initialize();
        let piece = *engine.current().unwrap();
        let lines = GameView.render(&engine, "");

        let mut found = false;
        for row in 0..MATRIX_SIZE {
            for col in 0..MATRIX_SIZE {
                if !piece.matrix[row][col] {
                    continue;
                }
                let y = piece.y as usize + row;
                let x = piece.x as usize + col;
                // Board cell x starts at screen column 1 + 2x
                let tile = lines[y + 1][1 + 2 * x];
                assert_eq!(tile.ch, '[');
                assert_eq!(tile.color, piece_color(piece.kind));
                found = true;
            }
        }
        assert!(found);
    }

    #[test]
    fn paused_banner_appears() {
        let mut engine = Engine::new(1);
        engine.initialize();
        engine.apply_action(GameAction::TogglePause);
        let lines = GameView.render(&engine, "");
        assert!(line_text(&lines[11]).contains("PAUSED"));
    }

    #[test]
    fn status_text_lands_on_the_last_line() {
        let mut engine = Engine::new(1);
        engine.initialize();
        let lines = GameView.render(&engine, "Cleared 2 lines");
        assert_eq!(line_text(lines.last().unwrap()), "Cleared 2 lines");
    }
}
