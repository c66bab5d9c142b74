//! Terminal layer: a pure view that turns engine state into styled text
//! lines, and a crossterm renderer that flushes them to the screen.

pub mod game_view;
pub mod renderer;

pub use game_view::{GameView, Line, Tile};
pub use renderer::TerminalRenderer;
