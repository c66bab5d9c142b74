//! Terminal falling-block puzzle built around a deterministic core engine.
//!
//! The crate splits into three layers:
//! - [`core`]: board, shapes, collision, rotation, scoring, and the engine
//!   state machine. Pure logic, fully deterministic given a seed, no terminal
//!   or clock dependencies.
//! - [`input`]: stateless mapping from terminal key events to game actions.
//! - [`term`]: crossterm renderer and the game view that draws engine state.
//!
//! The binary wires them together in a fixed-timestep frame loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;

pub use crate::core::{Board, Engine, Piece, SimpleRng};
pub use crate::types::{GameAction, GameEvent, Phase, PieceKind};
