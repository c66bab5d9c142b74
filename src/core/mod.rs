//! Core game logic - pure, deterministic, no terminal or timing dependencies.

pub mod board;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod scheduler;
pub mod shapes;

pub use board::Board;
pub use engine::{drop_interval_for, level_for, Engine};
pub use piece::{rotate_cw, Piece};
pub use rng::SimpleRng;
pub use scheduler::DropScheduler;
pub use shapes::{random_shape, shape_for, Shape, CATALOG};
