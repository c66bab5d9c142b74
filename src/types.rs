//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Every shape lives inside a fixed 4x4 frame regardless of footprint
pub const MATRIX_SIZE: usize = 4;

/// Spawn anchor for every new piece (top-left of the 4x4 frame)
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = 0;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const BASE_DROP_MS: u32 = 1000;
pub const MIN_DROP_MS: u32 = 100;
pub const DROP_STEP_MS: u32 = 100;

/// Progression constants
pub const LINES_PER_LEVEL: u32 = 10;
pub const SCORE_PER_LINE: u32 = 10;

/// Horizontal wall-kick offsets, tried in this exact priority order
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// A piece's 4x4 occupancy matrix
pub type ShapeMatrix = [[bool; MATRIX_SIZE]; MATRIX_SIZE];

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Color/kind identifier in catalog order (1..=7, 0 marks the empty cell)
    pub fn code(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Engine lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Discrete player intents, each mapping 1:1 to an engine operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    TogglePause,
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::TogglePause => "togglePause",
            GameAction::Restart => "restart",
        }
    }
}

/// Notifications the engine emits for collaborators (renderer, audio, ...).
///
/// Collaborators are free to ignore any of these and none of them can reach
/// back into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Moved,
    Rotated,
    Locked,
    LinesCleared(u32),
    LeveledUp(u32),
    GameOver { score: u32, lines: u32, level: u32 },
}
