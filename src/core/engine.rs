//! Game engine - the deterministic state machine tying everything together.
//!
//! The engine owns the board, the active and next pieces, the counters, and
//! the drop scheduler. Collaborators hold a reference to the engine, drive it
//! through the operation methods, and read back state plus drained events;
//! they never mutate anything directly.
//!
//! Illegal moves are no-ops, not errors: a failed collision check leaves the
//! state untouched and emits nothing. The only terminal condition is game
//! over, which is a normal phase, re-entered into `Running` via
//! `initialize()`.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::core::rng::SimpleRng;
use crate::core::scheduler::DropScheduler;
use crate::core::shapes::random_shape;
use crate::types::{
    GameAction, GameEvent, Phase, BASE_DROP_MS, BOARD_HEIGHT, DROP_STEP_MS, LINES_PER_LEVEL,
    MIN_DROP_MS, SCORE_PER_LINE,
};

/// Upper bound on events a single operation can produce
/// (locked + cleared + level-up + game-over), with headroom.
const EVENT_CAPACITY: usize = 8;

/// Level derived from cumulative cleared lines.
pub fn level_for(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Milliseconds between automatic drops at a level, floored at 100ms.
pub fn drop_interval_for(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(DROP_STEP_MS))
        .max(MIN_DROP_MS)
}

/// The game-state engine.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    rng: SimpleRng,
    scheduler: DropScheduler,
    phase: Phase,
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl Engine {
    /// Create an idle engine; `initialize()` starts a game.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            rng: SimpleRng::new(seed),
            scheduler: DropScheduler::new(),
            phase: Phase::Idle,
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: BASE_DROP_MS,
            events: ArrayVec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_pieces(&mut self, current: Piece, next: Piece) {
        self.current = Some(current);
        self.next = Some(next);
    }

    /// Drain the events accumulated since the last call.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        // Collaborators drain once per frame; if one never does, shed the
        // oldest entry rather than grow or panic.
        if self.events.try_push(event).is_err() {
            self.events.remove(0);
            self.events.push(event);
        }
    }

    /// Start (or restart) a game: empty board, zeroed counters, fresh pieces.
    ///
    /// Always transitions to `Running`, from any phase.
    pub fn initialize(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.drop_interval_ms = BASE_DROP_MS;
        self.current = Some(Piece::spawn(random_shape(&mut self.rng)));
        self.next = Some(Piece::spawn(random_shape(&mut self.rng)));
        self.scheduler.reset();
        self.events.clear();
        self.phase = Phase::Running;
    }

    /// Shift the active piece one column; emits `Moved` on success.
    pub fn move_horizontal(&mut self, dx: i8) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        if self.board.collides(&piece.matrix, piece.x + dx, piece.y) {
            return false;
        }
        piece.x += dx;
        self.push_event(GameEvent::Moved);
        true
    }

    /// Advance the active piece one row; a blocked step runs the lock
    /// sequence instead. Returns true when the piece actually moved.
    pub fn soft_drop(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        if self.board.collides(&piece.matrix, piece.x, piece.y + 1) {
            self.lock_sequence();
            return false;
        }
        piece.y += 1;
        true
    }

    /// Drop the active piece to the floor and lock it.
    ///
    /// The fall loop is capped at the board's row count; hitting the cap
    /// means the collision check is broken, so the piece locks at the last
    /// known-valid position instead of looping forever.
    pub fn hard_drop(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(piece) = self.current.as_mut() else {
            return;
        };

        let mut steps = 0u32;
        while steps < BOARD_HEIGHT as u32
            && !self.board.collides(&piece.matrix, piece.x, piece.y + 1)
        {
            piece.y += 1;
            steps += 1;
        }
        debug_assert!(
            self.board.collides(&piece.matrix, piece.x, piece.y + 1),
            "hard drop exhausted the row-count bound without grounding"
        );

        self.lock_sequence();
    }

    /// Rotate the active piece with wall kicks; emits `Rotated` on success.
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(mut piece) = self.current.take() else {
            return false;
        };
        let rotated = piece.try_rotate(&self.board);
        self.current = Some(piece);
        if rotated {
            self.push_event(GameEvent::Rotated);
        }
        rotated
    }

    /// Flip between `Running` and `Paused`; meaningless in other phases.
    ///
    /// Resuming rebases the scheduler so the paused duration is never
    /// interpreted as accumulated drop time.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => self.phase = Phase::Paused,
            Phase::Paused => {
                self.scheduler.reset();
                self.phase = Phase::Running;
            }
            Phase::Idle | Phase::GameOver => {}
        }
    }

    /// Feed measured elapsed time to the drop scheduler.
    ///
    /// At most one gravity step fires per call. Outside `Running` the
    /// elapsed time is discarded entirely, so a pause can never turn into a
    /// burst of catch-up drops on resume.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        if self.scheduler.advance(elapsed_ms, self.drop_interval_ms) {
            self.soft_drop();
            return true;
        }
        false
    }

    /// Apply a discrete player intent.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => {
                self.move_horizontal(-1);
            }
            GameAction::MoveRight => {
                self.move_horizontal(1);
            }
            GameAction::SoftDrop => {
                self.soft_drop();
            }
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => {
                self.rotate();
            }
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => self.initialize(),
        }
    }

    /// The lock sequence: write the piece into the board, clear rows, update
    /// counters, promote the next piece, and test for game over.
    fn lock_sequence(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        self.board.lock(&piece.matrix, piece.x, piece.y, piece.kind);
        self.push_event(GameEvent::Locked);

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.score += cleared * SCORE_PER_LINE;
            self.lines += cleared;
            self.push_event(GameEvent::LinesCleared(cleared));

            let new_level = level_for(self.lines);
            if new_level > self.level {
                self.level = new_level;
                self.push_event(GameEvent::LeveledUp(new_level));
            }
            self.drop_interval_ms = drop_interval_for(self.level);
        }

        let promoted = match self.next.take() {
            Some(piece) => piece,
            None => Piece::spawn(random_shape(&mut self.rng)),
        };
        self.next = Some(Piece::spawn(random_shape(&mut self.rng)));

        if self
            .board
            .collides(&promoted.matrix, promoted.x, promoted.y)
        {
            self.phase = Phase::GameOver;
            self.push_event(GameEvent::GameOver {
                score: self.score,
                lines: self.lines,
                level: self.level,
            });
        } else {
            self.current = Some(promoted);
        }

        // Rebase gravity so the fresh piece gets a full interval.
        self.scheduler.reset();
    }
}
