//! Game state module - the session state machine
//!
//! A [`GameState`] is a value. [`GameState::apply`] consumes one state and one
//! command and returns the next state; the caller keeps whichever it wants.
//! Illegal commands (moving into a wall, anything before `Start` or after game
//! over) return the state unchanged. [`Game`] is a small host that owns the
//! current state together with the piece source.

use crate::board::Board;
use crate::geometry::{clear_lines, collides, drop_distance, landing_y, merge, rotate};
use crate::pieces::{create_random_tetromino, Tetromino};
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{drop_score, line_clear_score};
use crate::snapshot::{overlay_piece, GameSnapshot};
use crate::types::{Command, LockEvent};

/// Lifecycle phase derived from the session flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Never started
    Idle,
    Playing,
    /// Terminal until the next `Start`
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current: Option<Tetromino>,
    next: Option<Tetromino>,
    score: u32,
    playing: bool,
    game_over: bool,
    /// Most recent lock in this session (cleared by `Start`).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Idle session: empty board, no pieces, zero score
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            score: 0,
            playing: false,
            game_over: false,
            last_event: None,
        }
    }

    /// Fresh playing session with two pieces drawn from `source`
    pub fn started(source: &mut impl PieceSource) -> Self {
        let current = create_random_tetromino(source);
        let next = create_random_tetromino(source);
        Self::playing_with(Board::new(), current, next)
    }

    /// Playing session over an arbitrary board and piece pair.
    ///
    /// Used to resume a recorded position or to set one up in tests.
    pub fn playing_with(board: Board, current: Tetromino, next: Tetromino) -> Self {
        Self {
            board,
            current: Some(current),
            next: Some(next),
            score: 0,
            playing: true,
            game_over: false,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<Tetromino> {
        self.current
    }

    pub fn next(&self) -> Option<Tetromino> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.playing {
            Phase::Playing
        } else {
            Phase::Idle
        }
    }

    /// Whether gravity should be running for this state
    pub fn accepts_ticks(&self) -> bool {
        self.active_piece().is_some()
    }

    /// Row the current piece would rest on after a hard drop
    pub fn ghost_y(&self) -> Option<i8> {
        let piece = self.active_piece()?;
        Some(landing_y(&self.board, &piece))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Fill an existing snapshot (lets a render loop reuse one value).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        if let Some(piece) = self.current {
            overlay_piece(&mut out.board, &piece);
        }
        out.current = self.current;
        out.next = self.next;
        out.ghost_y = self.ghost_y();
        out.score = self.score;
        out.is_playing = self.playing;
        out.is_game_over = self.game_over;
        out.last_event = self.last_event;
    }

    /// The piece commands act on, if the session accepts commands at all.
    fn active_piece(&self) -> Option<Tetromino> {
        if !self.playing || self.game_over {
            return None;
        }
        self.current
    }

    /// Apply one command and return the resulting state
    pub fn apply(self, command: Command, source: &mut impl PieceSource) -> Self {
        match command {
            Command::Start => Self::started(source),
            Command::MoveLeft => self.shift(-1),
            Command::MoveRight => self.shift(1),
            Command::Rotate => self.rotated(),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => self.hard_drop(source),
            Command::Tick => self.tick(source),
        }
    }

    fn shift(mut self, dx: i8) -> Self {
        let Some(piece) = self.active_piece() else {
            return self;
        };
        if !collides(&self.board, &piece, dx, 0) {
            self.current = Some(piece.translated(dx, 0));
        }
        self
    }

    fn rotated(mut self) -> Self {
        let Some(piece) = self.active_piece() else {
            return self;
        };
        // Tested in place only: no wall kicks.
        let turned = rotate(&piece);
        if !collides(&self.board, &turned, 0, 0) {
            self.current = Some(turned);
        }
        self
    }

    /// One row down for one point. Never locks, even when resting.
    fn soft_drop(mut self) -> Self {
        let Some(piece) = self.active_piece() else {
            return self;
        };
        if !collides(&self.board, &piece, 0, 1) {
            self.current = Some(piece.translated(0, 1));
            self.score = self.score.saturating_add(drop_score(1, false));
        }
        self
    }

    fn hard_drop(self, source: &mut impl PieceSource) -> Self {
        let Some(piece) = self.active_piece() else {
            return self;
        };
        let distance = drop_distance(&self.board, &piece);
        let landed = piece.at_row(landing_y(&self.board, &piece));
        self.lock(landed, drop_score(distance as u32, true), source)
    }

    fn tick(mut self, source: &mut impl PieceSource) -> Self {
        let Some(piece) = self.active_piece() else {
            return self;
        };
        if !collides(&self.board, &piece, 0, 1) {
            self.current = Some(piece.translated(0, 1));
            return self;
        }
        self.lock(piece, 0, source)
    }

    /// Merge, clear, score, promote `next`, and check the spawn.
    fn lock(mut self, piece: Tetromino, drop_points: u32, source: &mut impl PieceSource) -> Self {
        let merged = merge(&self.board, &piece);
        let (board, lines_cleared) = clear_lines(&merged);
        let line_points = line_clear_score(lines_cleared);

        self.board = board;
        self.score = self
            .score
            .saturating_add(drop_points)
            .saturating_add(line_points);

        let promoted = match self.next.take() {
            Some(next) => next,
            None => create_random_tetromino(source),
        };
        let upcoming = create_random_tetromino(source);
        let game_over = collides(&self.board, &promoted, 0, 0);

        if game_over {
            self.current = None;
            self.next = None;
            self.playing = false;
            self.game_over = true;
        } else {
            self.current = Some(promoted);
            self.next = Some(upcoming);
        }

        self.last_event = Some(LockEvent {
            drop_score: drop_points,
            lines_cleared: lines_cleared as u32,
            line_clear_score: line_points,
            game_over,
        });
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hosts a session: owns the current state and the piece source.
#[derive(Debug, Clone)]
pub struct Game<S: PieceSource = SimpleRng> {
    state: GameState,
    source: S,
}

impl Game<SimpleRng> {
    /// Idle game whose pieces come from a seeded [`SimpleRng`]
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<S: PieceSource> Game<S> {
    pub fn with_source(source: S) -> Self {
        Self::from_state(GameState::new(), source)
    }

    pub fn from_state(state: GameState, source: S) -> Self {
        Self { state, source }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply a command, replacing the held state.
    ///
    /// Returns whether the state changed.
    pub fn apply_action(&mut self, command: Command) -> bool {
        let next = self.state.clone().apply(command, &mut self.source);
        let changed = next != self.state;
        self.state = next;
        changed
    }

    pub fn start(&mut self) {
        self.apply_action(Command::Start);
    }

    pub fn tick(&mut self) -> bool {
        self.apply_action(Command::Tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PieceSequence;
    use crate::types::{PieceKind, BOARD_HEIGHT};

    fn only(kind: PieceKind) -> PieceSequence {
        PieceSequence::repeat(kind)
    }

    #[test]
    fn test_new_game_state_is_idle() {
        let state = GameState::new();

        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.playing);
        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert!(state.current.is_none());
        assert!(state.next.is_none());
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_commands_ignored_when_idle() {
        let mut source = only(PieceKind::T);
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::Rotate,
            Command::SoftDrop,
            Command::HardDrop,
            Command::Tick,
        ] {
            assert_eq!(GameState::new().apply(cmd, &mut source), GameState::new());
        }
    }

    #[test]
    fn test_start_draws_current_then_next() {
        let mut source = PieceSequence::new(vec![PieceKind::S, PieceKind::L]).unwrap();
        let state = GameState::new().apply(Command::Start, &mut source);

        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.current.unwrap(), Tetromino::new(PieceKind::S));
        assert_eq!(state.next.unwrap(), Tetromino::new(PieceKind::L));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_start_resets_a_finished_session() {
        let mut source = only(PieceKind::O);
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::Z.color()));
        let mut state = GameState::playing_with(
            board,
            Tetromino::new(PieceKind::O),
            Tetromino::new(PieceKind::O),
        );
        state.score = 900;
        state.playing = false;
        state.game_over = true;

        let restarted = state.apply(Command::Start, &mut source);
        assert_eq!(restarted.phase(), Phase::Playing);
        assert_eq!(restarted.score, 0);
        assert_eq!(restarted.board, Board::new());
        assert!(restarted.last_event.is_none());
    }

    #[test]
    fn test_move_left_and_right() {
        let mut source = only(PieceKind::O);
        let state = GameState::new().apply(Command::Start, &mut source);
        let x = state.current.unwrap().x;

        let state = state.apply(Command::MoveLeft, &mut source);
        assert_eq!(state.current.unwrap().x, x - 1);
        let state = state.apply(Command::MoveRight, &mut source);
        let state = state.apply(Command::MoveRight, &mut source);
        assert_eq!(state.current.unwrap().x, x + 1);
    }

    #[test]
    fn test_move_into_wall_is_ignored() {
        let mut source = only(PieceKind::O);
        let mut state = GameState::new().apply(Command::Start, &mut source);
        for _ in 0..20 {
            state = state.apply(Command::MoveLeft, &mut source);
        }
        assert_eq!(state.current.unwrap().x, 0);
        let before = state.clone();
        assert_eq!(state.apply(Command::MoveLeft, &mut source), before);
    }

    #[test]
    fn test_rotate_blocked_without_kick() {
        let mut source = only(PieceKind::I);
        // Vertical I against the left wall: rotating back to horizontal would poke out.
        let vertical = rotate(&Tetromino::new_at(PieceKind::I, -2, 5));
        let state = GameState::playing_with(Board::new(), vertical, Tetromino::new(PieceKind::I));
        assert!(!collides(&state.board, &vertical, 0, 0));

        let after = state.clone().apply(Command::Rotate, &mut source);
        assert_eq!(after, state);
    }

    #[test]
    fn test_rotate_applies_when_clear() {
        let mut source = only(PieceKind::T);
        let state = GameState::new().apply(Command::Start, &mut source);
        let piece = state.current.unwrap();
        let after = state.apply(Command::Rotate, &mut source);
        assert_eq!(after.current.unwrap(), rotate(&piece));
    }

    #[test]
    fn test_soft_drop_scores_one_and_never_locks() {
        let mut source = only(PieceKind::O);
        let resting = Tetromino::new_at(PieceKind::O, 4, 18);
        let state = GameState::playing_with(Board::new(), resting, Tetromino::new(PieceKind::O));

        let after = state.clone().apply(Command::SoftDrop, &mut source);
        assert_eq!(after, state);
        assert_eq!(after.board.filled_count(), 0);

        let state = GameState::new().apply(Command::Start, &mut source);
        let y = state.current.unwrap().y;
        let after = state.apply(Command::SoftDrop, &mut source);
        assert_eq!(after.current.unwrap().y, y + 1);
        assert_eq!(after.score, 1);
    }

    #[test]
    fn test_hard_drop_scores_distance_and_locks() {
        let mut source = only(PieceKind::O);
        let state = GameState::new().apply(Command::Start, &mut source);
        let after = state.apply(Command::HardDrop, &mut source);

        let expected = 2 * (BOARD_HEIGHT as u32 - 2);
        assert_eq!(after.score, expected);
        assert_eq!(after.board.filled_count(), 4);
        assert!(after.board.is_occupied(4, 19));
        assert!(after.board.is_occupied(5, 18));
        assert_eq!(after.current.unwrap(), Tetromino::new(PieceKind::O));
        assert_eq!(
            after.last_event,
            Some(LockEvent {
                drop_score: expected,
                lines_cleared: 0,
                line_clear_score: 0,
                game_over: false,
            })
        );
    }

    #[test]
    fn test_tick_moves_down_without_score() {
        let mut source = only(PieceKind::T);
        let state = GameState::new().apply(Command::Start, &mut source);
        let after = state.apply(Command::Tick, &mut source);
        assert_eq!(after.current.unwrap().y, 1);
        assert_eq!(after.score, 0);
    }

    #[test]
    fn test_tick_locks_resting_piece_and_promotes_next() {
        let mut source = only(PieceKind::Z);
        let resting = Tetromino::new_at(PieceKind::O, 0, 18);
        let next = Tetromino::new(PieceKind::T);
        let state = GameState::playing_with(Board::new(), resting, next);

        let after = state.apply(Command::Tick, &mut source);
        assert!(after.board.is_occupied(0, 19));
        assert!(after.board.is_occupied(1, 18));
        assert_eq!(after.current, Some(next));
        assert_eq!(after.next, Some(Tetromino::new(PieceKind::Z)));
        assert_eq!(after.score, 0);
    }

    #[test]
    fn test_tick_lock_clears_line() {
        let mut source = only(PieceKind::O);
        let mut board = Board::new();
        let gray = PieceKind::J.color();
        board.fill_row_except(19, gray, &[0, 1]);
        board.set(5, 18, Some(gray));
        let resting = Tetromino::new_at(PieceKind::O, 0, 18);
        let state = GameState::playing_with(board, resting, Tetromino::new(PieceKind::O));

        let after = state.apply(Command::Tick, &mut source);
        assert_eq!(after.score, 100);
        assert_eq!(after.last_event.unwrap().lines_cleared, 1);
        // Row 18 (the O's top half plus one cell) shifted into row 19.
        assert!(after.board.is_occupied(0, 19));
        assert!(after.board.is_occupied(1, 19));
        assert!(after.board.is_occupied(5, 19));
        assert_eq!(after.board.filled_count(), 3);
    }

    #[test]
    fn test_lock_into_blocked_spawn_ends_game() {
        let mut source = only(PieceKind::O);
        let mut board = Board::new();
        // Column stack under the spawn area, one row short of the top.
        for y in 1..BOARD_HEIGHT as i8 {
            board.set(4, y, Some(PieceKind::L.color()));
        }
        let current = Tetromino::new_at(PieceKind::O, 0, 0);
        let state = GameState::playing_with(board, current, Tetromino::new(PieceKind::O));

        let after = state.apply(Command::HardDrop, &mut source);
        assert_eq!(after.phase(), Phase::GameOver);
        assert!(after.is_game_over());
        assert!(!after.is_playing());
        assert!(after.current.is_none());
        assert!(after.next.is_none());
        assert!(after.last_event.unwrap().game_over);
        // Board and score from the final lock are kept for display.
        assert!(after.board.is_occupied(0, 19));
        assert_eq!(after.score, 2 * 18);

        let frozen = after.clone();
        assert_eq!(after.apply(Command::Tick, &mut source), frozen);
    }

    #[test]
    fn test_ghost_y_tracks_drop_distance() {
        let mut source = only(PieceKind::O);
        let state = GameState::new().apply(Command::Start, &mut source);
        assert_eq!(state.ghost_y(), Some(BOARD_HEIGHT as i8 - 2));
        assert_eq!(GameState::new().ghost_y(), None);
    }

    #[test]
    fn test_hard_drop_from_far_above_board() {
        let mut source = only(PieceKind::O);
        let state = GameState::playing_with(
            Board::new(),
            Tetromino::new_at(PieceKind::O, 4, -120),
            Tetromino::new(PieceKind::O),
        );
        assert_eq!(state.ghost_y(), Some(18));

        let after = state.apply(Command::HardDrop, &mut source);
        assert_eq!(after.score, 2 * 138);
        assert!(after.board.is_occupied(4, 18));
        assert!(after.board.is_occupied(5, 19));
        assert_eq!(after.board.filled_count(), 4);
    }

    #[test]
    fn test_game_host_reports_changes() {
        let mut game = Game::with_source(only(PieceKind::O));
        assert!(!game.apply_action(Command::Tick));
        game.start();
        assert_eq!(game.state().phase(), Phase::Playing);
        assert!(game.tick());
        for _ in 0..20 {
            game.apply_action(Command::MoveLeft);
        }
        assert!(!game.apply_action(Command::MoveLeft));
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let mut a = Game::new(2024);
        let mut b = Game::new(2024);
        a.start();
        b.start();
        for _ in 0..30 {
            a.apply_action(Command::HardDrop);
            b.apply_action(Command::HardDrop);
        }
        assert_eq!(a.state(), b.state());
    }
}
