//! JSON observation format used by the headless driver.
//!
//! Every emitted line is one object with a `type` tag: either an
//! `"observation"` carrying the full session state or an `"error"` explaining
//! why an input line was ignored. Board cells are `#rrggbb` strings or `null`,
//! row 0 first.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::{Game, GameState, PieceSource, SimpleRng, Tetromino};
use crate::types::{Command, LockEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnknownCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    pub msg_type: ObservationType,
    pub seq: u64,
    /// Settled cells only; the falling piece is reported separately.
    pub board: Vec<Vec<Option<String>>>,
    pub current_piece: Option<PieceView>,
    pub next_piece: Option<PieceView>,
    pub ghost_y: Option<i8>,
    pub score: u32,
    pub is_playing: bool,
    pub is_game_over: bool,
    pub last_event: Option<LockEventView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceView {
    pub kind: String,
    pub color: String,
    pub x: i8,
    pub y: i8,
    /// Absolute `[x, y]` of each occupied cell, row-major
    pub cells: Vec<[i8; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockEventView {
    pub drop_score: u32,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub code: ErrorCode,
    pub message: String,
}

impl From<&Tetromino> for PieceView {
    fn from(piece: &Tetromino) -> Self {
        Self {
            kind: piece.kind.as_str().to_string(),
            color: piece.color().to_hex(),
            x: piece.x,
            y: piece.y,
            cells: piece.board_cells().map(|(x, y)| [x, y]).collect(),
        }
    }
}

impl From<LockEvent> for LockEventView {
    fn from(ev: LockEvent) -> Self {
        Self {
            drop_score: ev.drop_score,
            lines_cleared: ev.lines_cleared,
            line_clear_score: ev.line_clear_score,
            game_over: ev.game_over,
        }
    }
}

pub fn build_observation(seq: u64, state: &GameState) -> ObservationMessage {
    let board = state
        .board()
        .to_cells()
        .into_iter()
        .map(|row| row.into_iter().map(|c| c.map(|c| c.to_hex())).collect())
        .collect();

    ObservationMessage {
        msg_type: ObservationType::Observation,
        seq,
        board,
        current_piece: state.current().as_ref().map(PieceView::from),
        next_piece: state.next().as_ref().map(PieceView::from),
        ghost_y: state.ghost_y(),
        score: state.score(),
        is_playing: state.is_playing(),
        is_game_over: state.is_game_over(),
        last_event: state.last_event().map(LockEventView::from),
    }
}

pub fn create_error(seq: u64, code: ErrorCode, message: &str) -> ErrorMessage {
    ErrorMessage {
        msg_type: ErrorType::Error,
        seq,
        code,
        message: message.to_string(),
    }
}

/// Line-oriented driver: one command name in, one JSON line out.
pub struct HeadlessSession<S: PieceSource = SimpleRng> {
    game: Game<S>,
    seq: u64,
}

impl HeadlessSession<SimpleRng> {
    pub fn new(seed: u32) -> Self {
        Self::with_game(Game::new(seed))
    }
}

impl<S: PieceSource> HeadlessSession<S> {
    pub fn with_game(game: Game<S>) -> Self {
        Self { game, seq: 0 }
    }

    pub fn game(&self) -> &Game<S> {
        &self.game
    }

    /// Observation of the current state, serialized.
    pub fn observe(&mut self) -> Result<String> {
        let msg = build_observation(self.next_seq(), self.game.state());
        Ok(serde_json::to_string(&msg)?)
    }

    /// Apply one input line.
    ///
    /// Blank lines and `#` comments produce no output. Unknown command names
    /// produce an error line and leave the session untouched.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<String>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        match Command::from_str(line) {
            Some(cmd) => {
                self.game.apply_action(cmd);
                self.observe().map(Some)
            }
            None => {
                let msg = create_error(
                    self.next_seq(),
                    ErrorCode::UnknownCommand,
                    &format!("unknown command: {}", line),
                );
                Ok(Some(serde_json::to_string(&msg)?))
            }
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}
