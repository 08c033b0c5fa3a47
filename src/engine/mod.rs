use crate::logic::board::{Board, Color};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod config;
pub mod eval;
pub mod move_list;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Move {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
}

impl Move {
    pub fn new(from: (usize, usize), to: (usize, usize)) -> Self {
        Self {
            from_row: from.0 as u8,
            from_col: from.1 as u8,
            to_row: to.0 as u8,
            to_col: to.1 as u8,
        }
    }

    pub const fn from_square(&self) -> (usize, usize) {
        (self.from_row as usize, self.from_col as usize)
    }

    pub const fn to_square(&self) -> (usize, usize) {
        (self.to_row as usize, self.to_col as usize)
    }

    /// A two-square diagonal hop; the jumped square is removed on apply.
    pub const fn is_capture(&self) -> bool {
        self.from_row.abs_diff(self.to_row) == 2
    }

    /// The jumped square of a capture move.
    pub const fn midpoint(&self) -> (usize, usize) {
        (
            (self.from_row + self.to_row) as usize / 2,
            (self.from_col + self.to_col) as usize / 2,
        )
    }
}

/// Engine strength as exposed to the caller: easy plays uniformly at
/// random, medium and hard search to the configured depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
    pub time_ms: u64,
}

pub trait Evaluator {
    fn evaluate(&self, board: &Board, perspective: Color) -> f32;
}

pub trait Searcher {
    fn choose_move(
        &mut self,
        board: &Board,
        color: Color,
        difficulty: Difficulty,
    ) -> Option<(Move, SearchStats)>;
}

/// One-shot engine invocation with the default configuration. Returns
/// `None` when `color` has no legal moves, which the caller must treat as
/// a loss for that side.
pub fn choose_engine_move(board: &Board, color: Color, difficulty: Difficulty) -> Option<Move> {
    let mut engine = search::AlphaBetaEngine::new(Arc::new(config::EngineConfig::default()));
    engine
        .choose_move(board, color, difficulty)
        .map(|(mv, _)| mv)
}
