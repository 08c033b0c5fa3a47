use crate::engine::Move;
use crate::logic::board::{Board, Color};
use crate::logic::generator::MoveGenerator;
use crate::logic::rules::{validate_move, MoveError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won(Color),
}

/// Terminal detection: a side with no pieces or no legal moves has lost.
/// Immobility is a loss for the stuck side, not a draw. Piece counts are
/// checked before mobility, Dark before Light.
pub fn outcome(board: &Board) -> GameStatus {
    if board.piece_count(Color::Dark) == 0 {
        return GameStatus::Won(Color::Light);
    }
    if board.piece_count(Color::Light) == 0 {
        return GameStatus::Won(Color::Dark);
    }

    let generator = MoveGenerator::new();
    if !generator.has_legal_moves(board, Color::Dark) {
        return GameStatus::Won(Color::Light);
    }
    if !generator.has_legal_moves(board, Color::Light) {
        return GameStatus::Won(Color::Dark);
    }
    GameStatus::Playing
}

/// Live game session. The session owns the one mutable board; the engine
/// only ever works on copies of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub status: GameStatus,
    pub last_move: Option<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::Dark,
            status: GameStatus::Playing,
            last_move: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Validates and applies a move for the side to move, then flips the
    /// turn and re-derives the game status.
    pub fn make_move(&mut self, from: (usize, usize), to: (usize, usize)) -> Result<(), MoveError> {
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameOver);
        }
        let piece = self
            .board
            .get_piece(from.0, from.1)
            .ok_or(MoveError::NoPieceAtSource)?;
        if piece.color != self.turn {
            return Err(MoveError::NotYourTurn);
        }
        validate_move(&self.board, from, to)?;

        let mv = Move::new(from, to);
        self.board.apply_move(&mv);
        log::debug!("{:?} played {:?}", self.turn, mv);

        self.turn = self.turn.opposite();
        self.last_move = Some(mv);
        self.status = outcome(&self.board);
        Ok(())
    }
}
