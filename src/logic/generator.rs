use crate::engine::move_list::MoveList;
use crate::engine::Move;
use crate::logic::board::{Board, Color, BOARD_SIZE};
use crate::logic::rules::is_legal;

// Probe order is fixed so enumeration is deterministic: search tie-breaks
// and the random difficulty's pool both depend on it.
const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub const fn new() -> Self {
        Self
    }

    /// Enumerates every legal move for `turn`: each owned square in
    /// row-major order, each diagonal direction at distance 1 then 2.
    /// Captures are listed alongside simple moves, never preferred.
    pub fn generate_moves(&self, board: &Board, turn: Color) -> MoveList {
        let mut moves = MoveList::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.owns_square(board, turn, row, col) {
                    self.generate_square_moves(board, (row, col), &mut moves);
                }
            }
        }
        moves
    }

    fn generate_square_moves(&self, board: &Board, from: (usize, usize), moves: &mut MoveList) {
        for &(row_dir, col_dir) in &DIAGONALS {
            for dist in 1..=2 {
                if let Some(to) = Self::offset(from, row_dir * dist, col_dir * dist) {
                    if is_legal(board, from, to) {
                        moves.push(Move::new(from, to));
                    }
                }
            }
        }
    }

    /// Early-exit form used by terminal detection.
    pub fn has_legal_moves(&self, board: &Board, turn: Color) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !self.owns_square(board, turn, row, col) {
                    continue;
                }
                for &(row_dir, col_dir) in &DIAGONALS {
                    for dist in 1..=2 {
                        if let Some(to) = Self::offset((row, col), row_dir * dist, col_dir * dist) {
                            if is_legal(board, (row, col), to) {
                                return true;
                            }
                        }
                    }
                }
            }
        }
        false
    }

    fn owns_square(&self, board: &Board, turn: Color, row: usize, col: usize) -> bool {
        board
            .get_piece(row, col)
            .is_some_and(|piece| piece.color == turn)
    }

    fn offset(from: (usize, usize), row_delta: isize, col_delta: isize) -> Option<(usize, usize)> {
        let row = usize::try_from(from.0 as isize + row_delta).ok()?;
        let col = usize::try_from(from.1 as isize + col_delta).ok()?;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some((row, col))
    }
}
