use crate::logic::board::{Board, PieceType, BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    NoPieceAtSource,
    NotDiagonal,
    DestinationOccupied,
    WrongDirection,
    NothingToCapture,
    TooFar,
    NotYourTurn,
    GameOver,
}

/// Checks a single move against the rule set: diagonal geometry, man
/// directionality, empty destination, and an enemy piece on the jumped
/// square for captures. Kings are exempt from directionality; a move is
/// one square (simple) or two squares (capture), never more.
pub fn validate_move(
    board: &Board,
    from: (usize, usize),
    to: (usize, usize),
) -> Result<(), MoveError> {
    let (from_row, from_col) = from;
    let (to_row, to_col) = to;
    if from_row >= BOARD_SIZE || from_col >= BOARD_SIZE || to_row >= BOARD_SIZE || to_col >= BOARD_SIZE
    {
        return Err(MoveError::OutOfBounds);
    }

    let piece = board
        .get_piece(from_row, from_col)
        .ok_or(MoveError::NoPieceAtSource)?;

    let row_delta = to_row as isize - from_row as isize;
    let col_delta = to_col as isize - from_col as isize;
    if row_delta == 0 || row_delta.abs() != col_delta.abs() {
        return Err(MoveError::NotDiagonal);
    }
    if board.get_piece(to_row, to_col).is_some() {
        return Err(MoveError::DestinationOccupied);
    }

    let is_king = piece.piece_type == PieceType::King;
    let forward = piece.color.forward();

    match row_delta.abs() {
        1 => {
            if !is_king && row_delta != forward {
                return Err(MoveError::WrongDirection);
            }
            Ok(())
        }
        2 => {
            let mid = board
                .get_piece((from_row + to_row) / 2, (from_col + to_col) / 2)
                .ok_or(MoveError::NothingToCapture)?;
            if mid.color == piece.color {
                return Err(MoveError::NothingToCapture);
            }
            if !is_king && row_delta != 2 * forward {
                return Err(MoveError::WrongDirection);
            }
            Ok(())
        }
        _ => Err(MoveError::TooFar),
    }
}

/// Boolean view of [`validate_move`].
pub fn is_legal(board: &Board, from: (usize, usize), to: (usize, usize)) -> bool {
    validate_move(board, from, to).is_ok()
}
