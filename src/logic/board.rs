use crate::engine::Move;
use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;

pub const BOARD_SIZE: usize = 8;
const SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Dark => 0,
            Self::Light => 1,
        }
    }

    /// Row delta a man of this color moves along. Dark men advance toward
    /// higher row indices, Light men toward lower ones.
    pub const fn forward(self) -> isize {
        match self {
            Self::Dark => 1,
            Self::Light => -1,
        }
    }

    /// Farthest row for this color; a man ending a move here becomes a king.
    pub const fn crowning_row(self) -> usize {
        match self {
            Self::Dark => BOARD_SIZE - 1,
            Self::Light => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceType {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    // Mailbox for O(1) lookup, row-major from row 0 (Dark's home edge).
    #[serde(with = "BigArray")]
    grid: [Option<Piece>; SQUARES],

    // Piece counts per color, kept in sync by add_piece/remove_piece so
    // evaluation and terminal detection never rescan the grid.
    men: [u8; 2],
    kings: [u8; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self {
            grid: [None; SQUARES],
            men: [0; 2],
            kings: [0; 2],
        };
        board.setup_initial_position();
        board
    }

    /// Three rows of men per side, dark squares only ((row+col) odd),
    /// Dark on rows 0-2 and Light on rows 5-7.
    fn setup_initial_position(&mut self) {
        for row in 0..3 {
            for col in 0..BOARD_SIZE {
                if (row + col) % 2 != 0 {
                    self.add_piece(
                        row,
                        col,
                        Piece {
                            piece_type: PieceType::Man,
                            color: Color::Dark,
                        },
                    );
                }
            }
        }
        for row in BOARD_SIZE - 3..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if (row + col) % 2 != 0 {
                    self.add_piece(
                        row,
                        col,
                        Piece {
                            piece_type: PieceType::Man,
                            color: Color::Light,
                        },
                    );
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.grid = [None; SQUARES];
        self.men = [0; 2];
        self.kings = [0; 2];
    }

    #[must_use]
    pub const fn square_index(row: usize, col: usize) -> usize {
        row * BOARD_SIZE + col
    }

    #[must_use]
    pub fn get_piece(&self, row: usize, col: usize) -> Option<Piece> {
        self.grid[Self::square_index(row, col)]
    }

    pub fn add_piece(&mut self, row: usize, col: usize, piece: Piece) {
        self.grid[Self::square_index(row, col)] = Some(piece);
        match piece.piece_type {
            PieceType::Man => self.men[piece.color.index()] += 1,
            PieceType::King => self.kings[piece.color.index()] += 1,
        }
    }

    fn remove_piece(&mut self, row: usize, col: usize, piece: Piece) {
        self.grid[Self::square_index(row, col)] = None;
        match piece.piece_type {
            PieceType::Man => self.men[piece.color.index()] -= 1,
            PieceType::King => self.kings[piece.color.index()] -= 1,
        }
    }

    pub const fn man_count(&self, color: Color) -> u8 {
        self.men[color.index()]
    }

    pub const fn king_count(&self, color: Color) -> u8 {
        self.kings[color.index()]
    }

    pub const fn piece_count(&self, color: Color) -> u8 {
        self.men[color.index()] + self.kings[color.index()]
    }

    /// Applies `mv` in place: relocates the piece, clears the jumped square
    /// on a capture, and crowns a man reaching its farthest row.
    ///
    /// Legality is the caller's contract; moves must come from
    /// `legal_moves`/`is_legal`.
    pub fn apply_move(&mut self, mv: &Move) {
        debug_assert!(
            crate::logic::rules::is_legal(self, mv.from_square(), mv.to_square()),
            "apply_move called with an illegal move: {mv:?}"
        );

        let (from_row, from_col) = mv.from_square();
        let (to_row, to_col) = mv.to_square();

        let piece = self
            .get_piece(from_row, from_col)
            .expect("No piece at source in apply_move");
        self.remove_piece(from_row, from_col, piece);

        if mv.is_capture() {
            let (mid_row, mid_col) = mv.midpoint();
            if let Some(captured) = self.get_piece(mid_row, mid_col) {
                self.remove_piece(mid_row, mid_col, captured);
            }
        }

        let landed = if piece.piece_type == PieceType::Man && to_row == piece.color.crowning_row() {
            Piece {
                piece_type: PieceType::King,
                color: piece.color,
            }
        } else {
            piece
        };
        self.add_piece(to_row, to_col, landed);
    }

    /// Copying form of [`apply_move`](Self::apply_move), used by the search
    /// so recursive branches never alias the caller's board.
    #[must_use]
    pub fn apply_move_copy(&self, mv: &Move) -> Self {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }
}
