//! Checkers engine core: board model, single-hop move rules with forced
//! promotion, terminal detection, and a material-driven alpha-beta search
//! behind a three-level difficulty contract.
//!
//! The crate is a pure in-memory library with no display, input, or timing
//! dependencies; a front end drives it through [`GameState`] and
//! [`choose_engine_move`].

pub mod engine;
pub mod logic;

pub use engine::{choose_engine_move, Difficulty, Move, SearchStats};
pub use logic::board::{Board, Color, Piece, PieceType};
pub use logic::game::{outcome, GameState, GameStatus};
pub use logic::generator::MoveGenerator;
pub use logic::rules::{is_legal, validate_move, MoveError};
