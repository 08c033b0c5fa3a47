use crate::engine::config::EngineConfig;
use crate::engine::eval::MaterialEvaluator;
use crate::engine::{Difficulty, Evaluator, Move, SearchStats, Searcher};
use crate::logic::board::{Board, Color};
use crate::logic::game::{outcome, GameStatus};
use crate::logic::generator::MoveGenerator;
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Instant;

/// Depth-limited minimax with alpha-beta pruning over independent board
/// copies. Sequential and synchronous; every recursive branch works on its
/// own copy, so nothing aliases the live game board.
pub struct AlphaBetaEngine {
    config: Arc<EngineConfig>,
    evaluator: MaterialEvaluator,
    generator: MoveGenerator,
    nodes_searched: u32,
}

impl AlphaBetaEngine {
    #[must_use]
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            evaluator: MaterialEvaluator::new(config.clone()),
            config,
            generator: MoveGenerator::new(),
            nodes_searched: 0,
        }
    }

    pub fn update_config(&mut self, config: Arc<EngineConfig>) {
        self.evaluator = MaterialEvaluator::new(config.clone());
        self.config = config;
    }

    /// Returns the best reachable score for `engine_color` and the move
    /// that starts the line. `best_move` is `None` only when the position
    /// is terminal, the depth is exhausted, or the mover has no moves; a
    /// moveless mover is scored by material, not as a forced loss.
    ///
    /// Ties keep the first move in enumeration order, so pruning never
    /// changes the returned score or move.
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: f32,
        mut beta: f32,
        maximizing: bool,
        engine_color: Color,
    ) -> (f32, Option<Move>) {
        self.nodes_searched += 1;

        if depth == 0 || outcome(board) != GameStatus::Playing {
            return (self.evaluator.evaluate(board, engine_color), None);
        }

        let mover = if maximizing {
            engine_color
        } else {
            engine_color.opposite()
        };
        let moves = self.generator.generate_moves(board, mover);
        if moves.is_empty() {
            return (self.evaluator.evaluate(board, engine_color), None);
        }

        let mut best_move = None;
        if maximizing {
            let mut max_eval = f32::NEG_INFINITY;
            for mv in moves {
                let next = board.apply_move_copy(&mv);
                let (score, _) = self.minimax(&next, depth - 1, alpha, beta, false, engine_color);
                if score > max_eval {
                    max_eval = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            (max_eval, best_move)
        } else {
            let mut min_eval = f32::INFINITY;
            for mv in moves {
                let next = board.apply_move_copy(&mv);
                let (score, _) = self.minimax(&next, depth - 1, alpha, beta, true, engine_color);
                if score < min_eval {
                    min_eval = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            (min_eval, best_move)
        }
    }
}

impl Searcher for AlphaBetaEngine {
    fn choose_move(
        &mut self,
        board: &Board,
        color: Color,
        difficulty: Difficulty,
    ) -> Option<(Move, SearchStats)> {
        let moves = self.generator.generate_moves(board, color);
        if moves.is_empty() {
            return None;
        }

        self.nodes_searched = 0;
        let start = Instant::now();

        let (chosen, depth) = match difficulty {
            Difficulty::Easy => (
                moves.as_slice().choose(&mut rand::thread_rng()).copied(),
                0,
            ),
            Difficulty::Medium => {
                let depth = self.config.depth_medium;
                let (_, mv) =
                    self.minimax(board, depth, f32::NEG_INFINITY, f32::INFINITY, true, color);
                (mv, depth)
            }
            Difficulty::Hard => {
                let depth = self.config.depth_hard;
                let (_, mv) =
                    self.minimax(board, depth, f32::NEG_INFINITY, f32::INFINITY, true, color);
                (mv, depth)
            }
        };

        let stats = SearchStats {
            depth,
            nodes: self.nodes_searched,
            time_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        chosen.map(|mv| {
            log::debug!(
                "{color:?} {difficulty:?} chose {mv:?} (depth={}, nodes={}, time={}ms)",
                stats.depth,
                stats.nodes,
                stats.time_ms
            );
            (mv, stats)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::{Piece, PieceType};
    use crate::logic::rules::is_legal;

    fn engine() -> AlphaBetaEngine {
        AlphaBetaEngine::new(Arc::new(EngineConfig::default()))
    }

    fn man(color: Color) -> Piece {
        Piece {
            piece_type: PieceType::Man,
            color,
        }
    }

    /// Exhaustive minimax with no pruning, for score-equivalence checks.
    fn plain_minimax(
        board: &Board,
        depth: u8,
        maximizing: bool,
        engine_color: Color,
        evaluator: &MaterialEvaluator,
        generator: &MoveGenerator,
    ) -> f32 {
        if depth == 0 || outcome(board) != GameStatus::Playing {
            return evaluator.evaluate(board, engine_color);
        }
        let mover = if maximizing {
            engine_color
        } else {
            engine_color.opposite()
        };
        let moves = generator.generate_moves(board, mover);
        if moves.is_empty() {
            return evaluator.evaluate(board, engine_color);
        }

        let scores = moves.into_iter().map(|mv| {
            plain_minimax(
                &board.apply_move_copy(&mv),
                depth - 1,
                !maximizing,
                engine_color,
                evaluator,
                generator,
            )
        });
        if maximizing {
            scores.fold(f32::NEG_INFINITY, f32::max)
        } else {
            scores.fold(f32::INFINITY, f32::min)
        }
    }

    #[test]
    fn test_pruning_never_changes_the_score() {
        let evaluator = MaterialEvaluator::new(Arc::new(EngineConfig::default()));
        let generator = MoveGenerator::new();

        // Opening position and a tactical middle position.
        let mut tactical = Board::new();
        tactical.clear();
        tactical.add_piece(2, 3, man(Color::Dark));
        tactical.add_piece(3, 4, man(Color::Light));
        tactical.add_piece(5, 2, man(Color::Light));
        tactical.add_piece(4, 5, man(Color::Dark));

        for board in [Board::new(), tactical] {
            for color in [Color::Dark, Color::Light] {
                for depth in [1, 2, 3, 4] {
                    let mut engine = engine();
                    let (pruned, _) = engine.minimax(
                        &board,
                        depth,
                        f32::NEG_INFINITY,
                        f32::INFINITY,
                        true,
                        color,
                    );
                    let full =
                        plain_minimax(&board, depth, true, color, &evaluator, &generator);
                    assert_eq!(
                        pruned, full,
                        "score diverged for {color:?} at depth {depth}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_medium_takes_the_winning_capture() {
        let mut board = Board::new();
        board.clear();
        board.add_piece(2, 3, man(Color::Dark));
        board.add_piece(3, 4, man(Color::Light));

        let (mv, stats) = engine()
            .choose_move(&board, Color::Dark, Difficulty::Medium)
            .unwrap();
        assert_eq!(mv, Move::new((2, 3), (4, 5)));
        assert_eq!(stats.depth, 3);
        assert!(stats.nodes > 0);
    }

    #[test]
    fn test_no_moves_means_no_search() {
        let mut board = Board::new();
        board.clear();
        board.add_piece(7, 0, man(Color::Dark));

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(engine().choose_move(&board, Color::Dark, difficulty).is_none());
        }
    }

    #[test]
    fn test_chosen_move_is_always_legal() {
        let board = Board::new();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let (mv, _) = engine().choose_move(&board, Color::Dark, difficulty).unwrap();
            assert!(
                is_legal(&board, mv.from_square(), mv.to_square()),
                "{difficulty:?} produced illegal {mv:?}"
            );
        }
    }

    #[test]
    fn test_degenerate_terminal_scores_by_material() {
        // Light has pieces but no moves; the position is scored by
        // material, not as a forced win or loss.
        let mut board = Board::new();
        board.clear();
        board.add_piece(7, 0, man(Color::Light));
        board.add_piece(6, 1, man(Color::Dark));
        board.add_piece(5, 2, man(Color::Dark));

        let mut engine = engine();
        let (score, _) = engine.minimax(
            &board,
            1,
            f32::NEG_INFINITY,
            f32::INFINITY,
            false,
            Color::Dark,
        );
        assert_eq!(score, 1.0);
    }
}
