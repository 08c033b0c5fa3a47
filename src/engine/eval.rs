use crate::engine::config::EngineConfig;
use crate::engine::Evaluator;
use crate::logic::board::{Board, Color};
use std::sync::Arc;

/// Pure material heuristic: men and kings summed per side at the
/// configured values, perspective minus opponent. No positional terms.
pub struct MaterialEvaluator {
    config: Arc<EngineConfig>,
}

impl MaterialEvaluator {
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board, perspective: Color) -> f32 {
        let material = |color: Color| {
            f32::from(board.man_count(color)) * self.config.val_man
                + f32::from(board.king_count(color)) * self.config.val_king
        };
        material(perspective) - material(perspective.opposite())
    }
}
