//! 黑白棋 AI 引擎
//!
//! 包含:
//! - 位置权重 + 子数差评估函数
//! - 固定深度 Negamax + Alpha-Beta 搜索

mod evaluate;
mod search;

pub use evaluate::{Evaluator, TERMINAL_SCALE};
pub use search::{AiConfig, AiEngine, Difficulty, DEFAULT_SEARCH_DEPTH, INFINITY};

use othello_core::{Board, Cell, Color};

/// 以固定深度为 `color` 选择落点，无合法走法时返回 None
pub fn choose_move(board: &Board, color: Color, depth: u8) -> Option<Cell> {
    AiEngine::new(AiConfig::with_depth(depth)).search(board, color)
}
