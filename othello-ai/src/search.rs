//! 搜索引擎
//!
//! 固定深度的 Negamax + Alpha-Beta 剪枝

use othello_core::{Board, Cell, Color, MoveRules};
use serde::{Deserialize, Serialize};

use crate::evaluate::Evaluator;

/// 默认搜索深度（层）
pub const DEFAULT_SEARCH_DEPTH: u8 = 6;

/// 评分的无穷大，绝对值大于任何终局分（±64000）和位置分
pub const INFINITY: i32 = 1_000_000;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 简单：depth=2
    Easy,
    /// 中等：depth=4
    Medium,
    /// 困难：depth=6
    #[default]
    Hard,
}

/// AI 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub max_depth: u8,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                difficulty,
                max_depth: 2,
            },
            Difficulty::Medium => Self {
                difficulty,
                max_depth: 4,
            },
            Difficulty::Hard => Self {
                difficulty,
                max_depth: DEFAULT_SEARCH_DEPTH,
            },
        }
    }

    /// 指定深度（难度标记保持默认）
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Hard)
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            nodes_searched: 0,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    /// 当前配置
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 为 `color` 搜索最佳落点，无合法走法时返回 None
    ///
    /// 按行优先顺序遍历根节点走法，只有严格更高的分数才会替换当前最佳，
    /// 同分时保留先扫描到的走法。调用方的棋盘不会被修改。
    pub fn search(&mut self, board: &Board, color: Color) -> Option<Cell> {
        self.nodes_searched = 0;

        let moves = MoveRules::generate_legal(board, color);
        if moves.is_empty() {
            tracing::debug!("{} has no legal move", color);
            return None;
        }

        let mut best_move = moves[0].cell;
        let mut best_score = -INFINITY;

        for mv in &moves {
            let mut next = *board;
            next.play(mv);

            let score = -self.negamax(&next, color.opponent(), -INFINITY, -best_score, 1);

            if score > best_score {
                best_score = score;
                best_move = mv.cell;
            }
        }

        tracing::debug!(
            "{} best move {} score {} depth {} nodes {}",
            color,
            best_move,
            best_score,
            self.config.max_depth,
            self.nodes_searched
        );

        Some(best_move)
    }

    /// Negamax 搜索，返回 `color` 视角的分数
    ///
    /// `ply` 为已展开的层数，达到 `max_depth` 后用位置分截断。
    fn negamax(&mut self, board: &Board, color: Color, mut alpha: i32, beta: i32, ply: u8) -> i32 {
        self.nodes_searched += 1;

        if MoveRules::is_terminal(board) {
            return Evaluator::terminal_score(board, color);
        }

        if ply >= self.config.max_depth {
            return Evaluator::positional_score(board, color);
        }

        let mut best = -INFINITY;
        let mut has_move = false;

        for cell in Cell::all() {
            let Some(mv) = MoveRules::find_move(board, cell, color) else {
                continue;
            };
            has_move = true;

            let mut next = *board;
            next.play(&mv);

            let score = -self.negamax(&next, color.opponent(), -beta, -alpha, ply + 1);

            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                break; // Beta 剪枝
            }
        }

        if !has_move {
            // 非终局且本方无子可下：对方必有走法，跳过本方，不消耗深度
            return -self.negamax(board, color.opponent(), -beta, -alpha, ply);
        }

        best
    }

    /// 获取搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
