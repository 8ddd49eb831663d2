//! 黑白棋核心库
//!
//! 包含:
//! - 格子、颜色、位掩码棋盘
//! - 吃子判定与合法走法
//! - FEN 风格局面文本与坐标记法
//! - 对局控制（轮换、跳过、终局）

mod board;
mod constants;
mod error;
mod fen;
mod moves;
mod notation;
mod session;
mod stone;

pub use board::Board;
pub use constants::*;
pub use error::{OthelloError, Result};
pub use fen::Fen;
pub use moves::{Move, MoveRules};
pub use notation::Notation;
pub use session::{GamePhase, GameResult, GameSession, TurnOutcome};
pub use stone::{Cell, Color};

/// 新对局的初始棋盘
pub fn new_game() -> Board {
    Board::initial()
}

/// 指定颜色的合法落点（行优先顺序）
pub fn legal_moves(board: &Board, color: Color) -> Vec<Cell> {
    MoveRules::legal_moves(board, color)
}

/// 落子并返回新棋盘，非法走法返回 `IllegalMove`
pub fn apply_move(board: &Board, cell: Cell, color: Color) -> Result<Board> {
    MoveRules::apply_move(board, cell, color)
}

/// 双方都无子可下
pub fn is_terminal(board: &Board) -> bool {
    MoveRules::is_terminal(board)
}

/// (黑子数, 白子数)
pub fn score(board: &Board) -> (u32, u32) {
    board.score()
}
