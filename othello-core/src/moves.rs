//! 走法生成和验证

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::DIRECTIONS;
use crate::error::{OthelloError, Result};
use crate::stone::{Cell, Color};

/// 走法
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 落子位置
    pub cell: Cell,
    /// 落子方
    pub color: Color,
    /// 被翻转的棋子（按方向顺序拼接）
    pub flipped: Vec<Cell>,
}

impl Move {
    /// 被翻转棋子的掩码
    pub fn flip_mask(&self) -> u64 {
        self.flipped.iter().fold(0, |mask, cell| mask | cell.bit())
    }

    /// 翻转数量
    pub fn flip_count(&self) -> usize {
        self.flipped.len()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} (+{})", self.color, self.cell, self.flipped.len())
    }
}

/// 规则判定
pub struct MoveRules;

impl MoveRules {
    /// 计算在 `cell` 落下 `color` 时被夹住的对方棋子
    ///
    /// 结果为空表示非法（包括格子已被占用）。
    pub fn captured_cells(board: &Board, cell: Cell, color: Color) -> Vec<Cell> {
        let mut captured = Vec::new();
        if !cell.is_valid() || !board.is_empty(cell) {
            return captured;
        }

        for (dx, dy) in DIRECTIONS {
            Self::collect_ray(board, cell, dx, dy, color, &mut captured);
        }

        captured
    }

    /// 沿单个方向收集，只有遇到己方棋子时才保留本方向的结果
    fn collect_ray(board: &Board, from: Cell, dx: i8, dy: i8, color: Color, out: &mut Vec<Cell>) {
        let start = out.len();
        let mut current = from;

        while let Some(next) = current.offset(dx, dy) {
            match board.color_at(next) {
                Some(c) if c == color => return,
                Some(_) => out.push(next),
                None => break,
            }
            current = next;
        }

        // 出界或遇到空格：本方向不成立
        out.truncate(start);
    }

    /// 查找指定格子的合法走法
    pub fn find_move(board: &Board, cell: Cell, color: Color) -> Option<Move> {
        let flipped = Self::captured_cells(board, cell, color);
        if flipped.is_empty() {
            None
        } else {
            Some(Move {
                cell,
                color,
                flipped,
            })
        }
    }

    /// 按行优先顺序生成所有合法走法
    pub fn generate_legal(board: &Board, color: Color) -> Vec<Move> {
        Cell::all()
            .filter_map(|cell| Self::find_move(board, cell, color))
            .collect()
    }

    /// 按行优先顺序列出所有可落子的格子
    pub fn legal_moves(board: &Board, color: Color) -> Vec<Cell> {
        Cell::all()
            .filter(|&cell| !Self::captured_cells(board, cell, color).is_empty())
            .collect()
    }

    /// 指定颜色是否还有合法走法
    pub fn has_legal_move(board: &Board, color: Color) -> bool {
        Cell::all().any(|cell| !Self::captured_cells(board, cell, color).is_empty())
    }

    /// 双方都无子可下时棋局结束
    pub fn is_terminal(board: &Board) -> bool {
        !Self::has_legal_move(board, Color::Black) && !Self::has_legal_move(board, Color::White)
    }

    /// 落子：翻转所有被夹住的棋子并在 `cell` 放子
    ///
    /// 非法走法返回 `IllegalMove`，原棋盘不受影响。
    pub fn apply_move(board: &Board, cell: Cell, color: Color) -> Result<Board> {
        let captured = Self::captured_cells(board, cell, color);
        if captured.is_empty() {
            return Err(OthelloError::IllegalMove {
                x: cell.x,
                y: cell.y,
                color,
            });
        }

        let mut next = *board;
        for flipped in captured {
            next.toggle(flipped)?;
        }
        next.place(cell, color)?;

        tracing::trace!("{} played {}", color, cell);
        Ok(next)
    }
}
