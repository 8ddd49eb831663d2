//! 棋盘状态
//!
//! 两个 64 位掩码分别记录黑子和白子，复制整个棋盘只需拷贝两个机器字。

use serde::{Deserialize, Serialize};

use crate::constants::CELL_COUNT;
use crate::error::{OthelloError, Result};
use crate::moves::Move;
use crate::stone::{Cell, Color};

/// 棋盘
///
/// 不变式：`black & white == 0`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self { black: 0, white: 0 }
    }

    /// 创建初始棋盘：黑子 (3,3)(4,4)，白子 (3,4)(4,3)
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.set(Cell::new_unchecked(3, 3), Some(Color::Black));
        board.set(Cell::new_unchecked(4, 4), Some(Color::Black));
        board.set(Cell::new_unchecked(3, 4), Some(Color::White));
        board.set(Cell::new_unchecked(4, 3), Some(Color::White));
        board
    }

    /// 获取指定格子的棋子颜色
    pub fn color_at(&self, cell: Cell) -> Option<Color> {
        let bit = cell.bit();
        if self.black & bit != 0 {
            Some(Color::Black)
        } else if self.white & bit != 0 {
            Some(Color::White)
        } else {
            None
        }
    }

    /// 格子是否为空
    pub fn is_empty(&self, cell: Cell) -> bool {
        (self.black | self.white) & cell.bit() == 0
    }

    /// 在空格子上放子
    pub fn place(&mut self, cell: Cell, color: Color) -> Result<()> {
        if !self.is_empty(cell) {
            return Err(OthelloError::CellOccupied {
                x: cell.x,
                y: cell.y,
            });
        }
        self.set(cell, Some(color));
        Ok(())
    }

    /// 翻转已有棋子的颜色，返回翻转后的颜色
    pub fn toggle(&mut self, cell: Cell) -> Result<Color> {
        let current = self.color_at(cell).ok_or(OthelloError::EmptyCell {
            x: cell.x,
            y: cell.y,
        })?;
        let flipped = current.opponent();
        self.set(cell, Some(flipped));
        Ok(flipped)
    }

    /// 设置指定格子（不检查规则），`None` 表示清空
    pub(crate) fn set(&mut self, cell: Cell, color: Option<Color>) {
        let bit = cell.bit();
        self.black &= !bit;
        self.white &= !bit;
        match color {
            Some(Color::Black) => self.black |= bit,
            Some(Color::White) => self.white |= bit,
            None => {}
        }
    }

    /// 执行一个已计算好的走法：落子并翻转被夹住的棋子
    ///
    /// 只做掩码运算，搜索时每个节点都会调用。
    pub fn play(&mut self, mv: &Move) {
        let changed = mv.cell.bit() | mv.flip_mask();
        match mv.color {
            Color::Black => {
                self.black |= changed;
                self.white &= !changed;
            }
            Color::White => {
                self.white |= changed;
                self.black &= !changed;
            }
        }
    }

    /// 指定颜色的棋子掩码
    pub fn mask(&self, color: Color) -> u64 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// 已占用格子的掩码
    pub fn occupied(&self) -> u64 {
        self.black | self.white
    }

    /// 统计指定颜色的棋子数
    pub fn count_stones(&self, color: Color) -> u32 {
        self.mask(color).count_ones()
    }

    /// 统计空格子数
    pub fn empty_count(&self) -> u32 {
        CELL_COUNT as u32 - self.occupied().count_ones()
    }

    /// 按行优先顺序获取指定颜色的所有棋子
    pub fn stones(&self, color: Color) -> impl Iterator<Item = Cell> {
        let mask = self.mask(color);
        Cell::all().filter(move |cell| mask & cell.bit() != 0)
    }

    /// (黑子数, 白子数)
    pub fn score(&self) -> (u32, u32) {
        (
            self.count_stones(Color::Black),
            self.count_stones(Color::White),
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let board = Board::initial();

        assert_eq!(board.color_at(Cell::new_unchecked(3, 3)), Some(Color::Black));
        assert_eq!(board.color_at(Cell::new_unchecked(4, 4)), Some(Color::Black));
        assert_eq!(board.color_at(Cell::new_unchecked(3, 4)), Some(Color::White));
        assert_eq!(board.color_at(Cell::new_unchecked(4, 3)), Some(Color::White));
        assert_eq!(board.color_at(Cell::new_unchecked(0, 0)), None);

        assert_eq!(board.score(), (2, 2));
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn test_place() {
        let mut board = Board::empty();
        let cell = Cell::new_unchecked(2, 5);

        board.place(cell, Color::White).unwrap();
        assert_eq!(board.color_at(cell), Some(Color::White));
        assert!(!board.is_empty(cell));

        // 已占用的格子不能再放子
        let err = board.place(cell, Color::Black).unwrap_err();
        assert_eq!(err, OthelloError::CellOccupied { x: 2, y: 5 });
        assert_eq!(board.color_at(cell), Some(Color::White));
    }

    #[test]
    fn test_toggle() {
        let mut board = Board::initial();
        let cell = Cell::new_unchecked(3, 3);

        assert_eq!(board.toggle(cell), Ok(Color::White));
        assert_eq!(board.color_at(cell), Some(Color::White));
        assert_eq!(board.score(), (1, 3));

        let empty = Cell::new_unchecked(0, 0);
        assert_eq!(
            board.toggle(empty),
            Err(OthelloError::EmptyCell { x: 0, y: 0 })
        );
    }

    #[test]
    fn test_masks_disjoint() {
        let mut board = Board::initial();
        board.set(Cell::new_unchecked(3, 3), Some(Color::White));
        board.set(Cell::new_unchecked(0, 7), Some(Color::Black));
        board.set(Cell::new_unchecked(0, 7), Some(Color::White));
        assert_eq!(board.mask(Color::Black) & board.mask(Color::White), 0);
        assert_eq!(
            board.count_stones(Color::Black) + board.count_stones(Color::White) + board.empty_count(),
            64
        );
    }

    #[test]
    fn test_copy_does_not_alias() {
        let original = Board::initial();
        let mut copy = original;
        copy.place(Cell::new_unchecked(0, 0), Color::Black).unwrap();
        copy.toggle(Cell::new_unchecked(3, 4)).unwrap();

        assert_eq!(original, Board::initial());
        assert_ne!(copy, original);
    }

    #[test]
    fn test_stones_row_major() {
        let board = Board::initial();
        let black: Vec<Cell> = board.stones(Color::Black).collect();
        assert_eq!(
            black,
            vec![Cell::new_unchecked(3, 3), Cell::new_unchecked(4, 4)]
        );
    }
}
