//! 棋子颜色与格子坐标

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};

/// 棋子颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// 黑方（先手）
    Black,
    /// 白方（后手）
    White,
}

impl Color {
    /// 获取对方颜色
    pub fn opponent(&self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// 获取 FEN 走子方字符
    pub fn to_fen_char(&self) -> char {
        match self {
            Color::Black => 'b',
            Color::White => 'w',
        }
    }

    /// 从 FEN 字符解析（大小写均可）
    pub fn from_fen_char(c: char) -> Option<Color> {
        match c {
            'b' | 'B' => Some(Color::Black),
            'w' | 'W' => Some(Color::White),
            _ => None,
        }
    }

    /// 终端显示用的棋子符号
    pub fn display_char(&self) -> char {
        match self {
            Color::Black => '●',
            Color::White => '○',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// 棋盘格子
///
/// `x` 为行，`y` 为列，位索引为 `x * 8 + y`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// 行 (0-7)
    pub x: u8,
    /// 列 (0-7)
    pub y: u8,
}

impl Cell {
    /// 创建新格子
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if (x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// 创建新格子（不检查边界，内部使用）
    pub const fn new_unchecked(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// 检查格子是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.x as usize) < BOARD_SIZE && (self.y as usize) < BOARD_SIZE
    }

    /// 获取偏移后的格子
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Cell> {
        let new_x = self.x as i8 + dx;
        let new_y = self.y as i8 + dy;
        if new_x >= 0 && (new_x as usize) < BOARD_SIZE && new_y >= 0 && (new_y as usize) < BOARD_SIZE {
            Some(Cell {
                x: new_x as u8,
                y: new_y as u8,
            })
        } else {
            None
        }
    }

    /// 转换为位索引
    pub fn to_index(&self) -> usize {
        self.x as usize * BOARD_SIZE + self.y as usize
    }

    /// 从位索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Cell {
                x: (index / BOARD_SIZE) as u8,
                y: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    /// 对应的单比特掩码
    #[inline]
    pub fn bit(&self) -> u64 {
        1u64 << self.to_index()
    }

    /// 按行优先顺序（x 升序，再 y 升序）遍历全部 64 个格子
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).map(|index| Cell {
            x: (index / BOARD_SIZE) as u8,
            y: (index % BOARD_SIZE) as u8,
        })
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opponent() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
    }

    #[test]
    fn test_color_fen_char() {
        assert_eq!(Color::Black.to_fen_char(), 'b');
        assert_eq!(Color::from_fen_char('W'), Some(Color::White));
        assert_eq!(Color::from_fen_char('x'), None);
    }

    #[test]
    fn test_cell_valid() {
        assert!(Cell::new(0, 0).is_some());
        assert!(Cell::new(7, 7).is_some());
        assert!(Cell::new(8, 0).is_none());
        assert!(Cell::new(0, 8).is_none());
    }

    #[test]
    fn test_cell_index() {
        let cell = Cell::new_unchecked(3, 4);
        assert_eq!(cell.to_index(), 28);
        assert_eq!(Cell::from_index(28), Some(cell));
        assert_eq!(Cell::from_index(64), None);
        assert_eq!(cell.bit(), 1u64 << 28);
    }

    #[test]
    fn test_cell_offset_edges() {
        let corner = Cell::new_unchecked(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Cell::new_unchecked(1, 1)));

        let far = Cell::new_unchecked(7, 7);
        assert_eq!(far.offset(1, 0), None);
    }

    #[test]
    fn test_all_row_major() {
        let cells: Vec<Cell> = Cell::all().collect();
        assert_eq!(cells.len(), 64);
        assert_eq!(cells[0], Cell::new_unchecked(0, 0));
        assert_eq!(cells[1], Cell::new_unchecked(0, 1));
        assert_eq!(cells[8], Cell::new_unchecked(1, 0));
        assert!(cells.windows(2).all(|w| w[0] < w[1]));
    }
}
