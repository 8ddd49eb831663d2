//! 坐标记法
//!
//! 列 y 用字母 a-h 表示，行 x 用数字 1-8 表示，例如 (2, 3) 记为 `d3`。

use crate::error::{OthelloError, Result};
use crate::stone::Cell;

/// 坐标记法
pub struct Notation;

impl Notation {
    /// 格子名称
    pub fn cell_name(cell: Cell) -> String {
        format!("{}{}", (b'a' + cell.y) as char, cell.x + 1)
    }

    /// 解析格子名称（不区分大小写，允许首尾空白）
    pub fn parse_cell(text: &str) -> Result<Cell> {
        let text = text.trim();
        let mut chars = text.chars();

        let (col, row) = match (chars.next(), chars.next(), chars.next()) {
            (Some(col), Some(row), None) => (col.to_ascii_lowercase(), row),
            _ => {
                return Err(OthelloError::InvalidNotation {
                    reason: format!("Expected a cell like d3, got '{}'", text),
                })
            }
        };

        let y = match col {
            'a'..='z' => (col as u8 - b'a') as i8,
            _ => {
                return Err(OthelloError::InvalidNotation {
                    reason: format!("Invalid column: {}", col),
                })
            }
        };
        let x = match row.to_digit(10) {
            Some(digit) => digit as i8 - 1,
            None => {
                return Err(OthelloError::InvalidNotation {
                    reason: format!("Invalid row: {}", row),
                })
            }
        };

        if x < 0 || y < 0 {
            return Err(OthelloError::InvalidPosition { x, y });
        }
        Cell::new(x as u8, y as u8).ok_or(OthelloError::InvalidPosition { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_name() {
        assert_eq!(Notation::cell_name(Cell::new_unchecked(0, 0)), "a1");
        assert_eq!(Notation::cell_name(Cell::new_unchecked(2, 3)), "d3");
        assert_eq!(Notation::cell_name(Cell::new_unchecked(7, 7)), "h8");
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(Notation::parse_cell("d3"), Ok(Cell::new_unchecked(2, 3)));
        assert_eq!(Notation::parse_cell(" H8\n"), Ok(Cell::new_unchecked(7, 7)));
        assert_eq!(Notation::parse_cell("a1"), Ok(Cell::new_unchecked(0, 0)));
    }

    #[test]
    fn test_parse_cell_out_of_range() {
        assert_eq!(
            Notation::parse_cell("i1"),
            Err(OthelloError::InvalidPosition { x: 0, y: 8 })
        );
        assert_eq!(
            Notation::parse_cell("a9"),
            Err(OthelloError::InvalidPosition { x: 8, y: 0 })
        );
        assert_eq!(
            Notation::parse_cell("a0"),
            Err(OthelloError::InvalidPosition { x: -1, y: 0 })
        );
    }

    #[test]
    fn test_parse_cell_malformed() {
        assert!(matches!(
            Notation::parse_cell(""),
            Err(OthelloError::InvalidNotation { .. })
        ));
        assert!(matches!(
            Notation::parse_cell("d34"),
            Err(OthelloError::InvalidNotation { .. })
        ));
        assert!(matches!(
            Notation::parse_cell("3d"),
            Err(OthelloError::InvalidNotation { .. })
        ));
        assert!(matches!(
            Notation::parse_cell("dx"),
            Err(OthelloError::InvalidNotation { .. })
        ));
    }
}
