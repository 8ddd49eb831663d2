//! FEN 风格的局面文本格式
//!
//! 格式：`<棋盘> <走子方>`
//!
//! 棋盘由 8 行组成，以 `/` 分隔，依次为 x = 0..7；每行按 y = 0..7 列出
//! `B`（黑）、`W`（白），连续空格用数字表示。走子方为 `b` 或 `w`，省略时为黑方。
//!
//! 示例（初始局面）：
//! `8/8/8/3BW3/3WB3/8/8/8 b`

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::error::{OthelloError, Result};
use crate::stone::{Cell, Color};

/// FEN 格式处理
pub struct Fen;

impl Fen {
    /// 解析 FEN 字符串为 (棋盘, 走子方)
    pub fn parse(fen: &str) -> Result<(Board, Color)> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(OthelloError::InvalidNotation {
                reason: "Empty FEN string".to_string(),
            });
        }

        let board = Self::parse_board(parts[0])?;

        let side = match parts.get(1) {
            Some(side) => {
                let mut chars = side.chars();
                match (chars.next().and_then(Color::from_fen_char), chars.next()) {
                    (Some(color), None) => color,
                    _ => {
                        return Err(OthelloError::InvalidNotation {
                            reason: format!("Invalid side to move: {}", side),
                        })
                    }
                }
            }
            None => Color::Black,
        };

        Ok((board, side))
    }

    /// 解析棋盘部分
    fn parse_board(board_str: &str) -> Result<Board> {
        let mut board = Board::empty();
        let rows: Vec<&str> = board_str.split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(OthelloError::InvalidNotation {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        for (x, row) in rows.iter().enumerate() {
            let mut y = 0usize;

            for c in row.chars() {
                if y >= BOARD_SIZE {
                    return Err(OthelloError::InvalidNotation {
                        reason: format!("Row {} has too many columns", x),
                    });
                }

                if let Some(empty_count) = c.to_digit(10) {
                    y += empty_count as usize;
                } else if let Some(color) = Self::stone_from_char(c) {
                    board.set(Cell::new_unchecked(x as u8, y as u8), Some(color));
                    y += 1;
                } else {
                    return Err(OthelloError::InvalidNotation {
                        reason: format!("Invalid stone character: {}", c),
                    });
                }
            }

            if y != BOARD_SIZE {
                return Err(OthelloError::InvalidNotation {
                    reason: format!("Row {} has {} columns, expected {}", x, y, BOARD_SIZE),
                });
            }
        }

        Ok(board)
    }

    fn stone_from_char(c: char) -> Option<Color> {
        match c {
            'B' => Some(Color::Black),
            'W' => Some(Color::White),
            _ => None,
        }
    }

    fn stone_to_char(color: Color) -> char {
        match color {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }

    /// 将局面转换为 FEN 字符串
    pub fn to_string(board: &Board, side: Color) -> String {
        format!("{} {}", Self::board_to_string(board), side.to_fen_char())
    }

    /// 将棋盘转换为 FEN 棋盘部分
    pub fn board_to_string(board: &Board) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);

        for x in 0..BOARD_SIZE as u8 {
            let mut row = String::new();
            let mut empty_count = 0;

            for y in 0..BOARD_SIZE as u8 {
                if let Some(color) = board.color_at(Cell::new_unchecked(x, y)) {
                    if empty_count > 0 {
                        row.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    row.push(Self::stone_to_char(color));
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                row.push_str(&empty_count.to_string());
            }

            rows.push(row);
        }

        rows.join("/")
    }
}
