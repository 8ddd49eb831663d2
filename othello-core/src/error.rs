//! 错误类型定义

use thiserror::Error;

use crate::stone::Color;

/// 黑白棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OthelloError {
    /// 无效的位置
    #[error("Invalid position: ({x}, {y})")]
    InvalidPosition { x: i8, y: i8 },

    /// 非法落子（格子已占用或无子可翻）
    #[error("Illegal move for {color}: ({x}, {y})")]
    IllegalMove { x: u8, y: u8, color: Color },

    /// 在已有棋子的格子上放子（仅在吃子路径之外出现）
    #[error("Cell already occupied: ({x}, {y})")]
    CellOccupied { x: u8, y: u8 },

    /// 翻转空格子
    #[error("No stone at position ({x}, {y})")]
    EmptyCell { x: u8, y: u8 },

    /// 无效的局面/坐标文本
    #[error("Invalid notation: {reason}")]
    InvalidNotation { reason: String },

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, OthelloError>;
