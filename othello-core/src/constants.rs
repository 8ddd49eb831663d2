//! 棋盘常量定义

/// 棋盘边长（行数与列数相同）
pub const BOARD_SIZE: usize = 8;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 八个射线方向 (dx, dy)，吃子判定按此顺序拼接结果
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// 初始局面 FEN
pub const INITIAL_FEN: &str = "8/8/8/3BW3/3WB3/8/8/8 b";
