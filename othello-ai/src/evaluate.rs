//! 棋局评估函数

use othello_core::{Board, Cell, Color, BOARD_SIZE};

/// 终局子数差的放大倍数，保证必胜/必败压过任何位置分
pub const TERMINAL_SCALE: i32 = 1000;

/// 位置分值表，索引为 [x][y]
///
/// 角永远不会被翻转，分值最高；与角相邻的格子容易把角让给对方。
const WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -12,  0, -1, -1,  0, -12, 100],
    [-12, -15, -3, -3, -3, -3, -15, -12],
    [  0,  -3,  0, -1, -1,  0,  -3,   0],
    [ -1,  -3, -1, -1, -1, -1,  -3,  -1],
    [ -1,  -3, -1, -1, -1, -1,  -3,  -1],
    [  0,  -3,  0, -1, -1,  0,  -3,   0],
    [-12, -15, -3, -3, -3, -3, -15, -12],
    [100, -12,  0, -1, -1,  0, -12, 100],
];

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 格子的位置分
    #[inline]
    pub fn weight(cell: Cell) -> i32 {
        WEIGHTS[cell.x as usize][cell.y as usize]
    }

    /// 位置分（`color` 视角）：己方棋子加分，对方棋子减分
    pub fn positional_score(board: &Board, color: Color) -> i32 {
        let own: i32 = board.stones(color).map(Self::weight).sum();
        let other: i32 = board.stones(color.opponent()).map(Self::weight).sum();
        own - other
    }

    /// 子数差（`color` 视角）
    pub fn material_score(board: &Board, color: Color) -> i32 {
        board.count_stones(color) as i32 - board.count_stones(color.opponent()) as i32
    }

    /// 终局评估：子数差乘以放大倍数
    pub fn terminal_score(board: &Board, color: Color) -> i32 {
        Self::material_score(board, color) * TERMINAL_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::Fen;

    #[test]
    fn test_initial_evaluation() {
        let board = Board::initial();
        // 初始局面对称
        assert_eq!(Evaluator::positional_score(&board, Color::Black), 0);
        assert_eq!(Evaluator::material_score(&board, Color::Black), 0);
    }

    #[test]
    fn test_weights_symmetry() {
        for x in 0..BOARD_SIZE as u8 {
            for y in 0..BOARD_SIZE as u8 {
                let w = Evaluator::weight(Cell::new_unchecked(x, y));
                assert_eq!(w, Evaluator::weight(Cell::new_unchecked(7 - x, y)));
                assert_eq!(w, Evaluator::weight(Cell::new_unchecked(x, 7 - y)));
                assert_eq!(w, Evaluator::weight(Cell::new_unchecked(7 - x, 7 - y)));
            }
        }
    }

    #[test]
    fn test_corner_dominates() {
        let corner = Evaluator::weight(Cell::new_unchecked(0, 0));
        for cell in Cell::all() {
            if (cell.x == 0 || cell.x == 7) && (cell.y == 0 || cell.y == 7) {
                assert_eq!(Evaluator::weight(cell), corner);
            } else {
                assert!(Evaluator::weight(cell) < corner);
                assert!(Evaluator::weight(cell) <= 0);
            }
        }
        assert_eq!(Evaluator::weight(Cell::new_unchecked(1, 1)), -15);
        assert_eq!(Evaluator::weight(Cell::new_unchecked(0, 1)), -12);
    }

    #[test]
    fn test_positional_antisymmetric() {
        let (board, _) = Fen::parse("B6W/1B6/8/3BW3/3WB3/8/6W1/W6B b").unwrap();
        let black = Evaluator::positional_score(&board, Color::Black);
        let white = Evaluator::positional_score(&board, Color::White);
        assert_eq!(black, -white);
        // 黑: 100 -15 -1 -1 100；白: 100 -1 -1 -15 100
        assert_eq!(black, 0);
    }

    #[test]
    fn test_corner_advantage() {
        let (board, _) = Fen::parse("B7/8/8/3BW3/3WB3/8/8/8 b").unwrap();
        assert_eq!(Evaluator::positional_score(&board, Color::Black), 100);
        assert_eq!(Evaluator::positional_score(&board, Color::White), -100);
    }

    #[test]
    fn test_terminal_score() {
        let (board, _) = Fen::parse("BBB5/8/8/8/8/8/8/W7 b").unwrap();
        assert_eq!(Evaluator::material_score(&board, Color::Black), 2);
        assert_eq!(Evaluator::terminal_score(&board, Color::Black), 2000);
        assert_eq!(Evaluator::terminal_score(&board, Color::White), -2000);
    }
}
