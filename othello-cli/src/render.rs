//! 文本棋盘渲染

use othello_core::{Board, Cell, Color, GameResult, BOARD_SIZE};

/// 合法落点的提示符号
const HINT_CHAR: char = '*';
/// 空格子
const EMPTY_CHAR: char = '.';

/// 渲染棋盘，`hints` 中的格子标记为可落子
///
/// 列标 a-h 对应 y，行号 1-8 对应 x。
pub fn render_board(board: &Board, hints: &[Cell]) -> String {
    let mut out = String::from("  a b c d e f g h\n");

    for x in 0..BOARD_SIZE as u8 {
        out.push_str(&(x + 1).to_string());
        for y in 0..BOARD_SIZE as u8 {
            let cell = Cell::new_unchecked(x, y);
            let c = match board.color_at(cell) {
                Some(color) => color.display_char(),
                None if hints.contains(&cell) => HINT_CHAR,
                None => EMPTY_CHAR,
            };
            out.push(' ');
            out.push(c);
        }
        out.push('\n');
    }

    out
}

/// 比分行
pub fn score_line(board: &Board) -> String {
    let (black, white) = board.score();
    format!(
        "{} 黑 {}  {} 白 {}",
        Color::Black.display_char(),
        black,
        Color::White.display_char(),
        white
    )
}

/// 颜色名称
pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "黑方",
        Color::White => "白方",
    }
}

/// 终局提示
pub fn result_message(result: GameResult) -> String {
    match result.winner() {
        Some(color) => format!("游戏结束，{}胜", color_name(color)),
        None => "游戏结束，平局".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::{legal_moves, new_game};

    #[test]
    fn test_render_initial() {
        let board = new_game();
        let text = render_board(&board, &[]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[4], "4 . . . ● ○ . . .");
        assert_eq!(lines[5], "5 . . . ○ ● . . .");
    }

    #[test]
    fn test_render_hints() {
        let board = new_game();
        let hints = legal_moves(&board, Color::Black);
        let text = render_board(&board, &hints);
        assert_eq!(text.matches(HINT_CHAR).count(), 4);
        // (2,4) = e3
        assert_eq!(text.lines().nth(3), Some("3 . . . . * . . ."));
    }

    #[test]
    fn test_messages() {
        assert_eq!(score_line(&new_game()), "● 黑 2  ○ 白 2");
        assert_eq!(result_message(GameResult::BlackWin), "游戏结束，黑方胜");
        assert_eq!(result_message(GameResult::Draw), "游戏结束，平局");
    }
}
