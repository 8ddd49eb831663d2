//! 对局控制
//!
//! 持有当前棋盘、走子方和对局阶段，负责轮换与跳过。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{OthelloError, Result};
use crate::moves::MoveRules;
use crate::stone::{Cell, Color};

/// 游戏结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// 黑方胜
    BlackWin,
    /// 白方胜
    WhiteWin,
    /// 和棋
    Draw,
}

impl GameResult {
    /// 按子数判定结果
    pub fn from_board(board: &Board) -> Self {
        let (black, white) = board.score();
        if black > white {
            GameResult::BlackWin
        } else if white > black {
            GameResult::WhiteWin
        } else {
            GameResult::Draw
        }
    }

    /// 胜方（和棋为 None）
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::BlackWin => Some(Color::Black),
            GameResult::WhiteWin => Some(Color::White),
            GameResult::Draw => None,
        }
    }
}

/// 对局阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// 进行中
    Playing,
    /// 已结束
    Finished(GameResult),
}

/// 一步棋之后的轮换结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// 轮到对方
    Next(Color),
    /// 对方无子可下被跳过，仍由同一方继续
    Passed { skipped: Color },
    /// 双方都无子可下
    GameOver(GameResult),
}

/// 对局
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    turn: Color,
    phase: GamePhase,
}

impl GameSession {
    /// 新对局：初始棋盘，黑方先走
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            turn: Color::Black,
            phase: GamePhase::Playing,
        }
    }

    /// 从任意局面开始
    ///
    /// 终局局面直接进入 `Finished`；走子方无子可下时交给对方。
    pub fn from_position(board: Board, turn: Color) -> Self {
        let mut session = Self {
            board,
            turn,
            phase: GamePhase::Playing,
        };
        if MoveRules::is_terminal(&board) {
            session.phase = GamePhase::Finished(GameResult::from_board(&board));
        } else if !MoveRules::has_legal_move(&board, turn) {
            session.turn = turn.opponent();
        }
        session
    }

    /// 重新开始
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// 当前棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 当前走子方
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// 对局阶段
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// 是否已结束
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Finished(_))
    }

    /// 结果（未结束为 None）
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            GamePhase::Finished(result) => Some(result),
            GamePhase::Playing => None,
        }
    }

    /// (黑子数, 白子数)
    pub fn score(&self) -> (u32, u32) {
        self.board.score()
    }

    /// 当前走子方的合法落点
    pub fn legal_moves(&self) -> Vec<Cell> {
        if self.is_finished() {
            return Vec::new();
        }
        MoveRules::legal_moves(&self.board, self.turn)
    }

    /// 当前走子方在 `cell` 落子
    ///
    /// 非法走法返回错误且不改变任何状态，调用方应让同一方重新选择。
    pub fn play(&mut self, cell: Cell) -> Result<TurnOutcome> {
        if self.is_finished() {
            return Err(OthelloError::GameOver);
        }

        self.board = MoveRules::apply_move(&self.board, cell, self.turn)?;

        let outcome = if MoveRules::is_terminal(&self.board) {
            let result = GameResult::from_board(&self.board);
            self.phase = GamePhase::Finished(result);
            tracing::debug!("game over: {:?} {:?}", result, self.board.score());
            TurnOutcome::GameOver(result)
        } else if MoveRules::has_legal_move(&self.board, self.turn.opponent()) {
            self.turn = self.turn.opponent();
            TurnOutcome::Next(self.turn)
        } else {
            tracing::debug!("{} has no legal move, skipped", self.turn.opponent());
            TurnOutcome::Passed {
                skipped: self.turn.opponent(),
            }
        };

        Ok(outcome)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
