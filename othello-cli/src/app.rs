//! 终端对局循环
//!
//! 玩家从输入读取坐标，AI 在阻塞线程池中计算，不阻塞输入任务

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use othello_ai::{AiConfig, AiEngine};
use othello_core::{Board, Cell, Color, GameResult, GameSession, Notation, TurnOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::render::{color_name, render_board, result_message, score_line};
use crate::settings::CliSettings;

const HELP: &str = "输入坐标落子（如 d3），hint 提示，new 重新开始，quit 退出";

/// 玩家输入的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 落子
    Play(Cell),
    /// 让 AI 给出建议
    Hint,
    /// 重新开始
    NewGame,
    /// 帮助
    Help,
    /// 退出
    Quit,
}

impl Command {
    /// 解析一行输入
    pub fn parse(line: &str) -> Result<Self> {
        let command = match line.trim().to_ascii_lowercase().as_str() {
            "hint" => Command::Hint,
            "new" => Command::NewGame,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => Command::Play(Notation::parse_cell(other)?),
        };
        Ok(command)
    }
}

/// 玩家回合的结果
enum HumanAction {
    Play(Cell),
    Restarted,
    Quit,
}

/// 在阻塞线程池中运行搜索
pub async fn compute_ai_move(board: Board, color: Color, config: AiConfig) -> Result<Option<Cell>> {
    let started_at = Instant::now();
    let depth = config.max_depth;

    let cell = tokio::task::spawn_blocking(move || {
        let mut engine = AiEngine::new(config);
        engine.search(&board, color)
    })
    .await
    .context("AI 计算任务异常退出")?;

    tracing::info!(
        "AI({}) 深度 {} 落子 {:?}，耗时 {:?}",
        color,
        depth,
        cell.map(Notation::cell_name),
        started_at.elapsed()
    );
    Ok(cell)
}

/// 终端对局
pub struct App<R, W> {
    settings: CliSettings,
    session: GameSession,
    input: R,
    output: W,
}

impl<R, W> App<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(settings: CliSettings, input: R, output: W) -> Self {
        Self {
            settings,
            session: GameSession::new(),
            input,
            output,
        }
    }

    /// 当前对局
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// 运行到终局；玩家退出或输入结束时返回 None
    pub async fn run(&mut self) -> Result<Option<GameResult>> {
        self.show_board().await?;

        loop {
            if let Some(result) = self.session.result() {
                self.say(&result_message(result)).await?;
                return Ok(Some(result));
            }

            let color = self.session.turn();
            let cell = if self.settings.is_ai(color) {
                self.ai_turn(color).await?
            } else {
                match self.human_turn(color).await? {
                    HumanAction::Play(cell) => cell,
                    HumanAction::Restarted => continue,
                    HumanAction::Quit => return Ok(None),
                }
            };

            let outcome = self.session.play(cell)?;
            self.say(&format!("{}落子 {}", color_name(color), Notation::cell_name(cell)))
                .await?;
            self.show_board().await?;

            if let TurnOutcome::Passed { skipped } = outcome {
                tracing::info!("{} 无子可下，跳过", skipped);
                self.say(&format!("{}无子可下，跳过", color_name(skipped))).await?;
            }
        }
    }

    async fn ai_turn(&mut self, color: Color) -> Result<Cell> {
        if self.settings.ai_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.settings.ai_delay_ms)).await;
        }

        let board = *self.session.board();
        match compute_ai_move(board, color, self.settings.ai_config()).await? {
            Some(cell) => Ok(cell),
            None => bail!("{} 应有合法走法，但 AI 未找到", color),
        }
    }

    /// 读取玩家输入直到得到一个合法落点
    async fn human_turn(&mut self, color: Color) -> Result<HumanAction> {
        loop {
            self.say(&format!("{}请落子：", color_name(color))).await?;

            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                return Ok(HumanAction::Quit);
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    tracing::warn!("无法解析输入 {:?}: {}", line.trim(), err);
                    self.say(&format!("{}。{}", err, HELP)).await?;
                    continue;
                }
            };

            match command {
                Command::Play(cell) => {
                    if self.session.legal_moves().contains(&cell) {
                        return Ok(HumanAction::Play(cell));
                    }
                    tracing::warn!("非法落子 {}", Notation::cell_name(cell));
                    self.say(&format!("{} 不能落子", Notation::cell_name(cell))).await?;
                }
                Command::Hint => {
                    let board = *self.session.board();
                    if let Some(cell) = compute_ai_move(board, color, self.settings.ai_config()).await? {
                        self.say(&format!("建议落子 {}", Notation::cell_name(cell))).await?;
                    }
                }
                Command::NewGame => {
                    self.session.reset();
                    tracing::info!("重新开始");
                    self.show_board().await?;
                    return Ok(HumanAction::Restarted);
                }
                Command::Help => self.say(HELP).await?,
                Command::Quit => return Ok(HumanAction::Quit),
            }
        }
    }

    async fn show_board(&mut self) -> Result<()> {
        let hints = if self.settings.is_ai(self.session.turn()) {
            Vec::new()
        } else {
            self.session.legal_moves()
        };
        let text = format!(
            "{}{}",
            render_board(self.session.board(), &hints),
            score_line(self.session.board())
        );
        self.say(&text).await
    }

    async fn say(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }
}
