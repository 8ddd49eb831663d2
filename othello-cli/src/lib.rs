//! 黑白棋终端对局
//!
//! 包含:
//! - 对局设置（JSON）
//! - 文本棋盘渲染
//! - 人机/机机对局循环

pub mod app;
pub mod render;
pub mod settings;

pub use app::{compute_ai_move, App, Command};
pub use settings::CliSettings;
