//! 终端对局设置
//!
//! 从 JSON 文件读取，所有字段都有默认值

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use othello_ai::{AiConfig, Difficulty};
use othello_core::Color;
use serde::{Deserialize, Serialize};

/// AI 落子前的默认等待时间（毫秒）
pub const DEFAULT_AI_DELAY_MS: u64 = 1000;

/// 终端对局设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    /// 玩家执子颜色，`null` 表示双方都由 AI 控制
    pub human_color: Option<Color>,
    /// AI 难度
    pub difficulty: Difficulty,
    /// 覆盖难度预设的搜索深度
    pub depth: Option<u8>,
    /// AI 落子前的等待时间（毫秒）
    pub ai_delay_ms: u64,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            human_color: Some(Color::Black),
            difficulty: Difficulty::Hard,
            depth: None,
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
        }
    }
}

impl CliSettings {
    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取设置文件失败: {:?}", path))?;
        Self::from_json(&content).with_context(|| format!("解析设置文件失败: {:?}", path))
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 命令行参数中有路径则加载，否则使用默认设置
    pub fn from_args(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(Path::new(path)),
            None => Ok(Self::default()),
        }
    }

    /// 对应的 AI 配置
    pub fn ai_config(&self) -> AiConfig {
        let mut config = AiConfig::from_difficulty(self.difficulty);
        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        config
    }

    /// 该颜色是否由 AI 控制
    pub fn is_ai(&self, color: Color) -> bool {
        self.human_color != Some(color)
    }
}
