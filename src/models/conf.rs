use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfError {
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("配置格式错误: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type ConfResult<T> = Result<T, ConfError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 空行是否清除当前角色。默认 false：角色上下文一直保留到下一个角色行
    pub reset_character_on_blank_line: bool,
    /// 是否检测对白中的强调样式
    pub detect_emphasis: bool,
    /// 是否解析开头的标题页
    pub parse_title_page: bool,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            reset_character_on_blank_line: false,
            detect_emphasis: true,
            parse_title_page: true,
        }
    }
}

impl Conf {
    pub fn from_json_str(json: &str) -> ConfResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 从 JSON 文件读取配置，缺少的字段使用默认值
    pub fn load(path: impl AsRef<Path>) -> ConfResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
