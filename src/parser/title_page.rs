use std::collections::BTreeMap;

use crate::utils::FountainConstants;

/// 标题页: 键 -> 值
pub type TitlePage = BTreeMap<String, String>;

/// 标题页模式下对一行的判定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleLine {
    /// `key: value`
    Entry(String, String),
    /// 单独的 `:`，结束标题页且不产生元素
    End,
    /// 不是标题页内容，结束标题页，本行按正文分类
    NotTitle,
}

/// 标题页解析状态，结束后不会再进入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlePageState {
    /// 还没遇到任何非空行
    Pending,
    InProgress,
    Done,
}

/// 按第一个冒号拆分 `key: value`
pub fn parse_title_line(line: &str) -> TitleLine {
    let trimmed = line.trim();
    if trimmed == FountainConstants::TITLE_PAGE_END {
        return TitleLine::End;
    }

    match trimmed.split_once(':') {
        Some((key, value)) => TitleLine::Entry(key.trim().to_string(), value.trim().to_string()),
        None => TitleLine::NotTitle,
    }
}
