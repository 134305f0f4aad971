pub mod fountain_constants;

pub use fountain_constants::FountainConstants;

use crate::models::TextRange;

/// 源文本中的一行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 行号，从 1 开始
    pub number: usize,
    /// 行首在全文中的字节偏移
    pub offset: usize,
    /// 行内容，不含换行符（CRLF 的 `\r` 也去掉）
    pub text: &'a str,
}

impl SourceLine<'_> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(self.offset, self.text.len())
    }
}

/// 按 `\n` 切分全文，每行之后偏移前进 `行长 + 1`
pub fn source_lines(script: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let mut offset = 0;
    script.split('\n').enumerate().map(move |(i, raw)| {
        let line = SourceLine {
            number: i + 1,
            offset,
            text: raw.strip_suffix('\r').unwrap_or(raw),
        };
        offset += raw.len() + 1;
        line
    })
}
