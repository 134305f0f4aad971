use crate::models::Emphasis;
use crate::utils::fountain_constants::{BOLD, BOLD_ITALIC, ITALIC};

/// 去掉强调标记，保留标记内的文字
///
/// 先处理 `**...**` / `__...__`，再处理 `*...*`，最后 `_..._`，
/// 避免双星号被单星号规则拆开。
pub fn strip_emphasis_markers(text: &str) -> String {
    let text = BOLD_ITALIC.replace_all(text, "${1}${2}");
    let text = BOLD.replace_all(&text, "${1}");
    ITALIC.replace_all(&text, "${1}").into_owned()
}

/// 检测一行中的强调样式，按 粗斜体 -> 粗体 -> 斜体 顺序，第一个匹配的生效
///
/// 注意 `**文字**` 会被识别为粗斜体。
pub fn detect_emphasis(text: &str) -> Option<Emphasis> {
    if BOLD_ITALIC.is_match(text) {
        Some(Emphasis::BoldItalic)
    } else if BOLD.is_match(text) {
        Some(Emphasis::Bold)
    } else if ITALIC.is_match(text) {
        Some(Emphasis::Italic)
    } else {
        None
    }
}
