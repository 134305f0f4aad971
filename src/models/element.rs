use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 元素类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    TitlePage,
    SceneHeading,
    ForceSceneHeading,
    Action,
    ForceAction,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
    Section,
    Synopsis,
    Note,
    Centered,
    PageBreak,
    Lyrics,
    /// 行内强调标注，不作为行类型输出
    Emphasis,
    /// 角色行的修饰，由 `is_dual_dialogue` 表示
    DualDialogue,
    /// 注释掉的内容
    Boneyard,
    Unknown,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::TitlePage => "title_page",
            ElementKind::SceneHeading => "scene_heading",
            ElementKind::ForceSceneHeading => "force_scene_heading",
            ElementKind::Action => "action",
            ElementKind::ForceAction => "force_action",
            ElementKind::Character => "character",
            ElementKind::Dialogue => "dialogue",
            ElementKind::Parenthetical => "parenthetical",
            ElementKind::Transition => "transition",
            ElementKind::Section => "section",
            ElementKind::Synopsis => "synopsis",
            ElementKind::Note => "note",
            ElementKind::Centered => "centered",
            ElementKind::PageBreak => "page_break",
            ElementKind::Lyrics => "lyrics",
            ElementKind::Emphasis => "emphasis",
            ElementKind::DualDialogue => "dual_dialogue",
            ElementKind::Boneyard => "boneyard",
            ElementKind::Unknown => "unknown",
        }
    }

    /// 是否是场景标题（包括强制场景标题）
    pub fn is_scene_heading(&self) -> bool {
        matches!(self, ElementKind::SceneHeading | ElementKind::ForceSceneHeading)
    }
}

/// 对白中的强调样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Emphasis {
    Bold,
    Italic,
    BoldItalic,
}

/// 原文中的半开区间 [location, location + length)，单位为字节
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub location: usize,
    pub length: usize,
}

impl TextRange {
    pub fn new(location: usize, length: usize) -> Self {
        TextRange { location, length }
    }

    pub fn end(&self) -> usize {
        self.location + self.length
    }

    pub fn as_range(&self) -> std::ops::Range<usize> {
        self.location..self.end()
    }
}

/// 一个分类后的剧本元素
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// 去掉标记后的内容
    pub text: String,
    /// 原始行
    pub original_text: String,
    /// 源文件行号，从 1 开始
    pub line_number: usize,
    pub emphasis: Option<Emphasis>,
    pub is_dual_dialogue: bool,
    pub range: Option<TextRange>,
}

impl Element {
    pub fn new(kind: ElementKind, text: impl Into<String>, original_text: impl Into<String>, line_number: usize) -> Self {
        Element {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
            original_text: original_text.into(),
            line_number,
            emphasis: None,
            is_dual_dialogue: false,
            range: None,
        }
    }

    pub fn with_range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn position(&self) -> usize {
        self.range.map_or(0, |r| r.location)
    }

    pub fn length(&self) -> usize {
        self.range.map_or(self.text.len(), |r| r.length)
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// 章节层级，即原始行开头 `#` 的个数；非章节返回 None
    pub fn section_depth(&self) -> Option<usize> {
        if self.kind != ElementKind::Section {
            return None;
        }
        Some(self.original_text.trim_start().chars().take_while(|&c| c == '#').count())
    }

    // 检查元素类型是否匹配
    pub fn is_type(&self, kinds: &[ElementKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

// id 每次创建都不同，比较时忽略，保证同一文本两次解析结果相等
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.text == other.text
            && self.original_text == other.original_text
            && self.line_number == other.line_number
            && self.emphasis == other.emphasis
            && self.is_dual_dialogue == other.is_dual_dialogue
            && self.range == other.range
    }
}

impl Eq for Element {}
