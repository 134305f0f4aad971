pub mod models;
pub mod utils;
pub mod parser;
pub mod api;

pub use models::{
    Element,
    ElementKind,
    Emphasis,
    TextRange,
    Location,
    Scene,
    ScreenplayProperties,
    Conf,
    ConfError,
};

pub use parser::{
    FountainParser,
    ParseOutput,
    ParseError,
    TitlePage,
    parse_with,
    strip_emphasis_markers,
    detect_emphasis,
};

pub use api::{
    ApiError,
    parse_fountain_text,
    parse_fountain_text_async,
    screenplay_properties_json,
};

/// 解析Fountain格式文本
///
/// # Arguments
///
/// * `script` - Fountain格式的剧本文本
///
/// # Returns
///
/// 解析结果：有序的元素列表和标题页
pub fn parse(script: &str) -> ParseOutput {
    parser::parse(script)
}
