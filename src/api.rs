//! 对外 API
//!
//! 以 JSON 字符串返回解析结果，方便宿主应用（编辑器、预览、大纲）直接使用

use crate::models::Conf;
use crate::parser::{parse_with, FountainParser, ParseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("JSON序列化错误: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    ParseError(#[from] ParseError),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// 解析Fountain文本，返回 `{ elements, titlePage }` JSON
pub fn parse_fountain_text(text: &str, config: Option<Conf>) -> ApiResult<String> {
    let conf = config.unwrap_or_default();
    let result = parse_with(text, &conf);
    Ok(serde_json::to_string(&result)?)
}

/// 在后台线程解析，结果同 [`parse_fountain_text`]
pub async fn parse_fountain_text_async(text: String, config: Option<Conf>) -> ApiResult<String> {
    let parser = FountainParser::with_conf(config.unwrap_or_default());
    let result = parser.parse_async(text).await?;
    Ok(serde_json::to_string(result.as_ref())?)
}

/// 剧本信息（场景、角色、地点）的 JSON
pub fn screenplay_properties_json(text: &str, config: Option<Conf>) -> ApiResult<String> {
    let conf = config.unwrap_or_default();
    let properties = parse_with(text, &conf).properties();
    Ok(serde_json::to_string(&properties)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fountain_text_json() {
        let json = parse_fountain_text("Title: X\n:\nSARAH\nHi.", None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["titlePage"]["Title"], "X");
        assert_eq!(value["elements"][0]["type"], "character");
        assert_eq!(value["elements"][1]["type"], "dialogue");
        assert_eq!(value["elements"][1]["lineNumber"], 4);
        assert_eq!(value["elements"][1]["range"]["location"], 17);
    }

    #[tokio::test]
    async fn test_async_json_matches_sync() {
        let text = "INT. HOUSE - DAY\n\nSARAH\n*Hi.*";
        let sync_json: serde_json::Value = serde_json::from_str(&parse_fountain_text(text, None).unwrap()).unwrap();
        let async_json: serde_json::Value =
            serde_json::from_str(&parse_fountain_text_async(text.to_string(), None).await.unwrap()).unwrap();

        // id 每次不同，比较其余字段
        let strip_ids = |mut v: serde_json::Value| {
            for el in v["elements"].as_array_mut().unwrap() {
                el.as_object_mut().unwrap().remove("id");
            }
            v
        };
        assert_eq!(strip_ids(sync_json), strip_ids(async_json));
    }

    #[test]
    fn test_properties_json() {
        let json = screenplay_properties_json("INT. HOUSE - DAY\n\nSARAH\nHi.", None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["scenes"][0]["location"]["name"], "HOUSE");
        assert_eq!(value["characters"]["SARAH"][0], 3);
    }
}
