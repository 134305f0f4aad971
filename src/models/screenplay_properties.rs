use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::element::{Element, ElementKind};
use crate::models::location::Location;

/// 场景
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// 场景编号，从 1 开始
    pub number: usize,
    pub text: String,
    pub line: usize,
    pub location: Option<Location>,
}

/// 从解析结果汇总出的剧本信息，供大纲、角色列表等使用
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenplayProperties {
    pub scenes: Vec<Scene>,
    /// 角色名 -> 角色行所在行号
    pub characters: BTreeMap<String, Vec<usize>>,
    /// 地点名 -> 场景编号
    pub locations: BTreeMap<String, Vec<usize>>,
    pub title_keys: Vec<String>,
    pub first_scene_line: Option<usize>,
}

impl ScreenplayProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: &[Element], title_page: &BTreeMap<String, String>) -> Self {
        let mut properties = ScreenplayProperties::new();
        properties.title_keys = title_page.keys().cloned().collect();

        for element in elements {
            match element.kind {
                ElementKind::SceneHeading | ElementKind::ForceSceneHeading => {
                    let number = properties.scenes.len() + 1;
                    let location = Location::from_scene_heading(&element.text);
                    if let Some(location) = &location {
                        properties
                            .locations
                            .entry(location.name.clone())
                            .or_default()
                            .push(number);
                    }
                    properties.first_scene_line.get_or_insert(element.line_number);
                    properties.scenes.push(Scene {
                        number,
                        text: element.text.clone(),
                        line: element.line_number,
                        location,
                    });
                }
                ElementKind::Character => {
                    properties
                        .characters
                        .entry(element.text.trim().to_string())
                        .or_default()
                        .push(element.line_number);
                }
                _ => {}
            }
        }

        properties
    }

    /// 按名字排序的角色列表（用于自动补全）
    pub fn character_names(&self) -> Vec<&str> {
        self.characters.keys().map(String::as_str).collect()
    }
}
