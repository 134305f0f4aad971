use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;

use crate::models::{Conf, Element, ElementKind, ScreenplayProperties};
use crate::parser::rules::{classify, LineContext};
use crate::parser::title_page::{parse_title_line, TitleLine, TitlePage, TitlePageState};
use crate::utils::source_lines;

/// 解析器错误
///
/// 输入本身永远不会导致错误，这里只有后台任务失败的情况
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("后台解析任务失败: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// 一次解析的完整结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutput {
    pub elements: Vec<Element>,
    pub title_page: TitlePage,
}

impl ParseOutput {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.title_page.is_empty()
    }

    /// 场景标题元素（包括强制场景标题）
    pub fn scene_headings(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.kind.is_scene_heading())
    }

    /// 角色行元素
    pub fn characters(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.kind == ElementKind::Character)
    }

    pub fn properties(&self) -> ScreenplayProperties {
        ScreenplayProperties::from_elements(&self.elements, &self.title_page)
    }
}

/// 使用默认配置解析
pub fn parse(script: &str) -> ParseOutput {
    parse_with(script, &Conf::default())
}

/// 解析Fountain格式文本
///
/// 纯函数：相同的输入和配置总是得到相等的结果，任何输入都不会失败，
/// 无法识别的行一律归为 action。
pub fn parse_with(script: &str, cfg: &Conf) -> ParseOutput {
    let started = Instant::now();
    let mut result = ParseOutput::default();

    let mut title_state = if cfg.parse_title_page {
        TitlePageState::Pending
    } else {
        TitlePageState::Done
    };
    let mut active_character: Option<String> = None;

    for line in source_lines(script) {
        if line.is_blank() {
            if title_state == TitlePageState::InProgress {
                title_state = TitlePageState::Done;
            }
            if cfg.reset_character_on_blank_line {
                active_character = None;
            }
            continue;
        }

        if title_state != TitlePageState::Done {
            match parse_title_line(line.text) {
                TitleLine::Entry(key, value) => {
                    result.title_page.insert(key, value);
                    title_state = TitlePageState::InProgress;
                    continue;
                }
                TitleLine::End => {
                    title_state = TitlePageState::Done;
                    continue;
                }
                TitleLine::NotTitle => {
                    title_state = TitlePageState::Done;
                }
            }
        }

        let ctx = LineContext {
            active_character: active_character.as_deref(),
            detect_emphasis: cfg.detect_emphasis,
        };
        let classified = classify(line.text.trim(), &ctx);
        trace!("第{}行 -> {}: {:?}", line.number, classified.kind.as_str(), classified.text);

        if classified.kind == ElementKind::Character {
            active_character = Some(classified.text.clone());
        }

        let mut element = Element::new(classified.kind, classified.text, line.text, line.number)
            .with_range(line.range());
        element.is_dual_dialogue = classified.is_dual_dialogue;
        element.emphasis = classified.emphasis;
        result.elements.push(element);
    }

    debug!(
        "解析完成: {} 个元素, {} 个标题页字段, 耗时 {:?}",
        result.elements.len(),
        result.title_page.len(),
        started.elapsed()
    );
    result
}

/// 持有最近一次解析结果的解析器
///
/// 结果通过 `watch` 通道整体替换，读者只会看到完整的结果，
/// 并且总是最近一次完成的解析。克隆的解析器共享同一个结果。
#[derive(Debug, Clone)]
pub struct FountainParser {
    conf: Conf,
    output: Arc<watch::Sender<Arc<ParseOutput>>>,
}

impl FountainParser {
    pub fn new() -> Self {
        Self::with_conf(Conf::default())
    }

    pub fn with_conf(conf: Conf) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(ParseOutput::default()));
        FountainParser {
            conf,
            output: Arc::new(tx),
        }
    }

    pub fn conf(&self) -> &Conf {
        &self.conf
    }

    /// 在当前线程解析并发布结果
    pub fn parse(&self, script: &str) -> Arc<ParseOutput> {
        let output = Arc::new(parse_with(script, &self.conf));
        self.publish(Arc::clone(&output));
        output
    }

    /// 在阻塞线程池中解析，完成后发布结果
    ///
    /// 结果与 [`FountainParser::parse`] 相同。多个调用重叠时不会互相取消，
    /// 最后完成的那个覆盖之前的结果。
    pub async fn parse_async(&self, script: impl Into<String>) -> ParseResult<Arc<ParseOutput>> {
        let script = script.into();
        let conf = self.conf.clone();
        let output = tokio::task::spawn_blocking(move || parse_with(&script, &conf))
            .await
            .map_err(|e| {
                warn!("后台解析失败: {}", e);
                ParseError::from(e)
            })?;

        let output = Arc::new(output);
        self.publish(Arc::clone(&output));
        Ok(output)
    }

    /// 清空元素和标题页（文档关闭时使用）
    pub fn clear(&self) {
        self.publish(Arc::new(ParseOutput::default()));
    }

    /// 最近一次完成的解析结果
    pub fn latest(&self) -> Arc<ParseOutput> {
        self.output.borrow().clone()
    }

    pub fn elements(&self) -> Vec<Element> {
        self.latest().elements.clone()
    }

    pub fn title_page(&self) -> TitlePage {
        self.latest().title_page.clone()
    }

    /// 订阅结果更新
    pub fn subscribe(&self) -> watch::Receiver<Arc<ParseOutput>> {
        self.output.subscribe()
    }

    fn publish(&self, output: Arc<ParseOutput>) {
        self.output.send_replace(output);
    }
}

impl Default for FountainParser {
    fn default() -> Self {
        Self::new()
    }
}
