//! 行分类规则表
//!
//! 规则按顺序逐条尝试，第一个匹配的生效。各规则的模式并不互斥，
//! 顺序本身就是语义的一部分，调整顺序会改变解析结果。

use crate::models::{ElementKind, Emphasis};
use crate::parser::text_processor::detect_emphasis;
use crate::utils::fountain_constants::{
    CENTERED, CHARACTER, DUAL_CHARACTER, FORCE_SCENE_HEADING, LYRICS, NOTE, PAGE_BREAK,
    PARENTHETICAL, SCENE_HEADING, SECTION, SYNOPSIS, TRANSITION,
};

/// 分类时需要的上下文
#[derive(Debug, Clone, Copy, Default)]
pub struct LineContext<'a> {
    /// 最近一个角色行
    pub active_character: Option<&'a str>,
    pub detect_emphasis: bool,
}

/// 单行的分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub kind: ElementKind,
    pub text: String,
    pub is_dual_dialogue: bool,
    pub emphasis: Option<Emphasis>,
}

impl Classified {
    fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Classified {
            kind,
            text: text.into(),
            is_dual_dialogue: false,
            emphasis: None,
        }
    }
}

pub type RuleFn = fn(&str, &LineContext) -> Option<Classified>;

pub struct Rule {
    pub name: &'static str,
    pub kind: ElementKind,
    pub apply: RuleFn,
}

pub static RULES: [Rule; 15] = [
    Rule { name: "page_break", kind: ElementKind::PageBreak, apply: page_break },
    Rule { name: "force_scene_heading", kind: ElementKind::ForceSceneHeading, apply: force_scene_heading },
    Rule { name: "force_action", kind: ElementKind::ForceAction, apply: force_action },
    Rule { name: "lyrics", kind: ElementKind::Lyrics, apply: lyrics },
    Rule { name: "centered", kind: ElementKind::Centered, apply: centered },
    Rule { name: "note", kind: ElementKind::Note, apply: note },
    Rule { name: "synopsis", kind: ElementKind::Synopsis, apply: synopsis },
    Rule { name: "section", kind: ElementKind::Section, apply: section },
    Rule { name: "transition", kind: ElementKind::Transition, apply: transition },
    Rule { name: "scene_heading", kind: ElementKind::SceneHeading, apply: scene_heading },
    Rule { name: "dual_character", kind: ElementKind::Character, apply: dual_character },
    Rule { name: "parenthetical", kind: ElementKind::Parenthetical, apply: parenthetical },
    Rule { name: "character", kind: ElementKind::Character, apply: character },
    Rule { name: "dialogue", kind: ElementKind::Dialogue, apply: dialogue },
    Rule { name: "action", kind: ElementKind::Action, apply: action },
];

/// 按名字查找规则
pub fn rule(name: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.name == name)
}

/// 对一行（已 trim）分类。最后一条规则总是匹配，所以结果总是存在
pub fn classify(line: &str, ctx: &LineContext) -> Classified {
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(line, ctx))
        .unwrap_or_else(|| Classified::new(ElementKind::Action, line))
}

fn captured(re: &regex::Regex, line: &str) -> Option<String> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn page_break(line: &str, _: &LineContext) -> Option<Classified> {
    PAGE_BREAK
        .is_match(line)
        .then(|| Classified::new(ElementKind::PageBreak, ""))
}

fn force_scene_heading(line: &str, _: &LineContext) -> Option<Classified> {
    captured(&FORCE_SCENE_HEADING, line).map(|body| Classified::new(ElementKind::ForceSceneHeading, body))
}

fn force_action(line: &str, _: &LineContext) -> Option<Classified> {
    line.strip_prefix('@')
        .map(|rest| Classified::new(ElementKind::ForceAction, rest.trim_start()))
}

fn lyrics(line: &str, _: &LineContext) -> Option<Classified> {
    captured(&LYRICS, line).map(|inner| Classified::new(ElementKind::Lyrics, inner))
}

fn centered(line: &str, _: &LineContext) -> Option<Classified> {
    captured(&CENTERED, line).map(|inner| Classified::new(ElementKind::Centered, inner.trim()))
}

fn note(line: &str, _: &LineContext) -> Option<Classified> {
    captured(&NOTE, line).map(|inner| Classified::new(ElementKind::Note, inner))
}

fn synopsis(line: &str, _: &LineContext) -> Option<Classified> {
    captured(&SYNOPSIS, line).map(|rest| Classified::new(ElementKind::Synopsis, rest))
}

// 层级不保存在元素上，需要时用 Element::section_depth 从原始行重新计算
fn section(line: &str, _: &LineContext) -> Option<Classified> {
    captured(&SECTION, line).map(|rest| Classified::new(ElementKind::Section, rest))
}

fn transition(line: &str, _: &LineContext) -> Option<Classified> {
    TRANSITION
        .is_match(line)
        .then(|| Classified::new(ElementKind::Transition, line))
}

fn scene_heading(line: &str, _: &LineContext) -> Option<Classified> {
    SCENE_HEADING
        .is_match(line)
        .then(|| Classified::new(ElementKind::SceneHeading, line))
}

fn dual_character(line: &str, _: &LineContext) -> Option<Classified> {
    captured(&DUAL_CHARACTER, line).map(|name| Classified {
        is_dual_dialogue: true,
        ..Classified::new(ElementKind::Character, name.trim_end())
    })
}

fn parenthetical(line: &str, _: &LineContext) -> Option<Classified> {
    captured(&PARENTHETICAL, line).map(|inner| Classified::new(ElementKind::Parenthetical, inner))
}

fn character(line: &str, _: &LineContext) -> Option<Classified> {
    CHARACTER
        .is_match(line)
        .then(|| Classified::new(ElementKind::Character, line))
}

fn dialogue(line: &str, ctx: &LineContext) -> Option<Classified> {
    ctx.active_character?;
    let emphasis = if ctx.detect_emphasis { detect_emphasis(line) } else { None };
    Some(Classified {
        emphasis,
        ..Classified::new(ElementKind::Dialogue, line)
    })
}

fn action(line: &str, _: &LineContext) -> Option<Classified> {
    Some(Classified::new(ElementKind::Action, line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn no_context() -> LineContext<'static> {
        LineContext { active_character: None, detect_emphasis: true }
    }

    fn in_dialogue() -> LineContext<'static> {
        LineContext { active_character: Some("SARAH"), detect_emphasis: true }
    }

    #[test]
    fn test_rule_table_order() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "page_break",
                "force_scene_heading",
                "force_action",
                "lyrics",
                "centered",
                "note",
                "synopsis",
                "section",
                "transition",
                "scene_heading",
                "dual_character",
                "parenthetical",
                "character",
                "dialogue",
                "action",
            ]
        );
    }

    #[rstest]
    #[case("page_break", "===", Some(""))]
    #[case("page_break", "======", Some(""))]
    #[case("page_break", "==", None)]
    #[case("force_scene_heading", "!INT. SHED - DAY", Some("INT. SHED - DAY"))]
    #[case("force_scene_heading", "! EXT. ROOF - NIGHT", Some("EXT. ROOF - NIGHT"))]
    #[case("force_scene_heading", "!Wow", None)]
    #[case("force_action", "@He runs.", Some("He runs."))]
    #[case("force_action", "@  MCCLANE", Some("MCCLANE"))]
    #[case("lyrics", "~Willy Wonka~", Some("Willy Wonka"))]
    #[case("lyrics", "~", None)]
    #[case("lyrics", "~  la la  ~", Some("  la la  "))]
    #[case("centered", "> THE END <", Some("THE END"))]
    #[case("centered", ">THE END<", None)]
    #[case("note", "[[call the director]]", Some("call the director"))]
    #[case("note", "[[ spaced ]]", Some(" spaced "))]
    #[case("synopsis", "=   They meet.", Some("  They meet."))]
    #[case("synopsis", "= They meet.", Some("They meet."))]
    #[case("section", "## Act Two", Some("Act Two"))]
    #[case("section", "#NoSpace", None)]
    #[case("parenthetical", "(quietly)", Some("quietly"))]
    fn test_single_rule(#[case] name: &str, #[case] line: &str, #[case] expected: Option<&str>) {
        let r = rule(name).unwrap();
        let result = (r.apply)(line, &no_context());
        assert_eq!(result.as_ref().map(|c| c.text.as_str()), expected);
        if let Some(c) = result {
            assert_eq!(c.kind, r.kind);
        }
    }

    #[rstest]
    #[case("INT. KITCHEN - DAY")]
    #[case("EXT. PARK - NIGHT")]
    #[case("INT./EXT. CAR - DAY")]
    #[case("I/E. LOBBY - DAY")]
    fn test_scene_heading_variants(#[case] line: &str) {
        let c = classify(line, &no_context());
        assert_eq!(c.kind, ElementKind::SceneHeading);
        assert_eq!(c.text, line);
    }

    #[test]
    fn test_transition_before_character() {
        let c = classify("CUT TO:", &no_context());
        assert_eq!(c.kind, ElementKind::Transition);
        assert_eq!(c.text, "CUT TO:");

        // 前缀匹配：以 END 开头的全大写名字也会被当成转场
        let c = classify("ENDICOTT", &no_context());
        assert_eq!(c.kind, ElementKind::Transition);
    }

    #[test]
    fn test_dual_character() {
        let c = classify("SARAH ^", &no_context());
        assert_eq!(c.kind, ElementKind::Character);
        assert_eq!(c.text, "SARAH");
        assert!(c.is_dual_dialogue);
    }

    #[test]
    fn test_character_requires_caps_only() {
        let c = classify("SARAH", &no_context());
        assert_eq!(c.kind, ElementKind::Character);
        assert!(!c.is_dual_dialogue);

        assert_eq!(classify("Sarah", &no_context()).kind, ElementKind::Action);
        assert_eq!(classify("MR. SMITH", &no_context()).kind, ElementKind::Action);
    }

    #[test]
    fn test_dialogue_needs_active_character() {
        assert_eq!(classify("Hello there.", &no_context()).kind, ElementKind::Action);

        let c = classify("Hello there.", &in_dialogue());
        assert_eq!(c.kind, ElementKind::Dialogue);
        assert_eq!(c.emphasis, None);
    }

    #[test]
    fn test_dialogue_emphasis() {
        assert_eq!(classify("**very** bold", &in_dialogue()).emphasis, Some(Emphasis::BoldItalic));
        assert_eq!(classify("*very* bold", &in_dialogue()).emphasis, Some(Emphasis::Bold));
        assert_eq!(classify("_very_ soft", &in_dialogue()).emphasis, Some(Emphasis::Italic));

        let ctx = LineContext { detect_emphasis: false, ..in_dialogue() };
        assert_eq!(classify("*very* bold", &ctx).emphasis, None);
    }

    #[test]
    fn test_action_ignores_emphasis() {
        let c = classify("She walks *slowly* to the door.", &no_context());
        assert_eq!(c.kind, ElementKind::Action);
        assert_eq!(c.emphasis, None);
    }

    #[test]
    fn test_parenthetical_outranks_dialogue() {
        let c = classify("(beat)", &in_dialogue());
        assert_eq!(c.kind, ElementKind::Parenthetical);
        assert_eq!(c.text, "beat");
    }
}
