use lazy_static::lazy_static;
use regex::Regex;

pub struct FountainConstants;

impl FountainConstants {
    /// 转场关键字，大小写敏感，只需匹配行首
    pub const TRANSITIONS: [&'static str; 22] = [
        "FADE OUT",
        "FADE TO BLACK",
        "CUT TO",
        "DISSOLVE TO",
        "SMASH CUT TO",
        "JUMP CUT TO",
        "MATCH CUT TO",
        "FADE IN",
        "CUT TO BLACK",
        "END",
        "THE END",
        "IRIS IN",
        "IRIS OUT",
        "WIPE TO",
        "DISSOLVE",
        "FADE",
        "CUT",
        "SMASH CUT",
        "JUMP CUT",
        "MATCH CUT",
        "IRIS",
        "WIPE",
    ];

    /// 标题页结束行
    pub const TITLE_PAGE_END: &'static str = ":";
}

// 场景标题前缀: INT. / EXT. / INT./EXT. / INT/EXT / I/E
const SCENE_PREFIX: &str = r"(?:INT\.?/EXT|INT|EXT|I/E)\.?\s+";

lazy_static! {
    // 行级元素正则，全部作用于 trim 后的行
    pub static ref PAGE_BREAK: Regex = Regex::new(r"^={3,}$").unwrap();
    pub static ref FORCE_SCENE_HEADING: Regex = Regex::new(&format!(r"^!\s*({}.*)$", SCENE_PREFIX)).unwrap();
    pub static ref LYRICS: Regex = Regex::new(r"^~(.*)~$").unwrap();
    pub static ref CENTERED: Regex = Regex::new(r"^> (.*) <$").unwrap();
    pub static ref NOTE: Regex = Regex::new(r"^\[\[(.*)\]\]$").unwrap();
    pub static ref SYNOPSIS: Regex = Regex::new(r"^= (.*)$").unwrap();
    pub static ref SECTION: Regex = Regex::new(r"^#+\s+(.*)$").unwrap();
    pub static ref TRANSITION: Regex = {
        let alternatives = FountainConstants::TRANSITIONS
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"^(?:{}).*$", alternatives)).unwrap()
    };
    pub static ref SCENE_HEADING: Regex = Regex::new(&format!(r"^{}.*$", SCENE_PREFIX)).unwrap();
    pub static ref DUAL_CHARACTER: Regex = Regex::new(r"^([\p{Lu} ]+)\^$").unwrap();
    pub static ref PARENTHETICAL: Regex = Regex::new(r"^\((.*)\)$").unwrap();
    pub static ref CHARACTER: Regex = Regex::new(r"^[\p{Lu} ]+$").unwrap();

    // 强调样式，按 粗斜体 -> 粗体 -> 斜体 的顺序检测
    pub static ref BOLD_ITALIC: Regex = Regex::new(r"\*\*([^*]+)\*\*|__([^_]+)__").unwrap();
    pub static ref BOLD: Regex = Regex::new(r"\*([^*]+)\*").unwrap();
    pub static ref ITALIC: Regex = Regex::new(r"_([^_]+)_").unwrap();

    // 场景标题拆分: 前缀 / 地点与时间
    pub static ref SCENE_HEADING_PARTS: Regex = Regex::new(r"^[ \t]*!?\s*((?:INT\.?/EXT|INT|EXT|I/E)\.?)\s+(.*)$").unwrap();
    pub static ref LOCATION_TIME_SPLIT: Regex = Regex::new(r"(.*?)[\-–—−](.*)").unwrap();
}
