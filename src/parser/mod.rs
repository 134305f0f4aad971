pub mod fountain_parser;
pub mod rules;
pub mod text_processor;
pub mod title_page;

pub use fountain_parser::{parse, parse_with, FountainParser, ParseError, ParseOutput, ParseResult};
pub use rules::{classify, Classified, LineContext, Rule, RULES};
pub use text_processor::{detect_emphasis, strip_emphasis_markers};
pub use title_page::{parse_title_line, TitleLine, TitlePage};
