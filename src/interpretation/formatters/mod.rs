pub mod json;
pub mod markdown;

pub use json::JsonFormatter;
pub use markdown::{MarkdownFormatter, ScoreGrade, PAGE_BREAK};
