//! Interpretation Formatter
//!
//! Builds one `Fortune` per chart (generator.rs), selecting category text
//! through `CategoryTextSelector`, and projects it into the screen summary and
//! the long-form detail view. Formatters render the detail view as Markdown
//! or JSON.

pub mod formatters;
pub mod generator;
pub mod monthly;
pub mod sections;
pub mod selector;
pub mod types;

pub use formatters::{JsonFormatter, MarkdownFormatter, ScoreGrade, PAGE_BREAK};
pub use generator::{InterpretationGenerator, REPORT_TITLE};
pub use selector::CategoryTextSelector;
pub use types::{
    CategoryAdvisory, DetailCategory, DetailProjection, ExpertPrescription, Fortune,
    Interpretation, LuckyAttributes, MonthlyFortune, SummaryCategory, SummaryProjection,
};
