//! Four Pillars Fortune Scorer
//!
//! Interaction analysis and scoring of a four pillars (Saju) birth chart
//! against the 2026 丙午 reference year, and the report built from it.
//!
//! Modules, leaf first:
//! - `tables/`: elements, stems, branches, reference year and advisory text
//! - `chart/`: calculator chart input and normalization
//! - `analysis/`: day master, element surplus and balance, branch relations
//! - `scorer`: bounded fortune score, single and batch
//! - `interpretation/`: fortune, summary/detail projections, formatters
//! - `pipeline`: per-request orchestration and stage failures
//! - `inquiry`: follow-up consultation requests
//! - `sync`: session and inquiry payload delivery with retry
//! - `api_server`: HTTP surface (feature `api`)

pub mod analysis;
pub mod chart;
pub mod config;
pub mod error;
pub mod inquiry;
pub mod interpretation;
pub mod pipeline;
pub mod scorer;
pub mod sync;
pub mod tables;
pub mod validation;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use analysis::{analyze_interactions, InteractionResult};
pub use chart::{normalize, BirthInput, NormalizedChart, RawChart};
pub use config::AppConfig;
pub use error::{FortuneError, Result, Stage, StageFailure};
pub use interpretation::{
    DetailProjection, Interpretation, InterpretationGenerator, JsonFormatter, MarkdownFormatter,
    SummaryProjection, PAGE_BREAK,
};
pub use pipeline::{
    ChartCalculator, FortunePipeline, FortuneReport, FortuneRequest, PrecomputedChart,
    RequestContext,
};
pub use scorer::{calculate_fortune_score, score_charts, score_charts_parallel};
pub use inquiry::{ConcernCategory, Inquiry};
pub use sync::{
    ConsoleSink, InquiryPayload, ReportSink, RetryPolicy, SessionPayload, SyncOutcome, SyncPayload,
};
pub use tables::{Element, FortuneCategory, REFERENCE_YEAR};
pub use validation::{validate_birth_input, validate_email, validate_inquiry};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
