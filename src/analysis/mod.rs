//! Interaction Analyzer
//!
//! Relates a normalized chart to the reference year:
//! - day master category (day_master.rs)
//! - element surplus and balance (elements.rs)
//! - branch relations against 午 (branches.rs)
//! - chart-internal relation formatting (relations.rs)

pub mod analyzer;
pub mod branches;
pub mod day_master;
pub mod elements;
pub mod relations;
pub mod types;

pub use analyzer::{analyze_against, analyze_interactions};
pub use types::{
    BalanceInterpretation, BranchInteraction, ChartRelation, DayMasterInteraction,
    ElementBalance, ElementDeviation, ElementInteraction, ElementStatus, FormattedRelations,
    InteractionResult, ReferenceYearAnalysis,
};
