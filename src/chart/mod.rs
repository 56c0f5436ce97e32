//! Calculator chart input and its normalized form

pub mod normalize;
pub mod raw;

pub use normalize::{
    normalize, ChartPillars, DayMaster, ElementDistribution, ElementShare, NormalizedChart,
    Pillar, StrengthLevel, CHART_SYMBOLS,
};
pub use raw::{
    BirthInput, ElementCode, RawChart, RawPillars, RawRelation, RawRelations, RawStrength,
    RawYongShen,
};
