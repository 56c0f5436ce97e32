//! Static domain tables: symbols, the reference year, relation metadata and
//! the canned advisory text.

pub mod categories;
pub mod reference_year;
pub mod relation_types;
pub mod symbols;
pub mod year_guide;

pub use categories::{AdvisoryTables, FortuneCategory, Prescription};
pub use reference_year::{
    branch_relation, impact_text, BranchRelation, BranchRelationKind, DayMasterCategory,
    ReferenceYear, SurplusTier, MAX_IMPACT_LEVEL, MIN_IMPACT_LEVEL, REFERENCE_YEAR,
    REFERENCE_YEAR_DESCRIPTION,
};
pub use relation_types::{RelationType, RelationTypeInfo};
pub use symbols::{Branch, Element, PillarPosition, Polarity, Stem};
pub use year_guide::{element_year_guide, ElementYearGuide, MonthlyDetail, MONTHLY_DETAILS};
