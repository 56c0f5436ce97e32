//! Raw chart shape produced by the chart calculator
//!
//! Every field is optional on the wire. Missing or empty fields deserialize to
//! defaults and surface later as "unknown" values, never as errors.

use serde::{Deserialize, Serialize};

use crate::tables::Element;

/// Birth date/time as entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub gender: String,
    #[serde(default)]
    pub is_lunar: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawChart {
    pub pillars: RawPillars,
    pub gender: Option<String>,
    pub strength: Option<RawStrength>,
    pub yong_shen: Option<RawYongShen>,
    pub relations: Option<RawRelations>,
    pub major_luck: serde_json::Value,
    pub yearly_luck: serde_json::Value,
}

/// Two-symbol pillar strings, e.g. `"甲子"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPillars {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawStrength {
    pub level: Option<String>,
    pub score: Option<f64>,
}

/// Needed-element analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawYongShen {
    pub primary: Option<ElementCode>,
    pub secondary: Option<ElementCode>,
    pub reasoning: Option<String>,
}

/// An element as the calculator reports it: either a bare code or an object
/// carrying its readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementCode {
    Code(String),
    Named {
        #[serde(default)]
        hanja: Option<String>,
        #[serde(default)]
        korean: Option<String>,
    },
}

impl ElementCode {
    /// Resolve to an element, preferring the hanja reading
    pub fn element(&self) -> Option<Element> {
        match self {
            ElementCode::Code(code) => Element::from_code(code),
            ElementCode::Named { hanja, korean } => hanja
                .as_deref()
                .and_then(Element::from_code)
                .or_else(|| korean.as_deref().and_then(Element::from_code)),
        }
    }

    /// Text to fall back on when the code is not a known element
    pub fn label(&self) -> &str {
        match self {
            ElementCode::Code(code) => code,
            ElementCode::Named { hanja, korean } => korean
                .as_deref()
                .or(hanja.as_deref())
                .unwrap_or(""),
        }
    }
}

/// Chart-internal relations reported by the calculator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRelations {
    pub combinations: Vec<RawRelation>,
    pub clashes: Vec<RawRelation>,
    pub harms: Vec<RawRelation>,
    pub punishments: Vec<RawRelation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRelation {
    pub pair: Vec<String>,
    pub positions: Vec<String>,
}
