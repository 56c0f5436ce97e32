//! Display metadata for chart-internal relations (合 沖 害 刑 破)

use serde::{Deserialize, Serialize};

/// Relation family reported by the chart calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationType {
    Combination,
    Clash,
    Harm,
    Punishment,
    Destruction,
}

/// Readings shown next to a relation
#[derive(Debug, Clone, Copy)]
pub struct RelationTypeInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub positive: &'static str,
    pub negative: &'static str,
}

impl RelationType {
    pub fn info(self) -> &'static RelationTypeInfo {
        match self {
            RelationType::Combination => &COMBINATION,
            RelationType::Clash => &CLASH,
            RelationType::Harm => &HARM,
            RelationType::Punishment => &PUNISHMENT,
            RelationType::Destruction => &DESTRUCTION,
        }
    }
}

static COMBINATION: RelationTypeInfo = RelationTypeInfo {
    name: "Combination (合)",
    description: "Energy of harmony and union",
    positive: "Cooperation, harmony, new opportunities",
    negative: "Indecision, dependence",
};

static CLASH: RelationTypeInfo = RelationTypeInfo {
    name: "Clash (沖)",
    description: "Energy of opposition and change",
    positive: "Change, challenge, fresh starts",
    negative: "Conflict, collisions, instability",
};

static HARM: RelationTypeInfo = RelationTypeInfo {
    name: "Harm (害)",
    description: "Energy of obstruction and loss",
    positive: "Vigilance, caution",
    negative: "Betrayal, interference, petty people",
};

static PUNISHMENT: RelationTypeInfo = RelationTypeInfo {
    name: "Punishment (刑)",
    description: "Energy of trial and purification",
    positive: "Discipline, growth, purification",
    negative: "Gossip, legal trouble, hardship",
};

static DESTRUCTION: RelationTypeInfo = RelationTypeInfo {
    name: "Destruction (破)",
    description: "Energy of breaking down and rebuilding",
    positive: "Breaking old moulds, innovation",
    negative: "Loss, collapse, failure",
};
