//! Chart-internal relations annotated with display metadata

use super::types::{ChartRelation, FormattedRelations};
use crate::chart::{RawRelation, RawRelations};
use crate::tables::RelationType;

fn annotate(items: &[RawRelation], relation_type: RelationType) -> Vec<ChartRelation> {
    let info = relation_type.info();
    items
        .iter()
        .map(|item| ChartRelation {
            raw: item.clone(),
            relation_type,
            type_name: info.name.to_string(),
            type_description: info.description.to_string(),
            positive: info.positive.to_string(),
            negative: info.negative.to_string(),
            description: format!("{} {}", item.pair.join("–"), info.name),
        })
        .collect()
}

pub fn format_relations(relations: &RawRelations) -> FormattedRelations {
    FormattedRelations {
        combinations: annotate(&relations.combinations, RelationType::Combination),
        clashes: annotate(&relations.clashes, RelationType::Clash),
        harms: annotate(&relations.harms, RelationType::Harm),
        punishments: annotate(&relations.punishments, RelationType::Punishment),
        has_significant: !relations.clashes.is_empty() || !relations.punishments.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relation(a: &str, b: &str) -> RawRelation {
        RawRelation {
            pair: vec![a.into(), b.into()],
            positions: vec!["year".into(), "day".into()],
        }
    }

    #[test]
    fn test_description_and_significance() {
        let raw = RawRelations {
            clashes: vec![relation("子", "午")],
            harms: vec![relation("丑", "午")],
            ..Default::default()
        };
        let formatted = format_relations(&raw);
        assert!(formatted.has_significant);
        assert_eq!(formatted.clashes[0].description, "子–午 Clash (沖)");
        assert_eq!(formatted.harms[0].type_name, "Harm (害)");
    }

    #[test]
    fn test_harms_alone_are_not_significant() {
        let raw = RawRelations {
            harms: vec![relation("丑", "午")],
            combinations: vec![relation("寅", "亥")],
            ..Default::default()
        };
        assert!(!format_relations(&raw).has_significant);
    }

    #[test]
    fn test_empty_relations() {
        let formatted = format_relations(&RawRelations::default());
        assert!(!formatted.has_significant);
        assert!(formatted.combinations.is_empty());
    }
}
