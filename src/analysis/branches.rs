//! Chart branches vs the reference branch

use smallvec::SmallVec;

use super::types::BranchInteraction;
use crate::chart::ChartPillars;
use crate::tables::{branch_relation, Branch};

/// One entry per pillar whose branch relates to the reference branch, in
/// year → hour order
pub fn analyze_branches(
    pillars: &ChartPillars,
    reference: Branch,
) -> SmallVec<[BranchInteraction; 4]> {
    pillars
        .iter()
        .filter_map(|pillar| {
            let branch = pillar.branch?;
            let relation = branch_relation(branch, reference)?;
            Some(BranchInteraction {
                position: pillar.position,
                branch,
                branch_korean: branch.korean().to_string(),
                kind: relation.kind,
                name: relation.name.to_string(),
                impact: relation.impact,
                description: relation.description.to_string(),
            })
        })
        .collect()
}
