//! Decomposition of a recursive evolution tree into depth-ordered stages.

use crate::errors::{EvolutionError, EvolutionResult};
use schema::{EvolutionNode, EvolutionTrigger, SpeciesRef};

/// One member of a stage: a species plus the trigger on the edge that
/// produced it (`None` for the root and for edges without recorded data).
#[derive(Debug, Clone, PartialEq)]
pub struct StageEntry {
    pub id: u32,
    pub name: String,
    pub trigger: Option<EvolutionTrigger>,
}

/// All members found at one tree depth, in source traversal order.
pub type Stage = Vec<StageEntry>;

/// Decompose an evolution tree into stages indexed by depth. Stage 0 is
/// always the root alone; every depth between 0 and the tree's maximum is
/// populated, since depth grows by exactly one per edge.
///
/// Fails on the first species reference whose URL yields no numeric id,
/// abandoning the whole traversal rather than dropping the node.
pub fn parse_stages(root: &EvolutionNode) -> EvolutionResult<Vec<Stage>> {
    let mut stages: Vec<Stage> = Vec::new();
    visit(root, 0, None, &mut stages)?;
    Ok(stages)
}

fn visit(
    node: &EvolutionNode,
    depth: usize,
    trigger: Option<&EvolutionTrigger>,
    stages: &mut Vec<Stage>,
) -> EvolutionResult<()> {
    if stages.len() == depth {
        stages.push(Vec::new());
    }

    stages[depth].push(StageEntry {
        id: species_id(&node.species)?,
        name: node.species.name.clone(),
        trigger: trigger.cloned(),
    });

    for child in &node.evolves_to {
        // Edges occasionally carry several trigger records; only the
        // first is kept, the rest are discarded.
        visit(child, depth + 1, child.evolution_details.first(), stages)?;
    }

    Ok(())
}

/// Recover the numeric species id from the trailing segment of its
/// resource URL.
fn species_id(species: &SpeciesRef) -> EvolutionResult<u32> {
    species
        .url
        .split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .and_then(|segment| segment.parse().ok())
        .ok_or_else(|| EvolutionError::MalformedSpeciesReference(species.url.clone()))
}
