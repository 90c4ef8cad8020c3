//! Ontology branch resolution.
//!
//! The branch of a concept is its classification lineage: the concept
//! itself followed by every ancestor up to the ontology root. Node
//! classification ("is this an automation operation?") is membership of a
//! classification concept in the node's branch.

use crate::errors::{MetricsError, Result};
use crate::model::{ConceptHierarchy, ConceptId, ParentLink};
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// Resolved branches, keyed by concept
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyBranches {
    branches: BTreeMap<ConceptId, Vec<ConceptId>>,
}

impl OntologyBranches {
    /// Branch of a concept. Concepts that were never resolved are reported
    /// as unknown rather than treated as unclassified.
    pub fn branch(&self, concept: &str) -> Result<&[ConceptId]> {
        self.branches
            .get(concept)
            .map(Vec::as_slice)
            .ok_or_else(|| MetricsError::unknown_concept(concept))
    }

    /// Whether `classification` appears in the branch of `concept`
    pub fn is_classified_as(&self, concept: &str, classification: &str) -> Result<bool> {
        Ok(self
            .branch(concept)?
            .iter()
            .any(|ancestor| ancestor == classification))
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ConceptId, &Vec<ConceptId>)> {
        self.branches.iter()
    }
}

impl FromIterator<(ConceptId, Vec<ConceptId>)> for OntologyBranches {
    fn from_iter<I: IntoIterator<Item = (ConceptId, Vec<ConceptId>)>>(iter: I) -> Self {
        Self {
            branches: iter.into_iter().collect(),
        }
    }
}

/// Walk parent links from `concept` to the root.
///
/// Fails with `UnknownConcept` when the concept, or any ancestor its parent
/// links name, is missing from the hierarchy, and with `OntologyCycle` when
/// the links loop.
pub fn resolve_branch<'a, H>(hierarchy: &'a H, concept: &'a str) -> Result<Vec<ConceptId>>
where
    H: ConceptHierarchy + ?Sized,
{
    let mut chain: Vec<ConceptId> = Vec::new();
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut current = concept;

    loop {
        if !seen.insert(current) {
            chain.push(current.to_string());
            return Err(MetricsError::OntologyCycle {
                concept: concept.to_string(),
                chain,
            });
        }

        let link = hierarchy
            .parent_of(current)
            .ok_or_else(|| MetricsError::unknown_concept(current))?;
        chain.push(current.to_string());

        match link {
            ParentLink::Root => return Ok(chain),
            ParentLink::Parent(parent) => current = parent,
        }
    }
}

/// Resolve the branch of every concept in `concepts`.
///
/// `concepts` maps each concept to a node referencing it, which is attached
/// to `UnknownConcept` errors for diagnostics.
pub fn resolve_branches<H>(hierarchy: &H, concepts: &BTreeMap<&str, &str>) -> Result<OntologyBranches>
where
    H: ConceptHierarchy + ?Sized,
{
    concepts
        .iter()
        .map(|(&concept, &node_id)| {
            let branch = resolve_branch(hierarchy, concept).map_err(|e| e.for_node(node_id))?;
            trace!(concept, depth = branch.len(), "Resolved ontology branch");
            Ok((concept.to_string(), branch))
        })
        .collect()
}
