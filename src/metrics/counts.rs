//! Raw counts over the process tree and its contexts.
//!
//! Every count is a pure function of the tree, the resolved branches, the
//! operation table, or the context map. [`aggregate`] runs them all and
//! returns an immutable [`RawCounts`] for the ratio stage.

use super::branches::OntologyBranches;
use crate::errors::Result;
use crate::model::{ContextMap, NodeInfo, OperationTable, ProcessTree, ResourceId};
use std::collections::BTreeSet;

/// Which of a node's listed resources take part in read/write counting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResourcePolicy {
    /// Only the first resource per direction; further entries are ignored
    #[default]
    Primary,
}

impl ResourcePolicy {
    pub fn select(self, resources: &[ResourceId]) -> impl Iterator<Item = &ResourceId> {
        match self {
            Self::Primary => resources.first().into_iter(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDirection {
    Read,
    Write,
}

impl AccessDirection {
    fn resources(self, info: &NodeInfo) -> &[ResourceId] {
        let listed = match self {
            Self::Read => info.data_resource_input.as_deref(),
            Self::Write => info.data_resource_output.as_deref(),
        };
        listed.unwrap_or(&[])
    }

    fn declared_by<T: OperationTable + ?Sized>(self, table: &T, concept: &str) -> bool {
        table.accessed_data(concept).iter().any(|access| match self {
            Self::Read => access.kind.is_read(),
            Self::Write => access.kind.is_write(),
        })
    }
}

/// Counts produced by a single aggregation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCounts {
    pub operations: usize,
    pub automation_operations: usize,
    pub decisions: usize,
    pub variables: usize,
    pub data_resources: usize,
    pub data_resources_read: usize,
    pub data_resources_written: usize,
    pub software: usize,
    pub contexts: usize,
}

/// Classification concepts the aggregator looks for in node branches
#[derive(Debug, Clone, Copy)]
pub struct Classification<'a> {
    pub automation: &'a str,
    pub decision: &'a str,
}

pub fn count_operations(tree: &ProcessTree) -> usize {
    tree.node_info.len()
}

/// Number of nodes whose branch contains `classification`
pub fn count_classified(
    tree: &ProcessTree,
    branches: &OntologyBranches,
    classification: &str,
) -> Result<usize> {
    tree.node_info
        .iter()
        .try_fold(0, |count, (node_id, info)| {
            let hit = branches
                .is_classified_as(&info.concept, classification)
                .map_err(|e| e.for_node(node_id))?;
            Ok(count + usize::from(hit))
        })
}

pub fn count_variables(tree: &ProcessTree) -> usize {
    tree.transient_data_info.len()
}

pub fn count_data_resources(tree: &ProcessTree) -> usize {
    tree.data_resource_info.len()
}

/// Distinct resources accessed in `direction` by nodes whose concept
/// declares an access of that direction
pub fn count_resources_accessed<T: OperationTable + ?Sized>(
    tree: &ProcessTree,
    table: &T,
    direction: AccessDirection,
    policy: ResourcePolicy,
) -> usize {
    tree.node_info
        .values()
        .filter(|info| direction.declared_by(table, &info.concept))
        .flat_map(|info| policy.select(direction.resources(info)))
        .collect::<BTreeSet<_>>()
        .len()
}

/// Distinct non-empty software identifiers
pub fn count_software(contexts: &ContextMap) -> usize {
    contexts
        .values()
        .filter_map(|ctx| ctx.software())
        .collect::<BTreeSet<_>>()
        .len()
}

/// Distinct `(software, data)` pairs among fully attributed nodes
pub fn count_contexts(contexts: &ContextMap) -> usize {
    contexts
        .values()
        .filter_map(|ctx| ctx.signature())
        .collect::<BTreeSet<_>>()
        .len()
}

/// Run every count over the inputs
pub fn aggregate<T: OperationTable + ?Sized>(
    tree: &ProcessTree,
    branches: &OntologyBranches,
    table: &T,
    contexts: &ContextMap,
    classification: Classification<'_>,
    policy: ResourcePolicy,
) -> Result<RawCounts> {
    Ok(RawCounts {
        operations: count_operations(tree),
        automation_operations: count_classified(tree, branches, classification.automation)?,
        decisions: count_classified(tree, branches, classification.decision)?,
        variables: count_variables(tree),
        data_resources: count_data_resources(tree),
        data_resources_read: count_resources_accessed(
            tree,
            table,
            AccessDirection::Read,
            policy,
        ),
        data_resources_written: count_resources_accessed(
            tree,
            table,
            AccessDirection::Write,
            policy,
        ),
        software: count_software(contexts),
        contexts: count_contexts(contexts),
    })
}
