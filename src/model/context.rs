//! Per-node execution contexts.
//!
//! A context names the software surface and the data surface an operation
//! works against. Contexts come from an external analyzer; the
//! [`ContextAnalyzer`] trait is the seam it plugs into.

use super::process::{NodeId, ProcessTree};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Software and data surface of a single operation node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl OperationContext {
    pub fn new(software: Option<&str>, data: Option<&str>) -> Self {
        Self {
            software: software.map(str::to_string),
            data: data.map(str::to_string),
        }
    }

    /// Software identifier, ignoring empty strings
    pub fn software(&self) -> Option<&str> {
        non_empty(self.software.as_deref())
    }

    /// Data identifier, ignoring empty strings
    pub fn data(&self) -> Option<&str> {
        non_empty(self.data.as_deref())
    }

    /// The `(software, data)` pair, present only when both halves are set
    pub fn signature(&self) -> Option<(&str, &str)> {
        Some((self.software()?, self.data()?))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub type ContextMap = BTreeMap<NodeId, OperationContext>;

/// Produces the context attribution for the nodes of a process tree
pub trait ContextAnalyzer {
    fn analyze(&self, tree: &ProcessTree) -> ContextMap;
}

/// A precomputed context map, restricted to the nodes of the analyzed tree
impl ContextAnalyzer for ContextMap {
    fn analyze(&self, tree: &ProcessTree) -> ContextMap {
        self.iter()
            .filter(|(node_id, _)| tree.node_info.contains_key(*node_id))
            .map(|(node_id, ctx)| (node_id.clone(), ctx.clone()))
            .collect()
    }
}

/// Analyzer for processes without any context information
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContexts;

impl ContextAnalyzer for NoContexts {
    fn analyze(&self, _tree: &ProcessTree) -> ContextMap {
        ContextMap::new()
    }
}
