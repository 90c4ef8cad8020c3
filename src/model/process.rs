//! Process tree model.
//!
//! A [`ProcessTree`] is the subject of analysis: per-node operation info,
//! the process-local variables and data resources, and the nested control
//! structure the nodes are arranged in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type NodeId = String;
pub type ConceptId = String;
pub type ResourceId = String;

/// Per operation node information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    /// Ontology concept classifying the operation
    pub concept: ConceptId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_resource_input: Option<Vec<ResourceId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_resource_output: Option<Vec<ResourceId>>,
}

impl NodeInfo {
    pub fn new(concept: impl Into<ConceptId>) -> Self {
        Self {
            concept: concept.into(),
            data_resource_input: None,
            data_resource_output: None,
        }
    }

    pub fn with_input(mut self, resources: &[&str]) -> Self {
        self.data_resource_input = Some(resources.iter().map(|r| r.to_string()).collect());
        self
    }

    pub fn with_output(mut self, resources: &[&str]) -> Self {
        self.data_resource_output = Some(resources.iter().map(|r| r.to_string()).collect());
        self
    }
}

/// One entry of a branch in the nested control structure.
///
/// Serialized either as a bare node id or as a `[label, branch]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeEntry {
    Node(NodeId),
    Nested(String, Branch),
}

pub type Branch = Vec<TreeEntry>;

/// Nested control structure of a process
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessStructure {
    #[serde(rename = "Process", default)]
    pub process: Vec<Branch>,
}

/// The process model under analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessTree {
    #[serde(default)]
    pub node_info: BTreeMap<NodeId, NodeInfo>,
    #[serde(default)]
    pub transient_data_info: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub data_resource_info: BTreeMap<ResourceId, serde_json::Value>,
    /// Nested branch structure; required in input documents
    pub tree: ProcessStructure,
}

impl ProcessTree {
    /// Distinct concepts referenced by the tree's nodes, each paired with
    /// the first node (in id order) that references it.
    pub fn concepts(&self) -> BTreeMap<&str, &str> {
        self.node_info
            .iter()
            .fold(BTreeMap::new(), |mut acc, (node_id, info)| {
                acc.entry(info.concept.as_str()).or_insert(node_id.as_str());
                acc
            })
    }

    /// Node ids in execution order: a depth-first walk of the structure,
    /// visiting each branch's entries front to back and descending into
    /// nested branches where they occur.
    pub fn execution_order(&self) -> Vec<&str> {
        fn walk<'a>(branch: &'a [TreeEntry], out: &mut Vec<&'a str>) {
            for entry in branch {
                match entry {
                    TreeEntry::Node(id) => out.push(id),
                    TreeEntry::Nested(_, inner) => walk(inner, out),
                }
            }
        }

        let mut order = Vec::new();
        for branch in &self.tree.process {
            walk(branch, &mut order);
        }
        order
    }
}
