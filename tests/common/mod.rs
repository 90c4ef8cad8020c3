// Test utility module for botmetrics integration tests
#![allow(dead_code)]

use botmetrics::{AccessKind, NodeInfo, Ontology, ProcessTree, TreeEntry};

/// Small RPA ontology shared by the integration tests
pub fn rpa_ontology() -> Ontology {
    Ontology::default()
        .with_concept("operation", None)
        .with_concept("automation-operation", Some("operation"))
        .with_concept("manual-operation", Some("operation"))
        .with_concept("control-flow-operation", Some("operation"))
        .with_concept("spreadsheet-operation", Some("automation-operation"))
        .with_concept("read-cell", Some("spreadsheet-operation"))
        .with_concept("write-cell", Some("spreadsheet-operation"))
        .with_concept("open-browser", Some("automation-operation"))
        .with_concept("approve-invoice", Some("manual-operation"))
        .with_concept("if", Some("control-flow-operation"))
        .with_concept("loop", Some("control-flow-operation"))
        .with_access("read-cell", "spreadsheet", AccessKind::DirectlyReads)
        .with_access("write-cell", "spreadsheet", AccessKind::DirectlyWrites)
        .with_access("open-browser", "session", AccessKind::ImplicitlyReads)
}

/// Builder for process trees with a flat structure unless stated otherwise
#[derive(Default)]
pub struct TreeBuilder {
    tree: ProcessTree,
    order: Vec<String>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, id: &str, info: NodeInfo) -> Self {
        self.tree.node_info.insert(id.to_string(), info);
        self.order.push(id.to_string());
        self
    }

    pub fn variable(mut self, id: &str) -> Self {
        self.tree
            .transient_data_info
            .insert(id.to_string(), serde_json::json!({ "name": id }));
        self
    }

    pub fn resource(mut self, id: &str) -> Self {
        self.tree
            .data_resource_info
            .insert(id.to_string(), serde_json::json!({ "name": id }));
        self
    }

    /// Finish with every node in one root branch, in insertion order
    pub fn build(mut self) -> ProcessTree {
        self.tree.tree.process = vec![self
            .order
            .iter()
            .map(|id| TreeEntry::Node(id.clone()))
            .collect()];
        self.tree
    }

    /// Finish with an explicit structure
    pub fn build_with_structure(mut self, process: Vec<Vec<TreeEntry>>) -> ProcessTree {
        self.tree.tree.process = process;
        self.tree
    }
}

pub fn leaf(id: &str) -> TreeEntry {
    TreeEntry::Node(id.to_string())
}

pub fn nested(label: &str, branch: Vec<TreeEntry>) -> TreeEntry {
    TreeEntry::Nested(label.to_string(), branch)
}
