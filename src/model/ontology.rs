//! Domain ontology: the concept hierarchy and the operation table.
//!
//! The calculator only needs two questions answered, each behind its own
//! trait so other ontology stores can be plugged in:
//!
//! - [`ConceptHierarchy::parent_of`]: where does a concept sit in the tree
//! - [`OperationTable::accessed_data`]: which data accesses an operation
//!   concept declares
//!
//! [`Ontology`] is the in-memory implementation loaded from JSON or YAML.

use crate::errors::{MetricsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Position of a known concept relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentLink<'a> {
    Root,
    Parent(&'a str),
}

pub trait ConceptHierarchy {
    /// Parent link of `concept`, or `None` when the concept is unknown.
    fn parent_of(&self, concept: &str) -> Option<ParentLink<'_>>;
}

pub trait OperationTable {
    /// Data accesses declared for an operation concept. Concepts without
    /// an entry declare no access.
    fn accessed_data(&self, concept: &str) -> &[DataAccess];
}

/// How an operation touches a data resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessKind {
    #[serde(alias = "directlyReads")]
    DirectlyReads,
    #[serde(alias = "implicitlyReads")]
    ImplicitlyReads,
    #[serde(alias = "directlyWrites")]
    DirectlyWrites,
    #[serde(alias = "implicitlyWrites")]
    ImplicitlyWrites,
}

impl AccessKind {
    pub fn is_read(self) -> bool {
        matches!(self, Self::DirectlyReads | Self::ImplicitlyReads)
    }

    pub fn is_write(self) -> bool {
        matches!(self, Self::DirectlyWrites | Self::ImplicitlyWrites)
    }
}

/// One declared data access of an operation concept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataAccess {
    #[serde(default)]
    pub resource_role: String,
    #[serde(rename = "type")]
    pub kind: AccessKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationEntry {
    #[serde(default)]
    pub accessed_data: Vec<DataAccess>,
}

/// In-memory ontology
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ontology {
    #[serde(default)]
    pub concepts: BTreeMap<String, ConceptEntry>,
    #[serde(default)]
    pub operations: BTreeMap<String, OperationEntry>,
}

impl Ontology {
    /// Load an ontology document. Files ending in `.yaml`/`.yml` are read
    /// as YAML, everything else as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = crate::io::read_file(path)?;
        if crate::io::is_yaml(path) {
            serde_yaml::from_str(&contents).map_err(|e| MetricsError::parse(path, e))
        } else {
            serde_json::from_str(&contents).map_err(|e| MetricsError::parse(path, e))
        }
    }

    /// Add a concept below `parent` (or as a root when `parent` is `None`)
    pub fn with_concept(mut self, concept: &str, parent: Option<&str>) -> Self {
        self.concepts.insert(
            concept.to_string(),
            ConceptEntry {
                parent: parent.map(str::to_string),
            },
        );
        self
    }

    /// Declare a data access for an operation concept
    pub fn with_access(mut self, concept: &str, role: &str, kind: AccessKind) -> Self {
        self.operations
            .entry(concept.to_string())
            .or_default()
            .accessed_data
            .push(DataAccess {
                resource_role: role.to_string(),
                kind,
            });
        self
    }
}

impl ConceptHierarchy for Ontology {
    fn parent_of(&self, concept: &str) -> Option<ParentLink<'_>> {
        self.concepts
            .get(concept)
            .map(|entry| match entry.parent.as_deref() {
                Some(parent) => ParentLink::Parent(parent),
                None => ParentLink::Root,
            })
    }
}

impl OperationTable for Ontology {
    fn accessed_data(&self, concept: &str) -> &[DataAccess] {
        self.operations
            .get(concept)
            .map(|entry| entry.accessed_data.as_slice())
            .unwrap_or(&[])
    }
}
