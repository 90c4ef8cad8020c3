//! Input model consumed by the metrics calculator.

pub mod context;
pub mod ontology;
pub mod process;

pub use context::{ContextAnalyzer, ContextMap, NoContexts, OperationContext};
pub use ontology::{
    AccessKind, ConceptEntry, ConceptHierarchy, DataAccess, Ontology, OperationEntry,
    OperationTable, ParentLink,
};
pub use process::{
    Branch, ConceptId, NodeId, NodeInfo, ProcessStructure, ProcessTree, ResourceId, TreeEntry,
};
