//! Error types for botmetrics operations.
//!
//! Every failure in the metrics pipeline is a data-integrity problem in the
//! input (an ontology that does not cover the tree, a malformed nesting
//! structure) or an I/O problem at the edges. Degenerate ratios are not
//! errors; they are carried as [`Ratio::UNDEFINED`](crate::metrics::Ratio).
//!
//! # Example
//!
//! ```rust
//! use botmetrics::errors::MetricsError;
//!
//! let err = MetricsError::unknown_concept("read-cell").for_node("n4");
//! assert_eq!(
//!     err.to_string(),
//!     "Unknown ontology concept 'read-cell' (referenced by node 'n4')"
//! );
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for botmetrics operations
#[derive(Debug, Error)]
pub enum MetricsError {
    /// A node references a concept the ontology hierarchy does not contain
    #[error("Unknown ontology concept '{concept}'{}", node_suffix(.node))]
    UnknownConcept {
        concept: String,
        node: Option<String>,
    },

    /// Following parent links from a concept revisited a concept
    #[error("Ontology cycle detected while resolving '{concept}': {}", .chain.join(" -> "))]
    OntologyCycle { concept: String, chain: Vec<String> },

    /// The nesting traversal did not visit every operation node exactly once
    #[error(
        "Nesting depth traversal visited {visited} leaves but the process has {expected} operations{}",
        unmatched_suffix(.unmatched)
    )]
    DepthMismatch {
        expected: usize,
        visited: usize,
        /// Missing, duplicated or unknown leaf ids
        unmatched: Vec<String>,
    },

    /// File system errors while reading inputs or writing results
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input documents that could not be deserialized
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

fn node_suffix(node: &Option<String>) -> String {
    node.as_ref()
        .map(|id| format!(" (referenced by node '{}')", id))
        .unwrap_or_default()
}

fn unmatched_suffix(unmatched: &[String]) -> String {
    if unmatched.is_empty() {
        String::new()
    } else {
        format!(" (unmatched: {})", unmatched.join(", "))
    }
}

impl MetricsError {
    /// Create an unknown-concept error without node context
    pub fn unknown_concept(concept: impl Into<String>) -> Self {
        Self::UnknownConcept {
            concept: concept.into(),
            node: None,
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with path context
    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Attach the id of the node that referenced an unknown concept.
    ///
    /// Other variants are returned unchanged.
    pub fn for_node(self, node_id: &str) -> Self {
        match self {
            Self::UnknownConcept { concept, node: None } => Self::UnknownConcept {
                concept,
                node: Some(node_id.to_string()),
            },
            other => other,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, MetricsError>;
