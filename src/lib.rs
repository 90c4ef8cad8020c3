//! Complexity and automation metrics for RPA process models.
//!
//! A process model is a tree of operation nodes, each classified by a
//! concept of a domain ontology, together with its transient variables,
//! data resources and per-node execution contexts. [`calculate_metrics`]
//! turns one such model into a [`BotModelMetrics`] record.
//!
//! ```rust
//! use botmetrics::{calculate_metrics, CalculatorOptions, NoContexts, NodeInfo, Ontology, ProcessTree};
//!
//! let ontology = Ontology::default()
//!     .with_concept("operation", None)
//!     .with_concept("automation-operation", Some("operation"))
//!     .with_concept("click", Some("automation-operation"));
//!
//! let mut tree: ProcessTree = serde_json::from_str(r#"{"tree": {"Process": [["n1"]]}}"#).unwrap();
//! tree.node_info.insert("n1".into(), NodeInfo::new("click"));
//!
//! let metrics = calculate_metrics(&tree, &ontology, &NoContexts, CalculatorOptions::default()).unwrap();
//! assert_eq!(metrics.automation_ratio.value(), Some(100.0));
//! ```

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod metrics;
pub mod model;

// Re-export commonly used types
pub use crate::errors::{MetricsError, Result};

pub use crate::metrics::{
    calculate_metrics, BotModelMetrics, BotModelMetricsCalculator, CalculatorOptions,
    ContextSwitchMode, MetricKind, MetricValue, Ratio,
};

pub use crate::model::{
    AccessKind, ContextAnalyzer, ContextMap, NoContexts, NodeInfo, Ontology, OperationContext,
    ProcessTree, TreeEntry,
};

pub use crate::config::{load_config, BotmetricsConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
