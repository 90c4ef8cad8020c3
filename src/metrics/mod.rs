//! Metrics calculation module
//!
//! Computes the fixed complexity and automation metric panel of a process
//! model. Each stage is a pure function over immutable inputs; the
//! [`calculator`] wires them together.

pub mod branches;
pub mod calculator;
pub mod counts;
pub mod nesting;
pub mod ratios;
pub mod switches;
pub mod types;

pub use branches::{resolve_branch, resolve_branches, OntologyBranches};
pub use calculator::{
    calculate_metrics, BotModelMetricsCalculator, CalculatorOptions, AUTOMATION_CONCEPT,
    DECISION_CONCEPT,
};
pub use counts::{AccessDirection, Classification, RawCounts, ResourcePolicy};
pub use nesting::NestingDepth;
pub use switches::{ContextSwitchMode, PLACEHOLDER_SWITCHES};
pub use types::{BotModelMetrics, MetricKind, MetricValue, Ratio};
