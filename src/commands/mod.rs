//! CLI command implementations for botmetrics.
//!
//! Available commands:
//! - **analyze**: Compute the metrics record of a process model
//! - **explain**: Print the definition of every metric
//! - **init**: Initialize a new botmetrics configuration file

pub mod analyze;
pub mod explain;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use explain::explain_metrics;
pub use init::init_config;
