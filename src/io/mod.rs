pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter};

use crate::errors::{MetricsError, Result};
use crate::model::{ContextMap, ProcessTree};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| MetricsError::io(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| MetricsError::io(path, e))
}

pub fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Read a process tree document (JSON)
pub fn read_process_tree(path: &Path) -> Result<ProcessTree> {
    let contents = read_file(path)?;
    serde_json::from_str(&contents).map_err(|e| MetricsError::parse(path, e))
}

/// Read a node-id to context mapping (JSON or YAML)
pub fn read_contexts(path: &Path) -> Result<ContextMap> {
    let contents = read_file(path)?;
    if is_yaml(path) {
        serde_yaml::from_str(&contents).map_err(|e| MetricsError::parse(path, e))
    } else {
        serde_json::from_str(&contents).map_err(|e| MetricsError::parse(path, e))
    }
}
