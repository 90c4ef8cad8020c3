//! Context switches along execution order.

use crate::model::{ContextMap, ProcessTree};
use serde::{Deserialize, Serialize};

/// How the context-switch count is produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextSwitchMode {
    /// Count surface changes between consecutive context-bearing operations
    #[default]
    Sequential,
    /// Report the fixed value [`PLACEHOLDER_SWITCHES`]
    Placeholder,
}

/// Value reported in [`ContextSwitchMode::Placeholder`] mode
pub const PLACEHOLDER_SWITCHES: usize = 2;

/// Number of times the `(software, data)` surface changes when the
/// operations run in execution order. Operations without a complete
/// signature do not interrupt the sequence.
pub fn count_context_switches(tree: &ProcessTree, contexts: &ContextMap) -> usize {
    let signatures: Vec<_> = tree
        .execution_order()
        .into_iter()
        .filter_map(|node_id| contexts.get(node_id)?.signature())
        .collect();

    signatures.windows(2).filter(|pair| pair[0] != pair[1]).count()
}

pub fn context_switches(mode: ContextSwitchMode, tree: &ProcessTree, contexts: &ContextMap) -> usize {
    match mode {
        ContextSwitchMode::Sequential => count_context_switches(tree, contexts),
        ContextSwitchMode::Placeholder => PLACEHOLDER_SWITCHES,
    }
}
