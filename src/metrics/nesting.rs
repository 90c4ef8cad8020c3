//! Control nesting depth of operation nodes.
//!
//! The structure is walked breadth first. Entries of the root branches sit
//! at depth 0; every nested sub-branch adds one level.

use super::types::Ratio;
use crate::errors::{MetricsError, Result};
use crate::model::{Branch, ProcessStructure, TreeEntry};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NestingDepth {
    pub max: usize,
    /// Mean depth over all leaves; undefined for an empty structure
    pub average: Ratio,
}

/// Leaf node ids with their depth, in traversal order
fn leaf_depths(structure: &ProcessStructure) -> Vec<(&str, usize)> {
    let mut leaves = Vec::new();
    let mut level: Vec<&Branch> = structure.process.iter().collect();
    let mut depth = 0;

    while !level.is_empty() {
        let mut next = Vec::new();
        for entry in level.into_iter().flatten() {
            match entry {
                TreeEntry::Node(id) => leaves.push((id.as_str(), depth)),
                TreeEntry::Nested(_, branch) => next.push(branch),
            }
        }
        level = next;
        depth += 1;
    }

    leaves
}

/// Depth of every leaf node id in the structure. Duplicate ids are
/// rejected by [`nesting_depth`].
pub fn depth_map(structure: &ProcessStructure) -> BTreeMap<&str, usize> {
    leaf_depths(structure).into_iter().collect()
}

/// Max and average nesting depth. The leaves must be exactly the
/// `operations` node ids, each listed once, otherwise the structure is
/// malformed.
pub fn nesting_depth(
    structure: &ProcessStructure,
    operations: &BTreeSet<&str>,
) -> Result<NestingDepth> {
    let leaves = leaf_depths(structure);
    let mut depths = BTreeMap::new();
    let mut duplicates = BTreeSet::new();
    for &(id, depth) in &leaves {
        if depths.insert(id, depth).is_some() {
            duplicates.insert(id);
        }
    }

    let mut unmatched: Vec<String> = operations
        .iter()
        .filter(|id| !depths.contains_key(**id))
        .map(|id| id.to_string())
        .collect();
    unmatched.extend(
        depths
            .keys()
            .filter(|id| !operations.contains(**id))
            .map(|id| id.to_string()),
    );
    unmatched.extend(duplicates.iter().map(|id| id.to_string()));

    if !unmatched.is_empty() {
        return Err(MetricsError::DepthMismatch {
            expected: operations.len(),
            visited: leaves.len(),
            unmatched,
        });
    }

    let max = depths.values().copied().max().unwrap_or(0);
    let total: usize = depths.values().sum();
    let average = Ratio::of(total as f64, depths.len() as f64);

    debug!(leaves = depths.len(), max, "Nesting depth computed");

    Ok(NestingDepth { max, average })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> TreeEntry {
        TreeEntry::Node(id.to_string())
    }

    fn nested(label: &str, branch: Vec<TreeEntry>) -> TreeEntry {
        TreeEntry::Nested(label.to_string(), branch)
    }

    fn structure(process: Vec<Branch>) -> ProcessStructure {
        ProcessStructure { process }
    }

    fn ops<'a>(ids: &[&'a str]) -> BTreeSet<&'a str> {
        ids.iter().copied().collect()
    }

    fn unmatched(err: MetricsError) -> Vec<String> {
        match err {
            MetricsError::DepthMismatch { unmatched, .. } => unmatched,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_flat_process_has_depth_zero() {
        let s = structure(vec![vec![node("a"), node("b"), node("c")]]);

        let depth = nesting_depth(&s, &ops(&["a", "b", "c"])).unwrap();

        assert_eq!(depth.max, 0);
        assert_eq!(depth.average.value(), Some(0.0));
    }

    #[test]
    fn test_nested_branches_increase_depth() {
        let s = structure(vec![vec![
            node("a"),
            nested(
                "if",
                vec![node("b"), nested("loop", vec![node("c"), node("d")])],
            ),
        ]]);

        let depths = depth_map(&s);
        assert_eq!(depths["a"], 0);
        assert_eq!(depths["b"], 1);
        assert_eq!(depths["c"], 2);
        assert_eq!(depths["d"], 2);

        let depth = nesting_depth(&s, &ops(&["a", "b", "c", "d"])).unwrap();
        assert_eq!(depth.max, 2);
        assert_eq!(depth.average.value(), Some(1.25));
    }

    #[test]
    fn test_parallel_root_branches_share_depth() {
        let s = structure(vec![vec![node("a")], vec![nested("x", vec![node("b")])]]);
        let depth = nesting_depth(&s, &ops(&["a", "b"])).unwrap();
        assert_eq!(depth.max, 1);
        assert_eq!(depth.average.value(), Some(0.5));
    }

    #[test]
    fn test_empty_structure() {
        let depth = nesting_depth(&ProcessStructure::default(), &BTreeSet::new()).unwrap();
        assert_eq!(depth.max, 0);
        assert!(!depth.average.is_defined());
    }

    #[test]
    fn test_missing_leaf_is_a_mismatch() {
        let s = structure(vec![vec![node("a"), node("b")]]);

        let err = nesting_depth(&s, &ops(&["a", "b", "c"])).unwrap_err();

        assert!(matches!(
            err,
            MetricsError::DepthMismatch {
                expected: 3,
                visited: 2,
                ..
            }
        ));
        assert_eq!(unmatched(err), vec!["c".to_string()]);
    }

    #[test]
    fn test_unknown_leaf_cannot_stand_in_for_missing_node() {
        let s = structure(vec![vec![node("n1"), nested("x", vec![node("ghost")])]]);

        let err = nesting_depth(&s, &ops(&["n1", "n2"])).unwrap_err();

        assert_eq!(unmatched(err), vec!["n2".to_string(), "ghost".to_string()]);
    }

    #[test]
    fn test_duplicate_leaf_is_rejected() {
        let s = structure(vec![vec![node("a"), nested("x", vec![node("a")])]]);

        let err = nesting_depth(&s, &ops(&["a"])).unwrap_err();

        assert!(matches!(
            err,
            MetricsError::DepthMismatch {
                expected: 1,
                visited: 2,
                ..
            }
        ));
        assert_eq!(unmatched(err), vec!["a".to_string()]);
    }
}
