//! Metrics calculation pipeline.
//!
//! A [`BotModelMetricsCalculator`] is built for one process tree. Building
//! it attributes contexts and resolves the ontology branch of every concept
//! the tree uses; [`BotModelMetricsCalculator::model_metrics`] then runs the
//! stages below and assembles the record from their outputs:
//!
//! 1. counting ([`counts::aggregate`])
//! 2. context switches ([`switches::context_switches`])
//! 3. ratio derivation ([`ratios::derive`])
//! 4. nesting depth ([`nesting::nesting_depth`])

use super::branches::{resolve_branches, OntologyBranches};
use super::counts::{self, Classification, RawCounts, ResourcePolicy};
use super::nesting::{self, NestingDepth};
use super::ratios::{self, DerivedRatios};
use super::switches::{self, ContextSwitchMode};
use super::types::BotModelMetrics;
use crate::errors::Result;
use crate::model::{ConceptHierarchy, ContextAnalyzer, ContextMap, OperationTable, ProcessTree};
use std::collections::BTreeSet;
use tracing::{debug, info, info_span, trace};

/// Ontology concept marking automation operations
pub const AUTOMATION_CONCEPT: &str = "automation-operation";
/// Ontology concept marking decisions (control flow)
pub const DECISION_CONCEPT: &str = "control-flow-operation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorOptions {
    pub automation_concept: String,
    pub decision_concept: String,
    pub context_switch_mode: ContextSwitchMode,
    pub resource_policy: ResourcePolicy,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            automation_concept: AUTOMATION_CONCEPT.to_string(),
            decision_concept: DECISION_CONCEPT.to_string(),
            context_switch_mode: ContextSwitchMode::default(),
            resource_policy: ResourcePolicy::default(),
        }
    }
}

pub struct BotModelMetricsCalculator<'a, O: ?Sized> {
    tree: &'a ProcessTree,
    ontology: &'a O,
    contexts: ContextMap,
    branches: OntologyBranches,
    options: CalculatorOptions,
}

impl<'a, O> BotModelMetricsCalculator<'a, O>
where
    O: ConceptHierarchy + OperationTable + ?Sized,
{
    pub fn new<A>(tree: &'a ProcessTree, ontology: &'a O, analyzer: &A) -> Result<Self>
    where
        A: ContextAnalyzer + ?Sized,
    {
        Self::with_options(tree, ontology, analyzer, CalculatorOptions::default())
    }

    pub fn with_options<A>(
        tree: &'a ProcessTree,
        ontology: &'a O,
        analyzer: &A,
        options: CalculatorOptions,
    ) -> Result<Self>
    where
        A: ContextAnalyzer + ?Sized,
    {
        let contexts = analyzer.analyze(tree);
        debug!(contexts = contexts.len(), "Contexts attributed");

        let branches = {
            let _span = info_span!("branch_resolution").entered();
            resolve_branches(ontology, &tree.concepts())?
        };
        debug!(concepts = branches.len(), "Ontology branches resolved");
        for (concept, branch) in branches.iter() {
            trace!(concept = %concept, branch = %branch.join(" > "), "Resolved branch");
        }

        Ok(Self {
            tree,
            ontology,
            contexts,
            branches,
            options,
        })
    }

    pub fn branches(&self) -> &OntologyBranches {
        &self.branches
    }

    pub fn contexts(&self) -> &ContextMap {
        &self.contexts
    }

    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    /// Compute the full metrics record
    pub fn model_metrics(&self) -> Result<BotModelMetrics> {
        let counts = self.counts()?;
        let switches = self.context_switches();
        let ratios = {
            let _span = info_span!("ratio_derivation").entered();
            ratios::derive(&counts, switches)
        };
        let depth = self.nesting_depth()?;

        info!(
            operations = counts.operations,
            automation = counts.automation_operations,
            decisions = counts.decisions,
            "Process metrics computed"
        );

        Ok(assemble(&counts, switches, &ratios, &depth))
    }

    fn counts(&self) -> Result<RawCounts> {
        let _span = info_span!("counting").entered();
        counts::aggregate(
            self.tree,
            &self.branches,
            self.ontology,
            &self.contexts,
            Classification {
                automation: &self.options.automation_concept,
                decision: &self.options.decision_concept,
            },
            self.options.resource_policy,
        )
    }

    fn context_switches(&self) -> usize {
        let _span = info_span!("context_switches").entered();
        switches::context_switches(self.options.context_switch_mode, self.tree, &self.contexts)
    }

    fn nesting_depth(&self) -> Result<NestingDepth> {
        let _span = info_span!("nesting_depth").entered();
        let operations: BTreeSet<&str> = self.tree.node_info.keys().map(String::as_str).collect();
        nesting::nesting_depth(&self.tree.tree, &operations)
    }
}

fn assemble(
    counts: &RawCounts,
    context_switches: usize,
    ratios: &DerivedRatios,
    depth: &NestingDepth,
) -> BotModelMetrics {
    BotModelMetrics {
        operations: counts.operations,
        automation_operations: counts.automation_operations,
        automation_ratio: ratios.automation,
        decisions: counts.decisions,
        variables: counts.variables,
        data_resources: counts.data_resources,
        data_resources_read: counts.data_resources_read,
        data_resources_written: counts.data_resources_written,
        data_resource_access_ratio: ratios.data_resource_access,
        software: counts.software,
        contexts: counts.contexts,
        context_switches,
        context_switch_ratio: ratios.context_switch,
        nesting_depth_max: depth.max,
        nesting_depth_avg: depth.average,
    }
}

/// Build a calculator and compute the record in one call
pub fn calculate_metrics<O, A>(
    tree: &ProcessTree,
    ontology: &O,
    analyzer: &A,
    options: CalculatorOptions,
) -> Result<BotModelMetrics>
where
    O: ConceptHierarchy + OperationTable + ?Sized,
    A: ContextAnalyzer + ?Sized,
{
    BotModelMetricsCalculator::with_options(tree, ontology, analyzer, options)?.model_metrics()
}
