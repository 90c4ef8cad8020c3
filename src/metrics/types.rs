//! Result record produced by the metrics calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A derived ratio that may be undefined.
///
/// Ratios whose denominator is zero carry the NaN sentinel instead of
/// failing. Use [`Ratio::value`] or [`Ratio::is_defined`] before comparing.
/// Serialized as a number, or `null` when undefined.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub struct Ratio(f64);

impl Ratio {
    pub const UNDEFINED: Ratio = Ratio(f64::NAN);

    /// `numerator / denominator`, undefined when the denominator is zero
    pub fn of(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            Self::UNDEFINED
        } else {
            Self(numerator / denominator)
        }
    }

    /// Multiply a defined ratio; undefined stays undefined
    pub fn scaled(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    pub fn is_defined(self) -> bool {
        !self.0.is_nan()
    }

    pub fn value(self) -> Option<f64> {
        self.is_defined().then_some(self.0)
    }

    /// The raw value, NaN when undefined
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        (self.0.is_nan() && other.0.is_nan()) || self.0 == other.0
    }
}

impl From<Option<f64>> for Ratio {
    fn from(value: Option<f64>) -> Self {
        value.map(Ratio).unwrap_or(Self::UNDEFINED)
    }
}

impl From<Ratio> for Option<f64> {
    fn from(ratio: Ratio) -> Self {
        ratio.value()
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{:.2}", v),
            None => write!(f, "n/a"),
        }
    }
}

/// Identifies one entry of the metrics record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricKind {
    Operations,
    AutomationOperations,
    AutomationRatio,
    Decisions,
    Variables,
    DataResources,
    DataResourcesRead,
    DataResourcesWritten,
    DataResourceAccessRatio,
    Software,
    Contexts,
    ContextSwitches,
    ContextSwitchRatio,
    NestingDepthMax,
    NestingDepthAvg,
}

impl MetricKind {
    pub const ALL: [MetricKind; 15] = [
        Self::Operations,
        Self::AutomationOperations,
        Self::AutomationRatio,
        Self::Decisions,
        Self::Variables,
        Self::DataResources,
        Self::DataResourcesRead,
        Self::DataResourcesWritten,
        Self::DataResourceAccessRatio,
        Self::Software,
        Self::Contexts,
        Self::ContextSwitches,
        Self::ContextSwitchRatio,
        Self::NestingDepthMax,
        Self::NestingDepthAvg,
    ];

    /// Key used in serialized records
    pub fn key(self) -> &'static str {
        match self {
            Self::Operations => "no_operations",
            Self::AutomationOperations => "no_automationOperations",
            Self::AutomationRatio => "ri_automationOperations",
            Self::Decisions => "no_decisions",
            Self::Variables => "no_variables",
            Self::DataResources => "no_dataResources",
            Self::DataResourcesRead => "no_dataResourcesRead",
            Self::DataResourcesWritten => "no_dataResourcesWritten",
            Self::DataResourceAccessRatio => "ri_dataResourcesAccess",
            Self::Software => "no_software",
            Self::Contexts => "no_contexts",
            Self::ContextSwitches => "no_contextSwitches",
            Self::ContextSwitchRatio => "ri_contextSwitches",
            Self::NestingDepthMax => "no_nestingDepthMax",
            Self::NestingDepthAvg => "no_nestingDepthAvg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Operations => "Operations",
            Self::AutomationOperations => "Automation operations",
            Self::AutomationRatio => "Automation ratio (%)",
            Self::Decisions => "Decisions",
            Self::Variables => "Variables",
            Self::DataResources => "Data resources",
            Self::DataResourcesRead => "Data resources read",
            Self::DataResourcesWritten => "Data resources written",
            Self::DataResourceAccessRatio => "Data resource access balance",
            Self::Software => "Software",
            Self::Contexts => "Contexts",
            Self::ContextSwitches => "Context switches",
            Self::ContextSwitchRatio => "Contexts per switch",
            Self::NestingDepthMax => "Max nesting depth",
            Self::NestingDepthAvg => "Average nesting depth",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Operations => "Number of operation nodes in the process",
            Self::AutomationOperations => {
                "Operations classified below the automation concept in the ontology"
            }
            Self::AutomationRatio => "Automation operations / operations x 100",
            Self::Decisions => "Operations classified below the decision concept in the ontology",
            Self::Variables => "Number of transient (process-local) variables",
            Self::DataResources => "Number of persistent data resources",
            Self::DataResourcesRead => {
                "Distinct primary input resources of operations declaring a read access"
            }
            Self::DataResourcesWritten => {
                "Distinct primary output resources of operations declaring a write access"
            }
            Self::DataResourceAccessRatio => {
                "(reads - writes) / (reads + writes); +1 read-only, -1 write-only"
            }
            Self::Software => "Distinct software surfaces used by the operations",
            Self::Contexts => "Distinct (software, data) surface pairs",
            Self::ContextSwitches => {
                "Changes of (software, data) surface between consecutive operations"
            }
            Self::ContextSwitchRatio => "Contexts / context switches",
            Self::NestingDepthMax => "Deepest control nesting level of any operation",
            Self::NestingDepthAvg => "Mean control nesting level over all operations",
        }
    }

    pub fn is_ratio(self) -> bool {
        matches!(
            self,
            Self::AutomationRatio
                | Self::DataResourceAccessRatio
                | Self::ContextSwitchRatio
                | Self::NestingDepthAvg
        )
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Value of a single metric entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(usize),
    Ratio(Ratio),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{}", n),
            Self::Ratio(r) => write!(f, "{}", r),
        }
    }
}

/// Complexity and automation metrics of one process model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotModelMetrics {
    #[serde(rename = "no_operations")]
    pub operations: usize,
    #[serde(rename = "no_automationOperations")]
    pub automation_operations: usize,
    #[serde(rename = "ri_automationOperations")]
    pub automation_ratio: Ratio,
    #[serde(rename = "no_decisions")]
    pub decisions: usize,
    #[serde(rename = "no_variables")]
    pub variables: usize,
    #[serde(rename = "no_dataResources")]
    pub data_resources: usize,
    #[serde(rename = "no_dataResourcesRead")]
    pub data_resources_read: usize,
    #[serde(rename = "no_dataResourcesWritten")]
    pub data_resources_written: usize,
    #[serde(rename = "ri_dataResourcesAccess")]
    pub data_resource_access_ratio: Ratio,
    #[serde(rename = "no_software")]
    pub software: usize,
    #[serde(rename = "no_contexts")]
    pub contexts: usize,
    #[serde(rename = "no_contextSwitches")]
    pub context_switches: usize,
    #[serde(rename = "ri_contextSwitches")]
    pub context_switch_ratio: Ratio,
    #[serde(rename = "no_nestingDepthMax")]
    pub nesting_depth_max: usize,
    #[serde(rename = "no_nestingDepthAvg")]
    pub nesting_depth_avg: Ratio,
}

impl BotModelMetrics {
    pub fn get(&self, kind: MetricKind) -> MetricValue {
        use MetricValue::{Count, Ratio};
        match kind {
            MetricKind::Operations => Count(self.operations),
            MetricKind::AutomationOperations => Count(self.automation_operations),
            MetricKind::AutomationRatio => Ratio(self.automation_ratio),
            MetricKind::Decisions => Count(self.decisions),
            MetricKind::Variables => Count(self.variables),
            MetricKind::DataResources => Count(self.data_resources),
            MetricKind::DataResourcesRead => Count(self.data_resources_read),
            MetricKind::DataResourcesWritten => Count(self.data_resources_written),
            MetricKind::DataResourceAccessRatio => Ratio(self.data_resource_access_ratio),
            MetricKind::Software => Count(self.software),
            MetricKind::Contexts => Count(self.contexts),
            MetricKind::ContextSwitches => Count(self.context_switches),
            MetricKind::ContextSwitchRatio => Ratio(self.context_switch_ratio),
            MetricKind::NestingDepthMax => Count(self.nesting_depth_max),
            MetricKind::NestingDepthAvg => Ratio(self.nesting_depth_avg),
        }
    }

    /// All entries in their fixed order
    pub fn entries(&self) -> impl Iterator<Item = (MetricKind, MetricValue)> + '_ {
        MetricKind::ALL.iter().map(move |&kind| (kind, self.get(kind)))
    }
}
