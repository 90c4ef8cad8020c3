use serde::{Deserialize, Serialize};

use crate::io::OutputFormat;
use crate::metrics::{CalculatorOptions, ContextSwitchMode, AUTOMATION_CONCEPT, DECISION_CONCEPT};

/// Root configuration structure for botmetrics
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BotmetricsConfig {
    /// Classification concepts looked up in node branches
    #[serde(default)]
    pub classification: Option<ClassificationConfig>,

    /// Context switch counting
    #[serde(default)]
    pub context: Option<ContextConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassificationConfig {
    /// Concept whose descendants count as automation operations
    #[serde(default = "default_automation_concept")]
    pub automation_concept: String,

    /// Concept whose descendants count as decisions
    #[serde(default = "default_decision_concept")]
    pub decision_concept: String,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            automation_concept: default_automation_concept(),
            decision_concept: default_decision_concept(),
        }
    }
}

fn default_automation_concept() -> String {
    AUTOMATION_CONCEPT.to_string()
}

fn default_decision_concept() -> String {
    DECISION_CONCEPT.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContextConfig {
    #[serde(default)]
    pub switch_mode: ContextSwitchMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub default_format: Option<String>,
}

impl BotmetricsConfig {
    pub fn classification(&self) -> ClassificationConfig {
        self.classification.clone().unwrap_or_default()
    }

    pub fn switch_mode(&self) -> ContextSwitchMode {
        self.context
            .as_ref()
            .map(|c| c.switch_mode)
            .unwrap_or_default()
    }

    /// Output format named in the config, if it is a known one
    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
            .and_then(OutputFormat::parse)
    }

    /// Calculator options derived from this configuration
    pub fn calculator_options(&self) -> CalculatorOptions {
        let classification = self.classification();
        CalculatorOptions {
            automation_concept: classification.automation_concept,
            decision_concept: classification.decision_concept,
            context_switch_mode: self.switch_mode(),
            ..Default::default()
        }
    }
}
