//! Configuration for botmetrics.
//!
//! Configuration lives in `.botmetrics.toml`, discovered in the working
//! directory or one of its ancestors, or passed explicitly on the command
//! line. Every section is optional; missing values fall back to the
//! calculator defaults.

mod core;
mod loader;

pub use self::core::{BotmetricsConfig, ClassificationConfig, ContextConfig, OutputConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, validate_config, CONFIG_FILE_NAME,
};

/// Default configuration file contents written by `botmetrics init`
pub const DEFAULT_CONFIG: &str = r#"# botmetrics configuration

[classification]
# Nodes whose ontology branch contains this concept are automation operations
automation_concept = "automation-operation"
# Nodes whose ontology branch contains this concept are decisions
decision_concept = "control-flow-operation"

[context]
# "sequential": count surface changes between consecutive operations
# "placeholder": report a fixed value of 2
switch_mode = "sequential"

[output]
default_format = "terminal"
"#;
