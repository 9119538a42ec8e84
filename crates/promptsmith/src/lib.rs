//! Rule-based prompt analysis, rewriting, and templating.
//!
//! `promptsmith` scores prompts against a fixed rubric, rewrites them with
//! deterministic text transformations, wraps them in multi-section reasoning
//! scaffolds, and fills domain templates. Nothing calls a model: every
//! operation is a pure function of its input and the built-in catalog.
//!
//! # Getting started
//!
//! ```
//! use promptsmith::prelude::*;
//!
//! let optimizer = PromptOptimizer::new();
//!
//! let report = optimizer.analyze("write something about AI");
//! assert!(report.score < 100.0);
//!
//! let rewritten = optimizer.optimize("explain recursion", BasicStrategy::ChainOfThought);
//! assert!(rewritten.optimized.contains("step-by-step"));
//!
//! let scaffold = optimizer.advanced_optimize("plan a data migration", AdvancedChoice::Auto);
//! assert_eq!(scaffold.strategy, "Tree of Thoughts");
//! ```
//!
//! # Where to find things
//!
//! - **Score a prompt:** [`Analyzer`](analyzer::Analyzer) produces an
//!   [`AnalysisReport`](analyzer::AnalysisReport) with a score, issues, and
//!   paired suggestions.
//!
//! - **Rewrite a prompt:** [`BasicRewriteEngine`](rewrite::BasicRewriteEngine)
//!   applies one of eight idempotent [`BasicStrategy`](strategy::BasicStrategy)
//!   transforms; [`AdvancedRewriteEngine`](rewrite::advanced::AdvancedRewriteEngine)
//!   emits one of eight [`AdvancedStrategy`](strategy::AdvancedStrategy)
//!   scaffolds.
//!
//! - **Let the library choose:** [`StrategySelector`](selector::StrategySelector)
//!   picks a basic strategy from an analysis report, or an advanced one from
//!   prompt keywords.
//!
//! - **Fill a template:** [`TemplateRegistry`](templates::TemplateRegistry)
//!   holds twelve validated domain templates; [`UseCase`](templates::quick::UseCase)
//!   maps to five short starter prompts.
//!
//! - **Call it as tools:** [`ToolSet`](tools::ToolSet) dispatches named tools
//!   with JSON arguments; [`ServerConfig`](config::ServerConfig) builds one with
//!   all nine prompt tools registered.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`analyzer`] | Rubric scoring |
//! | [`strategy`] | Strategy enums and parsing |
//! | [`rewrite`] | Basic transforms, improvement detection, advanced scaffolds |
//! | [`selector`] | Strategy selection rules |
//! | [`templates`] | Domain template registry, catalog, quick templates |
//! | [`optimizer`] | [`PromptOptimizer`] composition root |
//! | [`tools`] | Tool trait, dispatch, caching, the prompt tools, JSON-lines serving |
//! | [`config`] | Tool-server configuration |
//! | [`error`] | [`PromptError`] |

pub mod analyzer;
pub mod config;
pub mod error;
pub mod optimizer;
pub mod prelude;
pub mod rewrite;
pub mod selector;
pub mod strategy;
pub mod templates;
pub mod tools;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use error::{PromptError, Result};
pub use optimizer::PromptOptimizer;

// Re-export schemars for downstream crates.
pub use schemars;

// ── Schema generation ──────────────────────────────────────────────

/// Generate a JSON Schema `serde_json::Value` from a type that implements
/// `schemars::JsonSchema`.
///
/// # Example
///
/// ```
/// use promptsmith::json_schema_for;
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, JsonSchema)]
/// struct SearchArgs {
///     query: String,
///     #[serde(default)]
///     domain: Option<String>,
/// }
///
/// let schema = json_schema_for::<SearchArgs>();
/// assert_eq!(schema["type"], "object");
/// assert!(schema["required"].as_array().unwrap().contains(&"query".into()));
/// ```
pub fn json_schema_for<T: JsonSchema>() -> serde_json::Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(schema)
        .unwrap_or_else(|_| serde_json::json!({"type": "object", "properties": {}}))
}

// ── Tool types ─────────────────────────────────────────────────────

/// The type of a tool definition. Currently always `Function`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum ToolType {
    #[serde(rename = "function")]
    Function,
}

/// Tool definition in function-calling format.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ToolDef {
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub function: FunctionDef,
}

impl ToolDef {
    /// Create a function tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            tool_type: ToolType::Function,
            function: FunctionDef {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FunctionDef {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_def_serializes_in_function_format() {
        let def = ToolDef::new("analyze_prompt", "Score a prompt", serde_json::json!({}));
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["type"], "function");
        assert_eq!(json["function"]["name"], "analyze_prompt");
    }
}
