//! Composition root tying the analyzer, selector, engines, and templates
//! together.
//!
//! [`PromptOptimizer`] is what the tool layer and the CLI hold. Every method
//! is a pure function of its arguments and the immutable template registry,
//! so one instance can be shared behind an `Arc` across concurrent calls.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analyzer::{AnalysisReport, Analyzer};
use crate::error::Result;
use crate::rewrite::advanced::{AdvancedRewriteEngine, AdvancedRewriteResult};
use crate::rewrite::{BasicRewriteEngine, RewriteResult};
use crate::selector::{StrategySelector, auto_reason};
use crate::strategy::{AdvancedChoice, AdvancedStrategy, BasicStrategy};
use crate::templates::TemplateRegistry;
use crate::templates::quick::UseCase;

/// A basic rewrite chosen by the selector, with the reason for the choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoRewriteResult {
    #[serde(flatten)]
    pub result: RewriteResult,
    pub auto_selected_reason: String,
}

/// Owns one of each component and exposes the caller-facing operations.
#[derive(Debug, Clone)]
pub struct PromptOptimizer {
    analyzer: Analyzer,
    selector: StrategySelector,
    basic: BasicRewriteEngine,
    advanced: AdvancedRewriteEngine,
    templates: TemplateRegistry,
}

impl Default for PromptOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptOptimizer {
    /// Optimizer backed by the built-in template catalog.
    pub fn new() -> Self {
        Self::with_templates(TemplateRegistry::builtin())
    }

    /// Optimizer backed by a caller-supplied registry.
    pub fn with_templates(templates: TemplateRegistry) -> Self {
        Self {
            analyzer: Analyzer::new(),
            selector: StrategySelector::new(),
            basic: BasicRewriteEngine::new(),
            advanced: AdvancedRewriteEngine::new(),
            templates,
        }
    }

    // ── Analysis and basic rewrites ──

    pub fn analyze(&self, prompt: &str) -> AnalysisReport {
        self.analyzer.analyze(prompt)
    }

    pub fn optimize(&self, prompt: &str, strategy: BasicStrategy) -> RewriteResult {
        self.basic.rewrite(prompt, strategy)
    }

    /// Like [`optimize`](Self::optimize), with the strategy given by name.
    pub fn optimize_named(&self, prompt: &str, strategy: &str) -> Result<RewriteResult> {
        Ok(self.optimize(prompt, strategy.parse()?))
    }

    pub fn select_basic(&self, prompt: &str) -> BasicStrategy {
        self.selector.select_basic(&self.analyze(prompt))
    }

    /// Analyze, pick a basic strategy from the report, and apply it.
    ///
    /// `context` describes the use case; it is logged but does not change
    /// strategy selection.
    pub fn auto_optimize(&self, prompt: &str, context: Option<&str>) -> AutoRewriteResult {
        if let Some(context) = context {
            debug!("Auto-optimizing with caller context: {context}");
        }
        let report = self.analyze(prompt);
        let strategy = self.selector.select_basic(&report);
        AutoRewriteResult {
            result: self.optimize(prompt, strategy),
            auto_selected_reason: auto_reason(strategy, &report),
        }
    }

    // ── Advanced rewrites ──

    pub fn select_advanced(&self, prompt: &str) -> AdvancedStrategy {
        self.selector.select_advanced(prompt)
    }

    pub fn advanced_optimize(&self, prompt: &str, choice: AdvancedChoice) -> AdvancedRewriteResult {
        let strategy = match choice {
            AdvancedChoice::Auto => self.select_advanced(prompt),
            AdvancedChoice::Explicit(strategy) => strategy,
        };
        self.advanced.rewrite(prompt, strategy)
    }

    /// Like [`advanced_optimize`](Self::advanced_optimize), with the strategy
    /// given by name (`"auto"` included).
    pub fn advanced_optimize_named(
        &self,
        prompt: &str,
        strategy: &str,
    ) -> Result<AdvancedRewriteResult> {
        Ok(self.advanced_optimize(prompt, strategy.parse()?))
    }

    // ── Templates ──

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn render_template(&self, id: &str, values: &HashMap<String, String>) -> Result<String> {
        self.templates.render(id, values)
    }

    /// Starter prompt for a use case given by name.
    pub fn quick_template(&self, use_case: &str) -> Result<&'static str> {
        Ok(use_case.parse::<UseCase>()?.template())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptError;

    #[test]
    fn auto_optimize_reports_choice_and_score() {
        let optimizer = PromptOptimizer::new();
        let auto = optimizer.auto_optimize("fix this", None);
        assert_eq!(auto.result.strategy, BasicStrategy::Specificity);
        assert_eq!(
            auto.auto_selected_reason,
            "Chose specificity based on analysis score of 65.0"
        );
    }

    #[test]
    fn auto_result_flattens_rewrite_fields() {
        let auto = PromptOptimizer::new().auto_optimize("thing stuff whatever somehow", Some("docs"));
        let json = serde_json::to_value(&auto).unwrap();
        assert_eq!(json["strategy"], "clarity");
        assert!(json["optimized"].is_string());
        assert!(json["auto_selected_reason"].as_str().unwrap().starts_with("Chose clarity"));
        assert!(json.get("result").is_none());
    }

    #[test]
    fn advanced_auto_uses_selector() {
        let optimizer = PromptOptimizer::new();
        let result = optimizer
            .advanced_optimize_named("solve this routing puzzle", "auto")
            .unwrap();
        assert_eq!(result.strategy, "Tree of Thoughts");
    }

    #[test]
    fn named_operations_reject_unknown_tags() {
        let optimizer = PromptOptimizer::new();
        assert!(matches!(
            optimizer.optimize_named("x", "medprompt"),
            Err(PromptError::UnknownStrategy { .. })
        ));
        assert!(matches!(
            optimizer.advanced_optimize_named("x", "clarity"),
            Err(PromptError::UnknownStrategy { .. })
        ));
        assert!(matches!(
            optimizer.quick_template("poetry"),
            Err(PromptError::UnknownUseCase { .. })
        ));
    }

    #[test]
    fn optimizer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PromptOptimizer>();
    }
}
