//! Tool boundary over the prompt optimizer.
//!
//! Every caller-facing operation is exposed as a named [`Tool`] taking JSON
//! arguments and returning a string. Tools are collected into a [`ToolSet`]
//! which handles dispatch, schema validation, memoization, and result size limits.
//!
//! # Submodules
//!
//! - [`core`]: [`Tool`] trait, [`ToolSet`], [`FnTool`], argument helpers.
//! - [`spec`]: [`ToolSpec`](spec::ToolSpec) builder for structured tool
//!   descriptions with `when_to_use` / `when_not_to_use` guidance.
//! - [`cache`]: bounded result cache keyed by tool name and arguments.
//! - [`prompt_tools`]: the nine prompt tools. Register them all with
//!   [`PromptToolsExt::with_prompt_tools`].
//! - [`serve`]: JSON-lines request loop over any async reader and writer.

pub mod cache;
pub mod core;
pub mod prompt_tools;
pub mod serve;
pub mod spec;

use std::sync::Arc;

pub use cache::ToolResultCache;
pub use core::{
    DEFAULT_CACHE_CAPACITY, FnTool, Tool, ToolFuture, ToolSet, enforce_result_limit,
    parse_tool_args, validate_tool_arguments,
};
pub use prompt_tools::PromptToolsConfig;

use crate::optimizer::PromptOptimizer;

// ── Tool name constants ─────────────────────────────────────────────

pub const ANALYZE_PROMPT: &str = "analyze_prompt";
pub const OPTIMIZE_PROMPT: &str = "optimize_prompt";
pub const AUTO_OPTIMIZE: &str = "auto_optimize";
pub const ADVANCED_OPTIMIZE: &str = "advanced_optimize";
pub const GET_PROMPT_TEMPLATE: &str = "get_prompt_template";
pub const GET_DOMAIN_TEMPLATE: &str = "get_domain_template";
pub const LIST_DOMAIN_TEMPLATES: &str = "list_domain_templates";
pub const SEARCH_DOMAIN_TEMPLATES: &str = "search_domain_templates";
pub const RENDER_DOMAIN_TEMPLATE: &str = "render_domain_template";

// ── Extension trait ─────────────────────────────────────────────────

/// Extension trait for registering the prompt tools on a [`ToolSet`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use promptsmith::PromptOptimizer;
/// use promptsmith::tools::{PromptToolsExt, ToolSet};
///
/// let tools = ToolSet::new().with_prompt_tools(Arc::new(PromptOptimizer::new()));
/// assert_eq!(tools.len(), 9);
/// ```
pub trait PromptToolsExt {
    fn with_prompt_tools(self, optimizer: Arc<PromptOptimizer>) -> Self;

    fn with_prompt_tools_configured(
        self,
        optimizer: Arc<PromptOptimizer>,
        config: PromptToolsConfig,
    ) -> Self;
}

impl PromptToolsExt for ToolSet {
    fn with_prompt_tools(self, optimizer: Arc<PromptOptimizer>) -> Self {
        self.with_prompt_tools_configured(optimizer, PromptToolsConfig::default())
    }

    fn with_prompt_tools_configured(
        mut self,
        optimizer: Arc<PromptOptimizer>,
        config: PromptToolsConfig,
    ) -> Self {
        for tool in prompt_tools::prompt_tools(optimizer, &config) {
            self.register(tool);
        }
        self
    }
}
