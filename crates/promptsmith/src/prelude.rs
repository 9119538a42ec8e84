//! Convenience re-exports for common `promptsmith` types.
//!
//! ```ignore
//! use promptsmith::prelude::*;
//! ```
//!
//! Pulls in the optimizer, its result records, the strategy enums, and the
//! tool layer. Catalog internals and scaffold helpers are left out; import
//! those from their modules directly.

// ── Core ────────────────────────────────────────────────────────────
pub use crate::analyzer::{AnalysisReport, Analyzer};
pub use crate::error::{PromptError, Result};
pub use crate::optimizer::{AutoRewriteResult, PromptOptimizer};
pub use crate::selector::StrategySelector;
pub use crate::strategy::{AdvancedChoice, AdvancedStrategy, BasicStrategy};

// ── Rewrites ────────────────────────────────────────────────────────
pub use crate::rewrite::advanced::{AdvancedRewriteEngine, AdvancedRewriteResult, MetricValue};
pub use crate::rewrite::{BasicRewriteEngine, RewriteResult};

// ── Templates ───────────────────────────────────────────────────────
pub use crate::templates::quick::UseCase;
pub use crate::templates::{Template, TemplateInfo, TemplateRegistry, TemplateSummary};

// ── Tools ───────────────────────────────────────────────────────────
pub use crate::config::ServerConfig;
pub use crate::tools::spec::ToolSpec;
pub use crate::tools::{FnTool, PromptToolsExt, Tool, ToolFuture, ToolSet, parse_tool_args};
pub use crate::{ToolDef, json_schema_for};
