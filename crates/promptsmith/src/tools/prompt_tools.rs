//! The nine prompt tools.
//!
//! | Tool | Result |
//! |------|--------|
//! | `analyze_prompt` | [`AnalysisReport`](crate::analyzer::AnalysisReport) JSON |
//! | `optimize_prompt` | [`RewriteResult`](crate::rewrite::RewriteResult) JSON |
//! | `auto_optimize` | [`AutoRewriteResult`](crate::optimizer::AutoRewriteResult) JSON |
//! | `advanced_optimize` | [`AdvancedRewriteResult`](crate::rewrite::advanced::AdvancedRewriteResult) JSON |
//! | `get_prompt_template` | starter prompt text |
//! | `get_domain_template` | [`TemplateInfo`](crate::templates::TemplateInfo) JSON |
//! | `list_domain_templates` | JSON array of template ids |
//! | `search_domain_templates` | JSON array of [`TemplateSummary`](crate::templates::TemplateSummary) |
//! | `render_domain_template` | rendered template text |
//!
//! Every tool is a pure function of its arguments over a shared
//! [`PromptOptimizer`], so all of them are marked cacheable. Failures come
//! back as `"Error: ..."` strings.

use std::collections::HashMap;
use std::future::ready;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::core::FnTool;
use super::spec::ToolSpec;
use super::{
    ADVANCED_OPTIMIZE, ANALYZE_PROMPT, AUTO_OPTIMIZE, GET_DOMAIN_TEMPLATE, GET_PROMPT_TEMPLATE,
    LIST_DOMAIN_TEMPLATES, OPTIMIZE_PROMPT, RENDER_DOMAIN_TEMPLATE, SEARCH_DOMAIN_TEMPLATES,
};
use crate::error::PromptError;
use crate::optimizer::PromptOptimizer;

// ── Config ──────────────────────────────────────────────────────────

/// Output options shared by the prompt tools.
#[derive(Debug, Clone)]
pub struct PromptToolsConfig {
    /// Pretty-print JSON results. Default: `true`.
    pub pretty_json: bool,
}

impl Default for PromptToolsConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

impl PromptToolsConfig {
    pub fn pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }
}

// ── Arguments ───────────────────────────────────────────────────────

/// Arguments for `analyze_prompt`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AnalyzeArgs {
    /// The prompt to analyze.
    pub prompt: String,
}

/// Arguments for `optimize_prompt`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct OptimizeArgs {
    /// The prompt to optimize.
    pub prompt: String,
    /// Basic strategy: clarity, specificity, chain_of_thought, few_shot,
    /// structured_output, role_based, constraints, or tone_adjustment.
    pub strategy: String,
}

/// Arguments for `auto_optimize`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AutoOptimizeArgs {
    /// The prompt to optimize.
    pub prompt: String,
    /// Additional context about the use case.
    #[serde(default)]
    pub context: Option<String>,
}

/// Arguments for `advanced_optimize`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AdvancedOptimizeArgs {
    /// The prompt to optimize.
    pub prompt: String,
    /// Advanced strategy: tree_of_thoughts, constitutional_ai,
    /// automatic_prompt_engineer, meta_prompting, self_refine, textgrad,
    /// medprompt, prompt_wizard, or auto to pick one from the prompt.
    pub strategy: String,
}

/// Arguments for `get_prompt_template`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PromptTemplateArgs {
    /// Use case: code_generation, analysis, creative_writing,
    /// data_extraction, or tutoring.
    pub use_case: String,
}

/// Arguments for `get_domain_template`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DomainTemplateArgs {
    /// Template id, e.g. okr_planning or crisis_communication.
    pub template_name: String,
}

/// Arguments for `list_domain_templates`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListTemplatesArgs {
    /// Only list templates in this domain.
    #[serde(default)]
    pub domain: Option<String>,
}

/// Arguments for `search_domain_templates`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchTemplatesArgs {
    /// Case-insensitive text matched against id, name, domain, and body.
    pub query: String,
}

/// Arguments for `render_domain_template`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RenderTemplateArgs {
    /// Template id.
    pub template_name: String,
    /// Value for every declared variable. Non-string values are inserted as
    /// their JSON text.
    #[serde(default)]
    pub variables: HashMap<String, serde_json::Value>,
}

// ── Helpers ─────────────────────────────────────────────────────────

fn to_json<T: Serialize>(value: &T, pretty: bool) -> String {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.unwrap_or_else(|e| format!("Error: failed to encode result: {e}"))
}

fn error_string(e: PromptError) -> String {
    format!("Error: {e}")
}

fn stringify_values(values: HashMap<String, serde_json::Value>) -> HashMap<String, String> {
    values
        .into_iter()
        .map(|(k, v)| {
            let text = match v {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (k, text)
        })
        .collect()
}

// ── Tool constructors ───────────────────────────────────────────────

pub fn analyze_prompt_tool(optimizer: Arc<PromptOptimizer>, config: &PromptToolsConfig) -> FnTool {
    let pretty = config.pretty_json;
    let def = ToolSpec::builder(ANALYZE_PROMPT)
        .purpose("Analyze a prompt for common issues and get improvement suggestions")
        .when_to_use("Before rewriting, to see what a prompt is missing")
        .when_not_to_use("When you want a rewritten prompt; use optimize_prompt or auto_optimize")
        .parameters_for::<AnalyzeArgs>()
        .example(
            r#"analyze_prompt(prompt="fix this")"#,
            r#"{"score": 65.0, "issues": ["Prompt is too short.", ...], ...}"#,
        )
        .output_format("JSON object with score, issues, and suggestions")
        .to_tool_def();
    FnTool::new(def, move |args: AnalyzeArgs| {
        ready(to_json(&optimizer.analyze(&args.prompt), pretty))
    })
    .cacheable(true)
}

pub fn optimize_prompt_tool(optimizer: Arc<PromptOptimizer>, config: &PromptToolsConfig) -> FnTool {
    let pretty = config.pretty_json;
    let def = ToolSpec::builder(OPTIMIZE_PROMPT)
        .purpose("Optimize a prompt using a specific basic strategy")
        .when_to_use("When you know which single improvement the prompt needs")
        .when_not_to_use("When unsure which strategy applies; use auto_optimize")
        .parameters_for::<OptimizeArgs>()
        .example(
            r#"optimize_prompt(prompt="explain recursion", strategy="few_shot")"#,
            "Prompt with an examples block appended",
        )
        .disambiguate(
            "The prompt needs a whole reasoning method",
            ADVANCED_OPTIMIZE,
            "basic strategies only append short guidance blocks",
        )
        .output_format("JSON object with original, optimized, strategy, explanation, improvements")
        .to_tool_def();
    FnTool::new(def, move |args: OptimizeArgs| {
        let out = match optimizer.optimize_named(&args.prompt, &args.strategy) {
            Ok(result) => to_json(&result, pretty),
            Err(e) => error_string(e),
        };
        ready(out)
    })
    .cacheable(true)
}

pub fn auto_optimize_tool(optimizer: Arc<PromptOptimizer>, config: &PromptToolsConfig) -> FnTool {
    let pretty = config.pretty_json;
    let def = ToolSpec::builder(AUTO_OPTIMIZE)
        .purpose("Automatically optimize a prompt using the best basic strategy")
        .when_to_use("When you want one improvement chosen from the prompt's analysis")
        .when_not_to_use("When you want a full reasoning scaffold; use advanced_optimize")
        .parameters_for::<AutoOptimizeArgs>()
        .output_format("Rewrite JSON plus auto_selected_reason")
        .to_tool_def();
    FnTool::new(def, move |args: AutoOptimizeArgs| {
        let result = optimizer.auto_optimize(&args.prompt, args.context.as_deref());
        ready(to_json(&result, pretty))
    })
    .cacheable(true)
}

pub fn advanced_optimize_tool(
    optimizer: Arc<PromptOptimizer>,
    config: &PromptToolsConfig,
) -> FnTool {
    let pretty = config.pretty_json;
    let def = ToolSpec::builder(ADVANCED_OPTIMIZE)
        .purpose("Apply advanced optimization strategies (ToT, Constitutional AI, APE, etc.)")
        .when_to_use("When the prompt needs a structured multi-step reasoning scaffold")
        .when_not_to_use("For a small targeted fix; use optimize_prompt")
        .parameters_for::<AdvancedOptimizeArgs>()
        .example(
            r#"advanced_optimize(prompt="plan a database migration", strategy="auto")"#,
            "Tree of Thoughts scaffold with confidence 0.85",
        )
        .output_format(
            "JSON object with strategy, original, optimized, explanation, \
             performance_metrics, confidence",
        )
        .to_tool_def();
    FnTool::new(def, move |args: AdvancedOptimizeArgs| {
        let out = match optimizer.advanced_optimize_named(&args.prompt, &args.strategy) {
            Ok(result) => to_json(&result, pretty),
            Err(e) => error_string(e),
        };
        ready(out)
    })
    .cacheable(true)
}

pub fn get_prompt_template_tool(optimizer: Arc<PromptOptimizer>) -> FnTool {
    let def = ToolSpec::builder(GET_PROMPT_TEMPLATE)
        .purpose("Get a short starter prompt for a common use case")
        .when_to_use("When starting a prompt from scratch")
        .when_not_to_use("For a detailed professional framework; use get_domain_template")
        .parameters_for::<PromptTemplateArgs>()
        .output_format("Template text with [bracketed] slots")
        .to_tool_def();
    FnTool::new(def, move |args: PromptTemplateArgs| {
        let out = match optimizer.quick_template(&args.use_case) {
            Ok(text) => text.to_string(),
            Err(e) => error_string(e),
        };
        ready(out)
    })
    .cacheable(true)
}

pub fn get_domain_template_tool(
    optimizer: Arc<PromptOptimizer>,
    config: &PromptToolsConfig,
) -> FnTool {
    let pretty = config.pretty_json;
    let def = ToolSpec::builder(GET_DOMAIN_TEMPLATE)
        .purpose("Get details of a production-ready domain template")
        .when_to_use("When you need a template's variables, example, and preview")
        .when_not_to_use("When you do not know the template id; use search_domain_templates")
        .parameters_for::<DomainTemplateArgs>()
        .output_format("JSON object with name, domain, variables, examples, template_preview")
        .to_tool_def();
    FnTool::new(def, move |args: DomainTemplateArgs| {
        let out = match optimizer.templates().info(&args.template_name) {
            Some(info) => to_json(&info, pretty),
            None => error_string(PromptError::TemplateNotFound(args.template_name)),
        };
        ready(out)
    })
    .cacheable(true)
}

pub fn list_domain_templates_tool(
    optimizer: Arc<PromptOptimizer>,
    config: &PromptToolsConfig,
) -> FnTool {
    let pretty = config.pretty_json;
    let def = ToolSpec::builder(LIST_DOMAIN_TEMPLATES)
        .purpose("List all available domain template ids")
        .when_to_use("To browse templates, optionally within one domain")
        .when_not_to_use("To find templates by topic; use search_domain_templates")
        .parameters_for::<ListTemplatesArgs>()
        .output_format("JSON array of template ids")
        .to_tool_def();
    FnTool::new(def, move |args: ListTemplatesArgs| {
        let ids = optimizer.templates().list(args.domain.as_deref());
        ready(to_json(&ids, pretty))
    })
    .cacheable(true)
}

pub fn search_domain_templates_tool(
    optimizer: Arc<PromptOptimizer>,
    config: &PromptToolsConfig,
) -> FnTool {
    let pretty = config.pretty_json;
    let def = ToolSpec::builder(SEARCH_DOMAIN_TEMPLATES)
        .purpose("Search domain templates by id, name, domain, or content")
        .when_to_use("When looking for a template about a topic")
        .when_not_to_use("When you already know the id; use get_domain_template")
        .parameters_for::<SearchTemplatesArgs>()
        .output_format("JSON array of template summaries")
        .to_tool_def();
    FnTool::new(def, move |args: SearchTemplatesArgs| {
        ready(to_json(&optimizer.templates().search(&args.query), pretty))
    })
    .cacheable(true)
}

pub fn render_domain_template_tool(optimizer: Arc<PromptOptimizer>) -> FnTool {
    let def = ToolSpec::builder(RENDER_DOMAIN_TEMPLATE)
        .purpose("Fill a domain template with values for its variables")
        .when_to_use("When you have a value for every declared variable")
        .when_not_to_use("To see which variables exist; use get_domain_template")
        .parameters_for::<RenderTemplateArgs>()
        .output_format("Rendered template text")
        .to_tool_def();
    FnTool::new(def, move |args: RenderTemplateArgs| {
        let values = stringify_values(args.variables);
        let out = match optimizer.render_template(&args.template_name, &values) {
            Ok(text) => text,
            Err(e) => error_string(e),
        };
        ready(out)
    })
    .cacheable(true)
}

/// All nine prompt tools.
pub fn prompt_tools(optimizer: Arc<PromptOptimizer>, config: &PromptToolsConfig) -> Vec<FnTool> {
    vec![
        analyze_prompt_tool(optimizer.clone(), config),
        optimize_prompt_tool(optimizer.clone(), config),
        auto_optimize_tool(optimizer.clone(), config),
        advanced_optimize_tool(optimizer.clone(), config),
        get_prompt_template_tool(optimizer.clone()),
        get_domain_template_tool(optimizer.clone(), config),
        list_domain_templates_tool(optimizer.clone(), config),
        search_domain_templates_tool(optimizer.clone(), config),
        render_domain_template_tool(optimizer),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::Tool;

    fn optimizer() -> Arc<PromptOptimizer> {
        Arc::new(PromptOptimizer::new())
    }

    #[test]
    fn argument_schemas_mark_required_fields() {
        let def = optimize_prompt_tool(optimizer(), &PromptToolsConfig::default()).definition();
        let required = def.function.parameters["required"].as_array().unwrap().clone();
        assert!(required.contains(&"prompt".into()));
        assert!(required.contains(&"strategy".into()));

        let def = auto_optimize_tool(optimizer(), &PromptToolsConfig::default()).definition();
        let required = def.function.parameters["required"].as_array().unwrap().clone();
        assert!(!required.contains(&"context".into()));
    }

    #[tokio::test]
    async fn compact_json_when_configured() {
        let config = PromptToolsConfig::default().pretty_json(false);
        let tool = analyze_prompt_tool(optimizer(), &config);
        let out = tool.execute(r#"{"prompt":"fix this"}"#).await;
        assert!(!out.contains('\n'));
        let report: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(report["score"], 65.0);
    }

    #[tokio::test]
    async fn render_stringifies_non_string_values() {
        let tool = render_domain_template_tool(optimizer());
        let info = PromptOptimizer::new()
            .templates()
            .info("client_feedback_survey")
            .unwrap();
        let mut variables = serde_json::Map::new();
        for (i, var) in info.variables.iter().enumerate() {
            variables.insert(var.clone(), serde_json::json!(i));
        }
        let args = serde_json::json!({
            "template_name": "client_feedback_survey",
            "variables": variables,
        });
        let out = tool.execute(&args.to_string()).await;
        assert!(!out.starts_with("Error:"), "{out}");
        assert!(!out.contains(&format!("{{{}}}", info.variables[0])));
    }

    #[tokio::test]
    async fn domain_template_not_found_is_an_error_string() {
        let tool = get_domain_template_tool(optimizer(), &PromptToolsConfig::default());
        let out = tool.execute(r#"{"template_name":"api_design"}"#).await;
        assert_eq!(out, "Error: template 'api_design' not found");
    }

    #[test]
    fn every_tool_is_cacheable() {
        for tool in prompt_tools(optimizer(), &PromptToolsConfig::default()) {
            assert!(Tool::cacheable(&tool), "{}", tool.name());
        }
    }
}
