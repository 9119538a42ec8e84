//! Integration tests for the prompt tool set.
//!
//! These build a `ToolSet` the way the binary does (through `ServerConfig`)
//! and dispatch calls by name with raw JSON arguments.

use std::sync::Arc;

use promptsmith::prelude::*;
use promptsmith::tools::serve::{ServeStats, ToolResponse, serve};
use serde_json::{Value, json};

fn tool_set() -> ToolSet {
    ServerConfig::default()
        .with_pretty_json(false)
        .build_tool_set(Arc::new(PromptOptimizer::new()))
}

async fn call_json(tools: &ToolSet, name: &str, arguments: Value) -> Value {
    let result = tools.execute(name, &arguments.to_string()).await;
    serde_json::from_str(&result).unwrap_or_else(|e| panic!("{name} returned non-JSON ({e}): {result}"))
}

// ── Registration ─────────────────────────────────────────────────────

#[test]
fn all_nine_tools_are_registered_in_name_order() {
    let names: Vec<String> = tool_set()
        .definitions()
        .into_iter()
        .map(|d| d.function.name)
        .collect();
    assert_eq!(
        names,
        [
            "advanced_optimize",
            "analyze_prompt",
            "auto_optimize",
            "get_domain_template",
            "get_prompt_template",
            "list_domain_templates",
            "optimize_prompt",
            "render_domain_template",
            "search_domain_templates",
        ]
    );
}

#[test]
fn every_definition_has_an_object_schema() {
    for def in tool_set().definitions() {
        assert_eq!(def.function.parameters["type"], "object", "{}", def.function.name);
        assert!(!def.function.description.is_empty());
    }
}

// ── Analysis and rewriting ───────────────────────────────────────────

#[tokio::test]
async fn analyze_matches_the_library_report() {
    let tools = tool_set();
    let report = call_json(&tools, "analyze_prompt", json!({"prompt": "fix this"})).await;
    let expected = serde_json::to_value(PromptOptimizer::new().analyze("fix this")).unwrap();
    assert_eq!(report, expected);
}

#[tokio::test]
async fn optimize_applies_the_named_strategy() {
    let tools = tool_set();
    let out = call_json(
        &tools,
        "optimize_prompt",
        json!({"prompt": "explain recursion", "strategy": "chain_of_thought"}),
    )
    .await;
    assert_eq!(out["original"], "explain recursion");
    assert!(out["optimized"].as_str().unwrap().contains("step-by-step"));
}

#[tokio::test]
async fn unknown_strategy_lists_the_valid_ones() {
    let tools = tool_set();
    let result = tools
        .execute(
            "optimize_prompt",
            r#"{"prompt": "explain recursion", "strategy": "magic"}"#,
        )
        .await;
    assert!(result.starts_with("Error: unknown strategy 'magic'"), "{result}");
    assert!(result.contains("chain_of_thought"));
}

#[tokio::test]
async fn missing_required_argument_fails_validation() {
    let tools = tool_set();
    let result = tools
        .execute("optimize_prompt", r#"{"prompt": "explain recursion"}"#)
        .await;
    assert!(
        result.starts_with("Error: argument validation failed for tool 'optimize_prompt'"),
        "{result}"
    );
}

#[tokio::test]
async fn auto_optimize_reports_its_reason() {
    let tools = tool_set();
    let out = call_json(
        &tools,
        "auto_optimize",
        json!({"prompt": "fix this", "context": "bug triage"}),
    )
    .await;
    let reason = out["auto_selected_reason"].as_str().unwrap();
    assert!(reason.starts_with("Chose "), "{reason}");
    assert_eq!(out["original"], "fix this");
}

#[tokio::test]
async fn advanced_auto_picks_from_keywords() {
    let tools = tool_set();
    let out = call_json(
        &tools,
        "advanced_optimize",
        json!({"prompt": "plan a data migration", "strategy": "auto"}),
    )
    .await;
    assert_eq!(out["strategy"], "Tree of Thoughts");
    assert!(out["optimized"].as_str().unwrap().contains("plan a data migration"));
}

#[tokio::test]
async fn advanced_explicit_strategy_is_honored() {
    let tools = tool_set();
    let out = call_json(
        &tools,
        "advanced_optimize",
        json!({"prompt": "plan a data migration", "strategy": "medprompt"}),
    )
    .await;
    assert_eq!(
        out["strategy"],
        AdvancedStrategy::Medprompt.label(),
        "explicit choice overrides keyword selection"
    );
}

#[tokio::test]
async fn large_results_come_back_whole() {
    let tools = ServerConfig::default().build_tool_set(Arc::new(PromptOptimizer::new()));
    let prompt = "plan a rollout ".repeat(700);
    let args = json!({"prompt": prompt, "strategy": "prompt_wizard"});
    let result = tools.execute("advanced_optimize", &args.to_string()).await;
    assert!(result.len() > 30_000);
    let out: Value = serde_json::from_str(&result).unwrap();
    assert_eq!(out["original"], prompt.as_str());
}

#[tokio::test]
async fn oversize_results_are_errors_not_fragments() {
    let tools = ServerConfig::default()
        .with_max_result_bytes(Some(1_000))
        .build_tool_set(Arc::new(PromptOptimizer::new()));
    let args = json!({"prompt": "plan a rollout ".repeat(700), "strategy": "prompt_wizard"});
    let result = tools.execute("advanced_optimize", &args.to_string()).await;
    assert!(
        result.starts_with("Error: result from tool 'advanced_optimize' is "),
        "{result}"
    );
    assert!(result.ends_with("over the 1000 byte limit"));
    assert_eq!(tools.cache_stats(), Some((0, 1)));
}

// ── Templates ────────────────────────────────────────────────────────

#[tokio::test]
async fn quick_template_for_unknown_use_case_is_an_error() {
    let tools = tool_set();
    let result = tools
        .execute("get_prompt_template", r#"{"use_case": "poetry"}"#)
        .await;
    assert!(result.starts_with("Error: unknown use case 'poetry'"), "{result}");
}

#[tokio::test]
async fn list_filters_by_domain_in_catalog_order() {
    let tools = tool_set();
    let ids = call_json(
        &tools,
        "list_domain_templates",
        json!({"domain": "communication"}),
    )
    .await;
    assert_eq!(ids, json!(["stakeholder_update", "crisis_communication"]));

    let all = call_json(&tools, "list_domain_templates", json!({})).await;
    assert_eq!(all.as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn get_domain_template_for_unknown_id_is_an_error() {
    let tools = tool_set();
    let result = tools
        .execute("get_domain_template", r#"{"template_name": "nope"}"#)
        .await;
    assert_eq!(result, "Error: template 'nope' not found");
}

fn crisis_values() -> serde_json::Map<String, Value> {
    [
        ("crisis_situation", "Regional outage"),
        ("target_audience", "Customers"),
        ("crisis_description", "Storage cluster failure"),
        ("current_status", "Mitigated"),
        ("stakeholder_impact", "Delayed uploads"),
        ("actions_taken", "Failover completed"),
        ("planned_steps", "Root cause review"),
        ("key_facts", "No data lost"),
        ("potential_concerns", "Recurrence"),
        ("communication_channels", "Status page"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
    .collect()
}

#[tokio::test]
async fn render_fills_every_variable() {
    let tools = tool_set();
    let args = json!({"template_name": "crisis_communication", "variables": crisis_values()});
    let text = tools
        .execute("render_domain_template", &args.to_string())
        .await;
    assert!(!text.starts_with("Error:"), "{text}");
    assert!(text.contains("Regional outage"));
    assert!(text.contains("Status page"));
    assert!(!text.contains("{crisis_situation}"));
}

#[tokio::test]
async fn render_reports_missing_variables_sorted() {
    let tools = tool_set();
    let mut values = crisis_values();
    values.remove("key_facts");
    values.remove("actions_taken");
    let args = json!({"template_name": "crisis_communication", "variables": values});
    let result = tools
        .execute("render_domain_template", &args.to_string())
        .await;
    assert_eq!(
        result,
        "Error: missing required variables: actions_taken, key_facts"
    );
}

// ── Caching ──────────────────────────────────────────────────────────

#[tokio::test]
async fn repeated_calls_are_served_from_cache() {
    let tools = tool_set();
    let args = r#"{"prompt": "summarize the quarterly report"}"#;
    let first = tools.execute("analyze_prompt", args).await;
    let second = tools.execute("analyze_prompt", args).await;
    assert_eq!(first, second);
    assert_eq!(tools.cache_stats(), Some((1, 1)));
}

#[tokio::test]
async fn errors_are_not_cached() {
    let tools = tool_set();
    let args = r#"{"use_case": "poetry"}"#;
    tools.execute("get_prompt_template", args).await;
    tools.execute("get_prompt_template", args).await;
    assert_eq!(tools.cache_stats(), Some((0, 2)));
}

#[tokio::test]
async fn disabled_cache_reports_no_stats() {
    let tools = ServerConfig::default()
        .with_cache_capacity(0)
        .build_tool_set(Arc::new(PromptOptimizer::new()));
    tools
        .execute("analyze_prompt", r#"{"prompt": "hello"}"#)
        .await;
    assert_eq!(tools.cache_stats(), None);
}

// ── JSON-lines serving ───────────────────────────────────────────────

#[tokio::test]
async fn serve_answers_each_line_in_order() {
    let tools = tool_set();
    let input = [
        json!({"id": 1, "name": "get_prompt_template", "arguments": {"use_case": "tutoring"}}),
        json!({"id": 2, "name": "search_domain_templates", "arguments": {"query": "CRISIS"}}),
        json!({"id": 3, "name": "render_domain_template", "arguments": {"template_name": "okr_planning"}}),
    ]
    .iter()
    .map(Value::to_string)
    .collect::<Vec<_>>()
    .join("\n");

    let mut output = Vec::new();
    let stats = serve(&tools, input.as_bytes(), &mut output).await.unwrap();
    assert_eq!(
        stats,
        ServeStats {
            requests: 3,
            errors: 1,
            malformed: 0
        }
    );

    let responses: Vec<ToolResponse> = std::str::from_utf8(&output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let ids: Vec<Value> = responses.iter().filter_map(|r| r.id.clone()).collect();
    assert_eq!(ids, [json!(1), json!(2), json!(3)]);
    assert_eq!(
        responses[0].result,
        UseCase::Tutoring.template(),
        "quick templates come back verbatim"
    );
    assert!(!responses[1].is_error);
    assert!(responses[2].is_error);
    assert!(responses[2].result.starts_with("Error: missing required variables"));
}
