//! Guarded prompt rewriting.
//!
//! Each [`BasicStrategy`] maps to a transform that appends (or prefixes) a
//! fixed block of guidance, but only when the prompt does not already carry
//! the block's marker phrase. Every inserted block contains its own marker,
//! so applying the same strategy twice leaves the first result unchanged.
//!
//! The `improvements` list is rebuilt from the output by [`detect_improvements`],
//! which checks the same marker constants the transforms insert.
//!
//! Advanced narrative strategies live in [`advanced`].

pub mod advanced;
pub mod scaffold;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analyzer::contains_any;
use crate::strategy::BasicStrategy;

// ── Marker phrases (lowercase) ──────────────────────────────────────

const OBJECTIVE_MARKERS: &[&str] = &["objective:", "task:"];
const OBJECTIVE_INTENT_WORDS: &[&str] = &["help", "need", "want"];
const CLARITY_MARKERS: &[&str] = &[
    "clear and detailed",
    "concise and direct",
    "concise, and detailed response",
];
const EXPLAIN_VERBS: &[&str] = &["explain", "describe"];
const PRODUCE_VERBS: &[&str] = &["create", "write", "generate"];
const SPECIFICALLY_MARKER: &str = "specifically:";
const REQUIREMENTS_MARKER: &str = "requirements:";
const STEP_BY_STEP_MARKER: &str = "step-by-step";
const COT_MARKERS: &[&str] = &[STEP_BY_STEP_MARKER, "reasoning"];
const FEW_SHOT_MARKERS: &[&str] = &["example format", "example:"];
const STRUCTURE_MARKERS: &[&str] = &["structure your response as follows", "output format"];
const ROLE_PREFIX_MARKER: &str = "as a ";
const ROLE_SENTENCE_MARKER: &str = "extensive expertise";
const CONSTRAINT_MARKERS: &[&str] = &["constraints:", "limitations:"];
const CONSTRAINT_BLOCK_MARKER: &str = "constraints and limitations:";
const TONE_MARKERS: &[&str] = &["tone:", "style:"];
const TONE_BLOCK_MARKER: &str = "desired tone and style:";

// ── Guidance blocks ─────────────────────────────────────────────────

const CLARITY_CHECKLIST: &[&str] = &[
    "\nPlease provide a clear, concise, and detailed response that:",
    "- Directly addresses the main request.",
    "- Uses simple, precise, and unambiguous language.",
    "- Avoids jargon unless explicitly requested.",
    "- Includes relevant examples where helpful.",
];

const SPECIFICALLY_BLOCK: &str = "\n\nSpecifically:\
\n- Define all key terms and concepts.\
\n- Provide concrete, real-world examples.\
\n- Include relevant background context and assumptions.";

const REQUIREMENTS_BLOCK: &str = "\n\nRequirements:\
\n- Length: Be comprehensive but concise, aiming for [specify length, e.g., 500 words, 3 paragraphs].\
\n- Style: Maintain a professional and clear writing style.\
\n- Format: Ensure the output is well-structured with clear sections, headings, and bullet points where appropriate.\
\n- Target Audience: Tailor the response for [specify audience, e.g., a technical expert, a general audience].";

const CHAIN_OF_THOUGHT_BLOCK: &str = "\n\nPlease approach this step-by-step:\
\n1. First, clearly understand the core problem or request.\
\n2. Break down the problem into its fundamental components.\
\n3. Address each component systematically, showing your thought process.\
\n4. Synthesize your findings into a comprehensive and coherent final response.\
\n\nShow your reasoning for each step, explaining why you made certain decisions or reached specific conclusions.";

const FEW_SHOT_BLOCK: &str = "\n\nExample format for your response:\
\n\n**Main Point**: [Your key insight here]\
\n**Explanation**: [Detailed explanation of the main point]\
\n**Example**: [A concrete, illustrative example]\
\n**Additional Considerations**: [Any other relevant points or caveats]";

const STRUCTURE_BLOCK: &str = "\n\nPlease structure your response as follows:\
\n\n1. **Overview**: A brief, high-level summary of the entire response.\
\n2. **Detailed Analysis**: An in-depth exploration of the topic, broken into logical sections with clear headings.\
\n3. **Key Takeaways**: A bulleted list summarizing the most important insights or conclusions.\
\n4. **Next Steps/Recommendations**: Actionable advice or suggestions based on the analysis.";

const CONSTRAINTS_BLOCK: &str = "\n\nConstraints and Limitations:\
\n- Ensure the response is no longer than [specify length, e.g., 300 words].\
\n- Do not include any external links or references.\
\n- Focus solely on [specific topic] and avoid [off-topic subjects].\
\n- If information is unavailable, state that clearly rather than fabricating.";

const TONE_BLOCK: &str = "\n\nDesired Tone and Style:\
\n- Maintain a [e.g., professional, friendly, formal, casual, persuasive, empathetic] tone throughout.\
\n- Write in a [e.g., clear, concise, engaging, academic] style.\
\n- Avoid [e.g., overly technical jargon, slang, passive voice].";

// ── Roles ───────────────────────────────────────────────────────────

/// Role table in priority order; the first category with a keyword hit wins.
const ROLES: &[(&str, &[&str])] = &[
    (
        "senior software engineer and architect",
        &["code", "program", "software", "debug", "api"],
    ),
    (
        "seasoned business strategist and financial analyst",
        &["business", "strategy", "market", "finance", "investment"],
    ),
    (
        "professional writer and content creator",
        &["write", "content", "article", "story", "blog"],
    ),
    (
        "expert data scientist and analyst",
        &["data", "analyze", "statistics", "insights"],
    ),
    (
        "experienced UX/UI designer",
        &["design", "ui", "ux", "user experience"],
    ),
    (
        "legal counsel specializing in contract law",
        &["legal", "contract", "compliance"],
    ),
    (
        "certified project manager",
        &["project management", "agile", "scrum"],
    ),
];

/// Fallback role when no keyword matches.
pub const GENERIC_ROLE: &str = "expert";

/// Pick the role for a prompt from the priority-ordered role table.
pub fn select_role(prompt: &str) -> &'static str {
    let lower = prompt.to_lowercase();
    ROLES
        .iter()
        .find(|(_, keywords)| contains_any(&lower, keywords))
        .map(|(role, _)| *role)
        .unwrap_or(GENERIC_ROLE)
}

// ── Result ──────────────────────────────────────────────────────────

/// Outcome of a basic rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteResult {
    pub original: String,
    pub optimized: String,
    pub strategy: BasicStrategy,
    pub explanation: String,
    /// One entry per detected transformation, in fixed detection order.
    pub improvements: Vec<String>,
}

// ── Engine ──────────────────────────────────────────────────────────

/// Applies [`BasicStrategy`] transforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRewriteEngine;

impl BasicRewriteEngine {
    pub fn new() -> Self {
        Self
    }

    /// Rewrite `prompt` with `strategy`. Pure and deterministic.
    pub fn rewrite(&self, prompt: &str, strategy: BasicStrategy) -> RewriteResult {
        let optimized = match strategy {
            BasicStrategy::Clarity => clarify(prompt),
            BasicStrategy::Specificity => add_specificity(prompt),
            BasicStrategy::ChainOfThought => {
                append_unless(prompt, COT_MARKERS, CHAIN_OF_THOUGHT_BLOCK)
            }
            BasicStrategy::FewShot => append_unless(prompt, FEW_SHOT_MARKERS, FEW_SHOT_BLOCK),
            BasicStrategy::StructuredOutput => {
                append_unless(prompt, STRUCTURE_MARKERS, STRUCTURE_BLOCK)
            }
            BasicStrategy::RoleBased => assign_role(prompt),
            BasicStrategy::Constraints => {
                append_unless(prompt, CONSTRAINT_MARKERS, CONSTRAINTS_BLOCK)
            }
            BasicStrategy::ToneAdjustment => append_unless(prompt, TONE_MARKERS, TONE_BLOCK),
        };

        let improvements = detect_improvements(prompt, &optimized);
        debug!(
            "Rewrote prompt with {strategy}: {} -> {} bytes, {} improvements",
            prompt.len(),
            optimized.len(),
            improvements.len()
        );

        RewriteResult {
            original: prompt.to_string(),
            optimized,
            strategy,
            explanation: strategy.explanation().to_string(),
            improvements,
        }
    }
}

// ── Transforms ──────────────────────────────────────────────────────

fn append_unless(prompt: &str, markers: &[&str], block: &str) -> String {
    if contains_any(&prompt.to_lowercase(), markers) {
        prompt.to_string()
    } else {
        format!("{prompt}{block}")
    }
}

fn clarify(prompt: &str) -> String {
    let lower = prompt.to_lowercase();
    let mut lines = Vec::with_capacity(1 + CLARITY_CHECKLIST.len());

    if contains_any(&lower, OBJECTIVE_MARKERS) {
        lines.push(prompt.to_string());
    } else if contains_any(&lower, OBJECTIVE_INTENT_WORDS) {
        lines.push(format!("Objective: {prompt}"));
    } else {
        lines.push(format!("Task: {prompt}"));
    }

    if !contains_any(&lower, CLARITY_MARKERS) {
        lines.extend(CLARITY_CHECKLIST.iter().map(|line| (*line).to_string()));
    }

    lines.join("\n")
}

fn add_specificity(prompt: &str) -> String {
    let lower = prompt.to_lowercase();
    let mut enhanced = prompt.to_string();

    if contains_any(&lower, EXPLAIN_VERBS) && !enhanced.to_lowercase().contains(SPECIFICALLY_MARKER)
    {
        enhanced.push_str(SPECIFICALLY_BLOCK);
    }
    if contains_any(&lower, PRODUCE_VERBS) && !enhanced.to_lowercase().contains(REQUIREMENTS_MARKER)
    {
        enhanced.push_str(REQUIREMENTS_BLOCK);
    }

    enhanced
}

fn assign_role(prompt: &str) -> String {
    let lower = prompt.to_lowercase();
    if lower.starts_with(ROLE_PREFIX_MARKER) && lower.contains(ROLE_SENTENCE_MARKER) {
        return prompt.to_string();
    }

    let role = select_role(prompt);
    format!(
        "As a {role}, {prompt}\n\nDraw upon your extensive expertise to provide \
         insights that only a {role} would know, ensuring accuracy and depth."
    )
}

// ── Improvement detection ───────────────────────────────────────────

/// Describe which transformations `optimized` carries relative to `original`.
///
/// Checks run in a fixed order and each contributes at most one entry.
pub fn detect_improvements(original: &str, optimized: &str) -> Vec<String> {
    let before = original.to_lowercase();
    let after = optimized.to_lowercase();
    let mut improvements = Vec::new();

    // Grew by more than 10%.
    if optimized.chars().count() * 10 > original.chars().count() * 11 {
        improvements.push("Added detailed instructions or context.");
    }
    if after.contains(STEP_BY_STEP_MARKER) && !before.contains(STEP_BY_STEP_MARKER) {
        improvements.push("Incorporated step-by-step reasoning (Chain-of-Thought).");
    }
    if contains_any(&after, FEW_SHOT_MARKERS) {
        improvements.push("Included example formats for structured responses (Few-Shot).");
    }
    if contains_any(&after, STRUCTURE_MARKERS) {
        improvements.push("Defined explicit output structure.");
    }
    if after.contains(ROLE_PREFIX_MARKER)
        && !before.contains(ROLE_PREFIX_MARKER)
        && after.contains(ROLE_SENTENCE_MARKER)
    {
        improvements.push("Applied role-based context for specialized expertise.");
    }
    if after.contains(CONSTRAINT_BLOCK_MARKER) {
        improvements.push("Added explicit constraints to guide the response.");
    }
    if after.contains(TONE_BLOCK_MARKER) {
        improvements.push("Provided guidance on desired tone and style.");
    }

    improvements.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(prompt: &str, strategy: BasicStrategy) -> RewriteResult {
        BasicRewriteEngine::new().rewrite(prompt, strategy)
    }

    #[test]
    fn every_strategy_is_idempotent() {
        let prompts = [
            "help me explain and write about the market for legal contract software",
            "fix this",
            "Describe the water cycle for children",
            "As a pirate, tell me a story",
        ];
        for prompt in prompts {
            for strategy in BasicStrategy::ALL {
                let once = rewrite(prompt, strategy).optimized;
                let twice = rewrite(&once, strategy).optimized;
                assert_eq!(once, twice, "{strategy} is not idempotent for {prompt:?}");
            }
        }
    }

    #[test]
    fn clarity_prefers_objective_for_requests_for_help() {
        let result = rewrite("I need a budget plan", BasicStrategy::Clarity);
        assert!(result.optimized.starts_with("Objective: I need a budget plan\n"));
        assert!(result.optimized.contains("- Avoids jargon unless explicitly requested."));

        let result = rewrite("summarize the report", BasicStrategy::Clarity);
        assert!(result.optimized.starts_with("Task: summarize the report"));
    }

    #[test]
    fn clarity_keeps_existing_task_marker() {
        let result = rewrite("Task: list the planets", BasicStrategy::Clarity);
        assert!(result.optimized.starts_with("Task: list the planets\n"));
        assert!(!result.optimized.starts_with("Task: Task:"));
    }

    #[test]
    fn specificity_blocks_fire_independently() {
        let both = rewrite("explain and write a guide", BasicStrategy::Specificity).optimized;
        assert!(both.contains("Specifically:"));
        assert!(both.contains("Requirements:"));
        let explain_only = rewrite("describe the moon", BasicStrategy::Specificity).optimized;
        assert!(explain_only.contains("Specifically:"));
        assert!(!explain_only.contains("Requirements:"));
        let neither = rewrite("fix this", BasicStrategy::Specificity);
        assert_eq!(neither.optimized, "fix this");
        assert!(neither.improvements.is_empty());
    }

    #[test]
    fn chain_of_thought_is_skipped_when_reasoning_requested() {
        let prompt = "Show your reasoning about prime numbers";
        assert_eq!(rewrite(prompt, BasicStrategy::ChainOfThought).optimized, prompt);
    }

    #[test]
    fn chain_of_thought_reports_improvements() {
        let result = rewrite("explain how machine learning works", BasicStrategy::ChainOfThought);
        assert_eq!(
            result.improvements,
            vec![
                "Added detailed instructions or context.",
                "Incorporated step-by-step reasoning (Chain-of-Thought).",
            ]
        );
        assert_eq!(result.strategy, BasicStrategy::ChainOfThought);
    }

    #[test]
    fn role_based_prefers_engineer_over_business() {
        let result = rewrite("debug this API for our business", BasicStrategy::RoleBased);
        assert!(
            result
                .optimized
                .starts_with("As a senior software engineer and architect, debug this API")
        );
        assert!(result.optimized.ends_with(
            "\n\nDraw upon your extensive expertise to provide insights that only a \
             senior software engineer and architect would know, ensuring accuracy and depth."
        ));
        assert!(
            result
                .improvements
                .contains(&"Applied role-based context for specialized expertise.".to_string())
        );
    }

    #[test]
    fn role_table_priority_and_fallback() {
        assert_eq!(select_role("debug this API"), "senior software engineer and architect");
        assert_eq!(
            select_role("market entry strategy"),
            "seasoned business strategist and financial analyst"
        );
        assert_eq!(select_role("agile retrospective"), "certified project manager");
        assert_eq!(select_role("hello"), GENERIC_ROLE);
    }

    #[test]
    fn improvements_follow_fixed_order() {
        let original = "plan";
        let optimized = format!("{original}{CHAIN_OF_THOUGHT_BLOCK}{TONE_BLOCK}{CONSTRAINTS_BLOCK}");
        assert_eq!(
            detect_improvements(original, &optimized),
            vec![
                "Added detailed instructions or context.",
                "Incorporated step-by-step reasoning (Chain-of-Thought).",
                "Added explicit constraints to guide the response.",
                "Provided guidance on desired tone and style.",
            ]
        );
    }

    #[test]
    fn result_serializes_with_snake_case_strategy() {
        let result = rewrite("write a poem", BasicStrategy::ToneAdjustment);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["strategy"], "tone_adjustment");
        assert_eq!(json["original"], "write a poem");
    }
}
