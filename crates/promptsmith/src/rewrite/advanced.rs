//! Narrative scaffold strategies.
//!
//! Each [`AdvancedStrategy`] wraps the caller's prompt in a multi-section
//! scaffold (method description plus bracketed slots for the model's own
//! reasoning) and attaches a fixed metadata record. The performance numbers
//! and confidence values are declared constants per strategy, not measured.
//!
//! Two strategies inspect the prompt: `tree_of_thoughts` returns a no-op
//! result when the prompt has no reasoning indicator, and
//! `automatic_prompt_engineer` picks its opening sentence from a task-type
//! bucket.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scaffold::{Scaffold, bullets, numbered};
use crate::analyzer::contains_any;
use crate::strategy::AdvancedStrategy;

/// Keywords that mark a prompt as needing multi-path reasoning.
const REASONING_INDICATORS: &[&str] = &["solve", "analyze", "plan", "design", "optimize", "evaluate"];

const CONSTITUTIONAL_PRINCIPLES: &[&str] = &[
    "Be helpful, harmless, and honest",
    "Avoid generating harmful or biased content",
    "Respect user privacy and confidentiality",
    "Provide accurate, verifiable information",
    "Acknowledge limitations and uncertainties",
];

/// Strategy label reported when no scaffold was applied.
pub const NO_OPTIMIZATION_LABEL: &str = "None";

// ── Metadata ────────────────────────────────────────────────────────

/// A declared performance metric value: number, string, or boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for MetricValue {
    fn from(v: bool) -> Self {
        MetricValue::Bool(v)
    }
}

impl From<i64> for MetricValue {
    fn from(v: i64) -> Self {
        MetricValue::Int(v)
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Float(v)
    }
}

impl From<&str> for MetricValue {
    fn from(v: &str) -> Self {
        MetricValue::Text(v.to_string())
    }
}

fn metrics<const N: usize>(entries: [(&str, MetricValue); N]) -> BTreeMap<String, MetricValue> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Outcome of an advanced rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedRewriteResult {
    /// Display label ("Tree of Thoughts", ...) or `"None"` for a no-op.
    pub strategy: String,
    pub original: String,
    pub optimized: String,
    pub explanation: String,
    pub performance_metrics: BTreeMap<String, MetricValue>,
    /// Declared confidence in `[0, 1]`.
    pub confidence: f64,
}

impl AdvancedRewriteResult {
    fn scaffolded(
        strategy: AdvancedStrategy,
        prompt: &str,
        optimized: String,
        explanation: &str,
        performance_metrics: BTreeMap<String, MetricValue>,
        confidence: f64,
    ) -> Self {
        Self {
            strategy: strategy.label().to_string(),
            original: prompt.to_string(),
            optimized,
            explanation: explanation.to_string(),
            performance_metrics,
            confidence,
        }
    }

    fn unchanged(prompt: &str, reason: &str) -> Self {
        Self {
            strategy: NO_OPTIMIZATION_LABEL.to_string(),
            original: prompt.to_string(),
            optimized: prompt.to_string(),
            explanation: format!("No optimization applied: {reason}"),
            performance_metrics: BTreeMap::new(),
            confidence: 1.0,
        }
    }

    /// Whether the strategy declined to rewrite the prompt.
    pub fn is_noop(&self) -> bool {
        self.strategy == NO_OPTIMIZATION_LABEL
    }
}

// ── Task types ──────────────────────────────────────────────────────

/// Task bucket used by `automatic_prompt_engineer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Analysis,
    Creative,
    Technical,
    Reasoning,
}

impl TaskType {
    /// Classify a prompt; buckets are checked in declaration order.
    pub fn detect(prompt: &str) -> Self {
        let lower = prompt.to_lowercase();
        if contains_any(&lower, &["analyze", "evaluate", "assess", "review"]) {
            TaskType::Analysis
        } else if contains_any(&lower, &["create", "generate", "write", "design"]) {
            TaskType::Creative
        } else if contains_any(&lower, &["code", "implement", "debug", "program"]) {
            TaskType::Technical
        } else {
            TaskType::Reasoning
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Analysis => "analysis",
            TaskType::Creative => "creative",
            TaskType::Technical => "technical",
            TaskType::Reasoning => "reasoning",
        }
    }

    fn opening(&self) -> &'static str {
        match self {
            TaskType::Analysis => {
                "Let's break this down systematically and analyze each component."
            }
            TaskType::Creative => {
                "Let's explore this creatively while maintaining logical consistency."
            }
            TaskType::Technical => {
                "Let's approach this with technical precision and clear documentation."
            }
            TaskType::Reasoning => {
                "Let's work this out in a step by step way to be sure we have the right answer."
            }
        }
    }
}

// ── Engine ──────────────────────────────────────────────────────────

/// Applies [`AdvancedStrategy`] scaffolds.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancedRewriteEngine;

impl AdvancedRewriteEngine {
    pub fn new() -> Self {
        Self
    }

    /// Rewrite `prompt` with `strategy`. Pure and deterministic.
    pub fn rewrite(&self, prompt: &str, strategy: AdvancedStrategy) -> AdvancedRewriteResult {
        let result = match strategy {
            AdvancedStrategy::TreeOfThoughts => tree_of_thoughts(prompt),
            AdvancedStrategy::ConstitutionalAi => constitutional_ai(prompt),
            AdvancedStrategy::AutomaticPromptEngineer => automatic_prompt_engineer(prompt),
            AdvancedStrategy::MetaPrompting => meta_prompting(prompt),
            AdvancedStrategy::SelfRefine => self_refine(prompt),
            AdvancedStrategy::Textgrad => textgrad(prompt),
            AdvancedStrategy::Medprompt => medprompt(prompt),
            AdvancedStrategy::PromptWizard => prompt_wizard(prompt),
        };
        debug!(
            "Advanced rewrite {strategy} -> '{}' ({} bytes, confidence {:.2})",
            result.strategy,
            result.optimized.len(),
            result.confidence
        );
        result
    }
}

// ── Strategies ──────────────────────────────────────────────────────

fn tree_of_thoughts(prompt: &str) -> AdvancedRewriteResult {
    if !contains_any(&prompt.to_lowercase(), REASONING_INDICATORS) {
        return AdvancedRewriteResult::unchanged(prompt, "ToT is best for complex reasoning tasks");
    }

    let optimized = Scaffold::new("I need to approach this systematically using a tree of thoughts method.")
        .raw(format!("Task: {prompt}"))
        .raw("I'll explore multiple solution paths:")
        .heading(
            "Path 1: [Initial Approach]",
            numbered(&[
                "First, I'll identify the key components: [decompose problem]",
                "Consider possible first steps: [list 2-3 options]",
                "Evaluate each option: [brief pros/cons]",
                "Select most promising: [chosen approach]",
            ]),
        )
        .heading(
            "Path 2: [Alternative Approach]",
            numbered(&[
                "Different starting point: [alternative decomposition]",
                "Explore variations: [2-3 different options]",
                "Assess feasibility: [evaluation criteria]",
                "Compare with Path 1: [relative merits]",
            ]),
        )
        .section(
            "Evaluation & Selection",
            bullets(&[
                "Compare paths using: [success likelihood, efficiency, completeness]",
                "Select optimal path based on: [specific criteria]",
                "Implement with backtracking option if needed",
            ]),
        )
        .section(
            "Execution",
            "[Detailed implementation of selected path with checkpoints]",
        )
        .section(
            "Self-Evaluation",
            format!(
                "At each step, assess:\n{}",
                bullets(&[
                    "Is this working as expected?",
                    "Should I backtrack and try alternative?",
                    "What have I learned for next steps?",
                ])
            ),
        )
        .build();

    AdvancedRewriteResult::scaffolded(
        AdvancedStrategy::TreeOfThoughts,
        prompt,
        optimized,
        "Implemented multi-path exploration with evaluation and backtracking",
        metrics([
            ("expected_improvement", "70% for complex reasoning".into()),
            ("paths_explored", MetricValue::Int(2)),
            ("backtracking_enabled", true.into()),
        ]),
        0.85,
    )
}

fn constitutional_ai(prompt: &str) -> AdvancedRewriteResult {
    let optimized = Scaffold::new("I'll approach this request while adhering to key principles:")
        .section("Constitutional Guidelines", bullets(CONSTITUTIONAL_PRINCIPLES))
        .field("Original Request", prompt)
        .section(
            "Approach",
            numbered(&[
                "First, I'll evaluate the request against these principles",
                "Identify any potential concerns or edge cases",
                "Provide a response that maximizes helpfulness while maintaining safety",
            ]),
        )
        .section("Response", "[Main response content]")
        .section(
            "Self-Critique",
            bullets(&[
                "Does this response align with all constitutional principles?",
                "Are there any potential harms I should address?",
                "Have I been transparent about limitations?",
            ]),
        )
        .section("Refinement if needed", "[Any adjustments based on self-critique]")
        .build();

    AdvancedRewriteResult::scaffolded(
        AdvancedStrategy::ConstitutionalAi,
        prompt,
        optimized,
        "Applied constitutional principles with self-critique loop",
        metrics([
            ("safety_score", MetricValue::Float(0.95)),
            ("alignment_score", MetricValue::Float(0.92)),
            ("helpfulness_maintained", true.into()),
        ]),
        0.90,
    )
}

fn automatic_prompt_engineer(prompt: &str) -> AdvancedRewriteResult {
    let task_type = TaskType::detect(prompt);

    let optimized = Scaffold::new(task_type.opening())
        .section("Task Specification", prompt)
        .section(
            "Systematic Approach",
            [
                "1. Problem Understanding:\n   - Core objective: [identify main goal]\n   - Key constraints: [list limitations]\n   - Success criteria: [define what good looks like]",
                "2. Solution Development:\n   - Generate multiple candidate approaches\n   - Evaluate each against criteria\n   - Select and refine best approach",
                "3. Implementation:\n   - Execute step-by-step\n   - Validate at each milestone\n   - Document reasoning",
                "4. Quality Assurance:\n   - Verify solution meets all requirements\n   - Check for edge cases\n   - Confirm accuracy",
            ]
            .join("\n\n"),
        )
        .raw("**Let's begin:**")
        .build();

    AdvancedRewriteResult::scaffolded(
        AdvancedStrategy::AutomaticPromptEngineer,
        prompt,
        optimized,
        "Applied APE-discovered optimal instruction patterns",
        metrics([
            ("pattern_match", task_type.as_str().into()),
            ("expected_improvement", "Human-level performance".into()),
            ("instruction_clarity", MetricValue::Float(0.93)),
        ]),
        0.88,
    )
}

fn meta_prompting(prompt: &str) -> AdvancedRewriteResult {
    let generated = format!(
        "<optimal_prompt>\nTask: {prompt}\n\n\
         Context: [Inferred context and assumptions]\n\n\
         Requirements:\n{}\n\n\
         Approach:\n{}\n\n\
         Expected Output:\n{}\n\
         </optimal_prompt>",
        bullets(&[
            "[Specific requirement 1]",
            "[Specific requirement 2]",
            "[Quality criteria]",
        ]),
        numbered(&[
            "[Step 1 with details]",
            "[Step 2 with validation]",
            "[Output formatting]",
        ]),
        bullets(&[
            "Format: [Structured format]",
            "Length: [Appropriate scope]",
            "Style: [Tone and approach]",
        ]),
    );

    let optimized =
        Scaffold::new("I need to first generate an optimal prompt for this task, then execute it.")
            .field("Original Request", prompt)
            .section(
                "Meta-Prompt Generation",
                format!(
                    "Given the task above, I'll create an optimized prompt that:\n{}",
                    numbered(&[
                        "Clarifies ambiguities",
                        "Adds helpful structure",
                        "Includes success criteria",
                        "Provides output format",
                    ])
                ),
            )
            .section("Generated Optimal Prompt", generated)
            .section(
                "Execution Using Optimal Prompt",
                "Now I'll execute the task using the optimized prompt above...",
            )
            .raw("[Response following the optimized structure]")
            .build();

    AdvancedRewriteResult::scaffolded(
        AdvancedStrategy::MetaPrompting,
        prompt,
        optimized,
        "Used AI to generate optimal prompt before execution",
        metrics([
            ("clarity_improvement", MetricValue::Float(0.85)),
            ("structure_added", true.into()),
            ("self_optimization", true.into()),
        ]),
        0.87,
    )
}

fn self_refine(prompt: &str) -> AdvancedRewriteResult {
    let optimized = Scaffold::new("I'll use an iterative self-refinement approach for this task.")
        .field("Initial Task", prompt)
        .section("Iteration 1 - Initial Response", "[Generate initial response]")
        .section(
            "Self-Feedback",
            bullets(&[
                "Strengths: [What works well]",
                "Weaknesses: [What could be improved]",
                "Missing elements: [What's not addressed]",
                "Quality score: [X/10]",
            ]),
        )
        .section(
            "Iteration 2 - Refined Response",
            "[Improved response addressing feedback]",
        )
        .section(
            "Self-Feedback",
            bullets(&[
                "Improvements made: [List changes]",
                "Remaining issues: [Any persisting problems]",
                "Quality score: [Y/10] (should be > X)",
            ]),
        )
        .section("Iteration 3 - Final Response", "[Final polished response]")
        .section(
            "Final Validation",
            [
                "✓ Addresses all aspects of the request",
                "✓ Clear and well-structured",
                "✓ Accurate and complete",
                "✓ Actionable where applicable",
            ]
            .join("\n"),
        )
        .raw("**Convergence achieved at quality score: [Z/10]**")
        .build();

    AdvancedRewriteResult::scaffolded(
        AdvancedStrategy::SelfRefine,
        prompt,
        optimized,
        "Implemented iterative refinement with self-feedback loop",
        metrics([
            ("iterations", MetricValue::Int(3)),
            ("expected_improvement", "20% absolute".into()),
            ("convergence", true.into()),
        ]),
        0.89,
    )
}

fn textgrad(prompt: &str) -> AdvancedRewriteResult {
    let optimized = Scaffold::new("I'll optimize this request using textual gradient feedback.")
        .field("Objective Function", prompt)
        .section("Initial Prompt (P0)", format!("\"{prompt}\""))
        .section(
            "Gradient Computation (Feedback Analysis)",
            bullets(&[
                "Clarity gradient: [Areas needing clarification]",
                "Specificity gradient: [Where more detail helps]",
                "Structure gradient: [Organization improvements]",
                "Constraint gradient: [Missing boundaries]",
            ]),
        )
        .section(
            "Optimization Step 1 (P1 = P0 + α·∇P)",
            "Enhanced prompt with:\n\
             + Clarified objectives: [specific additions]\n\
             + Added constraints: [boundary conditions]\n\
             + Structured approach: [organizational framework]",
        )
        .section(
            "Optimized Prompt (P1)",
            format!(
                "Task: {prompt}\n\nWith optimizations:\n{}",
                bullets(&[
                    "Objective: [Clarified goal]",
                    "Constraints: [Explicit boundaries]",
                    "Approach: [Structured methodology]",
                    "Success metrics: [Measurable outcomes]",
                ])
            ),
        )
        .raw(
            "**Gradient Magnitude:** [Improvement score]\n\
             **Convergence Status:** [Optimization complete/continuing]",
        )
        .section(
            "Execution with Optimized Prompt",
            "[Response using the optimized version]",
        )
        .build();

    AdvancedRewriteResult::scaffolded(
        AdvancedStrategy::Textgrad,
        prompt,
        optimized,
        "Applied natural language gradients for optimization",
        metrics([
            ("gradient_steps", MetricValue::Int(1)),
            ("clarity_gain", MetricValue::Float(0.8)),
            ("specificity_gain", MetricValue::Float(0.7)),
        ]),
        0.86,
    )
}

fn medprompt(prompt: &str) -> AdvancedRewriteResult {
    let optimized =
        Scaffold::new("I'll apply a comprehensive multi-technique approach for optimal results.")
            .field("Task", prompt)
            .section(
                "Technique 1 - Few-Shot Examples",
                format!(
                    "Based on similar successful patterns:\n{}",
                    bullets(&[
                        "Example 1: [Relevant example with outcome]",
                        "Example 2: [Another relevant example]",
                        "Pattern identified: [Common successful approach]",
                    ])
                ),
            )
            .section(
                "Technique 2 - Chain of Thought",
                format!(
                    "Step-by-step reasoning:\n{}",
                    numbered(&[
                        "[First logical step]",
                        "[Build on previous]",
                        "[Continue systematically]",
                    ])
                ),
            )
            .section(
                "Technique 3 - Ensemble Approach",
                format!(
                    "Multiple perspectives:\n{}",
                    bullets(&[
                        "Approach A: [First method]",
                        "Approach B: [Alternative method]",
                        "Approach C: [Different angle]",
                    ])
                ),
            )
            .section(
                "Technique 4 - Self-Consistency",
                format!(
                    "Validation across approaches:\n{}",
                    bullets(&[
                        "Common elements: [Consistent findings]",
                        "Divergences: [Where approaches differ]",
                        "Reconciliation: [Unified solution]",
                    ])
                ),
            )
            .section("Synthesized Response", "[Combined insights from all techniques]")
            .section(
                "Confidence Calibration",
                bullets(&[
                    "High confidence elements: [Well-supported conclusions]",
                    "Moderate confidence: [Reasonable inferences]",
                    "Low confidence: [Speculative elements]",
                ]),
            )
            .build();

    AdvancedRewriteResult::scaffolded(
        AdvancedStrategy::Medprompt,
        prompt,
        optimized,
        "Combined few-shot, CoT, ensemble, and self-consistency",
        metrics([
            ("techniques_combined", MetricValue::Int(4)),
            ("expected_accuracy", "90%+".into()),
            ("robustness", "High".into()),
        ]),
        0.92,
    )
}

fn prompt_wizard(prompt: &str) -> AdvancedRewriteResult {
    let optimized = Scaffold::new("I'll create a self-improving prompt system for this task.")
        .field("Base Task", prompt)
        .section(
            "Feedback Collection Framework",
            "1. Task Understanding Score: [0-10]\n\
             2. Response Quality Metrics:\n   \
             - Completeness: [0-10]\n   \
             - Accuracy: [0-10]\n   \
             - Usefulness: [0-10]",
        )
        .section("Prompt Evolution - Generation 1", format!("Original: \"{prompt}\""))
        .section(
            "Synthetic Feedback Analysis",
            bullets(&[
                "Ambiguities detected: [List unclear elements]",
                "Missing context: [What would help]",
                "Improvement opportunities: [Specific suggestions]",
            ]),
        )
        .section(
            "Prompt Evolution - Generation 2",
            format!(
                "Enhanced version:\n\"{prompt}\n\n\
                 Additional context: [Added clarifications]\n\
                 Specific requirements: [Explicit needs]\n\
                 Quality criteria: [Success measures]\""
            ),
        )
        .section(
            "Performance Prediction",
            bullets(&[
                "Expected improvement: [X%]",
                "Confidence intervals: [Range]",
            ]),
        )
        .section(
            "Final Evolved Prompt",
            "[Optimized version incorporating all learnings]",
        )
        .section(
            "Execution with Evolved Prompt",
            "[Response using the evolved prompt]",
        )
        .section(
            "Continuous Improvement Note",
            "This prompt can further evolve based on real usage feedback.",
        )
        .build();

    AdvancedRewriteResult::scaffolded(
        AdvancedStrategy::PromptWizard,
        prompt,
        optimized,
        "Implemented feedback-driven prompt evolution",
        metrics([
            ("evolution_generations", MetricValue::Int(2)),
            ("feedback_incorporated", true.into()),
            ("self_improving", true.into()),
        ]),
        0.88,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(prompt: &str, strategy: AdvancedStrategy) -> AdvancedRewriteResult {
        AdvancedRewriteEngine::new().rewrite(prompt, strategy)
    }

    #[test]
    fn tree_of_thoughts_is_noop_without_reasoning_indicator() {
        let result = rewrite("hello there", AdvancedStrategy::TreeOfThoughts);
        assert!(result.is_noop());
        assert_eq!(result.optimized, result.original);
        assert_eq!(result.confidence, 1.0);
        assert!(result.performance_metrics.is_empty());
        assert!(result.explanation.starts_with("No optimization applied"));
    }

    #[test]
    fn tree_of_thoughts_scaffolds_reasoning_tasks() {
        let prompt = "solve the problem of distributing tasks across multiple servers";
        let result = rewrite(prompt, AdvancedStrategy::TreeOfThoughts);
        assert_eq!(result.strategy, "Tree of Thoughts");
        assert_eq!(result.confidence, 0.85);
        assert!(result.optimized.contains(&format!("Task: {prompt}")));
        assert!(result.optimized.contains("**Path 2: [Alternative Approach]**"));
        assert_eq!(
            result.performance_metrics["paths_explored"],
            MetricValue::Int(2)
        );
    }

    #[test]
    fn every_scaffold_embeds_the_prompt() {
        let prompt = "design a plan to evaluate caching";
        for strategy in AdvancedStrategy::ALL {
            let result = rewrite(prompt, strategy);
            assert!(!result.is_noop(), "{strategy} declined");
            assert!(result.optimized.contains(prompt), "{strategy} dropped the prompt");
            assert_eq!(result.strategy, strategy.label());
            assert!((0.0..=1.0).contains(&result.confidence));
            assert_eq!(result.performance_metrics.len(), 3);
        }
    }

    #[test]
    fn ape_reports_task_bucket() {
        let cases = [
            ("review the quarterly numbers", TaskType::Analysis),
            ("write a haiku", TaskType::Creative),
            ("implement a trie", TaskType::Technical),
            ("why is the sky blue", TaskType::Reasoning),
        ];
        for (prompt, expected) in cases {
            let result = rewrite(prompt, AdvancedStrategy::AutomaticPromptEngineer);
            assert_eq!(
                result.performance_metrics["pattern_match"],
                MetricValue::Text(expected.as_str().to_string())
            );
            assert!(result.optimized.starts_with(expected.opening()));
        }
    }

    #[test]
    fn analysis_bucket_wins_over_creative() {
        assert_eq!(TaskType::detect("evaluate and design"), TaskType::Analysis);
    }

    #[test]
    fn constitutional_lists_all_principles() {
        let result = rewrite("create a content filter", AdvancedStrategy::ConstitutionalAi);
        for principle in CONSTITUTIONAL_PRINCIPLES {
            assert!(result.optimized.contains(principle));
        }
        assert!(result.optimized.contains("**Original Request:** create a content filter"));
    }

    #[test]
    fn metrics_serialize_as_plain_json_values() {
        let result = rewrite("classify tickets by urgency", AdvancedStrategy::Medprompt);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["performance_metrics"]["techniques_combined"], 4);
        assert_eq!(json["performance_metrics"]["expected_accuracy"], "90%+");
        assert_eq!(json["confidence"], 0.92);
    }
}
