//! Deterministic strategy selection.
//!
//! Basic and advanced selection use separate rule tables. Basic selection
//! reads an [`AnalysisReport`]; advanced selection reads the raw prompt.
//! In both, the first matching rule wins.

use tracing::debug;

use crate::analyzer::{AnalysisReport, contains_any};
use crate::strategy::{AdvancedStrategy, BasicStrategy};

/// Reports scoring below this are rewritten for clarity first.
pub const CLARITY_SCORE_THRESHOLD: f64 = 50.0;

/// Prompts with fewer words than this are treated as vague by the advanced table.
pub const SHORT_PROMPT_WORDS: usize = 10;

/// Issue substrings checked in order once the score clears the threshold.
const BASIC_ISSUE_RULES: &[(&str, BasicStrategy)] = &[
    ("context", BasicStrategy::Specificity),
    ("output format", BasicStrategy::StructuredOutput),
    ("tone", BasicStrategy::ToneAdjustment),
];

/// Keyword rules before the short-prompt check.
const ADVANCED_LEADING_RULES: &[(&[&str], AdvancedStrategy)] = &[
    (
        &["solve", "puzzle", "plan", "optimize"],
        AdvancedStrategy::TreeOfThoughts,
    ),
    (
        &["ethical", "safe", "harm", "bias"],
        AdvancedStrategy::ConstitutionalAi,
    ),
    (
        &["analyze", "systematic", "comprehensive"],
        AdvancedStrategy::AutomaticPromptEngineer,
    ),
];

/// Keyword rules after the short-prompt check.
const ADVANCED_TRAILING_RULES: &[(&[&str], AdvancedStrategy)] = &[
    (
        &["accurate", "precise", "exact", "medical"],
        AdvancedStrategy::Medprompt,
    ),
    (
        &["improve", "refine", "iterate"],
        AdvancedStrategy::SelfRefine,
    ),
];

const ADVANCED_FALLBACK: AdvancedStrategy = AdvancedStrategy::Textgrad;

/// Picks a strategy from an analysis report or a raw prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategySelector;

impl StrategySelector {
    pub fn new() -> Self {
        Self
    }

    /// Choose a basic strategy from an analysis report.
    pub fn select_basic(&self, report: &AnalysisReport) -> BasicStrategy {
        let strategy = if report.score < CLARITY_SCORE_THRESHOLD {
            BasicStrategy::Clarity
        } else {
            BASIC_ISSUE_RULES
                .iter()
                .find(|(needle, _)| report.mentions(needle))
                .map(|(_, strategy)| *strategy)
                .unwrap_or(BasicStrategy::ChainOfThought)
        };
        debug!(
            "Selected basic strategy {strategy} (score {:.1}, {} issues)",
            report.score,
            report.issues.len()
        );
        strategy
    }

    /// Choose an advanced strategy from prompt keywords.
    pub fn select_advanced(&self, prompt: &str) -> AdvancedStrategy {
        let lower = prompt.to_lowercase();
        let strategy = first_match(&lower, ADVANCED_LEADING_RULES)
            .or_else(|| is_vague(prompt).then_some(AdvancedStrategy::MetaPrompting))
            .or_else(|| first_match(&lower, ADVANCED_TRAILING_RULES))
            .unwrap_or(ADVANCED_FALLBACK);
        debug!("Selected advanced strategy {strategy}");
        strategy
    }
}

fn first_match(lower: &str, rules: &[(&[&str], AdvancedStrategy)]) -> Option<AdvancedStrategy> {
    rules
        .iter()
        .find(|(keywords, _)| contains_any(lower, keywords))
        .map(|(_, strategy)| *strategy)
}

fn is_vague(prompt: &str) -> bool {
    prompt.split_whitespace().count() < SHORT_PROMPT_WORDS || prompt.contains('?')
}

/// Reason string reported by auto-optimization.
pub fn auto_reason(strategy: BasicStrategy, report: &AnalysisReport) -> String {
    format!(
        "Chose {strategy} based on analysis score of {:.1}",
        report.score
    )
}
