//! Rubric-based prompt quality scoring.
//!
//! The [`Analyzer`] starts every prompt at 100 points and subtracts a fixed
//! deduction for each weakness it finds. Each deduction records one issue and
//! one paired suggestion, so `issues` and `suggestions` always line up by
//! index.

use serde::{Deserialize, Serialize};

/// Words that signal an underspecified request.
pub const VAGUE_WORDS: &[&str] = &[
    "thing",
    "stuff",
    "something",
    "whatever",
    "somehow",
    "etc.",
    "and so on",
];

/// Verbs that mark an explicit instruction.
pub const ACTION_VERBS: &[&str] = &[
    "explain",
    "describe",
    "create",
    "analyze",
    "generate",
    "summarize",
    "list",
    "compare",
    "write",
    "develop",
];

const FORMAT_MARKERS: &[&str] = &["format", "structure", "output as", "in the form of"];

const TONE_MARKERS: &[&str] = &["tone", "style", "professional", "casual", "friendly", "formal"];

const VAGUE_WORD_PENALTY: f64 = 5.0;
const TOO_SHORT_PENALTY: f64 = 10.0;
const NO_ACTION_VERB_PENALTY: f64 = 10.0;
const THIN_CONTEXT_PENALTY: f64 = 5.0;
const NO_FORMAT_PENALTY: f64 = 7.0;
const NO_TONE_PENALTY: f64 = 3.0;

/// Prompts shorter than this many characters are flagged as too short.
pub const MIN_PROMPT_CHARS: usize = 30;

/// Prompts with fewer whitespace-separated words are flagged as lacking context.
pub const MIN_CONTEXT_WORDS: usize = 15;

/// Quality report for a single prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Score in `[0, 100]`; 100 means no deductions applied.
    pub score: f64,
    pub issues: Vec<String>,
    /// One suggestion per issue, same order.
    pub suggestions: Vec<String>,
}

impl AnalysisReport {
    /// Whether any issue text contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.issues.iter().any(|issue| issue.contains(needle))
    }
}

/// Scores prompts against the fixed rubric.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer;

impl Analyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a prompt. Pure and deterministic.
    pub fn analyze(&self, prompt: &str) -> AnalysisReport {
        let lower = prompt.to_lowercase();
        let mut tally = Tally::new();

        for word in VAGUE_WORDS {
            if lower.contains(word) {
                tally.deduct(
                    VAGUE_WORD_PENALTY,
                    format!("Contains vague word: '{word}'"),
                    format!("Replace '{word}' with specific terms or examples."),
                );
            }
        }

        if prompt.chars().count() < MIN_PROMPT_CHARS {
            tally.deduct(
                TOO_SHORT_PENALTY,
                "Prompt is too short.",
                "Add more context, details, and specific instructions.",
            );
        }

        if !contains_any(&lower, ACTION_VERBS) {
            tally.deduct(
                NO_ACTION_VERB_PENALTY,
                "Lacks a clear action verb or instruction.",
                "Start the prompt with a clear action verb (e.g., 'Generate', 'Analyze', 'Write').",
            );
        }

        if prompt.split_whitespace().count() < MIN_CONTEXT_WORDS {
            tally.deduct(
                THIN_CONTEXT_PENALTY,
                "Lacks sufficient context.",
                "Provide background information, purpose, or scenario.",
            );
        }

        if !contains_any(&lower, FORMAT_MARKERS) {
            tally.deduct(
                NO_FORMAT_PENALTY,
                "Missing explicit output format instructions.",
                "Specify the desired output format (e.g., 'as a JSON object', 'in bullet points', 'a table').",
            );
        }

        if !contains_any(&lower, TONE_MARKERS) {
            tally.deduct(
                NO_TONE_PENALTY,
                "Missing tone or style guidance.",
                "Specify the desired tone or writing style (e.g., 'professional', 'casual', 'persuasive').",
            );
        }

        tally.finish()
    }
}

/// Whether `haystack` contains any of `needles` as a substring.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Running score with its paired issue/suggestion lists.
struct Tally {
    score: f64,
    issues: Vec<String>,
    suggestions: Vec<String>,
}

impl Tally {
    fn new() -> Self {
        Self {
            score: 100.0,
            issues: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    fn deduct(&mut self, points: f64, issue: impl Into<String>, suggestion: impl Into<String>) {
        self.score -= points;
        self.issues.push(issue.into());
        self.suggestions.push(suggestion.into());
    }

    fn finish(self) -> AnalysisReport {
        AnalysisReport {
            score: self.score.max(0.0),
            issues: self.issues,
            suggestions: self.suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "Write a detailed comparison of three database engines for a \
        backend team, output as a table, in a professional tone, covering latency and cost.";

    #[test]
    fn well_formed_prompt_scores_full_marks() {
        let report = Analyzer::new().analyze(WELL_FORMED);
        assert_eq!(report.score, 100.0);
        assert!(report.issues.is_empty());
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn vague_short_prompt_accumulates_deductions() {
        // "thing" and "something" -10, short -10, few words -5, no format -7, no tone -3
        let report = Analyzer::new().analyze("write something about AI");
        assert_eq!(report.score, 65.0);
        assert_eq!(report.issues[1], "Contains vague word: 'something'");
        assert_eq!(report.issues[2], "Prompt is too short.");
        assert_eq!(report.issues.len(), report.suggestions.len());
    }

    #[test]
    fn overlapping_vague_words_each_deduct() {
        // "something" also contains "thing".
        let report = Analyzer::new().analyze("something");
        assert_eq!(report.issues[0], "Contains vague word: 'thing'");
        assert_eq!(report.issues[1], "Contains vague word: 'something'");
    }

    #[test]
    fn every_vague_word_deducts_once() {
        let prompt = "thing stuff something whatever somehow etc. and so on";
        let report = Analyzer::new().analyze(prompt);
        // 7 vague words (35) + no verb (10) + context (5) + format (7) + tone (3) = 60
        assert_eq!(report.score, 40.0);
        assert_eq!(report.issues.len(), 11);

        // Repetition does not deduct again; the longer text only clears the word count.
        let repeated = format!("{prompt} {prompt}");
        assert_eq!(Analyzer::new().analyze(&repeated).score, 45.0);
    }

    #[test]
    fn more_deductions_mean_lower_score() {
        let analyzer = Analyzer::new();
        let base = analyzer.analyze(WELL_FORMED).score;
        let with_vague = analyzer.analyze(&format!("{WELL_FORMED} Mention stuff too.")).score;
        let with_two_vague = analyzer
            .analyze(&format!("{WELL_FORMED} Mention stuff and whatever too."))
            .score;
        assert!(with_vague < base);
        assert!(with_two_vague < with_vague);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let report = Analyzer::new().analyze("EXPLAIN the STUFF in a FORMAL Format please");
        assert!(report.mentions("vague word: 'stuff'"));
        assert!(!report.mentions("action verb"));
        assert!(!report.mentions("output format"));
        assert!(!report.mentions("tone"));
    }

    #[test]
    fn terse_request_loses_thirty_five_points() {
        let report = Analyzer::new().analyze("fix this");
        // short -10, no verb -10, context -5, format -7, tone -3
        assert_eq!(report.score, 65.0);
        assert!(report.mentions("context"));
    }
}
