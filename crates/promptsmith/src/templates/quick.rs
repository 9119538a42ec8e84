//! Quick starter prompts keyed by use case.
//!
//! Unlike the domain catalog these are short bracketed outlines with no
//! declared variables; callers copy one and fill in the brackets by hand.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PromptError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    CodeGeneration,
    Analysis,
    CreativeWriting,
    DataExtraction,
    Tutoring,
}

impl UseCase {
    pub const ALL: [UseCase; 5] = [
        UseCase::CodeGeneration,
        UseCase::Analysis,
        UseCase::CreativeWriting,
        UseCase::DataExtraction,
        UseCase::Tutoring,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UseCase::CodeGeneration => "code_generation",
            UseCase::Analysis => "analysis",
            UseCase::CreativeWriting => "creative_writing",
            UseCase::DataExtraction => "data_extraction",
            UseCase::Tutoring => "tutoring",
        }
    }

    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|u| u.as_str().to_string()).collect()
    }

    /// The starter prompt for this use case.
    pub fn template(&self) -> &'static str {
        match self {
            UseCase::CodeGeneration => CODE_GENERATION,
            UseCase::Analysis => ANALYSIS,
            UseCase::CreativeWriting => CREATIVE_WRITING,
            UseCase::DataExtraction => DATA_EXTRACTION,
            UseCase::Tutoring => TUTORING,
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UseCase {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|u| u.as_str() == wanted)
            .ok_or_else(|| PromptError::UnknownUseCase {
                requested: s.to_string(),
                valid: Self::names(),
            })
    }
}

const CODE_GENERATION: &str = "\
Task: [Describe what code you need]

Requirements:
- Language: [Specify programming language]
- Purpose: [What the code should accomplish]
- Constraints: [Any limitations or requirements]
- Style: [Coding standards to follow]

Please generate code that:
1. Includes comprehensive error handling
2. Follows best practices for the language
3. Is well-commented and documented
4. Includes example usage";

const ANALYSIS: &str = "\
Analyze [subject/data/situation]

Context: [Provide relevant background]

Focus on:
- Key patterns and trends
- Underlying causes
- Implications and consequences
- Actionable insights

Please structure your analysis with:
1. Executive Summary
2. Detailed Findings
3. Recommendations
4. Supporting Evidence";

const CREATIVE_WRITING: &str = "\
Create [type of content] about [topic]

Tone: [formal/casual/humorous/serious]
Length: [word count or scope]
Audience: [target readers]
Style: [narrative/descriptive/persuasive]

Key elements to include:
- [Element 1]
- [Element 2]
- [Element 3]

Please ensure the content is engaging, original, and appropriate for the audience.";

const DATA_EXTRACTION: &str = "\
Extract [specific data points] from the following text:

Text: [Insert text here]

Output Format: [e.g., JSON, CSV, bullet points]

Ensure accuracy and completeness. If a data point is not found, indicate 'N/A'.";

const TUTORING: &str = "\
Explain [concept/topic] to a [target audience, e.g., high school student, beginner in programming].

Focus on:
- Core principles
- Simple analogies
- Practical examples
- Common misconceptions

Break down complex ideas into easy-to-understand segments. Encourage questions and provide a clear, supportive explanation.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_use_case_has_a_template() {
        for use_case in UseCase::ALL {
            assert!(!use_case.template().is_empty());
            assert_eq!(use_case.as_str().parse::<UseCase>(), Ok(use_case));
        }
    }

    #[test]
    fn templates_start_with_their_instruction() {
        assert!(UseCase::CodeGeneration.template().starts_with("Task: "));
        assert!(UseCase::Tutoring.template().starts_with("Explain "));
        assert!(UseCase::DataExtraction.template().ends_with("indicate 'N/A'."));
    }

    #[test]
    fn unknown_use_case_lists_valid_names() {
        let err = "poetry".parse::<UseCase>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown use case 'poetry'; valid use cases: code_generation, analysis, \
             creative_writing, data_extraction, tutoring"
        );
    }
}
