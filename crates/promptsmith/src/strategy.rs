//! Closed sets of rewrite strategies.
//!
//! [`BasicStrategy`] tags drive the small guarded insertions of the
//! [`BasicRewriteEngine`](crate::rewrite::BasicRewriteEngine);
//! [`AdvancedStrategy`] tags drive the narrative scaffolds of the
//! [`AdvancedRewriteEngine`](crate::rewrite::advanced::AdvancedRewriteEngine).
//! Both parse from their snake_case names and reject anything else with
//! [`PromptError::UnknownStrategy`].

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PromptError;

/// Strategy tag accepted by `advanced_optimize` to defer to the selector.
pub const AUTO: &str = "auto";

/// Basic rewrite strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BasicStrategy {
    Clarity,
    Specificity,
    ChainOfThought,
    FewShot,
    StructuredOutput,
    RoleBased,
    Constraints,
    ToneAdjustment,
}

impl BasicStrategy {
    pub const ALL: [BasicStrategy; 8] = [
        BasicStrategy::Clarity,
        BasicStrategy::Specificity,
        BasicStrategy::ChainOfThought,
        BasicStrategy::FewShot,
        BasicStrategy::StructuredOutput,
        BasicStrategy::RoleBased,
        BasicStrategy::Constraints,
        BasicStrategy::ToneAdjustment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BasicStrategy::Clarity => "clarity",
            BasicStrategy::Specificity => "specificity",
            BasicStrategy::ChainOfThought => "chain_of_thought",
            BasicStrategy::FewShot => "few_shot",
            BasicStrategy::StructuredOutput => "structured_output",
            BasicStrategy::RoleBased => "role_based",
            BasicStrategy::Constraints => "constraints",
            BasicStrategy::ToneAdjustment => "tone_adjustment",
        }
    }

    /// Fixed one-line explanation reported alongside a rewrite.
    pub fn explanation(&self) -> &'static str {
        match self {
            BasicStrategy::Clarity => {
                "Improved clarity by removing ambiguity and adding specific instructions."
            }
            BasicStrategy::Specificity => "Added specific details, constraints, and examples.",
            BasicStrategy::ChainOfThought => {
                "Added chain-of-thought reasoning instructions to guide the model's thinking process."
            }
            BasicStrategy::FewShot => "Added examples to guide the response format and content.",
            BasicStrategy::StructuredOutput => {
                "Added explicit structure for organized and predictable output."
            }
            BasicStrategy::RoleBased => {
                "Assigned a specific role to the AI to leverage its expertise."
            }
            BasicStrategy::Constraints => {
                "Added explicit constraints and limitations to guide the response."
            }
            BasicStrategy::ToneAdjustment => {
                "Adjusted the tone and style of the prompt for better alignment with desired output."
            }
        }
    }

    /// Every valid tag, in declaration order.
    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|s| s.as_str().to_string()).collect()
    }
}

impl fmt::Display for BasicStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BasicStrategy {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == wanted)
            .ok_or_else(|| PromptError::UnknownStrategy {
                requested: s.to_string(),
                valid: Self::names(),
            })
    }
}

/// Advanced (scaffold-producing) rewrite strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdvancedStrategy {
    TreeOfThoughts,
    ConstitutionalAi,
    AutomaticPromptEngineer,
    MetaPrompting,
    SelfRefine,
    Textgrad,
    Medprompt,
    PromptWizard,
}

impl AdvancedStrategy {
    pub const ALL: [AdvancedStrategy; 8] = [
        AdvancedStrategy::TreeOfThoughts,
        AdvancedStrategy::ConstitutionalAi,
        AdvancedStrategy::AutomaticPromptEngineer,
        AdvancedStrategy::MetaPrompting,
        AdvancedStrategy::SelfRefine,
        AdvancedStrategy::Textgrad,
        AdvancedStrategy::Medprompt,
        AdvancedStrategy::PromptWizard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdvancedStrategy::TreeOfThoughts => "tree_of_thoughts",
            AdvancedStrategy::ConstitutionalAi => "constitutional_ai",
            AdvancedStrategy::AutomaticPromptEngineer => "automatic_prompt_engineer",
            AdvancedStrategy::MetaPrompting => "meta_prompting",
            AdvancedStrategy::SelfRefine => "self_refine",
            AdvancedStrategy::Textgrad => "textgrad",
            AdvancedStrategy::Medprompt => "medprompt",
            AdvancedStrategy::PromptWizard => "prompt_wizard",
        }
    }

    /// Human-readable label reported in results.
    pub fn label(&self) -> &'static str {
        match self {
            AdvancedStrategy::TreeOfThoughts => "Tree of Thoughts",
            AdvancedStrategy::ConstitutionalAi => "Constitutional AI",
            AdvancedStrategy::AutomaticPromptEngineer => "Automatic Prompt Engineer",
            AdvancedStrategy::MetaPrompting => "Meta-Prompting",
            AdvancedStrategy::SelfRefine => "Self-Refine",
            AdvancedStrategy::Textgrad => "TEXTGRAD",
            AdvancedStrategy::Medprompt => "Medprompt",
            AdvancedStrategy::PromptWizard => "PromptWizard",
        }
    }

    /// Every valid tag, in declaration order.
    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|s| s.as_str().to_string()).collect()
    }
}

impl fmt::Display for AdvancedStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdvancedStrategy {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == wanted)
            .ok_or_else(|| PromptError::UnknownStrategy {
                requested: s.to_string(),
                valid: Self::names(),
            })
    }
}

/// An advanced strategy request: either an explicit strategy or `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancedChoice {
    Auto,
    Explicit(AdvancedStrategy),
}

impl FromStr for AdvancedChoice {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == AUTO {
            return Ok(AdvancedChoice::Auto);
        }
        s.parse::<AdvancedStrategy>()
            .map(AdvancedChoice::Explicit)
            .map_err(|_| {
                let mut valid = AdvancedStrategy::names();
                valid.push(AUTO.to_string());
                PromptError::UnknownStrategy {
                    requested: s.to_string(),
                    valid,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_names_round_trip_through_from_str() {
        for strategy in BasicStrategy::ALL {
            assert_eq!(strategy.as_str().parse::<BasicStrategy>(), Ok(strategy));
        }
    }

    #[test]
    fn serde_names_match_as_str() {
        for strategy in BasicStrategy::ALL {
            let json = serde_json::to_value(strategy).unwrap();
            assert_eq!(json, strategy.as_str());
        }
        for strategy in AdvancedStrategy::ALL {
            let json = serde_json::to_value(strategy).unwrap();
            assert_eq!(json, strategy.as_str());
        }
    }

    #[test]
    fn unknown_basic_strategy_lists_all_tags() {
        let err = "telepathy".parse::<BasicStrategy>().unwrap_err();
        match err {
            PromptError::UnknownStrategy { requested, valid } => {
                assert_eq!(requested, "telepathy");
                assert_eq!(valid.len(), 8);
                assert!(valid.contains(&"tone_adjustment".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn basic_and_advanced_tags_do_not_cross_parse() {
        assert!("clarity".parse::<AdvancedStrategy>().is_err());
        assert!("medprompt".parse::<BasicStrategy>().is_err());
    }

    #[test]
    fn advanced_choice_accepts_auto() {
        assert_eq!("auto".parse::<AdvancedChoice>(), Ok(AdvancedChoice::Auto));
        assert_eq!(
            "textgrad".parse::<AdvancedChoice>(),
            Ok(AdvancedChoice::Explicit(AdvancedStrategy::Textgrad))
        );
        let err = "nope".parse::<AdvancedChoice>().unwrap_err();
        assert!(err.to_string().contains("auto"));
    }
}
