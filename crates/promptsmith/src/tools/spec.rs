//! Structured tool descriptions with usage guidance.
//!
//! `ToolSpec` replaces free-form description strings with structured
//! metadata (purpose, when to use, when not to use, examples, output format)
//! and renders it into the single description string a [`ToolDef`] carries.

use crate::ToolDef;

/// A structured tool specification.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Tool name (must be unique within a ToolSet).
    pub name: String,
    /// One-sentence imperative purpose: "Score a prompt against the rubric".
    pub purpose: String,
    pub when_to_use: String,
    /// When this tool should NOT be used (points at the sibling tool instead).
    pub when_not_to_use: String,
    pub parameters: serde_json::Value,
    pub examples: Vec<UsageExample>,
    pub output_format: String,
    pub disambiguation: Vec<DisambiguationExample>,
}

/// An example clarifying when to use this tool vs a similar one.
#[derive(Debug, Clone)]
pub struct DisambiguationExample {
    pub scenario: String,
    pub correct_tool: String,
    pub reason: String,
}

/// A usage example for a tool.
#[derive(Debug, Clone)]
pub struct UsageExample {
    pub input: String,
    pub output: String,
}

impl ToolSpec {
    /// Create a new ToolSpec builder.
    pub fn builder(name: impl Into<String>) -> ToolSpecBuilder {
        ToolSpecBuilder {
            name: name.into(),
            purpose: String::new(),
            when_to_use: String::new(),
            when_not_to_use: String::new(),
            parameters: None,
            examples: Vec::new(),
            output_format: None,
            disambiguation: Vec::new(),
        }
    }

    /// Render the structured fields into one description string. Empty
    /// fields are omitted.
    pub fn to_description(&self) -> String {
        let mut desc = format!("{}.", self.purpose.trim_end_matches('.'));
        if !self.when_to_use.is_empty() {
            desc.push_str(&format!("\nWhen to use: {}", self.when_to_use));
        }
        if !self.when_not_to_use.is_empty() {
            desc.push_str(&format!("\nWhen NOT to use: {}", self.when_not_to_use));
        }

        if !self.examples.is_empty() {
            desc.push_str("\nExamples:");
            for ex in &self.examples {
                desc.push_str(&format!("\n  - Input: {} → {}", ex.input, ex.output));
            }
        }

        if !self.output_format.is_empty() {
            desc.push_str(&format!("\nOutput format: {}", self.output_format));
        }

        if !self.disambiguation.is_empty() {
            desc.push_str("\nDisambiguation:");
            for d in &self.disambiguation {
                desc.push_str(&format!(
                    "\n  - {}: use '{}' instead, {}",
                    d.scenario, d.correct_tool, d.reason
                ));
            }
        }

        desc
    }

    pub fn to_tool_def(&self) -> ToolDef {
        ToolDef::new(
            self.name.clone(),
            self.to_description(),
            self.parameters.clone(),
        )
    }
}

/// Builder for a [`ToolSpec`]. Parameters default to an empty object schema
/// and the output format to plain text.
pub struct ToolSpecBuilder {
    name: String,
    purpose: String,
    when_to_use: String,
    when_not_to_use: String,
    parameters: Option<serde_json::Value>,
    examples: Vec<UsageExample>,
    output_format: Option<String>,
    disambiguation: Vec<DisambiguationExample>,
}

impl ToolSpecBuilder {
    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn when_to_use(mut self, when: impl Into<String>) -> Self {
        self.when_to_use = when.into();
        self
    }

    pub fn when_not_to_use(mut self, when_not: impl Into<String>) -> Self {
        self.when_not_to_use = when_not.into();
        self
    }

    /// Derive JSON Schema parameters from a type implementing
    /// `schemars::JsonSchema`, so schema and deserialization cannot diverge.
    pub fn parameters_for<T: schemars::JsonSchema>(mut self) -> Self {
        self.parameters = Some(crate::json_schema_for::<T>());
        self
    }

    pub fn example(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.examples.push(UsageExample {
            input: input.into(),
            output: output.into(),
        });
        self
    }

    pub fn output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = Some(format.into());
        self
    }

    pub fn disambiguate(
        mut self,
        scenario: impl Into<String>,
        correct_tool: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        self.disambiguation.push(DisambiguationExample {
            scenario: scenario.into(),
            correct_tool: correct_tool.into(),
            reason: reason.into(),
        });
        self
    }

    /// Shortcut for `.build().to_tool_def()`.
    pub fn to_tool_def(self) -> ToolDef {
        self.build().to_tool_def()
    }

    pub fn build(self) -> ToolSpec {
        ToolSpec {
            name: self.name,
            purpose: self.purpose,
            when_to_use: self.when_to_use,
            when_not_to_use: self.when_not_to_use,
            parameters: self
                .parameters
                .unwrap_or_else(|| serde_json::json!({"type": "object", "properties": {}})),
            examples: self.examples,
            output_format: self.output_format.unwrap_or_else(|| "Plain text".into()),
            disambiguation: self.disambiguation,
        }
    }
}
