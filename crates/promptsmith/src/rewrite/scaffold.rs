//! Builder for multi-section narrative scaffolds.
//!
//! Advanced strategies emit long markdown-ish documents made of bold-labelled
//! blocks. [`Scaffold`] assembles them block by block instead of through one
//! large format string, so each strategy reads as a list of its sections.
//!
//! Blocks are joined with blank lines. Empty content skips the block.
//!
//! ```
//! use promptsmith::rewrite::scaffold::Scaffold;
//!
//! let text = Scaffold::new("I'll work through this carefully.")
//!     .field("Task", "sort the list")
//!     .section("Approach", "1. Read\n2. Sort")
//!     .build();
//!
//! assert!(text.starts_with("I'll work through this carefully.\n\n**Task:** sort the list"));
//! assert!(text.contains("**Approach:**\n1. Read"));
//! ```

/// Ordered collection of scaffold blocks.
#[derive(Debug, Clone, Default)]
pub struct Scaffold {
    blocks: Vec<String>,
}

impl Scaffold {
    /// Start a scaffold with an opening paragraph (included as-is).
    pub fn new(opening: impl Into<String>) -> Self {
        Self {
            blocks: vec![opening.into()],
        }
    }

    /// Inline labelled value: `**Label:** value`.
    pub fn field(mut self, label: &str, value: impl AsRef<str>) -> Self {
        self.blocks.push(format!("**{label}:** {}", value.as_ref()));
        self
    }

    /// Labelled block with content on the following lines: `**Label:**\ncontent`.
    pub fn section(mut self, label: &str, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.blocks.push(format!("**{label}:**\n{content}"));
        }
        self
    }

    /// Heading without a trailing colon: `**Heading**\ncontent`.
    pub fn heading(mut self, heading: &str, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.blocks.push(format!("**{heading}**\n{content}"));
        }
        self
    }

    /// Append a raw paragraph without a label.
    pub fn raw(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.blocks.push(text);
        }
        self
    }

    pub fn build(self) -> String {
        self.blocks.join("\n\n")
    }
}

/// Render a bulleted list, one `- item` per line.
pub fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a numbered list starting at 1.
pub fn numbered<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sections_are_skipped() {
        let text = Scaffold::new("Opening")
            .section("Empty", "")
            .heading("Also empty", String::new())
            .raw("")
            .build();
        assert_eq!(text, "Opening");
    }

    #[test]
    fn blocks_join_with_blank_lines() {
        let text = Scaffold::new("A").field("B", "c").heading("D", "e").build();
        assert_eq!(text, "A\n\n**B:** c\n\n**D**\ne");
    }

    #[test]
    fn list_helpers() {
        assert_eq!(bullets(&["x", "y"]), "- x\n- y");
        assert_eq!(numbered(&["x", "y"]), "1. x\n2. y");
    }
}
