//! Error type shared by every promptsmith operation.
//!
//! All failures originate from caller input (an unknown strategy tag, a
//! missing template, an incomplete variable mapping). Nothing here is
//! transient, so nothing is retried: errors propagate straight to the tool
//! boundary, which renders them as `"Error: ..."` strings.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PromptError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// A strategy tag outside the supported set was requested.
    #[error("unknown strategy '{requested}'; valid strategies: {}", .valid.join(", "))]
    UnknownStrategy {
        requested: String,
        valid: Vec<String>,
    },

    /// No template is registered under the given id.
    #[error("template '{0}' not found")]
    TemplateNotFound(String),

    /// `render` was called without every declared variable. Holds the full
    /// missing set, sorted.
    #[error("missing required variables: {}", .0.join(", "))]
    MissingVariables(Vec<String>),

    /// A template whose body placeholders disagree with its declared
    /// variables was offered to the registry.
    #[error(
        "template '{id}' is inconsistent: undeclared placeholders [{}], unused variables [{}]",
        .undeclared.join(", "),
        .unused.join(", ")
    )]
    InvalidTemplate {
        id: String,
        undeclared: Vec<String>,
        unused: Vec<String>,
    },

    /// A quick-template use case outside the supported set was requested.
    #[error("unknown use case '{requested}'; valid use cases: {}", .valid.join(", "))]
    UnknownUseCase {
        requested: String,
        valid: Vec<String>,
    },

    /// The configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}
