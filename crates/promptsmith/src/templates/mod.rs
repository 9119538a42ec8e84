//! Domain template registry.
//!
//! A [`TemplateRegistry`] holds named fill-in-the-blank prompt templates.
//! Every template obeys one invariant: the set of `{placeholder}` names in
//! its body equals its declared `variables`. [`TemplateRegistry::insert`]
//! rejects templates that break it, so rendering with exactly the declared
//! variables always produces a body with no placeholders left.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use promptsmith::templates::{Template, TemplateRegistry};
//!
//! let mut registry = TemplateRegistry::new();
//! registry
//!     .insert(Template::new(
//!         "greeting",
//!         "Greeting",
//!         "communication",
//!         "Hello {name}, welcome to {team}.",
//!         ["name", "team"],
//!     ))
//!     .unwrap();
//!
//! let vars = HashMap::from([
//!     ("name".to_string(), "Ada".to_string()),
//!     ("team".to_string(), "platform".to_string()),
//! ]);
//! assert_eq!(
//!     registry.render("greeting", &vars).unwrap(),
//!     "Hello Ada, welcome to platform."
//! );
//! ```

pub mod catalog;
pub mod quick;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PromptError, Result};
use catalog::{CATALOG, CatalogEntry, CatalogGroup};

/// Characters of body shown in [`TemplateInfo::template_preview`].
pub const PREVIEW_CHARS: usize = 500;

/// Usage examples shown per entry in [`DomainEntry::description`].
const DOMAIN_EXAMPLES_SHOWN: usize = 2;

// ── Template ────────────────────────────────────────────────────────

/// A named prompt template with `{variable}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    /// Open domain tag such as `"development"` or `"legal"`.
    pub domain: String,
    pub body: String,
    /// Declared variables, in declaration order.
    pub variables: Vec<String>,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub best_practices: Vec<String>,
    #[serde(default)]
    pub usage_examples: Vec<String>,
}

impl Template {
    pub fn new<I, S>(
        id: impl Into<String>,
        name: impl Into<String>,
        domain: impl Into<String>,
        body: impl Into<String>,
        variables: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            domain: domain.into(),
            body: body.into(),
            variables: variables.into_iter().map(Into::into).collect(),
            example: String::new(),
            best_practices: Vec::new(),
            usage_examples: Vec::new(),
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    pub fn with_best_practices<I, S>(mut self, practices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.best_practices = practices.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_usage_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.usage_examples = examples.into_iter().map(Into::into).collect();
        self
    }

    fn from_entry(entry: &CatalogEntry) -> Self {
        // Template files end with a newline that is not part of the body.
        let body = entry.body.strip_suffix('\n').unwrap_or(entry.body);
        Template::new(
            entry.id,
            entry.name,
            entry.domain,
            body,
            entry.variables.iter().copied(),
        )
        .with_example(entry.example)
        .with_best_practices(entry.best_practices.iter().copied())
        .with_usage_examples(entry.usage_examples.iter().copied())
    }

    /// Check that body placeholders and declared variables are the same set.
    pub fn validate(&self) -> Result<()> {
        let placeholders: BTreeSet<String> = placeholders(&self.body).into_iter().collect();
        let declared: BTreeSet<String> = self.variables.iter().cloned().collect();

        let undeclared: Vec<String> = placeholders.difference(&declared).cloned().collect();
        let unused: Vec<String> = declared.difference(&placeholders).cloned().collect();
        if undeclared.is_empty() && unused.is_empty() {
            Ok(())
        } else {
            Err(PromptError::InvalidTemplate {
                id: self.id.clone(),
                undeclared,
                unused,
            })
        }
    }

    /// Substitute declared variables into the body.
    ///
    /// Fails with every missing declared variable at once, sorted. Extra
    /// entries in `values` are ignored.
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String> {
        let missing: BTreeSet<&String> = self
            .variables
            .iter()
            .filter(|v| !values.contains_key(*v))
            .collect();
        if !missing.is_empty() {
            return Err(PromptError::MissingVariables(
                missing.into_iter().cloned().collect(),
            ));
        }

        let mut rendered = self.body.clone();
        for var in &self.variables {
            if let Some(value) = values.get(var) {
                rendered = rendered.replace(&format!("{{{var}}}"), value);
            }
        }
        Ok(rendered)
    }

    fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            key: self.id.clone(),
            name: self.name.clone(),
            domain: self.domain.clone(),
            variables_count: self.variables.len(),
            examples: self.usage_examples.clone(),
            best_practices: self.best_practices.clone(),
        }
    }

    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            name: self.name.clone(),
            domain: self.domain.clone(),
            variables: self.variables.clone(),
            variables_count: self.variables.len(),
            example: self.example.clone(),
            examples: self.usage_examples.clone(),
            best_practices: self.best_practices.clone(),
            template_preview: preview(&self.body, PREVIEW_CHARS),
        }
    }

    fn matches(&self, query_lower: &str) -> bool {
        [&self.id, &self.name, &self.domain, &self.body]
            .iter()
            .any(|field| field.to_lowercase().contains(query_lower))
    }
}

/// Distinct `{name}` placeholders in order of first appearance.
///
/// A placeholder name is one or more ASCII alphanumerics or underscores.
/// Braces around anything else are literal text.
pub fn placeholders(body: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut rest = body;
    while let Some(open) = rest.find('{') {
        let after = rest.get(open + 1..).unwrap_or_default();
        let name_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let name = after.get(..name_len).unwrap_or_default();
        let closed = after.get(name_len..).is_some_and(|t| t.starts_with('}'));
        if !name.is_empty() && closed && !found.iter().any(|f| f == name) {
            found.push(name.to_string());
        }
        rest = after;
    }
    found
}

fn preview(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", body.get(..cut).unwrap_or(body)),
        None => body.to_string(),
    }
}

// ── Records ─────────────────────────────────────────────────────────

/// Search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub key: String,
    pub name: String,
    pub domain: String,
    pub variables_count: usize,
    pub examples: Vec<String>,
    pub best_practices: Vec<String>,
}

/// Detailed description of one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInfo {
    pub name: String,
    pub domain: String,
    pub variables: Vec<String>,
    pub variables_count: usize,
    pub example: String,
    pub examples: Vec<String>,
    pub best_practices: Vec<String>,
    /// Leading slice of the body, suffixed with `...` when truncated.
    pub template_preview: String,
}

/// One line of the by-domain listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub key: String,
    pub name: String,
    pub description: String,
}

// ── Registry ────────────────────────────────────────────────────────

/// Ordered, validated collection of templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
    index: HashMap<String, usize>,
}

impl TemplateRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in catalog.
    ///
    /// Catalog entries that fail validation are logged and skipped.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for entry in CATALOG {
            if let Err(e) = registry.insert(Template::from_entry(entry)) {
                warn!("Skipping built-in template: {e}");
            }
        }
        let professional = CATALOG
            .iter()
            .filter(|e| e.group == CatalogGroup::Professional)
            .count();
        debug!(
            "Loaded {} built-in templates ({professional} professional, {} use-case)",
            registry.len(),
            CATALOG.len() - professional
        );
        registry
    }

    /// Add a template after validating it. Re-inserting an id replaces the
    /// earlier template in place.
    pub fn insert(&mut self, template: Template) -> Result<()> {
        template.validate()?;
        match self.index.get(&template.id) {
            Some(&pos) => self.templates[pos] = template,
            None => {
                self.index.insert(template.id.clone(), self.templates.len());
                self.templates.push(template);
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.index.get(id).map(|&pos| &self.templates[pos])
    }

    /// Template ids in catalog order, optionally limited to one domain.
    pub fn list(&self, domain: Option<&str>) -> Vec<String> {
        self.templates
            .iter()
            .filter(|t| domain.is_none_or(|d| t.domain == d))
            .map(|t| t.id.clone())
            .collect()
    }

    /// Case-insensitive substring search over id, name, domain, and body.
    pub fn search(&self, query: &str) -> Vec<TemplateSummary> {
        let query_lower = query.to_lowercase();
        self.templates
            .iter()
            .filter(|t| t.matches(&query_lower))
            .map(Template::summary)
            .collect()
    }

    /// Render a template by id.
    pub fn render(&self, id: &str, values: &HashMap<String, String>) -> Result<String> {
        self.get(id)
            .ok_or_else(|| PromptError::TemplateNotFound(id.to_string()))?
            .render(values)
    }

    pub fn info(&self, id: &str) -> Option<TemplateInfo> {
        self.get(id).map(Template::info)
    }

    /// Templates grouped by domain.
    pub fn by_domain(&self) -> BTreeMap<String, Vec<DomainEntry>> {
        let mut grouped: BTreeMap<String, Vec<DomainEntry>> = BTreeMap::new();
        for t in &self.templates {
            let examples = if t.usage_examples.is_empty() {
                "N/A".to_string()
            } else {
                t.usage_examples
                    .iter()
                    .take(DOMAIN_EXAMPLES_SHOWN)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            grouped.entry(t.domain.clone()).or_default().push(DomainEntry {
                key: t.id.clone(),
                name: t.name.clone(),
                description: format!(
                    "Variables: {} | Examples: {examples}",
                    t.variables.len()
                ),
            });
        }
        grouped
    }

    /// Distinct domains, sorted.
    pub fn domains(&self) -> Vec<String> {
        self.templates
            .iter()
            .map(|t| t.domain.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }
}
