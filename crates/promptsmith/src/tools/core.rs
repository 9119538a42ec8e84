//! Tool abstraction for function-calling clients.
//!
//! The [`Tool`] trait defines the interface that every tool must implement:
//! a static definition (name, description, JSON schema) and an async
//! `execute` method. Tools are collected into a [`ToolSet`] which handles
//! dispatch, argument validation, result memoization, and size limits.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use tracing::{debug, info, trace, warn};

use super::cache::ToolResultCache;
use crate::ToolDef;

/// Default number of memoized tool results.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Boxed future returned by [`Tool::execute`].
pub type ToolFuture<'a> = Pin<Box<dyn Future<Output = String> + Send + 'a>>;

// ── Tool trait ─────────────────────────────────────────────────────

/// A named operation callable with JSON arguments.
///
/// Implementors provide a static [`Tool::definition`] describing the tool's
/// name, description, and JSON Schema parameters, and an async
/// [`Tool::execute`] that receives the raw JSON arguments string and returns
/// a result string.
pub trait Tool: Send + Sync {
    /// The tool definition exported to callers.
    fn definition(&self) -> ToolDef;

    /// Execute the tool with the given raw JSON arguments string.
    ///
    /// Errors are returned as `"Error: ..."` strings rather than panicking.
    /// Uses a boxed future so that the trait stays dyn-compatible.
    fn execute(&self, arguments: &str) -> ToolFuture<'_>;

    /// The tool's name (delegates to definition).
    fn name(&self) -> String {
        self.definition().function.name.clone()
    }

    /// Whether results can be memoized per arguments string. Defaults to
    /// `false`.
    fn cacheable(&self) -> bool {
        false
    }
}

// ── ToolSet ────────────────────────────────────────────────────────

/// A collection of tools that can be dispatched by name.
///
/// # Example
///
/// ```ignore
/// let tools = ToolSet::new()
///     .with_max_result_bytes(Some(64_000))
///     .with_arg_validation(true)
///     .with_cache_capacity(128)
///     .with_prompt_tools(optimizer);
///
/// let report = tools.execute("analyze_prompt", r#"{"prompt":"fix this"}"#).await;
/// ```
pub struct ToolSet {
    tools: HashMap<String, Box<dyn Tool>>,
    /// `None` means results of any size are returned.
    max_result_bytes: Option<usize>,
    /// Whether to validate tool arguments against JSON Schema before execution.
    validate_args: bool,
    /// Tool names whose results are cacheable (populated from `Tool::cacheable()`).
    cacheable_tools: HashSet<String>,
    /// `None` when caching is disabled.
    cache: Option<Mutex<ToolResultCache>>,
}

impl fmt::Debug for ToolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolSet")
            .field("tools", &self.names())
            .field("max_result_bytes", &self.max_result_bytes)
            .field("validate_args", &self.validate_args)
            .field("cache", &self.cache.is_some())
            .finish()
    }
}

impl ToolSet {
    /// Create an empty tool set with no validation and no cache.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            max_result_bytes: None,
            validate_args: false,
            cacheable_tools: HashSet::new(),
            cache: None,
        }
    }

    /// Reject results larger than `max` bytes with an `"Error: ..."` string.
    /// Results are never cut short, so JSON records stay parseable.
    pub fn with_max_result_bytes(mut self, max: Option<usize>) -> Self {
        self.max_result_bytes = max;
        self
    }

    /// Enable JSON Schema argument validation before tool execution.
    pub fn with_arg_validation(mut self, enabled: bool) -> Self {
        self.validate_args = enabled;
        self
    }

    /// Memoize up to `capacity` results of cacheable tools. `0` disables
    /// the cache.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = (capacity > 0).then(|| Mutex::new(ToolResultCache::new(capacity)));
        self
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        let name = tool.name();
        if tool.cacheable() {
            self.cacheable_tools.insert(name.clone());
        } else {
            self.cacheable_tools.remove(&name);
        }
        self.tools.insert(name, Box::new(tool));
    }

    /// Register a tool (builder pattern).
    pub fn with(mut self, tool: impl Tool + 'static) -> Self {
        self.register(tool);
        self
    }

    /// All tool definitions, sorted by name.
    pub fn definitions(&self) -> Vec<ToolDef> {
        let mut defs: Vec<ToolDef> = self.tools.values().map(|t| t.definition()).collect();
        defs.sort_by(|a, b| a.function.name.cmp(&b.function.name));
        defs
    }

    /// Registered tool names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn max_result_bytes(&self) -> Option<usize> {
        self.max_result_bytes
    }

    pub fn validates_args(&self) -> bool {
        self.validate_args
    }

    /// Whether a tool's results are memoized.
    pub fn is_cacheable(&self, tool_name: &str) -> bool {
        self.cache.is_some() && self.cacheable_tools.contains(tool_name)
    }

    /// `(hits, misses)` of the result cache, or `None` when disabled.
    pub fn cache_stats(&self) -> Option<(u64, u64)> {
        let cache = self.cache.as_ref()?;
        match cache.lock() {
            Ok(c) => Some((c.hits(), c.misses())),
            Err(poisoned) => {
                let c = poisoned.into_inner();
                Some((c.hits(), c.misses()))
            }
        }
    }

    /// Execute a tool call by name, with optional validation, memoization,
    /// timing, and a result size limit.
    ///
    /// Returns the complete result string, or an `"Error: ..."` string if the
    /// tool is unknown, the arguments fail validation, or the result is over
    /// the size limit.
    pub async fn execute(&self, name: &str, arguments: &str) -> String {
        let tool = match self.tools.get(name) {
            Some(t) => t,
            None => return format!("Error: unknown tool '{name}'"),
        };

        if self.validate_args
            && let Some(error) = validate_tool_arguments(tool.as_ref(), arguments)
        {
            return error;
        }

        log_tool_call(name, arguments);

        let cacheable = self.is_cacheable(name);
        if cacheable && let Some(hit) = self.cached(name, arguments) {
            debug!("Tool {name} served from cache ({} bytes)", hit.len());
            return hit;
        }

        let start = std::time::Instant::now();
        let result = tool.execute(arguments).await;
        let elapsed = start.elapsed();
        debug!(
            "Tool {name} completed in {:.2}ms ({} bytes)",
            elapsed.as_secs_f64() * 1000.0,
            result.len()
        );
        trace!(
            "Tool {name} result preview: {}",
            result.chars().take(300).collect::<String>()
        );

        let result = enforce_result_limit(name, result, self.max_result_bytes);
        if cacheable && !result.starts_with("Error:") {
            self.store(name, arguments, &result);
        }
        result
    }

    fn cached(&self, name: &str, arguments: &str) -> Option<String> {
        let mut cache = self.cache.as_ref()?.lock().ok()?;
        cache.get(name, arguments).map(str::to_string)
    }

    fn store(&self, name: &str, arguments: &str, result: &str) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };
        match cache.lock() {
            Ok(mut c) => c.put(name, arguments, result.to_string()),
            Err(_) => warn!("Tool result cache lock poisoned; skipping store for {name}"),
        }
    }
}

impl Default for ToolSet {
    fn default() -> Self {
        Self::new()
    }
}

// ── FnTool ────────────────────────────────────────────────────────

/// Type-erased async handler for [`FnTool`].
type ErasedToolHandler =
    Box<dyn Fn(String) -> Pin<Box<dyn Future<Output = String> + Send>> + Send + Sync>;

/// A closure-based tool that auto-parses arguments and delegates to a handler.
///
/// The generic constructor performs type erasure so `FnTool` is a concrete,
/// dyn-compatible type.
///
/// # Example
///
/// ```
/// use promptsmith::tools::{FnTool, Tool};
/// use promptsmith::{ToolDef, json_schema_for};
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, JsonSchema)]
/// struct EchoArgs {
///     /// Text to echo back.
///     text: String,
/// }
///
/// let tool = FnTool::new(
///     ToolDef::new("echo", "Echo the input", json_schema_for::<EchoArgs>()),
///     |args: EchoArgs| async move { args.text },
/// );
/// assert_eq!(tool.name(), "echo");
/// ```
pub struct FnTool {
    def: ToolDef,
    handler: ErasedToolHandler,
    cacheable: bool,
}

impl FnTool {
    /// Create a new closure-based tool.
    ///
    /// The handler receives parsed arguments of type `A` (deserialized from
    /// the raw JSON string) and returns a future producing the result string.
    /// Parse errors are formatted as `"Error: ..."` strings.
    pub fn new<A, F, Fut>(def: ToolDef, handler: F) -> Self
    where
        A: serde::de::DeserializeOwned + Send + 'static,
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = String> + Send + 'static,
    {
        let erased = move |raw: String| -> Pin<Box<dyn Future<Output = String> + Send>> {
            let args: A = match parse_tool_args(&raw) {
                Ok(a) => a,
                Err(e) => return Box::pin(async move { e }),
            };
            Box::pin(handler(args))
        };

        Self {
            def,
            handler: Box::new(erased),
            cacheable: false,
        }
    }

    /// Mark results as memoizable (builder pattern).
    pub fn cacheable(mut self, cacheable: bool) -> Self {
        self.cacheable = cacheable;
        self
    }
}

impl Tool for FnTool {
    fn definition(&self) -> ToolDef {
        self.def.clone()
    }

    fn execute(&self, arguments: &str) -> ToolFuture<'_> {
        (self.handler)(arguments.to_string())
    }

    fn cacheable(&self) -> bool {
        self.cacheable
    }
}

impl fmt::Debug for FnTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTool")
            .field("name", &self.def.function.name)
            .field("cacheable", &self.cacheable)
            .finish()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// Validate tool arguments against the tool's declared JSON Schema.
///
/// Returns `None` if valid, or `Some(error_string)` listing every violation.
pub fn validate_tool_arguments(tool: &dyn Tool, arguments: &str) -> Option<String> {
    let args_value: serde_json::Value = match serde_json::from_str(arguments) {
        Ok(v) => v,
        Err(e) => {
            return Some(format!(
                "Error: invalid JSON arguments for tool '{}': {e}",
                tool.name()
            ));
        }
    };

    let schema = tool.definition().function.parameters;

    let validator = match jsonschema::validator_for(&schema) {
        Ok(v) => v,
        Err(e) => {
            warn!("Skipping argument validation for '{}': bad schema: {e}", tool.name());
            return None;
        }
    };

    let errors: Vec<String> = validator
        .iter_errors(&args_value)
        .map(|e| format!("  - {}: {e}", e.instance_path()))
        .collect();

    if errors.is_empty() {
        None
    } else {
        Some(format!(
            "Error: argument validation failed for tool '{}':\n{}",
            tool.name(),
            errors.join("\n")
        ))
    }
}

/// Log a tool call at INFO level with a truncated preview of arguments.
pub fn log_tool_call(name: &str, arguments: &str) {
    let args_preview: String = arguments.chars().take(120).collect();
    info!(
        "[tool] {}({args_preview}{})",
        name,
        if arguments.chars().count() > 120 { "..." } else { "" }
    );
    trace!("[tool] {name} arguments: {arguments}");
}

/// Replace a result longer than `max` bytes with an error string.
///
/// A partial JSON record or half-rendered template is worse than no result,
/// so oversize output is dropped whole rather than cut.
pub fn enforce_result_limit(name: &str, result: String, max: Option<usize>) -> String {
    match max {
        Some(max) if result.len() > max => {
            warn!(
                "Tool {name} produced {} bytes, over the {max} byte limit",
                result.len()
            );
            format!(
                "Error: result from tool '{name}' is {} bytes, over the {max} byte limit",
                result.len()
            )
        }
        _ => result,
    }
}

/// Parse raw JSON arguments into a typed struct.
///
/// Returns a formatted error string suitable for returning directly from
/// [`Tool::execute`].
pub fn parse_tool_args<T: serde::de::DeserializeOwned>(arguments: &str) -> Result<T, String> {
    serde_json::from_str(arguments).map_err(|e| format!("Error: invalid tool arguments: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct EchoTool;

    impl Tool for EchoTool {
        fn definition(&self) -> ToolDef {
            ToolDef::new(
                "echo",
                "Echo the input",
                serde_json::json!({
                    "type": "object",
                    "properties": { "text": { "type": "string" } },
                    "required": ["text"]
                }),
            )
        }

        fn execute(&self, arguments: &str) -> ToolFuture<'_> {
            let args: serde_json::Value = serde_json::from_str(arguments).unwrap_or_default();
            let result = args
                .get("text")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| "Error: no text".into());
            Box::pin(async move { result })
        }
    }

    /// Counts executions so cache hits are observable.
    struct CountingTool {
        calls: Arc<AtomicUsize>,
    }

    impl Tool for CountingTool {
        fn definition(&self) -> ToolDef {
            ToolDef::new("count", "Counts calls", serde_json::json!({"type": "object"}))
        }

        fn execute(&self, _arguments: &str) -> ToolFuture<'_> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Box::pin(async move { format!("call {n}") })
        }

        fn cacheable(&self) -> bool {
            true
        }
    }

    #[test]
    fn tool_name_from_definition() {
        assert_eq!(EchoTool.name(), "echo");
    }

    #[test]
    fn definitions_are_sorted_by_name() {
        let calls = Arc::new(AtomicUsize::new(0));
        let set = ToolSet::new().with(EchoTool).with(CountingTool { calls });
        let names: Vec<String> = set
            .definitions()
            .iter()
            .map(|d| d.function.name.clone())
            .collect();
        assert_eq!(names, vec!["count", "echo"]);
        assert_eq!(set.names(), names);
    }

    #[tokio::test]
    async fn execute_known_tool() {
        let set = ToolSet::new().with(EchoTool);
        assert_eq!(set.execute("echo", r#"{"text": "hello"}"#).await, "hello");
    }

    #[tokio::test]
    async fn execute_unknown_tool() {
        let set = ToolSet::new().with(EchoTool);
        let result = set.execute("nonexistent", "{}").await;
        assert_eq!(result, "Error: unknown tool 'nonexistent'");
    }

    #[tokio::test]
    async fn validation_rejects_missing_required_field() {
        let set = ToolSet::new().with_arg_validation(true).with(EchoTool);
        let result = set.execute("echo", r#"{"other": 1}"#).await;
        assert!(result.starts_with("Error: argument validation failed for tool 'echo'"));

        let result = set.execute("echo", "not json").await;
        assert!(result.starts_with("Error: invalid JSON arguments"));
    }

    #[tokio::test]
    async fn cacheable_results_are_memoized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let set = ToolSet::new()
            .with_cache_capacity(8)
            .with(CountingTool { calls: calls.clone() });

        assert_eq!(set.execute("count", "{}").await, "call 1");
        assert_eq!(set.execute("count", "{}").await, "call 1");
        assert_eq!(set.execute("count", r#"{"x":1}"#).await, "call 2");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(set.cache_stats(), Some((1, 2)));
    }

    #[tokio::test]
    async fn disabled_cache_always_executes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let set = ToolSet::new()
            .with_cache_capacity(0)
            .with(CountingTool { calls: calls.clone() });

        set.execute("count", "{}").await;
        set.execute("count", "{}").await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!set.is_cacheable("count"));
        assert_eq!(set.cache_stats(), None);
    }

    #[tokio::test]
    async fn oversize_results_become_uncached_errors() {
        struct BigTool;
        impl Tool for BigTool {
            fn definition(&self) -> ToolDef {
                ToolDef::new("big", "Returns a big result", serde_json::json!({"type": "object"}))
            }
            fn execute(&self, _arguments: &str) -> ToolFuture<'_> {
                Box::pin(async { "a".repeat(200) })
            }
            fn cacheable(&self) -> bool {
                true
            }
        }

        let set = ToolSet::new()
            .with_max_result_bytes(Some(50))
            .with_cache_capacity(8)
            .with(BigTool);
        let result = set.execute("big", "{}").await;
        assert_eq!(
            result,
            "Error: result from tool 'big' is 200 bytes, over the 50 byte limit"
        );
        set.execute("big", "{}").await;
        assert_eq!(set.cache_stats(), Some((0, 2)));

        let unlimited = ToolSet::new().with(BigTool);
        assert_eq!(unlimited.execute("big", "{}").await.len(), 200);
    }

    #[tokio::test]
    async fn fn_tool_reports_parse_errors() {
        #[derive(serde::Deserialize)]
        struct Args {
            n: u32,
        }
        let tool = FnTool::new(
            ToolDef::new("double", "Double n", serde_json::json!({"type": "object"})),
            |args: Args| async move { (args.n * 2).to_string() },
        );
        assert_eq!(tool.execute(r#"{"n": 21}"#).await, "42");
        assert!(tool.execute(r#"{"n": "x"}"#).await.starts_with("Error: invalid tool arguments"));
    }

    #[test]
    fn result_limit_is_inclusive() {
        assert_eq!(enforce_result_limit("t", "hello".into(), Some(5)), "hello");
        assert_eq!(enforce_result_limit("t", "hello".into(), None), "hello");
        // Counted in bytes: 'é' is two.
        assert!(enforce_result_limit("t", "ééé".into(), Some(5)).starts_with("Error: "));
    }
}
