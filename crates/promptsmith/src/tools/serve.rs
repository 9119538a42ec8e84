//! JSON-lines tool dispatch.
//!
//! Each input line is one request object:
//!
//! ```text
//! {"id": 1, "name": "analyze_prompt", "arguments": {"prompt": "fix this"}}
//! ```
//!
//! `arguments` may be an object or a JSON-encoded string of one. Each request
//! produces exactly one response line:
//!
//! ```text
//! {"id": 1, "name": "analyze_prompt", "result": "...", "is_error": false}
//! ```
//!
//! Malformed lines, including lines that are not UTF-8, get an error response
//! and the loop continues. Blank lines are skipped.

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use super::core::ToolSet;

#[derive(Debug, Clone, Deserialize)]
pub struct ToolRequest {
    /// Opaque correlation id echoed back in the response.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(alias = "tool")]
    pub name: String,
    #[serde(default = "empty_arguments")]
    pub arguments: serde_json::Value,
}

fn empty_arguments() -> serde_json::Value {
    serde_json::json!({})
}

impl ToolRequest {
    /// Arguments as the raw JSON string a [`Tool`](super::Tool) expects.
    pub fn arguments_json(&self) -> String {
        match &self.arguments {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    pub name: String,
    pub result: String,
    pub is_error: bool,
}

/// Counters reported when the input stream ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeStats {
    pub requests: u64,
    pub errors: u64,
    pub malformed: u64,
}

fn malformed(message: String) -> ToolResponse {
    warn!("Malformed request line: {message}");
    ToolResponse {
        id: None,
        name: String::new(),
        result: format!("Error: malformed request: {message}"),
        is_error: true,
    }
}

/// Dispatch one parsed request.
pub async fn handle_request(tools: &ToolSet, request: ToolRequest) -> ToolResponse {
    let result = tools.execute(&request.name, &request.arguments_json()).await;
    ToolResponse {
        is_error: result.starts_with("Error:"),
        id: request.id,
        name: request.name,
        result,
    }
}

/// Read requests from `reader` until EOF, writing one response line each.
pub async fn serve<R, W>(tools: &ToolSet, mut reader: R, mut writer: W) -> std::io::Result<ServeStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = ServeStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(text) => Ok(text.trim()),
            Err(e) => Err(format!("line is not valid UTF-8: {e}")),
        };
        if matches!(line, Ok("")) {
            continue;
        }
        stats.requests += 1;

        let response = match line
            .and_then(|l| serde_json::from_str::<ToolRequest>(l).map_err(|e| e.to_string()))
        {
            Ok(request) => handle_request(tools, request).await,
            Err(message) => {
                stats.malformed += 1;
                malformed(message)
            }
        };
        if response.is_error {
            stats.errors += 1;
        }

        let encoded = serde_json::to_string(&response).map_err(std::io::Error::other)?;
        writer.write_all(encoded.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    debug!(
        "Input closed after {} requests ({} errors, {} malformed)",
        stats.requests, stats.errors, stats.malformed
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{FnTool, PromptToolsExt};
    use crate::{PromptOptimizer, ToolDef};
    use std::sync::Arc;

    fn responses(output: &[u8]) -> Vec<ToolResponse> {
        std::str::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn one_response_per_request_line() {
        let tools = ToolSet::new().with_prompt_tools(Arc::new(PromptOptimizer::new()));
        let mut input = concat!(
            r#"{"id": 1, "name": "analyze_prompt", "arguments": {"prompt": "fix this"}}"#,
            "\n\n",
            r#"{"id": "b", "tool": "list_domain_templates", "arguments": "{\"domain\":\"legal\"}"}"#,
            "\n",
            "not json\n",
            r#"{"name": "no_such_tool"}"#,
            "\n",
        )
        .as_bytes()
        .to_vec();
        input.extend_from_slice(b"\xff\xfe garbage\n");
        input.extend_from_slice(br#"{"id": 6, "name": "list_domain_templates"}"#);

        let mut output = Vec::new();
        let stats = serve(&tools, &input[..], &mut output).await.unwrap();

        assert_eq!(
            stats,
            ServeStats {
                requests: 6,
                errors: 3,
                malformed: 2
            }
        );
        let out = responses(&output);
        assert_eq!(out.len(), 6);
        assert_eq!(out[0].id, Some(serde_json::json!(1)));
        assert!(!out[0].is_error);
        assert!(out[0].result.contains("\"score\""));
        assert_eq!(out[1].name, "list_domain_templates");
        assert!(out[1].result.contains("client_contract_termination"));
        assert!(out[2].result.starts_with("Error: malformed request"));
        assert_eq!(out[3].result, "Error: unknown tool 'no_such_tool'");
        assert!(out[4].is_error);
        assert!(out[4].result.contains("not valid UTF-8"), "{}", out[4].result);
        assert_eq!(out[5].id, Some(serde_json::json!(6)));
        assert!(!out[5].is_error);
    }

    #[tokio::test]
    async fn missing_arguments_default_to_empty_object() {
        let tool = FnTool::new(
            ToolDef::new("ping", "Reply pong", serde_json::json!({"type": "object"})),
            |_: serde_json::Value| async { "pong".to_string() },
        );
        let tools = ToolSet::new().with(tool);
        let mut output = Vec::new();
        serve(&tools, &b"{\"name\":\"ping\"}\n"[..], &mut output)
            .await
            .unwrap();
        assert_eq!(responses(&output)[0].result, "pong");
    }
}
