//! Analyze, rewrite, and template prompts from the command line.
//!
//! Logging goes to stderr and is controlled by `PROMPTSMITH_LOG` (an
//! `EnvFilter` directive, default `warn`); `--verbose` forces `debug`.
//!
//! # Examples
//!
//! ```sh
//! # Score a prompt
//! promptsmith analyze "write something about AI"
//!
//! # Apply one basic strategy, or let the analyzer choose
//! promptsmith optimize --strategy few_shot "explain recursion"
//! echo "fix this" | promptsmith auto
//!
//! # Wrap a prompt in a reasoning scaffold
//! promptsmith advanced --strategy medprompt "triage these symptoms"
//!
//! # Templates
//! promptsmith templates search incident
//! promptsmith templates render crisis_communication --var crisis_situation="Outage" ...
//!
//! # Tool interface
//! promptsmith tools
//! promptsmith call analyze_prompt '{"prompt": "fix this"}'
//! promptsmith serve < requests.jsonl
//! ```

use std::collections::HashMap;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use promptsmith::config::ServerConfig;
use promptsmith::prelude::{AdvancedChoice, BasicStrategy, PromptError, PromptOptimizer, UseCase};
use promptsmith::tools::serve::serve;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "PROMPTSMITH_LOG";

/// Analyze, rewrite, and template prompts.
#[derive(Parser)]
#[command(name = "promptsmith", version)]
struct Cli {
    /// Tool-server settings file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of PROMPTSMITH_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    /// Reject tool results larger than this many bytes
    #[arg(long, global = true)]
    max_result_bytes: Option<usize>,

    /// Disable tool result memoization
    #[arg(long, global = true)]
    no_cache: bool,

    /// Skip JSON Schema validation of tool arguments
    #[arg(long, global = true)]
    no_validate: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a prompt and list its issues
    Analyze {
        /// Prompt text (read from stdin when omitted)
        prompt: Option<String>,
    },

    /// Rewrite a prompt with one basic strategy
    Optimize {
        /// Basic strategy, e.g. clarity or chain_of_thought
        #[arg(short, long)]
        strategy: BasicStrategy,
        /// Prompt text (read from stdin when omitted)
        prompt: Option<String>,
    },

    /// Rewrite a prompt with the strategy its analysis suggests
    Auto {
        /// Additional context about the use case
        #[arg(long)]
        context: Option<String>,
        /// Prompt text (read from stdin when omitted)
        prompt: Option<String>,
    },

    /// Wrap a prompt in an advanced reasoning scaffold
    Advanced {
        /// Advanced strategy, or "auto" to pick one from the prompt
        #[arg(short, long, default_value = "auto")]
        strategy: AdvancedChoice,
        /// Prompt text (read from stdin when omitted)
        prompt: Option<String>,
    },

    /// Browse and render domain templates
    Templates {
        #[command(subcommand)]
        action: TemplatesCommand,
    },

    /// Print a starter prompt for a use case
    Quick {
        /// code_generation, analysis, creative_writing, data_extraction, or tutoring
        use_case: UseCase,
    },

    /// Print every tool definition as JSON
    Tools,

    /// Dispatch one tool call and print its result
    Call {
        /// Tool name
        tool: String,
        /// JSON arguments
        #[arg(default_value = "{}")]
        arguments: String,
    },

    /// Serve tool calls as JSON lines over stdin/stdout
    Serve,
}

#[derive(Subcommand)]
enum TemplatesCommand {
    /// List template ids
    List {
        /// Only templates in this domain
        #[arg(long)]
        domain: Option<String>,
    },
    /// Show one template's details
    Show { id: String },
    /// Search templates by id, name, domain, or body
    Search { query: String },
    /// Render a template
    Render {
        id: String,
        /// Variable value as NAME=VALUE (repeatable)
        #[arg(long = "var", value_parser = parse_key_val)]
        vars: Vec<(String, String)>,
        /// JSON object file with variable values
        #[arg(long)]
        vars_file: Option<PathBuf>,
    },
    /// List templates grouped by domain
    Domains,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

/// Use the positional prompt, or read it from stdin.
fn read_prompt(prompt: Option<String>) -> Result<String, String> {
    if let Some(p) = prompt {
        return Ok(p);
    }
    if io::stdin().is_terminal() {
        return Err("provide a prompt argument or pipe one on stdin".to_string());
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {e}"))?;
    let trimmed = buf.trim_end_matches(['\n', '\r']);
    if trimmed.trim().is_empty() {
        return Err("stdin was empty".to_string());
    }
    Ok(trimmed.to_string())
}

fn load_config(cli: &Cli) -> Result<ServerConfig, String> {
    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => ServerConfig::default(),
    };
    if cli.compact {
        config = config.with_pretty_json(false);
    }
    if cli.no_cache {
        config = config.with_cache_capacity(0);
    }
    if cli.no_validate {
        config = config.with_arg_validation(false);
    }
    if let Some(max) = cli.max_result_bytes {
        config = config.with_max_result_bytes(Some(max));
    }
    Ok(config)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.map_err(|e| format!("failed to encode output: {e}"))
}

fn read_vars_file(path: &Path) -> Result<HashMap<String, String>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let raw: HashMap<String, serde_json::Value> = serde_json::from_str(&text)
        .map_err(|e| format!("invalid variables file {}: {e}", path.display()))?;
    Ok(raw
        .into_iter()
        .map(|(k, v)| match v {
            serde_json::Value::String(s) => (k, s),
            other => (k, other.to_string()),
        })
        .collect())
}

fn run_templates(
    optimizer: &PromptOptimizer,
    action: TemplatesCommand,
    pretty: bool,
) -> Result<String, String> {
    let registry = optimizer.templates();
    match action {
        TemplatesCommand::List { domain } => to_json(&registry.list(domain.as_deref()), pretty),
        TemplatesCommand::Show { id } => match registry.info(&id) {
            Some(info) => to_json(&info, pretty),
            None => Err(PromptError::TemplateNotFound(id).to_string()),
        },
        TemplatesCommand::Search { query } => to_json(&registry.search(&query), pretty),
        TemplatesCommand::Render {
            id,
            vars,
            vars_file,
        } => {
            let mut values = match &vars_file {
                Some(path) => read_vars_file(path)?,
                None => HashMap::new(),
            };
            values.extend(vars);
            optimizer
                .render_template(&id, &values)
                .map_err(|e| e.to_string())
        }
        TemplatesCommand::Domains => to_json(&registry.by_domain(), pretty),
    }
}

async fn run(cli: Cli) -> Result<String, String> {
    let config = load_config(&cli)?;
    let pretty = config.pretty_json;
    let optimizer = Arc::new(PromptOptimizer::new());

    match cli.command {
        Command::Analyze { prompt } => {
            let prompt = read_prompt(prompt)?;
            to_json(&optimizer.analyze(&prompt), pretty)
        }
        Command::Optimize { strategy, prompt } => {
            let prompt = read_prompt(prompt)?;
            to_json(&optimizer.optimize(&prompt, strategy), pretty)
        }
        Command::Auto { context, prompt } => {
            let prompt = read_prompt(prompt)?;
            to_json(&optimizer.auto_optimize(&prompt, context.as_deref()), pretty)
        }
        Command::Advanced { strategy, prompt } => {
            let prompt = read_prompt(prompt)?;
            to_json(&optimizer.advanced_optimize(&prompt, strategy), pretty)
        }
        Command::Templates { action } => run_templates(&optimizer, action, pretty),
        Command::Quick { use_case } => Ok(use_case.template().to_string()),
        Command::Tools => {
            let tools = config.build_tool_set(optimizer);
            to_json(&tools.definitions(), pretty)
        }
        Command::Call { tool, arguments } => {
            let tools = config.build_tool_set(optimizer);
            let result = tools.execute(&tool, &arguments).await;
            match result.strip_prefix("Error: ") {
                Some(message) => Err(message.to_string()),
                None => Ok(result),
            }
        }
        Command::Serve => {
            let tools = config.build_tool_set(optimizer);
            info!("Serving {} tools on stdin/stdout", tools.len());
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let stats = serve(&tools, stdin, tokio::io::stdout())
                .await
                .map_err(|e| format!("i/o failure while serving: {e}"))?;
            if let Some((hits, misses)) = tools.cache_stats() {
                debug!("Cache: {hits} hits, {misses} misses");
            }
            info!(
                "Served {} requests ({} errors)",
                stats.requests, stats.errors
            );
            Ok(String::new())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
