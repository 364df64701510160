//! CLI binary for docx-compliance.
//!
//! A thin shim over the library crate: `serve` runs the HTTP service,
//! `check` reviews one local file, `extract` prints the Markdown the model
//! would see.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use docx_compliance::server;
use docx_compliance::{extract_file, review_file, ServiceConfig};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Run the web service on the default address
  docx-compliance serve

  # Review a document from the terminal
  docx-compliance check contrato.docx --prompt "Verifica las cláusulas RGPD"

  # Same, as JSON ({resultado, prompt})
  docx-compliance check contrato.docx --prompt "..." --json

  # Show the extracted Markdown (no API key needed)
  docx-compliance extract contrato.docx

ENVIRONMENT VARIABLES:
  DEEPSEEK_API_KEY             Bearer token for the completion API
  DEEPSEEK_BASE_URL            Completion API base URL (default https://api.deepseek.com)
  DEEPSEEK_MODEL               Model ID (default deepseek-reasoner)
  DATABASE_URL                 Postgres URL used by the GET health probe
  DOCX_COMPLIANCE_ADDR         Listen address for `serve` (default 0.0.0.0:3000)
  DOCX_COMPLIANCE_TIMEOUT      Completion timeout in seconds (default: none)
  DOCX_COMPLIANCE_MAX_UPLOAD   Maximum request body in bytes
  RUST_LOG                     Overrides --verbose / --quiet

A `.env` file in the working directory is loaded first if present.
"#;

/// Review Word documents against a compliance instruction with an LLM.
#[derive(Parser, Debug)]
#[command(
    name = "docx-compliance",
    version,
    about = "Review .docx documents against a compliance instruction with an LLM",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    service: ServiceArgs,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, global = true, env = "DOCX_COMPLIANCE_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true, env = "DOCX_COMPLIANCE_QUIET")]
    quiet: bool,
}

#[derive(Args, Debug)]
struct ServiceArgs {
    /// Bearer token for the completion API.
    #[arg(long, global = true, env = "DEEPSEEK_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Completion API base URL.
    #[arg(long, global = true, env = "DEEPSEEK_BASE_URL")]
    base_url: Option<String>,

    /// Completion model ID.
    #[arg(long, global = true, env = "DEEPSEEK_MODEL")]
    model: Option<String>,

    /// Postgres connection URL for the health probe.
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Completion timeout in seconds; 0 disables it.
    #[arg(long, global = true, env = "DOCX_COMPLIANCE_TIMEOUT")]
    timeout: Option<u64>,

    /// Maximum accepted request body, in bytes.
    #[arg(long, global = true, env = "DOCX_COMPLIANCE_MAX_UPLOAD")]
    max_upload: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service (form at `/`, API at `/api/procesar`).
    Serve {
        /// Address to listen on.
        #[arg(long, env = "DOCX_COMPLIANCE_ADDR", default_value = "0.0.0.0:3000")]
        addr: SocketAddr,
    },
    /// Review a local .docx file and print the model's answer.
    Check {
        /// Path to the .docx file.
        file: PathBuf,

        /// Instruction placed before the document text.
        #[arg(short, long, default_value = "")]
        prompt: String,

        /// Print `{resultado, prompt}` as JSON instead of the bare answer.
        #[arg(long)]
        json: bool,
    },
    /// Print the Markdown extracted from a .docx file.
    Extract {
        /// Path to the .docx file.
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // `check` shows a spinner; keep library INFO lines from tearing it.
    let show_spinner = !cli.quiet && matches!(cli.command, Command::Check { json: false, .. });
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_spinner {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli.service)?;

    match cli.command {
        Command::Serve { addr } => {
            server::serve(&config, addr)
                .await
                .context("Server stopped with an error")?;
        }
        Command::Check { file, prompt, json } => {
            let spinner = show_spinner.then(|| review_spinner(&file));
            let start = Instant::now();

            let result = review_file(&file, &prompt, &config).await;
            if let Some(bar) = spinner {
                bar.finish_and_clear();
            }
            let output = result.with_context(|| format!("Review of {} failed", file.display()))?;

            if json {
                let json =
                    serde_json::to_string_pretty(&output).context("Failed to serialise output")?;
                println!("{json}");
            } else {
                write_stdout(&output.result)?;
                if !cli.quiet {
                    eprintln!(
                        "{} {}  {}",
                        green("✔"),
                        bold(&file.display().to_string()),
                        dim(&format!("{:.1}s", start.elapsed().as_secs_f64())),
                    );
                }
            }
        }
        Command::Extract { file } => {
            let markdown = extract_file(&file)
                .await
                .with_context(|| format!("Failed to extract {}", file.display()))?;
            write_stdout(&markdown)?;
        }
    }

    Ok(())
}

/// Map CLI args to `ServiceConfig`.
fn build_config(args: &ServiceArgs) -> Result<ServiceConfig> {
    let mut builder = ServiceConfig::builder().completion_timeout_secs(args.timeout);

    if let Some(ref key) = args.api_key {
        builder = builder.api_key(key.clone());
    }
    if let Some(ref url) = args.database_url {
        builder = builder.database_url(url.clone());
    }
    if let Some(ref url) = args.base_url {
        builder = builder.completion_base_url(url.clone());
    }
    if let Some(ref model) = args.model {
        builder = builder.model(model.clone());
    }
    if let Some(max) = args.max_upload {
        builder = builder.max_upload_bytes(max);
    }

    builder.build().context("Invalid configuration")
}

fn review_spinner(file: &std::path::Path) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}  {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
    );
    bar.set_prefix("Reviewing");
    bar.set_message(file.display().to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

fn write_stdout(text: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(text.as_bytes())
        .context("Failed to write to stdout")?;
    if !text.ends_with('\n') {
        handle.write_all(b"\n").ok();
    }
    Ok(())
}
