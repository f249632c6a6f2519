// crates/channel-probe-cli/src/main.rs
// ============================================================================
// Module: Channel Probe CLI Entry Point
// Description: Command dispatcher for suite runs, catalog listing, and prediction.
// Purpose: Probe a chat service create-channel endpoint from the command line.
// Dependencies: channel-probe-cli, clap, serde_jcs, thiserror, tokio, tracing-subscriber
// ============================================================================

//! ## Overview
//! `channel-probe run` executes the create-channel suite against a live host,
//! `channel-probe cases` lists the catalog, and `channel-probe predict` shows
//! what the contract model expects for an arbitrary request. Logs go to
//! stderr so stdout carries only command output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use channel_probe_cli::Case;
use channel_probe_cli::CaseGroup;
use channel_probe_cli::ProbeConfig;
use channel_probe_cli::ProbeOverrides;
use channel_probe_cli::Suite;
use channel_probe_cli::SuiteOptions;
use channel_probe_cli::create_channel_cases;
use channel_probe_client::ChannelApiClient;
use channel_probe_contract::CREATE_CHANNEL_PATH;
use channel_probe_contract::ExpectedOutcome;
use channel_probe_contract::ProbeRequest;
use channel_probe_contract::TokenState;
use channel_probe_contract::predict;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "channel-probe", version, disable_help_subcommand = true)]
struct Cli {
    /// Log output format written to stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the create-channel suite against a chat service host.
    Run(RunCommand),
    /// List the case catalog.
    Cases(CasesCommand),
    /// Print the predicted response for a create-channel request.
    Predict(PredictCommand),
}

/// Arguments for `run`.
#[derive(Args, Debug)]
struct RunCommand {
    /// Config file path (overrides `CHANNEL_PROBE_CONFIG`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Chat service base URL.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
    /// Mock-user prefix used for setup and teardown.
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,
    /// Only run cases whose name contains this text.
    #[arg(long, value_name = "TEXT")]
    filter: Option<String>,
    /// Only run cases in this group.
    #[arg(long, value_enum)]
    group: Option<GroupArg>,
    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Also write the canonical JSON report to this path.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

/// Arguments for `cases`.
#[derive(Args, Debug)]
struct CasesCommand {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Arguments for `predict`.
#[derive(Args, Debug)]
struct PredictCommand {
    /// JSON request body.
    #[arg(long, default_value = "{}")]
    body: String,
    /// How the server would classify the session header.
    #[arg(long, value_enum, default_value_t = TokenArg::Valid)]
    token: TokenArg,
    /// HTTP method.
    #[arg(long, default_value = "POST")]
    method: String,
    /// Request path.
    #[arg(long, default_value = CREATE_CHANNEL_PATH)]
    path: String,
}

/// Output formats for command results.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Canonical JSON.
    Json,
}

/// Tracing output formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    /// Human-readable log lines.
    Text,
    /// JSON log lines.
    Json,
}

/// Case group selector.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum GroupArg {
    /// Authentication and routing cases.
    Meta,
    /// Body validation cases.
    RequestParams,
    /// Success-path cases.
    BusinessLogic,
}

impl From<GroupArg> for CaseGroup {
    fn from(value: GroupArg) -> Self {
        match value {
            GroupArg::Meta => Self::Meta,
            GroupArg::RequestParams => Self::RequestParams,
            GroupArg::BusinessLogic => Self::BusinessLogic,
        }
    }
}

/// Session token classification selector.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum TokenArg {
    /// No or empty header.
    Missing,
    /// Unrecognized token.
    Invalid,
    /// Live session token.
    Valid,
}

impl From<TokenArg> for TokenState {
    fn from(value: TokenArg) -> Self {
        match value {
            TokenArg::Missing => Self::Missing,
            TokenArg::Invalid => Self::Invalid,
            TokenArg::Valid => Self::Valid,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`].
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.log_format)?;
    match cli.command {
        Commands::Run(command) => command_run(command).await,
        Commands::Cases(command) => command_cases(&command),
        Commands::Predict(command) => command_predict(&command),
    }
}

/// Installs the stderr tracing subscriber.
fn init_tracing(log_format: LogFormat) -> CliResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(env_filter).with_writer(std::io::stderr);
    let result = match log_format {
        LogFormat::Text => subscriber.try_init(),
        LogFormat::Json => subscriber.json().try_init(),
    };
    result.map_err(|err| CliError::new(format!("failed to init tracing: {err}")))
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes the `run` command.
async fn command_run(command: RunCommand) -> CliResult<ExitCode> {
    let overrides = ProbeOverrides {
        base_url: command.base_url,
        prefix: command.prefix,
        timeout_secs: command.timeout_secs,
    };
    let config = ProbeConfig::load(command.config.as_deref(), &overrides)
        .map_err(|err| CliError::new(err.to_string()))?;
    let client = ChannelApiClient::new(&config.client_config())
        .map_err(|err| CliError::new(err.to_string()))?;
    let options = SuiteOptions {
        mock_users: config.mock_users_request(),
        filter: command.filter,
        group: command.group.map(CaseGroup::from),
    };
    let suite = Suite::create_channel(options);
    if suite.selected().is_empty() {
        return Err(CliError::new("no cases match the given filters".to_string()));
    }

    let report = suite.run(&client).await;
    let canonical = report
        .to_canonical_json()
        .map_err(|err| CliError::new(format!("failed to serialize report: {err}")))?;
    if let Some(path) = &command.report {
        fs::write(path, &canonical).map_err(|err| {
            CliError::new(format!("failed to write report {}: {err}", path.display()))
        })?;
    }
    match command.format {
        OutputFormat::Text => write_stdout_line(&report.render_text())?,
        OutputFormat::Json => write_stdout_bytes_with_newline(&canonical)?,
    }
    Ok(if report.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Catalog entry as listed by `cases`.
#[derive(Debug, Serialize)]
struct CaseListing<'a> {
    /// Expected HTTP status.
    status: u16,
    /// Full case definition.
    #[serde(flatten)]
    case: &'a Case,
}

/// Executes the `cases` command.
fn command_cases(command: &CasesCommand) -> CliResult<ExitCode> {
    let cases = create_channel_cases();
    match command.format {
        OutputFormat::Text => {
            for case in &cases {
                write_stdout_line(&format!(
                    "{}\t{}\t{}\t{}",
                    case.group,
                    case.name,
                    case.method.as_str(),
                    case.expected.status()
                ))?;
            }
        }
        OutputFormat::Json => {
            let listing: Vec<CaseListing<'_>> = cases
                .iter()
                .map(|case| CaseListing {
                    status: case.expected.status(),
                    case,
                })
                .collect();
            write_canonical_json(&listing)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Prediction result as printed by `predict`.
#[derive(Debug, Serialize)]
struct PredictionOutput {
    /// Expected HTTP status.
    status: u16,
    /// Expected outcome.
    outcome: ExpectedOutcome,
}

/// Executes the `predict` command.
fn command_predict(command: &PredictCommand) -> CliResult<ExitCode> {
    let body: Value = serde_json::from_str(&command.body)
        .map_err(|err| CliError::new(format!("--body is not valid json: {err}")))?;
    let outcome = predict(&ProbeRequest {
        method: &command.method,
        path: &command.path,
        token: command.token.into(),
        body: &body,
    });
    write_canonical_json(&PredictionOutput {
        status: outcome.status(),
        outcome,
    })?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}").map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes raw bytes to stdout with a trailing newline.
fn write_stdout_bytes_with_newline(bytes: &[u8]) -> CliResult<()> {
    let mut buffer = bytes.to_vec();
    buffer.push(b'\n');
    std::io::stdout().write_all(&buffer).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes canonical JSON to stdout.
fn write_canonical_json<T: Serialize>(value: &T) -> CliResult<()> {
    let bytes = serde_jcs::to_vec(value)
        .map_err(|err| CliError::new(format!("failed to serialize output: {err}")))?;
    write_stdout_bytes_with_newline(&bytes)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
