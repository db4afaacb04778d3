//! CLI entry point for biogate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `biogate-app` crate.

mod logging;

use anyhow::Context;
use biogate_app::{
    DecideInput, ExplainOutput, parse_report_json, render_markdown, render_summary, run_decide,
    run_explain, run_simple, runtime_error_report, serialize_report, to_renderable,
    verdict_exit_code,
};
use biogate_settings::Overrides;
use biogate_types::AuthReport;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use logging::LogFormat;

#[derive(Parser, Debug)]
#[command(
    name = "biogate",
    version,
    about = "Multi-factor biometric authentication decisions"
)]
struct Cli {
    /// Path to biogate config TOML (missing file means defaults).
    #[arg(long, default_value = "biogate.toml", global = true)]
    config: Utf8PathBuf,

    /// Override profile (standard|strict|lenient).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override acceptance policy (require_all|require_biometric|any_factor).
    #[arg(long, global = true)]
    policy: Option<String>,

    /// Override the face similarity threshold (0.0..=1.0).
    #[arg(long, global = true)]
    face_threshold: Option<f64>,

    /// Override the fingerprint match threshold (0.0..=1.0).
    #[arg(long, global = true)]
    fingerprint_threshold: Option<f64>,

    /// Log output format.
    #[arg(long, value_enum, default_value = "human", global = true)]
    log_format: LogFormat,

    /// Log level filter when RUST_LOG is unset (e.g. "info", "debug,biogate_app=trace").
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Authenticate a recorded attempt and write the report.
    Decide {
        /// Path to the recorded attempt JSON.
        #[arg(long)]
        attempt: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/biogate/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/biogate/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Apply the fixed rule (both biometrics, or the password) and print true/false.
    Simple {
        /// Path to the recorded attempt JSON.
        #[arg(long)]
        attempt: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/biogate/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Print a score summary (Match / No Match) from an existing JSON report.
    Summary {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/biogate/report.json")]
        report: Utf8PathBuf,
    },

    /// Explain an acceptance policy or verdict reason.
    Explain {
        /// The policy (e.g. "require_biometric") or reason (e.g. "liveness_rejected").
        identifier: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_format, &cli.log_level);

    match &cli.cmd {
        Commands::Decide {
            attempt,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_decide(&cli, attempt, report_out, *write_markdown, markdown_out).await,
        Commands::Simple { attempt } => cmd_simple(&cli, attempt).await,
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Summary { report } => cmd_summary(report),
        Commands::Explain { identifier } => cmd_explain(identifier),
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        policy: cli.policy.clone(),
        face_threshold: cli.face_threshold,
        fingerprint_threshold: cli.fingerprint_threshold,
    }
}

/// Missing config file is allowed (defaults apply).
fn read_config(path: &Utf8Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

async fn cmd_decide(
    cli: &Cli,
    attempt_path: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = async {
        let cfg_text = read_config(&cli.config);
        let attempt_text = std::fs::read_to_string(attempt_path)
            .with_context(|| format!("read attempt: {}", attempt_path))?;

        let output = run_decide(DecideInput {
            config_text: &cfg_text,
            overrides: overrides(cli),
            attempt_text: &attempt_text,
        })
        .await?;

        write_report_file(report_out, &output.report).context("write report json")?;

        if write_markdown {
            let renderable = to_renderable(&output.report);
            let md = render_markdown(&renderable);
            write_text_file(markdown_out, &md).context("write markdown")?;
        }

        anyhow::Ok(verdict_exit_code(output.report.verdict.status))
    }
    .await;

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report("unknown", &format!("{err:#}"));
            let _ = write_report_file(report_out, &report);
            eprintln!("biogate error: {err:#}");
            std::process::exit(1);
        }
    }
}

async fn cmd_simple(cli: &Cli, attempt_path: &Utf8Path) -> anyhow::Result<()> {
    let result = async {
        let cfg_text = read_config(&cli.config);
        let attempt_text = std::fs::read_to_string(attempt_path)
            .with_context(|| format!("read attempt: {}", attempt_path))?;
        run_simple(DecideInput {
            config_text: &cfg_text,
            overrides: overrides(cli),
            attempt_text: &attempt_text,
        })
        .await
    }
    .await;

    match result {
        Ok(authenticated) => {
            println!("{authenticated}");
            if !authenticated {
                std::process::exit(2);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("biogate error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &AuthReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn read_report(report_path: &Utf8Path) -> anyhow::Result<AuthReport> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    parse_report_json(&report_text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_summary(report_path: &Utf8Path) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    print!("{}", render_summary(&to_renderable(&report)));
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", biogate_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_policies,
            available_reasons,
        } => {
            eprint!(
                "{}",
                biogate_app::format_not_found(&identifier, available_policies, available_reasons)
            );
            std::process::exit(1);
        }
    }
}
