//! Check command implementation.
//!
//! Responsibilities:
//! - Report the resolved configuration and the auth mode that would be used.
//! - Optionally run a full bootstrap into a scratch environment and report
//!   which secret names it would set.
//!
//! Invariants:
//! - Output contains names, counts and identifiers only; never tokens,
//!   client secrets or secret values.

use anyhow::Result;
use infisical_bootstrap::{BootstrapOutcome, bootstrap, connect};
use infisical_config::{AuthStrategy, Config, ConfigLoader, MemoryEnv, load_dotenv};
use serde::Serialize;
use tracing::warn;

use crate::args::OutputFormat;

/// Configuration summary printed by `check`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub base_url: String,
    pub configuration: &'static str,
    pub auth: &'static str,
    pub project_id: Option<String>,
    pub environment: Option<String>,
    pub override_existing: bool,
    pub fail_fast: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch: Option<FetchReport>,
}

/// Result of `check --fetch`.
#[derive(Debug, Serialize)]
pub struct FetchReport {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub added: Vec<String>,
    pub overwritten: Vec<String>,
    pub kept: Vec<String>,
    pub rejected: Vec<String>,
}

impl CheckReport {
    fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            configuration: config.completeness().as_str(),
            auth: config
                .auth_strategy()
                .as_ref()
                .map(AuthStrategy::kind)
                .unwrap_or("none"),
            project_id: config.project_id.clone(),
            environment: config.environment.clone(),
            override_existing: config.override_existing,
            fail_fast: config.fail_fast,
            fetch: None,
        }
    }
}

impl FetchReport {
    fn from_outcome(outcome: BootstrapOutcome) -> Self {
        let empty = |status, reason| Self {
            status,
            reason,
            added: Vec::new(),
            overwritten: Vec::new(),
            kept: Vec::new(),
            rejected: Vec::new(),
        };
        match outcome {
            BootstrapOutcome::Loaded(report) => Self {
                status: "loaded",
                reason: None,
                added: report.added,
                overwritten: report.overwritten,
                kept: report.kept,
                rejected: report.rejected,
            },
            BootstrapOutcome::Skipped(reason) => {
                empty("skipped", Some(reason.as_str().to_string()))
            }
            BootstrapOutcome::Failed { reason } => empty("failed", Some(reason)),
        }
    }
}

pub async fn run(loader: ConfigLoader, fetch: bool, output: OutputFormat) -> Result<()> {
    let mut env = MemoryEnv::from_process();
    if let Err(e) = load_dotenv(loader.dotenv(), &mut env) {
        warn!(error = %e, "Failed to load .env file; continuing without it");
    }
    let config = loader.clone().resolve(&env)?;

    let mut report = CheckReport::from_config(&config);

    if fetch {
        // Start from the original environment so dotenv runs exactly once.
        let mut scratch = MemoryEnv::from_process();
        let outcome = bootstrap(loader, &mut scratch, connect).await?;
        report.fetch = Some(FetchReport::from_outcome(outcome));
    }

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", format_text(&report)),
    }

    Ok(())
}

fn format_text(report: &CheckReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Base URL:       {}\n", report.base_url));
    out.push_str(&format!("Configuration:  {}\n", report.configuration));
    out.push_str(&format!("Auth:           {}\n", report.auth));
    out.push_str(&format!(
        "Project ID:     {}\n",
        report.project_id.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!(
        "Environment:    {}\n",
        report.environment.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!("Override:       {}\n", report.override_existing));
    out.push_str(&format!("Fail fast:      {}\n", report.fail_fast));

    if let Some(fetch) = &report.fetch {
        out.push_str(&format!("Fetch:          {}", fetch.status));
        if let Some(reason) = &fetch.reason {
            out.push_str(&format!(" ({})", reason));
        }
        out.push('\n');
        let total = fetch.added.len()
            + fetch.overwritten.len()
            + fetch.kept.len()
            + fetch.rejected.len();
        out.push_str(&format!("Secrets:        {}\n", total));
        for (label, names) in [
            ("added", &fetch.added),
            ("overwritten", &fetch.overwritten),
            ("kept", &fetch.kept),
            ("rejected", &fetch.rejected),
        ] {
            for name in names {
                out.push_str(&format!("  {} ({})\n", name, label));
            }
        }
    }

    out
}
