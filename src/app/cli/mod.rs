//! CLI Adapter.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap::builder::NonEmptyStringValueParser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, RunOutcome};
use crate::app::config::{DEFAULT_GITLAB_PREFIX, RunSettings};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "nsgen")]
#[command(version)]
#[command(
    about = "Render Kubernetes namespace overlays for a GitOps repository",
    long_about = "Reads the onboarding request from environment variables (ACTION, OPENVIRONMENT, \
                  REGION, CLUSTERNAME, SWCI, SUFFIX, ...) and renders or removes the matching \
                  overlay under environment/."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Repository root containing environment/ and kustomize/overlay/
    #[arg(long, env = "NSGEN_ROOT", default_value = ".", global = true)]
    root: PathBuf,

    /// Repository host prefix selecting the git-repo overlay variants
    #[arg(
        long,
        env = "NSGEN_GITLAB_PREFIX",
        default_value = DEFAULT_GITLAB_PREFIX,
        value_parser = NonEmptyStringValueParser::new()
    )]
    gitlab_prefix: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the starter overlay templates into kustomize/overlay/
    #[clap(visible_alias = "i")]
    Init,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "nsgen=info".into()))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || dispatch(cli));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let result = match cli.command {
        Some(Commands::Init) => run_init(cli),
        None => run_action(cli),
    };
    if let Err(e) = &result {
        error!(error = %e, "Run failed");
    }
    result
}

fn run_init(cli: Cli) -> Result<(), AppError> {
    let written = api::init_templates(&cli.root)?;
    println!("✅ Installed {} starter templates into kustomize/overlay/", written.len());
    Ok(())
}

fn run_action(cli: Cli) -> Result<(), AppError> {
    let settings = RunSettings::with_gitlab_prefix(cli.gitlab_prefix);
    let outcome = api::run(&cli.root, settings)?;

    match &outcome {
        RunOutcome::Applied { action, outcome: applied } => {
            println!(
                "✅ {} {} overlay at {}/ ({} auxiliary files)",
                capitalized(action.as_str()),
                applied.primary,
                outcome.display_path(),
                applied.rendered.len()
            );
        }
        RunOutcome::Removed(removed) => {
            println!(
                "✅ Replaced overlay at {}/ with delete kustomization ({} files removed)",
                outcome.display_path(),
                removed.removed.len()
            );
        }
    }
    info!("Run completed successfully");
    Ok(())
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
