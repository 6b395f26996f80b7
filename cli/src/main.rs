use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use codexskills_core::{Config, GitFetcher, InstallOrchestrator, InstallRequest, Scope};
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

mod picker;
mod ui;

const AFTER_HELP: &str = "\
Examples:
  codexskills --user am-will/codex-skills/skills/openai-docs-skill
  codexskills --user am-will/codex-skills/skills
  codexskills --project am-will/codex-skills/skills ./my-repo
  codexskills --user https://github.com/am-will/codex-skills/skills

Notes:
  - <repo> is in the form owner/repo (GitHub). You can append a path inside the repo.
  - If no path is provided, the installer looks for a top-level \"skills/\" directory.
  - \"--project\" installs into <projectPath>/.codex/skills (defaults to CWD).
  - When multiple skills are found, you can interactively select which to install.";

#[derive(Parser, Debug)]
#[command(name = "codexskills")]
#[command(about = "codexskills - install Codex skills into user or project scope", long_about = None)]
#[command(override_usage = "codexskills --user <repo[/path]>\n       codexskills --project <repo[/path]> [projectPath]")]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Install into ~/.codex/skills
    #[arg(long, value_name = "SPEC", conflicts_with = "project")]
    user: Option<String>,

    /// Install into <projectPath>/.codex/skills
    #[arg(long, value_name = "SPEC")]
    project: Option<String>,

    /// Install every discovered skill without prompting
    #[arg(long)]
    all: bool,

    /// Log each step to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Config file (default: ~/.codexskills/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Trailing project path
    #[arg(value_name = "PROJECT_PATH", hide = true)]
    rest: Vec<String>,
}

impl Cli {
    /// `None` means the arguments do not form an install and usage should be shown.
    fn to_request(&self) -> Option<InstallRequest> {
        let (scope, spec) = match (&self.user, &self.project) {
            (Some(spec), _) => (Scope::User, spec.clone()),
            (None, Some(spec)) => (Scope::Project, spec.clone()),
            (None, None) => return None,
        };

        if self.rest.len() > 1 {
            return None;
        }

        Some(InstallRequest {
            scope,
            raw_spec: spec,
            project_path: self.rest.first().map(PathBuf::from),
            install_all: self.all,
        })
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn print_usage() {
    let _ = Cli::command().print_help();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if std::env::args_os().len() <= 1 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_tracing(cli.verbose);

    let Some(request) = cli.to_request() else {
        print_usage();
        return ExitCode::FAILURE;
    };

    match run(request, cli.config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

/// Styled against stderr's colour support, not stdout's.
fn error_line(err: &anyhow::Error) -> String {
    format!("{} {}", style("Error:").for_stderr().red().bold(), err)
}

async fn run(request: InstallRequest, config_path: Option<PathBuf>) -> Result<()> {
    let config = Config::load_or_default(config_path.as_deref())?;

    ui::print_banner();
    println!("{} Installing from: {}", style("→").cyan(), request.raw_spec);

    let fetcher = Arc::new(GitFetcher::new(config.clone_depth));
    let orchestrator =
        InstallOrchestrator::new(config, fetcher, Box::new(picker::TerminalSelector));

    let report = orchestrator.run(&request).await?;
    ui::print_report(&report);

    Ok(())
}
