use anyhow::Context;
use clap::Parser;
use git_alot::config::DEFAULT_GIT_PROGRAM;
use git_alot::{ScanConfig, Scanner, StatusFilter};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "git-alot",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Find git repositories with uncommitted changes or no remotes",
    long_about = "This command walks a directory tree looking for git working copies. \
    Every repository without remote-tracking refs is flagged, and every repository \
    whose `git status --porcelain` is not empty is listed with a count per status code.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        index = 1,
        env = "GIT_ALOT_ROOT",
        default_value = ".",
        help = "The directory to scan"
    )]
    root: PathBuf,
    #[arg(short, long, help = "Also report repositories with stashed changes")]
    stashes: bool,
    #[arg(long, help = "Print how many repositories are clean at the end")]
    summary: bool,
    #[arg(short, long, help = "Only count unstaged changes in the work tree")]
    worktree: bool,
    #[arg(short, long, help = "Only count changes staged in the index")]
    index: bool,
    #[arg(short, long, help = "Only count untracked files")]
    untracked: bool,
    #[arg(
        short,
        long,
        env = "GIT_ALOT_TIMEOUT",
        value_name = "SECS",
        help = "Give up when a single `git status` takes longer than this"
    )]
    timeout: Option<u64>,
    #[arg(
        long = "git",
        env = "GIT_ALOT_GIT",
        default_value = DEFAULT_GIT_PROGRAM,
        help = "The git executable to run"
    )]
    git_program: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (warnings by default).
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ScanConfig::new(cli.root)
        .with_stashes(cli.stashes)
        .with_summary(cli.summary)
        .with_filter(StatusFilter::new(cli.worktree, cli.index, cli.untracked))
        .with_timeout(cli.timeout.map(Duration::from_secs))
        .with_git_program(cli.git_program)
        .with_colorize(std::io::stdout().is_terminal());

    let scanner = Scanner::from_config(config, Box::new(std::io::stdout()));

    scanner
        .report()
        .await
        .with_context(|| format!("Scan of {} aborted", scanner.config().root().display()))?;

    Ok(())
}
