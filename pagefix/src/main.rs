//! Wrapper-tag repair for generated `page.tsx` files.
//!
//! Walks the app directory, collapses doubled `<LayoutWrapper>` openings and
//! turns the stray `</div>` after `</main>` back into `</LayoutWrapper>`.
//! Files are only rewritten when their content actually changes.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pagefix::exit_codes;
use pagefix::fix::run_fix;
use pagefix::io::config::{DEFAULT_CONFIG_FILE, load_config};
use pagefix::io::page_file::WriteMode;

#[derive(Parser)]
#[command(
    name = "pagefix",
    version,
    about = "Repair duplicated and mismatched wrapper tags in generated page files"
)]
struct Cli {
    /// Directory to search recursively (overrides `root` from the config file).
    root: Option<PathBuf>,

    /// TOML config file. A missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Report files that would change without writing them.
    #[arg(long)]
    check: bool,

    /// Log per-file and per-rule diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    pagefix::logging::init(cli.verbose);
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let mut config = load_config(&cli.config).context("load config")?;
    if let Some(root) = cli.root {
        config.root = root;
        config.validate()?;
    }
    let mode = if cli.check {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };

    let mut out = std::io::stdout().lock();
    let summary = run_fix(&config, mode, &mut out)?;
    out.flush().context("flush stdout")?;

    if mode == WriteMode::DryRun && summary.would_fix() > 0 {
        return Ok(exit_codes::PENDING);
    }
    Ok(exit_codes::OK)
}
