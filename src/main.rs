use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use oplprobe::fetchers::{Fetcher, HttpFetcher};
use oplprobe::{die, Probe, ProbeConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Finds federation meets that are not yet entered.
#[derive(Debug, Parser)]
#[command(name = "oplprobe")]
#[command(about = "Helpers for probing federation sites for unentered meets", long_about = None)]
struct Cli {
    /// Log progress to stderr (repeat for more detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch a page and write its body to stdout.
    Fetch {
        url: String,

        /// Fail if the request is redirected.
        #[arg(long)]
        strict: bool,
    },

    /// Read candidate meet URLs from stdin (newest first) and print the ones
    /// not recorded under FEDDIR.
    Diff {
        /// Prefix for every output line, usually the federation name.
        label: String,

        /// Directory tree holding the federation's entered meets.
        feddir: PathBuf,

        /// Only show the newest few meets.
        #[arg(long)]
        quick: bool,

        /// Candidates mentioning this site are never reported.
        #[arg(long)]
        canonical_site: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::builder()
        .filter_level(level)
        .filter_module("hyper", log::LevelFilter::Warn)
        .filter_module("reqwest", log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

fn read_candidates() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut candidates = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read candidate URLs from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            candidates.push(line.to_string());
        }
    }
    Ok(candidates)
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Fetch { url, strict } => {
            let fetcher = HttpFetcher::new(&ProbeConfig::default())?;
            let body = fetcher
                .fetch(&url, strict)
                .await
                .with_context(|| format!("failed to fetch {}", url))?;

            let mut out = io::stdout().lock();
            match out.write_all(&body).and_then(|_| out.flush()) {
                Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e.into()),
                _ => Ok(()),
            }
        }
        Command::Diff {
            label,
            feddir,
            quick,
            canonical_site,
        } => {
            let mut config = ProbeConfig::default().with_quick(quick);
            if let Some(site) = canonical_site {
                config = config.with_canonical_site(site);
            }

            let probe = Probe::new(label, &feddir, config);
            let candidates = read_candidates()?;

            probe
                .run(&candidates)
                .with_context(|| format!("failed to diff against {}", feddir.display()))?;
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        die(format!("oplprobe error: {:#}", err));
    }
}
