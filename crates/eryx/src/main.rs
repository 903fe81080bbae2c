#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eryx::{
    analyzer::DependencyAnalyzer,
    config::Config,
    dirs,
    fetch::DirectoryFetcher,
};

#[derive(Debug, Parser)]
#[command(
    name = "eryx",
    version,
    about = "Extracts the source definitions behind the third-party calls a Python file makes"
)]
struct Cli {
    /// Python source file to analyze
    file: PathBuf,

    /// Root directory containing materialized package source trees
    #[arg(long, value_name = "DIR")]
    packages_dir: Option<PathBuf>,

    /// Additional module names to treat as non-external (repeatable)
    #[arg(long, value_name = "NAME")]
    ignore: Vec<String>,

    /// Explicit configuration file (defaults to ./eryx.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    config.ignore.extend(cli.ignore);
    if let Some(dir) = cli.packages_dir {
        config.packages_dir = Some(dir);
    }

    let packages_dir = match &config.packages_dir {
        Some(dir) => dir.clone(),
        None => dirs::default_packages_dir()?,
    };
    let fetcher = DirectoryFetcher::new(packages_dir);

    let analyzer = DependencyAnalyzer::new(config);
    let results = analyzer.analyze_file(&cli.file, &fetcher)?;

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
