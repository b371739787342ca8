//! colorize - turn text into colored HTML using regex rules

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use colorize::config::Config;
use colorize::document::{load_colors, load_rules, read_file, render};
use colorize::{ColorTable, ColorizeError, Result, RuleSet, Scheme};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to be colorized
    #[arg(short, long)]
    file: PathBuf,

    /// File containing `TokenName: RegexPattern` rules
    #[arg(short, long, conflicts_with = "scheme")]
    rules: Option<PathBuf>,

    /// File containing `TokenName: Color` entries
    #[arg(short, long, conflicts_with = "scheme")]
    colors: Option<PathBuf>,

    /// TOML file with both rules and colors
    #[arg(short, long)]
    scheme: Option<PathBuf>,

    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not wrap output in <pre><code>
    #[arg(long)]
    no_wrap: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load();
    let (rules, colors) = load_sources(&cli, &config)?;

    let text = read_file(&cli.file)?;
    let wrap = config.wrap && !cli.no_wrap;
    let html = render(&text, &rules, &colors, wrap)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{html}\n"))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{html}"),
    }

    Ok(())
}

/// Pick rule and color sources, command line first, then config file
fn load_sources(cli: &Cli, config: &Config) -> Result<(RuleSet, ColorTable)> {
    if let Some(path) = &cli.scheme {
        return Scheme::load(path)?.into_parts();
    }

    let rules_path = cli.rules.as_ref().or(config.rules.as_ref());
    let colors_path = cli.colors.as_ref().or(config.colors.as_ref());

    if rules_path.is_none() && colors_path.is_none() {
        if let Some(path) = &config.scheme {
            return Scheme::load(path)?.into_parts();
        }
    }

    let rules = rules_path
        .map(|path| load_rules(path))
        .transpose()?
        .ok_or_else(|| ColorizeError::Message("no rules file given (use --rules or --scheme)".into()))?;
    let colors = colors_path
        .map(|path| load_colors(path))
        .transpose()?
        .ok_or_else(|| ColorizeError::Message("no colors file given (use --colors or --scheme)".into()))?;

    Ok((rules, colors))
}
