use anyhow::{Context, Result};
use boolsearch::index::stats::show_stats;
use boolsearch::output::{color_choice, ColorMode};
use boolsearch::repl::{load_corpus, Session};
use boolsearch::utils::progress::corpus_spinner;
use boolsearch::utils::{get_config_path, AppConfig};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use termcolor::StandardStream;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "boolsearch")]
#[command(about = "Keyword search over a flat text corpus with +/- set operators")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Corpus file (when no subcommand is given)
    file: Option<PathBuf>,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    color: Option<ColorMode>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Index a corpus and answer queries
    Search {
        /// Corpus file
        file: PathBuf,

        /// Answer this query and exit instead of prompting
        #[arg(allow_hyphen_values = true)]
        query: Option<String>,
    },
    /// Show corpus statistics
    Stats {
        /// Corpus file
        file: PathBuf,

        /// Number of most widespread terms to list
        #[arg(short, long)]
        top: Option<usize>,
    },
    /// Show or initialize the configuration file
    Config {
        /// Write the current configuration (defaults if none) to disk
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Search { file, query }) => {
            let config = AppConfig::load_or_default();
            run_search(&file, query.as_deref(), &config, cli.color)?;
        }
        Some(Commands::Stats { file, top }) => {
            let config = AppConfig::load_or_default();
            show_stats(&file, top.unwrap_or(config.top_terms))?;
        }
        Some(Commands::Config { init }) => {
            let config = AppConfig::load()?;
            if init {
                let path = config.save()?;
                println!("Wrote config: {}", path.display());
            } else {
                println!("Config file: {}", get_config_path()?.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
        None => match cli.file {
            Some(file) => run_search(&file, None, &AppConfig::load_or_default(), cli.color)?,
            None => anyhow::bail!("No corpus file given. Run with --help for usage."),
        },
    }

    Ok(())
}

fn run_search(
    file: &Path,
    query: Option<&str>,
    config: &AppConfig,
    color: Option<ColorMode>,
) -> Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(color, config.color));

    let spinner = corpus_spinner("Reading corpus...");
    let loaded = load_corpus(file, &mut stdout);
    spinner.finish_and_clear();
    let (index, _) = loaded.context("Failed to write output")?;

    let session = Session::new(&index).with_prompt(config.prompt.clone());
    match query {
        Some(q) => {
            session.answer(q, &mut stdout)?;
        }
        None => {
            session.run(io::stdin().lock(), &mut stdout)?;
        }
    }

    stdout.flush()?;
    Ok(())
}
