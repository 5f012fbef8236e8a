//! Output formatting for query results and index summaries

use crate::index::types::{DocSet, IndexSummary};
use clap::ValueEnum;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

/// `--color` flag values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Resolve the CLI color flag against the config default
pub fn color_choice(flag: Option<ColorMode>, config_color: bool) -> ColorChoice {
    match flag {
        Some(ColorMode::Always) => ColorChoice::Always,
        Some(ColorMode::Never) => ColorChoice::Never,
        Some(ColorMode::Auto) => ColorChoice::Auto,
        None if config_color => ColorChoice::Auto,
        None => ColorChoice::Never,
    }
}

/// Print the index summary line
pub fn print_summary<W: Write>(out: &mut W, summary: IndexSummary) -> io::Result<()> {
    writeln!(
        out,
        "Indexed {} pages containing {} unique terms.",
        summary.documents, summary.terms
    )
}

/// Print the match count followed by each document identifier, in order
pub fn print_matches<W: WriteColor>(out: &mut W, matches: &DocSet) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "Found {}", matches.len())?;
    out.reset()?;
    writeln!(out, " matching pages")?;

    for doc in matches {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, "{}", doc)?;
        out.reset()?;
        writeln!(out)?;
    }

    Ok(())
}
