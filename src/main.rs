//! Summarize Selection - command line host
//!
//! Treats a text file as the open document and a range of it as the
//! selection, then summarizes that range in place.

use anyhow::{Context, Result};
use clap::Parser;
use std::ops::Range;
use std::path::PathBuf;
use summarize_selection::config::{self, Config};
use summarize_selection::{FileDocument, OllamaCli, Outcome, Summarizer};
use tracing::{info, warn, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Document to summarize in place
    file: PathBuf,

    /// Select characters START..END (end exclusive)
    #[arg(long, value_parser = parse_range, group = "selection")]
    range: Option<Range<usize>>,

    /// Select lines FIRST-LAST (1-based, inclusive) or a single line
    #[arg(long, value_parser = parse_lines, group = "selection")]
    lines: Option<(usize, usize)>,

    /// Select the whole document
    #[arg(long, group = "selection")]
    all: bool,

    /// Config file with OLLAMA_PATH and MODEL
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the resulting document instead of saving it
    #[arg(long)]
    stdout: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_range(value: &str) -> Result<Range<usize>, String> {
    let (start, end) = value
        .split_once("..")
        .ok_or_else(|| format!("expected START..END, got '{value}'"))?;
    let start = start.trim().parse::<usize>().map_err(|e| e.to_string())?;
    let end = end.trim().parse::<usize>().map_err(|e| e.to_string())?;
    if start > end {
        return Err(format!("start {start} is after end {end}"));
    }
    Ok(start..end)
}

fn parse_lines(value: &str) -> Result<(usize, usize), String> {
    let (first, last) = value.split_once('-').unwrap_or((value, value));
    let first = first.trim().parse::<usize>().map_err(|e| e.to_string())?;
    let last = last.trim().parse::<usize>().map_err(|e| e.to_string())?;
    if first == 0 || first > last {
        return Err(format!("invalid line range {first}-{last}"));
    }
    Ok((first, last))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so --stdout stays clean
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut doc = FileDocument::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    if args.stdout {
        doc = doc.in_memory();
    }

    let text_doc = doc.document_mut();
    if let Some(range) = args.range.clone() {
        text_doc.select_chars(range)?;
    } else if let Some((first, last)) = args.lines {
        text_doc.select_lines(first, last)?;
    } else if args.all {
        text_doc.select_all();
    }

    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    info!("⚙️ Using config {}", config_path.display());
    let model_config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .resolve();

    let summarizer = Summarizer::new(OllamaCli::new());
    let outcome = match summarizer.run(&mut doc, model_config.as_ref()) {
        Ok(outcome) => outcome,
        Err(e) => {
            // The marker may already be on disk
            doc.revert()?;
            return Err(e.into());
        }
    };

    match &outcome {
        Outcome::NoSelection => info!("Nothing selected, document unchanged"),
        Outcome::ConfigMissing => warn!("⚠️ No usable config at {}", config_path.display()),
        Outcome::Summarized { .. } => info!("✅ Summary inserted"),
        Outcome::Failed { message, .. } => warn!("❌ {}", message),
    }

    if args.stdout {
        print!("{}", doc.text());
    } else if outcome != Outcome::NoSelection {
        if let Err(e) = doc.save() {
            let _ = doc.revert();
            return Err(e).with_context(|| format!("Failed to save {}", args.file.display()));
        }
    }

    Ok(())
}
