use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use confession::document::{
    generate_outline, search_sections, sections_with_topic, write_document, Document,
};
use confession::{load_confession, Config, ExportFormat};

#[derive(Parser)]
#[command(name = "confession")]
#[command(about = "Convert the Westminster Confession of Faith text into structured JSON")]
#[command(version)]
struct Cli {
    /// Source text file (default: from config, then westminster-confession.txt)
    input: Option<PathBuf>,

    /// Destination JSON file (default: from config, then westminster-confession.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to config file (default: ~/.config/confession/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What to produce
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,

    /// Write compact JSON regardless of the configured indent
    #[arg(long)]
    compact: bool,

    /// List the sections tagged with this topic
    #[arg(long)]
    topic: Option<String>,

    /// List the sections whose title or content contains this text
    #[arg(long)]
    search: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    if cli.init_config {
        Config::init_default()?;
        if let Some(path) = Config::get_config_path() {
            println!("✓ Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;
    let input = cli.input.clone().unwrap_or_else(|| config.input_path());

    info!("Parsing {}", input.display());
    let document = load_confession(
        &input,
        config.document_metadata(),
        &config.segment_options(),
    )
    .with_context(|| format!("Failed to parse {}", input.display()))?;

    match cli.format {
        ExportFormat::Json => {
            let output = cli.output.clone().unwrap_or_else(|| config.output_path());
            let indent = if cli.compact { 0 } else { config.output.indent };
            write_document(&document, &output, indent)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!("✓ Parsed {} chapters", document.sections.len());
            println!("✓ Wrote to {}", output.display());
        }
        ExportFormat::Outline => print_outline(&document),
    }

    if let Some(topic) = &cli.topic {
        let sections = sections_with_topic(&document, topic);
        println!("{} section(s) tagged \"{topic}\":", sections.len());
        for section in sections {
            println!("  {:>3}  {}", section.chapter, section.title);
        }
    }

    if let Some(query) = &cli.search {
        let results = search_sections(&document, query);
        println!("{} match(es) for \"{query}\":", results.len());
        for result in results {
            println!(
                "  {:>3}  {:?}  {}",
                result.chapter,
                result.field,
                excerpt(&result.text, result.start_pos)
            );
        }
    }

    Ok(())
}

fn print_outline(document: &Document) {
    for item in generate_outline(document) {
        println!("{:>3}  {}", item.chapter, item.title);
    }
}

/// Up to 60 characters of context starting near the match
fn excerpt(text: &str, start_pos: usize) -> String {
    let start = text
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= start_pos.saturating_sub(20))
        .last()
        .unwrap_or(0);
    text[start..].chars().take(60).collect()
}
