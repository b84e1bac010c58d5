use anyhow::{Context, Result};
use clap::Parser;
use pngprompt_extract::PromptExtractor;
use report::{ChunkSummary, FileReport};
use settings::Settings;
use std::path::PathBuf;
use std::sync::Arc;

mod report;
mod settings;

#[derive(Parser)]
#[command(name = "pngprompt")]
#[command(about = "Recover the positive prompt embedded in AI-generated PNG files", long_about = None)]
#[command(version)]
struct Cli {
    /// PNG files to inspect
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print one JSON object per file
    #[arg(long)]
    json: bool,

    /// Also list the decoded text chunks
    #[arg(long)]
    chunks: bool,

    /// TOML file with [reader] and [extractor] settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let settings = Settings::load(cli.config.as_deref())?;
    let extractor = Arc::new(
        PromptExtractor::new(settings.reader, settings.extractor)
            .context("Failed to build extractor")?,
    );

    // Files share nothing, so each one runs on its own blocking task.
    let handles: Vec<_> = cli
        .files
        .iter()
        .cloned()
        .map(|path| {
            let extractor = Arc::clone(&extractor);
            let with_chunks = cli.chunks;
            tokio::task::spawn_blocking(move || inspect(&extractor, path, with_chunks))
        })
        .collect();

    let show_file = cli.files.len() > 1;
    let mut failed = 0usize;
    for (path, handle) in cli.files.iter().zip(handles) {
        let outcome = handle
            .await
            .with_context(|| format!("Task for {} panicked", path.display()))?;
        match outcome {
            Ok(report) => {
                let rendered = if cli.json {
                    report::render_json(&report)
                } else {
                    report::render_text(&report, show_file)
                };
                println!("{}", rendered.trim_end());
            }
            Err(err) => {
                failed += 1;
                log::error!("{}: {err:#}", path.display());
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} files could not be read", cli.files.len());
    }
    Ok(())
}

fn inspect(extractor: &PromptExtractor, path: PathBuf, with_chunks: bool) -> Result<FileReport> {
    let bytes = std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let chunks = extractor
        .reader()
        .read(&bytes)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    log::debug!("{}: {} text chunks", path.display(), chunks.len());

    let result = extractor.extract_from_chunks(&chunks);
    Ok(FileReport {
        file: path.display().to_string(),
        result,
        chunks: with_chunks.then(|| chunks.iter().map(ChunkSummary::from).collect()),
    })
}
