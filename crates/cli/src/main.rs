//! Report generation CLI
//!
//! Renders the classroom-grouped marks report from two JSON row dumps
//! without going through the HTTP server. Row files hold the same arrays
//! of header-to-value objects the API accepts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::Parser;
use report_orchestrator::generate_report;
use report_pdf_render::EmbeddedFont;
use serde_json::Value;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "report-gen",
    version,
    about = "Generate a classroom-grouped student marks PDF report"
)]
struct Cli {
    /// JSON file with mark rows (array of header-to-value objects)
    #[arg(long)]
    marks: PathBuf,

    /// JSON file with roster rows
    #[arg(long)]
    students: PathBuf,

    /// TTF font used for Arabic text
    #[arg(long)]
    font: PathBuf,

    /// Output PDF path
    #[arg(short, long, default_value = "student_reports.pdf")]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let marks = read_rows(&cli.marks)?;
    let students = read_rows(&cli.students)?;
    let font = EmbeddedFont::from_file(&cli.font).context("failed to load font")?;

    let pdf = generate_report(&marks, &students, &font)?;
    fs::write(&cli.output, &pdf)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("Wrote {} ({} bytes)", cli.output.display(), pdf.len());
    Ok(())
}

fn read_rows(path: &Path) -> Result<Vec<Value>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("invalid rows JSON in {}", path.display()))
}
