//! tex2bmp CLI - converts TEX textures to bitmaps.
//!
//! Built for drag-and-drop use: every file dropped on the executable is
//! converted to a `.bmp` beside it, and the console stays open until ENTER
//! is pressed.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tex2bmp::prelude::*;

const BANNER: &str = "--- TEX to BMP (Swapped Nibbles / RGB555) ---";
const SEPARATOR: &str = "---------------------------------------------";
const USAGE_HINT: &str = "Usage: Drag and drop .TEX files onto this executable.";

/// Convert 4-bit paletted TEX textures to 24-bit BMP files
#[derive(Parser, Debug)]
#[command(name = "tex2bmp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TEX files to convert
    files: Vec<PathBuf>,

    /// Write bitmaps into this directory instead of beside each input
    #[arg(short, long, env = "TEX2BMP_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Exit without waiting for ENTER
    #[arg(long, env = "TEX2BMP_NO_PAUSE")]
    no_pause: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    println!("{BANNER}");
    let summary = run(&cli.files, cli.output_dir.as_deref());
    debug!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "batch finished"
    );

    if !cli.no_pause && io::stdin().is_terminal() {
        pause()?;
    }

    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Convert every file, printing progress as it goes.
fn run(files: &[PathBuf], output_dir: Option<&Path>) -> BatchSummary {
    if files.is_empty() {
        println!("{USAGE_HINT}");
        return BatchSummary::default();
    }

    convert_all(files, output_dir, |event| match event {
        BatchEvent::Started { input } => {
            println!("Processing: {}...", input.display());
        }
        BatchEvent::Header { width, height, .. } => {
            println!(" - Dimensions: {width}x{height}");
        }
        BatchEvent::Converted(conversion) => {
            println!("Success! Saved: {}", conversion.output.display());
            println!("{SEPARATOR}");
        }
        BatchEvent::Failed { error, .. } => {
            eprintln!("Error: {error}");
            println!("{SEPARATOR}");
        }
    })
}

fn pause() -> Result<()> {
    print!("\nPress ENTER to exit...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
