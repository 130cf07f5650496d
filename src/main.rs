mod diagram;
mod report;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wbenvelope::{load_profile, EnvelopeConstants, LoadSheet, LoadStations, SheetText};

use diagram::{diagram_path, render_diagram, DiagramInput};
use report::render_report;

/// Check a loading profile against the weight and balance envelope.
#[derive(Parser, Debug)]
#[command(name = "wbenvelope", version, about)]
struct Cli {
    /// Loading profile in TOML format.
    #[arg(default_value = wbenvelope::DEFAULT_PROFILE_PATH)]
    profile: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    // The envelope and the load stations are fixed for the reference airframe
    // and handed to every computation explicitly.
    let envelope = EnvelopeConstants::katana();
    let stations = LoadStations::katana();

    let profile = load_profile(&cli.profile)
        .with_context(|| format!("loading profile {}", cli.profile.display()))?;

    let sheet = LoadSheet::evaluate(&profile, &envelope, &stations);
    let text = SheetText::new(&profile, &sheet, Local::now().date_naive());

    println!("{}", render_report(&sheet, &text));

    let output = diagram_path(&cli.profile);
    render_diagram(
        &DiagramInput {
            envelope: &envelope,
            sheet: &sheet,
            text: &text,
        },
        &output,
    )
    .with_context(|| format!("writing diagram {}", output.display()))?;
    info!(path = %output.display(), verdict = %sheet.verdict(), "diagram written");

    Ok(())
}
