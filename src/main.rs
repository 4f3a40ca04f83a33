//! DP-Spline-Tool.
//!
//! Liest eine Pol-Datei (JSON), berechnet den diskreten periodischen Spline
//! und gibt Pole und Knoten als JSON auf stdout aus.

use anyhow::{Context, Result};
use dp_spline_tool::{run_pole_file, write_spline_document, SplineOptions};
use std::path::PathBuf;

fn main() {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("DP-Spline-Tool v{} startet...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Aufruf: dp-spline <pole.json>")?;

    // Optionen aus TOML laden (oder Standardwerte)
    let options = SplineOptions::load_from_file(&SplineOptions::config_path());

    let document = run_pole_file(&path, &options)?;
    println!("{}", write_spline_document(&document)?);
    Ok(())
}
