//! Ablauf einer Berechnung: Pol-Datei lesen, Spline berechnen, Dokument bauen.

use crate::json::{parse_pole_input, SplineDocument};
use crate::shared::{closed_polyline_length, SplineOptions};
use anyhow::{Context, Result};
use dp_spline_engine::DpSpline;
use std::path::Path;

/// Berechnet den Spline für den Inhalt einer Pol-Datei.
pub fn run_pole_input(json_content: &str, options: &SplineOptions) -> Result<SplineDocument> {
    let input = parse_pole_input(json_content)?;
    let params = input.resolve(options);
    let poles = input.require_poles()?;

    let spline = DpSpline::new(poles.to_vec(), params)?;
    let nodes = spline.nodes();

    log::info!(
        "Spline berechnet: {} Pole → {} Knoten, Länge {:.3}",
        spline.poles().len(),
        nodes.len(),
        closed_polyline_length(&nodes)
    );

    Ok(SplineDocument::new(
        &spline.params(),
        spline.poles(),
        &nodes,
        options.close_polyline,
    ))
}

/// Liest eine Pol-Datei von der Platte und berechnet den Spline.
pub fn run_pole_file(path: &Path, options: &SplineOptions) -> Result<SplineDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Pol-Datei nicht lesbar: {}", path.display()))?;
    run_pole_input(&content, options)
        .with_context(|| format!("Spline-Berechnung fehlgeschlagen: {}", path.display()))
}
