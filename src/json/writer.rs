//! Writer für berechnete Spline-Knoten.

use crate::shared::closed_polyline;
use anyhow::Result;
use dp_spline_engine::{SplineParams, Vector2};
use serde::{Deserialize, Serialize};

/// Ausgabedokument einer Spline-Berechnung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineDocument {
    pub order: usize,
    pub subdivision: usize,
    pub include_poles: bool,
    /// Ursprüngliche Pole
    pub poles: Vec<Vector2>,
    /// Knoten in periodischer Reihenfolge, ggf. geschlossen
    pub nodes: Vec<Vector2>,
}

impl SplineDocument {
    /// Baut das Dokument; `close` wiederholt den ersten Knoten am Ende.
    pub fn new(params: &SplineParams, poles: &[Vector2], nodes: &[Vector2], close: bool) -> Self {
        Self {
            order: params.order,
            subdivision: params.subdivision,
            include_poles: params.include_poles,
            poles: poles.to_vec(),
            nodes: if close {
                closed_polyline(nodes)
            } else {
                nodes.to_vec()
            },
        }
    }
}

/// Schreibt ein Spline-Dokument als formatiertes JSON
pub fn write_spline_document(document: &SplineDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}
