//! Fehlertypen der Spline-Berechnung.

use thiserror::Error;

/// Ungültige Eingaben für die Spline-Berechnung.
///
/// Alle Varianten werden vor Beginn der Rechnung erkannt. Numerische Probleme
/// (z.B. nahezu verschwindende Nenner der Pol-Filterung) erzeugen keinen
/// Fehler, sondern nicht-endliche Koordinaten im Ergebnis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplineError {
    /// Es wurde keine Polfolge übergeben.
    #[error("Keine Polfolge übergeben")]
    NullInput,
    /// Weniger als drei Pole.
    #[error("Anzahl der Pole muss > 2 sein (erhalten: {count})")]
    InvalidPoleCount { count: usize },
    /// Spline-Ordnung `r` ist 0 oder größer als [`crate::spline::MAX_ORDER`].
    #[error("Ordnung des Splines muss > 0 und <= 2^30 - 1 sein (erhalten: {order})")]
    InvalidOrder { order: usize },
    /// Knotenanzahl `n` zwischen den Polen ist 0.
    #[error("Anzahl der Knoten zwischen den Polen muss >= 1 sein (erhalten: {subdivision})")]
    InvalidSubdivision { subdivision: usize },
}

impl SplineError {
    /// `true` wenn die Polfolge fehlt, `false` bei Werten außerhalb des gültigen Bereichs.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::NullInput)
    }
}
