//! Einstiegspunkt der Spline-Berechnung: Validierung und Ablauf der Stufen.

use serde::{Deserialize, Serialize};

use crate::Vector2;
use crate::error::SplineError;
use crate::evaluate::evaluate_nodes;
use crate::kernel::first_order_kernel;
use crate::recalibrate::recalibrate_poles;

/// Standard-Ordnung des Splines.
pub const DEFAULT_ORDER: usize = 3;
/// Standard-Anzahl der Knoten zwischen zwei Polen.
pub const DEFAULT_SUBDIVISION: usize = 5;
/// Größte zulässige Ordnung; der Exponent `2r` der Pol-Filterung muss in `i32` passen.
pub const MAX_ORDER: usize = (i32::MAX / 2) as usize;

/// Parameter einer Spline-Berechnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineParams {
    /// Ordnung `r` (>= 1)
    pub order: usize,
    /// Knoten pro Pol-Abschnitt `n` (>= 1)
    pub subdivision: usize,
    /// `true`: Pole werden neu berechnet, damit der Spline durch sie läuft.
    /// `false`: Pole wirken direkt als Koeffizienten (approximierender Spline).
    pub include_poles: bool,
}

impl Default for SplineParams {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            subdivision: DEFAULT_SUBDIVISION,
            include_poles: true,
        }
    }
}

impl SplineParams {
    /// Prüft Polzahl, Ordnung und Knotenanzahl in dieser Reihenfolge.
    ///
    /// Die Ordnung muss in `1..=MAX_ORDER` liegen.
    pub fn validate(&self, pole_count: usize) -> Result<(), SplineError> {
        if pole_count <= 2 {
            return Err(SplineError::InvalidPoleCount { count: pole_count });
        }
        if self.order == 0 || self.order > MAX_ORDER {
            return Err(SplineError::InvalidOrder { order: self.order });
        }
        if self.subdivision < 1 {
            return Err(SplineError::InvalidSubdivision {
                subdivision: self.subdivision,
            });
        }
        Ok(())
    }
}

/// Validierter Spline über einer geschlossenen Polfolge.
#[derive(Debug, Clone, PartialEq)]
pub struct DpSpline {
    poles: Vec<Vector2>,
    params: SplineParams,
}

impl DpSpline {
    /// Erstellt einen Spline; schlägt fehl, bevor irgendetwas berechnet wird.
    pub fn new(poles: Vec<Vector2>, params: SplineParams) -> Result<Self, SplineError> {
        params.validate(poles.len())?;
        Ok(Self { poles, params })
    }

    /// Ursprüngliche Pole in der übergebenen Reihenfolge.
    pub fn poles(&self) -> &[Vector2] {
        &self.poles
    }

    /// Validierte Parameter.
    pub fn params(&self) -> SplineParams {
        self.params
    }

    /// Anzahl der Knoten N = n·m.
    pub fn node_count(&self) -> usize {
        self.params.subdivision * self.poles.len()
    }

    /// Knotenindex, auf dem Pol `pole` liegt (periodisch in der Polzahl).
    pub fn pole_node_index(&self, pole: usize) -> usize {
        (pole % self.poles.len()) * self.params.subdivision
    }

    /// Vektor-Koeffizienten für die Auswertung, ggf. im Frequenzbereich neu berechnet.
    pub fn coefficients(&self) -> Vec<Vector2> {
        if self.params.include_poles {
            recalibrate_poles(&self.poles, self.params.order, self.params.subdivision)
        } else {
            self.poles.clone()
        }
    }

    /// Berechnet die N Knoten der Ordnung `r` in periodischer Reihenfolge.
    ///
    /// Index 0 gehört zum ersten Pol, danach folgen je `n` Knoten pro Abschnitt.
    pub fn nodes(&self) -> Vec<Vector2> {
        let SplineParams {
            order,
            subdivision,
            include_poles,
        } = self.params;

        log::debug!(
            "Berechne DP-Spline: {} Pole, {} Knoten, Ordnung {}, durch Pole: {}",
            self.poles.len(),
            self.node_count(),
            order,
            include_poles
        );

        let vectors = self.coefficients();
        let kernel = first_order_kernel(subdivision, self.poles.len());
        let nodes = evaluate_nodes(&vectors, &kernel, order, subdivision);

        if nodes.iter().any(|node| !node.is_finite()) {
            log::warn!(
                "DP-Spline enthält nicht-endliche Knoten (Ordnung {}, n = {}, m = {})",
                order,
                subdivision,
                self.poles.len()
            );
        }

        nodes
    }
}

/// Berechnet die Knoten eines diskreten periodischen Splines.
///
/// # Parameter
/// - `poles`: geschlossene Polfolge, mindestens 3 Pole
/// - `order`: Ordnung `r` (>= 1)
/// - `subdivision`: Knoten pro Pol-Abschnitt `n` (>= 1)
/// - `include_poles`: `true` → der Spline läuft durch die Pole
///
/// # Rückgabe
/// `n · poles.len()` Knoten; Knoten `p·n` gehört zu Pol `p`.
pub fn calculate(
    poles: &[Vector2],
    order: usize,
    subdivision: usize,
    include_poles: bool,
) -> Result<Vec<Vector2>, SplineError> {
    calculate_with(
        Some(poles),
        &SplineParams {
            order,
            subdivision,
            include_poles,
        },
    )
}

/// Wie [`calculate`], aber mit optionaler Polfolge und gebündelten Parametern.
///
/// `None` ergibt [`SplineError::NullInput`].
pub fn calculate_with(
    poles: Option<&[Vector2]>,
    params: &SplineParams,
) -> Result<Vec<Vector2>, SplineError> {
    let poles = poles.ok_or(SplineError::NullInput)?;
    let spline = DpSpline::new(poles.to_vec(), *params)?;
    Ok(spline.nodes())
}
