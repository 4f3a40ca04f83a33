//! `dp_spline_engine` — Diskrete periodische Splines mit Vektor-Koeffizienten.
//!
//! Berechnet die Knoten eines geschlossenen, diskreten N-periodischen Splines
//! beliebiger Ordnung `r` über `m` Polen mit `n` Knoten pro Pol-Abschnitt
//! (N = n·m). Die Berechnung läuft in drei Stufen:
//! - `kernel`      — Koeffizienten des Q-Splines 1. Ordnung (Dreiecksimpuls)
//! - `recalibrate` — Fourier-Filterung der Pole, damit der Spline durch sie läuft
//! - `evaluate`    — periodische Faltung, Ordnung für Ordnung bis `r`
//!
//! Theorie: <http://www.math.spbu.ru/ru/mmeh/AspDok/pub/2010/Chashnikov.pdf>
//!
//! # Beispiel
//! ```
//! use dp_spline_engine::{calculate, Vector2};
//!
//! let square = [
//!     Vector2::new(0.0, 0.0),
//!     Vector2::new(10.0, 0.0),
//!     Vector2::new(10.0, 10.0),
//!     Vector2::new(0.0, 10.0),
//! ];
//! let nodes = calculate(&square, 2, 4, true)?;
//! assert_eq!(nodes.len(), 16);
//! assert!(nodes[4].distance(square[1]) < 1e-6);
//! # Ok::<(), dp_spline_engine::SplineError>(())
//! ```

pub mod error;
pub mod evaluate;
pub mod kernel;
pub mod periodic;
pub mod recalibrate;
pub mod spline;

/// 2D-Vektor doppelter Genauigkeit für Pole und Knoten.
pub type Vector2 = glam::DVec2;

pub use error::SplineError;
pub use evaluate::{evaluate_nodes, first_order_nodes, raise_order};
pub use kernel::first_order_kernel;
pub use periodic::periodic_index;
pub use recalibrate::{filter_denominators, recalibrate_poles};
pub use spline::{
    DEFAULT_ORDER, DEFAULT_SUBDIVISION, DpSpline, MAX_ORDER, SplineParams, calculate,
    calculate_with,
};
