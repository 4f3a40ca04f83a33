//! DP-Spline-Tool Library.
//! Konfiguration, JSON-Ein-/Ausgabe und Ablauf um den numerischen Kern
//! aus `dp_spline_engine`; als Library exportiert für Tests und Wiederverwendung.

pub mod json;
pub mod run;
pub mod shared;

pub use dp_spline_engine::{
    calculate, calculate_with, DpSpline, SplineError, SplineParams, Vector2,
};
pub use json::{parse_pole_input, write_spline_document, PoleInput, SplineDocument};
pub use run::{run_pole_file, run_pole_input};
pub use shared::{closed_polyline, closed_polyline_length, SplineOptions};
