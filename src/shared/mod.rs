//! Geteilte Typen: Laufzeit-Optionen und Polyline-Hilfen.

pub mod options;
pub mod polyline;

pub use options::SplineOptions;
pub use polyline::{closed_polyline, closed_polyline_length};
