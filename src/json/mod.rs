//! JSON Import/Export für Polfolgen und berechnete Spline-Knoten.
//!
//! Eingabe: `{"poles": [[x, y], ...]}` mit optionalen Parameter-Overrides.
//! Ausgabe: Parameter, Pole und Knoten als ein Dokument.

pub mod parser;
pub mod writer;

pub use parser::{parse_pole_input, PoleInput};
pub use writer::{write_spline_document, SplineDocument};
