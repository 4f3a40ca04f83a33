//! Parser für Pol-Dateien.

use crate::shared::SplineOptions;
use anyhow::{Context, Result};
use dp_spline_engine::{SplineError, SplineParams, Vector2};
use serde::Deserialize;

/// Inhalt einer Pol-Datei.
///
/// Fehlende Parameter werden aus den [`SplineOptions`] übernommen.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PoleInput {
    /// Geschlossene Polfolge; `None` wenn das Feld fehlt oder `null` ist
    #[serde(default)]
    pub poles: Option<Vec<Vector2>>,
    #[serde(default)]
    pub order: Option<usize>,
    #[serde(default)]
    pub subdivision: Option<usize>,
    #[serde(default)]
    pub include_poles: Option<bool>,
}

impl PoleInput {
    /// Kombiniert die Overrides der Datei mit den Laufzeit-Optionen.
    pub fn resolve(&self, options: &SplineOptions) -> SplineParams {
        SplineParams {
            order: self.order.unwrap_or(options.order),
            subdivision: self.subdivision.unwrap_or(options.subdivision),
            include_poles: self.include_poles.unwrap_or(options.include_poles),
        }
    }

    /// Polfolge oder [`SplineError::NullInput`].
    pub fn require_poles(&self) -> Result<&[Vector2], SplineError> {
        self.poles.as_deref().ok_or(SplineError::NullInput)
    }
}

/// Parsed eine Pol-Datei aus einem JSON-String
pub fn parse_pole_input(json_content: &str) -> Result<PoleInput> {
    let input: PoleInput =
        serde_json::from_str(json_content).context("Pol-Datei ist kein gültiges JSON")?;

    match &input.poles {
        Some(poles) => log::debug!("{} Pole eingelesen", poles.len()),
        None => log::debug!("Pol-Datei enthält keine Polfolge"),
    }

    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_poles_only() {
        let input = parse_pole_input(r#"{"poles": [[0, 0], [10, 0], [5, 8.5]]}"#).unwrap();
        let poles = input.require_poles().unwrap();
        assert_eq!(poles.len(), 3);
        assert_eq!(poles[2], Vector2::new(5.0, 8.5));
        assert_eq!(input.order, None);
    }

    #[test]
    fn test_missing_poles_is_null_input() {
        let input = parse_pole_input(r#"{"order": 2}"#).unwrap();
        assert_eq!(input.require_poles(), Err(SplineError::NullInput));

        let input = parse_pole_input(r#"{"poles": null}"#).unwrap();
        assert!(input.require_poles().is_err());
    }

    #[test]
    fn test_overrides_win_over_options() {
        let input =
            parse_pole_input(r#"{"poles": [], "order": 4, "include_poles": false}"#).unwrap();
        let params = input.resolve(&SplineOptions::default());
        assert_eq!(params.order, 4);
        assert_eq!(params.subdivision, SplineOptions::default().subdivision);
        assert!(!params.include_poles);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(parse_pole_input("{\"poles\": [[0, 0], [1]").is_err());
        assert!(parse_pole_input(r#"{"order": -1}"#).is_err());
    }
}
