//! Zentrale Konfiguration für das DP-Spline-Tool.
//!
//! `SplineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use dp_spline_engine::{SplineParams, DEFAULT_ORDER, DEFAULT_SUBDIVISION};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "dp_spline.toml";

/// Standard: Spline läuft durch die Pole.
pub const INCLUDE_POLES_DEFAULT: bool = true;
/// Standard: Ausgabe-Polyline wird durch Wiederholen des ersten Knotens geschlossen.
pub const CLOSE_POLYLINE_DEFAULT: bool = true;

/// Alle zur Laufzeit änderbaren Spline-Optionen.
/// Wird als `dp_spline.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineOptions {
    /// Ordnung des Splines (>= 1)
    pub order: usize,
    /// Anzahl der Knoten zwischen zwei Polen (>= 1)
    pub subdivision: usize,
    /// Spline durch die Pole legen (Pole werden neu berechnet)
    pub include_poles: bool,
    /// Ersten Knoten am Ende der Ausgabe wiederholen
    pub close_polyline: bool,
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            subdivision: DEFAULT_SUBDIVISION,
            include_poles: INCLUDE_POLES_DEFAULT,
            close_polyline: CLOSE_POLYLINE_DEFAULT,
        }
    }
}

impl SplineOptions {
    /// Lädt die Spline-Optionen aus `path`.
    ///
    /// Fehlende oder unlesbare Dateien ergeben die Standard-Parameter,
    /// fehlende Schlüssel werden einzeln mit Standardwerten belegt.
    pub fn load_from_file(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            log::info!(
                "{} nicht vorhanden, Spline mit r = {}, n = {}",
                path.display(),
                DEFAULT_ORDER,
                DEFAULT_SUBDIVISION
            );
            return Self::default();
        };

        toml::from_str::<Self>(&content)
            .inspect(|opts| {
                log::info!(
                    "Spline-Optionen aus {}: r = {}, n = {}, durch Pole: {}",
                    path.display(),
                    opts.order,
                    opts.subdivision,
                    opts.include_poles
                );
            })
            .unwrap_or_else(|e| {
                log::warn!("{} ungültig, Spline-Standardwerte aktiv: {}", path.display(), e);
                Self::default()
            })
    }

    /// Schreibt die Spline-Optionen als TOML nach `path`.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Spline-Optionen nicht schreibbar: {}", path.display()))?;
        log::debug!("Spline-Optionen geschrieben: {}", path.display());
        Ok(())
    }

    /// `dp_spline.toml` im Verzeichnis der Binary, sonst im Arbeitsverzeichnis.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Spline-Parameter für die Engine.
    pub fn to_params(&self) -> SplineParams {
        SplineParams {
            order: self.order,
            subdivision: self.subdivision,
            include_poles: self.include_poles,
        }
    }
}
