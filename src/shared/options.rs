//! Zentrale Konfiguration fuer den Kurven-Editor.
//!
//! `EditorOptions` enthaelt alle zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Auswertung ──────────────────────────────────────────────────────

/// Zwischenpunkte pro Segment; die Abtastung liefert immer samples + 2 Punkte.
pub const SAMPLES_PER_SEGMENT: usize = 10;
/// Groesstes n, fuer das die Fakultaeten-Tabelle vorausberechnet wird.
pub const MAX_FACTORIAL: usize = 100;
/// Chaikin-Verfeinerungsstufen fuer das geschlossene Polygon.
pub const CHAIKIN_LEVEL: usize = 5;

// ── Bearbeitung ─────────────────────────────────────────────────────

/// Schrittweite einer Kontrollpunkt-Verschiebung in Welteinheiten.
pub const MOVE_STEP: f64 = 0.2;
/// Kantenlaenge des Quadrats um den selektierten Kontrollpunkt.
pub const SELECTION_MARKER_SIZE: f64 = 0.2;
/// Anzahl Segmente der Startkette.
pub const SEED_CURVE_COUNT: usize = 3;

/// Algorithmus fuer die Bezier-Abtastung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EvaluationAlgorithm {
    /// Direkte Bernstein-Form (Gewichte aus der Fakultaeten-Tabelle)
    #[default]
    Bernstein,
    /// Rekursionsfreies de-Casteljau-Dreiecksschema
    Casteljau,
}

/// Alle zur Laufzeit aenderbaren Editor-Optionen.
/// Wird als `kurven_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Algorithmus fuer die Bezier-Abtastung
    pub evaluation_algorithm: EvaluationAlgorithm,
    /// Zwischenpunkte pro Segment (Abtastung ergibt samples + 2 Punkte)
    pub samples_per_segment: usize,
    /// Schrittweite einer Kontrollpunkt-Verschiebung
    pub move_step: f64,
    /// Kantenlaenge des Selektions-Markers
    pub selection_marker_size: f64,
    /// Chaikin-Verfeinerungsstufen fuer das geschlossene Polygon
    #[serde(default = "default_chaikin_level")]
    pub chaikin_level: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            evaluation_algorithm: EvaluationAlgorithm::default(),
            samples_per_segment: SAMPLES_PER_SEGMENT,
            move_step: MOVE_STEP,
            selection_marker_size: SELECTION_MARKER_SIZE,
            chaikin_level: CHAIKIN_LEVEL,
        }
    }
}

/// Serde-Default fuer `chaikin_level` (Abwaertskompatibilitaet bestehender
/// TOML-Dateien).
fn default_chaikin_level() -> usize {
    CHAIKIN_LEVEL
}

impl EditorOptions {
    /// Laedt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("kurven-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("kurven_editor.toml")
    }
}
