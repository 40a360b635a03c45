//! Application State: zentrale Datenhaltung.

use crate::core::{ClosedPolygon, FactorialTable, SegmentChain, SEGMENT_POINTS};
use crate::shared::options::{self, EditorOptions};

use super::CommandLog;

/// Auswahl-Cursor: welcher Kontrollpunkt gerade bearbeitet wird.
///
/// Transienter UI-Zustand, kein Teil der Kurvengeometrie. Kurvenindizes
/// adressieren erst die Segmente der Kette, danach das Polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Index der selektierten Kurve
    pub curve_index: usize,
    /// Index des selektierten Punkts innerhalb der Kurve
    pub point_index: usize,
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Segmentkette (Bezier-Abtastung + Hermite-Overlay)
    pub chain: SegmentChain,
    /// Geschlossenes Polygon (Chaikin-Unterteilung)
    pub polygon: ClosedPolygon,
    /// Auswahl-Cursor
    pub selection: SelectionState,
    /// Fakultaeten-Tabelle fuer Bernstein-Gewichte (einmal aufgebaut)
    pub factorials: FactorialTable,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgefuehrter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt den Startzustand mit der Saat-Geometrie.
    pub fn new() -> Self {
        Self {
            chain: SegmentChain::seeded(options::SEED_CURVE_COUNT),
            polygon: ClosedPolygon::seeded(),
            selection: SelectionState::default(),
            factorials: FactorialTable::new(options::MAX_FACTORIAL),
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
        }
    }

    /// Gesamtzahl selektierbarer Kurven (Kette + Polygon).
    pub fn curve_count(&self) -> usize {
        self.chain.segment_count() + 1
    }

    /// Anzahl Kontrollpunkte der Kurve mit dem gegebenen Index.
    pub fn point_count_of(&self, curve_index: usize) -> usize {
        if curve_index < self.chain.segment_count() {
            SEGMENT_POINTS
        } else {
            self.polygon.point_count()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
