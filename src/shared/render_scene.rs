//! Render-Szene als expliziter Uebergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der externe Renderer sie
//! konsumiert.

use glam::DVec3;

use super::options::EditorOptions;

/// Eine abgetastete Kurve samt Kontrollpolygon fuer einen Frame.
#[derive(Debug, Clone)]
pub struct SampledCurve {
    /// Kurvenpunkte in Parameter-Reihenfolge (u=0 bis u=1 bzw. voller Umlauf)
    pub curve_points: Vec<DVec3>,
    /// Hermite-Overlay (nur fuer Bezier-Segmente, Tangenten aus den Handles)
    pub hermite_points: Option<Vec<DVec3>>,
    /// Kontrollpunkte des Segments bzw. Polygons (der Renderer zeichnet sie
    /// als geschlossenen Linienzug)
    pub control_points: Vec<DVec3>,
    /// true: die Kurve selbst ist zyklisch und wird als Loop gezeichnet
    pub closed: bool,
    /// true: diese Kurve traegt die aktuelle Selektion
    pub selected: bool,
}

/// Marker um den selektierten Kontrollpunkt.
#[derive(Debug, Clone, Copy)]
pub struct SelectionMarker {
    /// Position des selektierten Kontrollpunkts
    pub position: DVec3,
    /// Kantenlaenge des Quadrats
    pub size: f64,
}

/// Read-only Daten fuer einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Alle Kurven in Zeichenreihenfolge (Kette zuerst, dann das Polygon)
    pub curves: Vec<SampledCurve>,
    /// Marker um den selektierten Kontrollpunkt (None bei ungueltigem Cursor)
    pub selection_marker: Option<SelectionMarker>,
    /// Laufzeit-Optionen fuer Groessen beim Zeichnen
    pub options: EditorOptions,
}
