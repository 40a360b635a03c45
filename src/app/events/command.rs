use crate::core::MoveAxis;
use crate::shared::{EditorOptions, EvaluationAlgorithm};

/// Commands sind mutierende Schritte, die zentral ausgefuehrt werden.
///
/// Die Zuordnung von Roh-Eingaben (Tasten, Maus) zu Commands liegt beim
/// externen Eingabe-Dispatch; die Engine parst keine Eingaben.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Kontrollpunkt innerhalb der aktuellen Kurve selektieren
    SelectPoint { index: usize },
    /// Kurve (Segment der Kette oder Polygon) selektieren
    SelectCurve { index: usize },
    /// Selektierten Kontrollpunkt um einen Schritt verschieben
    MoveSelectedPoint { axis: MoveAxis, step: f64 },
    /// Algorithmus fuer die Bezier-Abtastung wechseln
    SetEvaluationAlgorithm { algorithm: EvaluationAlgorithm },
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zuruecksetzen
    ResetOptions,
}
