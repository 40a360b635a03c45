//! Fehlertypen der Kurven-Auswertung.

use thiserror::Error;

/// Fehler bei der Auswertung einer Kurve.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// Auswertung ohne Kontrollpunkte ist nicht definiert
    #[error("Kontrollpunktmenge ist leer")]
    EmptyControlSet,
    /// Kurvengrad liegt jenseits der vorausberechneten Fakultaeten
    #[error("Kurvengrad {degree} ueberschreitet die Fakultaeten-Tabelle (max {max})")]
    DegreeExceedsFactorialBound {
        /// Angefragter Grad bzw. Fakultaeten-Index
        degree: usize,
        /// Groesster abgedeckter Index der Tabelle
        max: usize,
    },
}
