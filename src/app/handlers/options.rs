//! Handler fuer Options-Verarbeitung.

use crate::app::AppState;
use crate::shared::{EditorOptions, EvaluationAlgorithm};

/// Wendet neue Optionen an und speichert sie neben der Binary.
pub fn apply(state: &mut AppState, options: EditorOptions) {
    state.options = options;

    let path = EditorOptions::config_path();
    if let Err(e) = state.options.save_to_file(&path) {
        log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
    }
}

/// Setzt alle Optionen auf Standardwerte zurueck.
pub fn reset(state: &mut AppState) {
    state.options = EditorOptions::default();
}

/// Wechselt den Algorithmus fuer die Bezier-Abtastung.
pub fn set_evaluation_algorithm(state: &mut AppState, algorithm: EvaluationAlgorithm) {
    state.options.evaluation_algorithm = algorithm;
}
