//! Handler fuer Selektions- und Verschiebe-Operationen.

use crate::app::AppState;
use crate::core::MoveAxis;

/// Setzt den Punkt-Cursor. Ausserhalb des gueltigen Bereichs der aktuellen
/// Kurve: stiller No-op, der Zustand bleibt unveraendert.
pub fn select_point(state: &mut AppState, index: usize) {
    if index < state.point_count_of(state.selection.curve_index) {
        state.selection.point_index = index;
    }
}

/// Setzt den Kurven-Cursor, falls der Index existiert. Der Punkt-Cursor
/// bleibt dabei stehen; Verschiebungen auf einen fuer die neue Kurve
/// ungueltigen Punktindex laufen ins Leere.
pub fn select_curve(state: &mut AppState, index: usize) {
    if index < state.curve_count() {
        state.selection.curve_index = index;
    }
}

/// Verschiebt den selektierten Punkt um einen Schritt entlang der Achse.
///
/// Trifft der Cursor ein Ketten-Segment, pflegt die Kette anschliessend die
/// C0/C1-Stetigkeit zu den Nachbarsegmenten; Polygon-Eckpunkte bewegen sich
/// ohne Propagation.
pub fn move_selected(state: &mut AppState, axis: MoveAxis, step: f64) {
    let delta = axis.offset(step);
    let cursor = state.selection;

    if cursor.curve_index < state.chain.segment_count() {
        state
            .chain
            .move_point(cursor.curve_index, cursor.point_index, delta);
    } else {
        state.polygon.move_point(cursor.point_index, delta);
    }
}
