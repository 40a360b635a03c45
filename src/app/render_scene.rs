//! Baut die Render-Szene aus dem AppState.
//!
//! Der externe Render-Loop ruft das einmal pro Frame; jede Kurve wird
//! frisch abgetastet.

use glam::DVec3;

use crate::core::CurveError;
use crate::shared::chaikin::chaikin_refine;
use crate::shared::curve_geometry;
use crate::shared::{EvaluationAlgorithm, RenderScene, SampledCurve, SelectionMarker};

use super::AppState;

/// Baut die Read-only Szene fuer einen Frame.
///
/// Fehler entstehen nur aus Programmierfehlern (Kurvengrad jenseits der
/// Fakultaeten-Tabelle), nicht aus Benutzer-Eingaben.
pub fn build(state: &AppState) -> Result<RenderScene, CurveError> {
    let options = &state.options;
    let samples = options.samples_per_segment;
    let mut curves = Vec::with_capacity(state.curve_count());

    for (index, segment) in state.chain.segments().iter().enumerate() {
        let curve_points = match options.evaluation_algorithm {
            EvaluationAlgorithm::Bernstein => {
                curve_geometry::bernstein_curve(&state.factorials, &segment.points, samples)?
            }
            EvaluationAlgorithm::Casteljau => {
                curve_geometry::casteljau_curve(&segment.points, samples)?
            }
        };

        // Hermite-Overlay mit aus den Handles abgeleiteten Tangenten
        let hermite_points = curve_geometry::hermite_curve(
            segment.start(),
            segment.end(),
            segment.start_tangent(),
            segment.end_tangent(),
            samples,
        );

        curves.push(SampledCurve {
            curve_points,
            hermite_points: Some(hermite_points),
            control_points: segment.points.to_vec(),
            closed: false,
            selected: state.selection.curve_index == index,
        });
    }

    let polygon_index = state.chain.segment_count();
    curves.push(SampledCurve {
        curve_points: chaikin_refine(state.polygon.points(), options.chaikin_level),
        hermite_points: None,
        control_points: state.polygon.points().to_vec(),
        closed: true,
        selected: state.selection.curve_index == polygon_index,
    });

    let selection_marker = selected_point(state).map(|position| SelectionMarker {
        position,
        size: options.selection_marker_size,
    });

    Ok(RenderScene {
        curves,
        selection_marker,
        options: options.clone(),
    })
}

/// Position des selektierten Kontrollpunkts, falls der Cursor gueltig ist.
fn selected_point(state: &AppState) -> Option<DVec3> {
    let cursor = state.selection;
    if cursor.curve_index < state.chain.segment_count() {
        state.chain.point(cursor.curve_index, cursor.point_index)
    } else {
        state.polygon.point(cursor.point_index)
    }
}
