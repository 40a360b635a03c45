//! Kurven-Editor Library.
//! Engine-Funktionalitaet als Library exportiert fuer Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppState, CommandLog, SelectionState};
pub use core::{
    reflect_through, BezierSegment, ClosedPolygon, CurveError, FactorialTable, MoveAxis,
    SegmentChain, SEGMENT_POINTS,
};
pub use shared::{EditorOptions, EvaluationAlgorithm, RenderScene, SampledCurve, SelectionMarker};
