//! Geteilte Typen und reine Geometrie fuer layer-uebergreifende Vertraege.
//!
//! Enthaelt die Kurven-Auswertung und die Typen, die zwischen `app` und
//! einem externen Renderer geteilt werden, um direkte Abhaengigkeiten zu
//! vermeiden.

pub mod chaikin;
pub mod curve_geometry;
pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::EvaluationAlgorithm;
pub use render_scene::{RenderScene, SampledCurve, SelectionMarker};
