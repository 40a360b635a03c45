//! Core-Domaenentypen: Segmente, Kette, Polygon, Fakultaeten-Tabelle.

pub mod axis;
pub mod chain;
pub mod error;
pub mod factorial;
pub mod polygon;
pub mod segment;

pub use axis::MoveAxis;
pub use chain::SegmentChain;
pub use error::CurveError;
pub use factorial::FactorialTable;
pub use polygon::ClosedPolygon;
pub use segment::{reflect_through, BezierSegment, SEGMENT_POINTS};
