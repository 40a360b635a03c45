//! Ein kubisches Bezier-Segment mit vier Kontrollpunkten.

use glam::DVec3;

/// Anzahl Kontrollpunkte eines Segments (kubisch: Grad 3).
pub const SEGMENT_POINTS: usize = 4;

/// Ein kubisches Bezier-Segment.
///
/// P0 und P3 liegen auf der Kurve, P1 und P2 sind Tangenten-Handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    /// Kontrollpunkte [P0, P1, P2, P3]
    pub points: [DVec3; SEGMENT_POINTS],
}

impl BezierSegment {
    /// Erstellt ein Segment aus vier Kontrollpunkten.
    pub fn new(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Startpunkt (auf der Kurve).
    pub fn start(&self) -> DVec3 {
        self.points[0]
    }

    /// Endpunkt (auf der Kurve).
    pub fn end(&self) -> DVec3 {
        self.points[SEGMENT_POINTS - 1]
    }

    /// Ausgehende Tangente am Startpunkt: P1 - P0.
    ///
    /// Die Laenge geht in die Hermite-Form ein, es wird nicht normalisiert.
    pub fn start_tangent(&self) -> DVec3 {
        self.points[1] - self.points[0]
    }

    /// Eingehende Tangente am Endpunkt: P3 - P2.
    pub fn end_tangent(&self) -> DVec3 {
        self.points[SEGMENT_POINTS - 1] - self.points[SEGMENT_POINTS - 2]
    }
}

/// Punktspiegelung von `source` durch `center`: 2*center - source.
pub fn reflect_through(center: DVec3, source: DVec3) -> DVec3 {
    2.0 * center - source
}
