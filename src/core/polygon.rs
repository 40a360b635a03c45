//! Geschlossenes Polygon als Eingabe der Chaikin-Unterteilung.

use glam::DVec3;

/// Eckpunkte des Start-Polygons.
const SEED_POINTS: [DVec3; 6] = [
    DVec3::new(-2.0, 0.0, 0.0),
    DVec3::new(0.0, 3.0, 0.0),
    DVec3::new(3.0, 3.0, 0.0),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(3.0, -3.0, 0.0),
    DVec3::new(0.0, -3.0, 0.0),
];

/// Geordnete, zyklische Punktfolge: nach dem letzten Punkt folgt der erste.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedPolygon {
    points: Vec<DVec3>,
}

impl ClosedPolygon {
    /// Erstellt ein Polygon aus den gegebenen Eckpunkten.
    pub fn new(points: Vec<DVec3>) -> Self {
        Self { points }
    }

    /// Start-Polygon des Editors.
    pub fn seeded() -> Self {
        Self {
            points: SEED_POINTS.to_vec(),
        }
    }

    /// Anzahl Eckpunkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Read-only Sicht auf alle Eckpunkte.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Liest einen Eckpunkt.
    pub fn point(&self, index: usize) -> Option<DVec3> {
        self.points.get(index).copied()
    }

    /// Verschiebt einen Eckpunkt um ein Delta. Ungueltiger Index ist ein
    /// No-op.
    pub fn move_point(&mut self, index: usize, delta: DVec3) {
        if let Some(point) = self.points.get_mut(index) {
            *point += delta;
        }
    }
}

impl Default for ClosedPolygon {
    fn default() -> Self {
        Self::seeded()
    }
}
