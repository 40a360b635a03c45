//! Bewegungsachsen fuer Kontrollpunkt-Verschiebungen.

use glam::DVec3;

/// Achse, entlang derer ein Kontrollpunkt verschoben wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAxis {
    /// Horizontal (links/rechts)
    X,
    /// Vertikal (hoch/runter)
    Y,
    /// Tiefe
    Z,
}

impl MoveAxis {
    /// Verschiebungsvektor fuer einen Schritt entlang dieser Achse.
    pub fn offset(self, step: f64) -> DVec3 {
        match self {
            MoveAxis::X => DVec3::new(step, 0.0, 0.0),
            MoveAxis::Y => DVec3::new(0.0, step, 0.0),
            MoveAxis::Z => DVec3::new(0.0, 0.0, step),
        }
    }
}
