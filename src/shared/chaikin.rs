//! Chaikin-Eckenschnitt fuer geschlossene Polygone.

use glam::DVec3;

/// Schneidet eine Ecke: 3/4 von `a` plus 1/4 von `b`.
fn cut_corner(a: DVec3, b: DVec3) -> DVec3 {
    a * 0.75 + b * 0.25
}

/// Verfeinert ein geschlossenes Polygon um `level` Chaikin-Stufen.
///
/// Jede Stufe ersetzt die Kante (P_i, P_{i+1}) durch die zwei Punkte
/// Q = 3/4 P_i + 1/4 P_{i+1} und R = 1/4 P_i + 3/4 P_{i+1}, in der
/// Reihenfolge [Q_0, R_0, Q_1, R_1, ...]; die letzte Kante laeuft zurueck
/// zum ersten Punkt. Stufe 0 liefert die Eingabe unveraendert.
///
/// Die Punktzahl verdoppelt sich pro Stufe; der Aufrufer haelt `level`
/// klein. Polygone mit weniger als 3 Punkten werden unveraendert
/// zurueckgegeben.
pub fn chaikin_refine(points: &[DVec3], level: usize) -> Vec<DVec3> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut current = points.to_vec();
    for _ in 0..level {
        let mut next = Vec::with_capacity(current.len() * 2);
        for i in 0..current.len() {
            let a = current[i];
            let b = current[(i + 1) % current.len()];
            next.push(cut_corner(a, b));
            next.push(cut_corner(b, a));
        }
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<DVec3> {
        vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_level_zero_is_identity() {
        let square = unit_square();
        assert_eq!(chaikin_refine(&square, 0), square);
    }

    #[test]
    fn test_point_count_doubles_per_level() {
        let square = unit_square();
        for level in 0..=5 {
            let refined = chaikin_refine(&square, level);
            assert_eq!(refined.len(), square.len() * (1 << level));
        }
    }

    #[test]
    fn test_unit_square_level_one() {
        let refined = chaikin_refine(&unit_square(), 1);
        assert_eq!(refined.len(), 8);
        // Erste Kante (0,0)->(1,0): Q mit Gewicht 3/4 auf dem ersten Punkt,
        // R mit Gewicht 3/4 auf dem zweiten
        assert_eq!(refined[0], DVec3::new(0.25, 0.0, 0.0));
        assert_eq!(refined[1], DVec3::new(0.75, 0.0, 0.0));
        // Letzte Kante laeuft vom letzten Punkt zurueck zum ersten
        assert_eq!(refined[6], DVec3::new(0.0, 0.75, 0.0));
        assert_eq!(refined[7], DVec3::new(0.0, 0.25, 0.0));
    }

    #[test]
    fn test_refined_points_stay_in_hull() {
        let refined = chaikin_refine(&unit_square(), 3);
        for point in refined {
            assert!((0.0..=1.0).contains(&point.x));
            assert!((0.0..=1.0).contains(&point.y));
            assert_eq!(point.z, 0.0);
        }
    }

    #[test]
    fn test_degenerate_polygon_is_unchanged() {
        let two_points = vec![DVec3::ZERO, DVec3::ONE];
        assert_eq!(chaikin_refine(&two_points, 3), two_points);
        assert!(chaikin_refine(&[], 2).is_empty());
    }
}
