//! Reine Geometrie-Funktionen fuer Bezier- und Hermite-Kurven.
//!
//! Layer-neutral: wird vom Szenenaufbau in `app` und von Tests importiert,
//! ohne Zirkel-Abhaengigkeiten zu erzeugen.

use glam::DVec3;

use crate::core::{CurveError, FactorialTable};

/// Parameterwerte fuer `amount_samples` Zwischenpunkte auf [0, 1].
///
/// Es entstehen immer `amount_samples + 2` Werte: beide Endpunkte kommen
/// zusaetzlich zu den angeforderten Zwischenpunkten mit.
fn sample_parameters(amount_samples: usize) -> impl Iterator<Item = f64> {
    let amount = amount_samples + 2;
    (0..amount).map(move |i| i as f64 / (amount - 1) as f64)
}

/// Bernstein-Gewicht B_{n,i}(u) = C(n,i) * u^i * (1-u)^(n-i).
fn bernstein_weight(
    factorials: &FactorialTable,
    n: usize,
    i: usize,
    u: f64,
) -> Result<f64, CurveError> {
    Ok(factorials.binomial(n, i)? * u.powi(i as i32) * (1.0 - u).powi((n - i) as i32))
}

/// Punkt auf der Bezier-Kurve (Bernstein-Form) zum Parameter u.
pub fn bernstein_point(
    factorials: &FactorialTable,
    control_points: &[DVec3],
    u: f64,
) -> Result<DVec3, CurveError> {
    if control_points.is_empty() {
        return Err(CurveError::EmptyControlSet);
    }

    let degree = control_points.len() - 1;
    let mut result = DVec3::ZERO;
    for (i, point) in control_points.iter().enumerate() {
        result += *point * bernstein_weight(factorials, degree, i, u)?;
    }
    Ok(result)
}

/// Tastet die Bezier-Kurve (Bernstein) mit `amount_samples + 2` Punkten ab.
pub fn bernstein_curve(
    factorials: &FactorialTable,
    control_points: &[DVec3],
    amount_samples: usize,
) -> Result<Vec<DVec3>, CurveError> {
    sample_parameters(amount_samples)
        .map(|u| bernstein_point(factorials, control_points, u))
        .collect()
}

/// Punkt auf der Bezier-Kurve (de Casteljau) zum Parameter u.
///
/// Iteratives Dreiecksschema: pro Stufe wird zwischen benachbarten Punkten
/// affin interpoliert, bis ein Punkt uebrig bleibt. Numerisch aequivalent
/// zur Bernstein-Form, ohne Fakultaeten und ohne Rekursion.
pub fn casteljau_point(control_points: &[DVec3], u: f64) -> Result<DVec3, CurveError> {
    if control_points.is_empty() {
        return Err(CurveError::EmptyControlSet);
    }

    let mut level: Vec<DVec3> = control_points.to_vec();
    while level.len() > 1 {
        for i in 0..level.len() - 1 {
            level[i] = level[i] * (1.0 - u) + level[i + 1] * u;
        }
        level.pop();
    }
    Ok(level[0])
}

/// Tastet die Bezier-Kurve (de Casteljau) mit `amount_samples + 2` Punkten ab.
pub fn casteljau_curve(
    control_points: &[DVec3],
    amount_samples: usize,
) -> Result<Vec<DVec3>, CurveError> {
    sample_parameters(amount_samples)
        .map(|u| casteljau_point(control_points, u))
        .collect()
}

/// Punkt auf der kubischen Hermite-Kurve zwischen p1 und p2.
///
/// v1/v2 sind die Tangenten an den Endpunkten; ihre Laenge geht in die
/// Kurvenform ein, es wird nicht normalisiert.
pub fn hermite_point(p1: DVec3, p2: DVec3, v1: DVec3, v2: DVec3, u: f64) -> DVec3 {
    let u2 = u * u;
    let u3 = u2 * u;

    // Standard-Hermite-Basispolynome
    let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
    let h01 = -2.0 * u3 + 3.0 * u2;
    let h10 = u3 - 2.0 * u2 + u;
    let h11 = u3 - u2;

    p1 * h00 + p2 * h01 + v1 * h10 + v2 * h11
}

/// Tastet die Hermite-Kurve mit `amount_samples + 2` Punkten ab.
pub fn hermite_curve(
    p1: DVec3,
    p2: DVec3,
    v1: DVec3,
    v2: DVec3,
    amount_samples: usize,
) -> Vec<DVec3> {
    sample_parameters(amount_samples)
        .map(|u| hermite_point(p1, p2, v1, v2, u))
        .collect()
}
