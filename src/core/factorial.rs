//! Vorausberechnete Fakultaeten fuer Bernstein-Gewichte.

use super::CurveError;

/// Array-gestuetzte Fakultaeten-Tabelle (0! bis max_n!).
///
/// Wird einmal beim Start aufgebaut und nie invalidiert; Fakultaeten sind
/// eingabeunabhaengig. Anfragen jenseits der Grenze liefern einen Fehler
/// statt ausserhalb des Arrays zu lesen.
#[derive(Debug, Clone)]
pub struct FactorialTable {
    values: Vec<f64>,
}

impl FactorialTable {
    /// Baut die Tabelle fuer 0..=max_n auf.
    pub fn new(max_n: usize) -> Self {
        let mut values = Vec::with_capacity(max_n + 1);
        values.push(1.0);
        for n in 1..=max_n {
            let previous = values[n - 1];
            values.push(previous * n as f64);
        }
        Self { values }
    }

    /// Groesstes n, das die Tabelle abdeckt.
    pub fn max_n(&self) -> usize {
        self.values.len() - 1
    }

    /// n! oder Fehler, wenn n ausserhalb der Tabelle liegt.
    pub fn factorial(&self, n: usize) -> Result<f64, CurveError> {
        self.values
            .get(n)
            .copied()
            .ok_or(CurveError::DegreeExceedsFactorialBound {
                degree: n,
                max: self.max_n(),
            })
    }

    /// Binomialkoeffizient C(n, k) = n! / (k! * (n-k)!).
    ///
    /// Setzt k <= n voraus.
    pub fn binomial(&self, n: usize, k: usize) -> Result<f64, CurveError> {
        debug_assert!(k <= n);
        Ok(self.factorial(n)? / (self.factorial(k)? * self.factorial(n - k)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_values() {
        let table = FactorialTable::new(10);
        assert_eq!(table.factorial(0).expect("0! erwartet"), 1.0);
        assert_eq!(table.factorial(1).expect("1! erwartet"), 1.0);
        assert_eq!(table.factorial(5).expect("5! erwartet"), 120.0);
        assert_eq!(table.factorial(10).expect("10! erwartet"), 3_628_800.0);
    }

    #[test]
    fn test_factorial_out_of_range_is_error() {
        let table = FactorialTable::new(10);
        assert_eq!(
            table.factorial(11),
            Err(CurveError::DegreeExceedsFactorialBound {
                degree: 11,
                max: 10
            })
        );
    }

    #[test]
    fn test_binomial_coefficients() {
        let table = FactorialTable::new(10);
        assert_eq!(table.binomial(4, 2).expect("C(4,2) erwartet"), 6.0);
        assert_eq!(table.binomial(3, 0).expect("C(3,0) erwartet"), 1.0);
        assert_eq!(table.binomial(3, 3).expect("C(3,3) erwartet"), 1.0);
        assert_eq!(table.binomial(6, 1).expect("C(6,1) erwartet"), 6.0);
    }
}
