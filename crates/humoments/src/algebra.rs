//! Sparse bivariate polynomials over f64.
//!
//! Purpose
//! - Symbolic substrate for boundary-moment integration: build `(a·x + b·y)^n`
//!   expansions, multiply them, and integrate in x with a closed form.
//!
//! Model
//! - Terms live in a small contiguous `Vec`, one entry per exponent pair;
//!   coefficients for an existing pair accumulate. At the handful-of-terms
//!   sizes the moment engine produces, a linear scan beats a hash map.
//! - No simplification beyond merging equal exponent pairs; net-zero
//!   coefficients are kept and simply contribute nothing downstream.

use std::fmt;

/// Largest exponent accepted by the construction API.
///
/// Moments up to order 7 combined with centering terms stay within this bound.
pub const MAX_EXPONENT: u32 = 10;

/// Errors surfaced by polynomial construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgebraError {
    /// An exponent passed to the construction API exceeds [`MAX_EXPONENT`].
    ExponentOutOfRange { power: u32 },
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraError::ExponentOutOfRange { power } => write!(
                f,
                "exponent {} exceeds the supported range [0, {}]",
                power, MAX_EXPONENT
            ),
        }
    }
}

impl std::error::Error for AlgebraError {}

#[derive(Clone, Copy, Debug)]
struct Term {
    coef: f64,
    pow_x: u32,
    pow_y: u32,
}

/// Polynomial `Σ c_{p,q} x^p y^q` with unique exponent pairs.
#[derive(Clone, Debug, Default)]
pub struct BiPoly {
    terms: Vec<Term>,
}

impl BiPoly {
    /// Empty polynomial (evaluates to exactly 0).
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Accumulate `coef` into the `(power_x, power_y)` entry.
    ///
    /// Returns `&mut Self` so term additions chain fluently with `?`.
    pub fn add_term(
        &mut self,
        coef: f64,
        power_x: u32,
        power_y: u32,
    ) -> Result<&mut Self, AlgebraError> {
        for power in [power_x, power_y] {
            if power > MAX_EXPONENT {
                return Err(AlgebraError::ExponentOutOfRange { power });
            }
        }
        self.accumulate(coef, power_x, power_y);
        Ok(self)
    }

    fn accumulate(&mut self, coef: f64, pow_x: u32, pow_y: u32) {
        if let Some(term) = self
            .terms
            .iter_mut()
            .find(|t| t.pow_x == pow_x && t.pow_y == pow_y)
        {
            term.coef += coef;
        } else {
            self.terms.push(Term { coef, pow_x, pow_y });
        }
    }

    /// Term-map convolution of the two operands. Commutative, associative,
    /// leaves both operands unchanged.
    pub fn multiply(&self, other: &BiPoly) -> BiPoly {
        let mut result = BiPoly::new();
        for a in &self.terms {
            for b in &other.terms {
                result.accumulate(a.coef * b.coef, a.pow_x + b.pow_x, a.pow_y + b.pow_y);
            }
        }
        result
    }

    /// `Σ c·x^p·y^q` over all terms; exactly 0.0 for an empty polynomial.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.terms
            .iter()
            .map(|t| t.coef * x.powi(t.pow_x as i32) * y.powi(t.pow_y as i32))
            .sum()
    }

    /// `(x_coef·x + y_coef·y)^power` expanded by the binomial theorem:
    /// term `(power−k, k)` gets `C(power,k)·x_coef^(power−k)·y_coef^k`.
    pub fn binomial_expansion(
        x_coef: f64,
        y_coef: f64,
        power: u32,
    ) -> Result<BiPoly, AlgebraError> {
        if power > MAX_EXPONENT {
            return Err(AlgebraError::ExponentOutOfRange { power });
        }
        let mut poly = BiPoly::new();
        for k in 0..=power {
            let coef = binomial(power, k)
                * x_coef.powi((power - k) as i32)
                * y_coef.powi(k as i32);
            poly.accumulate(coef, power - k, k);
        }
        Ok(poly)
    }

    /// Indefinite integral in x, term by term: `(p,q,c) → (p+1, q, c/(p+1))`.
    ///
    /// Unchecked against the construction bound: products of bounded operands
    /// can carry exponents past it transiently and must stay integrable.
    pub fn integrate_x(&self) -> BiPoly {
        let terms = self
            .terms
            .iter()
            .map(|t| Term {
                coef: t.coef / (t.pow_x as f64 + 1.0),
                pow_x: t.pow_x + 1,
                pow_y: t.pow_y,
            })
            .collect();
        BiPoly { terms }
    }

    /// `∫_{x_begin}^{x_end} self dx` with y held at `y_value`.
    pub fn definite_integral_x(&self, x_begin: f64, x_end: f64, y_value: f64) -> f64 {
        let integral = self.integrate_x();
        integral.evaluate(x_end, y_value) - integral.evaluate(x_begin, y_value)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

/// Binomial coefficient C(n, k) in multiplicative form; exact in f64 for the
/// small n this crate uses.
fn binomial(n: u32, k: u32) -> f64 {
    let k = k.min(n - k);
    let mut acc = 1.0;
    for i in 0..k {
        acc = acc * ((n - i) as f64) / ((i + 1) as f64);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn from_terms(terms: &[(f64, u32, u32)]) -> BiPoly {
        let mut poly = BiPoly::new();
        for &(coef, px, py) in terms {
            poly.add_term(coef, px, py).unwrap();
        }
        poly
    }

    fn reference_eval(terms: &[(f64, u32, u32)], x: f64, y: f64) -> f64 {
        terms
            .iter()
            .map(|&(coef, px, py)| coef * x.powi(px as i32) * y.powi(py as i32))
            .sum()
    }

    fn assert_close(a: f64, b: f64) {
        let scale = 1.0_f64.max(a.abs()).max(b.abs());
        assert!((a - b).abs() <= 1e-9 * scale, "a={a} b={b}");
    }

    const FIXTURES: [&[(f64, u32, u32)]; 4] = [
        &[(6.0, 2, 2), (-0.5, 0, 3), (7.6, 4, 0)],
        &[(5.0, 6, 3), (-77.0, 4, 0), (9.11, 3, 8)],
        &[(-176.0, 8, 3), (11.0, 1, 3), (9999.0, 0, 0), (77.0, 1, 9)],
        &[(-435.0, 0, 6), (0.0, 0, 0), (878.0, 1, 1)],
    ];

    const SAMPLE_POINTS: [(f64, f64); 3] = [(1.2, 34.0), (-17.0, 0.1), (123.6, -7.9)];

    #[test]
    fn evaluate_matches_reference_sum() {
        for terms in FIXTURES {
            let poly = from_terms(terms);
            for (x, y) in SAMPLE_POINTS {
                assert_close(poly.evaluate(x, y), reference_eval(terms, x, y));
            }
        }
    }

    #[test]
    fn multiply_matches_pointwise_product() {
        for lhs in FIXTURES {
            for rhs in FIXTURES {
                let product = from_terms(lhs).multiply(&from_terms(rhs));
                for (x, y) in SAMPLE_POINTS {
                    assert_close(
                        product.evaluate(x, y),
                        reference_eval(lhs, x, y) * reference_eval(rhs, x, y),
                    );
                }
            }
        }
    }

    #[test]
    fn multiply_leaves_operands_unchanged() {
        let lhs = from_terms(FIXTURES[0]);
        let rhs = from_terms(FIXTURES[1]);
        let _ = lhs.multiply(&rhs);
        assert_eq!(lhs.term_count(), FIXTURES[0].len());
        assert_eq!(rhs.term_count(), FIXTURES[1].len());
    }

    #[test]
    fn equal_exponent_pairs_accumulate() {
        let mut poly = BiPoly::new();
        poly.add_term(1.5, 2, 3)
            .unwrap()
            .add_term(-0.5, 2, 3)
            .unwrap();
        assert_eq!(poly.term_count(), 1);
        assert_close(poly.evaluate(2.0, 1.0), 1.0 * 4.0);
    }

    #[test]
    fn empty_polynomial_evaluates_to_zero() {
        let poly = BiPoly::new();
        assert_eq!(poly.evaluate(123.4, -5.6), 0.0);
        assert!(poly.is_empty());
    }

    #[test]
    fn binomial_expansion_matches_direct_power() {
        let poly = BiPoly::binomial_expansion(1.1, 2.0, 2).unwrap();
        let (x, y) = (1.0, 3.0);
        assert_close(poly.evaluate(x, y), (1.1 * x + 2.0 * y).powi(2));
        assert_eq!(poly.term_count(), 3);
    }

    #[test]
    fn binomial_expansion_power_zero_is_constant_one() {
        let poly = BiPoly::binomial_expansion(4.2, -1.0, 0).unwrap();
        assert_eq!(poly.evaluate(7.0, -3.0), 1.0);
    }

    #[test]
    fn definite_integral_matches_closed_form() {
        // 4.7·x^7 + 3.3·x·y^2 integrates to 4.7·x^8/8 + 3.3·x^2/2·y^2.
        let poly = from_terms(&[(4.7, 7, 0), (3.3, 1, 2)]);
        let antiderivative = |x: f64, y: f64| 4.7 * x.powi(8) / 8.0 + 3.3 * x * x / 2.0 * y * y;
        let got = poly.definite_integral_x(56.6, 100.3, 11.2);
        assert_close(got, antiderivative(100.3, 11.2) - antiderivative(56.6, 11.2));
    }

    #[test]
    fn edge_product_integral_matches_closed_form() {
        // (2 − t/√2)·(2 − t/√2) integrated over t ∈ [0, √2] is 7√2/3.
        let sqrt2 = std::f64::consts::SQRT_2;
        let x_of_t = from_terms(&[(2.0, 0, 0), (-1.0 / sqrt2, 1, 0)]);
        let y_of_t = from_terms(&[(2.0, 0, 0), (-1.0 / sqrt2, 1, 0)]);
        let got = x_of_t.multiply(&y_of_t).definite_integral_x(0.0, sqrt2, 0.0);
        assert_close(got, 7.0 * sqrt2 / 3.0);
    }

    #[test]
    fn out_of_range_exponents_are_rejected() {
        let mut poly = BiPoly::new();
        assert_eq!(
            poly.add_term(1.0, 11, 0).unwrap_err(),
            AlgebraError::ExponentOutOfRange { power: 11 }
        );
        assert_eq!(
            poly.add_term(1.0, 0, 12).unwrap_err(),
            AlgebraError::ExponentOutOfRange { power: 12 }
        );
        assert_eq!(
            BiPoly::binomial_expansion(1.0, 1.0, 11).unwrap_err(),
            AlgebraError::ExponentOutOfRange { power: 11 }
        );
    }

    #[test]
    fn integrate_x_accepts_exponents_past_the_construction_bound() {
        // x^10 · x^10 = x^20 comes out of multiply; integration must accept it.
        let mut base = BiPoly::new();
        base.add_term(2.0, 10, 0).unwrap();
        let squared = base.multiply(&base);
        let integral = squared.integrate_x();
        assert_close(integral.evaluate(1.0, 1.0), 4.0 / 21.0);
    }

    fn term_vec() -> impl Strategy<Value = Vec<(f64, u32, u32)>> {
        prop::collection::vec((-10.0f64..10.0, 0u32..=5, 0u32..=5), 0..6)
    }

    proptest! {
        #[test]
        fn prop_multiply_is_a_pointwise_product(
            lhs in term_vec(),
            rhs in term_vec(),
            x in -3.0f64..3.0,
            y in -3.0f64..3.0,
        ) {
            let product = from_terms(&lhs).multiply(&from_terms(rhs.as_slice()));
            let expected = reference_eval(&lhs, x, y) * reference_eval(&rhs, x, y);
            let got = product.evaluate(x, y);
            let scale = 1.0_f64.max(expected.abs()).max(got.abs());
            prop_assert!((got - expected).abs() <= 1e-9 * scale);
        }

        #[test]
        fn prop_binomial_expansion_matches_direct_power(
            a in -3.0f64..3.0,
            b in -3.0f64..3.0,
            n in 0u32..=6,
            x in -3.0f64..3.0,
            y in -3.0f64..3.0,
        ) {
            let poly = BiPoly::binomial_expansion(a, b, n).unwrap();
            let expected = (a * x + b * y).powi(n as i32);
            let got = poly.evaluate(x, y);
            // Cancellation bound: terms are at most (|ax|+|by|)^n in magnitude.
            let scale = 1.0 + (a.abs() * x.abs() + b.abs() * y.abs()).powi(n as i32);
            prop_assert!((got - expected).abs() <= 1e-9 * scale);
        }

        #[test]
        fn prop_definite_integral_of_monomial(
            c in -10.0f64..10.0,
            n in 0u32..=6,
            a in -3.0f64..3.0,
            b in -3.0f64..3.0,
        ) {
            let mut poly = BiPoly::new();
            poly.add_term(c, n, 0).unwrap();
            let expected = c / (n as f64 + 1.0)
                * (b.powi(n as i32 + 1) - a.powi(n as i32 + 1));
            let got = poly.definite_integral_x(a, b, 42.0);
            let scale = 1.0_f64.max(expected.abs());
            prop_assert!((got - expected).abs() <= 1e-9 * scale);
        }
    }
}
