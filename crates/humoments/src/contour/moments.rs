//! Boundary moments and Hu invariants via per-edge polynomial integrals.
//!
//! Why this module exists
//! - Moments of a polygon boundary reduce to a sum of closed-form integrals,
//!   one per edge: parametrize the edge by arclength, expand `x(t)^i · y(t)^j`
//!   with the binomial theorem, and integrate the product polynomial over
//!   `[0, length]`. No rasterization, no quadrature.
//! - Centering and scale normalization are assembled on top of the same
//!   primitive, and the seven Hu combinations on top of those.
//!
//! References
//! - Hu, "Visual pattern recognition by moment invariants" (1962).

use std::fmt;

use crate::algebra::BiPoly;

use super::types::{same_point, Edge, MomentCfg, Polygon, Ring, Vec2};

/// Exclusive upper bound for moment orders and Hu indices.
pub const MAX_MOMENT_ORDER: u32 = 7;

/// Errors surfaced by the moment engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MomentError {
    /// A moment order lies outside `[0, MAX_MOMENT_ORDER)`.
    OrderOutOfRange { i: u32, j: u32 },
    /// A Hu invariant index lies outside `[0, MAX_MOMENT_ORDER)`.
    HuIndexOutOfRange { k: u32 },
    /// No non-degenerate edge survived boundary construction.
    EmptyBoundary,
    /// `|m00|` is at or below the configured threshold; centering and scale
    /// normalization would divide by it.
    DegenerateBoundary { m00: f64 },
}

impl fmt::Display for MomentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MomentError::OrderOutOfRange { i, j } => write!(
                f,
                "moment order ({}, {}) lies outside [0, {})",
                i, j, MAX_MOMENT_ORDER
            ),
            MomentError::HuIndexOutOfRange { k } => write!(
                f,
                "Hu invariant index {} lies outside [0, {})",
                k, MAX_MOMENT_ORDER
            ),
            MomentError::EmptyBoundary => {
                write!(f, "polygon has no edges with distinct endpoints")
            }
            MomentError::DegenerateBoundary { m00 } => write!(
                f,
                "boundary is degenerate (m00 = {:e}), cannot center or normalize",
                m00
            ),
        }
    }
}

impl std::error::Error for MomentError {}

/// Formula selection for the fifth Hu invariant.
///
/// The doubled form repeats the first product term where the standard form
/// adds the distinct second cross term. It matches observed behavior of a
/// deployed revision and stays selectable until that behavior is retired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Hu5 {
    /// Textbook combination with two distinct cross terms.
    #[default]
    Standard,
    /// First product term doubled in place of the second cross term.
    DoubledFirstTerm,
}

/// Boundary-moment engine for one polygon snapshot.
///
/// Construction captures the edge list (zero-length edges dropped eagerly,
/// ring winding inherited as-is); the engine is immutable afterwards. Raw
/// m00/m10/m01 are re-derived on every central computation.
#[derive(Clone, Debug)]
pub struct ContourMoments {
    edges: Vec<Edge>,
    cfg: MomentCfg,
}

impl ContourMoments {
    /// Build the engine with default tolerances.
    pub fn new(polygon: &Polygon) -> Result<Self, MomentError> {
        Self::with_cfg(polygon, MomentCfg::default())
    }

    /// Build the engine with explicit tolerances.
    pub fn with_cfg(polygon: &Polygon, cfg: MomentCfg) -> Result<Self, MomentError> {
        let mut edges = Vec::new();
        for ring in polygon.rings() {
            push_ring_edges(ring, &mut edges);
        }
        if edges.is_empty() {
            return Err(MomentError::EmptyBoundary);
        }
        Ok(Self { edges, cfg })
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The (i, j) raw or central, optionally scale-normalized, moment.
    ///
    /// `scale_inv` forces `central`: scale invariance is only meaningful
    /// relative to the centroid.
    pub fn compute(
        &self,
        i: u32,
        j: u32,
        central: bool,
        scale_inv: bool,
    ) -> Result<f64, MomentError> {
        if i >= MAX_MOMENT_ORDER || j >= MAX_MOMENT_ORDER {
            return Err(MomentError::OrderOutOfRange { i, j });
        }
        if !(central || scale_inv) {
            return self.boundary_integral(i, j, Vec2::zeros());
        }
        let m00 = self.boundary_integral(0, 0, Vec2::zeros())?;
        if m00.abs() <= self.cfg.eps_m00 {
            return Err(MomentError::DegenerateBoundary { m00 });
        }
        let m10 = self.boundary_integral(1, 0, Vec2::zeros())?;
        let m01 = self.boundary_integral(0, 1, Vec2::zeros())?;
        let offset = Vec2::new(-m10 / m00, -m01 / m00);
        let mu = self.boundary_integral(i, j, offset)?;
        if scale_inv {
            Ok(mu / m00.powi((i + j + 1) as i32))
        } else {
            Ok(mu)
        }
    }

    /// The k-th Hu invariant (0-based, standard fifth-invariant form).
    pub fn compute_hu(&self, k: u32, scale_inv: bool) -> Result<f64, MomentError> {
        self.hu_with(k, scale_inv, Hu5::Standard)
    }

    /// The k-th Hu invariant with an explicit fifth-invariant form.
    pub fn hu_with(&self, k: u32, scale_inv: bool, fifth: Hu5) -> Result<f64, MomentError> {
        let f = |p: u32, q: u32| self.compute(p, q, true, scale_inv);
        match k {
            0 => Ok(f(2, 0)? + f(0, 2)?),
            1 => {
                let d = f(2, 0)? - f(0, 2)?;
                let c = f(1, 1)?;
                Ok(d * d + 4.0 * c * c)
            }
            2 => {
                let a = f(3, 0)? - 3.0 * f(1, 2)?;
                let b = 3.0 * f(2, 1)? - f(0, 3)?;
                Ok(a * a + b * b)
            }
            3 => {
                let s = f(3, 0)? + f(1, 2)?;
                let t = f(2, 1)? + f(0, 3)?;
                Ok(s * s + t * t)
            }
            4 => {
                let (m30, m12, m21, m03) = (f(3, 0)?, f(1, 2)?, f(2, 1)?, f(0, 3)?);
                let s = m30 + m12;
                let t = m21 + m03;
                let first = (m30 - 3.0 * m12) * s * (s * s - 3.0 * t * t);
                let second = (3.0 * m21 - m03) * t * (3.0 * s * s - t * t);
                Ok(match fifth {
                    Hu5::Standard => first + second,
                    Hu5::DoubledFirstTerm => 2.0 * first,
                })
            }
            5 => {
                let s = f(3, 0)? + f(1, 2)?;
                let t = f(2, 1)? + f(0, 3)?;
                Ok((f(2, 0)? - f(0, 2)?) * (s * s - t * t) + 4.0 * f(1, 1)? * s * t)
            }
            6 => {
                let (m30, m12, m21, m03) = (f(3, 0)?, f(1, 2)?, f(2, 1)?, f(0, 3)?);
                let s = m30 + m12;
                let t = m21 + m03;
                Ok((3.0 * m21 - m03) * s * (s * s - 3.0 * t * t)
                    - (m30 - 3.0 * m12) * t * (3.0 * s * s - t * t))
            }
            _ => Err(MomentError::HuIndexOutOfRange { k }),
        }
    }

    /// Sum of per-edge integrals of `x^i · y^j` over arclength, with every
    /// edge origin shifted by `offset` (the negated centroid when centering).
    fn boundary_integral(&self, i: u32, j: u32, offset: Vec2) -> Result<f64, MomentError> {
        let mut total = 0.0;
        for edge in &self.edges {
            total += edge_integral(edge, i, j, offset)
                .ok_or(MomentError::OrderOutOfRange { i, j })?;
        }
        Ok(total)
    }
}

/// Closed-form integral of `x(t)^i · y(t)^j` over one edge.
///
/// Arclength parametrization: `x(t) = b1 + k1·t`, `y(t) = b2 + k2·t` for
/// `t ∈ [0, length]` with `(k1, k2)` the unit direction. The expansion
/// product is one-dimensional in `t`, so the held variable is fixed at 1.
fn edge_integral(edge: &Edge, i: u32, j: u32, offset: Vec2) -> Option<f64> {
    let length = edge.length();
    let direction = (edge.end - edge.start) / length;
    let base = edge.start + offset;
    let x_expansion = BiPoly::binomial_expansion(direction.x, base.x, i).ok()?;
    let y_expansion = BiPoly::binomial_expansion(direction.y, base.y, j).ok()?;
    Some(
        x_expansion
            .multiply(&y_expansion)
            .definite_integral_x(0.0, length, 1.0),
    )
}

fn push_ring_edges(ring: &Ring, edges: &mut Vec<Edge>) {
    let points = &ring.points;
    if points.len() < 2 {
        return;
    }
    for idx in 0..points.len() {
        let start = points[idx];
        let end = points[(idx + 1) % points.len()];
        if same_point(start, end) {
            continue;
        }
        edges.push(Edge { start, end });
    }
}
