//! Similarity-transform fixtures for polygons.
//!
//! Purpose
//! - Build shift, rotation-about-a-point, and uniform-scale maps, compose
//!   them, and push them through polygon rings vertex-wise. The moment engine
//!   exposes no transforms of its own; these exist for invariance tests and
//!   demos.

use nalgebra::Matrix2;

use super::types::{Polygon, Ring, Vec2};

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug)]
pub struct Aff2 {
    pub m: Matrix2<f64>,
    pub t: Vec2,
}

impl Aff2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vec2::zeros(),
        }
    }

    /// Pure translation by `s`.
    #[inline]
    pub fn shift(s: Vec2) -> Self {
        Self {
            m: Matrix2::identity(),
            t: s,
        }
    }

    /// Rotation by `angle` radians about `origin`.
    pub fn rotation_about(origin: Vec2, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let m = Matrix2::new(cos, -sin, sin, cos);
        Self {
            m,
            t: origin - m * origin,
        }
    }

    /// Uniform scale by `factor` about `origin`.
    pub fn scale_about(origin: Vec2, factor: f64) -> Self {
        let m = Matrix2::identity() * factor;
        Self {
            m,
            t: origin - m * origin,
        }
    }

    /// `self ∘ other`: `other` applies first.
    #[inline]
    pub fn compose(&self, other: &Aff2) -> Aff2 {
        Aff2 {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        self.m * p + self.t
    }

    /// Map every ring vertex, preserving ring structure and winding.
    pub fn push_forward(&self, polygon: &Polygon) -> Polygon {
        let map_ring =
            |ring: &Ring| Ring::new(ring.points.iter().map(|&p| self.apply(p)).collect());
        Polygon {
            outer: map_ring(&polygon.outer),
            holes: polygon.holes.iter().map(map_ring).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).norm() < 1e-12
    }

    #[test]
    fn shift_translates_points() {
        let f = Aff2::shift(Vec2::new(2.0, -3.0));
        assert!(close(f.apply(Vec2::new(1.0, 1.0)), Vec2::new(3.0, -2.0)));
    }

    #[test]
    fn rotation_fixes_its_origin() {
        let origin = Vec2::new(1.5, -0.5);
        let f = Aff2::rotation_about(origin, 1.234);
        assert!(close(f.apply(origin), origin));
        // A quarter turn about the origin sends e_x to e_y.
        let q = Aff2::rotation_about(Vec2::zeros(), std::f64::consts::FRAC_PI_2);
        assert!(close(q.apply(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn scale_fixes_its_origin() {
        let origin = Vec2::new(-2.0, 4.0);
        let f = Aff2::scale_about(origin, 3.3);
        assert!(close(f.apply(origin), origin));
        assert!(close(
            f.apply(origin + Vec2::new(1.0, 0.0)),
            origin + Vec2::new(3.3, 0.0)
        ));
    }

    #[test]
    fn compose_applies_right_operand_first() {
        let shift = Aff2::shift(Vec2::new(1.0, 0.0));
        let rotate = Aff2::rotation_about(Vec2::zeros(), std::f64::consts::FRAC_PI_2);
        // Rotate-then-shift moves e_x to e_y + (1, 0).
        let f = shift.compose(&rotate);
        assert!(close(f.apply(Vec2::new(1.0, 0.0)), Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn push_forward_keeps_ring_structure() {
        let polygon = Polygon::with_holes(
            Ring::from_coords(&[[-2.0, -2.0], [2.0, -2.0], [2.0, 2.0], [-2.0, 2.0]]),
            vec![Ring::from_coords(&[
                [-1.0, -1.0],
                [-1.0, 1.0],
                [1.0, 1.0],
                [1.0, -1.0],
            ])],
        );
        let moved = Aff2::shift(Vec2::new(10.0, 0.0)).push_forward(&polygon);
        assert_eq!(moved.holes.len(), 1);
        assert!(close(moved.outer.points[0], Vec2::new(8.0, -2.0)));
        assert!(close(moved.holes[0].points[0], Vec2::new(9.0, -1.0)));
    }
}
