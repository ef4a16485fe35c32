//! Boundary-integral shape descriptors for closed 2D polygons.
//!
//! Purpose
//! - Compute raw, central, and scale-normalized geometric moments plus the
//!   seven classical Hu invariants directly from a polygon's boundary rings,
//!   without rasterizing the shape.
//! - Each moment reduces to a sum of per-edge closed-form integrals of a
//!   bivariate polynomial built by binomial expansion; `algebra` is the
//!   symbolic substrate, `contour` is the engine on top of it.

pub mod algebra;
pub mod contour;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so callers match the module-internal notation.
pub use contour::{ContourMoments, Hu5, MomentCfg, MomentError, Polygon, Ring, Vec2};
pub use nalgebra::Matrix2 as Mat2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algebra::{AlgebraError, BiPoly};
    pub use crate::contour::rand::{
        draw_polygon_radial, draw_ring_radial, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::contour::{
        Aff2, ContourMoments, Edge, Hu5, MomentCfg, MomentError, Polygon, Ring, Vec2,
    };
}
