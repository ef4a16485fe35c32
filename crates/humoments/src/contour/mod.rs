//! Contour moments and Hu invariants for polygon boundaries.
//!
//! Purpose
//! - `types`: rings, polygons, derived edges, and tolerances.
//! - `moments`: the engine assembling raw/central/scale-normalized moments
//!   and the seven Hu combinations from per-edge polynomial integrals.
//! - `transform` / `rand`: similarity maps and deterministic random polygons,
//!   fixture support for tests, benches, and demos.

pub mod moments;
pub mod rand;
pub mod transform;
pub mod types;

pub use moments::{ContourMoments, Hu5, MomentError, MAX_MOMENT_ORDER};
pub use transform::Aff2;
pub use types::{Edge, MomentCfg, Polygon, Ring, Vec2};
