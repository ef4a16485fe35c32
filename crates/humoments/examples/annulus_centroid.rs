//! Square-annulus centroid walkthrough.
//!
//! Purpose
//! - Show the boundary-moment engine recovering a centroid from raw moments
//!   and tracking it through a shift, a rotation, and a uniform scale.

use humoments::contour::transform::Aff2;
use humoments::contour::types::{Polygon, Ring, Vec2};
use humoments::ContourMoments;

fn main() {
    let annulus = square_annulus();

    report("base", &annulus);
    report(
        "shifted_2.0_44.7",
        &Aff2::shift(Vec2::new(2.0, 44.7)).push_forward(&annulus),
    );
    report(
        "rotated_35deg",
        &Aff2::rotation_about(Vec2::zeros(), 35.0_f64.to_radians()).push_forward(&annulus),
    );
    report(
        "scaled_3.3",
        &Aff2::scale_about(Vec2::zeros(), 3.3).push_forward(&annulus),
    );
}

fn report(label: &str, polygon: &Polygon) {
    let moments = ContourMoments::new(polygon).expect("annulus has edges");
    let m00 = moments.compute(0, 0, false, false).expect("raw m00");
    let m10 = moments.compute(1, 0, false, false).expect("raw m10");
    let m01 = moments.compute(0, 1, false, false).expect("raw m01");
    println!(
        "{label} m00={m00:.6} centroid_x={:.6} centroid_y={:.6}",
        m10 / m00,
        m01 / m00
    );
}

fn square_annulus() -> Polygon {
    Polygon::with_holes(
        Ring::from_coords(&[
            [-2.0, -2.0],
            [2.0, -2.0],
            [2.0, 2.0],
            [-2.0, 2.0],
            [-2.0, -2.0],
        ]),
        vec![Ring::from_coords(&[
            [-1.0, -1.0],
            [-1.0, 1.0],
            [1.0, 1.0],
            [1.0, -1.0],
            [-1.0, -1.0],
        ])],
    )
}
