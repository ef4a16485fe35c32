use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use humoments::contour::transform::Aff2;
use humoments::{ContourMoments, Polygon, Ring, Vec2};

mod descriptors;

use descriptors::{describe, write_json, DescriptorRecord, PolygonInput};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Batch driver for contour shape descriptors")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute m00 and the seven Hu invariants for each polygon in a JSON array
    Compute {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Print the square-annulus centroid walkthrough as JSON
    Demo,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Compute { input, out } => compute(input, out),
        Action::Demo => demo(),
    }
}

fn compute(input: String, out: String) -> Result<()> {
    tracing::info!(input, out, "compute");
    let raw = std::fs::read_to_string(&input).with_context(|| format!("reading {input}"))?;
    let polygons: Vec<PolygonInput> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {input}"))?;

    let mut records = Vec::with_capacity(polygons.len());
    let mut failures = 0usize;
    for (index, polygon) in polygons.iter().enumerate() {
        // One bad polygon must not abort its siblings.
        match describe(polygon) {
            Ok((m00, hu)) => records.push(DescriptorRecord::ok(index, m00, hu)),
            Err(err) => {
                failures += 1;
                tracing::warn!(index, error = %err, "polygon skipped");
                records.push(DescriptorRecord::failed(index, err.to_string()));
            }
        }
    }

    write_json(Path::new(&out), &records)?;
    tracing::info!(count = records.len(), failures, out, "descriptors_written");
    Ok(())
}

fn demo() -> Result<()> {
    let annulus = square_annulus();
    let stages = [
        ("base", annulus.clone()),
        (
            "shifted",
            Aff2::shift(Vec2::new(2.0, 44.7)).push_forward(&annulus),
        ),
        (
            "rotated_35deg",
            Aff2::rotation_about(Vec2::zeros(), 35.0_f64.to_radians()).push_forward(&annulus),
        ),
        (
            "scaled_3.3",
            Aff2::scale_about(Vec2::zeros(), 3.3).push_forward(&annulus),
        ),
    ];

    let mut report = Vec::with_capacity(stages.len());
    for (label, polygon) in &stages {
        let moments = ContourMoments::new(polygon)?;
        let m00 = moments.compute(0, 0, false, false)?;
        let m10 = moments.compute(1, 0, false, false)?;
        let m01 = moments.compute(0, 1, false, false)?;
        report.push(serde_json::json!({
            "stage": label,
            "m00": m00,
            "centroid": [m10 / m00, m01 / m00],
        }));
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
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
