//! Classify a fan of points around a fixed segment and time the sweep.
//!
//! Purpose
//! - Show the seven outcomes of `orientation_2d` on one picture: points on a
//!   circle (Left/Right), on the supporting line (Behind/Beyond/Between) and
//!   on the endpoints (Origin/Destination).

use std::collections::BTreeMap;
use std::time::Instant;

use geoprim::prelude::*;

fn main() {
    let a = Point2d::xy(0.0, 0.0);
    let b = Point2d::xy(2.0, 0.0);

    let mut queries: Vec<Point2d> = (0..16)
        .map(|k| {
            let th = std::f64::consts::TAU * (k as f64) / 16.0 + 0.1;
            Point2d::xy(1.0 + 3.0 * th.cos(), 3.0 * th.sin())
        })
        .collect();
    queries.extend([-1.0, 0.0, 1.0, 2.0, 3.0].map(|x| Point2d::xy(x, 0.0)));

    let start = Instant::now();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for c in &queries {
        let label = c.to_string();
        match orientation_2d(a, b, *c) {
            Ok(pos) => {
                println!("{label:>44} -> {pos} (area {:+.3})", area_triangle_2d(a, b, *c));
                *counts.entry(pos.to_string()).or_default() += 1;
            }
            Err(err) => println!("{label:>44} -> error: {err}"),
        }
    }
    let elapsed_us = start.elapsed().as_secs_f64() * 1e6;

    println!("---");
    for (name, n) in &counts {
        println!("{name:>12}: {n}");
    }
    println!("{} queries in {elapsed_us:.1} µs", queries.len());
}
