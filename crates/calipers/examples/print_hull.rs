//! Console demo: hulls and best rectangles for a few small point sets.
//!
//! Purpose
//! - Quick eyeball check of the pipeline without the CLI: prints each hull in
//!   both builders and the best rectangle under every criterion.
//!
//! Run: `cargo run -p calipers --example print_hull`

use calipers::api::{
    best_oriented_rectangle, convex_hull, fixture_polygon, Criterion, HullAlgo, OrientedRectangle,
};
use calipers::Vec2;

fn fmt_points(points: &[Vec2]) -> String {
    let parts: Vec<String> = points.iter().map(|p| format!("({}, {})", p.x, p.y)).collect();
    format!("[{}]", parts.join(", "))
}

fn fmt_rect(r: &OrientedRectangle) -> String {
    let parts: Vec<String> = r
        .vertices()
        .iter()
        .map(|p| format!("({:.3}, {:.3})", p.x, p.y))
        .collect();
    format!(
        "[{}] area={:.4} ratio={:.4}",
        parts.join(", "),
        r.area(),
        r.ratio()
    )
}

fn main() {
    let sets: [(&str, Vec<Vec2>); 3] = [
        (
            "square",
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ],
        ),
        (
            "triangle",
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
            ],
        ),
        ("fixture", fixture_polygon()),
    ];
    for (name, points) in &sets {
        println!("{name}");
        for algo in [HullAlgo::Quick, HullAlgo::AngleScan] {
            println!("  {algo:?}: {}", fmt_points(&convex_hull(points, algo)));
        }
        let hull = convex_hull(points, HullAlgo::Quick);
        for c in Criterion::ALL {
            if let Some(r) = best_oriented_rectangle(&hull, c.predicate()) {
                println!("  {:<13} {}", c.name(), fmt_rect(&r));
            }
        }
    }
}
