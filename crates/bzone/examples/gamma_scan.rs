//! Distances ΓY, ΓB, ΓA while γ sweeps from 30° to 150° at fixed a, b.
//!
//! Shows where the first-three-vertex labels jump: the sorted polygon's
//! starting vertex changes as the zone rotates and reshapes, so the curves
//! are piecewise continuous rather than smooth.

use bzone::{compute_brillouin_zone, BzError};

fn main() {
    let (a, b) = (1.0, 1.4);
    println!(
        "{:>7} {:>6} {:>9} {:>9} {:>9} {:>10}",
        "gamma", "verts", "GY", "GB", "GA", "bz_area"
    );
    for step in 0..=24 {
        let gamma = 30.0 + 5.0 * step as f64;
        match compute_brillouin_zone(a, b, gamma, 4) {
            Ok(r) => println!(
                "{:>7.1} {:>6} {:>9.4} {:>9.4} {:>9.4} {:>10.4}",
                gamma,
                r.bz_polygon.len(),
                r.dist_gy(),
                r.dist_gb(),
                r.dist_ga(),
                r.bz_area
            ),
            Err(BzError::UnboundedCell { .. }) => println!("{gamma:>7.1} window too small at R=4"),
            Err(e) => println!("{gamma:>7.1} error: {e}"),
        }
    }
}
