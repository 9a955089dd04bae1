use nalgebra::Vector2;

/// `atan2` angle of `p` seen from `center`, in (−π, π].
#[inline]
pub fn angle_about(p: Vector2<f64>, center: Vector2<f64>) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}

/// Stable ascending sort by angle about `center`; equal angles keep input order.
pub fn sort_by_angle(points: &mut [Vector2<f64>], center: Vector2<f64>) {
    points.sort_by(|a, b| angle_about(*a, center).total_cmp(&angle_about(*b, center)));
}

/// Shoelace signed area; positive for counterclockwise order.
pub fn polygon_area(poly: &[Vector2<f64>]) -> f64 {
    let m = poly.len();
    if m < 3 {
        return 0.0;
    }
    let twice: f64 = (0..m)
        .map(|k| {
            let p = poly[k];
            let q = poly[(k + 1) % m];
            p.x * q.y - p.y * q.x
        })
        .sum();
    0.5 * twice
}

/// Drop consecutive points closer than `tol`, including the last→first pair.
pub fn dedup_cyclic(points: &mut Vec<Vector2<f64>>, tol: f64) {
    points.dedup_by(|a, b| (*a - *b).norm() <= tol);
    while points.len() > 1 {
        let (first, last) = (points[0], points[points.len() - 1]);
        if (first - last).norm() <= tol {
            points.pop();
        } else {
            break;
        }
    }
}
