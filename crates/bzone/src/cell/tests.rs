use super::*;
use crate::geom2::angle_about;
use crate::lattice::{compute_lattice, LatticeParameters};
use crate::sample::sample_grid;
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::PI;

fn reciprocal_samples(a: f64, b: f64, g: f64, r: u32) -> (Vec<Vec2<f64>>, f64) {
    let l = compute_lattice(&LatticeParameters::new(a, b, g), 1e-8).unwrap();
    let cloud = sample_grid(l.reciprocal.b1, l.reciprocal.b2, r);
    (cloud.points, l.reciprocal.area().abs())
}

fn both_methods() -> [BzCfg; 2] {
    [
        BzCfg::default(),
        BzCfg::default().with_method(CellMethod::Bisector),
    ]
}

fn strictly_increasing_angles(poly: &BzPolygon) -> bool {
    let angles: Vec<f64> = poly
        .vertices
        .iter()
        .map(|v| angle_about(*v, poly.generator))
        .collect();
    angles.windows(2).all(|w| w[0] < w[1])
}

#[test]
fn square_lattice_zone_is_square_of_side_two_pi() {
    let (k, _) = reciprocal_samples(1.0, 1.0, 90.0, 4);
    for cfg in both_methods() {
        let bz = build_wigner_seitz_cell(&k, &cfg).unwrap();
        assert_eq!(bz.len(), 4, "{:?}: {:?}", cfg.method, bz.vertices);
        assert_eq!(bz.generator, Vec2::zeros());
        assert!((bz.area() - (2.0 * PI).powi(2)).abs() < 1e-9);
        for v in &bz.vertices {
            assert!((v.x.abs() - PI).abs() < 1e-9 && (v.y.abs() - PI).abs() < 1e-9);
        }
        assert!(strictly_increasing_angles(&bz));
    }
}

#[test]
fn hexagonal_lattice_zone_is_hexagon() {
    let (k, cell_area) = reciprocal_samples(2.0, 2.0, 60.0, 4);
    for cfg in both_methods() {
        let bz = build_wigner_seitz_cell(&k, &cfg).unwrap();
        assert_eq!(bz.len(), 6, "{:?}: {:?}", cfg.method, bz.vertices);
        assert!((bz.area() - cell_area).abs() < 1e-9 * cell_area);
        // Regular hexagon: all vertices equidistant from Γ.
        let r0 = bz.vertices[0].norm();
        assert!(bz.vertices.iter().all(|v| (v.norm() - r0).abs() < 1e-9));
    }
}

#[test]
fn routes_agree_on_seeded_lattices() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..24 {
        let a = rng.gen_range(0.5..2.0);
        let b = rng.gen_range(0.5..2.0);
        let g = rng.gen_range(40.0..140.0);
        let (k, cell_area) = reciprocal_samples(a, b, g, 4);
        let v = build_wigner_seitz_cell(&k, &BzCfg::default()).unwrap();
        let h = build_wigner_seitz_cell(&k, &BzCfg::default().with_method(CellMethod::Bisector))
            .unwrap();
        assert_eq!(v.len(), h.len(), "a={a} b={b} g={g}");
        for (p, q) in v.vertices.iter().zip(&h.vertices) {
            assert!((p - q).norm() < 1e-7, "a={a} b={b} g={g}: {p} vs {q}");
        }
        assert!((v.area() - cell_area).abs() < 1e-7 * cell_area);
    }
}

#[test]
fn single_sample_is_unbounded() {
    let (k, _) = reciprocal_samples(1.0, 1.0, 90.0, 0);
    assert_eq!(k.len(), 1);
    for cfg in both_methods() {
        match build_wigner_seitz_cell(&k, &cfg) {
            Err(BzError::UnboundedCell { site: 0 }) => {}
            other => panic!("{:?}: expected UnboundedCell, got {other:?}", cfg.method),
        }
    }
}

#[test]
fn origin_on_hull_is_unbounded() {
    let k = vec![
        vector![1.0, 0.0],
        vector![0.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 1.0],
        vector![2.0, 0.5],
    ];
    for cfg in both_methods() {
        match build_wigner_seitz_cell(&k, &cfg) {
            Err(BzError::UnboundedCell { site: 1 }) => {}
            other => panic!("{:?}: expected UnboundedCell, got {other:?}", cfg.method),
        }
    }
}

#[test]
fn empty_input_is_degenerate() {
    match build_wigner_seitz_cell(&[], &BzCfg::default()) {
        Err(BzError::DegenerateCell { vertices: 0 }) => {}
        other => panic!("expected DegenerateCell, got {other:?}"),
    }
}

#[test]
fn origin_index_prefers_first_minimum() {
    let k = vec![vector![1.0, 0.0], vector![0.0, -1.0], vector![2.0, 2.0]];
    assert_eq!(origin_index(&k), Some(0));
    assert_eq!(origin_index(&[]), None);
}

#[test]
fn generator_need_not_be_origin() {
    // Shifted square patch: the sample nearest to 0 is (0.25, 0.25).
    let k: Vec<_> = sample_grid(vector![1.0, 0.0], vector![0.0, 1.0], 2)
        .points
        .into_iter()
        .map(|p| p + vector![0.25, 0.25])
        .collect();
    let bz = build_wigner_seitz_cell(&k, &BzCfg::default()).unwrap();
    assert_eq!(bz.generator, vector![0.25, 0.25]);
    assert_eq!(bz.len(), 4);
    assert!(strictly_increasing_angles(&bz));
    assert!((bz.area() - 1.0).abs() < 1e-9);
}

#[test]
fn truncated_window_closes_oversized_cell() {
    // (1, 10, 10°) needs the neighbour b1 + 10·b2; R = 4 still yields a bounded
    // cell, closed by farther samples.
    let (k, cell_area) = reciprocal_samples(1.0, 10.0, 10.0, 4);
    let bz = build_wigner_seitz_cell(&k, &BzCfg::default()).unwrap();
    assert!(bz.area() > 2.0 * cell_area);
    match check_zone_area(&bz, cell_area, 1e-6) {
        Err(BzError::UnboundedCell { site }) => assert_eq!(site, bz.site),
        other => panic!("expected UnboundedCell, got {other:?}"),
    }

    let (k, cell_area) = reciprocal_samples(1.0, 10.0, 10.0, 12);
    for cfg in both_methods() {
        let bz = build_wigner_seitz_cell(&k, &cfg).unwrap();
        assert!(check_zone_area(&bz, cell_area, 1e-6).is_ok(), "{:?}", cfg.method);
        assert_eq!(bz.len(), 6);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn angular_order_is_monotone(a in 0.5f64..2.0, b in 0.5f64..2.0, g in 30.0f64..150.0) {
        let (k, cell_area) = reciprocal_samples(a, b, g, 4);
        let bz = build_wigner_seitz_cell(&k, &BzCfg::default()).unwrap();
        prop_assert!(bz.len() == 4 || bz.len() == 6, "{} vertices", bz.len());
        prop_assert!(strictly_increasing_angles(&bz));
        prop_assert!((bz.area() - cell_area).abs() < 1e-7 * cell_area);
    }
}
