//! Caller-side policies around the core: grid growth on unbounded cells and γ scans.

use bzone::lattice::LatticeParameters;
use bzone::{compute_with_cfg, BzCfg, BzError, BzFailure, BzResult, MAX_GRID_RANGE};
use serde::Serialize;

/// Result of one computation plus the grid range that produced it.
pub struct Attempted {
    pub outcome: Result<BzResult, BzError>,
    pub grid_range: u32,
    pub attempts: u32,
}

/// Run once, then on `UnboundedCell` double the grid range up to `grow` more times.
pub fn compute_with_growth(params: &LatticeParameters, cfg: BzCfg, grow: u32) -> Attempted {
    let mut cfg = cfg;
    let mut attempts = 1;
    loop {
        let outcome = compute_with_cfg(params, &cfg);
        let next = grown(cfg.grid_range);
        let retry = matches!(&outcome, Err(e) if e.is_retryable())
            && attempts <= grow
            && next > cfg.grid_range;
        if !retry {
            return Attempted {
                outcome,
                grid_range: cfg.grid_range,
                attempts,
            };
        }
        tracing::info!(from = cfg.grid_range, to = next, "unbounded cell, growing grid");
        cfg = cfg.with_grid_range(next);
        attempts += 1;
    }
}

/// Doubled grid range, at least 1 and at most `MAX_GRID_RANGE`.
pub fn grown(range: u32) -> u32 {
    range.saturating_mul(2).clamp(1, MAX_GRID_RANGE)
}

/// One line of a γ scan.
#[derive(Debug, Serialize)]
pub struct ScanRow {
    pub gamma: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertices: Option<usize>,
    #[serde(rename = "dist_GY", skip_serializing_if = "Option::is_none")]
    pub dist_gy: Option<f64>,
    #[serde(rename = "dist_GB", skip_serializing_if = "Option::is_none")]
    pub dist_gb: Option<f64>,
    #[serde(rename = "dist_GA", skip_serializing_if = "Option::is_none")]
    pub dist_ga: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<BzFailure>,
}

/// Evenly spaced γ from `from` to `to` inclusive (`steps` intervals).
pub fn scan(a: f64, b: f64, from: f64, to: f64, steps: u32, cfg: BzCfg) -> Vec<ScanRow> {
    let n = steps.max(1);
    (0..=n)
        .map(|k| {
            let gamma = from + (to - from) * f64::from(k) / f64::from(n);
            match compute_with_cfg(&LatticeParameters::new(a, b, gamma), &cfg) {
                Ok(r) => ScanRow {
                    gamma,
                    vertices: Some(r.bz_polygon.len()),
                    dist_gy: Some(r.dist_gy()),
                    dist_gb: Some(r.dist_gb()),
                    dist_ga: Some(r.dist_ga()),
                    failure: None,
                },
                Err(e) => ScanRow {
                    gamma,
                    vertices: None,
                    dist_gy: None,
                    dist_gb: None,
                    dist_ga: None,
                    failure: Some(BzFailure::from(&e)),
                },
            }
        })
        .collect()
}
