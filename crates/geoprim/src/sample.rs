//! Random points and point triples (replay tokens for determinism).
//!
//! Purpose
//! - Reproducible inputs for benches, property-style tests and the CLI
//!   `sample` subcommand.
//! - `sample_collinear` builds triples with a known classification so the
//!   collinear branches of `orientation_2d` can be exercised in bulk.
//!
//! Model
//! - Coordinates are uniform in a square box, optionally snapped to the
//!   integer grid so downstream arithmetic stays exact.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::orient::RelativePosition;
use crate::vector::Point2d;

/// Square sampling box `[lo, hi]²`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub lo: f64,
    pub hi: f64,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self { lo: -10.0, hi: 10.0 }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleCfg {
    pub bounds: Bounds2,
    /// Round coordinates to integers.
    pub snap_to_grid: bool,
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn draw_point<R: Rng>(rng: &mut R, cfg: &SampleCfg) -> Point2d {
    let (lo, hi) = (cfg.bounds.lo.min(cfg.bounds.hi), cfg.bounds.lo.max(cfg.bounds.hi));
    let mut coord = || {
        let v = if hi > lo { rng.gen_range(lo..=hi) } else { lo };
        if cfg.snap_to_grid {
            v.round()
        } else {
            v
        }
    };
    let x = coord();
    let y = coord();
    Point2d::xy(x, y)
}

/// `n` independent points.
pub fn sample_points(n: usize, cfg: SampleCfg, tok: ReplayToken) -> Vec<Point2d> {
    let mut rng = tok.to_std_rng();
    (0..n).map(|_| draw_point(&mut rng, &cfg)).collect()
}

/// Three independent points `[a, b, c]`.
pub fn sample_triple(cfg: SampleCfg, tok: ReplayToken) -> [Point2d; 3] {
    let mut rng = tok.to_std_rng();
    std::array::from_fn(|_| draw_point(&mut rng, &cfg))
}

/// Collinear triple `c = a + t (b - a)` and the classification it must get.
#[derive(Clone, Copy, Debug)]
pub struct CollinearSample {
    pub a: Point2d,
    pub b: Point2d,
    pub c: Point2d,
    pub t: f64,
    pub expected: RelativePosition,
}

/// Dyadic parameters only, so `a + t (b - a)` is exact on the grid and
/// never lands within tolerance of an endpoint by accident.
const COLLINEAR_PARAMS: [f64; 9] = [-1.0, -0.5, 0.0, 0.25, 0.5, 0.75, 1.0, 1.5, 2.0];

const MAX_ATTEMPTS: usize = 64;

/// Draw a collinear triple. `None` if no non-degenerate segment was found
/// (e.g. a zero-size box).
pub fn sample_collinear(cfg: SampleCfg, tok: ReplayToken) -> Option<CollinearSample> {
    let mut rng = tok.to_std_rng();
    let (a, b) = (0..MAX_ATTEMPTS)
        .map(|_| (draw_point(&mut rng, &cfg), draw_point(&mut rng, &cfg)))
        .find(|(a, b)| (*b - *a).magnitude() > 1e-3)?;
    let t = COLLINEAR_PARAMS[rng.gen_range(0..COLLINEAR_PARAMS.len())];
    let (c, expected) = if t == 0.0 {
        (a, RelativePosition::Origin)
    } else if t == 1.0 {
        (b, RelativePosition::Destination)
    } else if t < 0.0 {
        (a + (b - a) * t, RelativePosition::Behind)
    } else if t < 1.0 {
        (a + (b - a) * t, RelativePosition::Between)
    } else {
        (a + (b - a) * t, RelativePosition::Beyond)
    };
    Some(CollinearSample {
        a,
        b,
        c,
        t,
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_is_deterministic() {
        let cfg = SampleCfg::default();
        let tok = ReplayToken { seed: 3, index: 9 };
        let p1 = sample_points(16, cfg, tok);
        let p2 = sample_points(16, cfg, tok);
        assert_eq!(p1, p2);
        let other = sample_points(16, cfg, ReplayToken { seed: 3, index: 10 });
        assert_ne!(p1, other);
    }

    #[test]
    fn points_stay_in_bounds_and_snap() {
        let cfg = SampleCfg {
            bounds: Bounds2 { lo: -2.0, hi: 3.0 },
            snap_to_grid: true,
        };
        for p in sample_points(200, cfg, ReplayToken { seed: 1, index: 0 }) {
            for &c in p.iter() {
                assert!((-2.0..=3.0).contains(&c));
                assert_eq!(c, c.round());
            }
        }
    }

    #[test]
    fn collinear_needs_room() {
        let cfg = SampleCfg {
            bounds: Bounds2 { lo: 1.0, hi: 1.0 },
            snap_to_grid: false,
        };
        assert!(sample_collinear(cfg, ReplayToken { seed: 0, index: 0 }).is_none());
    }
}
