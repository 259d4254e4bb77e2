//! Reproducible random point clouds for tests, benches and the CLI.
//!
//! Determinism uses a replay token `(seed, index)` mixed into one `StdRng`, so
//! the `index`-th cloud of a seed can be regenerated on its own.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Region the points are drawn from (uniformly).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    /// Axis-aligned square `[-half, half]²`.
    Square { half: f64 },
    /// Disk of the given radius around the origin.
    Disk { radius: f64 },
    /// Circle of the given radius: every point is a hull vertex.
    Circle { radius: f64 },
}

#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            shape: CloudShape::Square { half: 1.0 },
        }
    }
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
        // SplitMix64 finalizer.
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

/// Draw `cfg.count` points (unsorted).
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| match cfg.shape {
            CloudShape::Square { half } => {
                let h = half.abs();
                Vector2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h))
            }
            CloudShape::Disk { radius } => {
                let r = radius.abs() * rng.gen::<f64>().sqrt();
                polar(r, rng.gen::<f64>() * std::f64::consts::TAU)
            }
            CloudShape::Circle { radius } => {
                polar(radius.abs(), rng.gen::<f64>() * std::f64::consts::TAU)
            }
        })
        .collect()
}

#[inline]
pub fn polar(r: f64, theta: f64) -> Vector2<f64> {
    Vector2::new(r * theta.cos(), r * theta.sin())
}
