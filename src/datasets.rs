//! Synthetic 2-D datasets for exercising the clustering algorithms.
//!
//! Every generator places points inside a `width x height` canvas with the origin at
//! the top-left corner and leaves `cluster` unset. Grouped datasets split `n` by floor
//! division, so they can return a few points less than requested.

use std::f64::consts::{PI, TAU};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Dataset shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dataset {
    /// Round blobs at random positions.
    Random {
        /// Number of blobs.
        clusters: usize,
    },
    /// A filled disc inside a ring.
    Circles,
    /// Two interleaving half circles.
    Moons,
    /// Four blobs near the canvas corners.
    Blobs,
    /// Two interleaved spiral arms.
    Spiral,
    /// Three sheared, elongated blobs.
    Anisotropic,
    /// Three blobs of very different spread.
    VariedDensity,
    /// [`Dataset::Circles`] plus uniform background noise.
    NoisyCircles,
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset::Random { clusters: 3 }
    }
}

impl Dataset {
    /// Generate about `n` points on a `width x height` canvas.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        n: usize,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Vec<Point> {
        match *self {
            Dataset::Random { clusters } => random_clusters(n, clusters, width, height, rng),
            Dataset::Circles => circles(n, width, height, rng),
            Dataset::Moons => moons(n, width, height, rng),
            Dataset::Blobs => blobs(n, width, height, rng),
            Dataset::Spiral => spiral(n, width, height, rng),
            Dataset::Anisotropic => anisotropic(n, width, height, rng),
            Dataset::VariedDensity => varied_density(n, width, height, rng),
            Dataset::NoisyCircles => noisy_circles(n, width, height, rng),
        }
    }
}

/// Uniform sample in `[-half, half)`.
fn jitter<R: Rng + ?Sized>(rng: &mut R, half: f64) -> f64 {
    (rng.random::<f64>() - 0.5) * 2.0 * half
}

/// Uniform-angle, uniform-radius sample around `(cx, cy)`.
fn disc<R: Rng + ?Sized>(rng: &mut R, cx: f64, cy: f64, spread: f64) -> Point {
    let angle = rng.random::<f64>() * TAU;
    let radius = rng.random::<f64>() * spread;
    Point::new(cx + angle.cos() * radius, cy + angle.sin() * radius)
}

fn random_clusters<R: Rng + ?Sized>(
    n: usize,
    clusters: usize,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Vec<Point> {
    const PADDING: f64 = 100.0;
    if clusters == 0 {
        return Vec::new();
    }

    let per_cluster = n / clusters;
    let mut points = Vec::with_capacity(per_cluster * clusters);
    for _ in 0..clusters {
        let cx = PADDING + rng.random::<f64>() * (width - 2.0 * PADDING);
        let cy = PADDING + rng.random::<f64>() * (height - 2.0 * PADDING);
        let spread = 30.0 + rng.random::<f64>() * 40.0;
        for _ in 0..per_cluster {
            points.push(disc(rng, cx, cy, spread));
        }
    }
    points
}

fn circles<R: Rng + ?Sized>(n: usize, width: f64, height: f64, rng: &mut R) -> Vec<Point> {
    const INNER_RADIUS: f64 = 80.0;
    const OUTER_RADIUS: f64 = 180.0;

    let (cx, cy) = (width / 2.0, height / 2.0);
    let inner = n * 2 / 5;
    let mut points = Vec::with_capacity(n);
    for _ in 0..inner {
        points.push(disc(rng, cx, cy, INNER_RADIUS));
    }
    for _ in inner..n {
        let angle = rng.random::<f64>() * TAU;
        let radius = OUTER_RADIUS + jitter(rng, 15.0);
        points.push(Point::new(cx + angle.cos() * radius, cy + angle.sin() * radius));
    }
    points
}

fn moons<R: Rng + ?Sized>(n: usize, width: f64, height: f64, rng: &mut R) -> Vec<Point> {
    const RADIUS: f64 = 100.0;
    const NOISE: f64 = 7.5;

    let (cx, cy) = (width / 2.0, height / 2.0);
    let upper = n / 2;
    let lower = n - upper;
    let mut points = Vec::with_capacity(n);
    for i in 0..upper {
        let angle = PI * (i as f64 / upper as f64);
        points.push(Point::new(
            cx + angle.cos() * RADIUS + jitter(rng, NOISE),
            cy + angle.sin() * RADIUS + jitter(rng, NOISE),
        ));
    }
    for i in 0..lower {
        let angle = PI + PI * (i as f64 / lower as f64);
        points.push(Point::new(
            cx + angle.cos() * RADIUS + RADIUS / 2.0 + jitter(rng, NOISE),
            cy + angle.sin() * RADIUS - RADIUS / 2.0 + jitter(rng, NOISE),
        ));
    }
    points
}

fn blobs<R: Rng + ?Sized>(n: usize, width: f64, height: f64, rng: &mut R) -> Vec<Point> {
    const PADDING: f64 = 80.0;
    const SPREAD: f64 = 50.0;

    let centers = [
        (PADDING + 100.0, PADDING + 80.0),
        (width - PADDING - 100.0, PADDING + 80.0),
        (PADDING + 100.0, height - PADDING - 80.0),
        (width - PADDING - 100.0, height - PADDING - 80.0),
    ];
    let per_blob = n / centers.len();
    let mut points = Vec::with_capacity(per_blob * centers.len());
    for (cx, cy) in centers {
        for _ in 0..per_blob {
            points.push(disc(rng, cx, cy, SPREAD));
        }
    }
    points
}

fn spiral<R: Rng + ?Sized>(n: usize, width: f64, height: f64, rng: &mut R) -> Vec<Point> {
    const TURNS: f64 = 1.5;
    const NOISE: f64 = 6.0;

    let (cx, cy) = (width / 2.0, height / 2.0);
    let max_radius = 0.4 * width.min(height);
    let per_arm = n / 2;
    let mut points = Vec::with_capacity(per_arm * 2);
    for arm in 0..2 {
        let offset = arm as f64 * PI;
        for i in 0..per_arm {
            let t = i as f64 / per_arm.max(1) as f64;
            let angle = t * TURNS * TAU + offset;
            let radius = 15.0 + t * max_radius;
            points.push(Point::new(
                cx + angle.cos() * radius + jitter(rng, NOISE),
                cy + angle.sin() * radius + jitter(rng, NOISE),
            ));
        }
    }
    points
}

fn anisotropic<R: Rng + ?Sized>(n: usize, width: f64, height: f64, rng: &mut R) -> Vec<Point> {
    const SPREAD: f64 = 45.0;

    let centers = [
        (width * 0.25, height * 0.3),
        (width * 0.5, height * 0.65),
        (width * 0.75, height * 0.35),
    ];
    let per_blob = n / centers.len();
    let mut points = Vec::with_capacity(per_blob * centers.len());
    for (cx, cy) in centers {
        for _ in 0..per_blob {
            let p = disc(rng, 0.0, 0.0, SPREAD);
            // Stretch along x, squash along y, then shear.
            let (sx, sy) = (p.x * 1.8, p.y * 0.45);
            points.push(Point::new(cx + sx + 0.6 * sy, cy + 0.35 * sx + sy));
        }
    }
    points
}

fn varied_density<R: Rng + ?Sized>(n: usize, width: f64, height: f64, rng: &mut R) -> Vec<Point> {
    // (x fraction, y fraction, spread, share of points in tenths)
    let groups = [
        (0.25, 0.3, 20.0, 4),
        (0.7, 0.3, 50.0, 3),
        (0.5, 0.72, 90.0, 3),
    ];
    let mut points = Vec::with_capacity(n);
    for (fx, fy, spread, tenths) in groups {
        for _ in 0..n * tenths / 10 {
            points.push(disc(rng, width * fx, height * fy, spread));
        }
    }
    points
}

fn noisy_circles<R: Rng + ?Sized>(n: usize, width: f64, height: f64, rng: &mut R) -> Vec<Point> {
    let noise = n / 10;
    let mut points = circles(n - noise, width, height, rng);
    for _ in 0..noise {
        points.push(Point::new(
            rng.random::<f64>() * width,
            rng.random::<f64>() * height,
        ));
    }
    points
}
