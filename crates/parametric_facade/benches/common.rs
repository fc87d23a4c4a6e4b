use std::time::Duration;

use criterion::{Criterion, Throughput};
use glam::DVec2;
use parametric_facade::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

fn rand01(rng: &mut StdRng) -> f64 {
    (rng.next_u32() as f64) / ((u32::MAX as f64) + 1.0)
}

/// Seeded attractors spread over `extent` with radii between 2 and 8.
pub fn random_attractors(count: usize, extent: DVec2, seed: u64) -> AttractorSet {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let position = DVec2::new(rand01(&mut rng) * extent.x, rand01(&mut rng) * extent.y);
            Attractor::new(position)
                .with_strength(0.3 + 0.7 * rand01(&mut rng))
                .with_radius(2.0 + 6.0 * rand01(&mut rng))
        })
        .collect()
}
