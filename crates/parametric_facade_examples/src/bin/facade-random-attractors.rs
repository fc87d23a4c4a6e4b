use glam::DVec2;
use parametric_facade::prelude::*;
use parametric_facade_examples::{init_tracing, render_facade_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

const ATTRACTOR_COUNT: usize = 6;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let grid = FacadeGrid::try_new(FacadeConfig::new(30.0, 12.0).with_cell_size(0.6))?;
    let extent = DVec2::new(grid.width(), grid.height());

    let mut rng = StdRng::seed_from_u64(42);
    let attractors: AttractorSet = (0..ATTRACTOR_COUNT)
        .map(|_| {
            let position = DVec2::new(rand01(&mut rng), rand01(&mut rng)) * extent;
            Attractor::new(position)
                .with_strength(0.4 + 0.6 * rand01(&mut rng))
                .with_radius(3.0 + 5.0 * rand01(&mut rng))
        })
        .collect();

    let panels = grid.generate_panels(&attractors);
    let influenced = panels.iter().filter(|p| p.influence > 0.0).count();
    info!(
        "{} of {} panels are influenced by {} attractors.",
        influenced,
        panels.len(),
        attractors.len()
    );

    let config = RenderConfig::for_grid(&grid, 40);
    render_facade_to_png(&panels, &attractors, &config, "facade_random_attractors.png")?;
    Ok(())
}

fn rand01(rng: &mut StdRng) -> f64 {
    (rng.next_u32() as f64) / ((u32::MAX as f64) + 1.0)
}
