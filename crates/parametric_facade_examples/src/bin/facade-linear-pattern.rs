use parametric_facade::prelude::*;
use parametric_facade_examples::{init_tracing, render_facade_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let grid = FacadeGrid::try_new(FacadeConfig::new(20.0, 15.0).with_cell_size(0.7))?;

    // Four attractors evenly spaced along the horizontal midline.
    let mut attractors = AttractorSet::with_capacity(4);
    for i in 0..4 {
        attractors.add(5.0 + i as f64 * 5.0, 7.5, 0.8, 4.0);
    }

    let panels = grid.generate_panels(&attractors);

    let config = RenderConfig::for_grid(&grid, 50);
    render_facade_to_png(&panels, &attractors, &config, "facade_linear_pattern.png")?;
    Ok(())
}
