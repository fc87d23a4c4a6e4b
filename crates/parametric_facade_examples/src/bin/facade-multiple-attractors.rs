use parametric_facade::prelude::*;
use parametric_facade_examples::{init_tracing, render_facade_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let grid = FacadeGrid::try_new(FacadeConfig::new(20.0, 15.0).with_cell_size(0.8))?;

    let mut attractors = AttractorSet::new();
    attractors
        .add(5.0, 5.0, 0.8, 6.0)
        .add(15.0, 10.0, 0.9, 7.0)
        .add(10.0, 12.0, 0.7, 5.0);

    let panels = grid.generate_panels(&attractors);

    let config = RenderConfig::for_grid(&grid, 50);
    render_facade_to_png(&panels, &attractors, &config, "facade_multiple_attractors.png")?;
    Ok(())
}
