use parametric_facade::prelude::*;
use parametric_facade_examples::{
    init_tracing, render_facade_to_png, write_export_json, RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let grid = FacadeGrid::try_new(FacadeConfig::new(20.0, 15.0).with_cell_size(1.0))?;

    let mut attractors = AttractorSet::new();
    attractors.add(10.0, 7.5, 1.0, 8.0);

    let panels = grid.generate_panels(&attractors);

    let config = RenderConfig::for_grid(&grid, 50);
    render_facade_to_png(&panels, &attractors, &config, "facade_single_attractor.png")?;

    // Flat record for Revit/Rhino import scripts.
    let export = FacadeExport::new(&grid, &attractors, &panels);
    write_export_json(&export, "facade_data.json")?;
    Ok(())
}
