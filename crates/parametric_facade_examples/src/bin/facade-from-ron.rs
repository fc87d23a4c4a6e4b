use parametric_facade::prelude::*;
use parametric_facade_examples::{
    init_tracing, load_definition_ron, render_facade_to_png, write_export_json, RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let path = format!(
        "{}/assets/facade-from-ron/facade.ron",
        env!("CARGO_MANIFEST_DIR")
    );
    let definition = load_definition_ron(&path)?;
    let grid = definition.grid()?;

    let panels = grid.generate_panels(&definition.attractors);

    let config = RenderConfig::for_grid(&grid, 40).with_background([255, 255, 255]);
    render_facade_to_png(&panels, &definition.attractors, &config, "facade-from-ron.png")?;

    let export = FacadeExport::new(&grid, &definition.attractors, &panels);
    write_export_json(&export, "facade-from-ron.json")?;
    Ok(())
}
