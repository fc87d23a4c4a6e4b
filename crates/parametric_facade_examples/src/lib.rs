#![forbid(unsafe_code)]

mod export;
mod rendering;

pub use export::{load_definition_ron, write_export_json, FacadeDefinition};
pub use rendering::{
    init_tracing, rasterize_facade, render_facade_to_png, AttractorStyle, PanelStyle, RenderConfig,
};
