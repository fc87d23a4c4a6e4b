//! JSON export and RON facade definitions for the example binaries.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use parametric_facade::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A facade described in a RON file: grid configuration plus attractors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FacadeDefinition {
    pub facade: FacadeConfig,
    #[serde(default)]
    pub attractors: AttractorSet,
}

impl FacadeDefinition {
    /// Validates the configuration and builds the grid.
    pub fn grid(&self) -> anyhow::Result<FacadeGrid> {
        Ok(FacadeGrid::try_new(self.facade)?)
    }
}

/// Loads a [`FacadeDefinition`] from a RON file.
pub fn load_definition_ron(path: impl AsRef<Path>) -> anyhow::Result<FacadeDefinition> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_definition_ron(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn parse_definition_ron(text: &str) -> anyhow::Result<FacadeDefinition> {
    Ok(ron::from_str(text)?)
}

/// Writes `export` as pretty-printed JSON.
pub fn write_export_json(export: &FacadeExport, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, export)?;
    writer.flush()?;
    info!(
        "Panel data exported to {} ({} panels).",
        path.display(),
        export.metadata.total_panels
    );
    Ok(())
}
