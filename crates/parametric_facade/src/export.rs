//! Flat export records for external modeling tools.
//!
//! [`FacadeExport`] mirrors the JSON document consumed by downstream tools:
//! facade metadata, the attractors in insertion order, and the panels in generation order.
//! Writing the document anywhere is left to the caller.
use serde::{Deserialize, Serialize};

use crate::attractor::{Attractor, AttractorSet};
use crate::grid::{FacadeGrid, Panel};

/// Facade extent and panel count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacadeMetadata {
    pub width: f64,
    pub height: f64,
    /// Cell edge length.
    pub grid_size: f64,
    /// Always equal to `columns * rows`.
    pub total_panels: usize,
}

/// Exported attractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttractorRecord {
    pub position: [f64; 2],
    pub strength: f64,
    pub radius: f64,
}

impl From<&Attractor> for AttractorRecord {
    fn from(a: &Attractor) -> Self {
        Self {
            position: a.position.to_array(),
            strength: a.strength,
            radius: a.radius,
        }
    }
}

/// Exported panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRecord {
    /// Lower-left corner of the panel's cell.
    pub position: [f64; 2],
    pub size: f64,
    pub rotation: f64,
    pub scale: f64,
    pub opacity: f64,
    pub influence: f64,
}

impl From<&Panel> for PanelRecord {
    fn from(p: &Panel) -> Self {
        Self {
            position: p.position.to_array(),
            size: p.size,
            rotation: p.rotation,
            scale: p.scale,
            opacity: p.opacity,
            influence: p.influence,
        }
    }
}

/// Complete export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacadeExport {
    pub metadata: FacadeMetadata,
    pub attractors: Vec<AttractorRecord>,
    pub panels: Vec<PanelRecord>,
}

impl FacadeExport {
    /// Builds the document from already generated panels.
    pub fn new(grid: &FacadeGrid, attractors: &AttractorSet, panels: &[Panel]) -> Self {
        debug_assert_eq!(
            panels.len(),
            grid.panel_count(),
            "panels must come from this grid"
        );
        Self {
            metadata: FacadeMetadata {
                width: grid.width(),
                height: grid.height(),
                grid_size: grid.cell_size(),
                total_panels: panels.len(),
            },
            attractors: attractors.iter().map(AttractorRecord::from).collect(),
            panels: panels.iter().map(PanelRecord::from).collect(),
        }
    }

    /// Generates the panels for `grid` and builds the document.
    pub fn generate(grid: &FacadeGrid, attractors: &AttractorSet) -> Self {
        let panels = grid.generate_panels(attractors);
        Self::new(grid, attractors, &panels)
    }

    /// Number of rows implied by the metadata.
    pub fn rows(&self) -> usize {
        if self.metadata.grid_size > 0.0 {
            (self.metadata.height / self.metadata.grid_size).floor() as usize
        } else {
            0
        }
    }

    /// Recovers the `(column, row)` cell of the panel at `index`.
    pub fn cell_for_index(&self, index: usize) -> Option<(usize, usize)> {
        let rows = self.rows();
        if rows == 0 || index >= self.panels.len() {
            return None;
        }
        Some((index / rows, index % rows))
    }
}
