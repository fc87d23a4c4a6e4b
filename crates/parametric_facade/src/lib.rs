#![forbid(unsafe_code)]
//! parametric_facade: Attractor-driven influence fields and facade panel grids.
//!
//! Modules:
//! - attractor: point attractors, the cumulative influence field and the [`InfluenceField`] seam
//! - grid: facade configuration, grid geometry and panel generation
//! - export: flat record shape for exporters (requires the `serde` feature)
//!
//! [`InfluenceField`]: crate::attractor::InfluenceField
pub mod attractor;
pub mod error;
#[cfg(feature = "serde")]
pub mod export;
pub mod grid;

/// Convenient re-exports for common types. Import with `use parametric_facade::prelude::*;`.
pub mod prelude {
    pub use crate::attractor::{Attractor, AttractorSet, FnField, InfluenceField};
    pub use crate::error::{Error, Result};
    #[cfg(feature = "serde")]
    pub use crate::export::{AttractorRecord, FacadeExport, FacadeMetadata, PanelRecord};
    pub use crate::grid::{
        opacity_for, rotation_for, scale_for, FacadeConfig, FacadeGrid, Panel,
    };
}
