//! Facade grid geometry and panel generation.
//!
//! This module defines [`FacadeConfig`], the validated [`FacadeGrid`] derived from it, and the
//! [`Panel`] records produced by sampling an [`InfluenceField`] once per cell.
//!
//! Panels are emitted column by column, with the row index varying fastest, so panel `k`
//! belongs to cell `(k / rows, k % rows)`.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::attractor::InfluenceField;
use crate::error::{Error, Result};

/// Rotation in degrees reached at full influence.
pub const MAX_ROTATION_DEGREES: f64 = 45.0;
/// Scale factor at zero influence.
pub const MIN_SCALE: f64 = 0.5;
/// Scale gained between zero and full influence.
pub const SCALE_RANGE: f64 = 0.5;
/// Opacity at zero influence.
pub const MIN_OPACITY: f64 = 0.3;
/// Opacity gained between zero and full influence.
pub const OPACITY_RANGE: f64 = 0.7;

/// Panel rotation in degrees for the given influence.
#[inline]
pub fn rotation_for(influence: f64) -> f64 {
    influence * MAX_ROTATION_DEGREES
}

/// Panel scale factor for the given influence.
#[inline]
pub fn scale_for(influence: f64) -> f64 {
    MIN_SCALE + influence * SCALE_RANGE
}

/// Panel opacity for the given influence.
#[inline]
pub fn opacity_for(influence: f64) -> f64 {
    MIN_OPACITY + influence * OPACITY_RANGE
}

/// Configuration for a facade grid.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacadeConfig {
    /// Facade width in world units.
    pub width: f64,
    /// Facade height in world units.
    pub height: f64,
    /// Edge length of one square panel cell.
    pub cell_size: f64,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 15.0,
            cell_size: 1.0,
        }
    }
}

impl FacadeConfig {
    /// Creates a new [`FacadeConfig`] with the given extent and the default cell size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Sets the cell size.
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// Non-positive extents are accepted and yield an empty grid.
    pub fn validate(&self) -> Result<()> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "cell_size must be finite and > 0, got {}",
                self.cell_size
            )));
        }
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "width and height must be finite, got {} x {}",
                self.width, self.height
            )));
        }

        Ok(())
    }
}

/// A single facade panel derived from the influence at its cell center.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    /// Lower-left corner of the panel's cell.
    pub position: DVec2,
    /// Cell edge length.
    pub size: f64,
    /// Rotation in degrees, `45 * influence`.
    pub rotation: f64,
    /// Scale factor, `0.5 + 0.5 * influence`.
    pub scale: f64,
    /// Opacity, `0.3 + 0.7 * influence`.
    pub opacity: f64,
    /// Influence sampled at the cell center.
    pub influence: f64,
}

impl Panel {
    /// Derives all visual parameters from `influence`.
    pub fn from_influence(position: DVec2, size: f64, influence: f64) -> Self {
        Self {
            position,
            size,
            rotation: rotation_for(influence),
            scale: scale_for(influence),
            opacity: opacity_for(influence),
            influence,
        }
    }

    /// Center of the panel's cell.
    pub fn cell_center(&self) -> DVec2 {
        self.position + DVec2::splat(self.size * 0.5)
    }
}

/// A fixed grid of square cells covering the facade, anchored at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct FacadeGrid {
    config: FacadeConfig,
    columns: usize,
    rows: usize,
}

impl Default for FacadeGrid {
    fn default() -> Self {
        Self::from_valid(FacadeConfig::default())
    }
}

impl FacadeGrid {
    /// Validates `config` and derives the column and row counts by truncation.
    pub fn try_new(config: FacadeConfig) -> Result<Self> {
        config.validate()?;
        let grid = Self::from_valid(config);
        if grid.columns.checked_mul(grid.rows).is_none() {
            return Err(Error::InvalidConfig(format!(
                "{} x {} cells of size {} exceed the addressable panel count",
                grid.columns, grid.rows, config.cell_size
            )));
        }
        if grid.columns == 0 || grid.rows == 0 {
            warn!(
                "Facade {} x {} with cell size {} has no full cells; panels will be empty.",
                config.width, config.height, config.cell_size
            );
        }
        Ok(grid)
    }

    fn from_valid(config: FacadeConfig) -> Self {
        // Saturating casts map negative extents to zero cells.
        let columns = (config.width / config.cell_size).floor() as usize;
        let rows = (config.height / config.cell_size).floor() as usize;
        Self {
            config,
            columns,
            rows,
        }
    }

    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }

    pub fn width(&self) -> f64 {
        self.config.width
    }

    pub fn height(&self) -> f64 {
        self.config.height
    }

    pub fn cell_size(&self) -> f64 {
        self.config.cell_size
    }

    /// Number of full cells along X.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of full cells along Y.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of panels produced by [`FacadeGrid::generate_panels`].
    pub fn panel_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Lower-left corner of cell `(i, j)`.
    pub fn cell_origin(&self, i: usize, j: usize) -> DVec2 {
        let cs = self.config.cell_size;
        DVec2::new(i as f64 * cs, j as f64 * cs)
    }

    /// Center of cell `(i, j)`.
    pub fn cell_center(&self, i: usize, j: usize) -> DVec2 {
        let cs = self.config.cell_size;
        DVec2::new(i as f64 * cs + cs / 2.0, j as f64 * cs + cs / 2.0)
    }

    /// Converts a panel index back to its `(column, row)` cell.
    pub fn cell_for_index(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.panel_count() {
            return None;
        }
        Some((index / self.rows, index % self.rows))
    }

    /// Converts a `(column, row)` cell to its panel index.
    pub fn index_for_cell(&self, i: usize, j: usize) -> Option<usize> {
        if i >= self.columns || j >= self.rows {
            return None;
        }
        Some(i * self.rows + j)
    }

    /// Samples `field` at every cell center and returns one panel per cell.
    ///
    /// Columns form the outer loop and rows the inner loop. Every call recomputes the
    /// panels from scratch.
    pub fn generate_panels<F>(&self, field: &F) -> Vec<Panel>
    where
        F: InfluenceField + ?Sized,
    {
        debug!(
            "Generating {} panels ({} columns x {} rows, cell size {}).",
            self.panel_count(),
            self.columns,
            self.rows,
            self.config.cell_size
        );

        // A zero-row grid may still report a huge column count.
        if self.panel_count() == 0 {
            return Vec::new();
        }
        let mut panels = Vec::with_capacity(self.panel_count());
        for i in 0..self.columns {
            for j in 0..self.rows {
                let influence = field.sample(self.cell_center(i, j).into());
                panels.push(Panel::from_influence(
                    self.cell_origin(i, j),
                    self.config.cell_size,
                    influence,
                ));
            }
        }
        panels
    }
}
