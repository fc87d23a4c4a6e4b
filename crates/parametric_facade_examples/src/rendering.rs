//! PNG rendering of generated facades and tracing setup for the example binaries.
//!
//! World coordinates have Y pointing up and the facade's lower-left corner at the origin;
//! image rows run top to bottom.
use std::f64::consts::PI;
use std::path::Path;

use anyhow::Context;
use glam::DVec2;
use image::{Rgb, RgbImage};
use parametric_facade::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a formatted tracing subscriber honoring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Fill and outline of facade panels.
#[derive(Clone, Debug)]
pub struct PanelStyle {
    pub fill: [u8; 3],
    pub edge: [u8; 3],
    /// Outline width in pixels.
    pub edge_px: f64,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            fill: [70, 130, 180],
            edge: [255, 255, 255],
            edge_px: 1.0,
        }
    }
}

/// Marker and dashed influence ring drawn for each attractor.
#[derive(Clone, Debug)]
pub struct AttractorStyle {
    pub ring: [u8; 3],
    pub ring_alpha: f64,
    /// Ring stroke width in pixels.
    pub ring_px: f64,
    /// Length of each dash and each gap along the ring, in pixels.
    pub dash_px: f64,
    pub dot: [u8; 3],
    pub rim: [u8; 3],
    pub dot_radius_px: f64,
    pub rim_px: f64,
}

impl Default for AttractorStyle {
    fn default() -> Self {
        Self {
            ring: [255, 0, 0],
            ring_alpha: 0.5,
            ring_px: 1.5,
            dash_px: 6.0,
            dot: [255, 0, 0],
            rim: [139, 0, 0],
            dot_radius_px: 6.0,
            rim_px: 2.0,
        }
    }
}

/// Image size, facade extent and styling for [`render_facade_to_png`].
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub domain_extent: DVec2,
    pub background: [u8; 3],
    pub panel_style: PanelStyle,
    /// `None` hides the attractors.
    pub attractor_style: Option<AttractorStyle>,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), domain_extent: DVec2) -> Self {
        Self {
            image_size,
            domain_extent,
            background: [240, 240, 240],
            panel_style: PanelStyle::default(),
            attractor_style: Some(AttractorStyle::default()),
        }
    }

    /// Sizes the image so one world unit spans `px_per_unit` pixels.
    pub fn for_grid(grid: &FacadeGrid, px_per_unit: u32) -> Self {
        let extent = DVec2::new(grid.width(), grid.height());
        let w = (extent.x * px_per_unit as f64).round().max(1.0) as u32;
        let h = (extent.y * px_per_unit as f64).round().max(1.0) as u32;
        Self::new((w, h), extent)
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_panel_style(mut self, style: PanelStyle) -> Self {
        self.panel_style = style;
        self
    }

    pub fn with_attractor_style(mut self, style: AttractorStyle) -> Self {
        self.attractor_style = Some(style);
        self
    }

    pub fn without_attractors(mut self) -> Self {
        self.attractor_style = None;
        self
    }
}

/// Rasterizes the facade and writes it as a PNG.
pub fn render_facade_to_png(
    panels: &[Panel],
    attractors: &AttractorSet,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let image = rasterize_facade(panels, attractors, config)?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Facade visualization saved to {}.", path.display());
    Ok(())
}

/// Rasterizes the facade into an in-memory image.
pub fn rasterize_facade(
    panels: &[Panel],
    attractors: &AttractorSet,
    config: &RenderConfig,
) -> anyhow::Result<RgbImage> {
    let (w, h) = config.image_size;
    anyhow::ensure!(w > 0 && h > 0, "image size must be non-zero");
    anyhow::ensure!(
        config.domain_extent.x > 0.0 && config.domain_extent.y > 0.0,
        "domain extent must be > 0 in both components"
    );

    let mut canvas = Canvas {
        image: RgbImage::from_pixel(w, h, Rgb(config.background)),
        px_per_unit: DVec2::new(w as f64, h as f64) / config.domain_extent,
    };

    for panel in panels {
        draw_panel(&mut canvas, panel, &config.panel_style);
    }
    if let Some(style) = &config.attractor_style {
        for attractor in attractors {
            draw_attractor(&mut canvas, attractor, style);
        }
    }

    Ok(canvas.image)
}

struct Canvas {
    image: RgbImage,
    px_per_unit: DVec2,
}

impl Canvas {
    /// World position of the center of pixel `(ix, iy)`.
    fn to_world(&self, ix: u32, iy: u32) -> DVec2 {
        let h = self.image.height() as f64;
        DVec2::new(
            (ix as f64 + 0.5) / self.px_per_unit.x,
            (h - (iy as f64 + 0.5)) / self.px_per_unit.y,
        )
    }

    /// Half-open pixel ranges `(x0..x1, y0..y1)` covering a world-space box.
    fn pixel_bounds(&self, min: DVec2, max: DVec2) -> Option<(u32, u32, u32, u32)> {
        let w = self.image.width() as f64;
        let h = self.image.height() as f64;
        let x0 = (min.x * self.px_per_unit.x).floor().max(0.0);
        let x1 = (max.x * self.px_per_unit.x).ceil().min(w);
        let y0 = (h - max.y * self.px_per_unit.y).floor().max(0.0);
        let y1 = (h - min.y * self.px_per_unit.y).ceil().min(h);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, x1 as u32, y0 as u32, y1 as u32))
    }

    fn blend(&mut self, ix: u32, iy: u32, color: [u8; 3], alpha: f64) {
        let a = alpha.clamp(0.0, 1.0);
        let px = self.image.get_pixel_mut(ix, iy);
        for (dst, src) in px.0.iter_mut().zip(color) {
            let d = *dst as f64;
            *dst = (d + (src as f64 - d) * a).round() as u8;
        }
    }
}

/// Draws a square of side `size * scale`, inset so it is centered in its cell before
/// rotating counter-clockwise about its own lower-left corner.
fn draw_panel(canvas: &mut Canvas, panel: &Panel, style: &PanelStyle) {
    let side = panel.size * panel.scale;
    if !side.is_finite() || side <= 0.0 {
        return;
    }
    let offset = (panel.size - side) / 2.0;
    let anchor = panel.position + DVec2::splat(offset);
    let u = DVec2::from_angle(panel.rotation.to_radians());
    let v = u.perp();

    let corners = [anchor, anchor + u * side, anchor + v * side, anchor + (u + v) * side];
    let min = corners.iter().copied().fold(DVec2::INFINITY, DVec2::min);
    let max = corners.iter().copied().fold(DVec2::NEG_INFINITY, DVec2::max);
    let Some((x0, x1, y0, y1)) = canvas.pixel_bounds(min, max) else {
        return;
    };

    let edge = style.edge_px / canvas.px_per_unit.min_element();
    for iy in y0..y1 {
        for ix in x0..x1 {
            let d = canvas.to_world(ix, iy) - anchor;
            let lx = d.dot(u);
            let ly = d.dot(v);
            if lx < 0.0 || ly < 0.0 || lx > side || ly > side {
                continue;
            }
            let border = lx.min(ly).min(side - lx).min(side - ly);
            let color = if border < edge { style.edge } else { style.fill };
            canvas.blend(ix, iy, color, panel.opacity);
        }
    }
}

fn draw_attractor(canvas: &mut Canvas, attractor: &Attractor, style: &AttractorStyle) {
    let center = attractor.position;
    let ppu = canvas.px_per_unit.min_element();

    if attractor.radius > 0.0 {
        let half = style.ring_px / ppu / 2.0;
        let reach = DVec2::splat(attractor.radius + half);
        if let Some((x0, x1, y0, y1)) = canvas.pixel_bounds(center - reach, center + reach) {
            for iy in y0..y1 {
                for ix in x0..x1 {
                    let d = canvas.to_world(ix, iy) - center;
                    if (d.length() - attractor.radius).abs() > half {
                        continue;
                    }
                    let arc_px = (d.y.atan2(d.x) + PI) * attractor.radius * ppu;
                    if ((arc_px / style.dash_px).floor() as i64) % 2 != 0 {
                        continue;
                    }
                    canvas.blend(ix, iy, style.ring, style.ring_alpha);
                }
            }
        }
    }

    let dot = style.dot_radius_px / ppu;
    let rim = dot + style.rim_px / ppu;
    let reach = DVec2::splat(rim);
    if let Some((x0, x1, y0, y1)) = canvas.pixel_bounds(center - reach, center + reach) {
        for iy in y0..y1 {
            for ix in x0..x1 {
                let dist = canvas.to_world(ix, iy).distance(center);
                if dist <= dot {
                    canvas.blend(ix, iy, style.dot, 1.0);
                } else if dist <= rim {
                    canvas.blend(ix, iy, style.rim, 1.0);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> RenderConfig {
        RenderConfig::new((200, 150), DVec2::new(20.0, 15.0))
    }

    #[test]
    fn empty_facade_is_background() {
        let image = rasterize_facade(&[], &AttractorSet::new(), &small_config()).expect("render");
        assert!(image.pixels().all(|p| p.0 == [240, 240, 240]));
    }

    #[test]
    fn zero_influence_panel_is_inset_and_translucent() {
        let panel = Panel::from_influence(DVec2::ZERO, 1.0, 0.0);
        let image =
            rasterize_facade(&[panel], &AttractorSet::new(), &small_config()).expect("render");

        // World (0.55, 0.55) lies inside the half-size square inset by 0.25.
        assert_eq!(image.get_pixel(5, 144).0, [189, 207, 222]);
        // World (0.15, 0.15) lies in the inset margin.
        assert_eq!(image.get_pixel(1, 148).0, [240, 240, 240]);
    }

    #[test]
    fn attractor_marker_is_drawn() {
        let mut attractors = AttractorSet::new();
        attractors.add(10.0, 7.5, 1.0, 4.0);
        let image = rasterize_facade(&[], &attractors, &small_config()).expect("render");
        assert_eq!(image.get_pixel(100, 75).0, [255, 0, 0]);

        let hidden = small_config().without_attractors();
        let image = rasterize_facade(&[], &attractors, &hidden).expect("render");
        assert_eq!(image.get_pixel(100, 75).0, [240, 240, 240]);
    }

    #[test]
    fn for_grid_scales_extent() {
        let grid = FacadeGrid::default();
        let config = RenderConfig::for_grid(&grid, 40);
        assert_eq!(config.image_size, (800, 600));
        assert_eq!(config.domain_extent, DVec2::new(20.0, 15.0));
    }

    #[test]
    fn rejects_zero_sized_image() {
        let config = RenderConfig::new((0, 10), DVec2::new(1.0, 1.0));
        assert!(rasterize_facade(&[], &AttractorSet::new(), &config).is_err());
    }
}
