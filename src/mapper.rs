//! Adaptive mapping of the logical matrix onto a physical display
//!
//! Geometry (pitch, dot size, gap) adapts to whatever surface is
//! attached. Configuration input is advisory: the clamping chain below
//! always yields a non-degenerate result, so a hostile diameter/gap pair
//! can squash the dots but never break the render.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::DrawSurface;
use crate::color::{Rgb, scale_color};
use crate::frame::FrameBuffer;

const BACKGROUND: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Visual appearance of the emulated LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedAppearance {
    /// Maximum dot diameter in physical pixels
    pub diameter: u8,
    /// Requested gap between dots in physical pixels
    pub gap: u8,
    /// Base LED color
    pub color: Rgb,
    /// Global brightness (0-255), applied before per-cell intensity
    pub brightness: u8,
    /// Optional faint color for unlit cells
    pub unlit: Option<Rgb>,
}

impl Default for LedAppearance {
    fn default() -> Self {
        Self {
            diameter: 5,
            gap: 0,
            color: Rgb { r: 255, g: 0, b: 0 },
            brightness: 255,
            unlit: None,
        }
    }
}

/// Physical placement of the logical matrix on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    /// Physical-pixel spacing between adjacent logical cells
    pub pitch: u32,
    /// Rendered dot edge length
    pub dot: u32,
    /// Space left between dots; `dot + gap == pitch`
    pub gap: u32,
    /// Offset of the dot inside its pitch cell
    pub inset: u32,
    /// Top-left corner of the matrix on the surface
    pub origin_x: i32,
    /// Top-left corner of the matrix on the surface
    pub origin_y: i32,
}

impl DisplayGeometry {
    /// Compute geometry for a physical display
    ///
    /// The result always satisfies `dot + gap == pitch`, `dot >= 1` and
    /// `pitch >= 1`, whatever the inputs. When the display area minus the
    /// status bar cannot hold one matrix row per cell, the status bar is
    /// ignored for vertical centering.
    #[allow(clippy::cast_possible_wrap)]
    pub fn compute(
        display_w: u32,
        display_h: u32,
        status_bar_h: u32,
        appearance: &LedAppearance,
        logical_w: u32,
        logical_h: u32,
    ) -> Self {
        let logical_w = logical_w.max(1);
        let logical_h = logical_h.max(1);

        let mut area_h = display_h.saturating_sub(status_bar_h);
        if area_h < 1 {
            area_h = display_h;
        }

        let pitch = (display_w / logical_w).min(area_h / logical_h).max(1);

        let gap_wanted = u32::from(appearance.gap).min(pitch - 1);
        let max_dot = u32::from(appearance.diameter).max(1);
        let dot = (pitch - gap_wanted).clamp(1, max_dot);
        let gap = pitch - dot;
        let inset = (pitch - dot) / 2;

        let matrix_w = logical_w * pitch;
        let matrix_h = logical_h * pitch;
        if area_h < matrix_h {
            area_h = display_h;
        }

        Self {
            pitch,
            dot,
            gap,
            inset,
            origin_x: (display_w as i32 - matrix_w as i32) / 2,
            origin_y: (area_h as i32 - matrix_h as i32) / 2,
        }
    }
}

/// Renders the logical framebuffer onto a [`DrawSurface`]
///
/// Geometry is recomputed only when the surface size or the appearance
/// changes, never mid-frame.
pub struct DisplayMapper {
    appearance: LedAppearance,
    status_bar_h: u32,
    geometry: DisplayGeometry,
    computed_for: Option<(u32, u32)>,
}

impl DisplayMapper {
    pub fn new(appearance: LedAppearance, status_bar_h: u32) -> Self {
        Self {
            appearance,
            status_bar_h,
            geometry: DisplayGeometry::compute(0, 0, status_bar_h, &appearance, 1, 1),
            computed_for: None,
        }
    }

    pub const fn appearance(&self) -> &LedAppearance {
        &self.appearance
    }

    /// Replace the appearance and invalidate the cached geometry
    pub const fn set_appearance(&mut self, appearance: LedAppearance) {
        self.appearance = appearance;
        self.computed_for = None;
    }

    /// Geometry from the most recent render
    pub const fn geometry(&self) -> &DisplayGeometry {
        &self.geometry
    }

    /// Render the framebuffer to the surface
    ///
    /// Clears the surface, draws one dot per cell with the base color
    /// scaled by cell intensity, then presents. Buffered surfaces make
    /// the update atomic in `present`; direct surfaces draw live.
    #[allow(clippy::cast_possible_wrap)]
    pub fn render<S: DrawSurface, const W: usize, const H: usize>(
        &mut self,
        fb: &FrameBuffer<W, H>,
        surface: &mut S,
    ) {
        let size = (surface.width(), surface.height());
        if self.computed_for != Some(size) {
            self.geometry = DisplayGeometry::compute(
                size.0,
                size.1,
                self.status_bar_h,
                &self.appearance,
                W as u32,
                H as u32,
            );
            self.computed_for = Some(size);
            #[cfg(feature = "esp32-log")]
            println!(
                "geometry: pitch={} dot={} gap={} inset={}",
                self.geometry.pitch, self.geometry.dot, self.geometry.gap, self.geometry.inset,
            );
        }

        let geometry = self.geometry;
        let base = scale_color(self.appearance.color, self.appearance.brightness);

        surface.clear(BACKGROUND);
        for y in 0..H {
            for x in 0..W {
                let value = fb.get(x as i32, y as i32);
                let px = geometry.origin_x + x as i32 * geometry.pitch as i32 + geometry.inset as i32;
                let py = geometry.origin_y + y as i32 * geometry.pitch as i32 + geometry.inset as i32;
                if value == 0 {
                    if let Some(unlit) = self.appearance.unlit {
                        surface.fill_rect(px, py, geometry.dot, geometry.dot, unlit);
                    }
                    continue;
                }
                surface.fill_rect(px, py, geometry.dot, geometry.dot, scale_color(base, value));
            }
        }
        surface.present();
    }
}
