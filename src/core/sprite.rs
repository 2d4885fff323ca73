//! Raster rocket sprite for the headless display surface.
//!
//! The artwork is loaded and scaled once, then turned per frame onto a canvas
//! large enough to hold it at any angle.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use tracing::info;

use crate::core::error::{Result, RocketError};
use crate::core::frame::SpritePlacement;

pub const SPRITE_PATH: &str = "assets/rocket.png";
pub const SPRITE_PATH_ENV: &str = "ROCKET_SPRITE";

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Sprite location, honoring the `ROCKET_SPRITE` override.
pub fn sprite_path() -> String {
    std::env::var(SPRITE_PATH_ENV).unwrap_or_else(|_| SPRITE_PATH.to_string())
}

#[derive(Clone, Debug)]
pub struct RocketSprite {
    artwork: RgbaImage,
}

impl RocketSprite {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let artwork = image::open(path)
            .map_err(|err| RocketError::SpriteLoad {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?
            .into_rgba8();
        info!(
            path = %path.display(),
            width = artwork.width(),
            height = artwork.height(),
            "rocket sprite loaded"
        );
        Ok(Self { artwork })
    }

    /// Artwork must point up.
    pub fn from_image(artwork: RgbaImage) -> Self {
        Self { artwork }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.artwork.dimensions()
    }

    /// Rescales to `height` pixels, keeping the aspect ratio.
    pub fn scaled_to_height(self, height: u32) -> Self {
        let (w, h) = self.artwork.dimensions();
        if h == 0 || h == height {
            return self;
        }
        let width = ((u64::from(w) * u64::from(height)) / u64::from(h)).max(1) as u32;
        Self {
            artwork: imageops::resize(&self.artwork, width, height.max(1), FilterType::Triangle),
        }
    }

    /// Artwork turned counterclockwise by `placement.rotation_deg` on the
    /// expanded bounding box. Uncovered pixels are transparent.
    pub fn rotated(&self, placement: &SpritePlacement) -> RgbaImage {
        let (w, h) = self.artwork.dimensions();
        let (box_w, box_h) = placement.expanded_size(f64::from(w), f64::from(h));
        // Trim float noise so quarter turns keep whole-pixel sizes.
        let fit = |side: f64| (side - 1e-9).ceil().max(1.0) as u32;
        let (out_w, out_h) = (fit(box_w), fit(box_h));

        let (sin, cos) = placement.rotation_deg.to_radians().sin_cos();
        let src_center = ((f64::from(w) - 1.0) * 0.5, (f64::from(h) - 1.0) * 0.5);
        let out_center = ((f64::from(out_w) - 1.0) * 0.5, (f64::from(out_h) - 1.0) * 0.5);

        RgbaImage::from_fn(out_w, out_h, |x, y| {
            let dx = f64::from(x) - out_center.0;
            let dy = f64::from(y) - out_center.1;
            // Inverse of the on-screen (y down) counterclockwise turn.
            let sx = (dx * cos) - (dy * sin) + src_center.0;
            let sy = (dx * sin) + (dy * cos) + src_center.1;
            imageops::interpolate_bilinear(&self.artwork, sx as f32, sy as f32)
                .unwrap_or(TRANSPARENT)
        })
    }
}
