//! Paints a [`RenderPlan`] into an RGB image.
//!
//! Pixel `(x, y)` is grid cell `(row = y, col = x)`. The elevation map is drawn
//! in gray, the reachability fan over it in [`FAN_COLOR`], and the optimal
//! path last in [`PATH_COLOR`].

use std::path::Path as FsPath;

use image::{Rgb, RgbImage};

use crate::error::Result;
use crate::render::RenderPlan;

pub const FAN_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
pub const PATH_COLOR: Rgb<u8> = Rgb([255, 255, 0]);

/// Rasterise `plan` into a freshly allocated image.
pub fn paint(plan: &RenderPlan) -> RgbImage {
    let mut img = RgbImage::from_fn(plan.width() as u32, plan.height() as u32, |x, y| {
        let (row, col) = (y as usize, x as usize);
        if plan.on_fan(row, col) {
            FAN_COLOR
        } else {
            let v = plan.intensity(row, col);
            Rgb([v, v, v])
        }
    });
    if let Some(path) = plan.best_path() {
        for &(row, col) in path {
            img.put_pixel(col as u32, row as u32, PATH_COLOR);
        }
    }
    img
}

/// Paint `plan` and write it to `path`; the format follows the extension.
pub fn save<P: AsRef<FsPath>>(plan: &RenderPlan, path: P) -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.as_ref().display(), "saving image");
    paint(plan).save(path)?;
    Ok(())
}
