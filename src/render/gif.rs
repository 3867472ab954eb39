//! Animated GIF export, one frame per recorded grid

use crate::colors::cell_rgb;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::trajectory::Trajectory;
use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, Rgba, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `trajectory` to `path`. The animation plays once.
pub fn write_gif(path: &Path, trajectory: &Trajectory, config: &RenderConfig) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    encode_gif(&mut file, trajectory, config)?;
    file.flush()?;
    log::info!("wrote {} frames to {}", trajectory.len(), path.display());
    Ok(())
}

pub fn encode_gif<W: Write>(writer: W, trajectory: &Trajectory, config: &RenderConfig) -> Result<()> {
    let n = trajectory.initial().size();
    if n == 0 {
        return Err(Error::invalid("cannot export an empty grid as an image"));
    }
    let cell_px = config.cell_px.max(1);
    let side = frame_side(n, cell_px)?;
    let delay = Delay::from_saturating_duration(config.frame_delay);

    // No repeat extension is written, so viewers stop on the last frame
    let mut encoder = GifEncoder::new(writer);
    for grid in trajectory {
        let image = rasterize(grid, side, cell_px, config.color_scheme);
        encoder.encode_frame(Frame::from_parts(image, 0, 0, delay))?;
    }
    Ok(())
}

/// GIF dimensions are 16-bit
fn frame_side(n: usize, cell_px: u32) -> Result<u32> {
    (n as u64)
        .checked_mul(cell_px as u64)
        .filter(|&side| side <= u16::MAX as u64)
        .map(|side| side as u32)
        .ok_or_else(|| {
            Error::invalid(format!(
                "{}x{} grid at {} px per cell exceeds the GIF size limit",
                n, n, cell_px
            ))
        })
}

fn rasterize(grid: &Grid, side: u32, cell_px: u32, scheme: u8) -> RgbaImage {
    let dead = cell_rgb(scheme, false);
    let live = cell_rgb(scheme, true);
    RgbaImage::from_fn(side, side, |x, y| {
        let alive = grid.get((y / cell_px) as usize, (x / cell_px) as usize) == Some(1);
        let [r, g, b] = if alive { live } else { dead };
        Rgba([r, g, b, 255])
    })
}
