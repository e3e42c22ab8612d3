//! PNG rendering of a completed dissection
//!
//! Each square becomes a filled, bordered rectangle scaled onto a
//! fixed-resolution canvas. Fill colors come from a seeded generator so a
//! given seed always reproduces the same palette.

use crate::io::configuration::{RENDER_RESOLUTION, SQUARE_BORDER_WIDTH};
use crate::io::error::{DissectionError, Result};
use crate::spatial::Square;
use image::{ImageBuffer, Rgba};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BORDER: Rgba<u8> = Rgba([0, 0, 0, 255]);

// Every cell must be claimed exactly once before anything is drawn
fn verify_exact_cover(squares: &[Square], grid_size: u32) -> Result<()> {
    let cells = grid_size as usize;
    let mut coverage = Array2::<u16>::zeros((cells, cells));

    for square in squares {
        if square.size == 0 || square.right() > grid_size || square.bottom() > grid_size {
            return Err(DissectionError::InvalidDissection {
                reason: format!("square {square} does not fit a {grid_size}x{grid_size} grid"),
            });
        }
        for x in square.x..square.right() {
            for y in square.y..square.bottom() {
                if let Some(count) = coverage.get_mut([x as usize, y as usize]) {
                    *count += 1;
                }
            }
        }
    }

    for ((x, y), &count) in coverage.indexed_iter() {
        if count == 0 {
            return Err(DissectionError::InvalidDissection {
                reason: format!("cell ({x}, {y}) is not covered"),
            });
        }
        if count > 1 {
            return Err(DissectionError::InvalidDissection {
                reason: format!("cell ({x}, {y}) is covered {count} times"),
            });
        }
    }

    Ok(())
}

/// Render a dissection as a PNG of filled, bordered rectangles
///
/// The canvas edge is the configured resolution rounded to a whole number
/// of pixels per cell, so the drawn squares tile it exactly. `seed` fixes
/// the fill palette.
///
/// # Errors
///
/// Returns an error if:
/// - The squares do not exactly tile the grid (gap, overlap, or a square
///   out of bounds)
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn render_dissection(
    squares: &[Square],
    grid_size: u32,
    seed: u64,
    output_path: &Path,
) -> Result<()> {
    verify_exact_cover(squares, grid_size)?;

    let cell = ((f64::from(RENDER_RESOLUTION) / f64::from(grid_size)).round() as u32).max(1);
    let canvas = cell * grid_size;

    let mut img = ImageBuffer::from_pixel(canvas, canvas, BACKGROUND);
    let mut rng = StdRng::seed_from_u64(seed);

    for square in squares {
        let fill = Rgba([
            rng.random::<u8>(),
            rng.random::<u8>(),
            rng.random::<u8>(),
            255,
        ]);

        let x0 = square.x * cell;
        let y0 = square.y * cell;
        let edge = square.size * cell;
        let border = SQUARE_BORDER_WIDTH.min(edge / 2).max(1);

        for dx in 0..edge {
            for dy in 0..edge {
                let on_border =
                    dx < border || dy < border || dx >= edge - border || dy >= edge - border;
                let color = if on_border { BORDER } else { fill };
                img.put_pixel(x0 + dx, y0 + dy, color);
            }
        }
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| DissectionError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| DissectionError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
