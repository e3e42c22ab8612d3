//! Size-versus-step-count chart rendering for benchmark sweeps
//!
//! Draws a scatter line of search effort per grid size straight onto an
//! image canvas: axis lines, 1/2/5-decade gridlines, a connecting
//! polyline, and square markers. The stack carries no font rasterizer, so
//! the chart is label-free.

use crate::analysis::benchmark::Measurement;
use crate::io::configuration::{
    CHART_HEIGHT, CHART_MARGIN, CHART_MARKER_RADIUS, CHART_MAX_TICKS, CHART_WIDTH,
};
use crate::io::error::{DissectionError, Result, computation_error};
use crate::math::scale::{linear_map, tick_step};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const AXIS: Rgba<u8> = Rgba([0, 0, 0, 255]);
const GRID: Rgba<u8> = Rgba([224, 224, 224, 255]);
const SERIES: Rgba<u8> = Rgba([31, 119, 180, 255]);

// Clipped pixel write; everything off-canvas is silently dropped
fn plot(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_line(img: &mut RgbaImage, from: (i64, i64), to: (i64, i64), color: Rgba<u8>) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let step_x = if x < to.0 { 1 } else { -1 };
    let step_y = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(img, x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += step_x;
        }
        if doubled <= dx {
            err += dx;
            y += step_y;
        }
    }
}

fn draw_marker(img: &mut RgbaImage, center: (i64, i64), color: Rgba<u8>) {
    let radius = CHART_MARKER_RADIUS as i64;
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            plot(img, center.0 + dx, center.1 + dy, color);
        }
    }
}

/// Render a size-versus-steps chart for a benchmark sweep
///
/// # Errors
///
/// Returns an error if:
/// - The sweep is empty
/// - The image cannot be saved to the specified path
pub fn render_step_chart(measurements: &[Measurement], output_path: &Path) -> Result<()> {
    if measurements.is_empty() {
        return Err(computation_error("chart", &"benchmark sweep is empty"));
    }

    let sizes: Vec<f64> = measurements
        .iter()
        .map(|m| f64::from(m.grid_size))
        .collect();
    let steps: Vec<f64> = measurements.iter().map(|m| m.steps as f64).collect();

    let x_min = sizes.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = sizes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let y_max = steps.iter().copied().fold(0.0, f64::max).max(1.0);

    let left = f64::from(CHART_MARGIN);
    let right = f64::from(CHART_WIDTH - CHART_MARGIN);
    let top = f64::from(CHART_MARGIN);
    let bottom = f64::from(CHART_HEIGHT - CHART_MARGIN);

    let to_px = |size: f64, count: f64| -> (i64, i64) {
        let px = linear_map(size, (x_min, x_max), (left, right));
        // Pixel rows grow downward, so the value axis maps inverted
        let py = linear_map(count, (0.0, y_max), (bottom, top));
        (px.round() as i64, py.round() as i64)
    };

    let mut img = ImageBuffer::from_pixel(CHART_WIDTH, CHART_HEIGHT, BACKGROUND);

    // Gridlines before data so the series stays on top
    let x_step = tick_step(x_max - x_min, CHART_MAX_TICKS);
    let mut x_tick = (x_min / x_step).ceil() * x_step;
    while x_tick <= x_max {
        let (px, _) = to_px(x_tick, 0.0);
        draw_line(&mut img, (px, top as i64), (px, bottom as i64), GRID);
        draw_line(&mut img, (px, bottom as i64), (px, bottom as i64 + 4), AXIS);
        x_tick += x_step;
    }

    let y_step = tick_step(y_max, CHART_MAX_TICKS);
    let mut y_tick = y_step;
    while y_tick <= y_max {
        let (_, py) = to_px(x_min, y_tick);
        draw_line(&mut img, (left as i64, py), (right as i64, py), GRID);
        draw_line(&mut img, (left as i64 - 4, py), (left as i64, py), AXIS);
        y_tick += y_step;
    }

    draw_line(
        &mut img,
        (left as i64, top as i64),
        (left as i64, bottom as i64),
        AXIS,
    );
    draw_line(
        &mut img,
        (left as i64, bottom as i64),
        (right as i64, bottom as i64),
        AXIS,
    );

    let points: Vec<(i64, i64)> = sizes
        .iter()
        .zip(&steps)
        .map(|(&size, &count)| to_px(size, count))
        .collect();

    for pair in points.windows(2) {
        if let [from, to] = pair {
            draw_line(&mut img, *from, *to, SERIES);
        }
    }
    for &point in &points {
        draw_marker(&mut img, point, SERIES);
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
