//! Kernel-density layer for the results charts.
//!
//! The server hands back raw (x, y, count) tuples per dish; this
//! module turns them into filled contour bands. Points are deposited
//! onto a coarse pixel grid weighted by their count, smoothed with
//! three separable box-blur passes (a cheap Gaussian approximation),
//! and the smoothed field is traced into isolines by the `contour`
//! crate's marching squares. Output is SVG path data ready for the
//! view layer.

use contour::ContourBuilder;
use geo_types::{LineString, MultiPolygon};

/// Grid cell edge in px. The charts are small (180 px), so halving
/// the resolution keeps the blur and the tracing cheap without
/// visible stair-stepping.
pub const CELL: f64 = 2.0;

const LEVELS: usize = 8;
const BLUR_PASSES: usize = 3;

/// A weighted point already mapped into chart pixel space.
#[derive(Clone, Copy, Debug)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub weight: f64,
}

/// One filled contour band: the density value of its threshold and
/// the SVG path outlining it (grid coordinates scaled back to px).
#[derive(Clone, Debug)]
pub struct Band {
    pub value: f64,
    pub path: String,
}

pub fn contour_bands(points: &[ScreenPoint], width: f64, height: f64, bandwidth: f64) -> Vec<Band> {
    if points.is_empty() {
        return Vec::new();
    }

    let cols = (width / CELL).ceil() as usize;
    let rows = (height / CELL).ceil() as usize;
    let mut grid = deposit(points, cols, rows);

    let radius = ((bandwidth / CELL) / 2.0).round().max(1.0) as usize;
    for _ in 0..BLUR_PASSES {
        blur_rows(&mut grid, cols, rows, radius);
        blur_cols(&mut grid, cols, rows, radius);
    }

    let max = grid.iter().cloned().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return Vec::new();
    }

    let thresholds: Vec<f64> = (1..=LEVELS)
        .map(|i| max * i as f64 / (LEVELS + 1) as f64)
        .collect();

    let builder = ContourBuilder::new(cols as u32, rows as u32, true);
    let contours = match builder.contours(&grid, &thresholds) {
        Ok(contours) => contours,
        Err(_) => return Vec::new(),
    };

    contours
        .iter()
        .map(|c| Band {
            value: c.threshold(),
            path: multipolygon_path(c.geometry()),
        })
        .filter(|band| !band.path.is_empty())
        .collect()
}

/// Largest band value, for scaling fill opacity.
pub fn max_band_value(bands: &[Band]) -> f64 {
    bands.iter().map(|b| b.value).fold(0.0_f64, f64::max)
}

fn deposit(points: &[ScreenPoint], cols: usize, rows: usize) -> Vec<f64> {
    let mut grid = vec![0.0_f64; cols * rows];

    for p in points {
        let col = ((p.x / CELL) as isize).clamp(0, cols as isize - 1) as usize;
        let row = ((p.y / CELL) as isize).clamp(0, rows as isize - 1) as usize;
        grid[row * cols + col] += p.weight;
    }

    grid
}

fn blur_rows(grid: &mut [f64], cols: usize, rows: usize, radius: usize) {
    let mut line = vec![0.0_f64; cols];

    for row in 0..rows {
        let offset = row * cols;
        line.copy_from_slice(&grid[offset..offset + cols]);

        for col in 0..cols {
            let lo = col.saturating_sub(radius);
            let hi = (col + radius).min(cols - 1);
            let sum: f64 = line[lo..=hi].iter().sum();
            grid[offset + col] = sum / (hi - lo + 1) as f64;
        }
    }
}

fn blur_cols(grid: &mut [f64], cols: usize, rows: usize, radius: usize) {
    let mut line = vec![0.0_f64; rows];

    for col in 0..cols {
        for row in 0..rows {
            line[row] = grid[row * cols + col];
        }

        for row in 0..rows {
            let lo = row.saturating_sub(radius);
            let hi = (row + radius).min(rows - 1);
            let sum: f64 = line[lo..=hi].iter().sum();
            grid[row * cols + col] = sum / (hi - lo + 1) as f64;
        }
    }
}

fn multipolygon_path(geometry: &MultiPolygon<f64>) -> String {
    let mut d = String::new();

    for polygon in &geometry.0 {
        ring_path(&mut d, polygon.exterior());
        for interior in polygon.interiors() {
            ring_path(&mut d, interior);
        }
    }

    d
}

fn ring_path(d: &mut String, ring: &LineString<f64>) {
    for (i, coord) in ring.0.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!(
            "{}{:.1} {:.1}",
            command,
            coord.x * CELL,
            coord.y * CELL
        ));
    }

    if !ring.0.is_empty() {
        d.push('Z');
    }
}
