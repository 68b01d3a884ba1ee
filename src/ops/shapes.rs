//! Stroke and shape rasterization.
//!
//! Everything here strokes a path with binary coverage: the pixel at
//! (x, y) is painted when the lattice point (x, y) lies within half the
//! stroke width of the path. Stroking
//! segments by distance gives round caps, and stroking polylines by the
//! minimum distance over all segments gives round joins, matching the
//! round-cap/round-join stroke the original drawing surface used.

use image::Rgba;
use rayon::prelude::*;

use crate::canvas::PixelBuffer;
use crate::tools::Tool;

/// Euclidean distance from point (px, py) to the segment a→b.
/// A zero-length segment degenerates to point distance, which is what
/// makes a single click paint a round dot.
#[inline]
fn dist_to_segment(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let ex = bx - ax;
    let ey = by - ay;
    let len_sq = ex * ex + ey * ey;
    let t = if len_sq <= 1e-12 {
        0.0
    } else {
        (((px - ax) * ex + (py - ay) * ey) / len_sq).clamp(0.0, 1.0)
    };
    let dx = px - (ax + ex * t);
    let dy = py - (ay + ey * t);
    (dx * dx + dy * dy).sqrt()
}

/// Approximate signed distance to an ellipse boundary centred at the
/// origin with radii (rx, ry). Negative inside. Exact for circles; close
/// enough elsewhere for stroke-width testing.
#[inline]
fn sdf_ellipse(px: f32, py: f32, rx: f32, ry: f32) -> f32 {
    let nx = px / rx;
    let ny = py / ry;
    let norm = (nx * nx + ny * ny).sqrt();
    if norm < 1e-6 {
        return -rx.min(ry);
    }
    // Scale the normalised-space distance back to pixel space using the
    // local gradient magnitude of the implicit ellipse function.
    let grad = (rx * rx * ny * ny + ry * ry * nx * nx).sqrt() / (rx * ry * norm);
    (norm - 1.0) / grad
}

/// Paint `color` into every pixel of the clipped bounding box whose
/// lattice point satisfies `covered`. Rows are processed in parallel.
fn paint_region<F>(
    buf: &mut PixelBuffer,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    color: Rgba<u8>,
    covered: F,
) where
    F: Fn(f32, f32) -> bool + Sync,
{
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(buf.width() as i64);
    let y1 = y1.min(buf.height() as i64);
    if x0 >= x1 || y0 >= y1 {
        return;
    }
    let row_len = buf.width() as usize;
    buf.pixels_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .skip(y0 as usize)
        .take((y1 - y0) as usize)
        .for_each(|(y, row)| {
            let py = y as f32;
            for x in x0..x1 {
                let px = x as f32;
                if covered(px, py) {
                    row[x as usize] = color;
                }
            }
        });
}

/// Stroke an open or closed polyline. `stroke_width` is the full width in
/// pixels; widths below 1 are bumped to 1 so a stroke is never invisible.
pub fn stroke_polyline(
    buf: &mut PixelBuffer,
    points: &[(f32, f32)],
    closed: bool,
    stroke_width: u32,
    color: Rgba<u8>,
) {
    if points.is_empty() {
        return;
    }
    let half = stroke_width.max(1) as f32 / 2.0;

    let mut segments: Vec<(f32, f32, f32, f32)> = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        segments.push((pair[0].0, pair[0].1, pair[1].0, pair[1].1));
    }
    if closed && points.len() > 2 {
        let first = points[0];
        let last = points[points.len() - 1];
        segments.push((last.0, last.1, first.0, first.1));
    }
    if segments.is_empty() {
        // Single point: a dot.
        let p = points[0];
        segments.push((p.0, p.1, p.0, p.1));
    }

    let min_x = points.iter().map(|p| p.0).fold(f32::MAX, f32::min);
    let min_y = points.iter().map(|p| p.1).fold(f32::MAX, f32::min);
    let max_x = points.iter().map(|p| p.0).fold(f32::MIN, f32::max);
    let max_y = points.iter().map(|p| p.1).fold(f32::MIN, f32::max);

    paint_region(
        buf,
        (min_x - half).floor() as i64 - 1,
        (min_y - half).floor() as i64 - 1,
        (max_x + half).ceil() as i64 + 1,
        (max_y + half).ceil() as i64 + 1,
        color,
        |px, py| {
            segments
                .iter()
                .any(|&(ax, ay, bx, by)| dist_to_segment(px, py, ax, ay, bx, by) <= half)
        },
    );
}

/// Stroke a single line segment with round caps.
pub fn stroke_segment(
    buf: &mut PixelBuffer,
    a: (f32, f32),
    b: (f32, f32),
    stroke_width: u32,
    color: Rgba<u8>,
) {
    stroke_polyline(buf, &[a, b], false, stroke_width, color);
}

/// Stroke an ellipse ring centred at (cx, cy).
fn stroke_ellipse(
    buf: &mut PixelBuffer,
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
    stroke_width: u32,
    color: Rgba<u8>,
) {
    let half = stroke_width.max(1) as f32 / 2.0;
    // Degenerate radii still paint: a zero-drag oval collapses to a dot.
    let rx = rx.max(0.25);
    let ry = ry.max(0.25);
    paint_region(
        buf,
        (cx - rx - half).floor() as i64 - 1,
        (cy - ry - half).floor() as i64 - 1,
        (cx + rx + half).ceil() as i64 + 1,
        (cy + ry + half).ceil() as i64 + 1,
        color,
        |px, py| sdf_ellipse(px - cx, py - cy, rx, ry).abs() <= half,
    );
}

/// Render a shape tool's geometry from the drag's start and current
/// points. Non-shape tools are ignored.
///
/// Geometry quirks preserved from the original behavior: Rectangle and
/// Oval span the drag's bounding box, while Square and Circle anchor at
/// the start point with extent `min(|dx|, |dy|)`.
pub fn draw_shape(
    buf: &mut PixelBuffer,
    tool: Tool,
    start: (f32, f32),
    cur: (f32, f32),
    stroke_width: u32,
    color: Rgba<u8>,
) {
    let (sx, sy) = start;
    let (cx, cy) = cur;
    let x = sx.min(cx);
    let y = sy.min(cy);
    let w = (cx - sx).abs();
    let h = (cy - sy).abs();

    match tool {
        Tool::Rectangle => {
            let corners = [(x, y), (x + w, y), (x + w, y + h), (x, y + h)];
            stroke_polyline(buf, &corners, true, stroke_width, color);
        }
        Tool::Square => {
            let s = w.min(h);
            let corners = [(sx, sy), (sx + s, sy), (sx + s, sy + s), (sx, sy + s)];
            stroke_polyline(buf, &corners, true, stroke_width, color);
        }
        Tool::Oval => {
            stroke_ellipse(buf, x + w / 2.0, y + h / 2.0, w / 2.0, h / 2.0, stroke_width, color);
        }
        Tool::Circle => {
            let c = w.min(h);
            stroke_ellipse(buf, sx + c / 2.0, sy + c / 2.0, c / 2.0, c / 2.0, stroke_width, color);
        }
        Tool::Triangle => {
            let apex = ((sx + cx) / 2.0, sy);
            let corners = [apex, (sx, cy), (cx, cy)];
            stroke_polyline(buf, &corners, true, stroke_width, color);
        }
        _ => {}
    }
}
