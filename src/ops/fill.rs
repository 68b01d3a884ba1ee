use std::collections::VecDeque;

use image::Rgba;

use crate::canvas::PixelBuffer;

/// Flood-fill the 4-connected region of uniform color containing
/// `(start_x, start_y)` with `new_color`.
///
/// Uses an explicit work queue rather than recursion so a fill spanning the
/// whole canvas cannot blow the stack. Neighbors are enqueued in N, S, E, W
/// order; the order is not semantically significant but is kept
/// deterministic. Each dequeued coordinate re-checks bounds and color
/// before recoloring, so duplicate queue entries are harmless — a pixel
/// already recolored no longer matches the target and is skipped.
///
/// No-ops: an out-of-bounds start, or a region that already has
/// `new_color` (which would otherwise loop forever).
pub fn flood_fill(buf: &mut PixelBuffer, start_x: u32, start_y: u32, new_color: Rgba<u8>) {
    if !buf.in_bounds(start_x, start_y) {
        return;
    }
    let target = buf.get_pixel(start_x, start_y);
    if target == new_color {
        return;
    }

    let mut queue: VecDeque<(i64, i64)> = VecDeque::new();
    queue.push_back((start_x as i64, start_y as i64));

    while let Some((x, y)) = queue.pop_front() {
        if x < 0 || y < 0 || x >= buf.width() as i64 || y >= buf.height() as i64 {
            continue;
        }
        let (ux, uy) = (x as u32, y as u32);
        if buf.get_pixel(ux, uy) != target {
            continue;
        }
        buf.put_pixel(ux, uy, new_color);
        queue.push_back((x, y - 1));
        queue.push_back((x, y + 1));
        queue.push_back((x + 1, y));
        queue.push_back((x - 1, y));
    }
}
