use image::{Rgba, RgbaImage};

/// Default canvas dimensions for a fresh session.
pub const DEFAULT_CANVAS_WIDTH: u32 = 1000;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 700;

/// Background color: opaque white. The Eraser tool paints this color.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Sentinel returned by `get_pixel` for out-of-bounds reads.
static TRANSPARENT_PIXEL: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Owned raster buffer: a row-major RGBA pixel grid with origin top-left.
///
/// All accessors tolerate out-of-bounds coordinates — reads return a
/// transparent sentinel and writes are silently dropped, so a resize racing
/// a pointer event can never crash the engine.
///
/// `Clone` is a deep copy: the pixel `Vec` is owned, so a cloned buffer
/// shares no storage with its source.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba<u8>>,
}

impl PixelBuffer {
    /// Create a buffer filled with `color`. Degenerate dimensions are
    /// clamped to 1×1 rather than rejected.
    pub fn new(width: u32, height: u32, color: Rgba<u8>) -> Self {
        let (width, height) = if width == 0 || height == 0 {
            log_warn!("PixelBuffer::new: degenerate dimensions {}x{}, clamped to 1x1", width, height);
            (1, 1)
        } else {
            (width, height)
        };
        Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Read a pixel. Out-of-bounds reads return fully transparent black.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        if self.in_bounds(x, y) {
            self.pixels[(y * self.width + x) as usize]
        } else {
            TRANSPARENT_PIXEL
        }
    }

    /// Write a pixel. Out-of-bounds writes are dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        if self.in_bounds(x, y) {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    /// Source-over composite `color` onto the pixel at (x, y), scaled by a
    /// coverage factor in `[0, 1]`. Used by the text rasterizer, which
    /// produces fractional glyph coverage.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>, coverage: f32) {
        if !self.in_bounds(x, y) || coverage <= 0.0 {
            return;
        }
        let idx = (y * self.width + x) as usize;
        let dst = self.pixels[idx];
        let a = (color[3] as f32 / 255.0) * coverage.min(1.0);
        let inv = 1.0 - a;
        self.pixels[idx] = Rgba([
            (color[0] as f32 * a + dst[0] as f32 * inv).round() as u8,
            (color[1] as f32 * a + dst[1] as f32 * inv).round() as u8,
            (color[2] as f32 * a + dst[2] as f32 * inv).round() as u8,
            (255.0 * a + dst[3] as f32 * inv).round() as u8,
        ]);
    }

    /// Fill the whole buffer with `color`.
    pub fn fill(&mut self, color: Rgba<u8>) {
        self.pixels.fill(color);
    }

    /// Reallocate to `new_w` × `new_h`, preserving the top-left-aligned
    /// overlap of existing content and filling everything else with
    /// `background`.
    pub fn resize(&mut self, new_w: u32, new_h: u32, background: Rgba<u8>) {
        let new_w = new_w.max(1);
        let new_h = new_h.max(1);
        if new_w == self.width && new_h == self.height {
            return;
        }
        let mut pixels = vec![background; (new_w * new_h) as usize];
        let copy_w = self.width.min(new_w) as usize;
        for y in 0..self.height.min(new_h) {
            let src = (y * self.width) as usize;
            let dst = (y * new_w) as usize;
            pixels[dst..dst + copy_w].copy_from_slice(&self.pixels[src..src + copy_w]);
        }
        self.width = new_w;
        self.height = new_h;
        self.pixels = pixels;
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Rgba<u8>] {
        &self.pixels
    }

    /// Mutable row-major pixel slice. Rows are `width()` pixels long, which
    /// is what the rasterizer's row-parallel chunking relies on.
    pub fn pixels_mut(&mut self) -> &mut [Rgba<u8>] {
        &mut self.pixels
    }

    /// Flatten into an `RgbaImage` for encoding or display upload.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut raw = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            raw.extend_from_slice(&px.0);
        }
        RgbaImage::from_raw(self.width, self.height, raw)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_access_is_silent() {
        let mut buf = PixelBuffer::new(4, 4, BACKGROUND);
        buf.put_pixel(10, 10, Rgba([1, 2, 3, 4]));
        assert_eq!(buf.get_pixel(10, 10), Rgba([0, 0, 0, 0]));
        assert_eq!(buf.get_pixel(3, 3), BACKGROUND);
    }

    #[test]
    fn degenerate_dimensions_clamp_to_one() {
        let buf = PixelBuffer::new(0, 5, BACKGROUND);
        assert_eq!((buf.width(), buf.height()), (1, 1));
    }

    #[test]
    fn resize_preserves_top_left_overlap() {
        let mut buf = PixelBuffer::new(3, 3, BACKGROUND);
        let red = Rgba([255, 0, 0, 255]);
        buf.put_pixel(2, 2, red);
        buf.resize(5, 4, BACKGROUND);
        assert_eq!(buf.get_pixel(2, 2), red);
        assert_eq!(buf.get_pixel(4, 3), BACKGROUND);

        buf.resize(2, 2, BACKGROUND);
        assert_eq!((buf.width(), buf.height()), (2, 2));
        assert_eq!(buf.get_pixel(0, 0), BACKGROUND);
    }

    #[test]
    fn blend_full_coverage_replaces_opaque_pixel() {
        let mut buf = PixelBuffer::new(2, 2, BACKGROUND);
        buf.blend_pixel(0, 0, Rgba([0, 0, 0, 255]), 1.0);
        assert_eq!(buf.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        // Half coverage lands halfway between black and white.
        buf.blend_pixel(1, 1, Rgba([0, 0, 0, 255]), 0.5);
        let px = buf.get_pixel(1, 1);
        assert!(px[0] > 120 && px[0] < 135);
    }
}
