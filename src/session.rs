//! The drawing session controller: owns the canvas, the history, and the
//! active drawing state, and interprets pointer events from the host UI.

use std::path::{Path, PathBuf};

use ab_glyph::FontArc;
use image::Rgba;

use crate::canvas::{
    PixelBuffer, BACKGROUND, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
};
use crate::history::HistoryManager;
use crate::io::{self, ExportError};
use crate::ops::{fill, shapes, text};
use crate::ops::text::FontStyle;
use crate::tools::Tool;

/// A single-window painting session. The host UI forwards pointer and
/// command events here and pulls `buffer()` / `render_display()` back for
/// its repaint cycle; nothing else holds a mutable reference to the canvas
/// or the history stacks.
pub struct PaintSession {
    buffer: PixelBuffer,
    history: HistoryManager,

    tool: Tool,
    color: Rgba<u8>,
    stroke_size: u32,
    text: String,
    font_family: String,
    font_style: FontStyle,
    font_size: u32,

    start: (f32, f32),
    cur: (f32, f32),
    dragging: bool,

    // Last loaded font, keyed by (family, style); font size is applied at
    // raster time so it does not invalidate the cache.
    font_cache: Option<(String, FontStyle, FontArc)>,
}

impl PaintSession {
    pub fn new(width: u32, height: u32) -> Self {
        let buffer = PixelBuffer::new(width, height, BACKGROUND);
        let history = HistoryManager::new(&buffer);
        Self {
            buffer,
            history,
            tool: Tool::Pencil,
            color: Rgba([0, 0, 0, 255]),
            stroke_size: 3,
            text: "Hello".to_string(),
            font_family: "SansSerif".to_string(),
            font_style: FontStyle::Plain,
            font_size: 24,
            start: (0.0, 0.0),
            cur: (0.0, 0.0),
            dragging: false,
            font_cache: None,
        }
    }

    // ---- configuration ------------------------------------------------

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_color(&mut self, color: Rgba<u8>) {
        self.color = color;
    }

    pub fn set_stroke_size(&mut self, px: u32) {
        self.stroke_size = px.max(1);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_font(&mut self, family: impl Into<String>, style: FontStyle, size: u32) {
        self.font_family = family.into();
        self.font_style = style;
        self.font_size = size.max(1);
    }

    // ---- pointer state machine ----------------------------------------

    /// Pointer pressed. Pencil/Eraser snapshot and paint a dot; Fill and
    /// Text snapshot and commit immediately; shape tools snapshot and wait
    /// for the drag to end.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let p = self.clamp(x, y);
        self.start = p;
        self.cur = p;
        self.dragging = true;

        match self.tool {
            Tool::Pencil | Tool::Eraser => {
                self.history.push_undo(&self.buffer);
                // Zero-length segment: a click paints a round dot.
                let color = self.stroke_color();
                shapes::stroke_segment(&mut self.buffer, p, p, self.stroke_size, color);
            }
            Tool::Fill => {
                self.history.push_undo(&self.buffer);
                fill::flood_fill(&mut self.buffer, p.0 as u32, p.1 as u32, self.color);
            }
            Tool::Text => {
                self.history.push_undo(&self.buffer);
                self.place_text(p);
            }
            _ => {
                // Shape tools: snapshot now, commit on release.
                self.history.push_undo(&self.buffer);
            }
        }

        // Single-shot tools are done: the drag that follows is ignored.
        if self.tool.commits_on_press() {
            self.dragging = false;
        }
    }

    /// Pointer moved while pressed. Pencil/Eraser draw the incremental
    /// segment; shape tools only track the point for the live preview.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }
        let prev = self.cur;
        self.cur = self.clamp(x, y);
        if matches!(self.tool, Tool::Pencil | Tool::Eraser) {
            let color = self.stroke_color();
            shapes::stroke_segment(&mut self.buffer, prev, self.cur, self.stroke_size, color);
        }
    }

    /// Pointer released. Shape tools commit their final geometry.
    pub fn pointer_up(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }
        self.cur = self.clamp(x, y);
        self.dragging = false;
        if self.tool.is_shape() {
            shapes::draw_shape(
                &mut self.buffer,
                self.tool,
                self.start,
                self.cur,
                self.stroke_size,
                self.color,
            );
        }
    }

    // ---- commands -----------------------------------------------------

    /// Reconcile the buffer with the live display dimensions. Called at
    /// the start of every repaint; when the dimensions differ the buffer
    /// is reallocated (top-left content preserved, background elsewhere)
    /// and the history is discarded and re-seeded.
    pub fn ensure_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.buffer.width() || height != self.buffer.height() {
            self.buffer.resize(width, height, BACKGROUND);
            self.history.clear(&self.buffer);
        }
    }

    /// Blank canvas at the current dimensions, history reset.
    pub fn new_file(&mut self) {
        self.buffer = PixelBuffer::new(self.buffer.width(), self.buffer.height(), BACKGROUND);
        self.history.clear(&self.buffer);
        self.dragging = false;
    }

    /// Fill the canvas with the background color, as an undoable edit.
    pub fn clear_canvas(&mut self) {
        self.history.push_undo(&self.buffer);
        self.buffer.fill(BACKGROUND);
    }

    pub fn undo(&mut self) {
        self.history.undo(&mut self.buffer);
    }

    pub fn redo(&mut self) {
        self.history.redo(&mut self.buffer);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Serialize the committed buffer to a PNG file. Returns the path
    /// actually written (a `.png` suffix is appended when missing).
    pub fn export_png(&self, path: &Path) -> Result<PathBuf, ExportError> {
        io::export_png(&self.buffer, path)
    }

    // ---- views --------------------------------------------------------

    /// Read-only view of the committed buffer.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// What the display should show right now: the committed buffer, plus
    /// the live uncommitted shape while a shape drag is in flight. The
    /// preview renders on a copy and never touches the committed pixels.
    pub fn render_display(&self) -> PixelBuffer {
        let mut frame = self.buffer.clone();
        if self.dragging && self.tool.is_shape() {
            shapes::draw_shape(
                &mut frame,
                self.tool,
                self.start,
                self.cur,
                self.stroke_size,
                self.color,
            );
        }
        frame
    }

    // ---- internals ----------------------------------------------------

    fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x.clamp(0.0, self.buffer.width() as f32),
            y.clamp(0.0, self.buffer.height() as f32),
        )
    }

    /// Eraser paints the background color; it is not an erase to
    /// transparent.
    fn stroke_color(&self) -> Rgba<u8> {
        if self.tool == Tool::Eraser {
            BACKGROUND
        } else {
            self.color
        }
    }

    fn place_text(&mut self, at: (f32, f32)) {
        let cached = self
            .font_cache
            .as_ref()
            .filter(|(family, style, _)| *family == self.font_family && *style == self.font_style)
            .map(|(_, _, font)| font.clone());

        let font = match cached {
            Some(font) => Some(font),
            None => {
                let loaded = text::load_system_font(&self.font_family, self.font_style);
                if let Some(ref font) = loaded {
                    self.font_cache =
                        Some((self.font_family.clone(), self.font_style, font.clone()));
                }
                loaded
            }
        };

        match font {
            Some(font) => {
                text::draw_text(
                    &mut self.buffer,
                    &font,
                    &self.text,
                    self.font_size as f32,
                    at.0,
                    at.1,
                    self.color,
                );
            }
            None => {
                log_warn!(
                    "no usable font for family '{}' — text placement skipped",
                    self.font_family
                );
            }
        }
    }
}

impl Default for PaintSession {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}
