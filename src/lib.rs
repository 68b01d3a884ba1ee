//! paintbox — the canvas drawing-and-history engine behind a single-window
//! raster painting application.
//!
//! The host UI layer (window chrome, toolbar, color swatches, pickers,
//! dialogs) lives outside this crate. It drives a [`PaintSession`] with
//! pointer events and configuration commands, and pulls the buffer back
//! for display and PNG export:
//!
//! ```no_run
//! use paintbox::{PaintSession, Tool};
//!
//! let mut session = PaintSession::default();
//! session.set_tool(Tool::Pencil);
//! session.pointer_down(10.0, 10.0);
//! session.pointer_move(40.0, 25.0);
//! session.pointer_up(40.0, 25.0);
//! session.undo();
//! session.export_png(std::path::Path::new("sketch")).unwrap();
//! ```

#[macro_use]
pub mod logger;

pub mod canvas;
pub mod history;
pub mod io;
pub mod ops;
pub mod session;
pub mod tools;

pub use canvas::{PixelBuffer, BACKGROUND, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
pub use history::{HistoryManager, UNDO_STACK_LIMIT};
pub use io::ExportError;
pub use ops::text::FontStyle;
pub use session::PaintSession;
pub use tools::Tool;
