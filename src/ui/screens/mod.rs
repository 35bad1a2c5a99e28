//! Screen rendering modules
//!
//! Each screen is a stateless render function drawing onto the current
//! frame:
//!
//! - [`options`]: the question plus three bordered answer boxes; returns the
//!   hit-test rectangles
//! - [`feedback`]: the question with a colored verdict
//! - [`status`]: bottom bar with the running score and input hints
//!
//! Everything is laid out against the fixed logical canvas returned by
//! `canvas_rect`, centered in the terminal.

pub mod feedback;
pub mod options;
pub mod status;

pub use feedback::render_feedback_screen;
pub use options::render_options_screen;
pub use status::render_status_bar;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::notation::Rendered;

/// The fixed logical canvas, centered in `area` and clamped to it.
pub(crate) fn canvas_rect(area: Rect) -> Rect {
    let width = CANVAS_WIDTH.min(area.width);
    let height = CANVAS_HEIGHT.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Blit a rendered block with its top-left corner at `(x, y)`, clipped to
/// the frame.
pub(crate) fn blit(frame: &mut Frame, image: &Rendered, x: u16, y: u16) {
    let target = Rect::new(x, y, image.width, image.height).intersection(frame.area());
    if target.width == 0 || target.height == 0 {
        return;
    }
    let mut style = Style::default().fg(image.color);
    if image.emphasized {
        style = style.add_modifier(Modifier::BOLD);
    }
    let text: Vec<Line> = image
        .rows
        .iter()
        .map(|row| Line::from(row.as_str()))
        .collect();
    frame.render_widget(Paragraph::new(text).style(style), target);
}

/// Blit a rendered block horizontally centered in `canvas`, vertically
/// centered on the canvas-relative `row`.
pub(crate) fn blit_centered(frame: &mut Frame, image: &Rendered, canvas: Rect, row: u16) {
    let x = canvas.x + canvas.width.saturating_sub(image.width) / 2;
    let y = (canvas.y + row).saturating_sub(image.height / 2);
    blit(frame, image, x, y);
}
