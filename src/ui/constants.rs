//! Layout constants for the fixed logical canvas.
//!
//! The original is an 800×600 pixel window; here it is realized as a fixed
//! 80×30 logical canvas centered in the terminal, with every layout row
//! carried over as the same proportion of the canvas height (see
//! `DESIGN.md`). All row values are canvas-relative and measured in
//! terminal cells.

use std::time::Duration;

/// Logical canvas width in terminal cells.
pub const CANVAS_WIDTH: u16 = 80;

/// Logical canvas height in terminal cells.
pub const CANVAS_HEIGHT: u16 = 30;

/// Vertical row of the question on the options screen (`h / 5`).
pub const QUESTION_ROW: u16 = CANVAS_HEIGHT / 5;

/// Center row of the first option box (`h / 2 - 2`).
pub const OPTIONS_START_ROW: u16 = CANVAS_HEIGHT / 2 - 2;

/// Vertical stride between successive option boxes (`h / 4`).
pub const OPTION_STRIDE: u16 = CANVAS_HEIGHT / 4;

/// Horizontal padding (in cells) inside each option box, either side of the
/// rendered text.
pub const OPTION_PAD_X: u16 = 1;

/// Row of the question on the feedback screen (`h / 3`).
pub const FEEDBACK_QUESTION_ROW: u16 = CANVAS_HEIGHT / 3;

/// Row of the verdict line on the feedback screen (`2h / 3`).
pub const FEEDBACK_VERDICT_ROW: u16 = 2 * CANVAS_HEIGHT / 3;

/// Event-poll interval, giving roughly a 30 Hz redraw/input cadence.
pub const POLL_INTERVAL: Duration = Duration::from_millis(33);

/// Title set on the terminal window.
pub const WINDOW_TITLE: &str = "Trig Memorization Game";
