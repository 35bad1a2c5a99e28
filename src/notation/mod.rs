//! Math-notation rendering
//!
//! The game consumes one narrow capability: turn a notation string plus a
//! size and color into something that can be blitted onto the screen. That
//! capability is the [`NotationRenderer`] trait; game logic never knows which
//! backend sits behind it.
//!
//! The default backend is [`UnicodeNotation`], which typesets the notation
//! as a rectangular block of text rows (Greek glyphs, superscripts, stacked
//! fractions). Any other backend satisfying the trait is substitutable.

pub mod unicode;

pub use unicode::UnicodeNotation;

use ratatui::style::Color;

/// Relative size of a rendered expression. Questions are drawn `Large`,
/// options `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Normal,
    Large,
}

/// A rendered expression: a rectangular block of text rows plus the styling
/// to blit it with.
///
/// Every row holds exactly `width` characters; `height` is the row count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub rows: Vec<String>,
    pub width: u16,
    pub height: u16,
    pub color: Color,
    /// Set for `Large` renders; the blitting code draws these bold.
    pub emphasized: bool,
}

/// Render notation string + size + color into a blittable block.
pub trait NotationRenderer {
    fn render(&self, notation: &str, size: FontSize, color: Color) -> Rendered;
}
