//! Options screen: the question on top, three answer boxes below

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use super::{blit, blit_centered, canvas_rect, render_status_bar};
use crate::game::Round;
use crate::notation::{FontSize, NotationRenderer, Rendered};
use crate::ui::constants::{OPTIONS_START_ROW, OPTION_PAD_X, OPTION_STRIDE, QUESTION_ROW};
use crate::ui::theme::DEFAULT_THEME;

/// Render the question and the three option boxes, returning the hit-test
/// rectangles in option order. Boxes sit at a fixed vertical stride and
/// never overlap.
pub fn render_options_screen(
    frame: &mut Frame,
    renderer: &dyn NotationRenderer,
    round: &Round,
    score: u32,
) -> Vec<Rect> {
    let canvas = canvas_rect(frame.area());
    frame.render_widget(
        Block::default().style(Style::default().bg(DEFAULT_THEME.options_bg)),
        canvas,
    );

    let question = renderer.render(&round.prompt, FontSize::Large, DEFAULT_THEME.question);
    blit_centered(frame, &question, canvas, QUESTION_ROW);

    let mut rects = Vec::with_capacity(round.options.len());
    for (slot, option) in round.options.iter().enumerate() {
        let image = renderer.render(option, FontSize::Normal, DEFAULT_THEME.option);
        let rect = option_box(&image, canvas, slot as u16).intersection(frame.area());
        if rect.width > 0 && rect.height > 0 {
            frame.render_widget(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(DEFAULT_THEME.box_border))
                    .style(Style::default().bg(DEFAULT_THEME.box_bg)),
                rect,
            );
            blit(frame, &image, rect.x + 1 + OPTION_PAD_X, rect.y + 1);
        }
        rects.push(rect);
    }

    render_status_bar(frame, frame.area(), score);
    rects
}

/// The bordered box around one option: the rendered text inflated by the
/// horizontal padding and the border, centered on the option's stride row.
fn option_box(image: &Rendered, canvas: Rect, slot: u16) -> Rect {
    let width = image.width + 2 * OPTION_PAD_X + 2;
    let height = image.height + 2;
    let center_row = OPTIONS_START_ROW + slot * OPTION_STRIDE;
    let x = canvas.x + canvas.width.saturating_sub(width) / 2;
    let y = (canvas.y + center_row).saturating_sub(height / 2);
    Rect::new(x, y, width, height)
}
