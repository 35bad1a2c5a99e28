//! Feedback screen: the question again, with a colored verdict

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{blit_centered, canvas_rect};
use crate::game::{Round, Verdict};
use crate::notation::{FontSize, NotationRenderer};
use crate::ui::constants::{FEEDBACK_QUESTION_ROW, FEEDBACK_VERDICT_ROW};
use crate::ui::theme::DEFAULT_THEME;

/// Render the verdict view. The caller presents the frame and holds it for
/// the feedback dwell.
pub fn render_feedback_screen(
    frame: &mut Frame,
    renderer: &dyn NotationRenderer,
    round: &Round,
    verdict: Verdict,
) {
    let canvas = canvas_rect(frame.area());
    frame.render_widget(
        Block::default().style(Style::default().bg(DEFAULT_THEME.feedback_bg)),
        canvas,
    );

    let question = renderer.render(&round.prompt, FontSize::Normal, DEFAULT_THEME.question);
    blit_centered(frame, &question, canvas, FEEDBACK_QUESTION_ROW);

    let (text, color) = match verdict {
        Verdict::Correct => ("Correct!", DEFAULT_THEME.correct),
        Verdict::Wrong => ("Wrong!", DEFAULT_THEME.wrong),
    };
    let line = Rect::new(canvas.x, canvas.y + FEEDBACK_VERDICT_ROW, canvas.width, 1)
        .intersection(frame.area());
    if line.height > 0 {
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
            line,
        );
    }
}
