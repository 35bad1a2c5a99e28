//! Status bar with the running score and input hints

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::DEFAULT_THEME;

/// Render the one-line status bar along the bottom of `area`.
pub fn render_status_bar(frame: &mut Frame, area: Rect, score: u32) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let bar = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(bar);

    let left = Paragraph::new(Line::from(Span::styled(
        format!(" Score: {} ", score),
        Style::default()
            .bg(DEFAULT_THEME.status_accent)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(DEFAULT_THEME.status_bg))
    .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.status_fg).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.status_fg);
    let right = Paragraph::new(Line::from(vec![
        Span::styled(" click ", key_style),
        Span::styled(" answer ", desc_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ]))
    .style(Style::default().bg(DEFAULT_THEME.status_bg))
    .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
