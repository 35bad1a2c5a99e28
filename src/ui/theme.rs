use ratatui::style::Color;

pub struct Theme {
    pub options_bg: Color,  // Light gray quiz canvas
    pub feedback_bg: Color, // White feedback canvas
    pub box_bg: Color,
    pub box_border: Color,
    pub question: Color,
    pub option: Color, // Blue
    pub correct: Color,
    pub wrong: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub status_accent: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    options_bg: Color::Rgb(220, 220, 220),
    feedback_bg: Color::Rgb(255, 255, 255),
    box_bg: Color::Rgb(255, 255, 255),
    box_border: Color::Rgb(0, 0, 0),
    question: Color::Rgb(0, 0, 0),
    option: Color::Rgb(0, 0, 255),
    correct: Color::Rgb(0, 255, 0),
    wrong: Color::Rgb(255, 0, 0),
    status_bg: Color::Rgb(50, 50, 70),
    status_fg: Color::Rgb(205, 214, 244),
    status_accent: Color::Rgb(137, 180, 250), // Blue score badge
};
