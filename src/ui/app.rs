//! Application state and the quiz event loop

use std::io;
use std::thread;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Position, Rect},
    Terminal,
};
use rand::Rng;

use super::constants::POLL_INTERVAL;
use super::screens;
use crate::game::{Game, Round, Verdict};
use crate::notation::NotationRenderer;

/// Phase of the quiz loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Pick the next question and build its options.
    SelectQuestion,
    /// Options are on screen; waiting for a click or a quit.
    AwaitingAnswer,
    /// Verdict is on screen for the feedback dwell.
    ShowFeedback(Verdict),
    /// Quit requested; tear down and exit.
    Terminated,
}

/// The main application state.
pub struct App {
    pub game: Game,
    pub renderer: Box<dyn NotationRenderer>,
    pub state: GameState,

    /// The round currently on screen, if any.
    pub round: Option<Round>,

    /// Hit-test rectangles for the displayed options, in option order,
    /// refreshed on every draw.
    pub option_rects: Vec<Rect>,
}

impl App {
    pub fn new(game: Game, renderer: Box<dyn NotationRenderer>) -> Self {
        App {
            game,
            renderer,
            state: GameState::SelectQuestion,
            round: None,
            option_rects: Vec::new(),
        }
    }

    /// Run the quiz loop until a quit event.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut rng = rand::thread_rng();

        loop {
            match self.state {
                GameState::SelectQuestion => self.begin_round(&mut rng),
                GameState::AwaitingAnswer => {
                    // Redraw every iteration so a resize just works and the
                    // hit rectangles stay in sync with the screen.
                    terminal.draw(|frame| {
                        if let Some(round) = &self.round {
                            self.option_rects = screens::render_options_screen(
                                frame,
                                self.renderer.as_ref(),
                                round,
                                self.game.score(),
                            );
                        }
                    })?;

                    if event::poll(POLL_INTERVAL)? {
                        match event::read()? {
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key);
                            }
                            Event::Mouse(mouse) => self.handle_mouse(mouse),
                            _ => {}
                        }
                    }
                }
                GameState::ShowFeedback(verdict) => {
                    terminal.draw(|frame| {
                        if let Some(round) = &self.round {
                            screens::render_feedback_screen(
                                frame,
                                self.renderer.as_ref(),
                                round,
                                verdict,
                            );
                        }
                    })?;
                    // Intentional full block: no input is processed during
                    // the dwell; a quit lands on the next poll.
                    thread::sleep(self.game.tuning().feedback_dwell);
                    self.state = GameState::SelectQuestion;
                }
                GameState::Terminated => break,
            }
        }

        Ok(())
    }

    /// Select the next question and arm the options screen.
    pub fn begin_round<R: Rng>(&mut self, rng: &mut R) {
        self.round = Some(self.game.next_round(rng));
        self.option_rects.clear();
        self.state = GameState::AwaitingAnswer;
    }

    /// Keyboard input: only quit keys are recognized, everything else is
    /// ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.state = GameState::Terminated;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state = GameState::Terminated;
            }
            _ => {}
        }
    }

    /// Pointer input: a left press on an option box answers the round; a
    /// press anywhere else is silently dropped and the round continues.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(choice) = self.hit_test(mouse.column, mouse.row) else {
            return;
        };
        let Some(round) = &self.round else {
            return;
        };
        let verdict = self.game.judge(round, choice);
        self.state = GameState::ShowFeedback(verdict);
    }

    /// Index of the first option rectangle containing the position. Boxes
    /// never overlap, so "first" is unambiguous.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.option_rects
            .iter()
            .position(|rect| rect.contains(position))
    }
}
