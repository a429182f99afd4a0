//! The view stack state machine
//!
//! A strict LIFO stack of modal views. Every terminal event and every
//! background result goes to the top of the stack only; the view answers
//! with an [`Outcome`] naming the stack transition it wants plus any
//! background commands, and the navigator applies it. The root list never
//! leaves the bottom of the stack.

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::message::{Command, Message};
use super::views::{centered_rect, DetailView, ItemView, ListView, SearchView};
use super::window::WindowMode;

/// How long a transient status message stays on screen
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

/// One modal view together with its state
pub enum View {
    List(ListView),
    Search(SearchView),
    Detail(DetailView),
    Item(ItemView),
}

/// Stack transition requested by the active view
pub enum Step {
    Stay,
    Push(View),
    Pop,
    Quit,
}

/// What the active view wants done after handling an event
pub struct Outcome {
    pub step: Step,
    pub commands: Vec<Command>,
}

impl Outcome {
    pub fn stay() -> Self {
        Self {
            step: Step::Stay,
            commands: Vec::new(),
        }
    }

    pub fn push(view: View) -> Self {
        Self {
            step: Step::Push(view),
            commands: Vec::new(),
        }
    }

    pub fn pop() -> Self {
        Self {
            step: Step::Pop,
            commands: Vec::new(),
        }
    }

    pub fn quit() -> Self {
        Self {
            step: Step::Quit,
            commands: Vec::new(),
        }
    }

    /// Attach a background command to this outcome
    pub fn with(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }
}

pub struct Navigator {
    stack: Vec<View>,
    quit: bool,
    status: Option<(String, Instant)>,
}

impl Navigator {
    pub fn new(window_mode: WindowMode) -> Self {
        Self {
            stack: vec![View::List(ListView::new(window_mode))],
            quit: false,
            status: None,
        }
    }

    /// Whether the explicit quit transition has been taken
    pub fn quitting(&self) -> bool {
        self.quit
    }

    /// Forward a key press to the active view; returns commands to dispatch
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        let outcome = match self.active_mut() {
            View::List(view) => view.on_key(key),
            View::Search(view) => view.on_key(key),
            View::Detail(view) => view.on_key(key),
            View::Item(view) => view.on_key(key),
        };
        self.apply(outcome)
    }

    /// Deliver a background result to the view active right now
    pub fn handle_message(&mut self, message: Message) -> Vec<Command> {
        if let Message::Error(text) = &message {
            self.set_status(format!("Error: {text}"));
        }

        let outcome = match self.active_mut() {
            View::List(view) => view.on_message(message),
            View::Search(view) => view.on_message(message),
            View::Detail(view) => view.on_message(message),
            View::Item(_) => Outcome::stay(),
        };
        self.apply(outcome)
    }

    fn active_mut(&mut self) -> &mut View {
        self.stack.last_mut().expect("view stack is never empty")
    }

    fn apply(&mut self, outcome: Outcome) -> Vec<Command> {
        match outcome.step {
            Step::Stay => {}
            Step::Push(view) => self.stack.push(view),
            Step::Pop => self.pop(),
            Step::Quit => self.quit = true,
        }
        outcome.commands
    }

    fn pop(&mut self) {
        // The root list stays; a pop request there is a no-op
        if self.stack.len() <= 1 {
            return;
        }

        let closed = self.stack.pop().expect("checked above");

        // A closing detail view carries watched-flag edits the list below
        // has not seen yet
        if let View::Detail(detail) = closed {
            if let Some(View::List(list)) = self.stack.last_mut() {
                list.replace_playlist(detail.into_playlist());
            }
        }
    }

    /// Show a transient status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }

    /// Drop the status message once it has been on screen long enough
    pub fn check_status_timeout(&mut self) {
        if let Some((_, since)) = &self.status {
            if since.elapsed() > STATUS_TIMEOUT {
                self.status = None;
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self.stack.last().expect("view stack is never empty") {
            View::List(view) => view.draw(frame),
            View::Search(view) => view.draw(frame),
            View::Detail(view) => view.draw(frame),
            View::Item(view) => view.draw(frame),
        }

        if let Some((message, _)) = &self.status {
            let status = Paragraph::new(message.clone())
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL));
            let area = centered_rect(50, 3, frame.area());
            frame.render_widget(Clear, area);
            frame.render_widget(status, area);
        }
    }
}
