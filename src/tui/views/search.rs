//! Remote playlist search view

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::message::{Command, Message};
use crate::tui::navigator::Outcome;
use crate::vault::Playlist;

const INPUT_CURSOR: &str = "█";

pub struct SearchView {
    pub(crate) input: String,
    pub(crate) results: Vec<Playlist>,
    pub(crate) cursor: usize,
    pub(crate) searching: bool,
}

impl SearchView {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            results: Vec::new(),
            cursor: 0,
            searching: false,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Outcome {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Outcome::quit(),
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => self.move_up(),
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => self.move_down(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Esc => Outcome::pop(),
            KeyCode::Backspace => {
                self.input.pop();
                Outcome::stay()
            }
            KeyCode::Enter => {
                let query = self.input.trim().to_string();
                if query.is_empty() {
                    return Outcome::stay();
                }
                self.searching = true;
                Outcome::stay().with(Command::Search { query })
            }
            KeyCode::Tab => match self.results.get(self.cursor) {
                // Popping right away leaves the tracked list in charge of the
                // fetched result once it arrives.
                Some(playlist) => Outcome::pop().with(Command::Adopt {
                    playlist: playlist.clone(),
                }),
                None => Outcome::stay(),
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                Outcome::stay()
            }
            _ => Outcome::stay(),
        }
    }

    pub fn on_message(&mut self, message: Message) -> Outcome {
        match message {
            Message::SearchResults(playlists) => {
                self.results = playlists;
                self.cursor = 0;
                self.searching = false;
            }
            Message::Error(_) => {
                self.searching = false;
            }
            _ => {}
        }
        Outcome::stay()
    }

    fn move_up(&mut self) -> Outcome {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        Outcome::stay()
    }

    fn move_down(&mut self) -> Outcome {
        if self.cursor + 1 < self.results.len() {
            self.cursor += 1;
        }
        Outcome::stay()
    }

    pub fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Query input
                Constraint::Min(5),    // Results
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = Paragraph::new("Search playlists")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, chunks[0]);

        let input = Paragraph::new(format!("{}{}", self.input, INPUT_CURSOR))
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Query"));
        frame.render_widget(input, chunks[1]);

        let title = if self.searching {
            "Results (searching...)"
        } else {
            "Results"
        };
        let items: Vec<ListItem> = self
            .results
            .iter()
            .map(|playlist| {
                ListItem::new(format!("{} - {}", playlist.title, playlist.description))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if !self.results.is_empty() {
            state.select(Some(self.cursor));
        }
        frame.render_stateful_widget(list, chunks[2], &mut state);

        let footer = Paragraph::new("Enter: Search | Tab: Track highlighted | ↑/↓: Navigate | Esc: Back")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(footer, chunks[3]);
    }
}
