//! Single-video detail view

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::navigator::Outcome;
use crate::vault::Video;

pub struct ItemView {
    pub(crate) video: Video,
}

impl ItemView {
    pub fn new(video: Video) -> Self {
        Self { video }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Outcome {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Outcome::quit(),
            KeyCode::Char('q') => Outcome::quit(),
            KeyCode::Esc => Outcome::pop(),
            _ => Outcome::stay(),
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Description
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let watched = if self.video.watched { " [watched]" } else { "" };
        let header = Paragraph::new(format!("{}{}", self.video.title, watched))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, chunks[0]);

        let published = self.video.published_at.format("%Y-%m-%d %H:%M");
        let body = Paragraph::new(format!(
            "Published: {}\n\n{}",
            published, self.video.description
        ))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false });
        frame.render_widget(body, chunks[1]);

        let footer = Paragraph::new("Esc: Back | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(footer, chunks[2]);
    }
}
