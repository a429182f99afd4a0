//! Playlist detail view: the scrollable, selectable video list

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::message::{Command, Message};
use crate::tui::navigator::{Outcome, View};
use crate::tui::selection::selection;
use crate::tui::window::{window, WindowMode};
use crate::tui::PAGE_JUMP;
use crate::vault::{sort_by_published, Playlist};

use super::ItemView;

pub struct DetailView {
    pub(crate) playlist: Playlist,
    pub(crate) cursor: usize,
    pub(crate) visual_mode: bool,
    pub(crate) anchor: usize,
    pub(crate) window_mode: WindowMode,
}

impl DetailView {
    pub fn new(mut playlist: Playlist, window_mode: WindowMode) -> Self {
        sort_by_published(&mut playlist.videos);

        Self {
            playlist,
            cursor: 0,
            visual_mode: false,
            anchor: 0,
            window_mode,
        }
    }

    /// Hand the (possibly mutated) playlist back when the view closes
    pub fn into_playlist(self) -> Playlist {
        self.playlist
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Outcome {
        let outcome = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Outcome::quit(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.cursor.saturating_sub(PAGE_JUMP);
                Outcome::stay()
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_to(self.cursor + PAGE_JUMP);
                Outcome::stay()
            }
            KeyCode::Char('q') => Outcome::quit(),
            KeyCode::Esc => {
                if self.visual_mode {
                    self.visual_mode = false;
                    Outcome::stay()
                } else {
                    Outcome::pop()
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                Outcome::stay()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_to(self.cursor + 1);
                Outcome::stay()
            }
            KeyCode::Char('g') => {
                self.cursor = 0;
                Outcome::stay()
            }
            KeyCode::Char('G') => {
                self.move_to(usize::MAX);
                Outcome::stay()
            }
            KeyCode::Char('v') => {
                self.visual_mode = !self.visual_mode;
                if self.visual_mode {
                    self.anchor = self.cursor;
                }
                Outcome::stay()
            }
            KeyCode::Char(' ') => self.toggle_watched(),
            KeyCode::Enter => match self.playlist.videos.get(self.cursor) {
                Some(video) => Outcome::push(View::Item(ItemView::new(video.clone()))),
                None => Outcome::stay(),
            },
            _ => Outcome::stay(),
        };

        // Outside visual mode the anchor shadows the cursor
        if !self.visual_mode {
            self.anchor = self.cursor;
        }

        outcome
    }

    pub fn on_message(&mut self, _message: Message) -> Outcome {
        Outcome::stay()
    }

    fn move_to(&mut self, target: usize) {
        if self.playlist.is_empty() {
            return;
        }
        self.cursor = target.min(self.playlist.len() - 1);
    }

    /// Flip the watched flag over the current selection, leaving visual mode.
    ///
    /// The in-memory flip covers the whole range before anything else runs;
    /// persistence goes out as one command per video and failures do not roll
    /// the memory state back.
    fn toggle_watched(&mut self) -> Outcome {
        if self.playlist.is_empty() {
            return Outcome::stay();
        }

        self.visual_mode = false;
        let range = selection(self.anchor, self.cursor);
        let end = range.end.min(self.playlist.len());

        let mut outcome = Outcome::stay();
        for video in &mut self.playlist.videos[range.start..end] {
            video.watched = !video.watched;
            outcome = outcome.with(Command::SetWatched {
                playlist_id: video.playlist_id.clone(),
                video_id: video.id.clone(),
                watched: video.watched,
            });
        }
        outcome
    }

    pub fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Playlist metadata
                Constraint::Min(5),    // Video list
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let published = self.playlist.published_at.format("%Y-%m-%d");
        let description: &str = if self.playlist.description.is_empty() {
            "..."
        } else {
            &self.playlist.description
        };
        let meta = Paragraph::new(format!("Published: {}\n{}", published, description))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.playlist.title.clone()),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(meta, chunks[0]);

        let page_size = (chunks[1].height.saturating_sub(2)).max(1) as usize;
        let visible = window(self.cursor, page_size, self.window_mode);
        let selected = selection(self.anchor, self.cursor);
        let now = Utc::now();

        let mut lines = Vec::new();
        for i in visible {
            // The window is not clipped; stop at the end of the list
            if i >= self.playlist.len() {
                break;
            }
            let video = &self.playlist.videos[i];

            let cursor_mark = if i == self.cursor { ">" } else { " " };
            let watched = if video.watched { "[x]" } else { "[ ]" };
            let fresh = if video.is_fresh(now) { ">NEW<" } else { "     " };

            let mut style = Style::default();
            if self.visual_mode && selected.contains(&i) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if i == self.cursor {
                style = style.add_modifier(Modifier::BOLD);
            }

            lines.push(Line::styled(
                format!("{} {} {} {}", cursor_mark, watched, fresh, video.title),
                style,
            ));
        }

        let title = format!("Videos ({})", self.playlist.len());
        let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(list, chunks[1]);

        let footer_text = if self.visual_mode {
            "VISUAL | ↑/↓: Extend | Space: Toggle watched | Esc: Leave visual"
        } else {
            "↑/↓: Navigate | Space: Toggle watched | v: Visual | Enter: Details | Esc: Back | q: Quit"
        };
        let footer = Paragraph::new(footer_text)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(footer, chunks[2]);
    }
}
