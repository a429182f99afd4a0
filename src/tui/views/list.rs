//! Root view: the tracked-playlist list

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::message::{Command, Message};
use crate::tui::navigator::{Outcome, View};
use crate::tui::window::WindowMode;
use crate::tui::PAGE_JUMP;
use crate::vault::Playlist;

use super::{DetailView, SearchView};

pub struct ListView {
    pub(crate) playlists: Vec<Playlist>,
    pub(crate) cursor: usize,
    pub(crate) loading: bool,
    pub(crate) window_mode: WindowMode,
}

impl ListView {
    pub fn new(window_mode: WindowMode) -> Self {
        Self {
            playlists: Vec::new(),
            cursor: 0,
            loading: true,
            window_mode,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Outcome {
        match key.code {
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
            KeyCode::Char('s') => Outcome::push(View::Search(SearchView::new())),
            KeyCode::Char(' ') => self.open_detail(),
            KeyCode::Enter => self.open_in_browser(),
            KeyCode::Char('d') => self.remove_at_cursor(),
            _ => Outcome::stay(),
        }
    }

    pub fn on_message(&mut self, message: Message) -> Outcome {
        match message {
            Message::ListLoaded(playlists) => {
                self.playlists = playlists;
                self.cursor = 0;
                self.loading = false;
                Outcome::stay()
            }
            Message::PlaylistFetched(playlist) => {
                if self.is_tracked(&playlist.id) {
                    return Outcome::stay();
                }
                self.playlists.push(playlist.clone());
                self.cursor = self.playlists.len() - 1;
                Outcome::stay().with(Command::Save { playlist })
            }
            Message::Error(_) => {
                self.loading = false;
                Outcome::stay()
            }
            _ => Outcome::stay(),
        }
    }

    /// Fold a playlist mutated by a closed detail view back into the list
    pub fn replace_playlist(&mut self, playlist: Playlist) {
        if let Some(slot) = self.playlists.iter_mut().find(|p| p.id == playlist.id) {
            *slot = playlist;
        }
    }

    fn is_tracked(&self, playlist_id: &str) -> bool {
        self.playlists.iter().any(|p| p.id == playlist_id)
    }

    fn move_to(&mut self, target: usize) {
        if self.playlists.is_empty() {
            return;
        }
        self.cursor = target.min(self.playlists.len() - 1);
    }

    fn open_detail(&self) -> Outcome {
        match self.playlists.get(self.cursor) {
            Some(playlist) => Outcome::push(View::Detail(DetailView::new(
                playlist.clone(),
                self.window_mode,
            ))),
            None => Outcome::stay(),
        }
    }

    fn open_in_browser(&self) -> Outcome {
        match self.playlists.get(self.cursor) {
            Some(playlist) => Outcome::stay().with(Command::OpenBrowser {
                url: playlist.watch_url(),
            }),
            None => Outcome::stay(),
        }
    }

    fn remove_at_cursor(&mut self) -> Outcome {
        match self.playlists.get(self.cursor) {
            Some(playlist) => {
                self.loading = true;
                Outcome::stay().with(Command::Remove {
                    playlist_id: playlist.id.clone(),
                })
            }
            None => Outcome::stay(),
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Playlist list
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = Paragraph::new("Tracked playlists")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, chunks[0]);

        if self.playlists.is_empty() {
            let text = if self.loading {
                "Loading playlists..."
            } else {
                "Nothing tracked yet. Press 's' to search for a playlist."
            };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, chunks[1]);
        } else {
            let title_width = self
                .playlists
                .iter()
                .map(|p| p.title.chars().count())
                .max()
                .unwrap_or(0);

            let items: Vec<ListItem> = self
                .playlists
                .iter()
                .map(|playlist| {
                    // '*' marks playlists that picked up new videos this session
                    let marker = if playlist.updated { "*" } else { " " };
                    let row = format!(
                        "{:<width$} {} │ {}",
                        playlist.title,
                        marker,
                        playlist.description,
                        width = title_width
                    );
                    let style = if playlist.updated {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default()
                    };
                    ListItem::new(row).style(style)
                })
                .collect();

            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL))
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            let mut state = ListState::default();
            state.select(Some(self.cursor));
            frame.render_stateful_widget(list, chunks[1], &mut state);
        }

        let footer = Paragraph::new(
            "↑/↓: Navigate | Space: Open | Enter: Browser | s: Search | d: Remove | q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
        frame.render_widget(footer, chunks[2]);
    }
}
