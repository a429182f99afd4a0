//! The four dashboard views

mod detail;
mod item;
mod list;
mod search;

pub use detail::DetailView;
pub use item::ItemView;
pub use list::ListView;
pub use search::SearchView;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Center a fixed-height box of the given percentage width inside `r`
pub(crate) fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - height) / 2),
            Constraint::Length(height),
            Constraint::Percentage((100 - height) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
