//! Library view - the base catalog screen
//!
//! A plain browsing surface showing the current route; its real job in
//! this crate is to be the non-text-entry context the dock activates
//! from. Also paints the status bar line with the latest notice.

use crate::actions::{Action, DockAction};
use crate::capabilities::ViewCapabilities;
use crate::state::{AppState, NoticeLevel};
use crate::views::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct LibraryView;

impl LibraryView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LibraryView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for LibraryView {
    fn view_id(&self) -> crate::views::ViewId {
        crate::views::ViewId::Library
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> ViewCapabilities {
        // No TEXT_INPUT: printable keys (notably `/`) reach the keymap
        ViewCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Dock(DockAction::Open(_)) | Action::Global(_)
        )
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", state.context.route),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Ctrl+K", Style::default().fg(Color::Yellow).bold()),
            Span::styled(" commands   ", Style::default().fg(Color::DarkGray)),
            Span::styled("/", Style::default().fg(Color::Yellow).bold()),
            Span::styled(" search", Style::default().fg(Color::DarkGray)),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Catalog ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(body, chunks[0]);

    // Status bar: latest notice, if any
    if let Some(notice) = &state.status_bar.notice {
        let color = match notice.level {
            NoticeLevel::Info => Color::Cyan,
            NoticeLevel::Success => Color::Green,
            NoticeLevel::Error => Color::Red,
        };
        let mut spans = vec![Span::styled(
            format!(" {} ", notice.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];
        if let Some(detail) = &notice.detail {
            spans.push(Span::styled(
                detail.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
    }
}
