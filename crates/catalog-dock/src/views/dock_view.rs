//! Dock view - the floating command/search overlay
//!
//! Rendered as a centered popup above the library view, with a dimmed
//! backdrop. All display data comes pre-computed from
//! [`DockViewModel`]; this file only paints.

use crate::actions::{Action, DockAction, NavigationAction, TextInputAction};
use crate::capabilities::ViewCapabilities;
use crate::state::{AppState, DockMode};
use crate::view_models::DockViewModel;
use crate::views::View;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs},
    Frame,
};

#[derive(Debug, Clone)]
pub struct DockView;

impl DockView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DockView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for DockView {
    fn view_id(&self) -> crate::views::ViewId {
        crate::views::ViewId::Dock
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> ViewCapabilities {
        // TEXT_INPUT routes printable keys (including `/`) to the query
        // field instead of the keymap
        ViewCapabilities::TEXT_INPUT
            | ViewCapabilities::ITEM_NAVIGATION
            | ViewCapabilities::MODE_TABS
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => DockAction::NavigateNext,
            NavigationAction::Previous => DockAction::NavigatePrev,
        };
        Some(Action::Dock(action))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => DockAction::Char(c),
            TextInputAction::Backspace => DockAction::Backspace,
            TextInputAction::ClearLine => DockAction::Clear,
            TextInputAction::Escape => DockAction::Close,
            TextInputAction::Confirm => DockAction::Execute,
        };
        Some(Action::Dock(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        // Reject re-activation while already open; everything else the
        // dock can deal with
        !matches!(action, Action::Dock(DockAction::Open(_)))
    }
}

/// Render the dock as a centered floating panel
fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let vm = DockViewModel::from_state(state);

    // Dim the whole screen for the modal effect
    let overlay = Block::default().style(Style::default().bg(Color::Black).add_modifier(Modifier::DIM));
    f.render_widget(overlay, area);

    // Centered popup (60% width, 60% height)
    let popup_width = (area.width * 60 / 100).min(90);
    let popup_height = (area.height * 60 / 100).min(24);
    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    };

    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Yellow).bold()),
        Span::styled(" open  ", Style::default().fg(Color::DarkGray)),
        Span::styled(vm.footer.navigate.clone(), Style::default().fg(Color::Yellow).bold()),
        Span::styled(" navigate  ", Style::default().fg(Color::DarkGray)),
        Span::styled(vm.footer.switch_mode.clone(), Style::default().fg(Color::Yellow).bold()),
        Span::styled(" mode  ", Style::default().fg(Color::DarkGray)),
        Span::styled(vm.footer.close.clone(), Style::default().fg(Color::Yellow).bold()),
        Span::styled(" close ", Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Command Dock ")
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Mode tabs
            Constraint::Length(3), // Input box
            Constraint::Min(3),    // Results
        ])
        .split(inner);

    // Mode tabs
    let selected_tab = match vm.mode {
        DockMode::Search => 0,
        DockMode::Commands => 1,
    };
    let tabs = Tabs::new(vec!["Search", "Commands"])
        .select(selected_tab)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    // Input box
    let input_text = if vm.input_is_empty {
        Line::from(Span::styled(
            vm.placeholder.clone(),
            Style::default().fg(Color::DarkGray).italic(),
        ))
    } else {
        Line::from(Span::raw(vm.input_text.clone()))
    };
    let input = Paragraph::new(input_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(input, chunks[1]);

    // Result rows
    if vm.rows.is_empty() {
        if !vm.input_is_empty {
            let empty = Paragraph::new(vm.placeholder.clone())
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(empty, chunks[2]);
        }
        return;
    }

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|row| {
            let style = if row.is_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let indicator = if row.is_selected { "› " } else { "  " };

            Row::new(vec![
                Cell::from(format!("{}{}", indicator, row.badge)).style(style),
                Cell::from(row.title.clone()).style(style),
                Cell::from(row.detail.clone().unwrap_or_default())
                    .style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        vec![
            Constraint::Length(14),
            Constraint::Percentage(45),
            Constraint::Percentage(45),
        ],
    );
    f.render_widget(table, chunks[2]);
}
