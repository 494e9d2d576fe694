//! Dock view model
//!
//! Flattens dock state into renderable rows. The same single input
//! drives two engines: entity search results come from state (they were
//! fetched asynchronously), while command rows are filtered from the
//! static registry at build time.

use crate::command_id::CommandId;
use crate::commands::{dock_commands, filter_commands};
use crate::state::{AppState, DockMode};

/// One renderable result row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockRowVm {
    /// Kind badge: entity kind for search hits, id namespace for commands
    pub badge: String,
    pub title: String,
    /// Subtitle for search hits, hint line for commands
    pub detail: Option<String>,
    pub is_selected: bool,
}

/// Key hints for the footer line
#[derive(Debug, Clone)]
pub struct FooterHints {
    pub navigate: String,
    pub switch_mode: String,
    pub close: String,
}

/// Everything the dock view draws
#[derive(Debug, Clone)]
pub struct DockViewModel {
    pub input_text: String,
    pub input_is_empty: bool,
    pub mode: DockMode,
    /// True while a debounced search is in flight (spinner hint)
    pub pending: bool,
    pub rows: Vec<DockRowVm>,
    /// Shown in place of rows when there are none
    pub placeholder: String,
    pub footer: FooterHints,
}

impl DockViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let dock = &state.dock;

        let rows = if dock.commands_engine_active() {
            filter_commands(dock_commands(), &dock.query, &state.context)
                .iter()
                .enumerate()
                .map(|(i, cmd)| DockRowVm {
                    badge: cmd.id.split(':').next().unwrap_or_default().to_string(),
                    title: cmd.title.to_string(),
                    detail: cmd.hint.map(str::to_string),
                    is_selected: i == dock.selected_index,
                })
                .collect()
        } else {
            dock.results
                .iter()
                .enumerate()
                .map(|(i, result)| DockRowVm {
                    badge: result.kind.to_string(),
                    title: result.title.clone(),
                    detail: result.subtitle.clone(),
                    is_selected: i == dock.selected_index,
                })
                .collect::<Vec<_>>()
        };

        let placeholder = placeholder_text(dock.mode, &dock.query, dock.pending);

        let hint = |command: CommandId, fallback: &str| {
            state
                .keymap
                .compact_hint_for_command(command)
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            input_text: dock.query.clone(),
            input_is_empty: dock.query.trim().is_empty(),
            mode: dock.mode,
            pending: dock.pending,
            rows,
            placeholder,
            footer: FooterHints {
                navigate: format!(
                    "{}/{}",
                    hint(CommandId::NavigatePrevious, "↑"),
                    hint(CommandId::NavigateNext, "↓")
                ),
                switch_mode: hint(CommandId::DockSwitchMode, "Tab"),
                close: hint(CommandId::GlobalClose, "Esc"),
            },
        }
    }
}

fn placeholder_text(mode: DockMode, query: &str, pending: bool) -> String {
    if pending {
        return "Searching...".to_string();
    }
    if query.trim().is_empty() {
        return match mode {
            DockMode::Search => {
                "Search artists, releases and deliverables (a: r: f: d: to narrow)".to_string()
            }
            DockMode::Commands => "Type to filter commands".to_string(),
        };
    }
    match mode {
        DockMode::Search => "No results".to_string(),
        DockMode::Commands => "No matching commands".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, DockAction};
    use crate::search::{SearchResult, SearchResultKind};

    fn open_state(mode: DockMode) -> AppState {
        let mut state = AppState::default();
        state.context.organization_id = Some("org-1".into());
        crate::reducers::reduce(state, &Action::Dock(DockAction::Open(mode)))
    }

    #[test]
    fn search_rows_carry_kind_badge_and_subtitle() {
        let mut state = open_state(DockMode::Search);
        state.dock.query = "kind".into();
        state.dock.results = vec![
            SearchResult {
                id: "r1".into(),
                kind: SearchResultKind::Release,
                title: "Kind of Blue".into(),
                subtitle: Some("Album • KOB-1".into()),
                destination: "/releases/r1".into(),
            },
            SearchResult {
                id: "f1".into(),
                kind: SearchResultKind::Folder,
                title: "Kind of Blue masters".into(),
                subtitle: None,
                destination: "/deliverables/f1".into(),
            },
        ];

        let vm = DockViewModel::from_state(&state);
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[0].badge, "release");
        assert_eq!(vm.rows[0].detail.as_deref(), Some("Album • KOB-1"));
        assert!(vm.rows[0].is_selected);
        assert_eq!(vm.rows[1].badge, "folder");
        assert!(!vm.rows[1].is_selected);
    }

    #[test]
    fn commands_mode_shows_the_full_registry_for_empty_input() {
        let state = open_state(DockMode::Commands);
        let vm = DockViewModel::from_state(&state);

        // All always-visible commands plus settings (org present), minus
        // upload:file (no release in context)
        assert_eq!(vm.rows.len(), 6);
        assert_eq!(vm.rows[0].title, "Create artist");
        assert_eq!(vm.rows[0].badge, "create");
    }

    #[test]
    fn command_utterance_in_search_mode_builds_command_rows() {
        let mut state = open_state(DockMode::Search);
        state.dock.query = "create artist".into();

        let vm = DockViewModel::from_state(&state);
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].badge, "create");
        assert_eq!(vm.rows[0].title, "Create artist");
    }

    #[test]
    fn placeholder_reflects_pending_and_empty_states() {
        let mut state = open_state(DockMode::Search);
        let vm = DockViewModel::from_state(&state);
        assert!(vm.placeholder.contains("a: r: f: d:"));

        state.dock.query = "zzz".into();
        let vm = DockViewModel::from_state(&state);
        assert_eq!(vm.placeholder, "No results");

        state.dock.pending = true;
        let vm = DockViewModel::from_state(&state);
        assert_eq!(vm.placeholder, "Searching...");
    }

    #[test]
    fn footer_hints_come_from_the_keymap() {
        let state = open_state(DockMode::Search);
        let vm = DockViewModel::from_state(&state);
        assert_eq!(vm.footer.navigate, "↑/↓");
        assert_eq!(vm.footer.switch_mode, "Tab");
        assert_eq!(vm.footer.close, "Esc");
    }
}
