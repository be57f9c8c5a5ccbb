//! Key and mouse mapping
//!
//! Input never touches [`App`] directly: events become [`Action`]s which the
//! event loop hands to [`App::apply`].

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::App;
use crate::core::{Action, EmptyStateButton};
use crate::domain::TabId;
use crate::ui::layout::{self, rect_contains};

pub fn map_key(app: &App, key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if app.help_open {
        return match key.code {
            KeyCode::Char('?') | KeyCode::Esc => Action::CloseOverlay,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::NextTab,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Action::PrevTab,
        KeyCode::Char(ch) => {
            if let Some(id) = TabId::from_shortcut(ch) {
                return Action::SelectTab(id);
            }
            EmptyStateButton::ALL
                .into_iter()
                .find(|button| button.shortcut() == ch)
                .map(|button| button.action())
                .unwrap_or(Action::None)
        }
        _ => Action::None,
    }
}

pub fn map_mouse(app: &App, mouse: MouseEvent, size: Rect) -> Action {
    if app.help_open {
        return Action::None;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => map_click(size, mouse.column, mouse.row),
        _ => Action::None,
    }
}

/// Action for a left click at (`col`, `row`) on a screen of `size`.
pub fn map_click(size: Rect, col: u16, row: u16) -> Action {
    let areas = layout::areas(size);

    if let Some((id, _)) = areas
        .tabs
        .iter()
        .find(|(_, rect)| rect_contains(*rect, col, row))
    {
        return Action::SelectTab(*id);
    }

    areas
        .buttons
        .iter()
        .find(|(_, rect)| rect_contains(*rect, col, row))
        .map(|(button, _)| button.action())
        .unwrap_or(Action::None)
}
