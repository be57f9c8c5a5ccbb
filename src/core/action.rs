//! Actions produced by input handling and applied to the app

use crate::domain::TabId;

/// Everything the user can ask the dashboard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Make a tab the active one
    SelectTab(TabId),

    /// Move to the next tab in display order
    NextTab,

    /// Move to the previous tab in display order
    PrevTab,

    /// "New entry" call-to-action (no flow wired yet)
    NewEntry,

    /// "Import" call-to-action (no flow wired yet)
    Import,

    /// Open or close the help overlay
    ToggleHelp,

    /// Close current overlay/popup
    CloseOverlay,

    /// Request quit
    Quit,
}

/// The two call-to-action buttons of the empty-state panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyStateButton {
    NewEntry,
    Import,
}

impl EmptyStateButton {
    pub const ALL: [EmptyStateButton; 2] = [EmptyStateButton::NewEntry, EmptyStateButton::Import];

    pub fn label(&self) -> &'static str {
        match self {
            EmptyStateButton::NewEntry => "＋ New entry",
            EmptyStateButton::Import => "Import",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            EmptyStateButton::NewEntry => 'n',
            EmptyStateButton::Import => 'i',
        }
    }

    pub fn action(&self) -> Action {
        match self {
            EmptyStateButton::NewEntry => Action::NewEntry,
            EmptyStateButton::Import => Action::Import,
        }
    }
}
