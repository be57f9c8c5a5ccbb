use std::path::PathBuf;

use chrono::NaiveDate;

use crate::core::Action;
use crate::domain::{lookup, TabDescriptor, TabId};

/// Date shown in the footer unless the user asks for something else.
pub const PINNED_DATE: (i32, u32, u32) = (2026, 2, 21);

/// Footer date format, e.g. "Saturday, February 21, 2026".
pub const DATE_FORMAT: &str = "%A, %B %-d, %Y";

pub fn pinned_date() -> NaiveDate {
    let (year, month, day) = PINNED_DATE;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// Currently selected tab
    pub active_tab: TabId,
    /// Date rendered in the footer
    pub today: NaiveDate,
    /// Config file this session was started from
    pub config_path: Option<PathBuf>,
    pub help_open: bool,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(TabId::default(), pinned_date())
    }
}

impl App {
    pub fn new(active_tab: TabId, today: NaiveDate) -> Self {
        Self {
            active_tab,
            today,
            config_path: None,
            help_open: false,
            should_quit: false,
        }
    }

    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn active_descriptor(&self) -> &'static TabDescriptor {
        lookup(self.active_tab)
    }

    pub fn is_active(&self, id: TabId) -> bool {
        self.active_tab == id
    }

    pub fn formatted_date(&self) -> String {
        format_date(self.today)
    }

    pub fn select_tab(&mut self, id: TabId) {
        if self.active_tab != id {
            tracing::debug!(from = %self.active_tab, to = %id, "tab selected");
        }
        self.active_tab = id;
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::SelectTab(id) => self.select_tab(id),
            Action::NextTab => self.select_tab(self.active_tab.next()),
            Action::PrevTab => self.select_tab(self.active_tab.prev()),
            Action::NewEntry => {
                tracing::debug!(tab = %self.active_tab, "new entry requested; no entry flow wired");
            }
            Action::Import => {
                tracing::debug!(tab = %self.active_tab, "import requested; no import flow wired");
            }
            Action::ToggleHelp => self.help_open = !self.help_open,
            Action::CloseOverlay => self.help_open = false,
            Action::Quit => self.should_quit = true,
        }
    }
}
