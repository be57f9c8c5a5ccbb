use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;

use crate::core::EmptyStateButton;
use crate::domain::{registry, TabDescriptor, TabId};

/// Widest the dashboard column grows before it is centered.
pub const MAX_WIDTH: u16 = 96;

/// Widest the empty-state description wraps at.
pub const DESCRIPTION_WIDTH: u16 = 60;

const TAB_PADDING: u16 = 2;
const BUTTON_GAP: u16 = 2;
const FOOTER_GAP: u16 = 2;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub column: Rect,
    pub header: Rect,
    pub nav: Rect,
    pub nav_labels: Rect,
    pub nav_indicator: Rect,
    pub content: Rect,
    pub icon: Rect,
    pub title: Rect,
    pub description: Rect,
    pub actions: Rect,
    pub footer: Rect,
    pub hints: Rect,
    pub tabs: [(TabId, Rect); 5],
    pub buttons: [(EmptyStateButton, Rect); 2],
}

impl UiAreas {
    pub fn tab_rect(&self, id: TabId) -> Rect {
        self.tabs[id.index()].1
    }

    pub fn button_rect(&self, button: EmptyStateButton) -> Rect {
        self.buttons
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, rect)| *rect)
            .unwrap_or_default()
    }
}

pub fn areas(size: Rect) -> UiAreas {
    let column = centered_width(size, MAX_WIDTH);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top margin
            Constraint::Length(4), // header
            Constraint::Length(2), // nav labels + indicator
            Constraint::Min(0),    // content
            Constraint::Length(2), // footer rule + line
            Constraint::Length(1), // key hints
        ])
        .split(column);

    let nav_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    let content = vertical[3];
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // padding
            Constraint::Length(3), // icon box
            Constraint::Length(1),
            Constraint::Length(1), // title
            Constraint::Length(1),
            Constraint::Length(4), // description
            Constraint::Length(3), // buttons
            Constraint::Min(0),
        ])
        .split(content);

    let actions = content_chunks[6];

    UiAreas {
        size,
        column,
        header: vertical[1],
        nav: vertical[2],
        nav_labels: nav_chunks[0],
        nav_indicator: nav_chunks[1],
        content,
        icon: centered_width(content_chunks[1], 8),
        title: content_chunks[3],
        description: centered_width(content_chunks[5], DESCRIPTION_WIDTH),
        actions,
        footer: vertical[4],
        hints: vertical[5],
        tabs: tab_hitboxes(nav_chunks[0]),
        buttons: button_hitboxes(actions),
    }
}

/// Text drawn for a tab in the navigation strip.
pub fn tab_text(descriptor: &TabDescriptor) -> String {
    format!("{} {}", descriptor.icon, descriptor.label)
}

fn text_width(text: &str) -> u16 {
    Span::raw(text).width() as u16
}

/// Text drawn for a tab squeezed into `width` columns. Long labels are cut
/// with an ellipsis; below three columns only the icon is left.
pub fn fit_tab_text(descriptor: &TabDescriptor, width: u16) -> String {
    let full = tab_text(descriptor);
    if text_width(&full) <= width {
        return full;
    }
    if width < 3 {
        return if text_width(descriptor.icon) <= width {
            descriptor.icon.to_string()
        } else {
            String::new()
        };
    }
    let budget = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in full.chars() {
        let ch_width = text_width(ch.encode_utf8(&mut [0; 4]));
        if used + ch_width > budget {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}

/// Lays tabs out left to right. Padding shrinks first, then icon-only
/// widths are tried, and as a last resort the row is split evenly. Every
/// tab keeps a non-zero width as long as the row is at least five wide.
pub fn tab_hitboxes(row: Rect) -> [(TabId, Rect); 5] {
    let descriptors = *registry();
    let full = descriptors.map(|descriptor| text_width(&tab_text(&descriptor)));

    for padding in [TAB_PADDING, 1] {
        let widths = full.map(|width| width + padding * 2);
        if widths.iter().sum::<u16>() <= row.width {
            return place_tabs(row, widths);
        }
    }

    let icons = descriptors.map(|descriptor| text_width(descriptor.icon) + 2);
    if icons.iter().sum::<u16>() <= row.width {
        return place_tabs(row, icons);
    }

    let count = descriptors.len() as u16;
    let base = row.width / count;
    let extra = row.width % count;
    let mut idx = 0;
    let widths = descriptors.map(|_| {
        let width = base + u16::from(idx < extra);
        idx += 1;
        width
    });
    place_tabs(row, widths)
}

fn place_tabs(row: Rect, widths: [u16; 5]) -> [(TabId, Rect); 5] {
    let mut x = row.x;
    let right = row.x.saturating_add(row.width);
    let mut idx = 0;
    TabId::ALL.map(|id| {
        let width = widths[idx].min(right.saturating_sub(x));
        idx += 1;
        let rect = Rect {
            x,
            y: row.y,
            width,
            height: row.height,
        };
        x = x.saturating_add(width);
        (id, rect)
    })
}

/// Splits the footer line into the local-data note and the date. The date
/// is dropped when both do not fit side by side.
pub fn footer_split(line: Rect, note_width: u16, date_width: u16) -> (Rect, Option<Rect>) {
    if note_width + FOOTER_GAP + date_width > line.width {
        return (line, None);
    }
    let note = Rect {
        width: line.width - date_width - FOOTER_GAP,
        ..line
    };
    let date = Rect {
        x: line.x + line.width - date_width,
        width: date_width,
        ..line
    };
    (note, Some(date))
}

/// Centers the two buttons on their row.
pub fn button_hitboxes(row: Rect) -> [(EmptyStateButton, Rect); 2] {
    let widths = EmptyStateButton::ALL.map(|button| text_width(button.label()) + 4);
    let total = widths.iter().sum::<u16>() + BUTTON_GAP;
    let mut x = row.x + row.width.saturating_sub(total) / 2;
    let right = row.x.saturating_add(row.width);
    let mut idx = 0;
    EmptyStateButton::ALL.map(|button| {
        let width = widths[idx].min(right.saturating_sub(x));
        idx += 1;
        let rect = Rect {
            x,
            y: row.y,
            width,
            height: row.height,
        };
        x = x.saturating_add(width + BUTTON_GAP).min(right);
        (button, rect)
    })
}

pub fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
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

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
