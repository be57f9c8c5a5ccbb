use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;

use crate::app::App;
use crate::core::EmptyStateButton;
use crate::domain::{lookup, TabId};

use self::layout::UiAreas;

pub const EYEBROW: &str = "PERSONAL FINANCE";
pub const TITLE: &str = "Moses Estate";
pub const TAGLINE: &str = "A calm space for your financial organization and planning.";
pub const LOCAL_DATA_NOTE: &str = "All data local";

/// Marker drawn under the active tab.
pub const ACTIVE_MARK: &str = "━";
const RULE: &str = "─";

const INK: Color = Color::White;
const MUTED: Color = Color::DarkGray;

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header);
    draw_nav(f, &areas, app.active_tab);
    draw_empty_state(f, &areas, app.active_tab);
    draw_footer(f, areas.footer, &app.formatted_date());
    draw_hints(f, areas.hints);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            EYEBROW,
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(INK).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(MUTED))),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_nav(f: &mut Frame, areas: &UiAreas, active: TabId) {
    for (id, rect) in areas.tabs {
        if rect.width == 0 {
            continue;
        }
        let is_active = id == active;
        let style = if is_active {
            Style::default().fg(INK).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        let label = Paragraph::new(Line::from(Span::styled(
            layout::fit_tab_text(lookup(id), rect.width.saturating_sub(2)),
            style,
        )))
        .alignment(Alignment::Center);
        f.render_widget(label, rect);
    }

    let rule = Paragraph::new(RULE.repeat(areas.nav_indicator.width as usize))
        .style(Style::default().fg(MUTED));
    f.render_widget(rule, areas.nav_indicator);

    let active_rect = areas.tab_rect(active);
    let marker_area = Rect {
        x: active_rect.x,
        y: areas.nav_indicator.y,
        width: active_rect.width,
        height: areas.nav_indicator.height,
    };
    let marker = Paragraph::new(ACTIVE_MARK.repeat(marker_area.width as usize))
        .style(Style::default().fg(INK).add_modifier(Modifier::BOLD));
    f.render_widget(marker, marker_area);
}

fn draw_empty_state(f: &mut Frame, areas: &UiAreas, active: TabId) {
    let descriptor = lookup(active);

    let icon = Paragraph::new(descriptor.icon)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(MUTED)),
        );
    f.render_widget(icon, areas.icon);

    let title = Paragraph::new(Span::styled(
        descriptor.empty_title,
        Style::default().fg(INK).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, areas.title);

    let description = Paragraph::new(descriptor.empty_description)
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(description, areas.description);

    for (button, rect) in areas.buttons {
        if rect.width == 0 {
            continue;
        }
        let (text_style, border_style) = match button {
            EmptyStateButton::NewEntry => (
                Style::default()
                    .fg(Color::Black)
                    .bg(INK)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(INK).bg(INK),
            ),
            EmptyStateButton::Import => (Style::default().fg(INK), Style::default().fg(MUTED)),
        };
        let widget = Paragraph::new(Span::raw(button.label()))
            .style(text_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            );
        f.render_widget(widget, rect);
    }
}

fn draw_footer(f: &mut Frame, area: Rect, date: &str) {
    if area.height == 0 {
        return;
    }
    let rule_area = Rect { height: 1, ..area };
    f.render_widget(
        Paragraph::new(RULE.repeat(area.width as usize)).style(Style::default().fg(MUTED)),
        rule_area,
    );

    let line_area = Rect {
        y: area.y.saturating_add(1),
        height: area.height.saturating_sub(1),
        ..area
    };
    let local = Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::LightGreen)),
        Span::styled(LOCAL_DATA_NOTE, Style::default().fg(MUTED)),
    ]);
    let (note_area, date_area) =
        layout::footer_split(line_area, local.width() as u16, Span::raw(date).width() as u16);
    f.render_widget(Paragraph::new(local), note_area);
    if let Some(date_area) = date_area {
        f.render_widget(
            Paragraph::new(Span::styled(date.to_string(), Style::default().fg(MUTED)))
                .alignment(Alignment::Right),
            date_area,
        );
    }
}

fn draw_hints(f: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::LightCyan);
    let line = Line::from(vec![
        Span::styled("1-5", key),
        Span::raw(" Tab  "),
        Span::styled("←/→", key),
        Span::raw(" Switch  "),
        Span::styled("n", key),
        Span::raw(" New entry  "),
        Span::styled("i", key),
        Span::raw(" Import  "),
        Span::styled("?", key),
        Span::raw(" Help  "),
        Span::styled("q", key),
        Span::raw(" Quit"),
    ]);
    f.render_widget(Paragraph::new(line).style(Style::default().fg(MUTED)), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = layout::centered_rect(60, 60, area);
    f.render_widget(Clear, popup_area);

    let mut lines = vec![Line::from("Tabs")];
    for id in TabId::ALL {
        lines.push(Line::from(format!(
            "  {}          {}",
            id.shortcut(),
            lookup(id).label
        )));
    }
    lines.extend([
        Line::from("  ← / h      Previous tab"),
        Line::from("  → / l      Next tab"),
        Line::from("  Tab        Next tab"),
        Line::from("  Mouse      Click a tab or button"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  n          New entry (not available yet)"),
        Line::from("  i          Import (not available yet)"),
        Line::from("  ?          Toggle help"),
        Line::from("  Esc        Close help / quit"),
        Line::from("  q          Quit"),
        Line::from(""),
    ]);
    let config_path = app
        .config_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    lines.push(Line::from(format!("Config: {config_path}")));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}
