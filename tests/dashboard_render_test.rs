//! Render the dashboard into a test terminal and check what ends up on screen

use estate::app::App;
use estate::core::{Action, EmptyStateButton};
use estate::domain::{lookup, TabId};
use estate::input;
use estate::ui::{self, layout, ACTIVE_MARK};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn screen() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: WIDTH,
        height: HEIGHT,
    }
}

fn render(app: &App) -> Buffer {
    render_sized(app, WIDTH, HEIGHT)
}

fn render_sized(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer.get(x, y).symbol())
        .collect()
}

/// Whole screen with runs of whitespace collapsed, so wrapped text reads as one line.
fn flat_text(buffer: &Buffer) -> String {
    let rows: Vec<String> = (0..buffer.area.height)
        .map(|y| row_text(buffer, y))
        .collect();
    rows.join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}

fn active_marker_columns(buffer: &Buffer) -> Vec<u16> {
    let y = layout::areas(buffer.area).nav_indicator.y;
    (0..buffer.area.width)
        .filter(|x| buffer.get(*x, y).symbol() == ACTIVE_MARK)
        .collect()
}

#[test]
fn test_initial_render_shows_loans() {
    let text = flat_text(&render(&App::default()));
    assert!(text.contains("No student loans tracked yet"));
    assert!(text.contains("🎓"));
    assert!(text.contains(lookup(TabId::Loans).empty_description));
}

#[test]
fn test_header_and_navigation_labels() {
    let text = flat_text(&render(&App::default()));
    assert!(text.contains("PERSONAL FINANCE"));
    assert!(text.contains("Moses Estate"));
    assert!(text.contains("A calm space for your financial organization and planning."));
    for id in TabId::ALL {
        assert!(text.contains(lookup(id).label), "missing tab {}", id);
    }
}

#[test]
fn test_each_tab_shows_its_empty_state() {
    let mut app = App::default();
    for id in TabId::ALL {
        app.apply(Action::SelectTab(id));
        assert_eq!(app.active_tab, id);

        let text = flat_text(&render(&app));
        let descriptor = lookup(id);
        assert!(text.contains(descriptor.empty_title));
        assert!(text.contains(descriptor.empty_description));
        for other in TabId::ALL.into_iter().filter(|other| *other != id) {
            assert!(!text.contains(lookup(other).empty_title));
        }
    }
}

#[test]
fn test_exactly_one_active_marker() {
    let areas = layout::areas(screen());
    let mut app = App::default();
    for id in TabId::ALL {
        app.apply(Action::SelectTab(id));
        let columns = active_marker_columns(&render(&app));
        let rect = areas.tab_rect(id);
        assert_eq!(columns.len(), rect.width as usize);
        assert!(columns
            .iter()
            .all(|x| layout::rect_contains(rect, *x, rect.y)));
    }
}

#[test]
fn test_footer_date_is_pinned() {
    let buffer = render(&App::default());
    let footer = layout::areas(screen()).footer;
    let line = row_text(&buffer, footer.y + 1);
    assert!(line.contains("Saturday, February 21, 2026"));
    assert!(line.contains("All data local"));
}

#[test]
fn test_buttons_are_drawn_and_inert() {
    let mut app = App::new(TabId::Taxes, estate::app::pinned_date());
    let before_state = app.clone();
    let before = render(&app);
    let text = flat_text(&before);
    assert!(text.contains("New entry"));
    assert!(text.contains("Import"));

    let areas = layout::areas(screen());
    for button in EmptyStateButton::ALL {
        let rect = areas.button_rect(button);
        let action = input::map_click(screen(), rect.x + 1, rect.y + 1);
        assert_eq!(action, button.action());
        app.apply(action);
    }

    assert_eq!(app, before_state);
    assert_eq!(render(&app), before);
}

#[test]
fn test_full_cycle_restores_render() {
    let mut app = App::default();
    let initial = render(&app);

    for id in [
        TabId::Taxes,
        TabId::Debt,
        TabId::Income,
        TabId::Expenses,
        TabId::Loans,
    ] {
        app.apply(Action::SelectTab(id));
    }

    assert_eq!(app, App::default());
    assert_eq!(render(&app), initial);
}

#[test]
fn test_clicking_tabs_switches_content() {
    let areas = layout::areas(screen());
    let mut app = App::default();
    for id in TabId::ALL.into_iter().rev() {
        let rect = areas.tab_rect(id);
        app.apply(input::map_click(screen(), rect.x + 1, rect.y));
        assert_eq!(app.active_tab, id);
        assert!(flat_text(&render(&app)).contains(lookup(id).empty_title));
    }
}

#[test]
fn test_help_popup_renders_and_closes() {
    let mut app = App::default();
    app.apply(Action::ToggleHelp);
    let text = flat_text(&render(&app));
    assert!(text.contains("Help"));
    assert!(text.contains("Toggle help"));

    app.apply(Action::CloseOverlay);
    assert_eq!(render(&app), render(&App::default()));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let backend = TestBackend::new(20, 6);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut app = App::default();
    for id in TabId::ALL {
        app.apply(Action::SelectTab(id));
        terminal.draw(|f| ui::draw(f, &app)).unwrap();
    }
}

#[test]
fn test_narrow_terminal_keeps_every_tab_marked() {
    let size = Rect {
        x: 0,
        y: 0,
        width: 50,
        height: 24,
    };
    let areas = layout::areas(size);
    let mut app = App::default();
    for id in TabId::ALL {
        app.apply(Action::SelectTab(id));
        let buffer = render_sized(&app, size.width, size.height);

        let rect = areas.tab_rect(id);
        assert!(rect.width > 0, "tab {id} has no room");
        let columns = active_marker_columns(&buffer);
        assert_eq!(columns.len(), rect.width as usize, "marker for {id}");
        assert!(columns
            .iter()
            .all(|x| layout::rect_contains(rect, *x, rect.y)));

        let nav = row_text(&buffer, areas.nav_labels.y);
        for other in TabId::ALL {
            assert!(nav.contains(lookup(other).icon), "{other} missing from nav");
        }
    }
}

#[test]
fn test_narrow_terminal_tab_clicks_still_land() {
    let size = Rect {
        x: 0,
        y: 0,
        width: 50,
        height: 24,
    };
    let areas = layout::areas(size);
    let mut app = App::default();
    for id in TabId::ALL.into_iter().rev() {
        let rect = areas.tab_rect(id);
        app.apply(input::map_click(size, rect.x, rect.y));
        assert_eq!(app.active_tab, id);
    }
}

#[test]
fn test_narrow_footer_keeps_local_note_readable() {
    let buffer = render_sized(&App::default(), 40, 24);
    let footer = layout::areas(buffer.area).footer;
    let line = row_text(&buffer, footer.y + 1);
    assert!(line.contains("● All data local"));
    assert!(!line.contains("2026"));

    let wide = render(&App::default());
    let footer = layout::areas(screen()).footer;
    let line = row_text(&wide, footer.y + 1);
    assert!(line.contains("● All data local"));
    assert!(line.contains("Saturday, February 21, 2026"));
}

#[test]
fn test_help_shows_session_config_path() {
    let mut app = App::default().with_config_path(Some("/tmp/estate-custom.toml".into()));
    app.apply(Action::ToggleHelp);
    let text = flat_text(&render(&app));
    assert!(text.contains("Config: /tmp/estate-custom.toml"));

    let mut bare = App::default();
    bare.apply(Action::ToggleHelp);
    assert!(flat_text(&render(&bare)).contains("Config: (none)"));
}
