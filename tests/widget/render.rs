use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};

use fintab::{
    SortDirection, SortKey,
    table::MONEY_STEP,
    tui::{App, render},
};

use crate::common::{aapl_2021, aapl_2022};

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    terminal.draw(|f| render::draw(f, app)).unwrap();
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

#[test]
fn table_view_renders_title_headers_and_rows() {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    let mut app = App::new();
    app.apply_fetch(Ok(vec![aapl_2022(), aapl_2021()]));

    draw(&mut terminal, &mut app);
    let text = buffer_text(&terminal);

    assert!(text.contains("AAPL Financial Data"));
    assert!(text.contains("Gross Profit"));
    assert!(text.contains("Operating Income"));
    assert!(text.contains("2021-09-25"));
    assert!(text.contains("$365,817,000,000"));
    assert!(text.contains("5.61"));
    assert!(text.contains("Date Range"));
    assert!(text.contains("From: 2020 To: 2025"));
    assert!(text.contains("From: $1,000,000 To: $90,000,000,000,000"));
}

#[test]
fn loading_view_shows_empty_table() {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    let mut app = App::new();

    draw(&mut terminal, &mut app);
    let text = buffer_text(&terminal);

    assert!(text.contains("AAPL Financial Data"));
    assert!(text.contains("Revenue"));
    assert!(!text.contains("2021-09-25"));
}

#[test]
fn error_view_replaces_everything_with_the_message() {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    let mut app = App::new();
    app.apply_fetch(Err(fintab::FmpError::Status {
        status: 500,
        url: "http://localhost/api/v3/income-statement/AAPL".into(),
    }));

    draw(&mut terminal, &mut app);
    let text = buffer_text(&terminal);

    assert!(text.contains("Failed to fetch data."));
    assert!(!text.contains("AAPL Financial Data"));
    assert!(!text.contains("Revenue"));
    assert!(!text.contains("Date Range"));
}

#[test]
fn active_sort_column_carries_the_direction_glyph() {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    let mut app = App::new();
    app.apply_fetch(Ok(vec![aapl_2022(), aapl_2021()]));

    draw(&mut terminal, &mut app);
    let text = buffer_text(&terminal);
    assert!(!text.contains("Date \u{2191}"));
    assert!(!text.contains("Revenue \u{2191}"));

    app.on_key(key(KeyCode::Char('r')));
    draw(&mut terminal, &mut app);
    let text = buffer_text(&terminal);
    assert!(text.contains("Revenue \u{2191}"));
    assert!(!text.contains("Date \u{2191}"));
    assert!(!text.contains("Net Income \u{2191}"));

    app.on_key(key(KeyCode::Char('r')));
    draw(&mut terminal, &mut app);
    let text = buffer_text(&terminal);
    assert!(text.contains("Revenue \u{2193}"));
    assert!(!text.contains("Revenue \u{2191}"));
}

#[test]
fn clicking_headers_drives_the_sort() {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    let mut app = App::new();
    app.apply_fetch(Ok(vec![aapl_2022(), aapl_2021()]));

    // Regions are populated by the first draw.
    draw(&mut terminal, &mut app);
    let regions = app.regions;
    assert!(regions.date_header.width > 0);

    app.on_mouse(left_click(regions.date_header.x, regions.date_header.y));
    assert_eq!(app.table.sort().key, Some(SortKey::Date));
    assert_eq!(app.table.sort().direction, SortDirection::Ascending);

    app.on_mouse(left_click(regions.date_header.x, regions.date_header.y));
    assert_eq!(app.table.sort().direction, SortDirection::Descending);

    app.on_mouse(left_click(
        regions.net_income_header.x + regions.net_income_header.width - 1,
        regions.net_income_header.y,
    ));
    assert_eq!(app.table.sort().key, Some(SortKey::NetIncome));
    assert_eq!(app.table.sort().direction, SortDirection::Ascending);

    // A click outside every header changes nothing.
    app.on_mouse(left_click(0, 0));
    assert_eq!(app.table.sort().key, Some(SortKey::NetIncome));
}

#[test]
fn keyboard_moves_the_focused_slider_handles() {
    let mut app = App::new();
    app.apply_fetch(Ok(vec![aapl_2022(), aapl_2021()]));

    // Year control has focus at startup; the lower handle is active.
    app.on_key(key(KeyCode::Right));
    assert_eq!(app.table.year_range().selected(), (2021, 2025));

    // Switch to the upper handle and pull it in.
    app.on_key(key(KeyCode::Up));
    app.on_key(key(KeyCode::Left));
    assert_eq!(app.table.year_range().selected(), (2021, 2024));

    // The year selection survives while money sliders move.
    app.on_key(key(KeyCode::Tab));
    app.on_key(key(KeyCode::Down));
    app.on_key(key(KeyCode::Right));
    let (rev_min, rev_max) = app.table.revenue_range().selected();
    assert!(rev_min > 1_000_000);
    assert_eq!(rev_min % MONEY_STEP, 0);
    assert!(rev_min <= rev_max);
    assert_eq!(app.table.year_range().selected(), (2021, 2024));
}

#[test]
fn slider_handles_clamp_at_the_bounds_and_never_cross() {
    let mut app = App::new();
    app.apply_fetch(Ok(vec![aapl_2021()]));

    // Push the lower year handle far past the floor.
    for _ in 0..10 {
        app.on_key(key(KeyCode::Left));
    }
    assert_eq!(app.table.year_range().selected(), (2020, 2025));

    // Push it up past the upper handle; it stops there instead of crossing.
    for _ in 0..10 {
        app.on_key(key(KeyCode::Right));
    }
    assert_eq!(app.table.year_range().selected(), (2025, 2025));
}

#[test]
fn narrowed_year_range_filters_rendered_rows() {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    let mut app = App::new();
    app.apply_fetch(Ok(vec![aapl_2022(), aapl_2021()]));

    // Raise the lower year bound to 2022.
    app.on_key(key(KeyCode::Right));
    app.on_key(key(KeyCode::Right));

    draw(&mut terminal, &mut app);
    let text = buffer_text(&terminal);

    assert!(text.contains("From: 2022 To: 2025"));
    assert!(text.contains("2022-09-24"));
    assert!(!text.contains("2021-09-25"));
}

#[test]
fn quit_keys_work_even_in_the_error_view() {
    let mut app = App::new();
    app.apply_fetch(Err(fintab::FmpError::Status {
        status: 500,
        url: "http://localhost/api/v3/income-statement/AAPL".into(),
    }));

    // Sort and slider keys are inert once the view has failed.
    app.on_key(key(KeyCode::Char('r')));
    app.on_key(key(KeyCode::Right));
    assert_eq!(app.table.sort().key, None);
    assert_eq!(app.table.year_range().selected(), (2020, 2025));

    app.on_key(key(KeyCode::Char('q')));
    assert!(app.should_quit);
}
