use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    table::{RangeControl, SortDirection, SortKey, format},
    tui::{
        app::{App, ClickableRegions, Focus, Handle, TICKER},
        theme,
    },
};

const COLUMN_WIDTHS: [u16; 6] = [12, 18, 18, 18, 8, 18];
const COLUMN_SPACING: u16 = 1;
const SLIDER_WIDTH: usize = 24;

pub fn draw(f: &mut Frame, app: &mut App) {
    if let Some(message) = app.table.error() {
        draw_error(f, message);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(5), // range filters
            Constraint::Min(5),    // table
            Constraint::Length(1), // key hints
        ])
        .split(f.area());

    draw_title(f, chunks[0]);
    draw_filters(f, app, chunks[1]);
    draw_table(f, app, chunks[2]);
    draw_hints(f, chunks[3]);
}

/// The failed view: nothing but the message.
fn draw_error(f: &mut Frame, message: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(f.area());

    let para = Paragraph::new(Span::styled(message, theme::error())).alignment(Alignment::Center);
    f.render_widget(para, chunks[1]);
}

fn draw_title(f: &mut Frame, area: Rect) {
    let para = Paragraph::new(Span::styled(format!("{TICKER} Financial Data"), theme::title()))
        .alignment(Alignment::Center);
    f.render_widget(para, area);
}

fn draw_filters(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        slider_line(app, Focus::Year, "Date Range", app.table.year_range(), false),
        slider_line(
            app,
            Focus::Revenue,
            "Revenue Range",
            app.table.revenue_range(),
            true,
        ),
        slider_line(
            app,
            Focus::NetIncome,
            "Net Income Range",
            app.table.net_income_range(),
            true,
        ),
    ];

    let para = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}

fn slider_line(
    app: &App,
    focus: Focus,
    label: &str,
    control: &RangeControl,
    money: bool,
) -> Line<'static> {
    let is_focused = app.focus == focus;
    let label_style = if is_focused {
        theme::accent_bold()
    } else {
        theme::muted()
    };
    let bar_style = if is_focused {
        theme::accent()
    } else {
        theme::muted()
    };

    let (from, to) = control.selected();
    let caption = if money {
        format!(
            "  From: {} To: {}",
            format::currency(from),
            format::currency(to)
        )
    } else {
        format!("  From: {from} To: {to}")
    };

    let mut spans = vec![
        Span::styled(format!("{label:<17}"), label_style),
        Span::styled(two_handle_bar(control, SLIDER_WIDTH), bar_style),
        Span::raw(caption),
    ];
    if is_focused {
        let which = match app.handle {
            Handle::Lower => "  [min]",
            Handle::Upper => "  [max]",
        };
        spans.push(Span::styled(which, theme::accent_bold()));
    }

    Line::from(spans)
}

/// Renders a two-handle slider as a fixed-width text bar, the selected span
/// drawn solid between the handles.
fn two_handle_bar(control: &RangeControl, width: usize) -> String {
    let (lo, hi) = control.bounds();
    let span = (hi - lo).max(1) as f64;
    let (min, max) = control.selected();

    let pos = |v: i64| -> usize {
        let frac = ((v - lo) as f64 / span).clamp(0.0, 1.0);
        (frac * (width - 1) as f64).round() as usize
    };
    let (lo_pos, hi_pos) = (pos(min), pos(max));

    let mut bar = String::with_capacity(width * 3);
    for i in 0..width {
        bar.push(if i == lo_pos || i == hi_pos {
            '◆'
        } else if i > lo_pos && i < hi_pos {
            '━'
        } else {
            '─'
        });
    }
    bar
}

fn draw_table(f: &mut Frame, app: &mut App, area: Rect) {
    // Note: clickable header regions are rebuilt here on every draw.
    app.regions = header_regions(area);

    let sort = app.table.sort();
    let sort_arrow = match sort.direction {
        SortDirection::Ascending => "↑",
        SortDirection::Descending => "↓",
    };
    let header_col = |name: &str, col: SortKey| -> String {
        if sort.key == Some(col) {
            format!("{name} {sort_arrow}")
        } else {
            name.to_string()
        }
    };

    let header = Row::new(vec![
        header_col("Date", SortKey::Date),
        header_col("Revenue", SortKey::Revenue),
        header_col("Net Income", SortKey::NetIncome),
        "Gross Profit".to_string(),
        "EPS".to_string(),
        "Operating Income".to_string(),
    ])
    .style(theme::header())
    .height(1);

    let rows: Vec<Row> = app
        .table
        .visible()
        .into_iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.date.format("%Y-%m-%d").to_string()),
                money_cell(p.revenue),
                money_cell(p.net_income),
                money_cell(p.gross_profit),
                Cell::from(Line::from(format::eps(p.eps)).alignment(Alignment::Right)),
                money_cell(p.operating_income),
            ])
        })
        .collect();

    let widths: Vec<Constraint> = COLUMN_WIDTHS
        .iter()
        .map(|w| Constraint::Length(*w))
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(table, area);
}

fn money_cell(amount: i64) -> Cell<'static> {
    Cell::from(Line::from(format::currency(amount)).alignment(Alignment::Right))
}

/// Computes the clickable header cell rects from the table area, mirroring
/// the fixed column widths the table is drawn with (inside the border).
fn header_regions(area: Rect) -> ClickableRegions {
    let y = area.y + 1;
    let mut x = area.x + 1;
    let mut rects = [Rect::default(); 3];
    for (i, w) in COLUMN_WIDTHS.iter().take(3).enumerate() {
        rects[i] = Rect::new(x, y, *w, 1);
        x += *w + COLUMN_SPACING;
    }

    ClickableRegions {
        date_header: rects[0],
        revenue_header: rects[1],
        net_income_header: rects[2],
    }
}

fn draw_hints(f: &mut Frame, area: Rect) {
    let para = Paragraph::new(Span::styled(
        " q quit | click a header or d/r/n to sort | Tab focus slider | \u{2191}/\u{2193} pick handle | \u{2190}/\u{2192} move",
        theme::muted(),
    ));
    f.render_widget(para, area);
}
