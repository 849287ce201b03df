use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::{
    core::FmpError,
    statements::IncomePeriod,
    table::{FinancialTable, RangeControl, SortKey},
};

/// The ticker the viewer is pinned to.
pub const TICKER: &str = "AAPL";

/// Keyboard slider granularity: one arrow keypress moves a handle by the
/// control's span divided by this many notches (never finer than its step).
const SLIDER_NOTCHES: i64 = 60;

/// Outcome of the startup fetch, delivered from the fetch task to the event
/// loop.
pub type FetchOutcome = Result<Vec<IncomePeriod>, FmpError>;

/// Which range control currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Year,
    Revenue,
    NetIncome,
}

impl Focus {
    const fn next(self) -> Self {
        match self {
            Self::Year => Self::Revenue,
            Self::Revenue => Self::NetIncome,
            Self::NetIncome => Self::Year,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Year => Self::NetIncome,
            Self::Revenue => Self::Year,
            Self::NetIncome => Self::Revenue,
        }
    }
}

/// Which of the two slider handles the arrow keys move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Lower,
    Upper,
}

/// Tracks clickable UI regions for mouse interaction. Rebuilt on every draw.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClickableRegions {
    pub date_header: Rect,
    pub revenue_header: Rect,
    pub net_income_header: Rect,
}

/// Top-level interactive state: the widget itself plus UI-only concerns
/// (focus, click regions, the quit flag).
#[derive(Debug)]
pub struct App {
    pub table: FinancialTable,
    pub focus: Focus,
    pub handle: Handle,
    pub regions: ClickableRegions,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            table: FinancialTable::new(),
            focus: Focus::Year,
            handle: Handle::Lower,
            regions: ClickableRegions::default(),
            should_quit: false,
        }
    }

    /// Applies the startup fetch outcome to the widget state.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(rows) => self.table.set_rows(rows),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_e, "income statement fetch failed");
                self.table.set_load_error();
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            // The failed view has no table or controls to drive.
            _ if self.table.error().is_some() => {}
            KeyCode::Char('d') => self.table.sort_by(SortKey::Date),
            KeyCode::Char('r') => self.table.sort_by(SortKey::Revenue),
            KeyCode::Char('n') => self.table.sort_by(SortKey::NetIncome),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Down => self.handle = Handle::Lower,
            KeyCode::Up => self.handle = Handle::Upper,
            KeyCode::Left => self.nudge(-1),
            KeyCode::Right => self.nudge(1),
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        // Only handle left clicks
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        if self.table.error().is_some() {
            return;
        }

        let (x, y) = (mouse.column, mouse.row);
        if point_in_rect(x, y, self.regions.date_header) {
            self.table.sort_by(SortKey::Date);
        } else if point_in_rect(x, y, self.regions.revenue_header) {
            self.table.sort_by(SortKey::Revenue);
        } else if point_in_rect(x, y, self.regions.net_income_header) {
            self.table.sort_by(SortKey::NetIncome);
        }
    }

    /// Moves the active handle of the focused control one notch left or
    /// right.
    fn nudge(&mut self, direction: i64) {
        let handle = self.handle;
        let control = match self.focus {
            Focus::Year => self.table.year_range_mut(),
            Focus::Revenue => self.table.revenue_range_mut(),
            Focus::NetIncome => self.table.net_income_range_mut(),
        };
        let (min, max) = slide(control, handle, direction);
        control.set_selected(min, max);
    }
}

/// Computes the next `(min, max)` selection after moving `handle` one notch.
///
/// Handles clamp to the control's absolute bounds and cannot cross each
/// other. The notch is snapped to a whole multiple of the control's step.
fn slide(control: &RangeControl, handle: Handle, direction: i64) -> (i64, i64) {
    let (lo, hi) = control.bounds();
    let step = control.step();
    let notch = ((hi - lo) / SLIDER_NOTCHES).max(step) / step * step;

    let (mut min, mut max) = control.selected();
    match handle {
        Handle::Lower => min = (min + direction * notch).clamp(lo, max),
        Handle::Upper => max = (max + direction * notch).clamp(min, hi),
    }
    (min, max)
}

/// Check if a point (x, y) is inside a Rect
fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
