/// Default (and absolute) fiscal year bounds.
pub const YEAR_BOUNDS: (i64, i64) = (2020, 2025);
pub const YEAR_STEP: i64 = 1;

/// Default (and absolute) revenue bounds, in whole currency units.
pub const REVENUE_BOUNDS: (i64, i64) = (1_000_000, 90_000_000_000_000);

/// Default (and absolute) net income bounds, in whole currency units.
pub const NET_INCOME_BOUNDS: (i64, i64) = (1_000_000, 900_000_000_000);

/// Step shared by both money controls.
pub const MONEY_STEP: i64 = 1_000_000;

/// One user-adjustable inclusive `[min, max]` selection over a table
/// dimension.
///
/// The control knows its absolute bounds and step, but the stored selection
/// is whatever the UI last emitted, kept verbatim without re-clamping or
/// re-ordering. A selection with `min > max` simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeControl {
    bounds: (i64, i64),
    step: i64,
    selected: (i64, i64),
}

impl RangeControl {
    /// Creates a control spanning `bounds`, initially fully open.
    pub const fn new(bounds: (i64, i64), step: i64) -> Self {
        Self {
            bounds,
            step,
            selected: bounds,
        }
    }

    /// Absolute `(low, high)` bounds of the control.
    pub const fn bounds(&self) -> (i64, i64) {
        self.bounds
    }

    pub const fn step(&self) -> i64 {
        self.step
    }

    /// The current `(min, max)` selection.
    pub const fn selected(&self) -> (i64, i64) {
        self.selected
    }

    pub const fn min(&self) -> i64 {
        self.selected.0
    }

    pub const fn max(&self) -> i64 {
        self.selected.1
    }

    /// Stores the pair emitted by the UI control verbatim.
    pub fn set_selected(&mut self, min: i64, max: i64) {
        self.selected = (min, max);
    }

    /// Snaps the selection back to the full absolute range.
    pub fn reset(&mut self) {
        self.selected = self.bounds;
    }

    /// Inclusive membership test against the current selection.
    pub fn contains(&self, value: i64) -> bool {
        self.selected.0 <= value && value <= self.selected.1
    }
}
