use crate::{
    statements::IncomePeriod,
    table::{
        filter::{
            MONEY_STEP, NET_INCOME_BOUNDS, REVENUE_BOUNDS, RangeControl, YEAR_BOUNDS, YEAR_STEP,
        },
        sort::{SortKey, SortState},
    },
};

/// Message shown in place of the table when the startup fetch fails.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to fetch data.";

/// The whole widget state: the loaded dataset, the ordering selection, the
/// three range filters and the load failure flag.
///
/// The stored dataset keeps the order the API returned; the rows currently
/// on screen are derived on demand by [`Self::visible`], so changing the sort
/// or a filter never loses data.
#[derive(Debug, Clone)]
pub struct FinancialTable {
    rows: Vec<IncomePeriod>,
    sort: SortState,
    year_range: RangeControl,
    revenue_range: RangeControl,
    net_income_range: RangeControl,
    error: Option<&'static str>,
}

impl Default for FinancialTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FinancialTable {
    /// Creates an empty table with all three range selections fully open and
    /// no sort column active.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            sort: SortState::default(),
            year_range: RangeControl::new(YEAR_BOUNDS, YEAR_STEP),
            revenue_range: RangeControl::new(REVENUE_BOUNDS, MONEY_STEP),
            net_income_range: RangeControl::new(NET_INCOME_BOUNDS, MONEY_STEP),
            error: None,
        }
    }

    /// Replaces the dataset with a freshly loaded one.
    ///
    /// The revenue and net income selections snap back to their full ranges
    /// on every load; the fiscal year selection is left where the user put
    /// it.
    pub fn set_rows(&mut self, rows: Vec<IncomePeriod>) {
        self.rows = rows;
        self.revenue_range.reset();
        self.net_income_range.reset();
    }

    /// Marks the startup fetch as failed. The UI then renders only
    /// [`LOAD_ERROR_MESSAGE`].
    pub fn set_load_error(&mut self) {
        self.error = Some(LOAD_ERROR_MESSAGE);
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// The dataset in source order, unfiltered.
    pub fn rows(&self) -> &[IncomePeriod] {
        &self.rows
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Applies a sortable-header selection (the toggle rule lives on
    /// [`SortState`]).
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort.select(key);
    }

    pub fn year_range(&self) -> &RangeControl {
        &self.year_range
    }

    pub fn year_range_mut(&mut self) -> &mut RangeControl {
        &mut self.year_range
    }

    pub fn revenue_range(&self) -> &RangeControl {
        &self.revenue_range
    }

    pub fn revenue_range_mut(&mut self) -> &mut RangeControl {
        &mut self.revenue_range
    }

    pub fn net_income_range(&self) -> &RangeControl {
        &self.net_income_range
    }

    pub fn net_income_range_mut(&mut self) -> &mut RangeControl {
        &mut self.net_income_range
    }

    /// Derives the rows currently on screen: every stored row that passes
    /// all three range filters, ordered by the active sort selection.
    ///
    /// The sort is stable, so rows that compare equal (and the whole view,
    /// when no column is selected) keep their source order.
    pub fn visible(&self) -> Vec<&IncomePeriod> {
        let mut view: Vec<&IncomePeriod> = self.rows.iter().filter(|r| self.passes(r)).collect();
        view.sort_by(|a, b| self.sort.compare(a, b));
        view
    }

    fn passes(&self, row: &IncomePeriod) -> bool {
        self.year_range.contains(i64::from(row.fiscal_year()))
            && self.revenue_range.contains(row.revenue)
            && self.net_income_range.contains(row.net_income)
    }
}
