use std::cmp::Ordering;

use crate::statements::IncomePeriod;

/// Columns the table can be ordered by. The remaining columns are display
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Revenue,
    NetIncome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// The active ordering selection: which column, and which way.
///
/// Defaults to no column, so a fresh table shows rows in the order the API
/// returned them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    /// Applies a header selection. Re-selecting the column that is already
    /// sorted ascending flips it to descending; every other selection sorts
    /// the chosen column ascending.
    pub fn select(&mut self, key: SortKey) {
        self.direction = if self.key == Some(key) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.key = Some(key);
    }

    /// Comparator for the current selection. With no column selected every
    /// pair compares equal, which leaves a stable sort untouched.
    pub(crate) fn compare(&self, a: &IncomePeriod, b: &IncomePeriod) -> Ordering {
        let Some(key) = self.key else {
            return Ordering::Equal;
        };

        let ord = match key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Revenue => a.revenue.cmp(&b.revenue),
            SortKey::NetIncome => a.net_income.cmp(&b.net_income),
        };

        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}
