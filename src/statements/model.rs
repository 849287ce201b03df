use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Reporting cadence for statement requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Annual,
    Quarterly,
}

impl Period {
    /// Value for the `period` query parameter. Annual is the server default
    /// and sends nothing.
    pub(crate) const fn as_query(self) -> Option<&'static str> {
        match self {
            Self::Annual => None,
            Self::Quarterly => Some("quarter"),
        }
    }
}

/// One fiscal period of a company's income statement.
///
/// Values are coerced to native numerics exactly once, when the payload is
/// parsed; sorting and range filtering later compare these fields directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomePeriod {
    /// Period end date, `YYYY-MM-DD` in the source payload.
    pub date: NaiveDate,
    /// Total revenue in whole units of the reported currency.
    pub revenue: i64,
    pub net_income: i64,
    pub gross_profit: i64,
    /// Earnings per share, reported as-is rather than as a currency amount.
    pub eps: f64,
    pub operating_income: i64,
}

impl IncomePeriod {
    /// Fiscal year of the period, i.e. the year component of [`Self::date`].
    pub fn fiscal_year(&self) -> i32 {
        self.date.year()
    }
}
