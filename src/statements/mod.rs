//! The FMP income statement endpoint: request builder, wire parsing, and the
//! typed [`IncomePeriod`] rows the rest of the crate consumes.

mod api;
mod model;
mod wire;

pub use model::{IncomePeriod, Period};

use crate::{FmpClient, FmpError};

/// Fetches the income statement for `symbol` with default settings (annual
/// periods).
///
/// # Errors
///
/// Returns `FmpError` if the network request fails or the response cannot be
/// parsed.
pub async fn income_statement(
    client: &FmpClient,
    symbol: &str,
) -> Result<Vec<IncomePeriod>, FmpError> {
    IncomeStatementBuilder::new(client, symbol).fetch().await
}

/// A builder for income statement requests.
#[derive(Debug)]
pub struct IncomeStatementBuilder {
    client: FmpClient,
    symbol: String,
    period: Period,
}

impl IncomeStatementBuilder {
    /// Creates a new builder for a given ticker symbol.
    pub fn new(client: &FmpClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            period: Period::Annual,
        }
    }

    /// Sets the reporting cadence. Annual by default.
    #[must_use]
    pub const fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails, the API returns a
    /// non-successful status code, or the response body cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(self) -> Result<Vec<IncomePeriod>, FmpError> {
        api::income_statement(&self.client, &self.symbol, self.period).await
    }
}
