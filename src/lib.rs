//! fintab: terminal income statement viewer.
//!
//! Fetches a company's income statement from the FinancialModelingPrep API
//! once at startup, then renders it as a sortable table with range filters
//! for fiscal year, revenue and net income.
//!
//! The crate is layered so everything below the terminal is testable on its
//! own:
//! - [`core`]: the HTTP client, its builder, and the error type.
//! - [`statements`]: the income statement endpoint (wire parsing + models).
//! - [`table`]: pure widget state (sorting, filtering, formatting).
//! - [`tui`]: the ratatui front-end driven by the binary.

pub mod core;
pub mod statements;
pub mod table;
pub mod tui;

pub use crate::core::{FmpClient, FmpClientBuilder, FmpError};
pub use statements::{IncomePeriod, IncomeStatementBuilder, Period};
pub use table::{FinancialTable, RangeControl, SortDirection, SortKey, SortState};
