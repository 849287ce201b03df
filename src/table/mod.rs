//! Pure widget state: sorting, range filtering and cell formatting.
//!
//! Nothing here touches the terminal or the network. The [`FinancialTable`]
//! owns the dataset and the control state; the TUI layer reads derived views
//! out of it and feeds user intents back in.

mod filter;
mod sort;
mod state;

pub mod format;

pub use filter::{
    MONEY_STEP, NET_INCOME_BOUNDS, REVENUE_BOUNDS, RangeControl, YEAR_BOUNDS, YEAR_STEP,
};
pub use sort::{SortDirection, SortKey, SortState};
pub use state::{FinancialTable, LOAD_ERROR_MESSAGE};
