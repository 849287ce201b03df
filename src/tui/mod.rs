//! Terminal front-end: event handling, layout and rendering.

pub mod app;
pub mod render;
pub mod theme;

pub use app::{App, FetchOutcome, TICKER};
