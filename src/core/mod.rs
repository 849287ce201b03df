//! Core components of the `fintab` client.
//!
//! This module contains the foundational building blocks of the crate, including:
//! - The main [`FmpClient`] and its builder.
//! - The primary [`FmpError`] type.
//! - Internal networking helpers.

/// The main client (`FmpClient`), builder, and configuration.
pub mod client;
/// The primary error type (`FmpError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::FmpClient`
pub use client::{FmpClient, FmpClientBuilder};
pub use error::FmpError;
