//! Centralized constants for default endpoints, credentials and UA.

pub(crate) const USER_AGENT: &str = concat!("fintab/", env!("CARGO_PKG_VERSION"));

/// FMP v3 API base (endpoint path and symbol are appended).
pub(crate) const DEFAULT_BASE_API: &str = "https://financialmodelingprep.com/api/v3/";

/// Built-in demo API key, sent as the `apikey` query parameter on every
/// request unless the builder supplies a different one.
pub(crate) const DEFAULT_API_KEY: &str = "HOBqSMuSkKtZTw303eWwkNAkX1MobSOc";
