//! Centralized constants for default endpoints and UA.

/// Default User-Agent sent with every request.
pub(crate) const USER_AGENT: &str = concat!("quarters-rs/", env!("CARGO_PKG_VERSION"));

/// Human-facing Quarters platform.
pub(crate) const DEFAULT_QUARTERS_URL: &str = "https://pocketfulofquarters.com";

/// Versioned REST API root; every endpoint path is joined onto it.
pub(crate) const DEFAULT_API_URL: &str = "https://api.pocketfulofquarters.com/v1/";
