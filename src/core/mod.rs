//! Core components of the `quarters-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`QuartersClient`] and its builder.
//! - The primary [`QuartersError`] type.
//! - The [`Transport`] seam and its default `reqwest` implementation.
//! - Amount coercion shared by the transfer endpoints.

/// The main client (`QuartersClient`), builder, and resolved configuration.
pub mod client;
/// Caller-supplied quantities and their integer coercion.
pub mod conversions;
/// The primary error type (`QuartersError`) for the crate.
pub mod error;
pub(crate) mod models;
/// The HTTP transport abstraction.
pub mod net;

// convenient re-exports so most code can just `use crate::core::QuartersClient`
pub use client::{ClientConfig, QuartersClient, QuartersClientBuilder};
pub use conversions::Quantity;
pub use error::{ConfigField, QuartersError};
pub use net::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
