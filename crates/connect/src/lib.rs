//! Walletdesk Connect - HTTP client for the wallet backend API.
//!
//! Implements the core crate's `AnalyticsDataSourceTrait` against the REST
//! endpoints the wallet backend exposes to the dashboard.

mod client;

pub use client::{WalletApiClient, DEFAULT_API_URL};
