//! Performance distribution of client wallets across return ranges.

mod distribution_model;
mod distribution_service;


pub use distribution_model::*;
pub use distribution_service::*;
