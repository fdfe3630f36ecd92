//! Deposit/withdrawal cash-flow totals over server-side period buckets.

mod cash_flow_model;
mod cash_flow_service;

pub use cash_flow_model::*;
pub use cash_flow_service::*;
