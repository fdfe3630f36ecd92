//! Dashboard analytics: performance distribution, cash flow and volume.

pub mod cash_flow;
pub mod distribution;
pub mod volume;

mod analytics_model;
mod analytics_service;
mod analytics_traits;

pub use analytics_model::*;
pub use analytics_service::*;
pub use analytics_traits::*;

pub use cash_flow::*;
pub use distribution::*;
pub use volume::*;
