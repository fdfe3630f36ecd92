//! Traded-volume totals and the top-asset ranking.

mod volume_model;
mod volume_service;

#[cfg(test)]
mod volume_service_tests;

pub use volume_model::*;
pub use volume_service::*;
