//! HTTP inbound adapter exposing the course detail endpoints.

pub mod cache_control;
pub mod courses;
pub mod error;
pub mod health;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
