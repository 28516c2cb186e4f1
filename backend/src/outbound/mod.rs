//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and the storefront
//! backend's JSON-over-HTTP API. They contain no business logic.

pub mod storefront_api;
