//! Storefront course detail service.
//!
//! Hexagonal layout: [`domain`] holds the aggregation and page model behind
//! ports, [`outbound`] talks to the storefront backend API, [`inbound`]
//! exposes the HTTP surface.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
