//! Upstream gateway abstraction and its HTTP implementation.
//!
//! The service layer only sees the [`UpstreamGateway`] trait, so tests can
//! substitute an in-memory gateway for [`HttpGateway`].

mod http;
mod traits;

pub use http::HttpGateway;
pub use traits::UpstreamGateway;
