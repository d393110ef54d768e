//! HTTP Middleware
//! Mission: Cross-cutting request plumbing outside the auth guard chain

pub mod logging;

pub use logging::request_logging;
