//! Authentication Module
//! Mission: Token issuance, verification, and the admin role gate

pub mod jwt;
pub mod middleware;
pub mod models;

pub use jwt::JwtHandler;
pub use middleware::{auth_middleware, require_admin};
pub use models::Claims;
