//! Client-side session and role-authorization core.
//!
//! Decodes the bearer token payload, persists and restores the session
//! pair in tab-scoped storage, and owns the authoritative auth state
//! machine the UI guards observe. No UI dependency; everything here is
//! unit-testable natively.

pub mod api;
pub mod errors;
pub mod manager;
pub mod store;
pub mod token;

pub use api::*;
pub use errors::*;
pub use manager::*;
pub use store::*;
pub use token::*;
