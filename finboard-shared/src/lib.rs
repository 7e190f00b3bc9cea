//! # Finboard Shared Library
//!
//! This crate contains the data-access layer and shared types used by
//! the Finboard API server.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and migrations
//! - `models`: Database models and their access contracts
//! - `auth`: Credential verification and password hashing
//! - `money`: Cents/dollars conversion and currency formatting
//! - `pagination`: Fixed page size, offset math, page-count ceiling
//! - `views`: Cache-invalidation and navigation signals for mutations

pub mod auth;
pub mod db;
pub mod models;
pub mod money;
pub mod pagination;
pub mod views;

/// Current version of the Finboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
