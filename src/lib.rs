//! poemario - a poem-collection CRUD service with a shared-secret write gate
//!
//! Public reads, secret-gated writes, offset pagination over one collection.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod constants;
pub mod observability;
pub mod store;
