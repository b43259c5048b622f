//! HTTP integration
//!
//! Route guards that put actix-web handlers behind a permission check.

pub mod middleware;
