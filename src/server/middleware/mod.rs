//! HTTP middleware implementations
//!
//! - Permission route guard ([`RequirePermission`])
//! - Helpers for reading the caller and resource out of a request

mod helpers;
mod permission;


pub use helpers::{access_context_from_path, authenticated_user, forbidden_response};
pub use permission::{
    AuthenticatedUser, RequirePermission, RequirePermissionService, RouteCheck,
};
