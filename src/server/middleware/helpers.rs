//! Helper functions for middleware

use super::permission::AuthenticatedUser;
use crate::auth::permissions::AccessContext;
use actix_web::dev::ServiceRequest;
use actix_web::{HttpMessage, HttpResponse};
use serde_json::json;

/// Path segments that describe the resource being accessed
const WING_SEGMENT: &str = "wing_id";
const SQUADRON_SEGMENT: &str = "squadron_id";
pub(super) const DEBRIEF_SEGMENT: &str = "debrief_id";

/// Authenticated caller stored in the request extensions, if any
pub fn authenticated_user(req: &ServiceRequest) -> Option<AuthenticatedUser> {
    req.extensions().get::<AuthenticatedUser>().cloned()
}

/// Build the access context of a request from its matched path segments.
///
/// The pilot identity always comes from the caller, never from the path, so a
/// route cannot be used to claim somebody else's delegation. Returns `None`
/// when the request names no resource at all.
pub fn access_context_from_path(
    req: &ServiceRequest,
    pilot_id: Option<&str>,
) -> Option<AccessContext> {
    let segment = |name: &str| req.match_info().get(name).map(str::to_string);

    let context = AccessContext {
        wing_id: segment(WING_SEGMENT),
        squadron_id: segment(SQUADRON_SEGMENT),
        pilot_id: pilot_id.map(str::to_string),
        debrief_id: segment(DEBRIEF_SEGMENT),
    };

    if context == AccessContext::default() {
        None
    } else {
        Some(context)
    }
}

/// Fixed response for every denied request. Never carries error details.
pub fn forbidden_response() -> HttpResponse {
    HttpResponse::Forbidden().json(json!({ "error": "forbidden" }))
}
