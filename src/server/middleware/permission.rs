//! Permission route guard

use crate::auth::permissions::names;
use crate::auth::resolver::PermissionResolver;
use crate::server::middleware::helpers::{
    DEBRIEF_SEGMENT, access_context_from_path, authenticated_user, forbidden_response,
};
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures::future::{Ready, ready};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;
use tracing::debug;

/// Caller identity placed in the request extensions by the authentication
/// layer in front of the guard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: String,
    /// Pilot record of the user, needed for debrief delegations
    pub pilot_id: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            pilot_id: None,
        }
    }

    pub fn with_pilot(mut self, pilot_id: impl Into<String>) -> Self {
        self.pilot_id = Some(pilot_id.into());
        self
    }
}

/// What a guarded route requires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteCheck {
    /// A named permission evaluated against the path's access context.
    ///
    /// `edit_debriefs` on a route with a `debrief_id` segment is evaluated as
    /// [`RouteCheck::DebriefEdit`], so the finalized lock and the debrief's
    /// owning unit apply instead of the path's wing and squadron.
    Permission(String),
    /// Edit access to the debrief named by the `debrief_id` path segment
    DebriefEdit,
}

/// Route guard for Actix-web.
///
/// Denied and unauthenticated requests get `403 Forbidden` with a fixed body;
/// the wrapped service is never called for them.
pub struct RequirePermission {
    resolver: Arc<PermissionResolver>,
    check: RouteCheck,
}

impl RequirePermission {
    /// Require a named permission
    pub fn new(resolver: Arc<PermissionResolver>, permission: impl Into<String>) -> Self {
        Self {
            resolver,
            check: RouteCheck::Permission(permission.into()),
        }
    }

    /// Require edit access to the debrief in the path
    pub fn debrief_edit(resolver: Arc<PermissionResolver>) -> Self {
        Self {
            resolver,
            check: RouteCheck::DebriefEdit,
        }
    }

    pub fn check(&self) -> &RouteCheck {
        &self.check
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequirePermission
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequirePermissionService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequirePermissionService {
            service: Rc::new(service),
            resolver: Arc::clone(&self.resolver),
            check: self.check.clone(),
        }))
    }
}

/// Service implementation for the permission guard
pub struct RequirePermissionService<S> {
    service: Rc<S>,
    resolver: Arc<PermissionResolver>,
    check: RouteCheck,
}

impl<S, B> Service<ServiceRequest> for RequirePermissionService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let resolver = Arc::clone(&self.resolver);
        let check = self.check.clone();

        Box::pin(async move {
            let Some(user) = authenticated_user(&req) else {
                debug!("Rejecting unauthenticated request to {}", req.path());
                return Ok(req
                    .into_response(forbidden_response())
                    .map_into_right_body());
            };

            let debrief_id = req.match_info().get(DEBRIEF_SEGMENT);
            let granted = match (&check, debrief_id) {
                (RouteCheck::Permission(permission), Some(debrief_id))
                    if permission == names::EDIT_DEBRIEFS =>
                {
                    resolver
                        .can_edit_debrief(&user.user_id, debrief_id, user.pilot_id.as_deref())
                        .await
                }
                (RouteCheck::Permission(permission), _) => {
                    let context = access_context_from_path(&req, user.pilot_id.as_deref());
                    resolver
                        .has_permission(&user.user_id, permission, context.as_ref())
                        .await
                }
                (RouteCheck::DebriefEdit, Some(debrief_id)) => {
                    resolver
                        .can_edit_debrief(&user.user_id, debrief_id, user.pilot_id.as_deref())
                        .await
                }
                (RouteCheck::DebriefEdit, None) => {
                    debug!("Debrief edit guard on a route without {}", DEBRIEF_SEGMENT);
                    false
                }
            };

            if granted {
                service
                    .call(req)
                    .await
                    .map(ServiceResponse::map_into_left_body)
            } else {
                Ok(req
                    .into_response(forbidden_response())
                    .map_into_right_body())
            }
        })
    }
}
