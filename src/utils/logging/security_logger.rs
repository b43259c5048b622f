//! Security-aware logging utilities

use crate::auth::permissions::AccessContext;
use crate::utils::error::PermissionError;
use tracing::{debug, info, warn};

/// Structured logging of authorization decisions, target `security`
pub struct SecurityLogger;

impl SecurityLogger {
    /// Log the outcome of a permission check.
    ///
    /// Grants are logged at DEBUG, denials at INFO.
    pub fn log_authz_decision(
        user_id: &str,
        permission: &str,
        context: Option<&AccessContext>,
        granted: bool,
        reason: Option<&str>,
    ) {
        let (wing_id, squadron_id, pilot_id, debrief_id) = context_fields(context);

        if granted {
            debug!(
                target: "security",
                user_id,
                permission,
                wing_id,
                squadron_id,
                pilot_id,
                debrief_id,
                reason = reason.unwrap_or("scope match"),
                "Authorization granted"
            );
        } else {
            info!(
                target: "security",
                user_id,
                permission,
                wing_id,
                squadron_id,
                pilot_id,
                debrief_id,
                reason = reason.unwrap_or("no matching grant"),
                "Authorization denied"
            );
        }
    }

    /// Log a check that failed closed because of an evaluation error
    pub fn log_authz_failure(
        user_id: &str,
        permission: &str,
        context: Option<&AccessContext>,
        error: &PermissionError,
    ) {
        let (wing_id, squadron_id, pilot_id, debrief_id) = context_fields(context);

        warn!(
            target: "security",
            user_id,
            permission,
            wing_id,
            squadron_id,
            pilot_id,
            debrief_id,
            kind = error.kind(),
            error = %error,
            "Authorization denied after evaluation failure"
        );
    }
}

fn context_fields(
    context: Option<&AccessContext>,
) -> (Option<&str>, Option<&str>, Option<&str>, Option<&str>) {
    match context {
        Some(ctx) => (
            ctx.wing_id.as_deref(),
            ctx.squadron_id.as_deref(),
            ctx.pilot_id.as_deref(),
            ctx.debrief_id.as_deref(),
        ),
        None => (None, None, None, None),
    }
}
