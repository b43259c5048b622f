//! Debrief edit checks

use crate::auth::permissions::{DebriefStatus, names};
use crate::utils::logging::SecurityLogger;

use super::system::PermissionResolver;

impl PermissionResolver {
    /// Whether the user may edit a debrief.
    ///
    /// A finalized debrief is locked for everyone, global grants included; the
    /// lock is checked before any permission lookup. For a draft the debrief's
    /// owning wing and squadron form the access context, so scope grants and
    /// the delegation fallback for `pilot_id` both apply.
    pub async fn can_edit_debrief(
        &self,
        user_id: &str,
        debrief_id: &str,
        pilot_id: Option<&str>,
    ) -> bool {
        let record = match self.sources.debriefs.debrief_status(debrief_id).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                SecurityLogger::log_authz_decision(
                    user_id,
                    names::EDIT_DEBRIEFS,
                    None,
                    false,
                    Some("debrief not found"),
                );
                return false;
            }
            Err(e) => {
                let error = e.into_permission_error();
                SecurityLogger::log_authz_failure(user_id, names::EDIT_DEBRIEFS, None, &error);
                return false;
            }
        };

        let context = record.access_context(pilot_id);

        if record.status == DebriefStatus::Finalized {
            SecurityLogger::log_authz_decision(
                user_id,
                names::EDIT_DEBRIEFS,
                Some(&context),
                false,
                Some("debrief finalized"),
            );
            return false;
        }

        self.has_permission(user_id, names::EDIT_DEBRIEFS, Some(&context))
            .await
    }
}
