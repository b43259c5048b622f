//! Resolver core: session cache and permission checks

use crate::auth::permissions::{
    AccessContext, PermissionGrant, PermissionSet, PermissionValue, ScopeMatcher, names,
};
use crate::auth::sources::PermissionSources;
use crate::config::PermissionsConfig;
use crate::utils::error::{PermissionError, ReadyroomError, Result};
use crate::utils::logging::SecurityLogger;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// A user's permission set as cached for the session
#[derive(Debug, Clone)]
struct CachedPermissions {
    set: Arc<PermissionSet>,
    loaded_at: Instant,
}

/// Resolves permission checks against injected grant, delegation and debrief sources
pub struct PermissionResolver {
    /// Resolver configuration
    config: PermissionsConfig,
    /// Injected data sources
    pub(super) sources: PermissionSources,
    /// Permission sets by user id; entries are only ever replaced whole
    sessions: DashMap<String, CachedPermissions>,
}

impl PermissionResolver {
    /// Create a new resolver
    pub fn new(config: &PermissionsConfig, sources: PermissionSources) -> Self {
        info!(
            "Initializing permission resolver (session ttl: {:?}, max sessions: {})",
            config.session_ttl(),
            config.max_sessions
        );

        Self {
            config: config.clone(),
            sources,
            sessions: DashMap::new(),
        }
    }

    /// Check a permission for a user.
    ///
    /// Never fails: unknown permissions, missing context and source errors all
    /// evaluate to `false` and are logged.
    pub async fn has_permission(
        &self,
        user_id: &str,
        permission: &str,
        context: Option<&AccessContext>,
    ) -> bool {
        match self.check_permission(user_id, permission, context).await {
            Ok(Some(reason)) => {
                SecurityLogger::log_authz_decision(user_id, permission, context, true, Some(reason));
                true
            }
            Ok(None) => {
                SecurityLogger::log_authz_decision(user_id, permission, context, false, None);
                false
            }
            Err(e) => {
                SecurityLogger::log_authz_failure(user_id, permission, context, &e);
                false
            }
        }
    }

    /// True if the user holds at least one of the permissions
    pub async fn has_any_permission(
        &self,
        user_id: &str,
        permissions: &[&str],
        context: Option<&AccessContext>,
    ) -> bool {
        for permission in permissions {
            if self.has_permission(user_id, permission, context).await {
                return true;
            }
        }
        false
    }

    /// True if the user holds every one of the permissions
    pub async fn has_all_permissions(
        &self,
        user_id: &str,
        permissions: &[&str],
        context: Option<&AccessContext>,
    ) -> bool {
        for permission in permissions {
            if !self.has_permission(user_id, permission, context).await {
                return false;
            }
        }
        !permissions.is_empty()
    }

    /// Evaluate one check. `Ok(Some(reason))` grants, `Ok(None)` denies.
    async fn check_permission(
        &self,
        user_id: &str,
        permission: &str,
        context: Option<&AccessContext>,
    ) -> std::result::Result<Option<&'static str>, PermissionError> {
        let set = self
            .permission_set(user_id)
            .await
            .map_err(ReadyroomError::into_permission_error)?;

        let value = set
            .get(permission)
            .ok_or_else(|| PermissionError::UnknownPermission(permission.to_string()))?;

        if ScopeMatcher::evaluate(value, context) {
            return Ok(Some("scope match"));
        }

        if permission == names::EDIT_DEBRIEFS && self.has_delegation(value, context).await? {
            return Ok(Some("debrief delegation"));
        }

        match ScopeMatcher::diagnose(permission, value, context) {
            Some(e) => Err(e),
            None => Ok(None),
        }
    }

    /// Look for a live delegation of the context's debrief to the context's pilot.
    ///
    /// The context pilot must be named by one of the user's flight grants, so
    /// a caller cannot borrow another pilot's delegation. Revocation is read
    /// from the source on every call.
    async fn has_delegation(
        &self,
        value: &PermissionValue,
        context: Option<&AccessContext>,
    ) -> std::result::Result<bool, PermissionError> {
        let Some((debrief_id, pilot_id)) =
            context.and_then(|c| Some((c.debrief_id.as_deref()?, c.pilot_id.as_deref()?)))
        else {
            return Ok(false);
        };

        let PermissionValue::Scoped(grants) = value else {
            return Ok(false);
        };
        let holds_flight = grants.iter().any(|grant| match grant {
            PermissionGrant::ScopedToFlight { pilot_id: granted } => granted == pilot_id,
            _ => false,
        });
        if !holds_flight {
            debug!("No flight grant for pilot {} on debrief {}", pilot_id, debrief_id);
            return Ok(false);
        }

        let record = self
            .sources
            .delegations
            .find_active_delegation(debrief_id, pilot_id)
            .await
            .map_err(ReadyroomError::into_permission_error)?;

        Ok(record.is_some_and(|r| {
            !r.revoked && r.debrief_id == debrief_id && r.delegated_to_pilot_id == pilot_id
        }))
    }

    /// The user's permission set, loading it on first use
    pub async fn permission_set(&self, user_id: &str) -> Result<Arc<PermissionSet>> {
        if let Some(set) = self.cached(user_id) {
            return Ok(set);
        }
        self.reload(user_id).await
    }

    /// Start a session: always load a fresh set and replace any cached one.
    ///
    /// If the load fails the cached set is dropped as well.
    pub async fn login(&self, user_id: &str) -> Result<Arc<PermissionSet>> {
        info!("Loading permissions for user {} on login", user_id);
        self.reload(user_id).await
    }

    /// Drop the cached set so the next check reloads it (role change)
    pub fn invalidate(&self, user_id: &str) {
        if self.sessions.remove(user_id).is_some() {
            debug!("Invalidated permission set for user {}", user_id);
        }
    }

    /// End a session
    pub fn logout(&self, user_id: &str) {
        self.invalidate(user_id);
    }

    /// Drop every cached set
    pub fn invalidate_all(&self) {
        self.sessions.clear();
        debug!("Invalidated all cached permission sets");
    }

    /// Number of users with a cached permission set
    pub fn cached_sessions(&self) -> usize {
        self.sessions.len()
    }

    fn cached(&self, user_id: &str) -> Option<Arc<PermissionSet>> {
        let entry = self.sessions.get(user_id)?;
        match self.config.session_ttl() {
            Some(ttl) if entry.loaded_at.elapsed() >= ttl => {
                debug!("Cached permission set for user {} expired", user_id);
                None
            }
            _ => Some(Arc::clone(&entry.set)),
        }
    }

    async fn reload(&self, user_id: &str) -> Result<Arc<PermissionSet>> {
        let set = match self.sources.grants.load_permission_set(user_id).await {
            Ok(set) => Arc::new(set),
            Err(e) => {
                // stale grants never outlive a failed load
                if self.sessions.remove(user_id).is_some() {
                    debug!(
                        "Dropped cached permission set for user {} after failed load",
                        user_id
                    );
                }
                return Err(e);
            }
        };

        if !self.sessions.contains_key(user_id) && self.sessions.len() >= self.config.max_sessions {
            self.evict_oldest();
        }

        self.sessions.insert(
            user_id.to_string(),
            CachedPermissions {
                set: Arc::clone(&set),
                loaded_at: Instant::now(),
            },
        );

        debug!(
            "Loaded {} permissions for user {}",
            set.len(),
            user_id
        );
        Ok(set)
    }

    fn evict_oldest(&self) {
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|entry| entry.loaded_at)
            .map(|entry| entry.key().clone());

        if let Some(user_id) = oldest {
            self.sessions.remove(&user_id);
            debug!("Evicted cached permission set for user {}", user_id);
        }
    }
}
