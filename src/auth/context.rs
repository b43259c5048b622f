//! Session-side permission context
//!
//! Holds the resolved permission set of the signed-in user. The set is
//! published with a single atomic swap, so readers always see either the old
//! set or the new one in full.

use crate::auth::gate::GateState;
use crate::auth::permissions::{AccessContext, PermissionSet, PermissionValue, ScopeMatcher};
use crate::auth::resolver::PermissionResolver;
use arc_swap::ArcSwapOption;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolved permissions of one session
pub struct PermissionContext {
    user_id: String,
    resolver: Arc<PermissionResolver>,
    current: ArcSwapOption<PermissionSet>,
}

impl PermissionContext {
    /// Create an unresolved context; checks report `Loading` until [`refresh`](Self::refresh)
    pub fn new(user_id: impl Into<String>, resolver: Arc<PermissionResolver>) -> Self {
        Self {
            user_id: user_id.into(),
            resolver,
            current: ArcSwapOption::empty(),
        }
    }

    /// Create a context and load its set, as done on login
    pub async fn login(user_id: impl Into<String>, resolver: Arc<PermissionResolver>) -> Self {
        let context = Self::new(user_id, resolver);
        context.refresh().await;
        context
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Load a fresh set from the resolver and publish it.
    ///
    /// If loading fails an empty set is published instead, so the session
    /// denies everything rather than staying in `Loading` or keeping stale
    /// grants. Returns whether the load succeeded.
    pub async fn refresh(&self) -> bool {
        match self.resolver.login(&self.user_id).await {
            Ok(set) => {
                debug!("Published {} permissions for user {}", set.len(), self.user_id);
                self.current.store(Some(set));
                true
            }
            Err(e) => {
                warn!(
                    "Failed to load permissions for user {}, denying all: {}",
                    self.user_id, e
                );
                self.current.store(Some(Arc::new(PermissionSet::new())));
                false
            }
        }
    }

    /// Forget the set (logout); checks report `Loading` again
    pub fn clear(&self) {
        self.current.store(None);
        self.resolver.logout(&self.user_id);
    }

    pub fn is_loaded(&self) -> bool {
        self.current.load().is_some()
    }

    /// The currently published set, if any
    pub fn snapshot(&self) -> Option<Arc<PermissionSet>> {
        self.current.load_full()
    }

    /// Value of one permission in the published set
    pub fn get(&self, permission: &str) -> Option<PermissionValue> {
        self.current
            .load()
            .as_ref()
            .and_then(|set| set.get(permission).cloned())
    }

    /// Synchronous gate state for a permission.
    ///
    /// Only scope grants are considered; delegation-based access needs a
    /// lookup and goes through [`PendingCheck`](crate::auth::gate::PendingCheck).
    pub fn state(&self, permission: &str, context: Option<&AccessContext>) -> GateState {
        let guard = self.current.load();
        let Some(set) = guard.as_ref() else {
            return GateState::Loading;
        };

        match set.get(permission) {
            Some(value) => GateState::from(ScopeMatcher::evaluate(value, context)),
            None => GateState::Denied,
        }
    }
}
