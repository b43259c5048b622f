//! Asynchronous checks bound to a consumer's lifetime

use crate::auth::permissions::AccessContext;
use crate::auth::resolver::PermissionResolver;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use super::types::GateState;

/// A permission check running in the background.
///
/// Starts in [`GateState::Loading`]. Cancelling or dropping the handle
/// discards the result: a cancelled check never publishes a state.
pub struct PendingCheck {
    state: watch::Receiver<GateState>,
    cancelled: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl PendingCheck {
    /// Spawn `has_permission` on the current tokio runtime
    pub fn spawn(
        resolver: Arc<PermissionResolver>,
        user_id: impl Into<String>,
        permission: impl Into<String>,
        context: Option<AccessContext>,
    ) -> Self {
        let user_id = user_id.into();
        let permission = permission.into();
        Self::spawn_with(async move {
            resolver
                .has_permission(&user_id, &permission, context.as_ref())
                .await
        })
    }

    /// Spawn `can_edit_debrief` on the current tokio runtime
    pub fn spawn_debrief_edit(
        resolver: Arc<PermissionResolver>,
        user_id: impl Into<String>,
        debrief_id: impl Into<String>,
        pilot_id: Option<String>,
    ) -> Self {
        let user_id = user_id.into();
        let debrief_id = debrief_id.into();
        Self::spawn_with(async move {
            resolver
                .can_edit_debrief(&user_id, &debrief_id, pilot_id.as_deref())
                .await
        })
    }

    fn spawn_with<F>(check: F) -> Self
    where
        F: Future<Output = bool> + Send + 'static,
    {
        let (tx, rx) = watch::channel(GateState::Loading);
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let task = tokio::spawn(async move {
            let state = GateState::from(check.await);
            let published = tx.send_if_modified(|current| {
                if flag.load(Ordering::Acquire) {
                    return false;
                }
                *current = state;
                true
            });
            if !published {
                debug!("Discarded permission check result after cancellation");
            }
        });

        Self {
            state: rx,
            cancelled,
            task,
        }
    }

    /// Latest published state
    pub fn state(&self) -> GateState {
        *self.state.borrow()
    }

    /// Wait for the check to resolve.
    ///
    /// Returns `Loading` if the check was cancelled before it resolved.
    pub async fn resolved(&mut self) -> GateState {
        loop {
            let state = *self.state.borrow_and_update();
            if state.is_resolved() || self.is_cancelled() {
                return state;
            }
            if self.state.changed().await.is_err() {
                return *self.state.borrow();
            }
        }
    }

    /// Stop the check and discard any late result
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.task.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Drop for PendingCheck {
    fn drop(&mut self) {
        self.cancel();
    }
}
