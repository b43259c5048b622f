//! Test fixtures
//!
//! A small org chart: wing `w-1` with squadrons `sq-1` and `sq-2`, plus the
//! users that appear in the permission scenarios.

use readyroom::config::PermissionsConfig;
use readyroom::{
    DebriefRecord, DebriefStatus, MemorySources, PermissionGrant, PermissionResolver,
    PermissionSet, PermissionSources, names,
};
use std::sync::Arc;

/// Seeded in-memory org chart
pub struct OrgChart {
    pub sources: Arc<MemorySources>,
}

impl OrgChart {
    /// Users:
    /// - `admin`: global access to everything used below
    /// - `wing-staff`: wing-wide roster and event management in `w-1`
    /// - `sq-staff`: roster and debrief editing in `sq-1`
    /// - `pilot`: flight-level debrief editing as pilot `P7`
    /// - `guest`: no permissions
    pub fn seeded() -> Self {
        let sources = Arc::new(MemorySources::new());

        sources.set_permissions(
            "admin",
            PermissionSet::new()
                .with(names::MANAGE_ROSTER, vec![PermissionGrant::Global])
                .with(names::EDIT_DEBRIEFS, vec![PermissionGrant::Global])
                .with(names::FINALIZE_DEBRIEFS, vec![PermissionGrant::Global])
                .with(names::ACCESS_ADMIN_TOOLS, true),
        );
        sources.set_permissions(
            "wing-staff",
            PermissionSet::new()
                .with(names::MANAGE_ROSTER, vec![PermissionGrant::wing("w-1")])
                .with(names::MANAGE_EVENTS, vec![PermissionGrant::wing("w-1")]),
        );
        sources.set_permissions(
            "sq-staff",
            PermissionSet::new()
                .with(names::MANAGE_ROSTER, vec![PermissionGrant::squadron("sq-1")])
                .with(names::EDIT_DEBRIEFS, vec![PermissionGrant::squadron("sq-1")])
                .with(names::ACCESS_ADMIN_TOOLS, false),
        );
        sources.set_permissions(
            "pilot",
            PermissionSet::new()
                .with(names::EDIT_DEBRIEFS, vec![PermissionGrant::flight("P7")]),
        );
        sources.set_permissions("guest", PermissionSet::new());

        for (debrief_id, squadron_id) in [("D1", "sq-1"), ("D2", "sq-2")] {
            sources.upsert_debrief(DebriefRecord {
                debrief_id: debrief_id.to_string(),
                status: DebriefStatus::Draft,
                wing_id: Some("w-1".to_string()),
                squadron_id: Some(squadron_id.to_string()),
            });
        }

        Self { sources }
    }

    pub fn resolver(&self) -> Arc<PermissionResolver> {
        resolver_for(&self.sources)
    }
}

/// Resolver with default configuration over memory sources
pub fn resolver_for(sources: &Arc<MemorySources>) -> Arc<PermissionResolver> {
    Arc::new(PermissionResolver::new(
        &PermissionsConfig::default(),
        PermissionSources::shared(Arc::clone(sources)),
    ))
}
