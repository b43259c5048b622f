//! Session context and gate integration tests

#[cfg(test)]
mod tests {
    use crate::common::OrgChart;
    use readyroom::{
        AccessContext, GateRender, GateState, Gated, PendingCheck, PermissionContext,
        PermissionGate, PermissionSet, names,
    };
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    struct MenuItem {
        label: &'static str,
        enabled: bool,
        hint: Option<String>,
    }

    impl MenuItem {
        fn new(label: &'static str) -> Self {
            Self {
                label,
                enabled: true,
                hint: None,
            }
        }
    }

    impl Gated for MenuItem {
        fn disabled(mut self) -> Self {
            self.enabled = false;
            self
        }

        fn with_tooltip(mut self, message: &str) -> Self {
            self.hint = Some(message.to_string());
            self
        }
    }

    #[tokio::test]
    async fn test_context_starts_loading_and_resolves_on_refresh() {
        let chart = OrgChart::seeded();
        let session = PermissionContext::new("sq-staff", chart.resolver());
        let context = AccessContext::new().squadron("sq-1");

        assert!(!session.is_loaded());
        assert_eq!(
            session.state(names::MANAGE_ROSTER, Some(&context)),
            GateState::Loading
        );

        assert!(session.refresh().await);
        assert_eq!(
            session.state(names::MANAGE_ROSTER, Some(&context)),
            GateState::Allowed
        );
        assert_eq!(
            session.state(names::MANAGE_ROSTER, Some(&AccessContext::new().squadron("sq-2"))),
            GateState::Denied
        );
    }

    #[tokio::test]
    async fn test_refresh_replaces_set_wholesale() {
        let chart = OrgChart::seeded();
        let session = PermissionContext::login("sq-staff", chart.resolver()).await;
        let before = session.snapshot().unwrap();
        assert!(before.contains(names::EDIT_DEBRIEFS));

        chart.sources.set_permissions(
            "sq-staff",
            PermissionSet::new().with(names::VIEW_PTR_GRID, true),
        );
        session.refresh().await;

        let after = session.snapshot().unwrap();
        assert!(!after.contains(names::EDIT_DEBRIEFS));
        assert!(after.contains(names::VIEW_PTR_GRID));
        // Earlier snapshots are untouched
        assert!(before.contains(names::EDIT_DEBRIEFS));
    }

    #[tokio::test]
    async fn test_clear_returns_to_loading() {
        let chart = OrgChart::seeded();
        let session = PermissionContext::login("admin", chart.resolver()).await;
        assert_eq!(
            session.state(names::ACCESS_ADMIN_TOOLS, None),
            GateState::Allowed
        );

        session.clear();
        assert_eq!(
            session.state(names::ACCESS_ADMIN_TOOLS, None),
            GateState::Loading
        );
        assert!(session.get(names::ACCESS_ADMIN_TOOLS).is_none());
    }

    #[tokio::test]
    async fn test_gate_renders_from_session_state() {
        let chart = OrgChart::seeded();
        let session = PermissionContext::login("sq-staff", chart.resolver()).await;

        let state = session.state(names::ACCESS_ADMIN_TOOLS, None);
        let rendered = PermissionGate::tooltip("Admin tools need staff access")
            .render(state, MenuItem::new("Admin"));
        assert_eq!(
            rendered,
            GateRender::Child(MenuItem {
                label: "Admin",
                enabled: false,
                hint: Some("Admin tools need staff access".to_string()),
            })
        );

        let state = session.state(names::MANAGE_ROSTER, Some(&AccessContext::new().squadron("sq-1")));
        let rendered = PermissionGate::hide().render(state, MenuItem::new("Roster"));
        assert_eq!(rendered, GateRender::Child(MenuItem::new("Roster")));
    }

    #[tokio::test]
    async fn test_pending_check_drives_gate() {
        let chart = OrgChart::seeded();
        chart.sources.delegate("D1", "P7");

        let mut check =
            PendingCheck::spawn_debrief_edit(chart.resolver(), "pilot", "D1", Some("P7".to_string()));
        let state = tokio::time::timeout(Duration::from_secs(5), check.resolved())
            .await
            .unwrap();

        let rendered = PermissionGate::disable().render(state, MenuItem::new("Edit debrief"));
        assert_eq!(rendered, GateRender::Child(MenuItem::new("Edit debrief")));
    }
}
