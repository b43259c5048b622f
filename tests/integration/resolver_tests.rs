//! Resolver integration tests
//!
//! Scope decisions for the permission scenarios of the operations console.

#[cfg(test)]
mod tests {
    use crate::common::OrgChart;
    use readyroom::{AccessContext, PermissionGrant, PermissionSet, names};

    fn squadron(id: &str) -> AccessContext {
        AccessContext::new().wing("w-1").squadron(id)
    }

    // ==================== Flags and missing names ====================

    #[tokio::test]
    async fn test_flag_ignores_context() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();

        assert!(
            resolver
                .has_permission("admin", names::ACCESS_ADMIN_TOOLS, None)
                .await
        );
        assert!(
            resolver
                .has_permission("admin", names::ACCESS_ADMIN_TOOLS, Some(&squadron("sq-9")))
                .await
        );
        assert!(
            !resolver
                .has_permission("sq-staff", names::ACCESS_ADMIN_TOOLS, Some(&squadron("sq-1")))
                .await
        );
    }

    #[tokio::test]
    async fn test_missing_permission_denies() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();

        assert!(
            !resolver
                .has_permission("guest", names::MANAGE_ROSTER, Some(&squadron("sq-1")))
                .await
        );
        assert!(
            !resolver
                .has_permission("nobody", names::MANAGE_ROSTER, None)
                .await
        );
    }

    // ==================== Scope matching ====================

    #[tokio::test]
    async fn test_squadron_grant_is_confined_to_its_squadron() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();

        assert!(
            resolver
                .has_permission("sq-staff", names::MANAGE_ROSTER, Some(&squadron("sq-1")))
                .await
        );
        assert!(
            !resolver
                .has_permission("sq-staff", names::MANAGE_ROSTER, Some(&squadron("sq-2")))
                .await
        );
    }

    #[tokio::test]
    async fn test_wing_grant_covers_every_squadron_of_the_wing() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();

        for id in ["sq-1", "sq-2"] {
            assert!(
                resolver
                    .has_permission("wing-staff", names::MANAGE_EVENTS, Some(&squadron(id)))
                    .await
            );
        }
        let other_wing = AccessContext::new().wing("w-2").squadron("sq-5");
        assert!(
            !resolver
                .has_permission("wing-staff", names::MANAGE_EVENTS, Some(&other_wing))
                .await
        );
    }

    #[tokio::test]
    async fn test_scoped_grant_without_context_denies() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();

        assert!(
            !resolver
                .has_permission("sq-staff", names::MANAGE_ROSTER, None)
                .await
        );
        // Global needs no context
        assert!(
            resolver
                .has_permission("admin", names::MANAGE_ROSTER, None)
                .await
        );
    }

    #[tokio::test]
    async fn test_flight_grant_alone_never_matches() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();

        let context = AccessContext::new().pilot("P7").debrief("D1");
        assert!(
            !resolver
                .has_permission("pilot", names::EDIT_DEBRIEFS, Some(&context))
                .await
        );
    }

    #[tokio::test]
    async fn test_any_and_all_permissions() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();
        let context = squadron("sq-1");

        assert!(
            resolver
                .has_any_permission(
                    "sq-staff",
                    &[names::MANAGE_SYLLABUS, names::MANAGE_ROSTER],
                    Some(&context),
                )
                .await
        );
        assert!(
            !resolver
                .has_all_permissions(
                    "sq-staff",
                    &[names::MANAGE_SYLLABUS, names::MANAGE_ROSTER],
                    Some(&context),
                )
                .await
        );
        assert!(
            resolver
                .has_all_permissions(
                    "sq-staff",
                    &[names::EDIT_DEBRIEFS, names::MANAGE_ROSTER],
                    Some(&context),
                )
                .await
        );
    }

    // ==================== Session caching ====================

    #[tokio::test]
    async fn test_role_change_applies_after_login() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();
        let context = squadron("sq-2");

        assert!(
            !resolver
                .has_permission("sq-staff", names::MANAGE_ROSTER, Some(&context))
                .await
        );

        chart.sources.set_permissions(
            "sq-staff",
            PermissionSet::new().with(
                names::MANAGE_ROSTER,
                vec![
                    PermissionGrant::squadron("sq-1"),
                    PermissionGrant::squadron("sq-2"),
                ],
            ),
        );

        // Cached set stays in force until the session reloads
        assert!(
            !resolver
                .has_permission("sq-staff", names::MANAGE_ROSTER, Some(&context))
                .await
        );

        crate::assert_ok!(resolver.login("sq-staff").await);
        assert!(
            resolver
                .has_permission("sq-staff", names::MANAGE_ROSTER, Some(&context))
                .await
        );
    }

    #[tokio::test]
    async fn test_logout_drops_cached_set() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();

        assert!(
            resolver
                .has_permission("admin", names::ACCESS_ADMIN_TOOLS, None)
                .await
        );
        assert_eq!(resolver.cached_sessions(), 1);

        resolver.logout("admin");
        assert_eq!(resolver.cached_sessions(), 0);
    }
}
