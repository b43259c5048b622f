//! Debrief editing integration tests

#[cfg(test)]
mod tests {
    use crate::common::OrgChart;
    use readyroom::{AccessContext, names};

    #[tokio::test]
    async fn test_squadron_staff_edit_own_squadron_drafts() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();

        assert!(resolver.can_edit_debrief("sq-staff", "D1", None).await);
        assert!(!resolver.can_edit_debrief("sq-staff", "D2", None).await);
    }

    #[tokio::test]
    async fn test_finalized_debrief_is_read_only_for_everyone() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();

        assert!(resolver.can_edit_debrief("admin", "D1", None).await);
        crate::assert_ok!(chart.sources.finalize("D1"));

        assert!(!resolver.can_edit_debrief("admin", "D1", None).await);
        assert!(!resolver.can_edit_debrief("sq-staff", "D1", None).await);
    }

    #[tokio::test]
    async fn test_unknown_debrief_denies() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();

        assert!(!resolver.can_edit_debrief("admin", "D404", None).await);
    }

    #[tokio::test]
    async fn test_delegation_grants_and_revocation_withdraws() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();

        assert!(!resolver.can_edit_debrief("pilot", "D1", Some("P7")).await);

        chart.sources.delegate("D1", "P7");
        assert!(resolver.can_edit_debrief("pilot", "D1", Some("P7")).await);
        // The delegation names one debrief and one pilot
        assert!(!resolver.can_edit_debrief("pilot", "D2", Some("P7")).await);
        assert!(!resolver.can_edit_debrief("pilot", "D1", Some("P8")).await);
        assert!(!resolver.can_edit_debrief("pilot", "D1", None).await);

        assert_eq!(chart.sources.revoke("D1", "P7"), 1);
        assert!(!resolver.can_edit_debrief("pilot", "D1", Some("P7")).await);
    }

    #[tokio::test]
    async fn test_delegation_only_backs_debrief_editing() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();
        chart.sources.delegate("D1", "P7");

        let context = AccessContext::new().pilot("P7").debrief("D1");
        assert!(
            resolver
                .has_permission("pilot", names::EDIT_DEBRIEFS, Some(&context))
                .await
        );
        assert!(
            !resolver
                .has_permission("pilot", names::FINALIZE_DEBRIEFS, Some(&context))
                .await
        );
    }

    #[tokio::test]
    async fn test_finalizing_overrides_delegation() {
        let chart = OrgChart::seeded();
        let resolver = chart.resolver();
        chart.sources.delegate("D1", "P7");
        assert!(resolver.can_edit_debrief("pilot", "D1", Some("P7")).await);

        crate::assert_ok!(chart.sources.finalize("D1"));
        assert!(!resolver.can_edit_debrief("pilot", "D1", Some("P7")).await);
    }
}
