//! Scope matching
//!
//! Pure, synchronous evaluation of a resolved permission value against an
//! access context. Anything that needs a data lookup (flight delegation)
//! belongs to the resolver, not here.

use crate::utils::error::PermissionError;

use super::types::{AccessContext, PermissionGrant, PermissionValue};

/// Stateless scope matcher
pub struct ScopeMatcher;

impl ScopeMatcher {
    /// Decide whether `value` allows access to the resource described by `context`.
    ///
    /// Flags are returned unchanged. Grant lists are OR-composed and stop at the
    /// first match; an empty list denies.
    pub fn evaluate(value: &PermissionValue, context: Option<&AccessContext>) -> bool {
        match value {
            PermissionValue::Flag(flag) => *flag,
            PermissionValue::Scoped(grants) => grants
                .iter()
                .any(|grant| Self::grant_matches(grant, context)),
        }
    }

    /// Whether a single grant is satisfied by the context
    pub fn grant_matches(grant: &PermissionGrant, context: Option<&AccessContext>) -> bool {
        match grant {
            PermissionGrant::Global => true,
            PermissionGrant::ScopedToWing { wing_id } => {
                context.and_then(|c| c.wing_id.as_deref()) == Some(wing_id.as_str())
            }
            PermissionGrant::ScopedToSquadron { squadron_id } => {
                context.and_then(|c| c.squadron_id.as_deref()) == Some(squadron_id.as_str())
            }
            // resolved only through the delegation lookup
            PermissionGrant::ScopedToFlight { .. } => false,
        }
    }

    /// Explain a denial caused by a missing context or context field.
    ///
    /// Returns `None` when `evaluate` grants, when the denial is a plain scope
    /// mismatch, or when the list holds nothing the context could satisfy.
    pub fn diagnose(
        permission: &str,
        value: &PermissionValue,
        context: Option<&AccessContext>,
    ) -> Option<PermissionError> {
        if Self::evaluate(value, context) {
            return None;
        }

        let PermissionValue::Scoped(grants) = value else {
            return None;
        };

        let missing = grants.iter().find_map(|grant| match grant {
            PermissionGrant::ScopedToWing { .. }
                if context.and_then(|c| c.wing_id.as_ref()).is_none() =>
            {
                Some("wing_id")
            }
            PermissionGrant::ScopedToSquadron { .. }
                if context.and_then(|c| c.squadron_id.as_ref()).is_none() =>
            {
                Some("squadron_id")
            }
            _ => None,
        })?;

        Some(PermissionError::InvalidContext {
            permission: permission.to_string(),
            missing: if context.is_none() { "context" } else { missing },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squadron_scoped(id: &str) -> PermissionValue {
        PermissionValue::Scoped(vec![PermissionGrant::squadron(id)])
    }

    #[test]
    fn test_flag_ignores_context() {
        let ctx = AccessContext::new().squadron("sq-1");
        assert!(ScopeMatcher::evaluate(&PermissionValue::Flag(true), None));
        assert!(ScopeMatcher::evaluate(&PermissionValue::Flag(true), Some(&ctx)));
        assert!(!ScopeMatcher::evaluate(&PermissionValue::Flag(false), None));
        assert!(!ScopeMatcher::evaluate(&PermissionValue::Flag(false), Some(&ctx)));
    }

    #[test]
    fn test_empty_grant_list_denies() {
        let value = PermissionValue::Scoped(vec![]);
        assert!(!ScopeMatcher::evaluate(&value, None));
        assert!(!ScopeMatcher::evaluate(
            &value,
            Some(&AccessContext::new().wing("w-1").squadron("sq-1"))
        ));
    }

    #[test]
    fn test_global_dominates_every_context() {
        let value = PermissionValue::Scoped(vec![
            PermissionGrant::squadron("sq-9"),
            PermissionGrant::Global,
        ]);
        let contexts = [
            None,
            Some(AccessContext::new()),
            Some(AccessContext::new().squadron("sq-1")),
            Some(AccessContext::new().wing("w-2").pilot("p-3")),
        ];
        for ctx in &contexts {
            assert!(ScopeMatcher::evaluate(&value, ctx.as_ref()));
        }
    }

    #[test]
    fn test_squadron_scope_precision() {
        let value = squadron_scoped("A");
        assert!(ScopeMatcher::evaluate(
            &value,
            Some(&AccessContext::new().squadron("A"))
        ));
        assert!(!ScopeMatcher::evaluate(
            &value,
            Some(&AccessContext::new().squadron("B"))
        ));
        assert!(!ScopeMatcher::evaluate(&value, None));
        assert!(!ScopeMatcher::evaluate(&value, Some(&AccessContext::new())));
    }

    #[test]
    fn test_wing_scope_ignores_squadron_field() {
        let value = PermissionValue::Scoped(vec![PermissionGrant::wing("w-1")]);
        assert!(ScopeMatcher::evaluate(
            &value,
            Some(&AccessContext::new().wing("w-1"))
        ));
        assert!(!ScopeMatcher::evaluate(
            &value,
            Some(&AccessContext::new().squadron("w-1"))
        ));
    }

    #[test]
    fn test_flight_grant_never_matches_directly() {
        let value = PermissionValue::Scoped(vec![PermissionGrant::flight("P7")]);
        let ctx = AccessContext::new().pilot("P7").debrief("D1");
        assert!(!ScopeMatcher::evaluate(&value, Some(&ctx)));
    }

    #[test]
    fn test_any_matching_grant_allows() {
        let value = PermissionValue::Scoped(vec![
            PermissionGrant::flight("P7"),
            PermissionGrant::squadron("sq-1"),
            PermissionGrant::wing("w-1"),
        ]);
        assert!(ScopeMatcher::evaluate(
            &value,
            Some(&AccessContext::new().wing("w-1").squadron("sq-2"))
        ));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let value = squadron_scoped("sq-1");
        let ctx = AccessContext::new().squadron("sq-1");
        let first = ScopeMatcher::evaluate(&value, Some(&ctx));
        for _ in 0..10 {
            assert_eq!(ScopeMatcher::evaluate(&value, Some(&ctx)), first);
        }
    }

    #[test]
    fn test_diagnose_missing_context() {
        let err = ScopeMatcher::diagnose("manage_roster", &squadron_scoped("sq-1"), None);
        assert_eq!(
            err,
            Some(PermissionError::InvalidContext {
                permission: "manage_roster".to_string(),
                missing: "context",
            })
        );
    }

    #[test]
    fn test_diagnose_missing_field() {
        let ctx = AccessContext::new().wing("w-1");
        let err = ScopeMatcher::diagnose("manage_roster", &squadron_scoped("sq-1"), Some(&ctx));
        assert!(matches!(
            err,
            Some(PermissionError::InvalidContext { missing: "squadron_id", .. })
        ));
    }

    #[test]
    fn test_diagnose_plain_mismatch_is_not_an_error() {
        let ctx = AccessContext::new().squadron("sq-2");
        assert_eq!(
            ScopeMatcher::diagnose("manage_roster", &squadron_scoped("sq-1"), Some(&ctx)),
            None
        );
        assert_eq!(
            ScopeMatcher::diagnose("access_admin_tools", &PermissionValue::Flag(false), None),
            None
        );
    }
}
