use serde::Serialize;
use thiserror::Error;

use crate::{NavigationRegistry, Role, TabId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("unknown tab '{0}'")]
    UnknownTab(TabId),

    #[error("forbidden: role '{role}' cannot open tab '{tab}'")]
    Forbidden { role: Role, tab: TabId },
}

/// Guard direct navigation to a tab (deep links, bookmarked URLs).
///
/// - No IO
/// - No panics
/// - Same answer as "is `tab` in `resolve_tabs_for_role(role)`"
pub fn authorize_tab(registry: &NavigationRegistry, role: Role, tab: &TabId) -> Result<(), AuthzError> {
    if registry.tab(tab).is_none() {
        return Err(AuthzError::UnknownTab(tab.clone()));
    }

    if registry.is_allowed(role, tab) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden {
            role,
            tab: tab.clone(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Access Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Detailed explanation of a tab access decision.
#[derive(Debug, Clone, Serialize)]
pub struct TabAccessExplanation {
    pub tab: TabId,
    pub role: Role,
    pub granted: bool,

    /// Human-readable reason for the decision.
    pub reason: String,

    /// Tabs the role can see, in catalog order.
    pub visible_tabs: Vec<TabId>,

    /// Roles that would be able to open the tab.
    pub granting_roles: Vec<Role>,

    pub denial_reason: Option<DenialReason>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DenialReason {
    pub kind: DenialKind,
    pub message: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    UnknownTab,
    NotInAllowList,
}

/// Answer "why can (or can't) this role open this tab?".
pub fn explain_tab_access(
    registry: &NavigationRegistry,
    role: Role,
    tab: &TabId,
) -> TabAccessExplanation {
    let visible_tabs: Vec<TabId> = registry
        .resolve_tabs_for_role(role)
        .into_iter()
        .map(|t| t.id)
        .collect();
    let granting_roles = registry.roles_granting(tab);

    let (granted, reason, denial_reason) = match authorize_tab(registry, role, tab) {
        Ok(()) => (
            true,
            format!("Role '{role}' has '{tab}' in its navigation allow-list"),
            None,
        ),
        Err(AuthzError::UnknownTab(_)) => (
            false,
            format!("Tab '{tab}' is not part of the navigation catalog"),
            Some(DenialReason {
                kind: DenialKind::UnknownTab,
                message: format!("No tab with id '{tab}' exists"),
                suggestions: vec![
                    "Check the tab id for typos".to_string(),
                    "Add the tab to the navigation catalog if it is new".to_string(),
                ],
            }),
        ),
        Err(AuthzError::Forbidden { .. }) => {
            let mut suggestions = vec![format!(
                "Add '{tab}' to the '{role}' allow-list if this role should see it"
            )];
            if !granting_roles.is_empty() {
                let names: Vec<&str> = granting_roles.iter().map(Role::as_str).collect();
                suggestions.insert(
                    0,
                    format!("The tab is available to: {}", names.join(", ")),
                );
            }

            (
                false,
                format!("Role '{role}' does not have '{tab}' in its navigation allow-list"),
                Some(DenialReason {
                    kind: DenialKind::NotInAllowList,
                    message: format!("Tab '{tab}' is not visible to role '{role}'"),
                    suggestions,
                }),
            )
        }
    };

    TabAccessExplanation {
        tab: tab.clone(),
        role,
        granted,
        reason,
        visible_tabs,
        granting_roles,
        denial_reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs;

    fn registry() -> NavigationRegistry {
        NavigationRegistry::shipped().unwrap()
    }

    #[test]
    fn owner_may_open_every_catalog_tab() {
        let registry = registry();
        for tab in registry.catalog() {
            assert_eq!(authorize_tab(&registry, Role::Owner, &tab.id), Ok(()));
        }
    }

    #[test]
    fn heir_cannot_open_deploy() {
        let err = authorize_tab(&registry(), Role::Heir, &tabs::DEPLOY).unwrap_err();
        assert_eq!(
            err,
            AuthzError::Forbidden {
                role: Role::Heir,
                tab: tabs::DEPLOY
            }
        );
    }

    #[test]
    fn unknown_tab_is_reported_before_role_check() {
        let err = authorize_tab(&registry(), Role::Owner, &TabId::from_static("billing")).unwrap_err();
        assert!(matches!(err, AuthzError::UnknownTab(_)));
    }

    #[test]
    fn authorization_agrees_with_resolution() {
        let registry = registry();
        for role in Role::ALL {
            let visible = registry.resolve_tabs_for_role(role);
            for tab in registry.catalog() {
                let allowed = authorize_tab(&registry, role, &tab.id).is_ok();
                assert_eq!(allowed, visible.iter().any(|v| v.id == tab.id));
            }
        }
    }

    #[test]
    fn denial_explains_which_roles_grant_the_tab() {
        let explanation = explain_tab_access(&registry(), Role::Verifier, &tabs::HEIR_VIEW);
        assert!(!explanation.granted);
        assert_eq!(explanation.granting_roles, vec![Role::Owner, Role::Heir]);

        let denial = explanation.denial_reason.unwrap();
        assert_eq!(denial.kind, DenialKind::NotInAllowList);
        assert_eq!(denial.suggestions[0], "The tab is available to: owner, heir");
    }

    #[test]
    fn grant_lists_visible_tabs_in_catalog_order() {
        let explanation = explain_tab_access(&registry(), Role::Heir, &tabs::LEGACY);
        assert!(explanation.granted);
        assert!(explanation.denial_reason.is_none());
        assert_eq!(
            explanation.visible_tabs,
            vec![tabs::DASHBOARD, tabs::ASSETS, tabs::LEGACY, tabs::HEIR_VIEW]
        );
    }

    #[test]
    fn explanation_serializes_for_audit_output() {
        let explanation = explain_tab_access(&registry(), Role::Heir, &TabId::from_static("x"));
        let json = serde_json::to_value(&explanation).unwrap();
        assert_eq!(json["granted"], false);
        assert_eq!(json["denial_reason"]["kind"], "unknown_tab");
    }
}
