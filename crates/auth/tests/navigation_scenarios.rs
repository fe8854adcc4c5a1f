use std::collections::HashSet;

use smartwill_auth::{
    authorize_tab, tabs, ConfigurationError, NavigationConfig, NavigationRegistry, NavigationTab,
    RegistryMode, Role, RoleNavigationMap, TabId,
};

const CATALOG: [&str; 11] = [
    "dashboard",
    "create",
    "drafts-versions",
    "review-preview",
    "deploy",
    "assets",
    "legacy",
    "ai-advisor",
    "security",
    "heir-view",
    "verifier-dashboard",
];

fn catalog() -> Vec<NavigationTab> {
    CATALOG
        .iter()
        .map(|id| NavigationTab::new(*id, id.to_uppercase()))
        .collect()
}

fn ids(tabs: &[NavigationTab]) -> Vec<&str> {
    tabs.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn heir_allow_list_resolves_in_catalog_order() {
    let roles = RoleNavigationMap::new()
        .with_role(Role::Owner, CATALOG)
        .with_role(Role::Heir, ["dashboard", "heir-view", "assets", "legacy"])
        .with_role(Role::Verifier, ["verifier-dashboard"]);

    let registry = NavigationRegistry::strict(catalog(), &roles).unwrap();

    assert_eq!(
        ids(&registry.resolve_tabs_for_role(Role::Heir)),
        vec!["dashboard", "assets", "legacy", "heir-view"]
    );
}

#[test]
fn shipped_registry_satisfies_role_properties() {
    let registry = NavigationRegistry::shipped().unwrap();
    let owner = registry.resolve_tabs_for_role(Role::Owner);
    assert_eq!(ids(&owner), CATALOG.to_vec());
    assert_eq!(registry.default_tabs(), owner);

    for role in Role::ALL {
        let resolved = registry.resolve_tabs_for_role(role);
        let allowed: HashSet<&TabId> = registry.allowed_tab_ids(role).iter().collect();
        let mut seen = HashSet::new();
        for tab in &resolved {
            assert!(allowed.contains(&tab.id), "{role} resolved unlisted tab {}", tab.id);
            assert!(seen.insert(tab.id.clone()), "{role} resolved {} twice", tab.id);
        }
        assert_eq!(resolved, registry.resolve_tabs_for_role(role));
    }
}

#[test]
fn verifier_sees_verification_dashboard_but_not_editing_tabs() {
    let registry = NavigationRegistry::shipped().unwrap();
    assert!(authorize_tab(&registry, Role::Verifier, &tabs::VERIFIER_DASHBOARD).is_ok());
    for editing in [tabs::CREATE, tabs::DRAFTS_VERSIONS, tabs::DEPLOY] {
        assert!(authorize_tab(&registry, Role::Verifier, &editing).is_err());
        assert!(authorize_tab(&registry, Role::Heir, &editing).is_err());
    }
}

#[test]
fn config_file_round_trips_through_disk() {
    let path = std::env::temp_dir().join(format!(
        "smartwill-nav-{}.json",
        std::process::id()
    ));
    let mut config = NavigationConfig::shipped();
    config.mode = RegistryMode::Lenient;
    std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = NavigationConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
    let registry = loaded.into_registry().unwrap();
    assert_eq!(registry.mode(), RegistryMode::Lenient);
    assert_eq!(
        registry.resolve_tabs_for_role(Role::Heir),
        NavigationRegistry::shipped().unwrap().resolve_tabs_for_role(Role::Heir)
    );
}

#[test]
fn strict_file_with_stale_tab_fails_at_startup() {
    let json = r#"{
        "mode": "strict",
        "tabs": [{"id": "dashboard", "label": "Dashboard"}],
        "roles": {"owner": ["dashboard"], "heir": ["dashboard", "inheritance"], "verifier": []}
    }"#;
    let err = NavigationConfig::from_json_str(json)
        .unwrap()
        .into_registry()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigurationError::UnknownTab { role: Role::Heir, ref tab } if tab.as_str() == "inheritance"
    ));
}
