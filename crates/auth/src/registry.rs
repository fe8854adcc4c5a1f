//! Navigation registry: tab catalog + role allow-lists.
//!
//! The registry is built once at startup and never mutated. Resolution is a
//! pure filter over the catalog, so the returned tabs always follow catalog
//! order no matter how an allow-list was written.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::RegistryMode;
use crate::{ConfigurationError, NavigationTab, Role, TabId};

/// Role -> ordered allow-list of tab ids, as written in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleNavigationMap(BTreeMap<Role, Vec<TabId>>);

impl RoleNavigationMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with_role<I, T>(mut self, role: Role, tabs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TabId>,
    {
        self.0.insert(role, tabs.into_iter().map(Into::into).collect());
        self
    }

    pub fn get(&self, role: Role) -> Option<&[TabId]> {
        self.0.get(&role).map(Vec::as_slice)
    }
}

/// Allow-list of one role, keeping the declared order for display/audit.
#[derive(Debug, Clone)]
struct AllowList {
    declared: Vec<TabId>,
    ids: HashSet<TabId>,
}

impl AllowList {
    fn new(declared: &[TabId]) -> Self {
        let mut ids = HashSet::with_capacity(declared.len());
        let mut deduped = Vec::with_capacity(declared.len());
        for id in declared {
            if ids.insert(id.clone()) {
                deduped.push(id.clone());
            }
        }
        Self {
            declared: deduped,
            ids,
        }
    }
}

/// Immutable, process-wide navigation configuration.
#[derive(Debug, Clone)]
pub struct NavigationRegistry {
    mode: RegistryMode,
    catalog: Vec<NavigationTab>,
    owner: AllowList,
    heir: AllowList,
    verifier: AllowList,
}

impl NavigationRegistry {
    /// Build a registry, running the configuration self-check.
    ///
    /// Always fatal: duplicate catalog ids, a role without an allow-list.
    /// Fatal only in [`RegistryMode::Strict`]: allow-list ids missing from the
    /// catalog and ids listed twice for one role. Lenient registries log
    /// those and drop them from resolution.
    pub fn new(
        mode: RegistryMode,
        catalog: Vec<NavigationTab>,
        roles: &RoleNavigationMap,
    ) -> Result<Self, ConfigurationError> {
        let mut seen = HashSet::with_capacity(catalog.len());
        for tab in &catalog {
            if !seen.insert(tab.id.clone()) {
                return Err(ConfigurationError::DuplicateTab(tab.id.clone()));
            }
        }

        for role in Role::ALL {
            let declared = roles.get(role).ok_or(ConfigurationError::MissingRole(role))?;
            let mut listed = HashSet::with_capacity(declared.len());

            for tab in declared {
                let issue = if !seen.contains(tab) {
                    ConfigurationError::UnknownTab {
                        role,
                        tab: tab.clone(),
                    }
                } else if !listed.insert(tab) {
                    ConfigurationError::DuplicateAllowListEntry {
                        role,
                        tab: tab.clone(),
                    }
                } else {
                    continue;
                };

                match mode {
                    RegistryMode::Strict => return Err(issue),
                    RegistryMode::Lenient => {
                        tracing::warn!(role = %role, tab = %tab, "{issue}; entry ignored");
                    }
                }
            }
        }

        // MissingRole was ruled out above, so these lookups always succeed.
        let allow = |role: Role| AllowList::new(roles.get(role).unwrap_or_default());

        let registry = Self {
            mode,
            owner: allow(Role::Owner),
            heir: allow(Role::Heir),
            verifier: allow(Role::Verifier),
            catalog,
        };

        tracing::info!(
            mode = ?registry.mode,
            tabs = registry.catalog.len(),
            "navigation registry initialized"
        );

        Ok(registry)
    }

    pub fn strict(
        catalog: Vec<NavigationTab>,
        roles: &RoleNavigationMap,
    ) -> Result<Self, ConfigurationError> {
        Self::new(RegistryMode::Strict, catalog, roles)
    }

    pub fn lenient(
        catalog: Vec<NavigationTab>,
        roles: &RoleNavigationMap,
    ) -> Result<Self, ConfigurationError> {
        Self::new(RegistryMode::Lenient, catalog, roles)
    }

    /// The built-in SmartWill navigation, checked in strict mode.
    pub fn shipped() -> Result<Self, ConfigurationError> {
        crate::NavigationConfig::shipped().into_registry()
    }

    pub fn mode(&self) -> RegistryMode {
        self.mode
    }

    /// The full catalog, in canonical order.
    pub fn catalog(&self) -> &[NavigationTab] {
        &self.catalog
    }

    pub fn tab(&self, id: &TabId) -> Option<&NavigationTab> {
        self.catalog.iter().find(|t| &t.id == id)
    }

    fn allow_list(&self, role: Role) -> &AllowList {
        match role {
            Role::Owner => &self.owner,
            Role::Heir => &self.heir,
            Role::Verifier => &self.verifier,
        }
    }

    /// Allow-list of `role` as configured (deduplicated, declared order).
    ///
    /// May include ids a lenient registry ignores during resolution.
    pub fn allowed_tab_ids(&self, role: Role) -> &[TabId] {
        &self.allow_list(role).declared
    }

    pub fn is_allowed(&self, role: Role, id: &TabId) -> bool {
        self.allow_list(role).ids.contains(id) && self.tab(id).is_some()
    }

    /// Tabs visible to `role`, in catalog order.
    pub fn resolve_tabs_for_role(&self, role: Role) -> Vec<NavigationTab> {
        let allowed = &self.allow_list(role).ids;
        let tabs: Vec<NavigationTab> = self
            .catalog
            .iter()
            .filter(|tab| allowed.contains(&tab.id))
            .cloned()
            .collect();

        tracing::debug!(role = %role, visible = tabs.len(), "resolved navigation tabs");
        tabs
    }

    /// Resolve by role name, for callers holding an unparsed role string.
    pub fn resolve_tabs_for_role_name(
        &self,
        role: &str,
    ) -> Result<Vec<NavigationTab>, ConfigurationError> {
        let role: Role = role.parse()?;
        Ok(self.resolve_tabs_for_role(role))
    }

    /// Single global tab list for callers that predate per-role navigation.
    pub fn default_tabs(&self) -> Vec<NavigationTab> {
        self.resolve_tabs_for_role(Role::Owner)
    }

    /// Roles that can see `id`, in `Role::ALL` order.
    pub fn roles_granting(&self, id: &TabId) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.is_allowed(*role, id))
            .collect()
    }
}
