//! Navigation configuration: the built-in table plus JSON file loading.

use core::str::FromStr;
use std::env::VarError;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::navigation::tabs;
use crate::{ConfigurationError, NavigationRegistry, NavigationTab, Role, RoleNavigationMap};

/// Env var naming a JSON navigation config file.
pub const CONFIG_PATH_ENV: &str = "SMARTWILL_NAV_CONFIG";

/// Env var overriding the configured [`RegistryMode`].
pub const MODE_ENV: &str = "SMARTWILL_NAV_MODE";

/// How the registry treats allow-list entries that do not match the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryMode {
    /// Fail construction on any referential-integrity problem.
    #[default]
    Strict,
    /// Log and ignore bad entries (pre-registry behavior).
    Lenient,
}

impl FromStr for RegistryMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(RegistryMode::Strict),
            "lenient" => Ok(RegistryMode::Lenient),
            _ => Err(ConfigurationError::UnknownMode(s.to_string())),
        }
    }
}

/// Serializable form of the navigation registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default)]
    pub mode: RegistryMode,
    pub tabs: Vec<NavigationTab>,
    pub roles: RoleNavigationMap,
}

impl NavigationConfig {
    /// The SmartWill navigation as shipped.
    pub fn shipped() -> Self {
        let catalog = vec![
            NavigationTab::new(tabs::DASHBOARD, "Dashboard"),
            NavigationTab::new(tabs::CREATE, "Create Will"),
            NavigationTab::new(tabs::DRAFTS_VERSIONS, "Drafts & Versions"),
            NavigationTab::new(tabs::REVIEW_PREVIEW, "Review & Preview"),
            NavigationTab::new(tabs::DEPLOY, "Deploy"),
            NavigationTab::new(tabs::ASSETS, "Assets"),
            NavigationTab::new(tabs::LEGACY, "Legacy"),
            NavigationTab::new(tabs::AI_ADVISOR, "AI Advisor"),
            NavigationTab::new(tabs::SECURITY, "Security"),
            NavigationTab::new(tabs::HEIR_VIEW, "Heir View").with_href("/heir"),
            NavigationTab::new(tabs::VERIFIER_DASHBOARD, "Verifier Dashboard").with_href("/verify"),
        ];

        let owner: Vec<_> = catalog.iter().map(|t| t.id.clone()).collect();

        let roles = RoleNavigationMap::new()
            .with_role(Role::Owner, owner)
            .with_role(
                Role::Heir,
                [tabs::DASHBOARD, tabs::HEIR_VIEW, tabs::ASSETS, tabs::LEGACY],
            )
            .with_role(
                Role::Verifier,
                [tabs::DASHBOARD, tabs::VERIFIER_DASHBOARD, tabs::SECURITY],
            );

        Self {
            mode: RegistryMode::Strict,
            tabs: catalog,
            roles,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Load from `SMARTWILL_NAV_CONFIG`, falling back to [`Self::shipped`],
    /// then apply a `SMARTWILL_NAV_MODE` override if set.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let path = env_var(CONFIG_PATH_ENV)?;
        let mode = env_var(MODE_ENV)?;
        Self::from_sources(path.as_deref(), mode.as_deref())
    }

    /// [`Self::from_env`] with the variable values passed in.
    pub fn from_sources(path: Option<&str>, mode: Option<&str>) -> Result<Self, ConfigurationError> {
        let mut config = match path {
            Some(path) => {
                tracing::info!(path = %path, "loading navigation config");
                Self::from_path(path)?
            }
            None => {
                tracing::warn!("{CONFIG_PATH_ENV} not set; using built-in navigation");
                Self::shipped()
            }
        };

        if let Some(mode) = mode {
            config.mode = mode.parse()?;
        }

        Ok(config)
    }

    pub fn into_registry(self) -> Result<NavigationRegistry, ConfigurationError> {
        NavigationRegistry::new(self.mode, self.tabs, &self.roles)
    }
}

fn env_var(name: &'static str) -> Result<Option<String>, ConfigurationError> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigurationError::NotUnicode(name)),
    }
}
