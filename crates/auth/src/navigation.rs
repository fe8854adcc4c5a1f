use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use smartwill_core::Entity;

/// Stable identifier of an application section (e.g. "heir-view").
///
/// Opaque string at this layer; the catalog decides which ids exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Cow<'static, str>);

impl TabId {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for TabId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TabId {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

/// A navigable section of the UI. Identity is `id`; label and href are display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTab {
    pub id: TabId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl NavigationTab {
    pub fn new(id: impl Into<TabId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: None,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

impl Entity for NavigationTab {
    type Id = TabId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Well-known tab ids of the shipped catalog.
pub mod tabs {
    use super::TabId;

    pub const DASHBOARD: TabId = TabId::from_static("dashboard");
    pub const CREATE: TabId = TabId::from_static("create");
    pub const DRAFTS_VERSIONS: TabId = TabId::from_static("drafts-versions");
    pub const REVIEW_PREVIEW: TabId = TabId::from_static("review-preview");
    pub const DEPLOY: TabId = TabId::from_static("deploy");
    pub const ASSETS: TabId = TabId::from_static("assets");
    pub const LEGACY: TabId = TabId::from_static("legacy");
    pub const AI_ADVISOR: TabId = TabId::from_static("ai-advisor");
    pub const SECURITY: TabId = TabId::from_static("security");
    pub const HEIR_VIEW: TabId = TabId::from_static("heir-view");
    pub const VERIFIER_DASHBOARD: TabId = TabId::from_static("verifier-dashboard");
}
