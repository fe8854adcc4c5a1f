//! `smartwill-auth` — role-based navigation access control.
//!
//! Decides which application sections ("tabs") each role may see. Pure policy:
//! no HTTP, no storage, no session handling beyond validating handed-over claims.

pub mod authorize;
pub mod claims;
pub mod config;
pub mod error;
pub mod navigation;
pub mod registry;
pub mod roles;

pub use authorize::{
    authorize_tab, explain_tab_access, AuthzError, DenialKind, DenialReason, TabAccessExplanation,
};
pub use claims::{validate_claims, SessionClaims, SessionValidationError};
pub use config::{NavigationConfig, RegistryMode};
pub use error::ConfigurationError;
pub use navigation::{tabs, NavigationTab, TabId};
pub use registry::{NavigationRegistry, RoleNavigationMap};
pub use roles::Role;
