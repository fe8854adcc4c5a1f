use thiserror::Error;

use crate::{Role, TabId};

/// The navigation catalog or role map is internally inconsistent.
///
/// Never user-recoverable. Strict registries surface these at construction so
/// a bad configuration stops the process at startup instead of at request time.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("unknown role '{0}'")]
    UnknownRole(String),

    #[error("no allow-list configured for role '{0}'")]
    MissingRole(Role),

    #[error("role '{role}' allows tab '{tab}' which is not in the catalog")]
    UnknownTab { role: Role, tab: TabId },

    #[error("tab '{0}' is declared more than once in the catalog")]
    DuplicateTab(TabId),

    #[error("role '{role}' lists tab '{tab}' more than once")]
    DuplicateAllowListEntry { role: Role, tab: TabId },

    #[error("unknown registry mode '{0}' (expected 'strict' or 'lenient')")]
    UnknownMode(String),

    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),

    #[error("failed to read navigation config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse navigation config: {0}")]
    Parse(#[from] serde_json::Error),
}
