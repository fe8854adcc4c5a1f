use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

/// Authorization class of the current user.
///
/// Closed set: every place that branches on a role matches exhaustively, so
/// adding a variant is a compile error until each call site decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Heir,
    Verifier,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Owner, Role::Heir, Role::Verifier];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Heir => "heir",
            Role::Verifier => "verifier",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognized role name is a configuration/programming error: roles
/// reach this crate already validated by the authentication layer.
impl FromStr for Role {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Role::Owner),
            "heir" => Ok(Role::Heir),
            "verifier" => Ok(Role::Verifier),
            other => Err(ConfigurationError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_role() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_configuration_error() {
        let err = "admin".parse::<Role>().unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownRole(name) if name == "admin"));
    }

    #[test]
    fn role_names_are_case_sensitive() {
        assert!("Owner".parse::<Role>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Verifier).unwrap(), "\"verifier\"");
    }
}
