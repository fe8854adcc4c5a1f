use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use smartwill_core::PrincipalId;

use crate::Role;

/// Session claims handed over by the authentication layer (transport-agnostic).
///
/// Signature verification / decoding happens before this crate sees the
/// claims; what arrives here is already trusted apart from its time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject / principal identifier.
    pub sub: PrincipalId,

    /// The single role this session acts as.
    pub role: Role,

    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionValidationError {
    #[error("session has expired")]
    Expired,

    #[error("session not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid session time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate the claims' time window and yield the role.
pub fn validate_claims(claims: &SessionClaims, now: DateTime<Utc>) -> Result<Role, SessionValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(SessionValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(SessionValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(SessionValidationError::Expired);
    }
    Ok(claims.role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims(role: Role, issued_at: DateTime<Utc>, ttl: Duration) -> SessionClaims {
        SessionClaims {
            sub: PrincipalId::new(),
            role,
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    #[test]
    fn valid_window_yields_role() {
        let now = Utc::now();
        let c = claims(Role::Heir, now - Duration::minutes(1), Duration::minutes(10));
        assert_eq!(validate_claims(&c, now), Ok(Role::Heir));
    }

    #[test]
    fn expiry_is_exclusive() {
        let now = Utc::now();
        let c = claims(Role::Owner, now - Duration::minutes(10), Duration::minutes(10));
        assert_eq!(validate_claims(&c, now), Err(SessionValidationError::Expired));
    }

    #[test]
    fn future_issue_is_not_yet_valid() {
        let now = Utc::now();
        let c = claims(Role::Verifier, now + Duration::minutes(1), Duration::minutes(10));
        assert_eq!(validate_claims(&c, now), Err(SessionValidationError::NotYetValid));
    }

    #[test]
    fn inverted_window_is_rejected_first() {
        let now = Utc::now();
        let c = claims(Role::Owner, now, Duration::zero());
        assert_eq!(
            validate_claims(&c, now),
            Err(SessionValidationError::InvalidTimeWindow)
        );
    }

    #[test]
    fn role_serializes_inside_claims() {
        let now = Utc::now();
        let c = claims(Role::Heir, now, Duration::hours(1));
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["role"], "heir");
        let back: SessionClaims = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);
    }
}
