use serde::{Deserialize, Serialize};

use smartwill_core::{ValidationErrors, ValidationResult, ValueObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionStatus {
    Active,
    Inactive,
}

/// A rule gating release of assets (time lock, verification requirement, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WillCondition {
    /// Free-form category label, e.g. "time-lock" or "multi-sig".
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub status: ConditionStatus,
}

impl ValueObject for WillCondition {}

impl WillCondition {
    pub fn active(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            status: ConditionStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ConditionStatus::Active
    }
}

pub fn validate_condition(condition: &WillCondition) -> ValidationResult {
    let mut errors = ValidationErrors::new();
    if condition.kind.trim().is_empty() {
        errors.push("type", "cannot be empty");
    }
    if condition.description.trim().is_empty() {
        errors.push("description", "cannot be empty");
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_type_key_and_lowercase_status() {
        let c = WillCondition::active("time-lock", "Release after 2030-01-01");
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "time-lock",
                "description": "Release after 2030-01-01",
                "status": "active"
            })
        );
    }

    #[test]
    fn blank_type_and_description_fail() {
        let c = WillCondition::active("", "  ");
        let errors = validate_condition(&c).unwrap_err();
        assert!(errors.has_field("type"));
        assert!(errors.has_field("description"));
    }
}
