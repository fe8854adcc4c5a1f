use serde::{Deserialize, Serialize};

use smartwill_core::{Entity, ValidationErrors, ValidationResult};

/// A named recipient entitled to a percentage share of the estate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    /// Unique within the owning will.
    pub id: String,
    pub name: String,
    pub relationship: String,
    /// Share of the estate, in `[0, 100]`.
    pub percentage: f64,
    pub verified: bool,
}

impl Beneficiary {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        relationship: impl Into<String>,
        percentage: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            relationship: relationship.into(),
            percentage,
            verified: false,
        }
    }
}

impl Entity for Beneficiary {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validate one beneficiary against the other beneficiaries of its will.
///
/// `siblings` must not contain `beneficiary` itself.
pub fn validate_beneficiary<'a>(
    beneficiary: &Beneficiary,
    siblings: impl IntoIterator<Item = &'a Beneficiary>,
) -> ValidationResult {
    let mut errors = ValidationErrors::new();

    if beneficiary.id.trim().is_empty() {
        errors.push("id", "cannot be empty");
    } else if siblings.into_iter().any(|s| s.id == beneficiary.id) {
        errors.push(
            "id",
            format!("'{}' is already used by another beneficiary", beneficiary.id),
        );
    }

    if beneficiary.name.trim().is_empty() {
        errors.push("name", "cannot be empty");
    }

    // NaN fails the range check too.
    if !(0.0..=100.0).contains(&beneficiary.percentage) {
        errors.push(
            "percentage",
            format!("must be between 0 and 100 (got {})", beneficiary.percentage),
        );
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Beneficiary {
        Beneficiary::new("b1", "Alice", "daughter", 40.0)
    }

    #[test]
    fn accepts_well_formed_beneficiary() {
        assert_eq!(validate_beneficiary(&alice(), []), Ok(()));
    }

    #[test]
    fn percentage_above_100_fails_on_percentage_field() {
        let mut b = alice();
        b.percentage = 150.0;
        let errors = validate_beneficiary(&b, []).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("percentage"));
    }

    #[test]
    fn boundaries_are_inclusive() {
        for pct in [0.0, 100.0] {
            let mut b = alice();
            b.percentage = pct;
            assert!(validate_beneficiary(&b, []).is_ok(), "{pct} should be accepted");
        }
    }

    #[test]
    fn negative_and_nan_percentages_fail() {
        for pct in [-0.5, f64::NAN, f64::INFINITY] {
            let mut b = alice();
            b.percentage = pct;
            assert!(validate_beneficiary(&b, []).unwrap_err().has_field("percentage"));
        }
    }

    #[test]
    fn duplicate_id_among_siblings_fails() {
        let sibling = Beneficiary::new("b1", "Bob", "son", 10.0);
        let errors = validate_beneficiary(&alice(), [&sibling]).unwrap_err();
        assert!(errors.has_field("id"));
    }

    #[test]
    fn collects_every_problem() {
        let b = Beneficiary::new(" ", "", "friend", 101.0);
        let errors = validate_beneficiary(&b, []).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["id", "name", "percentage"]);
    }
}
