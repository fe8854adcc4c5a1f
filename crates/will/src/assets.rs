use serde::{Deserialize, Serialize};

use smartwill_core::{ValidationErrors, ValidationResult, ValueObject};

/// Balances held by the estate.
///
/// Token balances are kept as decimal strings so no precision is lost between
/// the wallet and the form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assets {
    pub stx: String,
    pub btc: String,
    pub nfts: i64,
    pub total_value: String,
}

impl ValueObject for Assets {}

impl Default for Assets {
    fn default() -> Self {
        Self {
            stx: "0".to_string(),
            btc: "0".to_string(),
            nfts: 0,
            total_value: "0".to_string(),
        }
    }
}

/// Why a decimal string was rejected.
fn decimal_problem(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("cannot be empty");
    }
    if value.starts_with('-') {
        return Some("must not be negative");
    }

    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (value, None),
    };

    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let well_formed = digits(whole) && fraction.is_none_or(digits);

    (!well_formed).then_some("must be a non-negative decimal number")
}

/// Validate asset balances: `nfts >= 0`, and `stx`, `btc`, `totalValue`
/// are plain non-negative decimals (`"12"`, `"0.0045"`; no sign, exponent,
/// whitespace or bare `"."`).
pub fn validate_assets(assets: &Assets) -> ValidationResult {
    let mut errors = ValidationErrors::new();

    for (field, value) in [
        ("stx", &assets.stx),
        ("btc", &assets.btc),
        ("totalValue", &assets.total_value),
    ] {
        if let Some(reason) = decimal_problem(value) {
            errors.push(field, format!("{reason} (got '{value}')"));
        }
    }

    if assets.nfts < 0 {
        errors.push("nfts", format!("must not be negative (got {})", assets.nfts));
    }

    errors.into_result()
}
