//! Records rendered by the advisor, legacy, security and market views.
//!
//! They share the will model's conventions (serde camelCase JSON, closed enums
//! for categories, collected validation errors) but are not part of `WillData`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use smartwill_core::{ValidationErrors, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Optimization,
    Security,
    Tax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

/// Suggestion produced by the AI advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub description: String,
    /// Model confidence, in percent.
    pub confidence: f64,
    pub impact: Impact,
}

impl AiRecommendation {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        if self.title.trim().is_empty() {
            errors.push("title", "cannot be empty");
        }
        if !(0.0..=100.0).contains(&self.confidence) {
            errors.push(
                "confidence",
                format!("must be between 0 and 100 (got {})", self.confidence),
            );
        }
        errors.into_result()
    }

    /// Order recommendations for display: highest impact first, then confidence.
    pub fn rank(recommendations: &mut [AiRecommendation]) {
        recommendations.sort_by(|a, b| {
            b.impact
                .cmp(&a.impact)
                .then_with(|| b.confidence.total_cmp(&a.confidence))
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryKind {
    Photos,
    Audio,
    Documents,
}

/// A bundle of personal media that unlocks for heirs on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryBox {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MemoryKind,
    pub count: u32,
    pub unlock_date: NaiveDate,
}

impl MemoryBox {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        if self.title.trim().is_empty() {
            errors.push("title", "cannot be empty");
        }
        errors.into_result()
    }

    pub fn is_unlocked(&self, today: NaiveDate) -> bool {
        today >= self.unlock_date
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapsuleKind {
    Video,
    Letter,
    Document,
}

/// A message addressed to one recipient, released on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeCapsule {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: CapsuleKind,
    pub recipient: String,
    pub release_date: NaiveDate,
}

impl TimeCapsule {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        if self.title.trim().is_empty() {
            errors.push("title", "cannot be empty");
        }
        if self.recipient.trim().is_empty() {
            errors.push("recipient", "cannot be empty");
        }
        errors.into_result()
    }

    pub fn is_released(&self, today: NaiveDate) -> bool {
        today >= self.release_date
    }
}

/// Trusted contact who can help restore access to the owner's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialRecoveryGuardian {
    pub id: String,
    pub name: String,
    pub verified: bool,
    /// Display string such as "< 2h"; not interpreted.
    pub response_time: String,
}

impl SocialRecoveryGuardian {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        if self.name.trim().is_empty() {
            errors.push("name", "cannot be empty");
        }
        errors.into_result()
    }
}

/// One STX price sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StacksPricePoint {
    pub price: f64,
    pub timestamp: DateTime<Utc>,
}

/// STX price history, strictly ordered by timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries(Vec<StacksPricePoint>);

impl PriceSeries {
    /// Sort samples by timestamp; reject negative/non-finite prices and
    /// repeated timestamps.
    pub fn from_points(mut points: Vec<StacksPricePoint>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (i, point) in points.iter().enumerate() {
            if !point.price.is_finite() || point.price < 0.0 {
                errors.push(
                    format!("[{i}].price"),
                    format!("must be a non-negative number (got {})", point.price),
                );
            }
        }

        points.sort_by_key(|p| p.timestamp);
        for pair in points.windows(2) {
            if pair[0].timestamp == pair[1].timestamp {
                errors.push(
                    "timestamp",
                    format!("duplicate sample at {}", pair[1].timestamp.to_rfc3339()),
                );
            }
        }

        errors.into_result().map(|()| Self(points))
    }

    pub fn points(&self) -> &[StacksPricePoint] {
        &self.0
    }

    pub fn latest(&self) -> Option<&StacksPricePoint> {
        self.0.last()
    }

    /// Percent change from the earliest to the latest sample.
    ///
    /// `None` with fewer than two samples or a zero starting price.
    pub fn change_percent(&self) -> Option<f64> {
        let first = self.0.first()?;
        let last = self.0.last()?;
        if self.0.len() < 2 || first.price == 0.0 {
            return None;
        }
        Some((last.price - first.price) / first.price * 100.0)
    }
}
