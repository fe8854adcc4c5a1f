//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attribute
/// values are the same value. In this workspace `Assets` and `WillCondition`
/// are value objects, while `Beneficiary` and `NavigationTab` are entities.
///
/// To "modify" a value object, build a new one and replace it wholesale
/// (e.g. the `SetAssets` command replaces the will's `Assets`).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
