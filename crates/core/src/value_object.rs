//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two `Money`
/// amounts of 100 are the same value regardless of where they came from.
/// To "modify" one, construct a new one; this keeps them safe to copy and
/// share freely.
///
/// The bounds encode the contract: cheap to clone, compared by attributes,
/// printable for logs and tests.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
