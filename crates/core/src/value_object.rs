//! Value object trait: equality by value, not identity.
//!
//! Items in the inventory carry no identifier; the derived pieces of an item
//! (its classified name, its category) are plain values compared field by field.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two classified
/// names with the same base name and conjured flag are the same value, no
/// matter which item they were computed from.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects show up in logs and test failures
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Shelf {
///     aisle: u8,
///     slot: u8,
/// }
///
/// impl ValueObject for Shelf {}
///
/// let a = Shelf { aisle: 1, slot: 4 };
/// let b = Shelf { aisle: 1, slot: 4 };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
