//! Entity trait: a record with a stable identity.

/// Entity marker + minimal interface.
///
/// Every row shown in a list view is an entity: two rows with the same id are
/// the same record, and ids are unique within one collection snapshot.
pub trait Entity {
    /// Identifier type (provider ids are usually opaque strings).
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
