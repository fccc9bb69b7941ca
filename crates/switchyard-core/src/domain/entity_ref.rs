//! Positional entity references.

use std::fmt;

/// A reference to an entity within a solution.
///
/// Entities live in per-type collections on the solution; identity is
/// positional for the duration of a solve. Moves and selectors address
/// entities exclusively through these references.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityRef {
    /// Index of the entity descriptor (entity type).
    pub descriptor_index: usize,
    /// Index of the entity within its collection.
    pub entity_index: usize,
}

impl EntityRef {
    /// Creates a new entity reference.
    pub fn new(descriptor_index: usize, entity_index: usize) -> Self {
        Self {
            descriptor_index,
            entity_index,
        }
    }
}

impl fmt::Debug for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.descriptor_index, self.entity_index)
    }
}
