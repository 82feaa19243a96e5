use super::ids::AtomId;

/// An ordered selection of atoms from a [`System`](super::system::System).
///
/// The order of the ids is the order in which the selection was built and is
/// preserved throughout an analysis; positional indices into a group are
/// translated back to stable atom serials before anything is reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AtomGroup {
    ids: Vec<AtomId>,
}

impl AtomGroup {
    /// Creates a group from an ordered sequence of atom ids.
    pub fn new(ids: Vec<AtomId>) -> Self {
        Self { ids }
    }

    /// Returns the atom ids in selection order.
    pub fn ids(&self) -> &[AtomId] {
        &self.ids
    }

    /// Returns an iterator over the atom ids in selection order.
    pub fn iter(&self) -> impl Iterator<Item = AtomId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
