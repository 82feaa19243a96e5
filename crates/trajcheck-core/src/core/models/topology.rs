use super::ids::AtomId;

/// A covalent bond between two atoms.
///
/// Bonds are unordered: a bond between `a` and `b` is the same bond as one
/// between `b` and `a`. The length of a bond is not stored here; it is a
/// per-frame quantity computed from the current positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom_a: AtomId,
    pub atom_b: AtomId,
}

impl Bond {
    pub fn new(atom_a: AtomId, atom_b: AtomId) -> Self {
        Self { atom_a, atom_b }
    }

    /// Returns `true` if the bond involves the given atom.
    pub fn contains(&self, atom_id: AtomId) -> bool {
        self.atom_a == atom_id || self.atom_b == atom_id
    }

    /// Returns the other endpoint of the bond, if `atom_id` is one of them.
    pub fn partner_of(&self, atom_id: AtomId) -> Option<AtomId> {
        if self.atom_a == atom_id {
            Some(self.atom_b)
        } else if self.atom_b == atom_id {
            Some(self.atom_a)
        } else {
            None
        }
    }
}
