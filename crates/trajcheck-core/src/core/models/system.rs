use super::atom::Atom;
use super::group::AtomGroup;
use super::ids::AtomId;
use super::topology::Bond;
use slotmap::{SecondaryMap, SlotMap};
use std::collections::HashSet;

/// Represents a complete molecular system: atoms, their stable serials, and
/// covalent bond connectivity.
///
/// This struct is the central, frame-invariant data structure of a scan.
/// Atoms are stored in a slot map for efficient ID management; each atom is
/// additionally assigned a stable 0-based serial in insertion order, which is
/// the identifier used in anything reported to callers. Whether the system
/// carries bond information at all is decided here, once, rather than probed
/// dynamically during a scan.
#[derive(Debug, Clone, Default)]
pub struct System {
    /// Primary storage for atoms using a slot map for efficient ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// Atom ids in insertion order; the position of an id is its serial.
    atom_order: Vec<AtomId>,
    /// Stable 0-based serial for each atom.
    serials: SecondaryMap<AtomId, usize>,
    /// List of all bonds in the system.
    bonds: Vec<Bond>,
}

impl System {
    /// Creates a new, empty system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an atom to the system, assigning it the next stable serial.
    ///
    /// # Arguments
    ///
    /// * `atom` - The atom to add.
    ///
    /// # Return
    ///
    /// The ID of the newly inserted atom.
    pub fn add_atom(&mut self, atom: Atom) -> AtomId {
        let atom_id = self.atoms.insert(atom);
        self.serials.insert(atom_id, self.atom_order.len());
        self.atom_order.push(atom_id);
        atom_id
    }

    /// Retrieves an immutable reference to an atom by its ID.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the atom exists, otherwise `None`.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Retrieves a mutable reference to an atom by its ID.
    ///
    /// # Return
    ///
    /// Returns `Some(&mut Atom)` if the atom exists, otherwise `None`.
    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id)
    }

    /// Returns an iterator over all atoms in insertion (serial) order.
    ///
    /// # Return
    ///
    /// An iterator yielding `(AtomId, &Atom)` pairs.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atom_order
            .iter()
            .filter_map(|&id| self.atoms.get(id).map(|atom| (id, atom)))
    }

    /// The number of atoms in the system.
    pub fn n_atoms(&self) -> usize {
        self.atom_order.len()
    }

    /// The stable 0-based serial of an atom.
    ///
    /// # Return
    ///
    /// Returns `Some(serial)` if the atom exists, otherwise `None`.
    pub fn serial(&self, id: AtomId) -> Option<usize> {
        self.serials.get(id).copied()
    }

    /// Looks up an atom ID by its stable serial.
    pub fn atom_id_by_serial(&self, serial: usize) -> Option<AtomId> {
        self.atom_order.get(serial).copied()
    }

    /// Adds a bond between two distinct atoms.
    ///
    /// This method is idempotent; adding an existing bond succeeds without
    /// creating duplicates.
    ///
    /// # Arguments
    ///
    /// * `atom_a` - ID of the first atom.
    /// * `atom_b` - ID of the second atom.
    ///
    /// # Return
    ///
    /// Returns `Some(())` if successful, otherwise `None` (e.g., if either
    /// atom does not exist, or both ids name the same atom).
    pub fn add_bond(&mut self, atom_a: AtomId, atom_b: AtomId) -> Option<()> {
        if atom_a == atom_b
            || !self.atoms.contains_key(atom_a)
            || !self.atoms.contains_key(atom_b)
        {
            return None;
        }

        let exists = self
            .bonds
            .iter()
            .any(|bond| bond.contains(atom_a) && bond.contains(atom_b));
        if !exists {
            self.bonds.push(Bond::new(atom_a, atom_b));
        }
        Some(())
    }

    /// Returns a slice of all bonds in the system, in insertion order.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Whether the system carries any bond information at all.
    ///
    /// Bond checking is refused up front on systems where this is `false`.
    pub fn has_bonds(&self) -> bool {
        !self.bonds.is_empty()
    }

    /// Selects atoms matching a predicate into an ordered group.
    ///
    /// Atoms are visited and collected in serial order.
    pub fn select<F>(&self, mut predicate: F) -> AtomGroup
    where
        F: FnMut(AtomId, &Atom) -> bool,
    {
        AtomGroup::new(
            self.atoms_iter()
                .filter(|&(id, atom)| predicate(id, atom))
                .map(|(id, _)| id)
                .collect(),
        )
    }

    /// Selects every atom in the system, in serial order.
    pub fn all_atoms(&self) -> AtomGroup {
        AtomGroup::new(self.atom_order.clone())
    }

    /// Returns the bonds confined to a group: those whose both endpoints are
    /// members of the group. Bond order follows the system's bond list.
    pub fn bonds_within(&self, group: &AtomGroup) -> Vec<Bond> {
        let members: HashSet<AtomId> = group.iter().collect();
        self.bonds
            .iter()
            .filter(|bond| members.contains(&bond.atom_a) && members.contains(&bond.atom_b))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_bonded_test_system() -> (System, Vec<AtomId>) {
        let mut system = System::new();
        let ids: Vec<AtomId> = ["N", "CA", "C", "O"]
            .iter()
            .map(|name| system.add_atom(Atom::new(name)))
            .collect();
        system.add_bond(ids[0], ids[1]).unwrap();
        system.add_bond(ids[1], ids[2]).unwrap();
        system.add_bond(ids[2], ids[3]).unwrap();
        (system, ids)
    }

    #[test]
    fn atoms_receive_serials_in_insertion_order() {
        let (system, ids) = create_bonded_test_system();
        assert_eq!(system.n_atoms(), 4);
        for (expected, &id) in ids.iter().enumerate() {
            assert_eq!(system.serial(id), Some(expected));
            assert_eq!(system.atom_id_by_serial(expected), Some(id));
        }
        assert_eq!(system.atom_id_by_serial(4), None);
    }

    #[test]
    fn atoms_iter_follows_serial_order() {
        let (system, ids) = create_bonded_test_system();
        let iterated: Vec<AtomId> = system.atoms_iter().map(|(id, _)| id).collect();
        assert_eq!(iterated, ids);
        let names: Vec<&str> = system
            .atoms_iter()
            .map(|(_, atom)| atom.name.as_str())
            .collect();
        assert_eq!(names, vec!["N", "CA", "C", "O"]);
    }

    #[test]
    fn add_bond_is_idempotent() {
        let (mut system, ids) = create_bonded_test_system();
        assert_eq!(system.bonds().len(), 3);
        system.add_bond(ids[1], ids[0]).unwrap();
        assert_eq!(system.bonds().len(), 3, "reversed duplicate must not grow the list");
    }

    #[test]
    fn add_bond_rejects_missing_and_self_pairs() {
        let (mut system, ids) = create_bonded_test_system();
        assert!(system.add_bond(ids[0], ids[0]).is_none());

        let mut other = System::new();
        let foreign = other.add_atom(Atom::new("X"));
        assert!(system.add_bond(ids[0], foreign).is_none());
    }

    #[test]
    fn has_bonds_reflects_topology_presence() {
        let (bonded, _) = create_bonded_test_system();
        assert!(bonded.has_bonds());

        let mut bare = System::new();
        bare.add_atom(Atom::new("CA"));
        assert!(!bare.has_bonds());
    }

    #[test]
    fn select_collects_matching_atoms_in_order() {
        let (system, ids) = create_bonded_test_system();
        let carbons = system.select(|_, atom| atom.name.starts_with('C'));
        assert_eq!(carbons.ids(), &[ids[1], ids[2]]);

        let all = system.all_atoms();
        assert_eq!(all.ids(), ids.as_slice());
    }

    #[test]
    fn bonds_within_confines_to_group_members() {
        let (system, ids) = create_bonded_test_system();

        let backbone = AtomGroup::new(vec![ids[0], ids[1], ids[2]]);
        let confined = system.bonds_within(&backbone);
        assert_eq!(confined.len(), 2);
        assert!(confined.iter().all(|b| b.contains(ids[1])));

        let ends = AtomGroup::new(vec![ids[0], ids[3]]);
        assert!(system.bonds_within(&ends).is_empty());
    }

    #[test]
    fn atom_mut_allows_editing_identity() {
        let (mut system, ids) = create_bonded_test_system();
        system.atom_mut(ids[0]).unwrap().alt_loc = Some('B');
        assert_eq!(system.atom(ids[0]).unwrap().alt_loc, Some('B'));
    }
}
