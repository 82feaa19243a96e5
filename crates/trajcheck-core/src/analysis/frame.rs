use crate::core::models::cell::PeriodicBox;
use crate::core::models::ids::AtomId;
use crate::core::models::system::System;
use nalgebra::Point3;
use slotmap::SecondaryMap;

/// One time-step snapshot of a trajectory: the 0-based frame index, the
/// current atom positions, and the periodic cell for that frame.
///
/// A `Frame` is an explicit value object handed to every per-frame call, so
/// checks depend on nothing but their inputs; there is no shared trajectory
/// state being mutated behind the scenes as frames advance.
#[derive(Debug, Clone)]
pub struct Frame {
    /// 0-based position of this frame within the trajectory.
    pub index: usize,
    /// The periodic cell distances are measured under for this frame.
    pub cell: PeriodicBox,
    positions: SecondaryMap<AtomId, Point3<f64>>,
}

impl Frame {
    /// Creates an empty frame; positions are filled in with
    /// [`set_position`](Self::set_position).
    pub fn new(index: usize, cell: PeriodicBox) -> Self {
        Self {
            index,
            cell,
            positions: SecondaryMap::new(),
        }
    }

    /// Builds a frame by pairing a system's atoms, in serial order, with an
    /// ordered coordinate slice.
    ///
    /// # Return
    ///
    /// Returns `None` if the coordinate count does not match the system's
    /// atom count.
    pub fn from_coords(
        index: usize,
        cell: PeriodicBox,
        system: &System,
        coords: &[Point3<f64>],
    ) -> Option<Self> {
        if coords.len() != system.n_atoms() {
            return None;
        }
        let mut frame = Self::new(index, cell);
        for ((atom_id, _), &position) in system.atoms_iter().zip(coords) {
            frame.set_position(atom_id, position);
        }
        Some(frame)
    }

    /// Records the position of an atom for this frame.
    pub fn set_position(&mut self, atom_id: AtomId, position: Point3<f64>) {
        self.positions.insert(atom_id, position);
    }

    /// The position of an atom in this frame, if recorded.
    pub fn position(&self, atom_id: AtomId) -> Option<Point3<f64>> {
        self.positions.get(atom_id).copied()
    }

    /// The number of atoms with a recorded position.
    pub fn n_positions(&self) -> usize {
        self.positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;

    fn test_cell() -> PeriodicBox {
        PeriodicBox::orthorhombic([10.0, 10.0, 10.0]).unwrap()
    }

    #[test]
    fn set_and_get_position() {
        let mut system = System::new();
        let id = system.add_atom(Atom::new("CA"));

        let mut frame = Frame::new(0, test_cell());
        assert_eq!(frame.position(id), None);

        frame.set_position(id, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(frame.position(id), Some(Point3::new(1.0, 2.0, 3.0)));
        assert_eq!(frame.n_positions(), 1);
    }

    #[test]
    fn from_coords_maps_serial_order() {
        let mut system = System::new();
        let n = system.add_atom(Atom::new("N"));
        let ca = system.add_atom(Atom::new("CA"));

        let coords = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.5, 0.0, 0.0)];
        let frame = Frame::from_coords(7, test_cell(), &system, &coords).unwrap();

        assert_eq!(frame.index, 7);
        assert_eq!(frame.position(n), Some(coords[0]));
        assert_eq!(frame.position(ca), Some(coords[1]));
    }

    #[test]
    fn from_coords_rejects_length_mismatch() {
        let mut system = System::new();
        system.add_atom(Atom::new("N"));
        system.add_atom(Atom::new("CA"));

        let coords = [Point3::origin()];
        assert!(Frame::from_coords(0, test_cell(), &system, &coords).is_none());
    }
}
