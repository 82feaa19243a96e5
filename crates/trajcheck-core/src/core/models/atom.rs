/// Represents a single atom's frame-invariant identity.
///
/// Coordinates deliberately do not live here: positions change every frame
/// and are carried by the per-frame [`Frame`](crate::analysis::frame::Frame)
/// context instead, so the model holds only what stays fixed for the
/// lifetime of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// Alternate-location code from the source structure, if any.
    ///
    /// Structure files may record the same atom at several candidate
    /// positions; duplicated alternate locations are a common source of
    /// steric overlaps.
    pub alt_loc: Option<char>,
}

impl Atom {
    /// Creates a new `Atom` with the given name and no alternate location.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            alt_loc: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_expected_fields() {
        let atom = Atom::new("CA");
        assert_eq!(atom.name, "CA");
        assert_eq!(atom.alt_loc, None);
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let mut atom1 = Atom::new("N");
        atom1.alt_loc = Some('B');
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
