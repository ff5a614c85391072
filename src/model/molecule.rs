use super::atom::Atom;

/// One molecule's record out of a multi-molecule file: its pose name and the
/// atoms of its ATOM table. The atom list belongs to this molecule alone; a
/// new record starts from an empty list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Molecule {
    pub name: String,
    pub atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(name: impl Into<String>, atoms: Vec<Atom>) -> Self {
        Self {
            name: name.into(),
            atoms,
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}
