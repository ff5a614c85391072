/// One atom of a docked pose: its serial, name, and Cartesian position as
/// written in the mol2 ATOM table.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub id: usize,
    pub name: String,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(id: usize, name: impl Into<String>, position: [f64; 3]) -> Self {
        Self {
            id,
            name: name.into(),
            position,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Atom) -> f64 {
        let dx = self.position[0] - other.position[0];
        let dy = self.position[1] - other.position[1];
        let dz = self.position[2] - other.position[2];
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}
