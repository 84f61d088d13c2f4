use super::atom::Atom;
use super::error::ModelError;
use super::molecule::MolecularModel;
use super::topology::{Bond, BondOrder};
use nalgebra::Point3;

/// Incremental construction of a [`MolecularModel`].
///
/// Atoms added with [`add_atom`](Self::add_atom) receive sequential ids starting
/// from the number of atoms already added, so a model built only that way has
/// `id == position` for every atom. The first invalid step is remembered and
/// returned by [`build`](Self::build); later steps are ignored.
#[derive(Debug, Default)]
pub struct MolecularModelBuilder {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    error: Option<ModelError>,
}

impl MolecularModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_atom(&mut self, element_number: u32, position: Point3<f64>) -> &mut Self {
        let id = u32::try_from(self.atoms.len()).unwrap_or(u32::MAX);
        self.add_atom_with_id(element_number, position, id)
    }

    pub fn add_atom_with_id(
        &mut self,
        element_number: u32,
        position: Point3<f64>,
        id: u32,
    ) -> &mut Self {
        if self.error.is_none() {
            match Atom::new(element_number, position, id) {
                Ok(atom) => self.atoms.push(atom),
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    pub fn add_bond(&mut self, atom_index1: usize, atom_index2: usize, order: BondOrder) -> &mut Self {
        if self.error.is_none() {
            match Bond::new(atom_index1, atom_index2, order) {
                Ok(bond) => self.bonds.push(bond),
                Err(e) => self.error = Some(e),
            }
        }
        self
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Validates and returns the model; duplicate ids are tolerated.
    pub fn build(self) -> Result<MolecularModel, ModelError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        MolecularModel::new(self.atoms, self.bonds)
    }

    /// Validates and returns the model, rejecting duplicate ids.
    pub fn build_strict(self) -> Result<MolecularModel, ModelError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        MolecularModel::with_unique_ids(self.atoms, self.bonds)
    }
}
