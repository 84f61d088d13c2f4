use super::atom::Atom;
use super::error::ModelError;
use super::topology::Bond;
use nalgebra::{Point3, Vector3};
use std::collections::HashMap;
use tracing::warn;

/// One molecule's topology and geometry: an ordered atom sequence and an ordered
/// bond sequence.
///
/// The model exclusively owns both sequences and is never mutated after
/// construction; adding or removing atoms means building a new model (see
/// [`into_parts`](Self::into_parts)). Atom order only matters because bonds refer
/// to atoms by position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MolecularModel {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl MolecularModel {
    /// Builds a model from caller-supplied atoms and bonds.
    ///
    /// Duplicate atom ids are accepted and logged at `warn` level; use
    /// [`with_unique_ids`](Self::with_unique_ids) to reject them.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidBondReference`] for the first bond whose index is
    /// outside `[0, atoms.len())`, and [`ModelError::TooManyAtoms`] if the atom count
    /// cannot be expressed as a 32-bit index.
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Result<Self, ModelError> {
        let model = Self::validated(atoms, bonds)?;
        let duplicates = model.duplicate_ids();
        if !duplicates.is_empty() {
            warn!(
                "Model contains {} duplicated atom id(s): {:?}",
                duplicates.len(),
                duplicates
            );
        }
        Ok(model)
    }

    /// Like [`new`](Self::new), but additionally requires atom ids to be unique.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidAtomId`] naming the first id seen twice, in
    /// addition to the errors of [`new`](Self::new).
    pub fn with_unique_ids(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Result<Self, ModelError> {
        let model = Self::validated(atoms, bonds)?;
        let mut seen: HashMap<u32, usize> = HashMap::with_capacity(model.atoms.len());
        for (position, atom) in model.atoms.iter().enumerate() {
            if let Some(&first) = seen.get(&atom.id()) {
                return Err(ModelError::InvalidAtomId {
                    id: atom.id(),
                    first,
                    second: position,
                });
            }
            seen.insert(atom.id(), position);
        }
        Ok(model)
    }

    fn validated(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Result<Self, ModelError> {
        if atoms.len() > i32::MAX as usize {
            return Err(ModelError::TooManyAtoms(atoms.len()));
        }
        let atom_count = atoms.len();
        for (bond_idx, bond) in bonds.iter().enumerate() {
            for index in [bond.atom_index1(), bond.atom_index2()] {
                if index >= atom_count {
                    return Err(ModelError::InvalidBondReference {
                        bond: bond_idx,
                        index,
                        atom_count,
                    });
                }
            }
        }
        Ok(Self { atoms, bonds })
    }

    pub(crate) fn from_trusted(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        debug_assert!(
            bonds
                .iter()
                .all(|b| b.atom_index1() < atoms.len() && b.atom_index2() < atoms.len())
        );
        Self { atoms, bonds }
    }

    #[inline]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    #[inline]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// The atom at a sequence position.
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Finds the first atom carrying `id`, returning its position and the atom.
    pub fn find_atom_by_id(&self, id: u32) -> Option<(usize, &Atom)> {
        self.atoms.iter().enumerate().find(|(_, a)| a.id() == id)
    }

    /// Positions of all atoms bonded to the atom at `index`, in bond order.
    pub fn bonded_atoms(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.bonds.iter().filter_map(move |b| b.partner(index))
    }

    /// Ids that appear on more than one atom, sorted ascending.
    pub fn duplicate_ids(&self) -> Vec<u32> {
        let mut counts: HashMap<u32, usize> = HashMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.id()).or_default() += 1;
        }
        let mut duplicates: Vec<u32> = counts
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(id, _)| id)
            .collect();
        duplicates.sort_unstable();
        duplicates
    }

    /// Geometric center of all atoms, or `None` for an empty model.
    pub fn centroid(&self) -> Option<Point3<f64>> {
        if self.atoms.is_empty() {
            return None;
        }
        let sum: Vector3<f64> = self.atoms.iter().map(|a| a.position().coords).sum();
        Some(Point3::from(sum / self.atoms.len() as f64))
    }

    /// Largest distance from the centroid to any atom; `0.0` for empty models.
    pub fn bounding_radius(&self) -> f64 {
        let Some(center) = self.centroid() else {
            return 0.0;
        };
        self.atoms
            .iter()
            .map(|a| (a.position() - center).norm())
            .fold(0.0, f64::max)
    }

    /// Hands the atom and bond sequences back to the caller, e.g. to build an
    /// edited copy.
    pub fn into_parts(self) -> (Vec<Atom>, Vec<Bond>) {
        (self.atoms, self.bonds)
    }
}
