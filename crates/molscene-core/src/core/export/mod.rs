//! Flat, renderer-facing projection of a [`MolecularModel`].
//!
//! [`AtomRecord`] and [`BondRecord`] have a fixed `#[repr(C)]` layout so they can
//! cross a foreign-function boundary or be written as raw bytes. Coordinates are
//! narrowed from `f64` to `f32` on export. The narrowing is lossy and part of the
//! contract: it is the precision renderers consume.

pub mod csv;

use crate::core::models::atom::Atom;
use crate::core::models::error::ModelError;
use crate::core::models::molecule::MolecularModel;
use crate::core::models::topology::{Bond, BondOrder};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// One atom as seen by a renderer: `element_number`, `id`, then `x, y, z`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct AtomRecord {
    pub element_number: i32,
    pub id: i32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// One bond as seen by a renderer: two atom positions and the order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct BondRecord {
    pub atom_index1: i32,
    pub atom_index2: i32,
    pub order: i32,
}

impl From<&Atom> for AtomRecord {
    fn from(atom: &Atom) -> Self {
        // Atom construction keeps both integers within i32.
        Self {
            element_number: atom.element_number() as i32,
            id: atom.id() as i32,
            x: atom.x() as f32,
            y: atom.y() as f32,
            z: atom.z() as f32,
        }
    }
}

impl From<&Bond> for BondRecord {
    fn from(bond: &Bond) -> Self {
        // Model construction keeps atom indices below i32::MAX.
        Self {
            atom_index1: bond.atom_index1() as i32,
            atom_index2: bond.atom_index2() as i32,
            order: bond.order().get() as i32,
        }
    }
}

impl TryFrom<AtomRecord> for Atom {
    type Error = ModelError;

    fn try_from(record: AtomRecord) -> Result<Self, Self::Error> {
        let element_number = u32::try_from(record.element_number)
            .map_err(|_| ModelError::InvalidElementNumber(record.element_number as i64))?;
        let id =
            u32::try_from(record.id).map_err(|_| ModelError::AtomIdOutOfRange(record.id as i64))?;
        Atom::at(
            element_number,
            record.x as f64,
            record.y as f64,
            record.z as f64,
            id,
        )
    }
}

impl TryFrom<BondRecord> for Bond {
    type Error = ModelError;

    fn try_from(record: BondRecord) -> Result<Self, Self::Error> {
        let index = |raw: i32| usize::try_from(raw).map_err(|_| ModelError::NegativeIndex(raw as i64));
        let order = u32::try_from(record.order)
            .map_err(|_| ModelError::InvalidBondOrder(record.order as i64))
            .and_then(BondOrder::new)?;
        Bond::new(index(record.atom_index1)?, index(record.atom_index2)?, order)
    }
}

/// One record per atom, in `model.atoms()` order.
pub fn export_atoms(model: &MolecularModel) -> Vec<AtomRecord> {
    model.atoms().iter().map(AtomRecord::from).collect()
}

/// One record per bond, in `model.bonds()` order.
pub fn export_bonds(model: &MolecularModel) -> Vec<BondRecord> {
    model.bonds().iter().map(BondRecord::from).collect()
}

/// Both record sequences of one model, ready to hand to a backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneExport {
    pub atoms: Vec<AtomRecord>,
    pub bonds: Vec<BondRecord>,
}

impl SceneExport {
    pub fn from_model(model: &MolecularModel) -> Self {
        Self {
            atoms: export_atoms(model),
            bonds: export_bonds(model),
        }
    }

    /// Rebuilds a model from the records, through the validating constructor.
    ///
    /// The result equals the exported model except for coordinates, which carry
    /// only `f32` precision.
    pub fn to_model(&self) -> Result<MolecularModel, ModelError> {
        let atoms = self
            .atoms
            .iter()
            .map(|&r| Atom::try_from(r))
            .collect::<Result<Vec<_>, _>>()?;
        let bonds = self
            .bonds
            .iter()
            .map(|&r| Bond::try_from(r))
            .collect::<Result<Vec<_>, _>>()?;
        MolecularModel::new(atoms, bonds)
    }

    /// The atom records as raw bytes (20 bytes per record, native endianness).
    pub fn atom_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.atoms)
    }

    /// The bond records as raw bytes (12 bytes per record, native endianness).
    pub fn bond_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.bonds)
    }
}
