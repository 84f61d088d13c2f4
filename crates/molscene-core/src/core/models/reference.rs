//! Fixed reference molecules.
//!
//! The literal geometry below is an external contract: comparison tests against
//! other implementations expect these exact `f64` values.

use super::atom::Atom;
use super::molecule::MolecularModel;
use super::topology::{Bond, BondOrder};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const CARBON: u32 = 6;
const OXYGEN: u32 = 8;
const HYDROGEN: u32 = 1;

// (element, x, y, z); the atom id equals the position.
const ETHANOL_ATOMS: [(u32, f64, f64, f64); 9] = [
    (CARBON, -0.4059, -0.0951, 0.0),
    (CARBON, 0.2102, -0.0646, 0.0),
    (OXYGEN, 0.3722, 0.4851, 0.0),
    (HYDROGEN, -0.5339, -0.5162, 0.0),
    (HYDROGEN, -0.5636, 0.1050, 0.3589),
    (HYDROGEN, -0.5636, 0.1050, -0.3589),
    (HYDROGEN, 0.3666, -0.2657, 0.3592),
    (HYDROGEN, 0.3666, -0.2657, -0.3592),
    (HYDROGEN, 0.7515, 0.5122, 0.0),
];

const ETHANOL_BONDS: [(usize, usize, u32); 8] = [
    (0, 1, 1), // C-C
    (1, 2, 1), // C-O
    (1, 6, 1),
    (1, 7, 1),
    (0, 5, 1),
    (0, 4, 1),
    (0, 3, 1),
    (2, 8, 1), // O-H
];

const SIMPLE_ATOMS: [(u32, f64, f64, f64); 2] = [(CARBON, -1.0, 0.0, 0.0), (CARBON, 1.0, 1.0, 0.0)];

const SIMPLE_BONDS: [(usize, usize, u32); 1] = [(0, 1, 1)];

const TRIAD_ATOMS: [(u32, f64, f64, f64); 3] = [
    (12, 0.1111, 0.2222, 0.3333),
    (13, 0.4444, 0.5555, 0.6666),
    (14, 777.0, 888.0, 999.0),
];

const TRIAD_BONDS: [(usize, usize, u32); 2] = [(0, 1, 1), (1, 2, 2)];

fn from_literals(atoms: &[(u32, f64, f64, f64)], bonds: &[(usize, usize, u32)]) -> MolecularModel {
    let atoms = atoms
        .iter()
        .enumerate()
        .map(|(i, &(element, x, y, z))| Atom::from_trusted(element, x, y, z, i as u32))
        .collect();
    let bonds = bonds
        .iter()
        .map(|&(i, j, order)| {
            let order = BondOrder::new(order).unwrap_or_default();
            Bond::from_trusted(i, j, order)
        })
        .collect();
    MolecularModel::from_trusted(atoms, bonds)
}

impl MolecularModel {
    /// Ethanol: 9 atoms (2 C, 1 O, 6 H) and 8 single bonds.
    pub fn ethanol() -> Self {
        from_literals(&ETHANOL_ATOMS, &ETHANOL_BONDS)
    }

    /// Two carbons at (-1, 0, 0) and (1, 1, 0) joined by a single bond.
    pub fn simple() -> Self {
        from_literals(&SIMPLE_ATOMS, &SIMPLE_BONDS)
    }

    /// Mg-Al=Si chain with one far-away atom; handy for exercising unstyled
    /// elements, double bonds and large coordinates.
    pub fn triad() -> Self {
        from_literals(&TRIAD_ATOMS, &TRIAD_BONDS)
    }
}

/// The named reference molecules, for lookups by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceMolecule {
    Ethanol,
    Simple,
    Triad,
}

impl ReferenceMolecule {
    pub const ALL: [ReferenceMolecule; 3] = [Self::Ethanol, Self::Simple, Self::Triad];

    pub fn build(self) -> MolecularModel {
        match self {
            Self::Ethanol => MolecularModel::ethanol(),
            Self::Simple => MolecularModel::simple(),
            Self::Triad => MolecularModel::triad(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ethanol => "ethanol",
            Self::Simple => "simple",
            Self::Triad => "triad",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reference molecule '{0}' (expected one of: ethanol, simple, triad)")]
pub struct UnknownReferenceMolecule(pub String);

impl FromStr for ReferenceMolecule {
    type Err = UnknownReferenceMolecule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownReferenceMolecule(s.to_string()))
    }
}

impl fmt::Display for ReferenceMolecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
