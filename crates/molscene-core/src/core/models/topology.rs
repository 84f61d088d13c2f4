use super::error::ModelError;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;

/// A positive integer bond order (1 = single, 2 = double, ...).
///
/// Orders are capped at `i32::MAX` so they survive export as a 32-bit signed
/// integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BondOrder(NonZeroU32);

impl BondOrder {
    pub const SINGLE: Self = Self(NonZeroU32::MIN);
    pub const DOUBLE: Self = Self(NonZeroU32::MIN.saturating_add(1));
    pub const TRIPLE: Self = Self(NonZeroU32::MIN.saturating_add(2));

    /// Creates a bond order from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidBondOrder`] for zero or values above `i32::MAX`.
    pub fn new(order: u32) -> Result<Self, ModelError> {
        if order > i32::MAX as u32 {
            return Err(ModelError::InvalidBondOrder(order as i64));
        }
        NonZeroU32::new(order)
            .map(Self)
            .ok_or(ModelError::InvalidBondOrder(0))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for BondOrder {
    fn default() -> Self {
        Self::SINGLE
    }
}

#[derive(Debug, Error)]
#[error("Invalid bond order string: '{0}'")]
pub struct ParseBondOrderError(String);

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "s" | "single" => Ok(Self::SINGLE),
            "d" | "double" => Ok(Self::DOUBLE),
            "t" | "triple" => Ok(Self::TRIPLE),
            other => other
                .parse::<u32>()
                .ok()
                .and_then(|n| Self::new(n).ok())
                .ok_or_else(|| ParseBondOrderError(s.to_string())),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            1 => write!(f, "Single"),
            2 => write!(f, "Double"),
            3 => write!(f, "Triple"),
            n => write!(f, "{}", n),
        }
    }
}

/// A connectivity edge between two atoms of one model.
///
/// The indices are *positions* in the owning model's atom sequence, not atom ids.
/// They are fixed at construction; only the order may change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    atom_index1: usize,
    atom_index2: usize,
    order: BondOrder,
}

impl Bond {
    /// Creates a bond between two distinct atom positions.
    ///
    /// Whether the indices exist is checked later, by
    /// [`MolecularModel::new`](super::molecule::MolecularModel::new).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SelfBond`] if both indices are equal.
    pub fn new(atom_index1: usize, atom_index2: usize, order: BondOrder) -> Result<Self, ModelError> {
        if atom_index1 == atom_index2 {
            return Err(ModelError::SelfBond { index: atom_index1 });
        }
        Ok(Self {
            atom_index1,
            atom_index2,
            order,
        })
    }

    /// A single bond between two atom positions.
    pub fn single(atom_index1: usize, atom_index2: usize) -> Result<Self, ModelError> {
        Self::new(atom_index1, atom_index2, BondOrder::SINGLE)
    }

    pub(crate) fn from_trusted(atom_index1: usize, atom_index2: usize, order: BondOrder) -> Self {
        Self {
            atom_index1,
            atom_index2,
            order,
        }
    }

    #[inline]
    pub fn atom_index1(&self) -> usize {
        self.atom_index1
    }

    #[inline]
    pub fn atom_index2(&self) -> usize {
        self.atom_index2
    }

    #[inline]
    pub fn order(&self) -> BondOrder {
        self.order
    }

    pub fn set_order(&mut self, order: BondOrder) {
        self.order = order;
    }

    pub fn contains(&self, atom_index: usize) -> bool {
        self.atom_index1 == atom_index || self.atom_index2 == atom_index
    }

    /// The other end of the bond, if `atom_index` is one of its ends.
    pub fn partner(&self, atom_index: usize) -> Option<usize> {
        if self.atom_index1 == atom_index {
            Some(self.atom_index2)
        } else if self.atom_index2 == atom_index {
            Some(self.atom_index1)
        } else {
            None
        }
    }
}
