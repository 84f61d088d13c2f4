//! # Core Models Module
//!
//! The data structures that describe one molecule's topology and geometry.
//!
//! ## Overview
//!
//! A [`molecule::MolecularModel`] owns an ordered sequence of [`atom::Atom`]s and an
//! ordered sequence of [`topology::Bond`]s. Bonds refer to atoms by their *position*
//! in the atom sequence, never by atom id, so reordering atoms requires remapping
//! bond indices.
//!
//! ## Key Components
//!
//! - [`atom`] - Immutable atom records (element, coordinates, id)
//! - [`element`] - Periodic-table symbol lookup
//! - [`topology`] - Bonds and bond orders
//! - [`molecule`] - The validated model aggregate
//! - [`builder`] - Incremental construction with automatic ids
//! - [`reference`] - Fixed reference molecules (ethanol, ...)
//! - [`error`] - Validation errors shared by the types above
//!
//! ## Usage
//!
//! ```
//! use molscene::core::models::atom::Atom;
//! use molscene::core::models::molecule::MolecularModel;
//! use molscene::core::models::topology::Bond;
//! use nalgebra::Point3;
//!
//! let atoms = vec![
//!     Atom::new(6, Point3::new(0.0, 0.0, 0.0), 0)?,
//!     Atom::new(6, Point3::new(1.0, 1.0, 0.0), 1)?,
//! ];
//! let bonds = vec![Bond::single(0, 1)?];
//! let model = MolecularModel::new(atoms, bonds)?;
//! assert_eq!(model.bond_count(), 1);
//! # Ok::<(), molscene::core::models::error::ModelError>(())
//! ```

pub mod atom;
pub mod builder;
pub mod element;
pub mod error;
pub mod molecule;
pub mod reference;
pub mod topology;
