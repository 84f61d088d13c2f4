//! # Core Module
//!
//! The stateless foundation of molscene: the molecular data model, the flat
//! export consumed by rendering backends, and file formats for loading and saving
//! models.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bonds, the validated
//!   `MolecularModel` aggregate and the fixed reference molecules
//! - **Scene Export** ([`export`]) - Fixed-layout `AtomRecord`/`BondRecord`
//!   projections of a model, plus CSV tables of those records
//! - **File I/O** ([`io`]) - The `MolecularFile` trait and the TOML model format
//!
//! Nothing in this module holds process-wide state; every factory returns a fresh,
//! independently owned value.

pub mod export;
pub mod io;
pub mod models;
