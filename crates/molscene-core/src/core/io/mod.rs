//! Reading and writing molecular model files.
//!
//! [`traits::MolecularFile`] is the common interface; [`toml_format::TomlFile`] is the
//! human-editable format used by the command-line tools.

pub mod toml_format;
pub mod traits;
