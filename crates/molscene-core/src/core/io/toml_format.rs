use super::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::element::{self, UnknownElementSymbol};
use crate::core::models::error::ModelError;
use crate::core::models::molecule::MolecularModel;
use crate::core::models::topology::{Bond, BondOrder};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Read, Write};
use thiserror::Error;
use tracing::debug;

/// Information carried by a TOML model file besides the model itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelMetadata {
    pub name: Option<String>,
}

#[derive(Debug, Error)]
pub enum TomlFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Atom {atom}: {source}")]
    UnknownElement {
        atom: usize,
        source: UnknownElementSymbol,
    },
    #[error("Invalid model: {0}")]
    Model(#[from] ModelError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum ElementSpec {
    Number(u32),
    Symbol(String),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct AtomEntry {
    element: ElementSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u32>,
    position: [f64; 3],
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BondEntry {
    atoms: [usize; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    order: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    atoms: Vec<AtomEntry>,
    #[serde(default)]
    bonds: Vec<BondEntry>,
}

/// The TOML model format.
///
/// ```toml
/// name = "simple"
///
/// [[atoms]]
/// element = "C"        # symbol or atomic number
/// id = 0               # optional, defaults to the atom's position
/// position = [-1.0, 0.0, 0.0]
///
/// [[atoms]]
/// element = 6
/// position = [1.0, 1.0, 0.0]
///
/// [[bonds]]
/// atoms = [0, 1]       # atom positions, not ids
/// order = 1            # optional, defaults to 1
/// ```
pub struct TomlFile;

impl TomlFile {
    fn into_model(document: ModelDocument) -> Result<MolecularModel, TomlFileError> {
        let mut atoms = Vec::with_capacity(document.atoms.len());
        for (position, entry) in document.atoms.into_iter().enumerate() {
            let element_number = match entry.element {
                ElementSpec::Number(n) => n,
                ElementSpec::Symbol(symbol) => element::element_number(&symbol).map_err(
                    |source| TomlFileError::UnknownElement {
                        atom: position,
                        source,
                    },
                )?,
            };
            let id = match entry.id {
                Some(id) => id,
                None => u32::try_from(position).map_err(|_| ModelError::TooManyAtoms(position))?,
            };
            let [x, y, z] = entry.position;
            atoms.push(Atom::at(element_number, x, y, z, id)?);
        }

        let bonds = document
            .bonds
            .into_iter()
            .map(|entry| {
                let order = match entry.order {
                    Some(raw) => BondOrder::new(raw)?,
                    None => BondOrder::default(),
                };
                Bond::new(entry.atoms[0], entry.atoms[1], order)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MolecularModel::new(atoms, bonds)?)
    }

    fn to_document(model: &MolecularModel, metadata: &ModelMetadata) -> ModelDocument {
        let atoms = model
            .atoms()
            .iter()
            .map(|atom| AtomEntry {
                element: match atom.symbol() {
                    Some(symbol) => ElementSpec::Symbol(symbol.to_string()),
                    None => ElementSpec::Number(atom.element_number()),
                },
                id: Some(atom.id()),
                position: [atom.x(), atom.y(), atom.z()],
            })
            .collect();
        let bonds = model
            .bonds()
            .iter()
            .map(|bond| BondEntry {
                atoms: [bond.atom_index1(), bond.atom_index2()],
                order: Some(bond.order().get()),
            })
            .collect();
        ModelDocument {
            name: metadata.name.clone(),
            atoms,
            bonds,
        }
    }
}

impl MolecularFile for TomlFile {
    type Metadata = ModelMetadata;
    type Error = TomlFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<(MolecularModel, Self::Metadata), Self::Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let document: ModelDocument = toml::from_str(&content)?;
        let metadata = ModelMetadata {
            name: document.name.clone(),
        };
        let model = Self::into_model(document)?;
        debug!(
            "Read TOML model {:?} with {} atoms and {} bonds",
            metadata.name,
            model.atom_count(),
            model.bond_count()
        );
        Ok((model, metadata))
    }

    fn write_to(
        model: &MolecularModel,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let text = toml::to_string(&Self::to_document(model, metadata))?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }
}
