use crate::cli::ModelSource;
use crate::error::{CliError, Result};
use molscene::core::io::{toml_format::TomlFile, traits::MolecularFile};
use molscene::core::models::molecule::MolecularModel;
use tracing::info;

/// A loaded model and the name it should be reported under.
pub struct LoadedModel {
    pub model: MolecularModel,
    pub name: Option<String>,
}

pub fn load(source: &ModelSource) -> Result<LoadedModel> {
    match (source.molecule, &source.input) {
        (Some(molecule), None) => {
            info!("Building reference molecule '{}'", molecule);
            Ok(LoadedModel {
                model: molecule.build(),
                name: Some(molecule.name().to_string()),
            })
        }
        (None, Some(path)) => {
            info!("Loading model from {:?}", path);
            let (model, metadata) =
                TomlFile::read_from_path(path).map_err(|e| CliError::ModelFile {
                    path: path.clone(),
                    source: e,
                })?;
            Ok(LoadedModel {
                model,
                name: metadata.name,
            })
        }
        _ => Err(CliError::Argument(
            "exactly one of --molecule or --input is required".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molscene::core::io::toml_format::ModelMetadata;
    use molscene::core::models::reference::ReferenceMolecule;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn reference_molecules_are_named() {
        let loaded = load(&ModelSource {
            molecule: Some(ReferenceMolecule::Simple),
            input: None,
        })
        .unwrap();
        assert_eq!(loaded.model, MolecularModel::simple());
        assert_eq!(loaded.name.as_deref(), Some("simple"));
    }

    #[test]
    fn files_are_read_with_their_metadata() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("triad.toml");
        let metadata = ModelMetadata {
            name: Some("triad".to_string()),
        };
        TomlFile::write_to_path(&MolecularModel::triad(), &metadata, &path).unwrap();

        let loaded = load(&ModelSource {
            molecule: None,
            input: Some(path),
        })
        .unwrap();
        assert_eq!(loaded.model, MolecularModel::triad());
        assert_eq!(loaded.name.as_deref(), Some("triad"));
    }

    #[test]
    fn unreadable_files_carry_their_path() {
        let missing = PathBuf::from("/definitely/not/here.toml");
        let err = load(&ModelSource {
            molecule: None,
            input: Some(missing.clone()),
        })
        .err()
        .unwrap();
        assert!(matches!(err, CliError::ModelFile { path, .. } if path == missing));
    }

    #[test]
    fn neither_source_is_an_argument_error() {
        let result = load(&ModelSource {
            molecule: None,
            input: None,
        });
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
