use super::source;
use crate::cli::{ExportArgs, ExportFormat};
use crate::error::{CliError, Result};
use molscene::core::export::{SceneExport, csv};
use molscene::core::io::toml_format::{ModelMetadata, TomlFile};
use molscene::core::io::traits::MolecularFile;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: ExportArgs) -> Result<()> {
    let loaded = source::load(&args.source)?;
    let written = match args.format {
        ExportFormat::Toml => {
            let metadata = ModelMetadata { name: loaded.name };
            TomlFile::write_to_path(&loaded.model, &metadata, &args.output).map_err(|e| {
                CliError::ModelFile {
                    path: args.output.clone(),
                    source: e,
                }
            })?;
            vec![args.output.clone()]
        }
        ExportFormat::Csv => {
            let export = SceneExport::from_model(&loaded.model);
            let bonds_path = bonds_csv_path(&args.output);
            csv::write_atom_records_to_path(&args.output, &export.atoms)?;
            csv::write_bond_records_to_path(&bonds_path, &export.bonds)?;
            vec![args.output.clone(), bonds_path]
        }
        ExportFormat::Bin => {
            let export = SceneExport::from_model(&loaded.model);
            write_binary(&export, &args.output)?;
            vec![args.output.clone()]
        }
    };

    for path in &written {
        info!("Wrote {:?}", path);
        println!("✓ Written: {}", path.display());
    }
    Ok(())
}

/// `atoms.csv` becomes `atoms.bonds.csv`; a path without an extension gets `.bonds.csv` appended.
pub fn bonds_csv_path(atoms_path: &Path) -> PathBuf {
    let stem = atoms_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    atoms_path.with_file_name(format!("{}.bonds.csv", stem))
}

fn write_binary(export: &SceneExport, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(export.atom_bytes())?;
    writer.write_all(export.bond_bytes())?;
    writer.flush()?;
    Ok(())
}
