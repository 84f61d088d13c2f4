//! CSV tables of exported records.
//!
//! Atom tables use the header `element_number,id,x,y,z`; bond tables use
//! `atom_index1,atom_index2,order`.

use super::{AtomRecord, BondRecord};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn write_records<T: Serialize>(writer: impl Write, records: &[T]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush().map_err(|e| ExportError::Csv(e.into()))?;
    Ok(())
}

fn read_records<T: DeserializeOwned>(reader: impl Read) -> Result<Vec<T>, ExportError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in csv_reader.deserialize::<T>() {
        records.push(result?);
    }
    Ok(records)
}

pub fn write_atom_records(writer: impl Write, records: &[AtomRecord]) -> Result<(), ExportError> {
    write_records(writer, records)
}

pub fn write_bond_records(writer: impl Write, records: &[BondRecord]) -> Result<(), ExportError> {
    write_records(writer, records)
}

pub fn read_atom_records(reader: impl Read) -> Result<Vec<AtomRecord>, ExportError> {
    read_records(reader)
}

pub fn read_bond_records(reader: impl Read) -> Result<Vec<BondRecord>, ExportError> {
    read_records(reader)
}

/// Writes atom records to a new file at `path`.
pub fn write_atom_records_to_path(
    path: impl AsRef<Path>,
    records: &[AtomRecord],
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    write_atom_records(std::io::BufWriter::new(file), records)
}

/// Writes bond records to a new file at `path`.
pub fn write_bond_records_to_path(
    path: impl AsRef<Path>,
    records: &[BondRecord],
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    write_bond_records(std::io::BufWriter::new(file), records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::SceneExport;
    use crate::core::models::molecule::MolecularModel;
    use tempfile::tempdir;

    #[test]
    fn atom_table_has_expected_header_and_rows() {
        let export = SceneExport::from_model(&MolecularModel::simple());
        let mut buffer = Vec::new();
        write_atom_records(&mut buffer, &export.atoms).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("element_number,id,x,y,z"));
        assert_eq!(lines.next(), Some("6,0,-1.0,0.0,0.0"));
        assert_eq!(lines.next(), Some("6,1,1.0,1.0,0.0"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn bond_table_round_trips() {
        let export = SceneExport::from_model(&MolecularModel::ethanol());
        let mut buffer = Vec::new();
        write_bond_records(&mut buffer, &export.bonds).unwrap();
        assert!(buffer.starts_with(b"atom_index1,atom_index2,order\n"));
        let read_back = read_bond_records(buffer.as_slice()).unwrap();
        assert_eq!(read_back, export.bonds);
    }

    #[test]
    fn atom_table_round_trips_through_a_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atoms.csv");
        let export = SceneExport::from_model(&MolecularModel::ethanol());

        write_atom_records_to_path(&path, &export.atoms).unwrap();
        let file = std::fs::File::open(&path).unwrap();
        assert_eq!(read_atom_records(file).unwrap(), export.atoms);
    }

    #[test]
    fn malformed_rows_are_reported() {
        let input = "element_number,id,x,y,z\nsix,0,0.0,0.0,0.0\n";
        assert!(matches!(
            read_atom_records(input.as_bytes()),
            Err(ExportError::Csv(_))
        ));
    }

    #[test]
    fn unwritable_path_is_reported_as_io() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("atoms.csv");
        assert!(matches!(
            write_atom_records_to_path(&path, &[]),
            Err(ExportError::Io { .. })
        ));
    }
}
