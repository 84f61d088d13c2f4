use crate::core::models::molecule::MolecularModel;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing molecular model files.
///
/// Implementors handle format-specific parsing and serialization; the path
/// helpers are shared.
pub trait MolecularFile {
    /// Format-specific information that is not part of the model itself.
    type Metadata: Default;

    /// The error type for I/O and parsing.
    type Error: Error + From<io::Error>;

    /// Reads a model and its metadata from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails, the content describes an invalid model,
    /// or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<(MolecularModel, Self::Metadata), Self::Error>;

    /// Writes a model and metadata to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_to(
        model: &MolecularModel,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Writes a model with default metadata.
    fn write_model_to(model: &MolecularModel, writer: &mut impl Write) -> Result<(), Self::Error> {
        Self::write_to(model, &Self::Metadata::default(), writer)
    }

    /// Reads a model from a file path.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<(MolecularModel, Self::Metadata), Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a model and metadata to a file path.
    fn write_to_path<P: AsRef<Path>>(
        model: &MolecularModel,
        metadata: &Self::Metadata,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(model, metadata, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
