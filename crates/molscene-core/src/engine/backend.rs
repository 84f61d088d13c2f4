use super::error::SceneError;
use super::frame::Frame;
use crate::core::export::{AtomRecord, BondRecord, SceneExport};
use crate::core::models::molecule::MolecularModel;
use tracing::debug;

/// The operations a renderer exposes to the model side.
///
/// Atoms and bonds arrive as flat records; bond records refer to atoms by their
/// position in the order they were added since the last [`clear_model`](Self::clear_model).
pub trait SceneBackend {
    fn clear_model(&mut self);

    fn add_atom(&mut self, atom: AtomRecord);

    fn add_bond(&mut self, bond: BondRecord);

    /// Rotates the view about the vertical axis by `radians`.
    fn spin_y(&mut self, radians: f32);

    fn render(&mut self) -> Result<Frame, SceneError>;
}

/// Replaces whatever `backend` holds with `model`.
pub fn load_model<B: SceneBackend + ?Sized>(backend: &mut B, model: &MolecularModel) {
    let export = SceneExport::from_model(model);
    backend.clear_model();
    for atom in &export.atoms {
        backend.add_atom(*atom);
    }
    for bond in &export.bonds {
        backend.add_bond(*bond);
    }
    debug!(
        "Loaded {} atoms and {} bonds into backend",
        export.atoms.len(),
        export.bonds.len()
    );
}
