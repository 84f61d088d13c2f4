//! C ABI for driving a molscene [`Scene`] and reading reference models from a foreign
//! host.
//!
//! Handles are opaque heap pointers created by `*_create` / `molscene_model_reference`
//! and released by the matching `*_destroy`. A handle must not be used from two threads
//! at once. Every function accepts null handles and reports them instead of crashing.

use molscene::core::export::{AtomRecord, BondRecord, SceneExport};
use molscene::core::models::molecule::MolecularModel;
use molscene::core::models::reference::ReferenceMolecule;
use molscene::engine::backend::{SceneBackend, load_model};
use molscene::engine::frame::{Frame, SphereInstance};
use molscene::engine::scene::Scene;
use std::ptr;
use tracing::warn;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok = 0,
    NullPointer = -1,
    InvalidArgument = -2,
    RenderFailed = -3,
}

/// A scene plus the last frame it rendered.
pub struct SceneHandle {
    scene: Scene,
    last_frame: Option<Frame>,
}

/// Summary of a rendered frame. `view` is column-major.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInfo {
    pub index: u64,
    pub eye: [f32; 3],
    pub view: [f32; 16],
    pub sphere_count: usize,
    pub capsule_count: usize,
    pub label_count: usize,
    pub placeholder: bool,
}

impl From<&Frame> for FrameInfo {
    fn from(frame: &Frame) -> Self {
        let mut view = [0.0; 16];
        view.copy_from_slice(frame.view.as_slice());
        Self {
            index: frame.index,
            eye: [frame.eye.x, frame.eye.y, frame.eye.z],
            view,
            sphere_count: frame.spheres.len(),
            capsule_count: frame.capsules.len(),
            label_count: frame.labels.len(),
            placeholder: frame.placeholder,
        }
    }
}

/// Copies up to `capacity` items into `out`; returns the number copied, or the number
/// available when `out` is null.
///
/// # Safety
///
/// A non-null `out` must be valid for `capacity` writes of `T`.
unsafe fn copy_into<T: Copy>(items: &[T], out: *mut T, capacity: usize) -> usize {
    if out.is_null() {
        return items.len();
    }
    let count = items.len().min(capacity);
    // SAFETY: the caller guarantees `out` holds at least `capacity >= count` elements.
    unsafe { ptr::copy_nonoverlapping(items.as_ptr(), out, count) };
    count
}

#[unsafe(no_mangle)]
pub extern "C" fn molscene_scene_create() -> *mut SceneHandle {
    Box::into_raw(Box::new(SceneHandle {
        scene: Scene::default(),
        last_frame: None,
    }))
}

/// # Safety
///
/// `handle` must be null or a pointer from [`molscene_scene_create`] that has not been
/// destroyed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn molscene_scene_destroy(handle: *mut SceneHandle) {
    if !handle.is_null() {
        // SAFETY: the pointer came from Box::into_raw and is released exactly once.
        drop(unsafe { Box::from_raw(handle) });
    }
}

/// # Safety
///
/// `handle` must be null or a live scene handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn molscene_scene_clear(handle: *mut SceneHandle) -> Status {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return Status::NullPointer;
    };
    handle.scene.clear_model();
    Status::Ok
}

/// # Safety
///
/// `handle` must be null or a live scene handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn molscene_scene_add_atom(
    handle: *mut SceneHandle,
    atom: AtomRecord,
) -> Status {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return Status::NullPointer;
    };
    handle.scene.add_atom(atom);
    Status::Ok
}

/// # Safety
///
/// `handle` must be null or a live scene handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn molscene_scene_add_bond(
    handle: *mut SceneHandle,
    bond: BondRecord,
) -> Status {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return Status::NullPointer;
    };
    handle.scene.add_bond(bond);
    Status::Ok
}

/// # Safety
///
/// `handle` must be null or a live scene handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn molscene_scene_spin_y(handle: *mut SceneHandle, radians: f32) -> Status {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return Status::NullPointer;
    };
    if !radians.is_finite() {
        return Status::InvalidArgument;
    }
    handle.scene.spin_y(radians);
    Status::Ok
}

/// Renders a frame and keeps it for [`molscene_scene_copy_spheres`]. `info` may be null.
///
/// # Safety
///
/// `handle` must be null or a live scene handle; a non-null `info` must be writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn molscene_scene_render(
    handle: *mut SceneHandle,
    info: *mut FrameInfo,
) -> Status {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return Status::NullPointer;
    };
    match handle.scene.render() {
        Ok(frame) => {
            if let Some(info) = unsafe { info.as_mut() } {
                *info = FrameInfo::from(&frame);
            }
            handle.last_frame = Some(frame);
            Status::Ok
        }
        Err(e) => {
            warn!("Render failed: {}", e);
            Status::RenderFailed
        }
    }
}

/// Copies spheres of the last rendered frame. Returns 0 before the first render.
///
/// # Safety
///
/// `handle` must be null or a live scene handle; a non-null `out` must be valid for
/// `capacity` writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn molscene_scene_copy_spheres(
    handle: *const SceneHandle,
    out: *mut SphereInstance,
    capacity: usize,
) -> usize {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return 0;
    };
    match &handle.last_frame {
        Some(frame) => unsafe { copy_into(&frame.spheres, out, capacity) },
        None => 0,
    }
}

/// Replaces the scene contents with `model`.
///
/// # Safety
///
/// `handle` must be null or a live scene handle; `model` must be null or a live model
/// handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn molscene_scene_set_model(
    handle: *mut SceneHandle,
    model: *const MolecularModel,
) -> Status {
    let (Some(handle), Some(model)) = (unsafe { handle.as_mut() }, unsafe { model.as_ref() })
    else {
        return Status::NullPointer;
    };
    load_model(&mut handle.scene, model);
    Status::Ok
}

/// Builds a reference molecule: 0 = ethanol, 1 = simple, 2 = triad. Returns null for
/// any other kind.
#[unsafe(no_mangle)]
pub extern "C" fn molscene_model_reference(kind: i32) -> *mut MolecularModel {
    let molecule = match kind {
        0 => ReferenceMolecule::Ethanol,
        1 => ReferenceMolecule::Simple,
        2 => ReferenceMolecule::Triad,
        _ => {
            warn!("Unknown reference molecule kind {}", kind);
            return ptr::null_mut();
        }
    };
    Box::into_raw(Box::new(molecule.build()))
}

/// # Safety
///
/// `model` must be null or a pointer from [`molscene_model_reference`] that has not
/// been destroyed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn molscene_model_destroy(model: *mut MolecularModel) {
    if !model.is_null() {
        // SAFETY: the pointer came from Box::into_raw and is released exactly once.
        drop(unsafe { Box::from_raw(model) });
    }
}

/// # Safety
///
/// `model` must be null or a live model handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn molscene_model_atom_count(model: *const MolecularModel) -> usize {
    unsafe { model.as_ref() }.map_or(0, MolecularModel::atom_count)
}

/// # Safety
///
/// `model` must be null or a live model handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn molscene_model_bond_count(model: *const MolecularModel) -> usize {
    unsafe { model.as_ref() }.map_or(0, MolecularModel::bond_count)
}

/// Copies the model's atom records; see [`copy_into`] for the return value.
///
/// # Safety
///
/// `model` must be null or a live model handle; a non-null `out` must be valid for
/// `capacity` writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn molscene_model_copy_atoms(
    model: *const MolecularModel,
    out: *mut AtomRecord,
    capacity: usize,
) -> usize {
    let Some(model) = (unsafe { model.as_ref() }) else {
        return 0;
    };
    let export = SceneExport::from_model(model);
    unsafe { copy_into(&export.atoms, out, capacity) }
}

/// Copies the model's bond records; see [`copy_into`] for the return value.
///
/// # Safety
///
/// `model` must be null or a live model handle; a non-null `out` must be valid for
/// `capacity` writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn molscene_model_copy_bonds(
    model: *const MolecularModel,
    out: *mut BondRecord,
    capacity: usize,
) -> usize {
    let Some(model) = (unsafe { model.as_ref() }) else {
        return 0;
    };
    let export = SceneExport::from_model(model);
    unsafe { copy_into(&export.bonds, out, capacity) }
}

/// Layout probe for hosts: returns `id + element_number`.
#[unsafe(no_mangle)]
pub extern "C" fn molscene_atom_record_checksum(atom: AtomRecord) -> i32 {
    atom.id.wrapping_add(atom.element_number)
}
