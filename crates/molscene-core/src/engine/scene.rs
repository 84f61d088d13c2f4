use super::backend::SceneBackend;
use super::camera::OrbitCamera;
use super::config::SceneConfig;
use super::error::SceneError;
use super::frame::{CapsuleInstance, Frame, Label, SphereInstance};
use super::style::{self, BOND_COLOR};
use crate::core::export::{AtomRecord, BondRecord};
use nalgebra::Point3;
use tracing::{debug, trace, warn};

/// Multiple of the model's extent kept between the camera and its target when fitting.
const FIT_MARGIN: f32 = 2.5;
/// Electron clouds are drawn at this multiple of the atom radius.
const CLOUD_RADIUS_FACTOR: f32 = 2.0;
const PLACEHOLDER_XS: [f32; 3] = [-3.0, 0.0, 3.0];
const PLACEHOLDER_RADIUS: f32 = 1.0;

/// The in-memory renderer: loaded records, an orbit camera and drawing parameters.
#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
    camera: OrbitCamera,
    atoms: Vec<AtomRecord>,
    bonds: Vec<BondRecord>,
    frames_rendered: u64,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let camera = OrbitCamera::new(config.camera_distance);
        Self {
            config,
            camera,
            atoms: Vec::new(),
            bonds: Vec::new(),
            frames_rendered: 0,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn atoms(&self) -> &[AtomRecord] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[BondRecord] {
        &self.bonds
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    fn atom_position(atom: &AtomRecord) -> Point3<f32> {
        Point3::new(atom.x, atom.y, atom.z)
    }

    fn resolve(&self, raw: i32) -> Option<&AtomRecord> {
        usize::try_from(raw).ok().and_then(|i| self.atoms.get(i))
    }

    fn fitted_distance(&self) -> f32 {
        if !self.config.fit_camera_to_model {
            return self.config.camera_distance;
        }
        let target = self.camera.target();
        let extent = self
            .atoms
            .iter()
            .map(|atom| (Self::atom_position(atom) - target).norm())
            .fold(0.0_f32, f32::max);
        self.config.camera_distance.max(FIT_MARGIN * extent)
    }

    fn placeholder_spheres() -> Vec<SphereInstance> {
        PLACEHOLDER_XS
            .iter()
            .map(|&x| {
                SphereInstance::new(
                    Point3::new(x, 0.0, 0.0),
                    PLACEHOLDER_RADIUS,
                    style::AtomStyle::DEFAULT.color,
                )
            })
            .collect()
    }

    fn bond_capsules(&self) -> Result<Vec<CapsuleInstance>, SceneError> {
        let mut capsules = Vec::with_capacity(self.bonds.len());
        for (bond_index, bond) in self.bonds.iter().enumerate() {
            let endpoints = (self.resolve(bond.atom_index1), self.resolve(bond.atom_index2));
            let (Some(a), Some(b)) = endpoints else {
                let index = if endpoints.0.is_none() {
                    bond.atom_index1
                } else {
                    bond.atom_index2
                };
                if self.config.skip_dangling_bonds {
                    warn!(
                        "Skipping bond {} ({}-{}): atom {} is not in the scene",
                        bond_index, bond.atom_index1, bond.atom_index2, index
                    );
                    continue;
                }
                return Err(SceneError::DanglingBond {
                    bond: bond_index,
                    index,
                    atom_count: self.atoms.len(),
                });
            };
            capsules.push(CapsuleInstance::new(
                Self::atom_position(a),
                Self::atom_position(b),
                self.config.bond_radius,
                bond.order as f32,
                BOND_COLOR,
            ));
        }
        Ok(capsules)
    }

    fn atom_spheres(&self) -> Vec<SphereInstance> {
        let styles: Vec<_> = self
            .atoms
            .iter()
            .map(|atom| {
                let element = u32::try_from(atom.element_number).unwrap_or(0);
                (Self::atom_position(atom), style::style_for(element))
            })
            .collect();

        let mut spheres: Vec<SphereInstance> = styles
            .iter()
            .map(|(position, style)| {
                SphereInstance::new(
                    *position,
                    self.config.radius_scale * style.radius,
                    style.color,
                )
            })
            .collect();

        if self.config.electron_clouds {
            spheres.extend(styles.iter().map(|(position, style)| {
                let cloud = style.with_alpha(self.config.cloud_alpha);
                SphereInstance::new(
                    *position,
                    CLOUD_RADIUS_FACTOR * self.config.radius_scale * cloud.radius,
                    cloud.color,
                )
            }));
        }
        spheres
    }

    fn atom_labels(&self) -> Vec<Label> {
        if !self.config.labels {
            return Vec::new();
        }
        self.atoms
            .iter()
            .enumerate()
            .map(|(index, atom)| Label {
                atom_index: index,
                text: index.to_string(),
                position: Self::atom_position(atom) + self.config.label_offset,
            })
            .collect()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl SceneBackend for Scene {
    fn clear_model(&mut self) {
        self.atoms.clear();
        self.bonds.clear();
    }

    fn add_atom(&mut self, atom: AtomRecord) {
        trace!("Adding atom {:?}", atom);
        self.atoms.push(atom);
    }

    /// Bonds are stored as given; unresolved atoms are handled at render time.
    fn add_bond(&mut self, bond: BondRecord) {
        trace!("Adding bond {:?}", bond);
        self.bonds.push(bond);
    }

    fn spin_y(&mut self, radians: f32) {
        self.camera.spin_y(radians);
    }

    fn render(&mut self) -> Result<Frame, SceneError> {
        let distance = self.fitted_distance();
        self.camera.set_distance(distance);

        let placeholder = self.atoms.is_empty();
        let (spheres, capsules, labels) = if placeholder {
            (Self::placeholder_spheres(), Vec::new(), Vec::new())
        } else {
            (self.atom_spheres(), self.bond_capsules()?, self.atom_labels())
        };

        let frame = Frame {
            index: self.frames_rendered,
            eye: self.camera.eye(),
            view: self.camera.view_matrix(),
            spheres,
            capsules,
            labels,
            placeholder,
        };
        self.frames_rendered += 1;
        debug!(
            "Rendered frame {}: {} spheres, {} capsules, {} labels",
            frame.index,
            frame.spheres.len(),
            frame.capsules.len(),
            frame.labels.len()
        );
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::molecule::MolecularModel;
    use crate::engine::backend::load_model;
    use crate::engine::config::SceneConfigBuilder;
    use std::f32::consts::FRAC_PI_2;

    fn scene_with(model: &MolecularModel, config: SceneConfig) -> Scene {
        let mut scene = Scene::new(config);
        load_model(&mut scene, model);
        scene
    }

    #[test]
    fn empty_scene_renders_three_placeholder_spheres() {
        let frame = Scene::default().render().unwrap();
        assert!(frame.placeholder);
        assert_eq!(frame.spheres.len(), 3);
        let xs: Vec<f32> = frame.spheres.iter().map(|s| s.position().x).collect();
        assert_eq!(xs, vec![-3.0, 0.0, 3.0]);
        assert!(frame.spheres.iter().all(|s| s.radius() == 1.0));
        assert!(frame.capsules.is_empty());
        assert!(frame.labels.is_empty());
    }

    #[test]
    fn ethanol_renders_every_atom_bond_cloud_and_label() {
        let mut scene = scene_with(&MolecularModel::ethanol(), SceneConfig::default());
        let frame = scene.render().unwrap();
        assert!(!frame.placeholder);
        assert_eq!(frame.capsules.len(), 8);
        assert_eq!(frame.spheres.len(), 18);
        assert_eq!(frame.labels.len(), 9);

        let first = frame.spheres[0];
        assert_eq!(
            first.position(),
            Point3::new(-0.4059_f64 as f32, -0.0951_f64 as f32, 0.0)
        );
        assert!((first.radius() - 3.0 * 0.17).abs() < 1e-6);
        let cloud = frame.spheres[9];
        assert_eq!(cloud.position(), first.position());
        assert!((cloud.radius() - 2.0 * first.radius()).abs() < 1e-6);
        assert_eq!(cloud.color[3], 0.2);

        assert_eq!(frame.labels[2].text, "2");
        let offset = frame.labels[0].position - first.position();
        assert!((offset.x - 0.05).abs() < 1e-6 && (offset.y + 0.05).abs() < 1e-6);
    }

    #[test]
    fn capsules_join_the_bonded_atoms() {
        let mut scene = scene_with(&MolecularModel::simple(), SceneConfig::default());
        let frame = scene.render().unwrap();
        let (a, b) = frame.capsules[0].endpoints();
        assert_eq!(a, Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(b, Point3::new(1.0, 1.0, 0.0));
        assert_eq!(frame.capsules[0].radius(), 0.05);
    }

    #[test]
    fn clouds_and_labels_can_be_disabled() {
        let config = SceneConfigBuilder::new()
            .electron_clouds(false)
            .labels(false)
            .build()
            .unwrap();
        let mut scene = scene_with(&MolecularModel::ethanol(), config);
        let frame = scene.render().unwrap();
        assert_eq!(frame.spheres.len(), 9);
        assert!(frame.labels.is_empty());
    }

    #[test]
    fn spin_moves_the_eye_and_frames_are_numbered() {
        let mut scene = scene_with(&MolecularModel::simple(), SceneConfig::default());
        let first = scene.render().unwrap();
        assert_eq!(first.index, 0);
        assert!((first.eye - Point3::new(0.0, 0.0, 5.0)).norm() < 1e-5);

        scene.spin_y(FRAC_PI_2);
        let second = scene.render().unwrap();
        assert_eq!(second.index, 1);
        assert!((second.eye - Point3::new(5.0, 0.0, 0.0)).norm() < 1e-5);
        assert_eq!(scene.frames_rendered(), 2);
    }

    #[test]
    fn dangling_bond_is_skipped_by_default() {
        let mut scene = Scene::default();
        scene.add_atom(AtomRecord {
            element_number: 6,
            ..AtomRecord::default()
        });
        scene.add_bond(BondRecord {
            atom_index1: 0,
            atom_index2: 4,
            order: 1,
        });
        let frame = scene.render().unwrap();
        assert!(frame.capsules.is_empty());
        assert_eq!(frame.spheres.len(), 2);
    }

    #[test]
    fn dangling_bond_fails_when_not_skipping() {
        let config = SceneConfigBuilder::new()
            .skip_dangling_bonds(false)
            .build()
            .unwrap();
        let mut scene = Scene::new(config);
        scene.add_atom(AtomRecord::default());
        scene.add_bond(BondRecord {
            atom_index1: -1,
            atom_index2: 0,
            order: 1,
        });
        assert_eq!(
            scene.render(),
            Err(SceneError::DanglingBond {
                bond: 0,
                index: -1,
                atom_count: 1
            })
        );
        assert_eq!(scene.frames_rendered(), 0);
    }

    #[test]
    fn clear_returns_to_placeholder() {
        let mut scene = scene_with(&MolecularModel::ethanol(), SceneConfig::default());
        scene.clear_model();
        assert!(scene.is_empty());
        assert!(scene.render().unwrap().placeholder);
    }

    #[test]
    fn fitting_pushes_the_camera_back_for_large_models() {
        let config = SceneConfigBuilder::new()
            .fit_camera_to_model(true)
            .build()
            .unwrap();
        let mut scene = scene_with(&MolecularModel::triad(), config.clone());
        let frame = scene.render().unwrap();
        let far = Point3::new(777.0_f32, 888.0, 999.0).coords.norm();
        assert!((frame.eye.z - 2.5 * far).abs() < 1e-1);

        let mut small = scene_with(&MolecularModel::ethanol(), config);
        let frame = small.render().unwrap();
        assert!((frame.eye.z - 5.0).abs() < 1e-5);
    }

    #[test]
    fn unstyled_elements_fall_back_to_purple() {
        let mut scene = scene_with(&MolecularModel::triad(), SceneConfig::default());
        let frame = scene.render().unwrap();
        assert_eq!(frame.spheres[0].color, style::PURPLE);
    }
}
