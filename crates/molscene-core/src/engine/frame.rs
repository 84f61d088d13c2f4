use nalgebra::{Matrix4, Point3};

/// Per-instance data for one sphere impostor.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    /// xyz = position, w = radius
    pub center: [f32; 4],
    /// RGBA
    pub color: [f32; 4],
}

impl SphereInstance {
    pub fn new(position: Point3<f32>, radius: f32, color: [f32; 4]) -> Self {
        Self {
            center: [position.x, position.y, position.z, radius],
            color,
        }
    }

    pub fn position(&self) -> Point3<f32> {
        Point3::new(self.center[0], self.center[1], self.center[2])
    }

    pub fn radius(&self) -> f32 {
        self.center[3]
    }
}

/// Per-instance data for one capsule (bond) impostor.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CapsuleInstance {
    /// xyz = first endpoint, w = radius
    pub endpoint_a: [f32; 4],
    /// xyz = second endpoint, w = bond order
    pub endpoint_b: [f32; 4],
    pub color: [f32; 4],
}

impl CapsuleInstance {
    pub fn new(a: Point3<f32>, b: Point3<f32>, radius: f32, order: f32, color: [f32; 4]) -> Self {
        Self {
            endpoint_a: [a.x, a.y, a.z, radius],
            endpoint_b: [b.x, b.y, b.z, order],
            color,
        }
    }

    pub fn endpoints(&self) -> (Point3<f32>, Point3<f32>) {
        let [ax, ay, az, _] = self.endpoint_a;
        let [bx, by, bz, _] = self.endpoint_b;
        (Point3::new(ax, ay, az), Point3::new(bx, by, bz))
    }

    pub fn radius(&self) -> f32 {
        self.endpoint_a[3]
    }
}

/// Text drawn next to an atom.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub atom_index: usize,
    pub text: String,
    pub position: Point3<f32>,
}

/// Everything one render call draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Zero-based count of renders performed by the scene before this one.
    pub index: u64,
    pub eye: Point3<f32>,
    pub view: Matrix4<f32>,
    /// Atom spheres first, followed by electron clouds when enabled.
    pub spheres: Vec<SphereInstance>,
    pub capsules: Vec<CapsuleInstance>,
    pub labels: Vec<Label>,
    /// Set when the scene was empty and stand-in spheres were drawn instead.
    pub placeholder: bool,
}

impl Frame {
    pub fn sphere_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.spheres)
    }

    pub fn capsule_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.capsules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn instance_layouts_are_packed_vec4s() {
        assert_eq!(size_of::<SphereInstance>(), 32);
        assert_eq!(size_of::<CapsuleInstance>(), 48);
    }

    #[test]
    fn accessors_unpack_the_vec4s() {
        let sphere = SphereInstance::new(Point3::new(1.0, 2.0, 3.0), 0.5, [1.0; 4]);
        assert_eq!(sphere.position(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(sphere.radius(), 0.5);

        let capsule = CapsuleInstance::new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            0.05,
            2.0,
            [0.5; 4],
        );
        assert_eq!(
            capsule.endpoints(),
            (Point3::origin(), Point3::new(1.0, 0.0, 0.0))
        );
        assert_eq!(capsule.radius(), 0.05);
        assert_eq!(capsule.endpoint_b[3], 2.0);
    }
}
