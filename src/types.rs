//shared GPU-facing records handed to the rendering collaborator
use bytemuck::{Pod, Zeroable};
use cgmath::Matrix4;

use crate::geometry::Aabb;

pub const RED: [f32; 4] = [0.9, 0.16, 0.22, 1.0];
pub const MAROON: [f32; 4] = [0.75, 0.13, 0.22, 1.0];
pub const BLUE: [f32; 4] = [0.0, 0.47, 0.95, 1.0];
pub const GRAY: [f32; 4] = [0.51, 0.51, 0.51, 1.0];
pub const LIGHT_GRAY: [f32; 4] = [0.78, 0.78, 0.78, 1.0];

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(vp: &Matrix4<f32>) -> Self {
        Self { view_proj: mat4_to_array(vp) }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// Wire box outline, drawn as a unit cube scaled by `size` around `center`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DebugBoxRaw {
    pub center: [f32; 4],
    pub size: [f32; 4],
    pub color: [f32; 4],
}

impl DebugBoxRaw {
    pub fn from_aabb(aabb: &Aabb, color: [f32; 4]) -> Self {
        let c = aabb.center();
        let s = aabb.size();
        Self {
            center: [c.x, c.y, c.z, 1.0],
            size: [s.x, s.y, s.z, 0.0],
            color,
        }
    }
}

pub fn mat4_to_array(m: &Matrix4<f32>) -> [[f32; 4]; 4] {
    [
        [m.x.x, m.x.y, m.x.z, m.x.w],
        [m.y.x, m.y.y, m.y.z, m.y.w],
        [m.z.x, m.z.y, m.z.z, m.z.w],
        [m.w.x, m.w.y, m.w.z, m.w.w],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn translation_lands_in_last_column() {
        let m = mat4_to_array(&Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(m[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(m[0], [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn debug_box_matches_aabb() {
        let aabb = Aabb::new(Vector3::new(4.0, -1.0, 0.0), Vector3::new(6.0, 1.0, 3.0));
        let raw = DebugBoxRaw::from_aabb(&aabb, BLUE);
        assert_eq!(raw.center, [5.0, 0.0, 1.5, 1.0]);
        assert_eq!(raw.size, [2.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn records_are_pod_sized() {
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 80);
        assert_eq!(std::mem::size_of::<DebugBoxRaw>(), 48);
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
    }
}
