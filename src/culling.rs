// src/culling.rs
use cgmath::{Matrix4, Vector3};

use crate::geometry::{Aabb, Plane};

/// Slot of each plane inside [`Frustum::planes`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrustumPlane {
    Left = 0,
    Right,
    Bottom,
    Top,
    Near,
    Far,
}

impl FrustumPlane {
    pub const ALL: [FrustumPlane; 6] = [
        FrustumPlane::Left,
        FrustumPlane::Right,
        FrustumPlane::Bottom,
        FrustumPlane::Top,
        FrustumPlane::Near,
        FrustumPlane::Far,
    ];
}

#[derive(Copy, Clone, Debug)]
pub struct Frustum {
    planes: [Plane; 6], // left, right, bottom, top, near, far
}

impl Frustum {
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    #[inline]
    pub fn plane(&self, which: FrustumPlane) -> &Plane {
        &self.planes[which as usize]
    }
}

/// Extracts planes from a column-major CGMath Matrix4 (VP = P * V).
/// We build ROW vectors explicitly:
/// row0 = [ m.x.x, m.y.x, m.z.x, m.w.x ], etc.
pub fn frustum_from_vp(vp: &Matrix4<f32>) -> Frustum {
    let m = vp;
    let r0 = [m.x.x, m.y.x, m.z.x, m.w.x];
    let r1 = [m.x.y, m.y.y, m.z.y, m.w.y];
    let r2 = [m.x.z, m.y.z, m.z.z, m.w.z];
    let r3 = [m.x.w, m.y.w, m.z.w, m.w.w];

    let add = |a: [f32; 4], b: [f32; 4]| Plane::from_coefficients([a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]);
    let sub = |a: [f32; 4], b: [f32; 4]| Plane::from_coefficients([a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]]);

    // Combine rows per Gribb/Hartmann
    let planes = [
        add(r3, r0), // left
        sub(r3, r0), // right
        add(r3, r1), // bottom
        sub(r3, r1), // top
        add(r3, r2), // near
        sub(r3, r2), // far
    ]
    .map(Plane::normalized);

    Frustum { planes }
}

/// Corner of `aabb` furthest along the plane normal.
#[inline]
pub fn positive_vertex(plane: &Plane, aabb: &Aabb) -> Vector3<f32> {
    Vector3::new(
        if plane.n.x >= 0.0 { aabb.max.x } else { aabb.min.x },
        if plane.n.y >= 0.0 { aabb.max.y } else { aabb.min.y },
        if plane.n.z >= 0.0 { aabb.max.z } else { aabb.min.z },
    )
}

/// AABB vs frustum test (positive-vertex).  Returns false as soon as one
/// plane has the whole box behind it.  Boxes near the frustum's edges can
/// pass every single plane while still lying outside; those count as visible.
pub fn aabb_visible(fr: &Frustum, aabb: &Aabb) -> bool {
    for p in &fr.planes {
        if p.signed_distance(positive_vertex(p, aabb)) < 0.0 {
            return false; // completely outside this plane
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, InnerSpace, Point3, SquareMatrix, Zero};
    use float_cmp::approx_eq;

    fn test_vp(fov: f32) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(
            Point3::new(0.0, 0.0, 20.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::unit_y(),
        );
        cgmath::perspective(Deg(fov), 1.0, 0.1, 50.0) * view
    }

    fn cube_at(x: f32, y: f32, z: f32) -> Aabb {
        Aabb::new(Vector3::new(x - 0.5, y - 0.5, z - 0.5), Vector3::new(x + 0.5, y + 0.5, z + 0.5))
    }

    #[test]
    fn planes_are_unit_length() {
        let fr = frustum_from_vp(&test_vp(60.0));
        assert_eq!(fr.planes().len(), 6);
        for p in fr.planes() {
            assert!(approx_eq!(f32, p.n.magnitude(), 1.0, epsilon = 1e-5));
        }
    }

    #[test]
    fn planes_follow_fixed_order() {
        let fr = frustum_from_vp(&test_vp(60.0));
        // camera looks down -Z from z = 20
        assert!(fr.plane(FrustumPlane::Left).n.x > 0.0);
        assert!(fr.plane(FrustumPlane::Right).n.x < 0.0);
        assert!(fr.plane(FrustumPlane::Bottom).n.y > 0.0);
        assert!(fr.plane(FrustumPlane::Top).n.y < 0.0);
        assert!(fr.plane(FrustumPlane::Near).n.z < 0.0);
        assert!(fr.plane(FrustumPlane::Far).n.z > 0.0);

        for (slot, which) in FrustumPlane::ALL.iter().enumerate() {
            assert_eq!(*which as usize, slot);
        }
    }

    #[test]
    fn near_and_far_sit_at_distances() {
        let fr = frustum_from_vp(&test_vp(60.0));
        let near = fr.plane(FrustumPlane::Near);
        let far = fr.plane(FrustumPlane::Far);

        assert!(approx_eq!(f32, near.signed_distance(Vector3::new(0.0, 0.0, 19.9)), 0.0, epsilon = 1e-3));
        assert!(approx_eq!(f32, far.signed_distance(Vector3::new(0.0, 0.0, -30.0)), 0.0, epsilon = 1e-2));
    }

    #[test]
    fn origin_box_is_visible() {
        let fr = frustum_from_vp(&test_vp(90.0));
        assert!(aabb_visible(&fr, &cube_at(0.0, 0.0, 0.0)));
    }

    #[test]
    fn far_away_box_is_culled() {
        let fr = frustum_from_vp(&test_vp(90.0));
        assert!(!aabb_visible(&fr, &cube_at(10000.0, 0.0, 0.0)));
    }

    #[test]
    fn boxes_behind_or_past_far_are_culled() {
        let fr = frustum_from_vp(&test_vp(90.0));
        assert!(!aabb_visible(&fr, &cube_at(0.0, 0.0, 25.0)));
        assert!(!aabb_visible(&fr, &cube_at(0.0, 0.0, -40.0)));
    }

    #[test]
    fn box_straddling_a_plane_is_visible() {
        let fr = frustum_from_vp(&test_vp(90.0));
        // right plane passes through x = 20 at z = 0 for a 90 degree square frustum
        assert!(aabb_visible(&fr, &cube_at(20.0, 0.0, 0.0)));
        assert!(!aabb_visible(&fr, &cube_at(22.0, 0.0, 0.0)));
    }

    #[test]
    fn box_enclosing_the_camera_is_visible() {
        let fr = frustum_from_vp(&test_vp(45.0));
        let huge = Aabb::new(Vector3::new(-100.0, -100.0, -100.0), Vector3::new(100.0, 100.0, 100.0));
        assert!(aabb_visible(&fr, &huge));
    }

    #[test]
    fn early_exit_matches_full_evaluation() {
        let fr = frustum_from_vp(&test_vp(50.0));
        let every_plane = |aabb: &Aabb| {
            fr.planes()
                .iter()
                .map(|p| p.signed_distance(positive_vertex(p, aabb)) >= 0.0)
                .fold(true, |acc, inside| acc & inside)
        };

        for x in -30..=30 {
            for z in -40..=30 {
                let aabb = cube_at(x as f32 * 1.5, 0.0, z as f32);
                assert_eq!(aabb_visible(&fr, &aabb), every_plane(&aabb), "{:?}", aabb);
            }
        }
    }

    #[test]
    fn positive_vertex_picks_furthest_corner() {
        let aabb = cube_at(0.0, 0.0, 0.0);
        let plane = Plane::new(Vector3::new(1.0, -1.0, 0.0), 0.0);
        let pv = positive_vertex(&plane, &aabb);
        assert_eq!(pv, Vector3::new(0.5, -0.5, 0.5));
        for c in aabb.corners() {
            assert!(plane.signed_distance(c) <= plane.signed_distance(pv));
        }
    }

    #[test]
    fn degenerate_matrix_does_not_produce_nan() {
        let zero = Matrix4::zero();
        let fr = frustum_from_vp(&zero);
        for p in fr.planes() {
            assert!(!p.n.x.is_nan() && !p.d.is_nan());
        }
        // identity maps to the unit clip cube
        let fr = frustum_from_vp(&Matrix4::identity());
        assert!(aabb_visible(&fr, &cube_at(0.0, 0.0, 0.0)));
        assert!(!aabb_visible(&fr, &cube_at(3.0, 0.0, 0.0)));
    }
}
