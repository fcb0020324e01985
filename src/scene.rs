//! Scene objects and the demo scatter layout.

use cgmath::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::geometry::Aabb;
use crate::mesh::MeshKind;

/// One drawable thing.  `handle` belongs to the rendering side and is only
/// carried along; `local_aabb` is fixed at creation.
#[derive(Clone, Debug)]
pub struct SceneObject<H> {
    pub handle: H,
    pub position: Vector3<f32>,
    local_aabb: Aabb,
    pub visible: bool,
}

impl<H> SceneObject<H> {
    pub fn new<I>(handle: H, position: Vector3<f32>, vertices: I) -> Self
    where
        I: IntoIterator<Item = Vector3<f32>>,
    {
        Self::with_local_aabb(handle, position, Aabb::from_vertices(vertices))
    }

    pub fn with_local_aabb(handle: H, position: Vector3<f32>, local_aabb: Aabb) -> Self {
        Self { handle, position, local_aabb, visible: true }
    }

    pub fn local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }

    pub fn world_transform(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
    }

    /// Recomputed on every call; nothing is cached between frames.
    pub fn world_aabb(&self) -> Aabb {
        self.local_aabb.transformed(&self.world_transform())
    }
}

/// Owns every object in the scene.  Grows as needed.
#[derive(Clone, Debug)]
pub struct Scene<H> {
    objects: Vec<SceneObject<H>>,
}

impl<H> Default for Scene<H> {
    fn default() -> Self {
        Self { objects: Vec::new() }
    }
}

impl<H> Scene<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, object: SceneObject<H>) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[SceneObject<H>] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [SceneObject<H>] {
        &mut self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.objects.iter().filter(|o| o.visible).count()
    }
}

impl<H> FromIterator<SceneObject<H>> for Scene<H> {
    fn from_iter<T: IntoIterator<Item = SceneObject<H>>>(iter: T) -> Self {
        Self { objects: iter.into_iter().collect() }
    }
}

// -------------- Scatter layout --------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    pub object_count: usize,
    /// Objects land on integer x/z in `[-spread, spread)`, y = 0.
    pub spread: i32,
    pub seed: u64,
    pub mesh: MeshKind,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self { object_count: 50, spread: 50, seed: 0xC0FF_EE_u64, mesh: MeshKind::Tetrahedron }
    }
}

struct XorShift64(u64);
impl XorShift64 {
    fn new(seed: u64) -> Self { Self(seed | 1) }
    fn next(&mut self) -> u64 { let mut x = self.0; x ^= x << 13; x ^= x >> 7; x ^= x << 17; self.0 = x; x }
    fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        // i64 so that `hi - lo` cannot overflow for any i32 pair
        let span = (hi as i64 - lo as i64).max(1) as u64;
        (lo as i64 + (self.next() % span) as i64) as i32
    }
}

/// Deterministic ground-plane scatter of `object_count` copies of one mesh.
pub fn scatter(cfg: &ScatterConfig) -> Scene<MeshKind> {
    let mesh = cfg.mesh.build();
    let local = Aabb::from_vertices(mesh.positions());
    let mut rng = XorShift64::new(cfg.seed);
    let spread = cfg.spread.max(1);

    (0..cfg.object_count)
        .map(|_| {
            let x = rng.range_i32(-spread, spread) as f32;
            let z = rng.range_i32(-spread, spread) as f32;
            SceneObject::with_local_aabb(cfg.mesh, Vector3::new(x, 0.0, z), local)
        })
        .collect()
}
