//! Scene layout persistence.
//! Native only: one bincode file per layout.

use std::fs;
use std::path::Path;

use cgmath::Vector3;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Aabb;
use crate::mesh::MeshKind;
use crate::scene::{Scene, SceneObject};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub mesh: MeshKind,
    pub position: [f32; 3],
    pub local_min: [f32; 3],
    pub local_max: [f32; 3],
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    pub objects: Vec<ObjectRecord>,
}

impl SceneFile {
    pub fn from_scene(scene: &Scene<MeshKind>) -> Self {
        let objects = scene
            .objects()
            .iter()
            .map(|o| ObjectRecord {
                mesh: o.handle,
                position: o.position.into(),
                local_min: o.local_aabb().min.into(),
                local_max: o.local_aabb().max.into(),
            })
            .collect();
        Self { objects }
    }

    /// Rebuilds the scene; every object starts out visible.
    pub fn into_scene(self) -> Scene<MeshKind> {
        self.objects
            .into_iter()
            .map(|r| {
                let local = Aabb::new(Vector3::from(r.local_min), Vector3::from(r.local_max));
                SceneObject::with_local_aabb(r.mesh, Vector3::from(r.position), local)
            })
            .collect()
    }
}

pub fn save_scene(path: impl AsRef<Path>, scene: &Scene<MeshKind>) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    let bytes = bincode::serialize(&SceneFile::from_scene(scene))?;
    fs::write(path, &bytes)?;
    info!("saved {} objects to {} ({} bytes)", scene.len(), path.display(), bytes.len());
    Ok(())
}

pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene<MeshKind>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let file: SceneFile = bincode::deserialize(&bytes)?;
    debug!("decoded {} object records from {}", file.objects.len(), path.display());
    Ok(file.into_scene())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::scene::{scatter, ScatterConfig};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("frustum_cull_{}_{}", std::process::id(), name))
            .join("layout.bin")
    }

    #[test]
    fn saved_layout_loads_back() {
        let cfg = ScatterConfig { object_count: 12, mesh: MeshKind::Octahedron, ..ScatterConfig::default() };
        let mut scene = scatter(&cfg);
        scene.objects_mut()[0].visible = false;

        let path = temp_path("roundtrip");
        save_scene(&path, &scene).unwrap();
        let loaded = load_scene(&path).unwrap();

        assert_eq!(loaded.len(), 12);
        assert_eq!(loaded.visible_count(), 12);
        for (a, b) in scene.objects().iter().zip(loaded.objects()) {
            assert_eq!(a.handle, b.handle);
            assert_eq!(a.position, b.position);
            assert_eq!(a.local_aabb(), b.local_aabb());
        }
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_scene(temp_path("missing")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn garbage_is_encoding_error() {
        let path = temp_path("garbage");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, [0xFFu8; 3]).unwrap();
        let err = load_scene(&path).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
