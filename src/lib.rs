pub mod app;
pub mod camera;
pub mod config;
pub mod culling;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod mesh;
pub mod scene;
pub mod scene_store;
pub mod types;

pub use app::run;
pub use camera::Camera;
pub use culling::{aabb_visible, frustum_from_vp, Frustum, FrustumPlane};
pub use error::{Error, Result};
pub use frame::{FrameCuller, FrameStats};
pub use geometry::{Aabb, Plane};
pub use scene::{Scene, SceneObject};
