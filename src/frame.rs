//! Per-frame driver: frustum from the camera, world boxes per object,
//! visibility flags, then hand-off to the renderer and the reporter.

use std::fmt;

use cgmath::Matrix4;
use instant::Instant;
use log::{info, log_enabled, trace, Level};

use crate::camera::Camera;
use crate::culling::{self, Frustum, FrustumPlane};
use crate::scene::{Scene, SceneObject};
use crate::types::{self, CameraUniform, DebugBoxRaw, InstanceRaw};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frame: u64,
    pub visible: usize,
    pub total: usize,
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Visible objects: {}/{}", self.visible, self.total)
    }
}

/// Updates `visible` on every object and returns how many passed.
pub fn cull_scene<H>(frustum: &Frustum, objects: &mut [SceneObject<H>]) -> usize {
    let mut visible = 0;
    for obj in objects.iter_mut() {
        let world = obj.world_aabb();
        obj.visible = culling::aabb_visible(frustum, &world);
        visible += obj.visible as usize;
    }
    visible
}

pub struct DrawItem<'a, H> {
    pub handle: &'a H,
    pub instance: InstanceRaw,
}

/// What the renderer gets for one frame.
pub struct DrawList<'a, H> {
    pub camera: CameraUniform,
    /// Visible objects, filled.
    pub solid: Vec<DrawItem<'a, H>>,
    /// Every object as wireframe; colour tells visible from culled.
    pub wire: Vec<DrawItem<'a, H>>,
    /// World AABB outline per object.
    pub boxes: Vec<DebugBoxRaw>,
}

impl<'a, H> DrawList<'a, H> {
    pub fn build(vp: &Matrix4<f32>, objects: &'a [SceneObject<H>]) -> Self {
        let mut solid = Vec::with_capacity(objects.len());
        let mut wire = Vec::with_capacity(objects.len());
        let mut boxes = Vec::with_capacity(objects.len());

        for obj in objects {
            let model = types::mat4_to_array(&obj.world_transform());
            let world = obj.world_aabb();
            if obj.visible {
                solid.push(DrawItem { handle: &obj.handle, instance: InstanceRaw { model, color: types::RED } });
                wire.push(DrawItem { handle: &obj.handle, instance: InstanceRaw { model, color: types::MAROON } });
                boxes.push(DebugBoxRaw::from_aabb(&world, types::BLUE));
            } else {
                wire.push(DrawItem { handle: &obj.handle, instance: InstanceRaw { model, color: types::LIGHT_GRAY } });
                boxes.push(DebugBoxRaw::from_aabb(&world, types::GRAY));
            }
        }

        Self { camera: CameraUniform::new(vp), solid, wire, boxes }
    }

    /// Packed solid instances, ready for `bytemuck::cast_slice`.
    pub fn solid_instances(&self) -> Vec<InstanceRaw> {
        self.solid.iter().map(|d| d.instance).collect()
    }
}

/// Rendering collaborator.
pub trait RenderSink<H> {
    fn submit(&mut self, draw: &DrawList<'_, H>);
}

/// Counting / on-screen tally collaborator.
pub trait VisibilityReporter {
    fn report(&mut self, stats: &FrameStats);
}

/// Logs the tally, at most once per `interval_secs`.
pub struct LogReporter {
    interval_secs: f32,
    last_print: Option<Instant>,
}

impl LogReporter {
    pub fn new(interval_secs: f32) -> Self {
        Self { interval_secs, last_print: None }
    }
}

impl VisibilityReporter for LogReporter {
    fn report(&mut self, stats: &FrameStats) {
        trace!("frame {}: {}", stats.frame, stats);
        let due = match self.last_print {
            Some(t) => t.elapsed().as_secs_f32() >= self.interval_secs,
            None => true,
        };
        if due {
            info!("frame {}: {}", stats.frame, stats);
            self.last_print = Some(Instant::now());
        }
    }
}

/// Runs the culling pipeline once per call.  Holds only a frame counter.
#[derive(Debug, Default)]
pub struct FrameCuller {
    frame: u64,
}

impl FrameCuller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_run(&self) -> u64 {
        self.frame
    }

    /// Rebuilds the frustum and reclassifies every object.
    pub fn cull<H>(&mut self, camera: &Camera, aspect: f32, scene: &mut Scene<H>) -> FrameStats {
        let vp = camera.view_projection(aspect);
        self.cull_with(&vp, scene)
    }

    fn cull_with<H>(&mut self, vp: &Matrix4<f32>, scene: &mut Scene<H>) -> FrameStats {
        let frustum = culling::frustum_from_vp(vp);
        if log_enabled!(Level::Trace) {
            for which in FrustumPlane::ALL {
                let p = frustum.plane(which);
                trace!("{:?}: n=({:.3}, {:.3}, {:.3}) d={:.3}", which, p.n.x, p.n.y, p.n.z, p.d);
            }
        }
        let visible = cull_scene(&frustum, scene.objects_mut());
        self.frame += 1;
        FrameStats { frame: self.frame, visible, total: scene.len() }
    }

    /// [`FrameCuller::cull`] followed by the draw and report hand-offs.
    pub fn run_frame<H, R, V>(
        &mut self,
        camera: &Camera,
        aspect: f32,
        scene: &mut Scene<H>,
        renderer: &mut R,
        reporter: &mut V,
    ) -> FrameStats
    where
        R: RenderSink<H>,
        V: VisibilityReporter,
    {
        let vp = camera.view_projection(aspect);
        let stats = self.cull_with(&vp, scene);

        let draw = DrawList::build(&vp, scene.objects());
        renderer.submit(&draw);
        reporter.report(&stats);
        stats
    }
}
