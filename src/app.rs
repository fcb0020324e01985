use cgmath::Deg;
use instant::Instant;
use log::{debug, info, warn};

use crate::camera::{self, Camera};
use crate::config::Config;
use crate::error::Result;
use crate::frame::{DrawList, FrameCuller, FrameStats, LogReporter, RenderSink};
use crate::mesh::MeshKind;
use crate::scene::{self, Scene};
use crate::scene_store;

// -------- logging --------

pub fn init_logging() {
    use env_logger::{Builder, Env};
    let env = Env::default().filter_or("RUST_LOG", "frustum_cull=info,frustum_cull_demo=info");
    let _ = Builder::from_env(env).try_init();
    info!("init_logging: native");
}

// -------- headless renderer --------

/// Stands in for a GPU renderer: counts what it would upload.
#[derive(Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
    pub instance_bytes: usize,
    pub boxes: usize,
}

impl RenderSink<MeshKind> for HeadlessRenderer {
    fn submit(&mut self, draw: &DrawList<'_, MeshKind>) {
        let solid = draw.solid_instances();
        let bytes: &[u8] = bytemuck::cast_slice(&solid);
        self.frames += 1;
        self.instance_bytes = bytes.len();
        self.boxes = draw.boxes.len();
        debug!(
            "submit: solid={} wire={} boxes={} instance_bytes={}",
            draw.solid.len(), draw.wire.len(), draw.boxes.len(), bytes.len()
        );
    }
}

// -------- public entry --------

pub fn build_scene(cfg: &Config) -> Result<Scene<MeshKind>> {
    let scene = match &cfg.scene.load_from {
        Some(path) => {
            let scene = scene_store::load_scene(path)?;
            info!("loaded {} objects from {}", scene.len(), path.display());
            scene
        }
        None => {
            let scene = scene::scatter(&cfg.scene.scatter);
            info!(
                "scattered {} {:?} objects, {} triangles each (spread={}, seed={:#x})",
                scene.len(), cfg.scene.scatter.mesh, cfg.scene.scatter.mesh.build().triangle_count(),
                cfg.scene.scatter.spread, cfg.scene.scatter.seed
            );
            scene
        }
    };

    if let Some(path) = &cfg.scene.save_to {
        scene_store::save_scene(path, &scene)?;
    }
    Ok(scene)
}

/// Runs `cfg.demo.frames` frames: orbit the camera, step the fov the way the
/// widen/narrow keys would, cull, submit, report.
pub fn run(cfg: &Config) -> Result<FrameStats> {
    let mut scene = build_scene(cfg)?;
    if scene.is_empty() {
        warn!("scene is empty; every frame will report 0/0");
    }

    let mut camera: Camera = cfg.camera.to_camera();
    let aspect = camera::aspect_ratio(cfg.viewport.width, cfg.viewport.height);
    let mut culler = FrameCuller::new();
    let mut renderer = HeadlessRenderer::default();
    let mut reporter = LogReporter::new(cfg.demo.report_interval_secs);

    let started = Instant::now();
    let mut widening = true;
    let mut last = FrameStats { total: scene.len(), ..FrameStats::default() };

    for frame in 0..cfg.demo.frames {
        camera.orbit(Deg(cfg.demo.orbit_deg_per_frame));

        let step = cfg.demo.fov_step_every;
        if step > 0 && frame > 0 && frame % step == 0 {
            let before = camera.fov_y.0;
            if widening { camera.widen_fov() } else { camera.narrow_fov() }
            if camera.fov_y.0 == before {
                widening = !widening;
            }
            debug!("fov => {:.1}", camera.fov_y.0);
        }

        last = culler.run_frame(&camera, aspect, &mut scene, &mut renderer, &mut reporter);
    }

    let secs = started.elapsed().as_secs_f32();
    info!(
        "ran {} frames in {:.3}s, last frame {} (fov {:.1}, {} flagged visible)",
        culler.frames_run(), secs, last, camera.fov_y.0, scene.visible_count()
    );
    Ok(last)
}
