// snapshot.rs - PNG frame captures and JSON scene dumps
use anyhow::{Context, Result};
use chrono::Local;
use glam::Vec3;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::math::Transform;
use crate::scene::Scene;

/// Writes frames as `<run stamp>-frame<NNNNN>.png` into one directory
pub struct SnapshotWriter {
    dir: PathBuf,
    stamp: String,
    written: Vec<PathBuf>,
}

impl SnapshotWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).with_context(|| format!("failed to create snapshot directory {:?}", dir))?;
        Ok(Self {
            dir,
            stamp: Local::now().format("%Y%m%d-%H%M%S").to_string(),
            written: Vec::new(),
        })
    }

    pub fn path_for(&self, frame: u64) -> PathBuf {
        self.dir.join(format!("{}-frame{:05}.png", self.stamp, frame))
    }

    /// `rgba` is tightly packed RGBA8, row 0 at the top
    pub fn write(&mut self, frame: u64, width: u32, height: u32, rgba: &[u8]) -> Result<PathBuf> {
        let path = self.path_for(frame);
        write_png(&path, width, height, rgba)?;
        log::info!("snapshot {:?}", path);
        self.written.push(path.clone());
        Ok(path)
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

pub fn write_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> Result<()> {
    let image = image::RgbaImage::from_raw(width, height, rgba.to_vec())
        .with_context(|| format!("{} bytes is not a {}x{} RGBA frame", rgba.len(), width, height))?;
    image
        .save(path)
        .with_context(|| format!("failed to write {:?}", path))?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct EntityDump {
    pub name: String,
    pub transform: Transform,
    pub spin: Vec3,
    pub primitives: usize,
}

#[derive(Debug, Serialize)]
pub struct SceneDump {
    pub scene: String,
    pub camera_position: Vec3,
    pub aspect: f32,
    pub entities: Vec<EntityDump>,
}

impl SceneDump {
    pub fn capture(scene: &Scene) -> Self {
        Self {
            scene: scene.name().to_string(),
            camera_position: scene.camera.position,
            aspect: scene.camera.aspect,
            entities: scene
                .entities()
                .iter()
                .map(|e| EntityDump {
                    name: e.name().to_string(),
                    transform: e.transform,
                    spin: e.spin(),
                    primitives: e.primitives().len(),
                })
                .collect(),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("failed to write scene dump {:?}", path))?;
        log::info!("scene dump {:?}", path);
        Ok(())
    }
}
