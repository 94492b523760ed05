//! Level abstraction and the scene-file backend.
//!
//! The editor level is an explicit mutable handle handed to the populator
//! rather than ambient global state; anything that can resolve mesh assets
//! and host spawned actors can implement [`Level`].

use crate::error::{MazeError, Result};
use crate::models::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Handle to a mesh resolved from the level's asset registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshHandle(pub(crate) usize);

/// Handle to an actor spawned into the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorId(pub(crate) u32);

/// A mutable editor level that cube actors can be spawned into.
///
/// The call sequence mirrors editor scripting APIs: resolve the mesh, spawn
/// at a location, then apply scale and label as post-spawn mutations.
pub trait Level {
    /// Resolve a named built-in mesh asset. Errors when the registry does
    /// not know the asset; callers treat that as fatal.
    fn load_mesh(&mut self, asset_path: &str) -> Result<MeshHandle>;

    /// Add one actor instance of the mesh at the given location.
    fn spawn_actor(&mut self, mesh: MeshHandle, location: Vec3) -> Result<ActorId>;

    fn set_actor_scale(&mut self, actor: ActorId, scale: Vec3) -> Result<()>;

    fn set_actor_label(&mut self, actor: ActorId, label: &str) -> Result<()>;
}

/// Built-in basic shape assets every scene file knows about.
const BASIC_SHAPES: [&str; 5] = [
    "/Engine/BasicShapes/Cube",
    "/Engine/BasicShapes/Sphere",
    "/Engine/BasicShapes/Cylinder",
    "/Engine/BasicShapes/Cone",
    "/Engine/BasicShapes/Plane",
];

/// One spawned actor as it appears in the scene file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneActor {
    pub mesh: String,
    pub label: String,
    pub location: Vec3,
    pub scale: Vec3,
}

/// Scene-file backend: accumulates actors in memory and serializes them to a
/// JSON document for the editor to import.
#[derive(Debug, Default)]
pub struct SceneFile {
    actors: Vec<SceneActor>,
}

impl SceneFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actors(&self) -> &[SceneActor] {
        &self.actors
    }

    /// Write the accumulated actor list as pretty-printed JSON.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.actors)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn actor_mut(&mut self, actor: ActorId) -> Result<&mut SceneActor> {
        self.actors
            .get_mut(actor.0 as usize)
            .ok_or(MazeError::InvalidActor(actor.0))
    }
}

impl Level for SceneFile {
    fn load_mesh(&mut self, asset_path: &str) -> Result<MeshHandle> {
        BASIC_SHAPES
            .iter()
            .position(|&shape| shape == asset_path)
            .map(MeshHandle)
            .ok_or_else(|| MazeError::AssetNotFound(asset_path.to_string()))
    }

    fn spawn_actor(&mut self, mesh: MeshHandle, location: Vec3) -> Result<ActorId> {
        let id = ActorId(self.actors.len() as u32);
        self.actors.push(SceneActor {
            mesh: BASIC_SHAPES[mesh.0].to_string(),
            label: String::new(),
            location,
            scale: Vec3::new(1.0, 1.0, 1.0),
        });
        Ok(id)
    }

    fn set_actor_scale(&mut self, actor: ActorId, scale: Vec3) -> Result<()> {
        self.actor_mut(actor)?.scale = scale;
        Ok(())
    }

    fn set_actor_label(&mut self, actor: ActorId, label: &str) -> Result<()> {
        self.actor_mut(actor)?.label = label.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_known_mesh() {
        let mut scene = SceneFile::new();
        assert!(scene.load_mesh("/Engine/BasicShapes/Cube").is_ok());
    }

    #[test]
    fn test_load_unknown_mesh_fails() {
        let mut scene = SceneFile::new();
        let err = scene.load_mesh("/Engine/BasicShapes/Teapot").unwrap_err();
        assert!(matches!(err, MazeError::AssetNotFound(_)));
    }

    #[test]
    fn test_spawn_then_mutate() {
        let mut scene = SceneFile::new();
        let mesh = scene.load_mesh("/Engine/BasicShapes/Cube").unwrap();

        let actor = scene.spawn_actor(mesh, Vec3::new(500.0, 1000.0, 0.0)).unwrap();
        scene.set_actor_scale(actor, Vec3::new(20.0, 15.0, 100.0)).unwrap();
        scene.set_actor_label(actor, "Sector_A1").unwrap();

        assert_eq!(scene.actors().len(), 1);
        let spawned = &scene.actors()[0];
        assert_eq!(spawned.label, "Sector_A1");
        assert_eq!(spawned.location, Vec3::new(500.0, 1000.0, 0.0));
        assert_eq!(spawned.scale, Vec3::new(20.0, 15.0, 100.0));
        assert_eq!(spawned.mesh, "/Engine/BasicShapes/Cube");
    }

    #[test]
    fn test_write_scene_json() {
        let mut scene = SceneFile::new();
        let mesh = scene.load_mesh("/Engine/BasicShapes/Cube").unwrap();
        let actor = scene.spawn_actor(mesh, Vec3::new(0.0, 0.0, 100.0)).unwrap();
        scene.set_actor_label(actor, "Arena_main").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        scene.write_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<SceneActor> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].label, "Arena_main");
    }
}
