//! Data models for maze entities and their actor representation.

use serde::{Deserialize, Serialize};

/// The four node labels the populator knows about.
///
/// Each kind gets its own layer in the level, stacked along the z axis so
/// overlapping footprints stay distinguishable in the editor viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Sector,
    Arena,
    GameObject,
    SpawningLocation,
}

/// Fixed processing order, matching the layer stacking order.
pub const ENTITY_KINDS: [EntityKind; 4] = [
    EntityKind::Sector,
    EntityKind::Arena,
    EntityKind::GameObject,
    EntityKind::SpawningLocation,
];

impl EntityKind {
    /// Node label in the graph database, also used as the actor label prefix.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Sector => "Sector",
            EntityKind::Arena => "Arena",
            EntityKind::GameObject => "GameObject",
            EntityKind::SpawningLocation => "SpawningLocation",
        }
    }

    /// Binding variable used in the read query for this kind.
    pub fn binding(&self) -> &'static str {
        match self {
            EntityKind::Sector => "s",
            EntityKind::Arena => "a",
            EntityKind::GameObject => "g",
            EntityKind::SpawningLocation => "sl",
        }
    }

    /// Layer height for this kind's actors.
    pub fn z_offset(&self) -> f64 {
        match self {
            EntityKind::Sector => 0.0,
            EntityKind::Arena => 100.0,
            EntityKind::GameObject => 200.0,
            EntityKind::SpawningLocation => 300.0,
        }
    }

    /// Fixed read query for this kind. No parameters, no limit; every
    /// matching node is returned.
    pub fn query(&self) -> String {
        format!("MATCH ({}:{}) RETURN {}", self.binding(), self.label(), self.binding())
    }
}

/// World-unit multiplier applied to stored center coordinates.
pub const WORLD_SCALE: f64 = 100.0;

/// Fixed z thickness of every spawned cube.
pub const CUBE_DEPTH: f64 = 100.0;

/// A spatial entity as read from the graph database.
///
/// All properties are optional at the wire level; validation happens when the
/// actor transform is derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpatialEntity {
    pub name: String,
    pub center_x: Option<f64>,
    pub center_y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// A point or scale triple in level space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Placement derived from an entity record: where the cube goes, how it is
/// stretched, and what the actor is called.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorSpec {
    pub label: String,
    pub location: Vec3,
    pub scale: Vec3,
}

impl SpatialEntity {
    /// Whether the record carries usable center coordinates.
    ///
    /// Records failing this check are skipped by the populator (logged, not
    /// spawned). Width and height are deliberately not part of this check;
    /// a record with centers but no extent is an error, not a skip.
    pub fn has_center(&self) -> bool {
        self.center_x.is_some() && self.center_y.is_some()
    }

    /// Derive the actor placement for this entity under the given kind.
    ///
    /// Returns `None` when the center coordinates are null (the skip case)
    /// and an error when width or height is missing on an otherwise
    /// spawnable record.
    pub fn actor_spec(&self, kind: EntityKind) -> Option<crate::error::Result<ActorSpec>> {
        let (cx, cy) = match (self.center_x, self.center_y) {
            (Some(cx), Some(cy)) => (cx, cy),
            _ => return None,
        };

        Some(self.extent().map(|(width, height)| ActorSpec {
            label: format!("{}_{}", kind.label(), self.name),
            location: Vec3::new(cx * WORLD_SCALE, cy * WORLD_SCALE, kind.z_offset()),
            scale: Vec3::new(width, height, CUBE_DEPTH),
        }))
    }

    fn extent(&self) -> crate::error::Result<(f64, f64)> {
        let width = self
            .width
            .ok_or_else(|| crate::error::MazeError::MissingField(format!("{}: width", self.name)))?;
        let height = self
            .height
            .ok_or_else(|| crate::error::MazeError::MissingField(format!("{}: height", self.name)))?;
        Ok((width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(name: &str, cx: Option<f64>, cy: Option<f64>, w: Option<f64>, h: Option<f64>) -> SpatialEntity {
        SpatialEntity {
            name: name.to_string(),
            center_x: cx,
            center_y: cy,
            width: w,
            height: h,
        }
    }

    #[test]
    fn test_sector_transform() {
        let sector = entity("A1", Some(5.0), Some(10.0), Some(20.0), Some(15.0));
        let spec = sector.actor_spec(EntityKind::Sector).unwrap().unwrap();

        assert_eq!(spec.label, "Sector_A1");
        assert_eq!(spec.location, Vec3::new(500.0, 1000.0, 0.0));
        assert_eq!(spec.scale, Vec3::new(20.0, 15.0, 100.0));
    }

    #[test]
    fn test_z_offsets_per_kind() {
        let e = entity("x", Some(0.0), Some(0.0), Some(1.0), Some(1.0));
        let z = |kind: EntityKind| e.actor_spec(kind).unwrap().unwrap().location.z;

        assert_eq!(z(EntityKind::Sector), 0.0);
        assert_eq!(z(EntityKind::Arena), 100.0);
        assert_eq!(z(EntityKind::GameObject), 200.0);
        assert_eq!(z(EntityKind::SpawningLocation), 300.0);
    }

    #[test]
    fn test_null_center_is_skip() {
        let no_x = entity("broken", None, Some(1.0), Some(1.0), Some(1.0));
        let no_y = entity("broken", Some(1.0), None, Some(1.0), Some(1.0));

        assert!(no_x.actor_spec(EntityKind::Arena).is_none());
        assert!(no_y.actor_spec(EntityKind::Arena).is_none());
        assert!(!no_x.has_center());
    }

    #[test]
    fn test_null_extent_is_error() {
        let no_width = entity("thin", Some(1.0), Some(1.0), None, Some(1.0));
        let result = no_width.actor_spec(EntityKind::GameObject).unwrap();

        assert!(matches!(result, Err(crate::error::MazeError::MissingField(_))));
    }

    #[test]
    fn test_fixed_queries() {
        assert_eq!(EntityKind::Sector.query(), "MATCH (s:Sector) RETURN s");
        assert_eq!(EntityKind::Arena.query(), "MATCH (a:Arena) RETURN a");
        assert_eq!(EntityKind::GameObject.query(), "MATCH (g:GameObject) RETURN g");
        assert_eq!(
            EntityKind::SpawningLocation.query(),
            "MATCH (sl:SpawningLocation) RETURN sl"
        );
    }
}
