//! The populate operation: read every maze entity and spawn one cube each.

use crate::error::Result;
use crate::graph::GraphClient;
use crate::models::{ENTITY_KINDS, EntityKind, SpatialEntity};
use crate::scene::{Level, MeshHandle};
use tracing::{error, info};

/// Per-run counters for one populate pass.
#[derive(Debug, Default)]
pub struct PopulateSummary {
    pub total_records: usize,
    pub spawned: usize,
    pub skipped: usize,
}

/// Reads the four entity kinds out of the graph database and spawns a scaled
/// cube actor per record into the given level.
pub struct MazePopulator {
    client: GraphClient,
    cube_asset: String,
}

impl MazePopulator {
    pub fn new(client: GraphClient, cube_asset: impl Into<String>) -> Self {
        Self {
            client,
            cube_asset: cube_asset.into(),
        }
    }

    /// Run one full populate pass.
    ///
    /// The cube mesh is resolved before the first query, so an unknown asset
    /// aborts the run with no actors spawned and no queries issued. Each pass
    /// spawns fresh actors; running twice over unchanged data doubles the
    /// actor count.
    pub async fn populate(&self, level: &mut dyn Level) -> Result<PopulateSummary> {
        let mesh = level.load_mesh(&self.cube_asset)?;

        let mut summary = PopulateSummary::default();
        for kind in ENTITY_KINDS {
            let entities = self.client.fetch_entities(kind).await?;
            info!("Fetched {} {} records", entities.len(), kind.label());
            spawn_records(level, mesh, kind, &entities, &mut summary)?;
        }

        Ok(summary)
    }
}

/// Spawn one kind's worth of records into the level.
///
/// Records without center coordinates are logged at error level and skipped;
/// any other failure (missing extent, spawn failure) propagates and ends the
/// run.
pub fn spawn_records(
    level: &mut dyn Level,
    mesh: MeshHandle,
    kind: EntityKind,
    entities: &[SpatialEntity],
    summary: &mut PopulateSummary,
) -> Result<()> {
    for entity in entities {
        summary.total_records += 1;

        let spec = match entity.actor_spec(kind) {
            Some(spec) => spec?,
            None => {
                error!("{} {} has invalid center coordinates.", kind.label(), entity.name);
                summary.skipped += 1;
                continue;
            }
        };

        let actor = level.spawn_actor(mesh, spec.location)?;
        level.set_actor_scale(actor, spec.scale)?;
        level.set_actor_label(actor, &spec.label)?;
        summary.spawned += 1;
    }

    Ok(())
}
