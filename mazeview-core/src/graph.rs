//! Bolt client for reading maze entities out of the graph database.

use crate::config::GraphConfig;
use crate::error::Result;
use crate::models::{EntityKind, SpatialEntity};
use neo4rs::{ConfigBuilder, Graph, Node, query};
use tracing::debug;

/// Wrapper around the bolt driver.
///
/// The driver connection is released when the client is dropped, so it is
/// freed on every exit path, including aborts before the first query.
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Open a driver-level connection. No session is held between calls.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let neo_config = ConfigBuilder::default()
            .uri(config.bolt_uri())
            .user(config.user.as_str())
            .password(config.password.as_str())
            .db(config.database.as_str())
            .build()?;

        debug!("Connecting to {} (database {})", config.bolt_uri(), config.database);
        let graph = Graph::connect(neo_config).await?;

        Ok(Self { graph })
    }

    /// Run the fixed read query for one entity kind and materialize every
    /// matching node. Plain reads, no transaction, no pagination.
    pub async fn fetch_entities(&self, kind: EntityKind) -> Result<Vec<SpatialEntity>> {
        let mut stream = self.graph.execute(query(&kind.query())).await?;

        let mut entities = Vec::new();
        while let Some(row) = stream.next().await? {
            let node: Node = row.get(kind.binding())?;
            entities.push(entity_from_node(&node)?);
        }

        debug!("Fetched {} {} records", entities.len(), kind.label());
        Ok(entities)
    }
}

/// Map node properties onto an entity record.
///
/// Absent properties and explicit nulls both come out as `None`; which of the
/// two a record had is not distinguishable downstream and does not need to be.
/// A property that is present but of the wrong type is a decode error, not a
/// skippable record.
fn entity_from_node(node: &Node) -> Result<SpatialEntity> {
    Ok(SpatialEntity {
        name: opt_string(node, "name")?.unwrap_or_else(|| "unknown".to_string()),
        center_x: opt_f64(node, "center_x")?,
        center_y: opt_f64(node, "center_y")?,
        width: opt_f64(node, "width")?,
        height: opt_f64(node, "height")?,
    })
}

fn opt_f64(node: &Node, key: &str) -> Result<Option<f64>> {
    decoded_property(node.keys().contains(&key), node.get::<Option<f64>>(key))
}

fn opt_string(node: &Node, key: &str) -> Result<Option<String>> {
    decoded_property(node.keys().contains(&key), node.get::<Option<String>>(key))
}

/// Absent properties read as null; a present property that fails to decode
/// propagates its error instead of being folded into the skip path.
fn decoded_property<T>(
    present: bool,
    value: std::result::Result<Option<T>, neo4rs::DeError>,
) -> Result<Option<T>> {
    if !present {
        return Ok(None);
    }
    Ok(value?)
}
