//! Connection and scene configuration.
//!
//! Loaded from TOML files like:
//! ```toml
//! [graph]
//! host = "localhost"
//! port = 7687
//! user = "neo4j"
//! password = "secret"
//! database = "world"
//!
//! [scene]
//! cube_asset = "/Engine/BasicShapes/Cube"
//! output = "maze_scene.json"
//! ```

use crate::error::{MazeError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    7687
}

fn default_database() -> String {
    "world".to_string()
}

fn default_cube_asset() -> String {
    "/Engine/BasicShapes/Cube".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("maze_scene.json")
}

/// Graph database connection settings.
#[derive(Debug, Deserialize, Clone)]
pub struct GraphConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    pub password: String,
    #[serde(default = "default_database")]
    pub database: String,
}

impl GraphConfig {
    /// Bolt endpoint derived from host and port.
    pub fn bolt_uri(&self) -> String {
        format!("bolt://{}:{}", self.host, self.port)
    }
}

/// Scene output settings.
#[derive(Debug, Deserialize, Clone)]
pub struct SceneConfig {
    #[serde(default = "default_cube_asset")]
    pub cube_asset: String,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cube_asset: default_cube_asset(),
            output: default_output(),
        }
    }
}

/// Complete populator configuration loaded from TOML.
#[derive(Debug, Deserialize, Clone)]
pub struct PopulatorConfig {
    pub graph: GraphConfig,
    #[serde(default)]
    pub scene: SceneConfig,
}

impl PopulatorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MazeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config from {:?}: {}", path, e),
            ))
        })?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| MazeError::Parse(format!("Failed to parse config TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[graph]
host = "db.internal"
port = 7688
user = "neo4j"
password = "hunter2"
database = "maze"

[scene]
cube_asset = "/Engine/BasicShapes/Cube"
output = "out/scene.json"
"#;

        let config = PopulatorConfig::from_str(toml).unwrap();
        assert_eq!(config.graph.host, "db.internal");
        assert_eq!(config.graph.port, 7688);
        assert_eq!(config.graph.user, "neo4j");
        assert_eq!(config.graph.password, "hunter2");
        assert_eq!(config.graph.database, "maze");
        assert_eq!(config.scene.output, PathBuf::from("out/scene.json"));
    }

    #[test]
    fn test_defaults_applied() {
        let toml = r#"
[graph]
user = "neo4j"
password = "secret"
"#;

        let config = PopulatorConfig::from_str(toml).unwrap();
        assert_eq!(config.graph.host, "localhost");
        assert_eq!(config.graph.port, 7687);
        assert_eq!(config.graph.database, "world");
        assert_eq!(config.scene.cube_asset, "/Engine/BasicShapes/Cube");
        assert_eq!(config.scene.output, PathBuf::from("maze_scene.json"));
    }

    #[test]
    fn test_bolt_uri() {
        let toml = r#"
[graph]
host = "127.0.0.1"
port = 7687
user = "neo4j"
password = "secret"
"#;

        let config = PopulatorConfig::from_str(toml).unwrap();
        assert_eq!(config.graph.bolt_uri(), "bolt://127.0.0.1:7687");
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let toml = r#"
[graph]
host = "localhost"
"#;

        assert!(PopulatorConfig::from_str(toml).is_err());
    }
}
