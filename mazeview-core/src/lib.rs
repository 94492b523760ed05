//! Core library for populating editor levels from graph-database maze data.

pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod populate;
pub mod scene;

pub use error::{MazeError, Result};
pub use populate::{MazePopulator, PopulateSummary};
