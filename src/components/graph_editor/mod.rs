//! Interactive graph editor with shortest-path playback.

pub mod animator;
mod component;
pub mod config;
pub mod error;
pub mod exchange;
pub mod geometry;
pub mod graph;
pub mod grid;
pub mod mode;
mod render;
pub mod selection;
pub mod state;
pub mod transform;
pub mod types;

pub use component::GraphEditor;
pub use config::EditorConfig;
pub use error::EditorError;
pub use state::{EditorState, PointerOutcome};
