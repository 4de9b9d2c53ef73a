//! Passage: transition-descriptor resolution and routed-view lifecycle.
//!
//! Facade over the workspace crates. Most hosts want [`passage_core`] for
//! the binding/engine machinery and [`passage_config`] to load defaults
//! from `passage.toml`.

pub use passage_core::*;

pub use passage_config::{PassageConfig, StyleConfig, TransitionConfig};
