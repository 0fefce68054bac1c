//! World configuration model for Wimmelbild.
//!
//! Defines the static data a point-and-click adventure is built from:
//! scenes and the world flags they care about, quest definitions with
//! their dependency graph, and ambient interactions on scene objects.
//! A [`WorldConfig`] is deserialized once from JSON and never mutated;
//! all mutable player state lives in the engine crate.

/// Flag conditions gating quests and interactions.
pub mod condition;
/// Dialogue blocks spoken by characters.
pub mod dialogue;
/// Flag mutations applied by quests and interactions.
pub mod effect;
/// Error types for configuration loading.
pub mod error;
/// Ambient, non-quest interactions.
pub mod interaction;
/// Quest definitions and their dependency graph.
pub mod quest;
/// Scene descriptors.
pub mod scene;
/// Configuration consistency checks.
pub mod validate;
/// The top-level world configuration.
pub mod world;

pub use condition::FlagCondition;
pub use dialogue::Dialogue;
pub use effect::Effect;
pub use error::{ConfigError, ConfigResult};
pub use interaction::StaticInteraction;
pub use quest::{Dependency, Outcome, Quest, QuestKind};
pub use scene::SceneConfig;
pub use validate::{ValidationIssue, validate_config};
pub use world::{DEFAULT_START_SCENE, WorldConfig};
