//! Interaction resolution engine for Wimmelbild.
//!
//! Given a player action on a scene object and a world configuration
//! from [`wb_core`], a [`GameSession`] decides what happens: quest
//! progress, flag mutations, inventory changes, scene transitions, and
//! dialogue or sub-view triggers. Active quests are consulted before
//! ambient interactions, effects are projected onto the current
//! scene's relevant flags, and the quest dependency graph is
//! recomputed after every completion. The session also owns save-game
//! serialization of the mutable player state.
//!
//! The engine is single-threaded and synchronous: one action is
//! resolved to completion before the next, with no interior I/O. A
//! host keeps exactly one in-flight call per session; `&mut self` on
//! the mutating entry points enforces that for a single session value.

/// Effect application and scene projection.
pub mod effects;
/// Error types for the engine.
pub mod error;
/// Player action payloads.
pub mod input;
/// Interaction results returned to the presentation layer.
pub mod outcome;
/// Quest dependency resolution.
pub mod quests;
/// Versioned save-game encoding.
pub mod save;
/// Game session management: the engine boundary.
pub mod session;
/// Mutable per-player game state.
pub mod state;

pub use effects::apply_effects;
pub use error::{EngineError, EngineResult};
pub use input::{ActionKind, InteractionInput};
pub use outcome::{InteractionResult, InteractionStatus};
pub use quests::refresh_quests;
pub use save::{GameSaveData, SAVE_VERSION};
pub use session::{GameSession, SceneSnapshot};
pub use state::GameState;
