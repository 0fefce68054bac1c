//! Versioned save-game encoding.
//!
//! The save blob wraps a [`GameState`] snapshot with a unix timestamp
//! and a semantic version string, so a loader can recognize the format
//! before touching any live state. Unknown or missing fields default
//! during decoding; compatibility policy across versions is owned by
//! the loader.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::state::GameState;

/// Version string embedded in every save blob.
pub const SAVE_VERSION: &str = "1.0.0";

/// A versioned snapshot of mutable player state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSaveData {
    /// Semantic version of the save format.
    pub version: String,
    /// When the save was produced, as a unix timestamp.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub saved_at: DateTime<Utc>,
    /// The player state snapshot.
    pub state: GameState,
}

impl GameSaveData {
    /// Wrap a state snapshot with the current time and format version.
    pub fn now(state: GameState) -> Self {
        Self {
            version: SAVE_VERSION.to_string(),
            saved_at: Utc::now(),
            state,
        }
    }

    /// Serialize to the portable JSON save encoding.
    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string(self).map_err(EngineError::SaveEncode)
    }

    /// Decode a save blob. Touches no live state; the caller decides
    /// what to replace on success.
    pub fn from_json(blob: &str) -> EngineResult<Self> {
        serde_json::from_str(blob).map_err(EngineError::SaveDecode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_state() -> GameState {
        let mut state = GameState::new("cellar");
        state.set_flag("door_open", 1);
        state.add_item("key");
        state.add_item("key");
        state.activate_quest("open_door");
        state.complete_quest("light_lamp");
        state
    }

    #[test]
    fn round_trip_preserves_state() {
        let save = GameSaveData::now(sample_state());
        let blob = save.to_json().unwrap();
        let decoded = GameSaveData::from_json(&blob).unwrap();

        assert_eq!(decoded.version, SAVE_VERSION);
        assert_eq!(decoded.state, save.state);
    }

    #[test]
    fn blob_carries_version_and_timestamp() {
        let blob = GameSaveData::now(sample_state()).to_json().unwrap();
        assert!(blob.contains("\"version\":\"1.0.0\""));
        assert!(blob.contains("\"saved_at\":"));
    }

    #[test]
    fn malformed_blob_is_a_decode_error() {
        let err = GameSaveData::from_json("{\"version\": 12").unwrap_err();
        assert!(matches!(err, EngineError::SaveDecode(_)));
    }

    #[test]
    fn missing_state_fields_default() {
        let blob = r#"{"version": "1.0.0", "saved_at": 0, "state": {"scene": "cellar"}}"#;
        let decoded = GameSaveData::from_json(blob).unwrap();

        assert_eq!(decoded.state.scene, "cellar");
        assert!(decoded.state.inventory.is_empty());
        assert!(decoded.state.flags.is_empty());
        assert!(decoded.state.active_quests.is_empty());
    }

    proptest! {
        #[test]
        fn round_trip_arbitrary_states(
            scene in "[a-z_]{1,12}",
            inventory in prop::collection::vec("[a-z]{1,6}", 0..6),
            flags in prop::collection::btree_map("[a-z]{1,6}", -100i64..100, 0..6),
            active in prop::collection::vec("[a-z]{1,6}", 0..4),
        ) {
            let mut state = GameState::new(scene);
            state.inventory = inventory;
            state.flags = flags;
            // Route activation through the mutator so the active/
            // completed invariant holds for the snapshot.
            for id in active {
                state.activate_quest(id);
            }

            let blob = GameSaveData::now(state.clone()).to_json().unwrap();
            let decoded = GameSaveData::from_json(&blob).unwrap();
            prop_assert_eq!(decoded.state, state);
        }
    }
}
