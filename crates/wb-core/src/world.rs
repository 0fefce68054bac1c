//! The top-level world configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::interaction::StaticInteraction;
use crate::quest::Quest;
use crate::scene::SceneConfig;
use crate::validate::validate_config;

/// Scene a fresh game starts in when the configuration names none.
pub const DEFAULT_START_SCENE: &str = "start_room";

/// The complete static configuration of an adventure.
///
/// Loaded once from JSON and shared read-only for the lifetime of the
/// engine. All maps are `BTreeMap` so that iteration order, and with
/// it quest activation order, is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Scene the player starts in on a fresh game.
    #[serde(default = "default_start_scene")]
    pub start_scene: String,
    /// Scene descriptors keyed by scene id.
    #[serde(default)]
    pub scenes: BTreeMap<String, SceneConfig>,
    /// Ambient interaction variants keyed by target object id.
    ///
    /// List order is significant: the first variant whose condition is
    /// satisfied wins.
    #[serde(default)]
    pub static_interactions: BTreeMap<String, Vec<StaticInteraction>>,
    /// Quest definitions keyed by quest id.
    #[serde(default)]
    pub quests: BTreeMap<String, Quest>,
}

fn default_start_scene() -> String {
    DEFAULT_START_SCENE.to_string()
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            start_scene: default_start_scene(),
            scenes: BTreeMap::new(),
            static_interactions: BTreeMap::new(),
            quests: BTreeMap::new(),
        }
    }
}

impl WorldConfig {
    /// Parse a configuration from its JSON encoding.
    pub fn from_json(source: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parse a configuration and reject it if consistency checks find
    /// any error-level issue.
    ///
    /// Warnings are tolerated; the engine handles them defensively at
    /// runtime.
    pub fn from_json_checked(source: &str) -> ConfigResult<Self> {
        let config = Self::from_json(source)?;
        let errors: Vec<String> = validate_config(&config)
            .into_iter()
            .filter(|issue| issue.is_error)
            .map(|issue| issue.to_string())
            .collect();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Invalid(errors.join("; ")))
        }
    }

    /// Serialize the configuration back to JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::QuestKind;

    const SAMPLE: &str = r#"{
        "start_scene": "cellar",
        "scenes": {
            "cellar": {"relevant_flags": ["door_open", "lamp_lit"]}
        },
        "static_interactions": {
            "shelf": [
                {"text": "Empty now.", "condition": {"flag": "searched", "value": 1}},
                {"text": "You find a key.", "item_rewards": ["key"],
                 "effects": [{"flag": "searched", "value": 1}]}
            ]
        },
        "quests": {
            "open_door": {
                "target": "door",
                "kind": "DRAG",
                "required_item": "key",
                "on_failure": {"text": "Locked."},
                "on_success": {"text": "It opens."},
                "effects": [{"flag": "door_open", "value": 1}]
            }
        }
    }"#;

    #[test]
    fn parse_sample_config() {
        let config = WorldConfig::from_json(SAMPLE).unwrap();

        assert_eq!(config.start_scene, "cellar");
        assert_eq!(config.scenes["cellar"].relevant_flags.len(), 2);
        assert_eq!(config.static_interactions["shelf"].len(), 2);
        assert_eq!(config.quests["open_door"].kind, QuestKind::Drag);
    }

    #[test]
    fn start_scene_defaults() {
        let config = WorldConfig::from_json("{}").unwrap();
        assert_eq!(config.start_scene, DEFAULT_START_SCENE);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = WorldConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn json_round_trip() {
        let config = WorldConfig::from_json(SAMPLE).unwrap();
        let reparsed = WorldConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn checked_parse_rejects_unsatisfiable_quests() {
        // A DRAG quest with no required item can never be completed.
        let source = r#"{
            "quests": {"broken": {"target": "door", "kind": "DRAG"}}
        }"#;
        let err = WorldConfig::from_json_checked(source).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
