//! Effect application and scene projection.

use std::collections::{BTreeMap, BTreeSet};

use wb_core::{Effect, WorldConfig};

use crate::state::GameState;

/// Apply a list of effects to the flag store and return the subset the
/// current scene cares about.
///
/// Every effect lands in the flag store regardless of scene relevance;
/// the returned map is the local projection the presentation layer can
/// patch into the visible scene. Input order is preserved, so when one
/// list names the same flag twice the later entry wins. An empty list
/// returns an empty map without marking the state dirty.
pub fn apply_effects(
    config: &WorldConfig,
    state: &mut GameState,
    effects: &[Effect],
) -> BTreeMap<String, i64> {
    let mut updates = BTreeMap::new();
    if effects.is_empty() {
        return updates;
    }

    let relevant: BTreeSet<&str> = config
        .scenes
        .get(&state.scene)
        .map(|scene| scene.relevant_flags.iter().map(String::as_str).collect())
        .unwrap_or_default();

    for effect in effects {
        state.set_flag(effect.flag.clone(), effect.value);
        if relevant.contains(effect.flag.as_str()) {
            updates.insert(effect.flag.clone(), effect.value);
        }
    }

    updates
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wb_core::SceneConfig;

    fn test_config() -> WorldConfig {
        let mut config = WorldConfig::default();
        config.scenes.insert(
            "cellar".to_string(),
            SceneConfig::new(["door_open", "lamp_lit"]),
        );
        config
    }

    #[test]
    fn projection_contains_only_relevant_flags() {
        let config = test_config();
        let mut state = GameState::new("cellar");

        let updates = apply_effects(
            &config,
            &mut state,
            &[
                Effect::new("door_open", 1),
                Effect::new("far_away_flag", 9),
            ],
        );

        assert_eq!(updates.len(), 1);
        assert_eq!(updates.get("door_open"), Some(&1));
        // The irrelevant flag still landed in the store.
        assert_eq!(state.flag("far_away_flag"), 9);
    }

    #[test]
    fn empty_effect_list_does_not_dirty_state() {
        let config = test_config();
        let mut state = GameState::new("cellar");

        let updates = apply_effects(&config, &mut state, &[]);

        assert!(updates.is_empty());
        assert!(!state.is_dirty());
    }

    #[test]
    fn nonempty_effect_list_dirties_state() {
        let config = test_config();
        let mut state = GameState::new("cellar");

        apply_effects(&config, &mut state, &[Effect::new("lamp_lit", 1)]);
        assert!(state.is_dirty());
    }

    #[test]
    fn later_duplicate_wins() {
        let config = test_config();
        let mut state = GameState::new("cellar");

        let updates = apply_effects(
            &config,
            &mut state,
            &[Effect::new("lamp_lit", 1), Effect::new("lamp_lit", 2)],
        );

        assert_eq!(state.flag("lamp_lit"), 2);
        assert_eq!(updates.get("lamp_lit"), Some(&2));
    }

    #[test]
    fn unknown_scene_projects_nothing() {
        let config = test_config();
        let mut state = GameState::new("not_a_scene");

        let updates = apply_effects(&config, &mut state, &[Effect::new("door_open", 1)]);

        assert!(updates.is_empty());
        assert_eq!(state.flag("door_open"), 1);
    }

    proptest! {
        // Effects are absolute sets, so replaying a list is a no-op on
        // the flag store.
        #[test]
        fn replay_is_idempotent(
            effects in prop::collection::vec(
                ("[a-d]", -5i64..5).prop_map(|(flag, value)| Effect::new(flag, value)),
                0..8,
            )
        ) {
            let config = test_config();

            let mut once = GameState::new("cellar");
            apply_effects(&config, &mut once, &effects);

            let mut twice = GameState::new("cellar");
            apply_effects(&config, &mut twice, &effects);
            apply_effects(&config, &mut twice, &effects);

            prop_assert_eq!(once.flags, twice.flags);
        }
    }
}
