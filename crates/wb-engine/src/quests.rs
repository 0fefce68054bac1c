//! Quest dependency resolution.
//!
//! The active-quest set is a pure function of the completed-quest
//! history and the dependency graph, so it is recomputed after every
//! completion and after every load. Two passes: eviction drops active
//! quests whose negative dependencies are now violated (mutual
//! exclusion, expiry), activation adds quests whose dependency lists
//! are fully satisfied.
//!
//! Quests with an empty dependency list are never auto-activated; they
//! enter play through [`GameState::activate_quest`] or a loaded save's
//! active list.

use wb_core::WorldConfig;

use crate::state::GameState;

/// Recompute the active-quest set from the dependency graph.
///
/// Call after any mutation that can change completion state. The
/// relative order of surviving active quests is preserved; newly
/// activated quests are appended in quest-id order, which keeps the
/// result deterministic. Active ids unknown to the configuration are
/// evicted; this is what lets a newer configuration heal a stale
/// save.
pub fn refresh_quests(config: &WorldConfig, state: &mut GameState) {
    let evicted = evict_expired(config, state);
    let activated = activate_unlocked(config, state);
    if evicted || activated {
        state.mark_dirty();
    }
}

/// Drop active quests that expired. Returns whether anything changed.
fn evict_expired(config: &WorldConfig, state: &mut GameState) -> bool {
    let keep: Vec<String> = state
        .active_quests
        .iter()
        .filter(|id| {
            config.quests.get(id.as_str()).is_some_and(|quest| {
                !quest
                    .depends_on
                    .iter()
                    .any(|dep| !dep.must_be && state.is_completed(&dep.quest))
            })
        })
        .cloned()
        .collect();

    let changed = keep.len() != state.active_quests.len();
    state.active_quests = keep;
    changed
}

/// Activate quests whose dependencies are now satisfied. Returns
/// whether anything changed.
fn activate_unlocked(config: &WorldConfig, state: &mut GameState) -> bool {
    let mut changed = false;
    for (id, quest) in &config.quests {
        // Dependency-free quests require explicit activation.
        if quest.depends_on.is_empty() {
            continue;
        }
        if state.is_completed(id) || state.is_active(id) {
            continue;
        }

        let unlocked = quest
            .depends_on
            .iter()
            .all(|dep| state.is_completed(&dep.quest) == dep.must_be);
        if unlocked {
            state.active_quests.push(id.clone());
            changed = true;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use wb_core::{Dependency, Quest};

    fn quest(target: &str, depends_on: Vec<Dependency>) -> Quest {
        Quest {
            target: target.to_string(),
            depends_on,
            ..Quest::default()
        }
    }

    fn config_with(quests: Vec<(&str, Quest)>) -> WorldConfig {
        let mut config = WorldConfig::default();
        for (id, q) in quests {
            config.quests.insert(id.to_string(), q);
        }
        config
    }

    #[test]
    fn positive_dependency_unlocks_on_completion() {
        let config = config_with(vec![
            ("find_key", quest("drawer", vec![])),
            ("open_door", quest("door", vec![Dependency::completed("find_key")])),
        ]);
        let mut state = GameState::new("cellar");

        refresh_quests(&config, &mut state);
        assert!(!state.is_active("open_door"));

        state.complete_quest("find_key");
        refresh_quests(&config, &mut state);
        assert!(state.is_active("open_door"));
    }

    #[test]
    fn negative_dependency_evicts_and_blocks() {
        // "ask_nicely" and "force_lock" are mutually exclusive.
        let config = config_with(vec![
            ("force_lock", quest("door", vec![])),
            (
                "ask_nicely",
                quest("guard", vec![Dependency::not_completed("force_lock")]),
            ),
        ]);
        let mut state = GameState::new("cellar");
        state.activate_quest("ask_nicely");
        state.activate_quest("force_lock");

        state.complete_quest("force_lock");
        refresh_quests(&config, &mut state);

        assert!(!state.is_active("ask_nicely"), "evicted by completion of the rival");

        // And it can never come back.
        refresh_quests(&config, &mut state);
        assert!(!state.is_active("ask_nicely"));
    }

    #[test]
    fn empty_dependency_quests_require_explicit_activation() {
        let config = config_with(vec![("intro", quest("door", vec![]))]);
        let mut state = GameState::new("cellar");

        refresh_quests(&config, &mut state);
        assert!(
            !state.is_active("intro"),
            "dependency-free quests must not auto-activate"
        );

        assert!(state.activate_quest("intro"));
        refresh_quests(&config, &mut state);
        assert!(state.is_active("intro"));
    }

    #[test]
    fn activation_appends_in_quest_id_order() {
        let config = config_with(vec![
            ("base", quest("door", vec![])),
            ("b_second", quest("b", vec![Dependency::completed("base")])),
            ("a_first", quest("a", vec![Dependency::completed("base")])),
        ]);
        let mut state = GameState::new("cellar");
        state.complete_quest("base");

        refresh_quests(&config, &mut state);
        assert_eq!(state.active_quests, vec!["a_first", "b_second"]);
    }

    #[test]
    fn surviving_order_is_preserved() {
        let config = config_with(vec![
            ("rival", quest("r", vec![])),
            ("zeta", quest("a", vec![])),
            ("doomed", quest("b", vec![Dependency::not_completed("rival")])),
            ("alpha", quest("c", vec![])),
        ]);
        let mut state = GameState::new("cellar");
        state.activate_quest("zeta");
        state.activate_quest("doomed");
        state.activate_quest("alpha");

        state.complete_quest("rival");
        refresh_quests(&config, &mut state);

        // "doomed" is evicted; the others keep their stored order.
        assert_eq!(state.active_quests, vec!["zeta", "alpha"]);
    }

    #[test]
    fn unknown_active_ids_are_evicted() {
        // A save can reference quests a newer configuration removed.
        let config = config_with(vec![("kept", quest("a", vec![]))]);
        let mut state = GameState::new("cellar");
        state.activate_quest("kept");
        state.activate_quest("removed_in_v2");

        refresh_quests(&config, &mut state);
        assert_eq!(state.active_quests, vec!["kept"]);
    }

    #[test]
    fn refresh_is_idempotent() {
        let config = config_with(vec![
            ("base", quest("door", vec![])),
            ("next", quest("b", vec![Dependency::completed("base")])),
        ]);
        let mut state = GameState::new("cellar");
        state.complete_quest("base");

        refresh_quests(&config, &mut state);
        let after_first = state.active_quests.clone();
        refresh_quests(&config, &mut state);
        assert_eq!(state.active_quests, after_first);
    }

    #[test]
    fn mixed_dependencies_enforce_both_polarities() {
        let config = config_with(vec![
            ("a", quest("a", vec![])),
            ("b", quest("b", vec![])),
            (
                "gated",
                quest(
                    "c",
                    vec![Dependency::completed("a"), Dependency::not_completed("b")],
                ),
            ),
        ]);
        let mut state = GameState::new("cellar");

        state.complete_quest("a");
        state.complete_quest("b");
        refresh_quests(&config, &mut state);
        assert!(!state.is_active("gated"), "negative dependency violated");

        let mut state = GameState::new("cellar");
        state.complete_quest("a");
        refresh_quests(&config, &mut state);
        assert!(state.is_active("gated"));
    }
}
