//! Game session management: the engine boundary.
//!
//! A [`GameSession`] owns one world configuration and one player's
//! state, and resolves every player action to completion before the
//! next one is accepted. Active quests are consulted before the static
//! interaction table; the first match wins. The session also owns
//! save-game serialization and the per-scene state snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wb_core::{Quest, QuestKind, StaticInteraction, WorldConfig};

use crate::effects::apply_effects;
use crate::error::EngineResult;
use crate::input::{ActionKind, InteractionInput};
use crate::outcome::{InteractionResult, InteractionStatus};
use crate::quests::refresh_quests;
use crate::save::GameSaveData;
use crate::state::GameState;

/// Save blob values treated as "no save present" by
/// [`GameSession::from_blobs`]. Hosts embedding the engine tend to pass
/// their scripting runtime's null spellings through as strings.
const NULL_SENTINELS: [&str; 2] = ["null", "undefined"];

/// The initial state a presentation layer needs to (re)draw a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Id of the scene to draw.
    pub scene: String,
    /// Values of the scene's relevant flags. Flags never written are
    /// reported as 0.
    pub flags: BTreeMap<String, i64>,
    /// Current inventory, in acquisition order.
    pub inventory: Vec<String>,
}

/// A running adventure: one configuration plus one player's progress.
pub struct GameSession {
    config: WorldConfig,
    state: GameState,
}

impl GameSession {
    /// Start a fresh game at the configuration's starting scene.
    pub fn new(config: WorldConfig) -> Self {
        let state = GameState::new(config.start_scene.clone());
        Self::with_state(config, state)
    }

    /// Resume a game from previously saved state.
    ///
    /// The active-quest set is refreshed immediately, so a save
    /// produced by an older quest graph is re-validated against this
    /// configuration.
    pub fn with_state(config: WorldConfig, mut state: GameState) -> Self {
        refresh_quests(&config, &mut state);
        Self { config, state }
    }

    /// Build a session from a configuration blob and an optional save
    /// blob.
    ///
    /// A save blob that is absent, blank, or a null sentinel starts a
    /// fresh game; anything else must decode or the call fails without
    /// producing a session.
    pub fn from_blobs(config_json: &str, save_json: Option<&str>) -> EngineResult<Self> {
        let config = WorldConfig::from_json(config_json)?;
        match save_json.map(str::trim) {
            Some(blob) if !blob.is_empty() && !NULL_SENTINELS.contains(&blob) => {
                let save = GameSaveData::from_json(blob)?;
                Ok(Self::with_state(config, save.state))
            }
            _ => Ok(Self::new(config)),
        }
    }

    /// Get the world configuration.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Get the player state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get a mutable reference to the player state.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Put a configured quest into play.
    ///
    /// This is how dependency-free quests start; quests with
    /// dependencies normally enter through the dependency resolver.
    /// Returns false for unknown, already active, or completed quests.
    pub fn activate_quest(&mut self, id: &str) -> bool {
        if !self.config.quests.contains_key(id) {
            return false;
        }
        self.state.activate_quest(id)
    }

    // -----------------------------------------------------------------------
    // Interaction resolution
    // -----------------------------------------------------------------------

    /// Resolve one player action.
    ///
    /// Decision order, first match wins: active quests in stored order,
    /// then the static interaction table, then the side-effect-free
    /// `NONE` fallback.
    pub fn handle(&mut self, input: &InteractionInput) -> InteractionResult {
        if let Some(result) = self.try_active_quests(input) {
            return result;
        }
        if let Some(result) = self.try_static_interactions(input) {
            return result;
        }
        InteractionResult::nothing()
    }

    /// Resolve an action supplied as JSON, returning the result as
    /// JSON.
    ///
    /// Malformed input is reported as a `FAIL`-shaped result rather
    /// than an error: a host cannot recover an engine instance
    /// mid-call, but it can always display a message.
    pub fn handle_json(&mut self, input: &str) -> String {
        match InteractionInput::from_json(input) {
            Ok(input) => self.handle(&input).to_json(),
            Err(err) => InteractionResult::error(err.to_string()).to_json(),
        }
    }

    fn try_active_quests(&mut self, input: &InteractionInput) -> Option<InteractionResult> {
        let mut attempt: Option<(String, bool)> = None;

        for id in &self.state.active_quests {
            let Some(quest) = self.config.quests.get(id) else {
                continue;
            };
            if quest.target != input.target || !self.state.satisfies(quest.condition.as_ref()) {
                continue;
            }

            // A plain click on a custom puzzle opens its sub-view and
            // touches no state; the real attempt arrives later as a
            // CUSTOM action.
            if quest.kind == QuestKind::Custom && input.action == ActionKind::Click {
                let mut result = InteractionResult::new(InteractionStatus::OpenSubview, "");
                result.subview = quest.subview.clone();
                return Some(result);
            }

            if input.action.matches(quest.kind) {
                attempt = Some((id.clone(), validate_attempt(input, quest, &self.state)));
                break;
            }
            // A non-matching gesture is not an attempt at this quest;
            // later quests and the static table may still claim it.
        }

        let (id, valid) = attempt?;
        if valid {
            Some(self.complete_quest(&id))
        } else {
            let outcome = self
                .config
                .quests
                .get(&id)
                .map(|quest| quest.on_failure.clone())
                .unwrap_or_default();
            Some(InteractionResult::failure(&outcome))
        }
    }

    /// Quest completion: consume the required item, move the quest to
    /// the completed set, apply its effects, and recompute the active
    /// set from the dependency graph.
    fn complete_quest(&mut self, id: &str) -> InteractionResult {
        let Some(quest) = self.config.quests.get(id).cloned() else {
            return InteractionResult::nothing();
        };

        let removed_item = match &quest.required_item {
            Some(item) => {
                // Defensive: removal is a no-op when the item is not
                // held; the result still names it so the presentation
                // layer clears any drag ghost.
                self.state.remove_item(item);
                Some(item.clone())
            }
            None => None,
        };

        self.state.complete_quest(id);
        let updates = apply_effects(&self.config, &mut self.state, &quest.effects);
        refresh_quests(&self.config, &mut self.state);
        self.state.mark_dirty();

        let mut result =
            InteractionResult::new(InteractionStatus::Success, quest.on_success.text.clone());
        result.trigger = quest.on_success.trigger.clone();
        result.updated_flags = if updates.is_empty() {
            None
        } else {
            Some(updates)
        };
        result.removed_item = removed_item;
        result.dialogue = quest.dialogue.clone();
        result.autosave = true;
        result
    }

    fn try_static_interactions(&mut self, input: &InteractionInput) -> Option<InteractionResult> {
        let variants = self.config.static_interactions.get(&input.target)?;
        let interaction = variants
            .iter()
            .find(|variant| self.state.satisfies(variant.condition.as_ref()))?
            .clone();
        Some(self.fire_static(interaction))
    }

    fn fire_static(&mut self, interaction: StaticInteraction) -> InteractionResult {
        let updates = apply_effects(&self.config, &mut self.state, &interaction.effects);
        if !interaction.item_rewards.is_empty() {
            self.state.add_items(&interaction.item_rewards);
        }

        let mut result = InteractionResult::new(InteractionStatus::Success, interaction.text);
        result.trigger = interaction.trigger;
        result.updated_flags = if updates.is_empty() {
            None
        } else {
            Some(updates)
        };
        result.new_items = if interaction.item_rewards.is_empty() {
            None
        } else {
            Some(interaction.item_rewards)
        };
        result.dialogue = interaction.dialogue;
        result.subview = interaction.subview;

        // Status priority: scene change over dialogue over sub-view.
        let target_scene = interaction.target_scene.filter(|scene| !scene.is_empty());
        if let Some(scene) = target_scene {
            self.state.scene = scene.clone();
            self.state.mark_dirty();
            result.status = InteractionStatus::ChangeScene;
            result.next_scene = Some(scene);
            // The presentation layer redraws the new scene from a
            // fresh snapshot instead of patching flags.
            result.updated_flags = None;
        } else if result.dialogue.is_some() {
            result.status = InteractionStatus::Dialogue;
        } else if result.subview.is_some() {
            result.status = InteractionStatus::OpenSubview;
        }

        result
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Serialize the current state as a save blob and clear the dirty
    /// marker.
    pub fn save(&mut self) -> EngineResult<String> {
        let blob = GameSaveData::now(self.state.clone()).to_json()?;
        self.state.clear_dirty();
        Ok(blob)
    }

    /// Replace the current state with a decoded save blob.
    ///
    /// The blob is decoded fully before anything is replaced, so a
    /// failure leaves the previous state untouched. On success the
    /// quest graph is refreshed against this configuration.
    pub fn load(&mut self, blob: &str) -> EngineResult<()> {
        let save = GameSaveData::from_json(blob)?;
        self.state = save.state;
        refresh_quests(&self.config, &mut self.state);
        Ok(())
    }

    /// Snapshot the current scene for the presentation layer: scene id,
    /// the scene's relevant flags (0 when never written), and the
    /// inventory.
    pub fn scene_snapshot(&self) -> SceneSnapshot {
        let flags = self
            .config
            .scenes
            .get(&self.state.scene)
            .map(|scene| {
                scene
                    .relevant_flags
                    .iter()
                    .map(|flag| (flag.clone(), self.state.flag(flag)))
                    .collect()
            })
            .unwrap_or_default();

        SceneSnapshot {
            scene: self.state.scene.clone(),
            flags,
            inventory: self.state.inventory.clone(),
        }
    }
}

/// Check a matching-kind attempt against the quest's validation
/// contract.
fn validate_attempt(input: &InteractionInput, quest: &Quest, state: &GameState) -> bool {
    match quest.kind {
        QuestKind::Click => true,
        QuestKind::Drag => match quest.required_item.as_deref() {
            Some(required) => input.item.as_deref() == Some(required),
            None => false,
        },
        QuestKind::Input => match quest.code.as_deref() {
            Some(code) => input.content.as_deref() == Some(code),
            None => false,
        },
        QuestKind::Custom => {
            let code_ok = quest
                .code
                .as_deref()
                .is_none_or(|code| input.content.as_deref() == Some(code));
            let item_ok = quest
                .required_item
                .as_deref()
                .is_none_or(|item| state.has_item(item));
            code_ok && item_ok
        }
    }
}
