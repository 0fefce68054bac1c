//! Quest definitions and their dependency graph.

use serde::{Deserialize, Serialize};

use crate::condition::FlagCondition;
use crate::dialogue::Dialogue;
use crate::effect::Effect;

/// How the player must interact with a quest's target object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestKind {
    /// A plain click on the target.
    #[default]
    Click,
    /// Dragging a specific inventory item onto the target.
    Drag,
    /// Typing a code or phrase into the target.
    Input,
    /// A custom mini-interaction resolved in a sub-view.
    Custom,
}

/// A precondition on another quest's completion status.
///
/// `must_be: true` is a positive dependency (the referenced quest must
/// be completed first); `must_be: false` is a negative one, used for
/// mutual exclusion and expiry (the referenced quest must NOT have been
/// completed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Id of the quest whose completion status is examined.
    pub quest: String,
    /// Required status of the referenced quest.
    pub must_be: bool,
}

impl Dependency {
    /// Require `quest` to be completed.
    pub fn completed(quest: impl Into<String>) -> Self {
        Self {
            quest: quest.into(),
            must_be: true,
        }
    }

    /// Require `quest` to NOT be completed.
    pub fn not_completed(quest: impl Into<String>) -> Self {
        Self {
            quest: quest.into(),
            must_be: false,
        }
    }
}

/// Player-facing text and presentation trigger for one outcome of a
/// quest attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Text shown to the player.
    #[serde(default)]
    pub text: String,
    /// Opaque token for the presentation layer (animation, sound).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
}

impl Outcome {
    /// Create an outcome with the given text and no trigger.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            trigger: None,
        }
    }

    /// Set the presentation trigger.
    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = Some(trigger.into());
        self
    }
}

/// A quest: one gated puzzle step bound to a target object.
///
/// A quest only reacts to input while it is in the active set and its
/// flag condition holds. Completion applies the effects, records the
/// quest as completed, and recomputes the active set from the
/// dependency graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Id of the object the player must interact with.
    pub target: String,
    /// Interaction kind required to complete the quest.
    #[serde(default)]
    pub kind: QuestKind,
    /// Item that must be dragged onto the target (`Drag`) or held
    /// (`Custom`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_item: Option<String>,
    /// Code or phrase that must be submitted (`Input` and `Custom`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Flag condition gating the quest; `None` means unconditional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<FlagCondition>,
    /// Preconditions on other quests' completion status.
    #[serde(default)]
    pub depends_on: Vec<Dependency>,
    /// Outcome of an attempt that fails validation.
    #[serde(default)]
    pub on_failure: Outcome,
    /// Outcome of completing the quest.
    #[serde(default)]
    pub on_success: Outcome,
    /// Flags set when the quest is completed.
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Dialogue played on completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialogue: Option<Dialogue>,
    /// Sub-view opened by clicking a `Custom` quest's target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subview: Option<String>,
}
