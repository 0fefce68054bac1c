//! Player action payloads.

use serde::{Deserialize, Serialize};
use wb_core::QuestKind;

use crate::error::{EngineError, EngineResult};

/// The kind of gesture the player performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    /// A plain click or tap on the target.
    Click,
    /// Dropping a dragged inventory item onto the target.
    Drag,
    /// Submitting typed text to the target.
    Input,
    /// Completing a custom mini-interaction in a sub-view.
    Custom,
}

impl ActionKind {
    /// Whether this gesture is the one a quest of `kind` expects.
    pub fn matches(self, kind: QuestKind) -> bool {
        matches!(
            (self, kind),
            (Self::Click, QuestKind::Click)
                | (Self::Drag, QuestKind::Drag)
                | (Self::Input, QuestKind::Input)
                | (Self::Custom, QuestKind::Custom)
        )
    }
}

/// One player action on a scene object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionInput {
    /// The gesture performed.
    pub action: ActionKind,
    /// Id of the object the action targets.
    pub target: String,
    /// Dragged item id (`DRAG` actions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    /// Submitted text (`INPUT` and `CUSTOM` actions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl InteractionInput {
    /// A plain click on `target`.
    pub fn click(target: impl Into<String>) -> Self {
        Self {
            action: ActionKind::Click,
            target: target.into(),
            item: None,
            content: None,
        }
    }

    /// Dropping `item` onto `target`.
    pub fn drag(target: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            action: ActionKind::Drag,
            target: target.into(),
            item: Some(item.into()),
            content: None,
        }
    }

    /// Submitting `content` to `target`.
    pub fn input(target: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            action: ActionKind::Input,
            target: target.into(),
            item: None,
            content: Some(content.into()),
        }
    }

    /// Reporting a custom mini-interaction on `target` solved with
    /// `content`.
    pub fn custom(target: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            action: ActionKind::Custom,
            target: target.into(),
            item: None,
            content: Some(content.into()),
        }
    }

    /// Decode an action payload from its JSON transport encoding.
    pub fn from_json(blob: &str) -> EngineResult<Self> {
        serde_json::from_str(blob).map_err(EngineError::Input)
    }
}
