//! Configuration consistency checks.
//!
//! Checks that the quest graph and interaction table are well-formed:
//! dependencies reference existing quests, gated quest kinds carry the
//! data they validate against, and scene transitions point at scenes
//! the configuration knows about. Errors mark content that can never
//! work; warnings mark content the engine will tolerate defensively.

use crate::quest::QuestKind;
use crate::world::WorldConfig;

/// A problem found while checking a world configuration.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// The quest or target id the issue was found on.
    pub subject: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(subject: &str, message: impl Into<String>) -> Self {
        Self {
            subject: subject.to_string(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(subject: &str, message: impl Into<String>) -> Self {
        Self {
            subject: subject.to_string(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

/// Check a world configuration and return the issues found.
///
/// An empty list means the configuration is consistent. The engine
/// does not require a clean validation to run, since missing
/// references degrade to safe defaults at runtime, but authors should
/// treat errors as content bugs.
pub fn validate_config(config: &WorldConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (id, quest) in &config.quests {
        for dep in &quest.depends_on {
            if !config.quests.contains_key(&dep.quest) {
                issues.push(ValidationIssue::warning(
                    id,
                    format!("dependency references unknown quest \"{}\"", dep.quest),
                ));
            }
        }

        match quest.kind {
            QuestKind::Drag if quest.required_item.is_none() => {
                issues.push(ValidationIssue::error(
                    id,
                    "DRAG quest has no required_item and can never be completed",
                ));
            }
            QuestKind::Input if quest.code.is_none() => {
                issues.push(ValidationIssue::error(
                    id,
                    "INPUT quest has no code and can never be completed",
                ));
            }
            _ => {}
        }

        if let Some(condition) = &quest.condition
            && condition.flag.is_empty()
        {
            issues.push(ValidationIssue::warning(
                id,
                "condition has an empty flag name and is always satisfied",
            ));
        }
    }

    for (target, variants) in &config.static_interactions {
        if variants.is_empty() {
            issues.push(ValidationIssue::warning(
                target,
                "interaction list is empty",
            ));
        }
        for interaction in variants {
            if let Some(scene) = &interaction.target_scene
                && !config.scenes.contains_key(scene)
            {
                issues.push(ValidationIssue::warning(
                    target,
                    format!("target_scene \"{scene}\" is not a configured scene"),
                ));
            }
        }
    }

    if !config.start_scene.is_empty() && !config.scenes.contains_key(&config.start_scene) {
        issues.push(ValidationIssue::warning(
            &config.start_scene,
            "start_scene is not a configured scene",
        ));
    }

    issues
}
