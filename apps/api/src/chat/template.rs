//! Prompt templates: a system instruction plus a user message with one named slot.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("system instruction is empty")]
    EmptySystem,

    #[error("user template must contain `{{{slot}}}` exactly once (found {found})")]
    SlotCount { slot: String, found: usize },
}

/// A validated, immutable two-message prompt.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    system: String,
    user: String,
    placeholder: String,
}

/// A template with its slot filled, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPrompt {
    pub system: String,
    pub user: String,
}

impl PromptTemplate {
    pub fn new(
        system: impl Into<String>,
        user: impl Into<String>,
        slot: &str,
    ) -> Result<Self, TemplateError> {
        let system = system.into();
        let user = user.into();

        if system.trim().is_empty() {
            return Err(TemplateError::EmptySystem);
        }

        let placeholder = format!("{{{slot}}}");
        let found = user.matches(&placeholder).count();
        if found != 1 {
            return Err(TemplateError::SlotCount {
                slot: slot.to_string(),
                found,
            });
        }

        Ok(Self {
            system,
            user,
            placeholder,
        })
    }

    /// Fills the slot. The value is inserted verbatim, so braces inside it
    /// are never treated as further placeholders.
    pub fn render(&self, value: &str) -> RenderedPrompt {
        RenderedPrompt {
            system: self.system.clone(),
            user: self.user.replacen(&self.placeholder, value, 1),
        }
    }
}
