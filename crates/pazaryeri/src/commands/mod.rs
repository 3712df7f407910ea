//! # Command Layer
//!
//! The business operations behind every UI action. Each command takes a store,
//! performs the operation, and returns a [`CmdResult`] describing what happened.
//!
//! Commands never print, never exit, and never prompt. A UI decides how to
//! render the structured result.
//!
//! ## Persistence Warnings
//!
//! Stores swallow storage failures. Commands check the store's persist status
//! afterwards and append a warning message, so users learn that their changes
//! may not survive a restart.
//!
//! ## Command Modules
//!
//! - [`favorites`]: add, remove, toggle, check, list, count, clear
//! - [`theme`]: show, set, toggle

use crate::error::{Result, StorefrontError};
use crate::model::{Appearance, ThemeMode};
use crate::store::PersistStatus;
use serde::Serialize;

pub mod favorites;
pub mod theme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Theme state as reported to a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeReport {
    pub mode: ThemeMode,
    pub appearance: Appearance,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// Product ids the command reports on (favorites listed, or ids found favorited).
    pub favorite_ids: Vec<String>,
    pub favorite_count: Option<usize>,
    pub theme: Option<ThemeReport>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.add_message(message);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}

pub(crate) fn warn_if_unsaved(status: &PersistStatus, result: &mut CmdResult) {
    if let PersistStatus::Failed(reason) = status {
        result.add_message(CmdMessage::warning(format!(
            "Changes may not be saved: {}",
            reason
        )));
    }
}

pub(crate) fn require_ids<I: AsRef<str>>(ids: &[I]) -> Result<()> {
    if ids.is_empty() {
        return Err(StorefrontError::Api("No product ids given".to_string()));
    }
    Ok(())
}
