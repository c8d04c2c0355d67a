// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! These events capture meaningful user interactions and configuration
//! problems so that issues can be reconstructed after the fact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::Section;
use crate::menu::Category;

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// A menu category tab was selected.
    SelectCategory { category: Category },

    /// A navbar link requested a scroll to a section.
    ScrollToSection { section: Section },

    /// The collapsible navbar menu was opened or closed.
    ToggleNavMenu { open: bool },

    /// The theme mode was switched.
    SwitchTheme,
}

/// Category of a warning event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    Config,
    Other,
}

/// Category of an error event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    Config,
    Catalog,
    Other,
}

/// A non-fatal problem worth recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A failure worth recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// The kind of diagnostic event being recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}

/// A single timestamped diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    /// Wall-clock time the event was recorded.
    pub timestamp: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_event_carries_type_and_message() {
        let event = WarningEvent::new(WarningType::Config, "settings.toml ignored");
        assert_eq!(event.warning_type, WarningType::Config);
        assert_eq!(event.message, "settings.toml ignored");
    }

    #[test]
    fn diagnostic_event_records_kind() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action: UserAction::SelectCategory {
                category: Category::Coffee,
            },
        });
        assert!(matches!(
            event.kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::SelectCategory {
                    category: Category::Coffee
                }
            }
        ));
    }
}
