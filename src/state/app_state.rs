//! Application state definitions

use super::forms::{ActionButton, FormFocus};

/// Kind of notice shown after a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A modal message the user has to dismiss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }
}

/// UI state around the form (focus, dialogs, status line)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Currently focused form target
    pub focus: FormFocus,
    /// Selected button while the action panel is focused
    pub selected_button: ActionButton,
    /// Notice dialog waiting to be dismissed
    pub notice: Option<Notice>,
    /// One-line message in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    /// Return focus to the top of the form
    pub fn reset_focus(&mut self) {
        self.focus = FormFocus::default();
        self.selected_button = ActionButton::default();
    }
}
