//! Application state and core logic

use crate::gateway::{SubmissionGateway, SubmissionOutcome};
use crate::platform::has_item_modifier;
use crate::state::{ActionButton, AppState, FormFocus, FormStateStore, ListKind, Notice};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Notice shown after a successful insert
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";
/// Notice shown when the service rejects the insert
pub const REJECTED_MESSAGE: &str = "Failed to submit form. Please try again.";
/// Notice shown when the request could not complete
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Main application struct
pub struct App {
    /// UI state (focus, dialogs)
    pub state: AppState,
    /// Draft being edited
    pub form: FormStateStore,
    /// Persistence boundary used on submit
    gateway: SubmissionGateway,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(gateway: SubmissionGateway) -> Self {
        Self {
            state: AppState::default(),
            form: FormStateStore::new(),
            gateway,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Name of the table submissions go to
    pub fn table(&self) -> &str {
        self.gateway.table()
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        let on_action_panel = self.state.focus == FormFocus::Actions;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab => self.state.focus = self.state.focus.next(self.form.draft()),
            KeyCode::BackTab => self.state.focus = self.state.focus.prev(self.form.draft()),
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('n') if has_item_modifier(key.modifiers) => self.add_item_at_focus(),
            KeyCode::Char('d') if has_item_modifier(key.modifiers) => self.remove_focused_item(),
            KeyCode::Up | KeyCode::Char('k') if on_action_panel => {
                self.state.selected_button = self.state.selected_button.prev();
            }
            KeyCode::Down | KeyCode::Char('j') if on_action_panel => {
                self.state.selected_button = self.state.selected_button.next();
            }
            KeyCode::Enter if on_action_panel => {
                self.activate_button(self.state.selected_button).await;
            }
            KeyCode::Enter => {
                // Company info is multiline, every other field moves on
                if self.state.focus == FormFocus::CompanyInfo {
                    self.input_char('\n');
                } else {
                    self.state.focus = self.state.focus.next(self.form.draft());
                }
            }
            KeyCode::Char(c) if !on_action_panel && !ctrl => self.input_char(c),
            KeyCode::Backspace if !on_action_panel => self.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Run the action behind a panel button
    async fn activate_button(&mut self, button: ActionButton) {
        match button {
            ActionButton::Submit => self.submit().await,
            ActionButton::Reset => {
                self.form.reset();
                self.state.reset_focus();
                self.state.status_message = Some("Form cleared".to_string());
            }
            ActionButton::Quit => self.quit = true,
        }
    }

    /// Submit the current draft.
    ///
    /// The draft is reset only when the insert succeeded; on any failure it
    /// stays exactly as it was so the user can retry.
    pub async fn submit(&mut self) {
        let record = self.form.to_submission_record();

        match self.gateway.submit(&record).await {
            SubmissionOutcome::Success(id) => {
                self.form.reset();
                self.state.reset_focus();
                self.state.status_message = Some(format!("Saved as record {id}"));
                self.state.show_notice(Notice::success(SUCCESS_MESSAGE));
            }
            SubmissionOutcome::RejectedByService(detail) => {
                self.state.status_message = Some(detail);
                self.state.show_notice(Notice::failure(REJECTED_MESSAGE));
            }
            SubmissionOutcome::TransportFailure(detail) => {
                self.state.status_message = Some(detail);
                self.state.show_notice(Notice::failure(UNEXPECTED_MESSAGE));
            }
        }
    }

    /// Add an item to the focused list (personas when no list is focused)
    /// and move focus to it
    fn add_item_at_focus(&mut self) {
        let kind = self.state.focus.list_kind().unwrap_or(ListKind::Personas);
        self.form.add_item(kind);
        let last = self.form.draft().list(kind).len() - 1;
        self.state.focus = FormFocus::Item(kind, last);
    }

    /// Remove the focused item, honouring the list minimum
    fn remove_focused_item(&mut self) {
        let FormFocus::Item(kind, index) = self.state.focus else {
            return;
        };
        if !self.form.draft().can_remove(kind) {
            self.state.status_message = Some(format!(
                "At least {} {} required",
                kind.minimum(),
                kind.noun()
            ));
            return;
        }
        if let Some(id) = self.form.draft().list(kind).get(index).map(|item| item.id) {
            self.form.remove_item(kind, id);
        }
        self.state.focus = self.state.focus.clamp(self.form.draft());
    }

    /// Current text of the focused field
    fn focused_text(&self) -> Option<String> {
        let draft = self.form.draft();
        match self.state.focus {
            FormFocus::CompanyInfo => Some(draft.company_info.clone()),
            FormFocus::Item(kind, index) => draft.list(kind).get(index).map(|i| i.value.clone()),
            FormFocus::PostsPerWeek => Some(draft.posts_per_week.to_string()),
            FormFocus::Actions => None,
        }
    }

    /// Write edited text back through the store
    fn set_focused_text(&mut self, text: String) {
        match self.state.focus {
            FormFocus::CompanyInfo => self.form.set_company_info(text),
            FormFocus::Item(kind, index) => {
                if let Some(id) = self.form.draft().list(kind).get(index).map(|i| i.id) {
                    self.form.update_item(kind, id, text);
                }
            }
            FormFocus::PostsPerWeek => self.form.set_posts_per_week(&text),
            FormFocus::Actions => {}
        }
    }

    fn input_char(&mut self, c: char) {
        if let Some(mut text) = self.focused_text() {
            text.push(c);
            self.set_focused_text(text);
        }
    }

    fn backspace(&mut self) {
        if let Some(mut text) = self.focused_text() {
            text.pop();
            self.set_focused_text(text);
        }
    }
}
