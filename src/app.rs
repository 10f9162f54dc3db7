//! Application state and core logic

use crate::config::UiConfig;
use crate::state::{reduce, FieldId, FormEvent, FormState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Focus index of the submit button, one past the last field.
pub const BUTTON_ROW: usize = FieldId::ALL.len();

/// Main application struct
pub struct App {
    /// Current form state, replaced wholesale by the reducer on every event
    pub form: FormState,
    /// User configuration
    pub config: UiConfig,
    /// Focused row: `0..BUTTON_ROW` are the fields, `BUTTON_ROW` is the button
    pub focus: usize,
    /// Whether the password field is currently shown in clear text
    pub reveal_password: bool,
    /// Whether the confirmation field is currently shown in clear text
    pub reveal_confirm: bool,
    /// Feedback message for the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Result<Self> {
        let config = UiConfig::load()?;

        Ok(Self {
            form: FormState::default(),
            config,
            focus: 0,
            reveal_password: false,
            reveal_confirm: false,
            status_message: None,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Field under the cursor; `None` when the button row is focused
    pub fn focused_field(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.focus).copied()
    }

    /// Value to render for a field, masking secrets unless revealed
    pub fn display_value(&self, id: FieldId) -> String {
        let value = &self.form.field(id).value;
        let revealed = match id {
            FieldId::Password => self.reveal_password,
            FieldId::Confirm => self.reveal_confirm,
            _ => true,
        };

        if id.is_secret() && !revealed && self.config.mask_passwords() {
            "•".repeat(value.chars().count())
        } else {
            value.clone()
        }
    }

    /// Move focus to the next row (wraps around)
    fn next_row(&mut self) {
        self.focus = (self.focus + 1) % (BUTTON_ROW + 1);
    }

    /// Move focus to the previous row (wraps around)
    fn prev_row(&mut self) {
        if self.focus == 0 {
            self.focus = BUTTON_ROW;
        } else {
            self.focus -= 1;
        }
    }

    /// Run one event through the reducer and perform the register side
    /// effect when submission goes through.
    fn apply(&mut self, event: FormEvent) {
        let was_submitting = self.form.submitting;
        self.form = reduce(self.form.clone(), event);

        if self.form.submitting && !was_submitting {
            tracing::info!(
                name = %self.form.name.value,
                email = %self.form.email.value,
                "registering user"
            );
            self.status_message = Some(format!(
                "Welcome, {}! Your account is being created.",
                self.form.name.value
            ));
        }
    }

    fn submit(&mut self) {
        if self.form.can_submit() {
            self.apply(FormEvent::Submit);
        }
    }

    /// Toggle masking for the focused secret field
    fn toggle_reveal(&mut self) {
        match self.focused_field() {
            Some(FieldId::Password) => self.reveal_password = !self.reveal_password,
            Some(FieldId::Confirm) => self.reveal_confirm = !self.reveal_confirm,
            _ => {}
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.next_row(),
            KeyCode::BackTab | KeyCode::Up => self.prev_row(),
            KeyCode::Esc => self.quit = true,
            // Submit shortcut works from anywhere
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Char('r') if key.modifiers.contains(crate::platform::REVEAL_MODIFIER) => {
                self.toggle_reveal();
            }
            KeyCode::Enter if self.focus == BUTTON_ROW => self.submit(),
            KeyCode::Char(c) => {
                if let Some(id) = self.focused_field() {
                    self.apply(FormEvent::Input(id, c));
                }
            }
            KeyCode::Backspace => {
                if let Some(id) = self.focused_field() {
                    self.apply(FormEvent::Backspace(id));
                }
            }
            _ => {}
        }
        Ok(())
    }
}
