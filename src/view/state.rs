//! View state of the shorten form.

/// Which of the three mutually exclusive screens is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    /// Input form.
    #[default]
    Form,
    /// Result panel with the composed short URL.
    Success { short_url: String },
    /// Result panel with an error message.
    Error { message: String },
}

/// State of an optional panel and the button that opens it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Toggle {
    #[default]
    Closed,
    Open,
}

impl Toggle {
    pub fn flipped(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Everything the form displays, driven only by the last completed action.
///
/// The two toggles are independent of each other and of the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub screen: Screen,
    pub advanced: Toggle,
    pub password_change: Toggle,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_success(&mut self, short_url: String) {
        self.screen = Screen::Success { short_url };
    }

    pub fn show_error(&mut self, message: String) {
        self.screen = Screen::Error { message };
    }

    /// Returns to the input form. Toggles keep their state.
    pub fn back_to_form(&mut self) {
        self.screen = Screen::Form;
    }

    pub fn toggle_advanced(&mut self) {
        self.advanced = self.advanced.flipped();
    }

    pub fn toggle_password_change(&mut self) {
        self.password_change = self.password_change.flipped();
    }

    /// Short URL currently on screen, if the last submission succeeded.
    pub fn short_url(&self) -> Option<&str> {
        match &self.screen {
            Screen::Success { short_url } => Some(short_url.as_str()),
            _ => None,
        }
    }
}
