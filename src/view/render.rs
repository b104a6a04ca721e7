//! Pure mapping from [`ViewState`] to element visibility.

use super::state::{Screen, ViewState};

/// CSS `display` value of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    InlineBlock,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
            Self::InlineBlock => "inline-block",
        }
    }

    pub fn is_visible(self) -> bool {
        self != Self::None
    }
}

/// Elements whose visibility depends on the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementId {
    /// Input form container.
    Container,
    /// Wrapper around both result panels.
    ContainerResult,
    ResultOk,
    ResultError,
    CopyButton,
    /// Alias and password inputs.
    Advanced,
    /// Old password input.
    OldPassword,
}

impl ElementId {
    pub const ALL: [ElementId; 7] = [
        Self::Container,
        Self::ContainerResult,
        Self::ResultOk,
        Self::ResultError,
        Self::CopyButton,
        Self::Advanced,
        Self::OldPassword,
    ];

    /// Element id on the web page.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::ContainerResult => "container-result",
            Self::ResultOk => "div-result-ok",
            Self::ResultError => "div-result-error",
            Self::CopyButton => "button-copy-url",
            Self::Advanced => "advanced",
            Self::OldPassword => "old_password",
        }
    }
}

/// Output of [`render`]: visibility of every element plus the two text outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub container: Display,
    pub container_result: Display,
    pub result_ok: Display,
    pub result_error: Display,
    pub copy_button: Display,
    pub advanced: Display,
    pub old_password: Display,
    pub advanced_button_active: bool,
    pub password_button_active: bool,
    /// Contents of the `result` field.
    pub result: String,
    /// Contents of the `error-message` element.
    pub error_message: String,
}

impl RenderedView {
    pub fn display(&self, id: ElementId) -> Display {
        match id {
            ElementId::Container => self.container,
            ElementId::ContainerResult => self.container_result,
            ElementId::ResultOk => self.result_ok,
            ElementId::ResultError => self.result_error,
            ElementId::CopyButton => self.copy_button,
            ElementId::Advanced => self.advanced,
            ElementId::OldPassword => self.old_password,
        }
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        self.display(id).is_visible()
    }
}

fn shown_if(visible: bool, shown: Display) -> Display {
    if visible { shown } else { Display::None }
}

/// Maps a view state to what should be on screen.
pub fn render(state: &ViewState) -> RenderedView {
    let (on_form, ok, error) = match &state.screen {
        Screen::Form => (true, None, None),
        Screen::Success { short_url } => (false, Some(short_url.as_str()), None),
        Screen::Error { message } => (false, None, Some(message.as_str())),
    };

    RenderedView {
        container: shown_if(on_form, Display::Block),
        container_result: shown_if(!on_form, Display::Block),
        result_ok: shown_if(ok.is_some(), Display::Block),
        result_error: shown_if(error.is_some(), Display::Block),
        copy_button: shown_if(ok.is_some(), Display::InlineBlock),
        advanced: shown_if(state.advanced.is_open(), Display::Block),
        old_password: shown_if(state.password_change.is_open(), Display::InlineBlock),
        advanced_button_active: state.advanced.is_open(),
        password_button_active: state.password_change.is_open(),
        result: ok.unwrap_or_default().to_string(),
        error_message: error.unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(view: &RenderedView) -> Vec<&'static str> {
        ElementId::ALL
            .into_iter()
            .filter(|id| view.is_visible(*id))
            .map(ElementId::dom_id)
            .collect()
    }

    #[test]
    fn test_initial_render_shows_only_form() {
        let view = render(&ViewState::new());
        assert_eq!(visible(&view), vec!["container"]);
        assert!(!view.advanced_button_active);
        assert!(!view.password_button_active);
        assert!(view.result.is_empty());
        assert!(view.error_message.is_empty());
    }

    #[test]
    fn test_success_render() {
        let mut state = ViewState::new();
        state.show_success("https://short.example/?s=abc123".to_string());
        let view = render(&state);

        assert_eq!(
            visible(&view),
            vec!["container-result", "div-result-ok", "button-copy-url"]
        );
        assert_eq!(view.copy_button, Display::InlineBlock);
        assert_eq!(view.result, "https://short.example/?s=abc123");
        assert!(view.error_message.is_empty());
    }

    #[test]
    fn test_error_render() {
        let mut state = ViewState::new();
        state.show_error("Server error 404: not found".to_string());
        let view = render(&state);

        assert_eq!(visible(&view), vec!["container-result", "div-result-error"]);
        assert_eq!(view.error_message, "Server error 404: not found");
        assert!(view.result.is_empty());
    }

    #[test]
    fn test_back_hides_both_result_panels() {
        let mut state = ViewState::new();
        state.show_success("https://short.example/?s=x".to_string());
        state.back_to_form();
        assert_eq!(render(&state), render(&ViewState::new()));
    }

    #[test]
    fn test_toggle_panels_render() {
        let mut state = ViewState::new();
        state.toggle_advanced();
        state.toggle_password_change();
        let view = render(&state);

        assert_eq!(view.advanced, Display::Block);
        assert_eq!(view.old_password, Display::InlineBlock);
        assert!(view.advanced_button_active);
        assert!(view.password_button_active);
        assert_eq!(view.advanced.as_css(), "block");
        assert_eq!(view.old_password.as_css(), "inline-block");
    }
}
