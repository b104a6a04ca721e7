//! Shorten form controller.

use std::sync::Arc;

use crate::application::notifier::Notifier;
use crate::config::ClientConfig;
use crate::domain::FormFields;
use crate::infrastructure::clipboard::Clipboard;
use crate::infrastructure::http::ShortenerApi;
use crate::view::{RenderedView, ViewState, render};
use tracing::warn;

/// Message shown when the clipboard refuses the short URL.
pub const COPY_FAILED_MESSAGE: &str = "Copy to clipboard failed";

/// Result of [`FormController::copy_url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// The clipboard rejected the write; the user was notified once.
    Failed,
    /// No short URL is on screen.
    NothingToCopy,
}

/// Drives the shorten form: one outbound request per submission, result
/// rendering, clipboard copy and the two optional panels.
///
/// `submit` takes `&mut self`, so a controller never has two requests in flight.
pub struct FormController<A: ShortenerApi, C: Clipboard, N: Notifier> {
    api: Arc<A>,
    clipboard: Arc<C>,
    notifier: Arc<N>,
    fetch_prefix: String,
    state: ViewState,
}

impl<A: ShortenerApi, C: Clipboard, N: Notifier> FormController<A, C, N> {
    /// Creates a controller showing the empty input form.
    pub fn new(config: &ClientConfig, api: Arc<A>, clipboard: Arc<C>, notifier: Arc<N>) -> Self {
        Self {
            api,
            clipboard,
            notifier,
            fetch_prefix: config.fetch_prefix.clone(),
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Current visibility of every element.
    pub fn view(&self) -> RenderedView {
        render(&self.state)
    }

    /// Sends the form and switches to the success or error panel.
    ///
    /// - 200: success panel with `fetch_prefix + body`
    /// - any other status: `Server error {status}: {body}`
    /// - no response at all: `Network error: {cause}`
    ///
    /// Empty fields are left out of the request. Nothing is validated locally.
    pub async fn submit(&mut self, fields: &FormFields) -> &ViewState {
        let request = fields.to_request();

        match self.api.shorten(&request).await {
            Ok(outcome) if outcome.is_success() => {
                let short_url = outcome.short_url(&self.fetch_prefix);
                self.state.show_success(short_url);
            }
            Ok(outcome) => {
                self.state.show_error(outcome.error_message());
            }
            Err(e) => {
                warn!("Submission failed without a response: {}", e);
                self.state.show_error(e.panel_message());
            }
        }

        &self.state
    }

    /// Returns to the input form, hiding both result panels.
    pub fn go_back(&mut self) {
        self.state.back_to_form();
    }

    /// Copies the short URL on screen to the clipboard.
    ///
    /// On failure the user is notified exactly once and the result is left untouched.
    pub fn copy_url(&self) -> CopyOutcome {
        let Some(short_url) = self.state.short_url() else {
            return CopyOutcome::NothingToCopy;
        };

        match self.clipboard.write_text(short_url) {
            Ok(()) => CopyOutcome::Copied,
            Err(e) => {
                warn!("{}", e);
                self.notifier.alert(COPY_FAILED_MESSAGE);
                CopyOutcome::Failed
            }
        }
    }

    pub fn toggle_advanced(&mut self) {
        self.state.toggle_advanced();
    }

    pub fn toggle_password_change(&mut self) {
        self.state.toggle_password_change();
    }
}
