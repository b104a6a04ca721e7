//! Command-line front-end for the shortener form.
//!
//! # Usage
//!
//! ```bash
//! # Interactive form with advanced options and clipboard copy
//! cargo run -- form
//!
//! # Shorten once and copy the result
//! cargo run -- shorten --url https://example.com --alias docs --password s3cret --copy
//!
//! # Re-assign an alias protected by a password
//! cargo run -- shorten --url https://example.org --alias docs --password new --old-password s3cret
//!
//! # Where does a short link point?
//! cargo run -- resolve docs
//! ```
//!
//! # Environment Variables
//!
//! - `SHORTENER_APP_URL` (required unless `--app-url`): shorten endpoint
//! - `SHORTENER_FETCH_PREFIX` (required unless `--fetch-prefix`): short URL prefix
//!
//! See [`shortener_form::config`] for the optional ones.

use shortener_form::application::Notifier;
use shortener_form::application::services::{CopyOutcome, FormController, LinkResolver};
use shortener_form::config::{self, ClientConfig};
use shortener_form::domain::{FormFields, ResolveOutcome};
use shortener_form::infrastructure::clipboard::SystemClipboard;
use shortener_form::infrastructure::http::ReqwestShortenerApi;
use shortener_form::telemetry;
use shortener_form::view::{ElementId, RenderedView};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password, Select};
use serde::Serialize;
use std::process::ExitCode;
use std::sync::Arc;

/// Client for a URL shortening service.
#[derive(Parser)]
#[command(name = "shortener-form")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shorten endpoint (overrides SHORTENER_APP_URL)
    #[arg(long, global = true)]
    app_url: Option<String>,

    /// Prefix placed before every short code (overrides SHORTENER_FETCH_PREFIX)
    #[arg(long, global = true)]
    fetch_prefix: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Interactive shorten form
    Form,

    /// Shorten one URL
    Shorten {
        /// Long URL to shorten
        #[arg(short, long, default_value = "")]
        url: String,

        /// Requested short code
        #[arg(short, long, default_value = "")]
        alias: String,

        /// Password protecting the alias
        #[arg(short, long, default_value = "")]
        password: String,

        /// Current password, when changing it
        #[arg(long, default_value = "")]
        old_password: String,

        /// Copy the short URL to the clipboard
        #[arg(short, long)]
        copy: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show where a short code or short URL points
    Resolve {
        /// Short code or full short URL
        input: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load(cli.app_url, cli.fetch_prefix)
        .context("Invalid client configuration")?;
    telemetry::init(&config);
    config.print_summary();

    match cli.command {
        Commands::Form => run_form(&config).await,
        Commands::Shorten {
            url,
            alias,
            password,
            old_password,
            copy,
            json,
        } => {
            let fields = FormFields::new(url, alias, password, old_password);
            run_shorten(&config, &fields, copy, json).await
        }
        Commands::Resolve { input, json } => run_resolve(&config, &input, json).await,
    }
}

/// Notifications on the terminal.
///
/// Interactive sessions wait for an acknowledgement; one-shot commands
/// only print to stderr.
struct TerminalNotifier {
    interactive: bool,
}

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", format!("⚠️  {message}").yellow().bold());
        if self.interactive {
            let _ = Confirm::new()
                .with_prompt("OK")
                .default(true)
                .show_default(false)
                .interact();
        }
    }
}

type Controller = FormController<ReqwestShortenerApi, SystemClipboard, TerminalNotifier>;

fn build_controller(config: &ClientConfig, interactive: bool) -> Result<Controller> {
    let api = ReqwestShortenerApi::new(config).context("Failed to build HTTP client")?;
    Ok(FormController::new(
        config,
        Arc::new(api),
        Arc::new(SystemClipboard::new()),
        Arc::new(TerminalNotifier { interactive }),
    ))
}

/// Menu entries, offered according to what is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Shorten,
    ToggleAdvanced,
    TogglePasswordChange,
    CopyUrl,
    Back,
    Quit,
}

fn available_actions(view: &RenderedView) -> Vec<Action> {
    let mut actions = Vec::new();

    if view.is_visible(ElementId::Container) {
        actions.push(Action::Shorten);
        actions.push(Action::ToggleAdvanced);
        // The password-change button lives inside the advanced panel.
        if view.is_visible(ElementId::Advanced) {
            actions.push(Action::TogglePasswordChange);
        }
    } else {
        if view.is_visible(ElementId::CopyButton) {
            actions.push(Action::CopyUrl);
        }
        actions.push(Action::Back);
    }

    actions.push(Action::Quit);
    actions
}

fn action_label(action: Action, view: &RenderedView) -> String {
    let state = |active: bool| if active { "on" } else { "off" };
    match action {
        Action::Shorten => "Shorten".to_string(),
        Action::ToggleAdvanced => {
            format!("Advanced options [{}]", state(view.advanced_button_active))
        }
        Action::TogglePasswordChange => {
            format!("Change password [{}]", state(view.password_button_active))
        }
        Action::CopyUrl => "Copy URL".to_string(),
        Action::Back => "Back".to_string(),
        Action::Quit => "Quit".to_string(),
    }
}

/// Draws the visible part of the form.
fn draw(view: &RenderedView) {
    println!();

    if view.is_visible(ElementId::Container) {
        println!("{}", "🔗 Shorten a URL".bright_blue().bold());
        return;
    }

    if view.is_visible(ElementId::ResultOk) {
        println!("{}", "✅ Your short URL".green().bold());
        println!("  {}", view.result.bright_yellow().bold());
    }

    if view.is_visible(ElementId::ResultError) {
        println!("{}", "❌ Could not shorten".red().bold());
        println!("  {}", view.error_message.red());
    }
}

/// Form inputs the terminal can prompt for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormInput {
    Url,
    Alias,
    Password,
    OldPassword,
}

/// Inputs on visible panels, in form order.
fn visible_inputs(view: &RenderedView) -> Vec<FormInput> {
    let mut inputs = vec![FormInput::Url];
    if view.is_visible(ElementId::Advanced) {
        inputs.push(FormInput::Alias);
        inputs.push(FormInput::Password);
        if view.is_visible(ElementId::OldPassword) {
            inputs.push(FormInput::OldPassword);
        }
    }
    inputs
}

/// Re-reads the visible inputs; inputs on closed panels keep what was typed before.
fn fill_fields(
    view: &RenderedView,
    previous: &FormFields,
    mut read: impl FnMut(FormInput, &str) -> Result<String>,
) -> Result<FormFields> {
    let mut fields = previous.clone();
    for input in visible_inputs(view) {
        let slot = match input {
            FormInput::Url => &mut fields.url,
            FormInput::Alias => &mut fields.alias,
            FormInput::Password => &mut fields.password,
            FormInput::OldPassword => &mut fields.old_password,
        };
        *slot = read(input, slot.as_str())?;
    }
    Ok(fields)
}

fn prompt_input(input: FormInput, current: &str) -> Result<String> {
    let value = match input {
        FormInput::Url | FormInput::Alias => {
            let prompt = if input == FormInput::Url { "URL" } else { "Alias" };
            Input::<String>::new()
                .with_prompt(prompt)
                .with_initial_text(current)
                .allow_empty(true)
                .interact_text()?
        }
        FormInput::Password | FormInput::OldPassword => {
            let prompt = if input == FormInput::Password {
                "Password"
            } else {
                "Old password"
            };
            Password::new()
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()?
        }
    };
    Ok(value)
}

fn prompt_fields(view: &RenderedView, previous: &FormFields) -> Result<FormFields> {
    fill_fields(view, previous, prompt_input)
}

/// Runs the interactive form until the user quits.
async fn run_form(config: &ClientConfig) -> Result<ExitCode> {
    let mut controller = build_controller(config, true)?;
    let mut fields = FormFields::default();

    loop {
        let view = controller.view();
        draw(&view);

        let actions = available_actions(&view);
        let labels: Vec<String> = actions.iter().map(|a| action_label(*a, &view)).collect();
        let choice = Select::new()
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            Action::Shorten => {
                fields = prompt_fields(&view, &fields)?;
                controller.submit(&fields).await;
            }
            Action::ToggleAdvanced => controller.toggle_advanced(),
            Action::TogglePasswordChange => controller.toggle_password_change(),
            Action::CopyUrl => {
                if controller.copy_url() == CopyOutcome::Copied {
                    println!("{}", "📋 Copied to clipboard".green());
                }
            }
            Action::Back => controller.go_back(),
            Action::Quit => break,
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// JSON report for one-shot commands.
#[derive(Serialize)]
struct Report<'a> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    short_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

fn print_report(report: &Report<'_>) -> Result<()> {
    println!("{}", serde_json::to_string(report)?);
    Ok(())
}

async fn run_shorten(
    config: &ClientConfig,
    fields: &FormFields,
    copy: bool,
    json: bool,
) -> Result<ExitCode> {
    let mut controller = build_controller(config, false)?;
    controller.submit(fields).await;
    let view = controller.view();

    if !view.is_visible(ElementId::ResultOk) {
        if json {
            print_report(&Report {
                ok: false,
                short_url: None,
                location: None,
                error: Some(view.error_message.as_str()),
            })?;
        } else {
            eprintln!("{}", view.error_message.red());
        }
        return Ok(ExitCode::FAILURE);
    }

    if json {
        print_report(&Report {
            ok: true,
            short_url: Some(view.result.as_str()),
            location: None,
            error: None,
        })?;
    } else {
        println!("{}", view.result);
    }

    if copy && controller.copy_url() == CopyOutcome::Copied && !json {
        eprintln!("{}", "📋 Copied to clipboard".green());
    }

    Ok(ExitCode::SUCCESS)
}

async fn run_resolve(config: &ClientConfig, input: &str, json: bool) -> Result<ExitCode> {
    let api = ReqwestShortenerApi::new(config).context("Failed to build HTTP client")?;
    let resolver = LinkResolver::new(config, Arc::new(api));

    let outcome = match resolver.resolve(input).await {
        Ok(outcome) => outcome,
        Err(e) => {
            let message = e.panel_message();
            if json {
                print_report(&Report {
                    ok: false,
                    short_url: None,
                    location: None,
                    error: Some(message.as_str()),
                })?;
            } else {
                eprintln!("{}", message.red());
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    match &outcome {
        ResolveOutcome::Redirect { location, .. } => {
            if json {
                print_report(&Report {
                    ok: true,
                    short_url: None,
                    location: Some(location.as_str()),
                    error: None,
                })?;
            } else {
                println!("{location}");
            }
            Ok(ExitCode::SUCCESS)
        }
        ResolveOutcome::Failed { .. } => {
            let message = outcome.error_message().unwrap_or_default();
            if json {
                print_report(&Report {
                    ok: false,
                    short_url: None,
                    location: None,
                    error: Some(message.as_str()),
                })?;
            } else {
                eprintln!("{}", message.red());
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
