//! Form view model.
//!
//! [`state`] holds what the user last did; [`render`] maps it to the
//! visibility of every page element. Front-ends only draw what `render`
//! returns, so all display logic is testable without a terminal.

pub mod render;
pub mod state;

pub use render::{Display, ElementId, RenderedView, render};
pub use state::{Screen, Toggle, ViewState};
