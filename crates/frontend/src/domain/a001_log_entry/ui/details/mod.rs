//! Add-log form
//!
//! - view_model.rs: draft state and the submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::LogDetails;
pub use view_model::{submit_log, LogDetailsViewModel, SubmitOutcome};
