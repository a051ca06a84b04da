//! Log list page
//!
//! - view_model.rs: fetch / delete / clear commands and the async logic behind them
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::LogList;
pub use view_model::LogListViewModel;
