//! Menu and ordering page
//!
//! MVVM:
//! - model.rs: API functions (catalog, current user, order submission)
//! - view_model.rs: ViewModel wrapping the `OrderSession` state store
//! - view.rs: page component
//! - widgets/: the pieces of the page (pure UI)

mod model;
mod view;
mod view_model;
mod widgets;

pub use view::MenuPage;
pub use view_model::OrderPageViewModel;
