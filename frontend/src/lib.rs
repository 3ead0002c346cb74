//! Console frontend for registering and managing chart repositories.
//!
//! The console talks to the backend API through the typed contracts in the
//! `models` crate and renders with the generic building blocks in the
//! `components` crate. The pages in here own the form state and the submit
//! workflows.

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use components::prelude::*;
	pub use leptos::*;
	pub use leptos_router::*;
	pub use models::prelude::*;

	pub use crate::{api::*, pages::*, utils::*};
}

/// The API module. This contains the functions that make API calls to the
/// backend, and the capability trait the repository form depends on.
pub mod api;
/// The application logic code. This contains the router and the contexts
/// provided to every page.
pub mod app;
/// The pages module. This contains all the pages used in the application.
/// Pages are the main views that are rendered when a route is matched.
pub mod pages;
/// The utils module. This contains the HTTP plumbing, route helpers and
/// application constants.
pub mod utils;

use crate::app::App;

/// Mounts the application to the document body. Called by the binary
/// entrypoint once the wasm module is loaded.
pub fn render() {
	wasm_logger::init(wasm_logger::Config::default());

	if cfg!(debug_assertions) {
		console_error_panic_hook::set_once();
	}

	leptos::mount_to_body(App);
}
