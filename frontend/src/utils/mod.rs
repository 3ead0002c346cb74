mod fetch;
mod routes;

pub use self::{fetch::*, routes::*};

/// A module containing constants that are used throughout the application.
pub mod constants {
	/// The base URL all API calls are made against.
	/// TODO read this from the host page once the console is served by the
	/// backend itself, instead of hardcoding the dev setup.
	pub const API_BASE_URL: &str = "http://localhost:8080/api/v1/";
	/// The namespace the console starts out scoped to.
	pub const DEFAULT_NAMESPACE: &str = "default";
	/// The namespace the console itself is installed in. Repositories
	/// registered here are visible from every namespace, and pull secrets
	/// cannot be attached to them.
	pub const SYSTEM_NAMESPACE: &str = "chart-system";
}
