use std::fmt::{self, Display, Formatter};

/// The list of all the routes served by this console.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AppRoutes {
	/// The chart repository configuration page.
	#[default]
	Repositories,
}

impl Display for AppRoutes {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Repositories => write!(f, "/repositories"),
		}
	}
}

/// The catalog page of one repository. Served by the main dashboard, outside
/// this console; repository rows link there by name.
pub fn catalog_route(namespace: &str, name: &str) -> String {
	format!("/catalog/{}/{}", namespace, name)
}

#[cfg(test)]
mod test {
	use super::{catalog_route, AppRoutes};

	#[test]
	fn assert_route_paths() {
		assert_eq!(AppRoutes::Repositories.to_string(), "/repositories");
		assert_eq!(catalog_route("team-a", "stable"), "/catalog/team-a/stable");
	}
}
