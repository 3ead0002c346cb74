use serde::{Deserialize, Serialize};

use super::ChartRepository;
use crate::api::secret::RegistrySecret;

/// Response body for `GET /namespaces/:namespace/repositories` (or
/// `GET /repositories` when listing across all namespaces). Auth secrets of
/// the listed repositories are returned alongside them so the edit form can
/// be hydrated without a second round trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListRepositoriesResponse {
	/// The repositories visible in the requested namespace scope.
	pub repositories: Vec<ChartRepository>,
	/// The auth secrets referenced by the listed repositories.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub secrets: Vec<RegistrySecret>,
}

impl ListRepositoriesResponse {
	/// Finds the auth secret referenced by the given repository, if the
	/// repository has one and it was returned.
	pub fn secret_for(&self, repository: &ChartRepository) -> Option<&RegistrySecret> {
		let name = repository.spec.auth_secret.as_deref()?;
		self.secrets
			.iter()
			.find(|secret| secret.name == name && secret.namespace == repository.namespace)
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::ListRepositoriesResponse;

	#[test]
	fn assert_secret_association() {
		let response: ListRepositoriesResponse = serde_json::from_value(json!({
			"repositories": [
				{
					"name": "stable",
					"namespace": "team-a",
					"spec": { "url": "https://charts.example.com", "authSecret": "stable-auth" },
				},
				{
					"name": "incubator",
					"namespace": "team-a",
					"spec": { "url": "https://charts.example.com/incubator" },
				},
			],
			"secrets": [
				{ "name": "stable-auth", "namespace": "team-a", "data": {} },
			],
		}))
		.unwrap();

		let stable = &response.repositories[0];
		let incubator = &response.repositories[1];
		assert_eq!(response.secret_for(stable).map(|secret| secret.name.as_str()), Some("stable-auth"));
		assert_eq!(response.secret_for(incubator), None);
	}
}
