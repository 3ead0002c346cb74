use serde::{Deserialize, Serialize};

use super::ChartRepository;

/// Request body for `POST /namespaces/:namespace/repositories`. Registers a
/// new chart repository and, when credentials are given, creates its auth
/// secret alongside it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepositoryRequest {
	/// The name of the repository to register.
	pub name: String,
	/// The namespace to register the repository in.
	pub namespace: String,
	/// The URL the repository index is fetched from.
	pub url: String,
	/// The full authorization header sent when fetching the index. Empty
	/// when the repository needs no authentication.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub auth_header: String,
	/// A custom CA certificate, PEM-encoded, used to verify the repository
	/// server. Empty when the system roots suffice.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub custom_ca: String,
	/// An optional override of the sync job pod spec, as the YAML text the
	/// user entered. The backend parses and stores the structured form.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub sync_job_pod_template: String,
	/// The names of the registry pull secrets to associate with the
	/// repository.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub registry_secrets: Vec<String>,
}

/// Response body for a successful repository registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepositoryResponse {
	/// The repository as registered.
	pub repository: ChartRepository,
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::CreateRepositoryRequest;

	#[test]
	fn assert_request_types() {
		let request = CreateRepositoryRequest {
			name: "stable".to_owned(),
			namespace: "team-a".to_owned(),
			url: "https://charts.example.com/stable".to_owned(),
			auth_header: "Bearer token".to_owned(),
			custom_ca: String::new(),
			sync_job_pod_template: String::new(),
			registry_secrets: vec!["team-a-pull".to_owned()],
		};
		assert_eq!(
			serde_json::to_value(&request).unwrap(),
			json!({
				"name": "stable",
				"namespace": "team-a",
				"url": "https://charts.example.com/stable",
				"authHeader": "Bearer token",
				"registrySecrets": ["team-a-pull"],
			})
		);
	}
}
