use serde::{Deserialize, Serialize};

use super::ChartRepository;

/// Request body for `PUT /namespaces/:namespace/repositories/:name`. Replaces
/// the registration of an existing repository. The name cannot change; it
/// identifies the repository being updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRepositoryRequest {
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
	/// user entered.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub sync_job_pod_template: String,
	/// The names of the registry pull secrets to associate with the
	/// repository.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub registry_secrets: Vec<String>,
}

/// Response body for a successful repository update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRepositoryResponse {
	/// The repository as updated.
	pub repository: ChartRepository,
}
