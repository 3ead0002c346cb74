use serde::{Deserialize, Serialize};

/// A registered chart repository, as tracked by the cluster. This is the
/// resource the console lists, edits and deletes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartRepository {
	/// The name of the repository. Unique within its namespace and immutable
	/// once registered.
	pub name: String,
	/// The namespace the repository is registered in.
	pub namespace: String,
	/// The desired state of the repository.
	pub spec: ChartRepositorySpec,
}

/// The desired state of a chart repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartRepositorySpec {
	/// The URL the repository index is fetched from.
	pub url: String,
	/// The name of the secret holding the authorization header and custom CA
	/// certificate for this repository, if any.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub auth_secret: Option<String>,
	/// An optional override of the pod spec used by the periodic sync job
	/// that refreshes the repository index.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sync_job_pod_template: Option<serde_json::Value>,
	/// The names of the registry pull secrets associated with this
	/// repository.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub registry_secrets: Vec<String>,
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::{ChartRepository, ChartRepositorySpec};

	#[test]
	fn assert_repository_types() {
		let repository: ChartRepository = serde_json::from_value(json!({
			"name": "stable",
			"namespace": "team-a",
			"spec": {
				"url": "https://charts.example.com/stable",
				"authSecret": "stable-auth",
				"registrySecrets": ["team-a-pull"],
			},
		}))
		.unwrap();
		assert_eq!(
			repository,
			ChartRepository {
				name: "stable".to_owned(),
				namespace: "team-a".to_owned(),
				spec: ChartRepositorySpec {
					url: "https://charts.example.com/stable".to_owned(),
					auth_secret: Some("stable-auth".to_owned()),
					sync_job_pod_template: None,
					registry_secrets: vec!["team-a-pull".to_owned()],
				},
			}
		);
	}
}
