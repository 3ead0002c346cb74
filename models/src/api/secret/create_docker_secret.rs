use serde::{Deserialize, Serialize};

use super::RegistrySecret;

/// Request body for `POST /namespaces/:namespace/pull-secrets`. Creates a
/// docker-registry pull secret from plain credentials; the backend assembles
/// and stores the docker config document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDockerSecretRequest {
	/// The name of the secret to create.
	pub name: String,
	/// The namespace to create the secret in.
	pub namespace: String,
	/// The registry server the credentials are for.
	pub server: String,
	/// The username to authenticate with.
	pub username: String,
	/// The password to authenticate with.
	pub password: String,
	/// The email recorded in the docker config.
	pub email: String,
}

/// Response body for a successfully created pull secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDockerSecretResponse {
	/// The secret as created. Its docker config data is not echoed back.
	pub secret: RegistrySecret,
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::CreateDockerSecretRequest;

	#[test]
	fn assert_request_types() {
		let request = CreateDockerSecretRequest {
			name: "team-a-pull".to_owned(),
			namespace: "team-a".to_owned(),
			server: "https://index.docker.io/v1/".to_owned(),
			username: "user".to_owned(),
			password: "hunter2".to_owned(),
			email: "user@example.com".to_owned(),
		};
		assert_eq!(
			serde_json::to_value(&request).unwrap(),
			json!({
				"name": "team-a-pull",
				"namespace": "team-a",
				"server": "https://index.docker.io/v1/",
				"username": "user",
				"password": "hunter2",
				"email": "user@example.com",
			})
		);
	}
}
