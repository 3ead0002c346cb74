use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::utils::Base64String;

/// The data key holding the full authorization header of a repository auth
/// secret.
pub const AUTHORIZATION_HEADER_KEY: &str = "authorizationHeader";
/// The data key holding the custom CA certificate of a repository auth
/// secret.
pub const CA_CERT_KEY: &str = "ca.crt";
/// The data key holding the docker config of a registry pull secret.
pub const DOCKER_CONFIG_KEY: &str = ".dockerconfigjson";

/// A secret as the console sees it: either the auth secret of a repository
/// (authorization header and CA certificate) or a registry pull secret
/// (docker config). Data values arrive base64-encoded and are decoded by
/// [`Base64String`] on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySecret {
	/// The name of the secret.
	pub name: String,
	/// The namespace the secret lives in.
	pub namespace: String,
	/// The decoded data entries of the secret.
	#[serde(default)]
	pub data: BTreeMap<String, Base64String>,
}

impl RegistrySecret {
	/// Returns the stored authorization header as text, if present.
	pub fn authorization_header(&self) -> Option<&str> {
		self.data
			.get(AUTHORIZATION_HEADER_KEY)
			.and_then(Base64String::as_text)
	}

	/// Returns the stored custom CA certificate as text, if present.
	pub fn ca_cert(&self) -> Option<&str> {
		self.data.get(CA_CERT_KEY).and_then(Base64String::as_text)
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::RegistrySecret;

	#[test]
	fn assert_secret_types() {
		let secret: RegistrySecret = serde_json::from_value(json!({
			"name": "stable-auth",
			"namespace": "team-a",
			"data": {
				// base64 of "Bearer token" and a PEM marker
				"authorizationHeader": "QmVhcmVyIHRva2Vu",
				"ca.crt": "LS0tLS1CRUdJTiBDRVJUSUZJQ0FURS0tLS0t",
			},
		}))
		.unwrap();
		assert_eq!(secret.authorization_header(), Some("Bearer token"));
		assert_eq!(secret.ca_cert(), Some("-----BEGIN CERTIFICATE-----"));
	}

	#[test]
	fn assert_missing_keys() {
		let secret = RegistrySecret {
			name: "team-a-pull".to_owned(),
			namespace: "team-a".to_owned(),
			data: Default::default(),
		};
		assert_eq!(secret.authorization_header(), None);
		assert_eq!(secret.ca_cert(), None);
	}
}
