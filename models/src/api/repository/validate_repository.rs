use serde::{Deserialize, Serialize};

/// Request body for `POST /repositories/validate`. Asks the backend to fetch
/// the repository index with the given URL and credentials before anything is
/// registered. A failure carries a message describing what the repository
/// server answered, which may itself be a JSON document with `code` and
/// `message` fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRepositoryRequest {
	/// The URL the repository index would be fetched from.
	pub url: String,
	/// The full authorization header that would be sent, if any.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub auth_header: String,
	/// A custom CA certificate, PEM-encoded, if any.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub custom_ca: String,
}

/// Response body for a successful validation. Success itself is the signal;
/// there is nothing else to report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRepositoryResponse {}
