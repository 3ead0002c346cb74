use serde::{Deserialize, Serialize};

use super::RegistrySecret;

/// Response body for `GET /namespaces/:namespace/pull-secrets`. Lists the
/// registry pull secrets that can be associated with repositories in the
/// namespace. Pull secrets are namespace-scoped, so the list is always for a
/// single namespace.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListPullSecretsResponse {
	/// The pull secrets in the namespace.
	pub secrets: Vec<RegistrySecret>,
}
