use models::prelude::*;
use reqwest::Method;

use crate::utils::make_request;

/// Lists the registry pull secrets in the given namespace.
pub async fn list_pull_secrets(
	namespace: &str,
) -> Result<ListPullSecretsResponse, ApiErrorResponse> {
	make_request::<(), _>(
		Method::GET,
		&format!("namespaces/{}/pull-secrets", namespace),
		None,
	)
	.await
	.map(|response| response.body)
}

/// Creates a docker-registry pull secret from plain credentials.
pub async fn create_docker_secret(
	request: &CreateDockerSecretRequest,
) -> Result<CreateDockerSecretResponse, ApiErrorResponse> {
	make_request(
		Method::POST,
		&format!("namespaces/{}/pull-secrets", request.namespace),
		Some(request),
	)
	.await
	.map(|response| response.body)
}
