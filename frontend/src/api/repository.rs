use models::prelude::*;
use reqwest::Method;

use crate::utils::make_request;

fn repositories_path(namespace: &str) -> String {
	if namespace == ALL_NAMESPACES {
		"repositories".to_owned()
	} else {
		format!("namespaces/{}/repositories", namespace)
	}
}

/// Lists the repositories visible in the given namespace, along with their
/// auth secrets. Pass [`ALL_NAMESPACES`] to list across every namespace.
pub async fn list_repositories(
	namespace: &str,
) -> Result<ListRepositoriesResponse, ApiErrorResponse> {
	make_request::<(), _>(Method::GET, &repositories_path(namespace), None)
		.await
		.map(|response| response.body)
}

/// Registers a new repository.
pub async fn create_repository(
	request: &CreateRepositoryRequest,
) -> Result<CreateRepositoryResponse, ApiErrorResponse> {
	make_request(
		Method::POST,
		&repositories_path(&request.namespace),
		Some(request),
	)
	.await
	.map(|response| response.body)
}

/// Replaces the registration of an existing repository.
pub async fn update_repository(
	namespace: &str,
	name: &str,
	request: &UpdateRepositoryRequest,
) -> Result<UpdateRepositoryResponse, ApiErrorResponse> {
	make_request(
		Method::PUT,
		&format!("namespaces/{}/repositories/{}", namespace, name),
		Some(request),
	)
	.await
	.map(|response| response.body)
}

/// Asks the backend to fetch the repository index with the given URL and
/// credentials, without registering anything.
pub async fn validate_repository(
	request: &ValidateRepositoryRequest,
) -> Result<ValidateRepositoryResponse, ApiErrorResponse> {
	make_request(Method::POST, "repositories/validate", Some(request))
		.await
		.map(|response| response.body)
}

/// Deletes a repository and its auth secret.
pub async fn delete_repository(
	namespace: &str,
	name: &str,
) -> Result<DeleteRepositoryResponse, ApiErrorResponse> {
	make_request::<(), _>(
		Method::DELETE,
		&format!("namespaces/{}/repositories/{}", namespace, name),
		None,
	)
	.await
	.map(|response| response.body)
}

/// Schedules a resync of one repository's index.
pub async fn resync_repository(
	namespace: &str,
	name: &str,
) -> Result<ResyncRepositoryResponse, ApiErrorResponse> {
	make_request::<(), _>(
		Method::POST,
		&format!("namespaces/{}/repositories/{}/resync", namespace, name),
		None,
	)
	.await
	.map(|response| response.body)
}

/// Schedules a resync of every named repository, in the order given.
pub async fn resync_all_repositories(
	repositories: Vec<RepositoryTarget>,
) -> Result<ResyncAllRepositoriesResponse, ApiErrorResponse> {
	make_request(
		Method::POST,
		"repositories/resync",
		Some(&ResyncAllRepositoriesRequest { repositories }),
	)
	.await
	.map(|response| response.body)
}
