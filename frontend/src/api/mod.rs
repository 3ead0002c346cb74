mod repository;
mod secret;

pub use self::{repository::*, secret::*};

use std::rc::Rc;

use async_trait::async_trait;
use models::prelude::*;

/// Everything collected from the repository form when it is submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoSubmission {
	/// Whether an existing repository is being updated, rather than a new
	/// one registered.
	pub update: bool,
	/// The name of the repository.
	pub name: String,
	/// The namespace the repository is registered in.
	pub namespace: String,
	/// The URL the repository index is fetched from.
	pub url: String,
	/// The effective authorization header, already assembled from the chosen
	/// auth method. Empty for unauthenticated repositories.
	pub auth_header: String,
	/// A custom CA certificate, PEM-encoded, if any.
	pub custom_ca: String,
	/// The sync job pod template override, as the YAML text the user
	/// entered.
	pub sync_job_pod_template: String,
	/// The names of the pull secrets to associate with the repository.
	pub registry_secrets: Vec<String>,
}

/// The backend capabilities the repository form depends on. The form only
/// ever talks to the backend through this trait, so tests can substitute
/// doubles for the real HTTP client.
#[async_trait(?Send)]
pub trait RepositoryApi {
	/// Checks that the repository index can be fetched with the given URL
	/// and credentials. A failure carries the message to show inline, which
	/// may itself be a JSON document from the repository server.
	async fn validate_repository(
		&self,
		url: &str,
		auth_header: &str,
		custom_ca: &str,
	) -> Result<(), String>;

	/// Registers or updates a repository. Returns whether it succeeded.
	async fn create_or_update_repository(&self, submission: &RepoSubmission) -> bool;

	/// Lists the registry pull secrets in the namespace. Failures surface as
	/// an empty list; the form offers whatever it gets.
	async fn list_pull_secrets(&self, namespace: &str) -> Vec<RegistrySecret>;

	/// Creates a docker-registry pull secret. Returns whether it succeeded.
	async fn create_docker_secret(&self, request: &CreateDockerSecretRequest) -> bool;
}

/// The production [`RepositoryApi`], backed by the console's HTTP API.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpRepositoryApi;

#[async_trait(?Send)]
impl RepositoryApi for HttpRepositoryApi {
	async fn validate_repository(
		&self,
		url: &str,
		auth_header: &str,
		custom_ca: &str,
	) -> Result<(), String> {
		validate_repository(&ValidateRepositoryRequest {
			url: url.to_owned(),
			auth_header: auth_header.to_owned(),
			custom_ca: custom_ca.to_owned(),
		})
		.await
		.map(|_| ())
		.map_err(|error| error.body.message)
	}

	async fn create_or_update_repository(&self, submission: &RepoSubmission) -> bool {
		let result = if submission.update {
			update_repository(
				&submission.namespace,
				&submission.name,
				&UpdateRepositoryRequest {
					url: submission.url.clone(),
					auth_header: submission.auth_header.clone(),
					custom_ca: submission.custom_ca.clone(),
					sync_job_pod_template: submission.sync_job_pod_template.clone(),
					registry_secrets: submission.registry_secrets.clone(),
				},
			)
			.await
			.map(|_| ())
		} else {
			create_repository(&CreateRepositoryRequest {
				name: submission.name.clone(),
				namespace: submission.namespace.clone(),
				url: submission.url.clone(),
				auth_header: submission.auth_header.clone(),
				custom_ca: submission.custom_ca.clone(),
				sync_job_pod_template: submission.sync_job_pod_template.clone(),
				registry_secrets: submission.registry_secrets.clone(),
			})
			.await
			.map(|_| ())
		};

		match result {
			Ok(()) => true,
			Err(error) => {
				log::error!(
					"failed to save repository {}: {}",
					submission.name,
					error.body.message
				);
				false
			}
		}
	}

	async fn list_pull_secrets(&self, namespace: &str) -> Vec<RegistrySecret> {
		match list_pull_secrets(namespace).await {
			Ok(response) => response.secrets,
			Err(error) => {
				log::error!(
					"failed to list pull secrets in {}: {}",
					namespace,
					error.body.message
				);
				Vec::new()
			}
		}
	}

	async fn create_docker_secret(&self, request: &CreateDockerSecretRequest) -> bool {
		match create_docker_secret(request).await {
			Ok(_) => true,
			Err(error) => {
				log::error!(
					"failed to create pull secret {}: {}",
					request.name,
					error.body.message
				);
				false
			}
		}
	}
}

/// Context handle pages use to reach the [`RepositoryApi`]. Provided once at
/// the application root with the HTTP implementation.
#[derive(Clone)]
pub struct ApiClient(pub Rc<dyn RepositoryApi>);
