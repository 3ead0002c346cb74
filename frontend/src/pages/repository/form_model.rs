use std::collections::BTreeMap;

use base64::prelude::*;
use models::prelude::*;
use strum::{Display, EnumIter};

use crate::api::{RepoSubmission, RepositoryApi};

/// How the repository authenticates index fetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum AuthMethod {
	/// No authentication. This is the default.
	#[default]
	None,
	/// Basic auth from a username and password.
	Basic,
	/// A bearer token.
	Bearer,
	/// A raw authorization header, entered as-is.
	Custom,
}

impl AuthMethod {
	/// The label shown next to the method's radio button.
	pub const fn label(self) -> &'static str {
		match self {
			Self::None => "None",
			Self::Basic => "Basic Auth",
			Self::Bearer => "Bearer Token",
			Self::Custom => "Custom",
		}
	}
}

/// The outcome of the last validation attempt, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Validation {
	/// Nothing has been validated yet, or a field affecting validity changed
	/// since the last attempt.
	#[default]
	Unknown,
	/// The backend fetched the index successfully.
	Valid,
	/// Validation failed with the given message. The next submit installs
	/// anyway, without validating again.
	Invalid(String),
}

impl Validation {
	pub const fn is_unknown(&self) -> bool {
		matches!(self, Self::Unknown)
	}

	pub const fn is_valid(&self) -> bool {
		matches!(self, Self::Valid)
	}

	pub const fn is_invalid(&self) -> bool {
		matches!(self, Self::Invalid(_))
	}

	/// The message of a failed validation, if that is what this is.
	pub fn error_message(&self) -> Option<&str> {
		match self {
			Self::Invalid(message) => Some(message),
			_ => None,
		}
	}
}

/// The transient state of the repository form: every editable field, plus
/// the validation state the submit workflow keys off. Only the setters of
/// validity-affecting fields reset [`RepoFormModel::validation`]; keeping
/// them together in one type is what enforces that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoFormModel {
	/// The namespace the repository is (or will be) registered in.
	pub namespace: String,
	/// Whether the form edits an existing repository. The name is the
	/// identity key and becomes immutable once registered.
	pub editing: bool,
	pub name: String,
	pub url: String,
	pub auth_method: AuthMethod,
	pub username: String,
	pub password: String,
	pub token: String,
	/// The raw header text of the custom auth method.
	pub auth_header: String,
	pub custom_ca: String,
	/// The sync job pod template override, as YAML text.
	pub sync_job_pod_template: String,
	/// Which pull secrets are selected, by name.
	pub selected_pull_secrets: BTreeMap<String, bool>,
	pub validation: Validation,
}

impl RepoFormModel {
	/// An empty draft for registering a new repository in the given
	/// namespace.
	pub fn new(namespace: impl Into<String>) -> Self {
		Self {
			namespace: namespace.into(),
			..Default::default()
		}
	}

	/// Hydrates a draft from an existing repository and its auth secret. The
	/// stored authorization header is sniffed back into the auth method it
	/// was built from: a `Basic` prefix decodes into username and password,
	/// a `Bearer` prefix into a token, and anything else is kept verbatim as
	/// a custom header.
	pub fn from_existing(repo: &ChartRepository, secret: Option<&RegistrySecret>) -> Self {
		let mut model = Self::new(repo.namespace.clone());
		model.editing = true;
		model.name = repo.name.clone();
		model.url = repo.spec.url.clone();
		model.sync_job_pod_template = repo
			.spec
			.sync_job_pod_template
			.as_ref()
			.and_then(|template| serde_yaml::to_string(template).ok())
			.unwrap_or_default();

		let Some(secret) = secret else {
			return model;
		};
		if let Some(ca_cert) = secret.ca_cert() {
			model.custom_ca = ca_cert.to_owned();
		}
		if let Some(header) = secret.authorization_header() {
			if let Some(credentials) = header.strip_prefix("Basic ") {
				let decoded = BASE64_STANDARD
					.decode(credentials)
					.ok()
					.and_then(|bytes| String::from_utf8(bytes).ok())
					.unwrap_or_default();
				let (username, password) =
					decoded.split_once(':').unwrap_or((decoded.as_str(), ""));
				model.username = username.to_owned();
				model.password = password.to_owned();
				model.auth_method = AuthMethod::Basic;
			} else if let Some(token) = header.strip_prefix("Bearer ") {
				model.token = token.to_owned();
				model.auth_method = AuthMethod::Bearer;
			} else if !header.is_empty() {
				model.auth_header = header.to_owned();
				model.auth_method = AuthMethod::Custom;
			}
		}
		model
	}

	/// The effective authorization header for the current method and fields.
	pub fn authorization_header(&self) -> String {
		match self.auth_method {
			AuthMethod::None => String::new(),
			AuthMethod::Basic => format!(
				"Basic {}",
				BASE64_STANDARD.encode(format!("{}:{}", self.username, self.password)),
			),
			AuthMethod::Bearer => format!("Bearer {}", self.token),
			AuthMethod::Custom => self.auth_header.clone(),
		}
	}

	// Every setter below touches a field the backend checks during
	// validation, so each one drops the previous validation result.

	pub fn set_url(&mut self, url: String) {
		self.url = url;
		self.validation = Validation::Unknown;
	}

	pub fn set_auth_method(&mut self, auth_method: AuthMethod) {
		self.auth_method = auth_method;
		self.validation = Validation::Unknown;
	}

	pub fn set_username(&mut self, username: String) {
		self.username = username;
		self.validation = Validation::Unknown;
	}

	pub fn set_password(&mut self, password: String) {
		self.password = password;
		self.validation = Validation::Unknown;
	}

	pub fn set_token(&mut self, token: String) {
		self.token = token;
		self.validation = Validation::Unknown;
	}

	pub fn set_auth_header(&mut self, auth_header: String) {
		self.auth_header = auth_header;
		self.validation = Validation::Unknown;
	}

	pub fn set_custom_ca(&mut self, custom_ca: String) {
		self.custom_ca = custom_ca;
		self.validation = Validation::Unknown;
	}

	pub fn set_sync_job_pod_template(&mut self, sync_job_pod_template: String) {
		self.sync_job_pod_template = sync_job_pod_template;
		self.validation = Validation::Unknown;
	}

	/// The name is not part of what the backend validates, so changing it
	/// keeps the validation result.
	pub fn set_name(&mut self, name: String) {
		self.name = name;
	}

	/// Folds the listed pull secrets into the selection map. A secret is
	/// selected if it was already selected, or if the repository being
	/// edited references it. The merge is idempotent so it can run on every
	/// refetch of the secret list.
	pub fn merge_pull_secrets(
		&mut self,
		secrets: &[RegistrySecret],
		existing: Option<&ChartRepository>,
	) {
		for secret in secrets {
			let already_selected = self
				.selected_pull_secrets
				.get(&secret.name)
				.copied()
				.unwrap_or(false);
			let referenced = existing
				.is_some_and(|repo| repo.spec.registry_secrets.contains(&secret.name));
			self.selected_pull_secrets
				.insert(secret.name.clone(), already_selected || referenced);
		}
	}

	/// Flips the selection of one pull secret.
	pub fn toggle_pull_secret(&mut self, name: &str) {
		let selected = self
			.selected_pull_secrets
			.entry(name.to_owned())
			.or_insert(false);
		*selected = !*selected;
	}

	/// The names of the currently selected pull secrets.
	pub fn selected_secret_names(&self) -> Vec<String> {
		self.selected_pull_secrets
			.iter()
			.filter(|(_, selected)| **selected)
			.map(|(name, _)| name.clone())
			.collect()
	}

	/// Assembles the submit payload from the current fields.
	pub fn to_submission(&self) -> RepoSubmission {
		RepoSubmission {
			update: self.editing,
			name: self.name.clone(),
			namespace: self.namespace.clone(),
			url: self.url.clone(),
			auth_header: self.authorization_header(),
			custom_ca: self.custom_ca.clone(),
			sync_job_pod_template: self.sync_job_pod_template.clone(),
			registry_secrets: self.selected_secret_names(),
		}
	}
}

/// What one submit attempt ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The repository was registered or updated.
	Installed,
	/// Validation failed. The error is in the model; submitting again
	/// installs anyway.
	ValidationFailed,
	/// Validation passed (or was forced past), but the install call failed.
	InstallFailed,
}

/// Runs one submit attempt against the injected API.
///
/// An attempt that starts with an unknown validation state validates first
/// and stops (reporting the error) if validation fails. An attempt that
/// starts with a failed validation skips re-validation and installs anyway;
/// one failed validation is all it takes to arm that force path. A
/// successful install resets the draft.
pub async fn run_submit(api: &dyn RepositoryApi, model: &mut RepoFormModel) -> SubmitOutcome {
	let force = model.validation.is_invalid();
	if model.validation.is_unknown() {
		let auth_header = model.authorization_header();
		model.validation = match api
			.validate_repository(&model.url, &auth_header, &model.custom_ca)
			.await
		{
			Ok(()) => Validation::Valid,
			Err(message) => Validation::Invalid(message),
		};
	}

	if !model.validation.is_valid() && !force {
		return SubmitOutcome::ValidationFailed;
	}

	if api.create_or_update_repository(&model.to_submission()).await {
		*model = RepoFormModel::new(model.namespace.clone());
		SubmitOutcome::Installed
	} else {
		SubmitOutcome::InstallFailed
	}
}

/// The transient state of the docker credentials sub-form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryCredsModel {
	pub name: String,
	pub server: String,
	pub username: String,
	pub password: String,
	pub email: String,
}

impl RegistryCredsModel {
	/// Assembles the create-secret payload for the given namespace.
	pub fn to_request(&self, namespace: &str) -> CreateDockerSecretRequest {
		CreateDockerSecretRequest {
			name: self.name.clone(),
			namespace: namespace.to_owned(),
			server: self.server.clone(),
			username: self.username.clone(),
			password: self.password.clone(),
			email: self.email.clone(),
		}
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}
}

/// Creates a pull secret from the sub-form fields. On success the secret
/// list is fetched again (so the new secret shows up as a selectable row)
/// and the fields are cleared; on failure the fields are kept for
/// correction and `None` is returned.
pub async fn run_create_secret(
	api: &dyn RepositoryApi,
	model: &mut RegistryCredsModel,
	namespace: &str,
) -> Option<Vec<RegistrySecret>> {
	if !api.create_docker_secret(&model.to_request(namespace)).await {
		return None;
	}
	let refreshed = api.list_pull_secrets(namespace).await;
	model.clear();
	Some(refreshed)
}

/// Shapes a validation failure for display. Messages that parse as a JSON
/// document with `code` and `message` fields are summarized as
/// `Code: <code>. Message: <message>`; anything else is shown verbatim.
pub fn parse_validation_error(message: &str) -> String {
	if let Ok(value) = serde_json::from_str::<serde_json::Value>(message) {
		let code = value.get("code");
		let text = value.get("message").and_then(serde_json::Value::as_str);
		if let (Some(code), Some(text)) = (code, text) {
			let code = match code {
				serde_json::Value::String(code) => code.clone(),
				other => other.to_string(),
			};
			return format!("Code: {}. Message: {}", code, text);
		}
	}
	message.to_owned()
}

/// Builds the bulk resync payload from the currently known repositories,
/// order preserved.
pub fn resync_targets(repositories: &[ChartRepository]) -> Vec<RepositoryTarget> {
	repositories
		.iter()
		.map(|repo| RepositoryTarget {
			name: repo.name.clone(),
			namespace: repo.namespace.clone(),
		})
		.collect()
}

/// The question asked before a repository is deleted.
pub fn delete_confirmation_message(name: &str) -> String {
	format!("Are you sure you want to delete the repository {}?", name)
}

#[cfg(test)]
mod test {
	use std::cell::{Cell, RefCell};

	use async_trait::async_trait;
	use models::prelude::*;
	use serde_json::json;

	use super::{
		delete_confirmation_message,
		parse_validation_error,
		resync_targets,
		run_create_secret,
		run_submit,
		AuthMethod,
		RegistryCredsModel,
		RepoFormModel,
		SubmitOutcome,
		Validation,
	};
	use crate::api::{RepoSubmission, RepositoryApi};

	/// A counting double for the backend capabilities. Every call records
	/// its name so tests can assert on how often, and in what order, the
	/// backend was hit.
	struct FakeApi {
		calls: RefCell<Vec<&'static str>>,
		validate_result: Result<(), String>,
		install_result: Cell<bool>,
		submissions: RefCell<Vec<RepoSubmission>>,
		pull_secrets: Vec<RegistrySecret>,
		create_secret_result: Cell<bool>,
	}

	impl Default for FakeApi {
		fn default() -> Self {
			Self {
				calls: RefCell::new(Vec::new()),
				validate_result: Ok(()),
				install_result: Cell::new(true),
				submissions: RefCell::new(Vec::new()),
				pull_secrets: Vec::new(),
				create_secret_result: Cell::new(true),
			}
		}
	}

	impl FakeApi {
		fn failing_validation(message: &str) -> Self {
			Self {
				validate_result: Err(message.to_owned()),
				..Default::default()
			}
		}

		fn count(&self, call: &str) -> usize {
			self.calls
				.borrow()
				.iter()
				.filter(|&&name| name == call)
				.count()
		}
	}

	#[async_trait(?Send)]
	impl RepositoryApi for FakeApi {
		async fn validate_repository(
			&self,
			_url: &str,
			_auth_header: &str,
			_custom_ca: &str,
		) -> Result<(), String> {
			self.calls.borrow_mut().push("validate");
			self.validate_result.clone()
		}

		async fn create_or_update_repository(&self, submission: &RepoSubmission) -> bool {
			self.calls.borrow_mut().push("install");
			self.submissions.borrow_mut().push(submission.clone());
			self.install_result.get()
		}

		async fn list_pull_secrets(&self, _namespace: &str) -> Vec<RegistrySecret> {
			self.calls.borrow_mut().push("list_secrets");
			self.pull_secrets.clone()
		}

		async fn create_docker_secret(&self, _request: &CreateDockerSecretRequest) -> bool {
			self.calls.borrow_mut().push("create_secret");
			self.create_secret_result.get()
		}
	}

	fn pull_secret(name: &str) -> RegistrySecret {
		RegistrySecret {
			name: name.to_owned(),
			namespace: "team-a".to_owned(),
			data: Default::default(),
		}
	}

	#[test]
	fn computes_header_for_each_auth_method() {
		let mut model = RepoFormModel::new("team-a");
		assert_eq!(model.authorization_header(), "");

		model.set_auth_method(AuthMethod::Basic);
		model.set_username("a".to_owned());
		model.set_password("b".to_owned());
		// base64("a:b")
		assert_eq!(model.authorization_header(), "Basic YTpi");

		model.set_auth_method(AuthMethod::Bearer);
		model.set_token("xrxNcWghpRLdcPHFgVRM".to_owned());
		assert_eq!(model.authorization_header(), "Bearer xrxNcWghpRLdcPHFgVRM");

		model.set_auth_method(AuthMethod::Custom);
		model.set_auth_header("X-Auth pass".to_owned());
		assert_eq!(model.authorization_header(), "X-Auth pass");
	}

	#[test]
	fn validity_affecting_setters_reset_validation() {
		let setters: &[fn(&mut RepoFormModel)] = &[
			|model| model.set_url("https://charts.example.com".to_owned()),
			|model| model.set_auth_method(AuthMethod::Bearer),
			|model| model.set_username("user".to_owned()),
			|model| model.set_password("pass".to_owned()),
			|model| model.set_token("token".to_owned()),
			|model| model.set_auth_header("X-Auth pass".to_owned()),
			|model| model.set_custom_ca("cert".to_owned()),
			|model| model.set_sync_job_pod_template("spec: {}".to_owned()),
		];
		for setter in setters {
			let mut model = RepoFormModel::new("team-a");
			model.validation = Validation::Valid;
			setter(&mut model);
			assert_eq!(model.validation, Validation::Unknown);
		}
	}

	#[test]
	fn name_change_keeps_validation() {
		let mut model = RepoFormModel::new("team-a");
		model.validation = Validation::Valid;
		model.set_name("renamed".to_owned());
		assert_eq!(model.validation, Validation::Valid);
	}

	fn existing_repo(auth_header: Option<&str>) -> (ChartRepository, RegistrySecret) {
		let repo = ChartRepository {
			name: "stable".to_owned(),
			namespace: "team-a".to_owned(),
			spec: ChartRepositorySpec {
				url: "https://charts.example.com/stable".to_owned(),
				auth_secret: Some("stable-auth".to_owned()),
				sync_job_pod_template: None,
				registry_secrets: vec!["team-a-pull".to_owned()],
			},
		};
		let mut data = std::collections::BTreeMap::new();
		if let Some(header) = auth_header {
			data.insert(AUTHORIZATION_HEADER_KEY.to_owned(), Base64String::from(header));
		}
		let secret = RegistrySecret {
			name: "stable-auth".to_owned(),
			namespace: "team-a".to_owned(),
			data,
		};
		(repo, secret)
	}

	#[test]
	fn hydrates_basic_auth_from_stored_secret() {
		let (repo, secret) = existing_repo(Some("Basic YTpi"));
		let model = RepoFormModel::from_existing(&repo, Some(&secret));
		assert!(model.editing);
		assert_eq!(model.name, "stable");
		assert_eq!(model.url, "https://charts.example.com/stable");
		assert_eq!(model.auth_method, AuthMethod::Basic);
		assert_eq!(model.username, "a");
		assert_eq!(model.password, "b");
	}

	#[test]
	fn hydrates_bearer_and_custom_headers() {
		let (repo, secret) = existing_repo(Some("Bearer token-123"));
		let model = RepoFormModel::from_existing(&repo, Some(&secret));
		assert_eq!(model.auth_method, AuthMethod::Bearer);
		assert_eq!(model.token, "token-123");

		let (repo, secret) = existing_repo(Some("X-Auth pass"));
		let model = RepoFormModel::from_existing(&repo, Some(&secret));
		assert_eq!(model.auth_method, AuthMethod::Custom);
		assert_eq!(model.auth_header, "X-Auth pass");
	}

	#[test]
	fn hydrates_ca_and_sync_template() {
		let (mut repo, mut secret) = existing_repo(None);
		repo.spec.sync_job_pod_template = Some(json!({ "spec": { "containers": [] } }));
		secret.data.insert(
			CA_CERT_KEY.to_owned(),
			Base64String::from("-----BEGIN CERTIFICATE-----"),
		);

		let model = RepoFormModel::from_existing(&repo, Some(&secret));
		assert_eq!(model.auth_method, AuthMethod::None);
		assert_eq!(model.custom_ca, "-----BEGIN CERTIFICATE-----");
		assert_eq!(model.sync_job_pod_template, "spec:\n  containers: []\n");
	}

	#[test]
	fn pull_secret_selection_is_monotonic_or() {
		let (repo, _) = existing_repo(None);
		let secrets = vec![pull_secret("team-a-pull"), pull_secret("other-pull")];

		let mut model = RepoFormModel::from_existing(&repo, None);
		// a prior toggle of a secret the repo does not reference
		model.toggle_pull_secret("other-pull");
		model.merge_pull_secrets(&secrets, Some(&repo));

		// referenced by the repo, so selected regardless of toggle history
		assert_eq!(model.selected_pull_secrets.get("team-a-pull"), Some(&true));
		assert_eq!(model.selected_pull_secrets.get("other-pull"), Some(&true));

		// merging again changes nothing
		let before = model.selected_pull_secrets.clone();
		model.merge_pull_secrets(&secrets, Some(&repo));
		assert_eq!(model.selected_pull_secrets, before);

		// but the user can still unselect by toggling
		model.toggle_pull_secret("team-a-pull");
		assert_eq!(model.selected_pull_secrets.get("team-a-pull"), Some(&false));
		assert_eq!(model.selected_secret_names(), vec!["other-pull".to_owned()]);
	}

	#[tokio::test]
	async fn first_failed_validation_blocks_then_force_submits() {
		let api = FakeApi::failing_validation("index fetch failed");
		let mut model = RepoFormModel::new("team-a");
		model.set_name("stable".to_owned());
		model.set_url("https://charts.example.com".to_owned());

		// first submit validates, fails and does not install
		let outcome = run_submit(&api, &mut model).await;
		assert_eq!(outcome, SubmitOutcome::ValidationFailed);
		assert_eq!(
			model.validation,
			Validation::Invalid("index fetch failed".to_owned()),
		);
		assert_eq!(api.count("validate"), 1);
		assert_eq!(api.count("install"), 0);

		// second submit with unchanged fields installs without re-validating
		let outcome = run_submit(&api, &mut model).await;
		assert_eq!(outcome, SubmitOutcome::Installed);
		assert_eq!(api.count("validate"), 1);
		assert_eq!(api.count("install"), 1);
	}

	#[tokio::test]
	async fn editing_a_field_disarms_the_force_path() {
		let api = FakeApi::failing_validation("index fetch failed");
		let mut model = RepoFormModel::new("team-a");
		model.set_url("https://charts.example.com".to_owned());

		run_submit(&api, &mut model).await;
		model.set_url("https://charts.example.com/stable".to_owned());

		// back to unknown, so the next submit validates again
		run_submit(&api, &mut model).await;
		assert_eq!(api.count("validate"), 2);
		assert_eq!(api.count("install"), 0);
	}

	#[tokio::test]
	async fn valid_repository_submits_with_selected_secrets() {
		let api = FakeApi::default();
		let mut model = RepoFormModel::new("team-a");
		model.set_name("stable".to_owned());
		model.set_url("https://charts.example.com".to_owned());
		model.set_auth_method(AuthMethod::Bearer);
		model.set_token("token-123".to_owned());
		model.merge_pull_secrets(&[pull_secret("team-a-pull"), pull_secret("other-pull")], None);
		model.toggle_pull_secret("team-a-pull");

		let outcome = run_submit(&api, &mut model).await;
		assert_eq!(outcome, SubmitOutcome::Installed);
		assert_eq!(api.count("validate"), 1);

		let submissions = api.submissions.borrow();
		assert_eq!(submissions.len(), 1);
		assert_eq!(submissions[0].name, "stable");
		assert_eq!(submissions[0].auth_header, "Bearer token-123");
		assert_eq!(submissions[0].registry_secrets, vec!["team-a-pull".to_owned()]);

		// the draft is reset after a successful install
		assert_eq!(model, RepoFormModel::new("team-a"));
	}

	#[tokio::test]
	async fn install_failure_keeps_validation_state() {
		let api = FakeApi::default();
		api.install_result.set(false);
		let mut model = RepoFormModel::new("team-a");
		model.set_url("https://charts.example.com".to_owned());

		let outcome = run_submit(&api, &mut model).await;
		assert_eq!(outcome, SubmitOutcome::InstallFailed);
		assert_eq!(model.validation, Validation::Valid);

		// retrying does not validate again; the result is still known
		run_submit(&api, &mut model).await;
		assert_eq!(api.count("validate"), 1);
		assert_eq!(api.count("install"), 2);
	}

	#[tokio::test]
	async fn creating_a_secret_refetches_then_clears() {
		let api = FakeApi {
			pull_secrets: vec![pull_secret("fresh-pull")],
			..Default::default()
		};
		let mut model = RegistryCredsModel {
			name: "fresh-pull".to_owned(),
			server: "https://index.docker.io/v1/".to_owned(),
			username: "user".to_owned(),
			password: "hunter2".to_owned(),
			email: "user@example.com".to_owned(),
		};

		let refreshed = run_create_secret(&api, &mut model, "team-a").await;
		assert_eq!(refreshed.as_ref().map(Vec::len), Some(1));
		assert_eq!(*api.calls.borrow(), vec!["create_secret", "list_secrets"]);
		assert_eq!(model, RegistryCredsModel::default());
	}

	#[tokio::test]
	async fn failed_secret_creation_keeps_fields() {
		let api = FakeApi::default();
		api.create_secret_result.set(false);
		let mut model = RegistryCredsModel {
			name: "fresh-pull".to_owned(),
			..Default::default()
		};

		let refreshed = run_create_secret(&api, &mut model, "team-a").await;
		assert_eq!(refreshed, None);
		assert_eq!(*api.calls.borrow(), vec!["create_secret"]);
		assert_eq!(model.name, "fresh-pull");
	}

	#[test]
	fn shapes_structured_validation_errors() {
		assert_eq!(
			parse_validation_error(r#"{"code":401,"message":"Unauthorized"}"#),
			"Code: 401. Message: Unauthorized",
		);
		assert_eq!(
			parse_validation_error(r#"{"code":"Forbidden","message":"no access"}"#),
			"Code: Forbidden. Message: no access",
		);
		// not JSON, shown verbatim
		assert_eq!(parse_validation_error("connection refused"), "connection refused");
		// JSON without both fields, shown verbatim
		assert_eq!(parse_validation_error(r#"{"code":500}"#), r#"{"code":500}"#);
	}

	#[test]
	fn resync_targets_preserve_order() {
		let repositories = vec![
			ChartRepository {
				name: "n1".to_owned(),
				namespace: "ns1".to_owned(),
				spec: Default::default(),
			},
			ChartRepository {
				name: "n2".to_owned(),
				namespace: "ns2".to_owned(),
				spec: Default::default(),
			},
		];
		assert_eq!(
			resync_targets(&repositories),
			vec![
				RepositoryTarget {
					name: "n1".to_owned(),
					namespace: "ns1".to_owned(),
				},
				RepositoryTarget {
					name: "n2".to_owned(),
					namespace: "ns2".to_owned(),
				},
			],
		);
		assert!(resync_targets(&[]).is_empty());
	}

	#[test]
	fn delete_confirmation_embeds_name() {
		assert_eq!(
			delete_confirmation_message("stable"),
			"Are you sure you want to delete the repository stable?",
		);
	}
}
