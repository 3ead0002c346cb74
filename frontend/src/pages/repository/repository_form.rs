use strum::IntoEnumIterator;

use super::{
	parse_validation_error,
	run_submit,
	AddRegistryCreds,
	AuthMethod,
	RepoFormModel,
	SubmitOutcome,
};
use crate::prelude::*;

/// The repository registration form. Owns every editable field and the
/// validate-then-install submit workflow; an existing repository (plus its
/// auth secret) switches it into edit mode.
#[component]
pub fn RepositoryForm(
	/// The namespace the repository is registered in.
	#[prop(into)]
	namespace: String,
	/// The namespace the console itself is installed in.
	#[prop(into)]
	system_namespace: String,
	/// The repository to edit; `None` registers a new one.
	#[prop(optional_no_strip)]
	repo: Option<ChartRepository>,
	/// The auth secret of the edited repository, if any.
	#[prop(optional_no_strip)]
	secret: Option<RegistrySecret>,
	/// Called after a successful install or update.
	#[prop(into, optional)]
	on_installed: Option<Callback<()>>,
) -> impl IntoView {
	let ApiClient(api) = expect_context::<ApiClient>();

	let editing = repo.is_some();
	let model = create_rw_signal(match &repo {
		Some(repo) => RepoFormModel::from_existing(repo, secret.as_ref()),
		None => RepoFormModel::new(namespace.clone()),
	});
	let repo = store_value(repo);

	// Pull secrets are namespace scoped, so they can only be attached to
	// repositories outside the system namespace, where every namespace would
	// need them.
	let offer_pull_secrets = namespace != system_namespace;
	let namespace_notice = namespace == system_namespace || namespace == ALL_NAMESPACES;

	let secrets = create_rw_signal(Vec::<RegistrySecret>::new());
	if offer_pull_secrets {
		let api = api.clone();
		let namespace = namespace.clone();
		spawn_local(async move {
			secrets.set(api.list_pull_secrets(&namespace).await);
		});
	}

	create_effect(move |_| {
		let list = secrets.get();
		model.update(|model| {
			repo.with_value(|repo| model.merge_pull_secrets(&list, repo.as_ref()));
		});
	});

	let submit = create_action(move |_: &()| {
		let api = api.clone();
		async move {
			let mut current = model.get_untracked();
			let outcome = run_submit(api.as_ref(), &mut current).await;
			model.set(current);
			if let (SubmitOutcome::Installed, Some(on_installed)) = (outcome, on_installed) {
				on_installed.call(());
			}
		}
	});
	let submitting = submit.pending();

	let handle_submit = move |ev: ev::SubmitEvent| {
		ev.prevent_default();
		submit.dispatch(());
	};

	let submit_label = move || {
		if submitting.get() {
			if model.with(|model| model.validation.is_unknown()) {
				"Validating...".to_owned()
			} else {
				"Installing...".to_owned()
			}
		} else {
			format!(
				"{} Repository{}",
				if editing { "Update" } else { "Install" },
				if model.with(|model| model.validation.is_invalid()) {
					" (force)"
				} else {
					""
				},
			)
		}
	};

	let namespace = store_value(namespace);
	let system_namespace = store_value(system_namespace);

	view! {
		<form class="full-width fc-fs-fs px-md txt-white" on:submit={handle_submit}>
			<h2 class="txt-lg txt-medium mb-md">
				{if editing {
					"Edit Repository"
				} else {
					"Add a Chart Repository"
				}}
			</h2>

			<div class="flex mb-md full-width">
				<label html_for="repo-name" class="flex-col-2 fr-fs-ct txt-sm">
					"Name"
				</label>
				<div class="flex-col-10 fc-fs-fs pl-xs">
					<Input
						id="repo-name"
						class="full-width"
						placeholder="example"
						required=true
						disabled={editing}
						pattern="[a-z0-9]([-a-z0-9]*[a-z0-9])?(\\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*"
						title="Use lower case alphanumeric characters, '-' or '.'"
						value={Signal::derive(move || model.with(|model| model.name.clone()))}
						on_input={Box::new(move |ev| {
							model.update(|model| model.set_name(event_target_value(&ev)));
						})}
					/>
				</div>
			</div>

			<div class="flex mb-md full-width">
				<label html_for="repo-url" class="flex-col-2 fr-fs-ct txt-sm">
					"URL"
				</label>
				<div class="flex-col-10 fc-fs-fs pl-xs">
					<Input
						id="repo-url"
						r#type={InputType::Url}
						class="full-width"
						placeholder="https://charts.example.com/stable"
						required=true
						value={Signal::derive(move || model.with(|model| model.url.clone()))}
						on_input={Box::new(move |ev| {
							model.update(|model| model.set_url(event_target_value(&ev)));
						})}
					/>
				</div>
			</div>

			<div class="fc-fs-fs mb-md full-width">
				<p class="txt-sm mb-xxs">"Repository Authorization (optional)"</p>
				<p class="txt-xs txt-grey mb-xs">
					"Introduce the credentials to access the chart repository if authentication is enabled."
				</p>
				<div class="flex full-width">
					<div class="flex-col-2 fc-fs-fs gap-xs">
						{AuthMethod::iter()
							.map(|method| {
								view! {
									<label
										html_for={format!("repo-auth-method-{}", method)}
										class="fr-fs-ct gap-xs txt-sm"
									>
										<input
											type="radio"
											name="auth-method"
											id={format!("repo-auth-method-{}", method)}
											value={method.to_string()}
											prop:checked={move || {
												model.with(|model| model.auth_method == method)
											}}
											on:change={move |_| {
												model.update(|model| model.set_auth_method(method));
											}}
										/>
										{method.label()}
									</label>
								}
							})
							.collect_view()}
					</div>
					<div class="flex-col-10 fc-fs-fs pl-xs gap-xs">
						<Show when={move || {
							model.with(|model| model.auth_method == AuthMethod::Basic)
						}}>
							<Input
								id="repo-username"
								class="full-width"
								placeholder="Username"
								value={Signal::derive(move || {
									model.with(|model| model.username.clone())
								})}
								on_input={Box::new(move |ev| {
									model.update(|model| model.set_username(event_target_value(&ev)));
								})}
							/>
							<Input
								id="repo-password"
								r#type={InputType::Password}
								class="full-width"
								placeholder="Password"
								value={Signal::derive(move || {
									model.with(|model| model.password.clone())
								})}
								on_input={Box::new(move |ev| {
									model.update(|model| model.set_password(event_target_value(&ev)));
								})}
							/>
						</Show>
						<Show when={move || {
							model.with(|model| model.auth_method == AuthMethod::Bearer)
						}}>
							<Input
								id="repo-token"
								class="full-width"
								placeholder="Token"
								value={Signal::derive(move || {
									model.with(|model| model.token.clone())
								})}
								on_input={Box::new(move |ev| {
									model.update(|model| model.set_token(event_target_value(&ev)));
								})}
							/>
						</Show>
						<Show when={move || {
							model.with(|model| model.auth_method == AuthMethod::Custom)
						}}>
							<Input
								id="repo-custom-header"
								class="full-width"
								placeholder="Bearer xrxNcWghpRLdcPHFgVRM73rr4N7qjvjm"
								value={Signal::derive(move || {
									model.with(|model| model.auth_header.clone())
								})}
								on_input={Box::new(move |ev| {
									model.update(|model| {
										model.set_auth_header(event_target_value(&ev));
									});
								})}
							/>
						</Show>
					</div>
				</div>
			</div>

			<Show when={move || offer_pull_secrets}>
				<div class="fc-fs-fs mb-md full-width">
					<p class="txt-sm mb-xxs">"Associate Registry Credentials (optional)"</p>
					<p class="txt-xs txt-grey mb-xs">
						"Select existing secret(s) to access a private registry and pull images from it."
					</p>
					<AddRegistryCreds
						secrets={secrets}
						selected={Signal::derive(move || {
							model.with(|model| model.selected_pull_secrets.clone())
						})}
						on_toggle={Callback::new(move |name: String| {
							model.update(|model| model.toggle_pull_secret(&name));
						})}
						namespace={namespace.get_value()}
					/>
				</div>
			</Show>

			<div class="fc-fs-fs mb-md full-width">
				<label html_for="repo-custom-ca" class="txt-sm mb-xxs">
					"Custom CA Certificate (optional)"
				</label>
				<Textarea
					id="repo-custom-ca"
					class="full-width"
					placeholder="-----BEGIN CERTIFICATE-----\n...\n-----END CERTIFICATE-----"
					value={Signal::derive(move || model.with(|model| model.custom_ca.clone()))}
					on_input={Box::new(move |ev| {
						model.update(|model| model.set_custom_ca(event_target_value(&ev)));
					})}
				/>
			</div>

			<div class="fc-fs-fs mb-md full-width">
				<div class="fr-fs-ct gap-xs mb-xxs">
					<label html_for="repo-sync-job-template" class="txt-sm">
						"Custom Sync Job Template (optional)"
					</label>
					<Tooltip>
						"It's possible to modify the default sync job. When doing so, the pre-validation is not supported."
					</Tooltip>
				</div>
				<Textarea
					id="repo-sync-job-template"
					class="full-width"
					placeholder="spec:\n  containers:\n  - env:\n    - name: FOO\n      value: BAR"
					value={Signal::derive(move || {
						model.with(|model| model.sync_job_pod_template.clone())
					})}
					on_input={Box::new(move |ev| {
						model.update(|model| {
							model.set_sync_job_pod_template(event_target_value(&ev));
						});
					})}
				/>
			</div>

			<Show when={move || namespace_notice}>
				<p class="txt-xs txt-warning mb-sm">
					{format!(
						"NOTE: This repository will be created in the \"{}\" namespace and charts will be available in all namespaces for installation.",
						system_namespace.get_value(),
					)}
				</p>
			</Show>

			{move || {
				model.with(|model| {
					model.validation.error_message().map(|message| {
						view! {
							<Alert
								r#type={NotificationType::Error}
								class="mb-sm"
								message={format!(
									"Validation Failed. Got: {}",
									parse_validation_error(message),
								)}
							/>
						}
					})
				})
			}}

			<div class="fr-fe-ct full-width mt-xs">
				<Link
					r#type={Variant::Button}
					style_variant={LinkStyleVariant::Contained}
					should_submit=true
					disabled={submitting}
				>
					{submit_label}
				</Link>
			</div>
		</form>
	}
}
