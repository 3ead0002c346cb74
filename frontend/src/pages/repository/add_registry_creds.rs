use std::{collections::BTreeMap, rc::Rc};

use super::{run_create_secret, RegistryCredsModel};
use crate::prelude::*;

/// The docker credentials sub-form: a checkbox per existing pull secret plus
/// a collapsible panel for creating a new one. Selection state lives in the
/// surrounding repository form; this component only flips it through the
/// toggle callback.
#[component]
pub fn AddRegistryCreds(
	/// The pull secrets that exist in the namespace.
	#[prop(into)]
	secrets: RwSignal<Vec<RegistrySecret>>,
	/// Which secrets are currently selected, by name.
	#[prop(into)]
	selected: Signal<BTreeMap<String, bool>>,
	/// Flips the selection of one secret.
	#[prop(into)]
	on_toggle: Callback<String>,
	/// The namespace the secrets live in.
	#[prop(into)]
	namespace: String,
) -> impl IntoView {
	let ApiClient(api) = expect_context::<ApiClient>();

	let creds = create_rw_signal(RegistryCredsModel::default());
	let show_sub_form = create_rw_signal(false);

	let create_secret = create_action(move |_: &()| {
		let api = api.clone();
		let namespace = namespace.clone();
		async move {
			let mut current = creds.get_untracked();
			if let Some(refreshed) = run_create_secret(api.as_ref(), &mut current, &namespace).await
			{
				secrets.set(refreshed);
				show_sub_form.set(false);
			}
			creds.set(current);
		}
	});
	let creating = create_secret.pending();

	let field = move |id: &'static str,
	                  label: &'static str,
	                  r#type: InputType,
	                  placeholder: &'static str,
	                  value: Signal<String>,
	                  on_input: Box<dyn FnMut(ev::Event)>| {
		view! {
			<div class="flex full-width mb-xs">
				<label html_for={id} class="flex-col-3 fr-fs-ct txt-sm">
					{label}
				</label>
				<div class="flex-col-9 fc-fs-fs pl-xs">
					<Input
						id={id}
						r#type={r#type}
						class="full-width"
						placeholder={placeholder}
						required=true
						variant={SecondaryColorVariant::Medium}
						value={value}
						on_input={on_input}
					/>
				</div>
			</div>
		}
	};

	view! {
		<div class="fc-fs-fs full-width">
			<Show
				when={move || !secrets.get().is_empty()}
				fallback=|| {
					view! { <p class="txt-sm txt-grey">"No existing credentials found."</p> }
				}
			>
				<For
					each={move || secrets.get()}
					key={|secret| secret.name.clone()}
					let:secret
				>
					<label class="checkbox fr-fs-ct gap-xs txt-sm">
						<input
							type="checkbox"
							prop:checked={
								let name = secret.name.clone();
								move || selected.with(|selected| {
									selected.get(&name).copied().unwrap_or(false)
								})
							}
							on:change={
								let name = secret.name.clone();
								move |_| on_toggle.call(name.clone())
							}
						/>
						<span>{secret.name.clone()}</span>
					</label>
				</For>
			</Show>

			<Show when={move || show_sub_form.get()}>
				<div class="fc-fs-fs full-width mt-sm p-md bg-secondary-medium br-sm">
					{field(
						"docker-cred-secret-name",
						"Secret Name",
						InputType::Text,
						"Secret",
						Signal::derive(move || creds.with(|creds| creds.name.clone())),
						Box::new(move |ev| {
							creds.update(|creds| creds.name = event_target_value(&ev));
						}),
					)}
					{field(
						"docker-cred-server",
						"Server",
						InputType::Url,
						"https://index.docker.io/v1/",
						Signal::derive(move || creds.with(|creds| creds.server.clone())),
						Box::new(move |ev| {
							creds.update(|creds| creds.server = event_target_value(&ev));
						}),
					)}
					{field(
						"docker-cred-username",
						"Username",
						InputType::Text,
						"Username",
						Signal::derive(move || creds.with(|creds| creds.username.clone())),
						Box::new(move |ev| {
							creds.update(|creds| creds.username = event_target_value(&ev));
						}),
					)}
					{field(
						"docker-cred-password",
						"Password",
						InputType::Password,
						"Password",
						Signal::derive(move || creds.with(|creds| creds.password.clone())),
						Box::new(move |ev| {
							creds.update(|creds| creds.password = event_target_value(&ev));
						}),
					)}
					{field(
						"docker-cred-email",
						"Email",
						InputType::Email,
						"user@example.com",
						Signal::derive(move || creds.with(|creds| creds.email.clone())),
						Box::new(move |ev| {
							creds.update(|creds| creds.email = event_target_value(&ev));
						}),
					)}
					<div class="fr-fs-ct gap-sm mt-sm">
						<Link
							r#type={Variant::Button}
							style_variant={LinkStyleVariant::Contained}
							disabled={creating}
							on_click={Rc::new(move |_| create_secret.dispatch(()))}
						>
							{move || if creating.get() { "Creating..." } else { "Submit" }}
						</Link>
						<Link
							r#type={Variant::Button}
							on_click={Rc::new(move |_| show_sub_form.set(false))}
						>
							"Cancel"
						</Link>
					</div>
				</div>
			</Show>
			<Show when={move || !show_sub_form.get()}>
				<Link
					r#type={Variant::Button}
					class="mt-sm"
					on_click={Rc::new(move |_| show_sub_form.set(true))}
				>
					"Add new credentials"
				</Link>
			</Show>
		</div>
	}
}
