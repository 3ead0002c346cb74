use std::rc::Rc;

use super::RepositoryForm;
use crate::prelude::*;

/// The shared entry point to the repository form: a button that opens the
/// form in a modal, either empty ("Add Repository") or pre-filled with an
/// existing repository ("Edit").
#[component]
pub fn RepositoryFormButton(
	/// The label of the trigger button.
	#[prop(into)]
	text: String,
	/// The icon shown before the label, if any.
	#[prop(optional)]
	icon: Option<IconType>,
	/// The namespace the form registers into.
	#[prop(into)]
	namespace: MaybeSignal<String>,
	/// The repository to edit; `None` registers a new one.
	#[prop(into, optional)]
	repo: Option<ChartRepository>,
	/// The auth secret of the edited repository, if any.
	#[prop(into, optional_no_strip)]
	secret: Option<RegistrySecret>,
	/// Called after the form installs or updates successfully.
	#[prop(into, optional_no_strip)]
	on_change: Option<Callback<()>>,
) -> impl IntoView {
	let show_form_modal = create_rw_signal(false);

	let repo = store_value(repo);
	let secret = store_value(secret);
	let namespace = store_value(namespace);

	let on_installed = Callback::new(move |_| {
		show_form_modal.set(false);
		if let Some(on_change) = on_change {
			on_change.call(());
		}
	});

	view! {
		<Show when={move || show_form_modal.get()}>
			<Modal color_variant={SecondaryColorVariant::Light}>
				<div class="center-modal fc-fs-fs bg-secondary-light br-sm p-xl of-auto">
					<button
						class="btn-icon ml-auto"
						type="button"
						on:click={move |_| show_form_modal.set(false)}
					>
						<Icon icon={IconType::X} size={Size::ExtraSmall} color={Color::Grey} />
					</button>
					<RepositoryForm
						namespace={namespace.get_value().get()}
						system_namespace={constants::SYSTEM_NAMESPACE}
						repo={repo.get_value()}
						secret={secret.get_value()}
						on_installed={on_installed}
					/>
				</div>
			</Modal>
		</Show>
		<Link
			r#type={Variant::Button}
			style_variant={LinkStyleVariant::Contained}
			on_click={Rc::new(move |_| show_form_modal.set(true))}
		>
			{icon.map(|icon| {
				view! {
					<Icon
						icon={icon}
						size={Size::ExtraSmall}
						color={Color::Black}
						class="mr-xs"
					/>
				}
			})}
			{text}
		</Link>
	}
}
