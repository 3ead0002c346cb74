use std::rc::Rc;

use super::{delete_confirmation_message, RepositoryFormButton};
use crate::prelude::*;

/// One row of the repository table: name (linking to the repository's
/// catalog), URL, and the delete / edit / resync actions. Deleting asks for
/// confirmation first; resyncing dispatches immediately.
#[component]
pub fn RepositoryItem(
	/// The repository this row displays.
	repo: ChartRepository,
	/// The auth secret of the repository, used to pre-fill the edit form.
	#[prop(optional_no_strip)]
	secret: Option<RegistrySecret>,
	/// Whether to render the namespace column.
	#[prop(into, optional)]
	show_namespace: MaybeSignal<bool>,
	/// Called after this row deletes or updates the repository.
	#[prop(into, optional)]
	on_change: Option<Callback<()>>,
) -> impl IntoView {
	let show_delete_modal = create_rw_signal(false);

	let repo = store_value(repo);
	let secret = store_value(secret);

	let handle_delete = move |_: &ev::MouseEvent| {
		let (name, namespace) =
			repo.with_value(|repo| (repo.name.clone(), repo.namespace.clone()));
		spawn_local(async move {
			if let Err(error) = delete_repository(&namespace, &name).await {
				log::error!("failed to delete repository {}: {}", name, error.body.message);
			}
			if let Some(on_change) = on_change {
				on_change.call(());
			}
		});
		show_delete_modal.set(false);
	};

	let handle_resync = move |_: ev::MouseEvent| {
		let (name, namespace) =
			repo.with_value(|repo| (repo.name.clone(), repo.namespace.clone()));
		spawn_local(async move {
			if let Err(error) = resync_repository(&namespace, &name).await {
				log::error!("failed to resync repository {}: {}", name, error.body.message);
			}
		});
	};

	view! {
		<Show when={move || show_delete_modal.get()}>
			<Modal color_variant={SecondaryColorVariant::Light}>
				<div class="center-modal fc-fs-fs bg-secondary-light br-sm p-xl gap-lg txt-white">
					<p>{repo.with_value(|repo| delete_confirmation_message(&repo.name))}</p>
					<div class="full-width fr-fe-ct gap-md">
						<Link on_click={Rc::new(move |_| show_delete_modal.set(false))}>
							"CANCEL"
						</Link>
						<Link
							style_variant={LinkStyleVariant::Contained}
							color={Color::Error}
							on_click={Rc::new(handle_delete)}
						>
							"DELETE"
						</Link>
					</div>
				</div>
			</Modal>
		</Show>
		<tr class="fr-fs-ct full-width px-xl py-sm br-bottom-sm bd-light row-card bg-secondary-light txt-white">
			<td class="flex-col-3 fr-fs-ct">
				<a
					href={repo.with_value(|repo| catalog_route(&repo.namespace, &repo.name))}
					class="txt-primary of-hidden txt-of-ellipsis"
				>
					{repo.with_value(|repo| repo.name.clone())}
				</a>
			</td>
			{move || {
				show_namespace.get().then(|| {
					view! {
						<td class="flex-col-2 fr-fs-ct">
							{repo.with_value(|repo| repo.namespace.clone())}
						</td>
					}
				})
			}}
			<td class="flex-col-4 fr-fs-ct of-hidden txt-of-ellipsis">
				{repo.with_value(|repo| repo.spec.url.clone())}
			</td>
			<td class="flex-col-3 fr-fe-ct gap-sm">
				<button
					class="btn-icon"
					type="button"
					on:click={move |_| show_delete_modal.set(true)}
				>
					<Icon
						icon={IconType::Trash2}
						size={Size::ExtraSmall}
						color={Color::Error}
					/>
				</button>
				<RepositoryFormButton
					text="Edit"
					icon={IconType::Edit3}
					namespace={repo.with_value(|repo| repo.namespace.clone())}
					repo={repo.get_value()}
					secret={secret.get_value()}
					on_change={on_change}
				/>
				<button class="btn-icon" type="button" on:click={handle_resync}>
					<Icon
						icon={IconType::RefreshCw}
						size={Size::ExtraSmall}
						color={Color::White}
					/>
				</button>
			</td>
		</tr>
	}
}
