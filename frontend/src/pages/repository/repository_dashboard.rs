use crate::{app::CurrentNamespace, prelude::*};

/// The chart repository configuration page: the repository table with its
/// add, edit, delete, resync and refresh-all actions.
#[component]
pub fn RepositoryDashboard() -> impl IntoView {
	let CurrentNamespace(namespace) = expect_context::<CurrentNamespace>();

	let repo_list = create_local_resource(
		move || namespace.get(),
		|namespace| async move { list_repositories(&namespace).await },
	);

	let on_change = Callback::new(move |_| repo_list.refetch());

	let show_namespace = Signal::derive(move || namespace.get() == ALL_NAMESPACES);

	let repositories = Signal::derive(move || {
		repo_list
			.get()
			.and_then(Result::ok)
			.map(|response| response.repositories)
			.unwrap_or_default()
	});

	let rows = move || {
		view! {
			<Transition>
				{move || match repo_list.get() {
					Some(Ok(response)) => {
						let rows = response
							.repositories
							.iter()
							.map(|repo| (repo.clone(), response.secret_for(repo).cloned()))
							.collect::<Vec<_>>();
						view! {
							<For
								each={move || rows.clone()}
								key={|(repo, _)| format!("{}/{}", repo.namespace, repo.name)}
								let:child
							>
								<RepositoryItem
									repo={child.0}
									secret={child.1}
									show_namespace={show_namespace}
									on_change={on_change}
								/>
							</For>
						}
						.into_view()
					}
					Some(Err(_)) => view! {
						<tr class="fr-ct-ct full-width px-xl py-sm txt-white">
							"Error loading repositories"
						</tr>
					}
					.into_view(),
					None => view! {
						<tr class="fr-ct-ct full-width px-xl py-sm">
							<Spinner class="mx-auto my-md" />
						</tr>
					}
					.into_view(),
				}}
			</Transition>
		}
		.into_view()
	};

	view! {
		<ContainerMain class="my-md">
			<ContainerHead>
				<div class="fr-sb-ct full-width">
					<div class="fc-fs-fs">
						<PageTitleContainer>
							<PageTitle icon_position={PageTitleIconPosition::End}>
								"Configuration"
							</PageTitle>
							<PageTitle variant={PageTitleVariant::SubHeading}>
								"Chart Repositories"
							</PageTitle>
						</PageTitleContainer>
						<PageDescription
							description="Register the repositories charts can be installed from."
						/>
					</div>
					<div class="fr-fe-ct gap-md">
						<RefreshAllButton repositories={repositories} />
						<RepositoryFormButton
							text="Add Repository"
							icon={IconType::Plus}
							namespace={namespace}
							on_change={on_change}
						/>
					</div>
				</div>
			</ContainerHead>

			<ContainerBody class="px-xl py-md gap-md">
				{move || {
					let (column_grids, headings) = if show_namespace.get() {
						(
							vec![3, 2, 4, 3],
							vec![
								view! { <p class="txt-sm txt-medium">"Name"</p> }.into_view(),
								view! { <p class="txt-sm txt-medium">"Namespace"</p> }.into_view(),
								view! { <p class="txt-sm txt-medium">"URL"</p> }.into_view(),
								"".into_view(),
							],
						)
					} else {
						(
							vec![3, 6, 3],
							vec![
								view! { <p class="txt-sm txt-medium">"Name"</p> }.into_view(),
								view! { <p class="txt-sm txt-medium">"URL"</p> }.into_view(),
								"".into_view(),
							],
						)
					};
					view! {
						<TableDashboard
							column_grids={column_grids}
							headings={headings}
							render_rows={rows()}
						/>
					}
				}}
			</ContainerBody>
		</ContainerMain>
	}
}
