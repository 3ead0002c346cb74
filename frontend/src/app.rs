use std::rc::Rc;

use leptos_meta::{provide_meta_context, Stylesheet, Title};

use crate::{pages::RepositoryDashboard, prelude::*};

/// The namespace the console is currently scoped to. Pages read and update
/// this through context.
#[derive(Clone, Copy)]
pub struct CurrentNamespace(pub RwSignal<String>);

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	provide_context(ApiClient(Rc::new(HttpRepositoryApi)));
	provide_context(CurrentNamespace(create_rw_signal(
		constants::DEFAULT_NAMESPACE.to_owned(),
	)));

	view! {
		<Stylesheet id="main" href="/public/style.css" />
		<Title text="Chart Repositories" />
		<Router>
			<main class="fc-fs-ct full-width full-height bg-secondary">
				<Routes>
					<Route
						path={AppRoutes::Repositories.to_string()}
						view={RepositoryDashboard}
					/>
					<Route
						path=""
						view={|| view! { <Redirect path={AppRoutes::Repositories.to_string()} /> }}
					/>
					<Route
						path="/*any"
						view={|| view! { <p class="txt-white m-auto">"Page not found"</p> }}
					/>
				</Routes>
			</main>
		</Router>
	}
}
