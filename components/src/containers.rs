use crate::imports::*;

/// The outer container of a page.
#[component]
pub fn ContainerMain(
	/// Additional class names to apply to the container, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The content of the page
	children: Children,
) -> impl IntoView {
	view! {
		<section class={move || format!("container-main fc-fs-fs full-width full-height {}", class.get())}>
			{children()}
		</section>
	}
}

/// The header strip of a page, holding titles and action buttons.
#[component]
pub fn ContainerHead(
	/// Additional class names to apply to the container, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The content of the header
	children: Children,
) -> impl IntoView {
	view! {
		<header class={move || format!("container-head px-xl py-md full-width {}", class.get())}>
			{children()}
		</header>
	}
}

/// The scrolling body of a page.
#[component]
pub fn ContainerBody(
	/// Additional class names to apply to the container, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The content of the body
	children: Children,
) -> impl IntoView {
	view! {
		<div class={move || format!("container-body fc-fs-fs full-width of-auto {}", class.get())}>
			{children()}
		</div>
	}
}
