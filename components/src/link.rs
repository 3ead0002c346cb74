use std::rc::Rc;

use crate::imports::*;

/// Link component to navigate to other pages or trigger actions. Renders as
/// an `<a>` or a `<button>` depending on the variant.
#[component]
pub fn Link(
	/// Click Handler, to be only used with the button variant.
	#[prop(optional)]
	on_click: Option<Rc<dyn Fn(&ev::MouseEvent)>>,
	/// The Children of the Link, usually the link text
	children: Children,
	/// Additional class names to apply to the link, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The target of the link, only used with the link variant
	#[prop(into, optional)]
	to: MaybeSignal<String>,
	/// Color of the link
	#[prop(into, optional)]
	color: MaybeSignal<Color>,
	/// Whether to render an anchor or a button
	#[prop(into, optional)]
	r#type: MaybeSignal<Variant>,
	/// The visual style of the link
	#[prop(into, optional)]
	style_variant: MaybeSignal<LinkStyleVariant>,
	/// Whether a button submits the surrounding form
	#[prop(into, optional, default = false.into())]
	should_submit: MaybeSignal<bool>,
	/// Whether the link is disabled
	#[prop(into, optional, default = false.into())]
	disabled: MaybeSignal<bool>,
) -> impl IntoView {
	let class = move || {
		format!(
			"fr-ct-ct {} {}",
			match style_variant.get() {
				LinkStyleVariant::Contained => format!("btn btn-{}", color.get()),
				LinkStyleVariant::Outlined => format!("btn btn-outline-{}", color.get()),
				LinkStyleVariant::Plain => format!("btn-plain txt-{}", color.get()),
			},
			class.get(),
		)
	};

	match r#type.get_untracked() {
		Variant::Link => view! {
			<a href={to} class={class}>
				{children()}
			</a>
		}
		.into_view(),
		Variant::Button => view! {
			<button
				class={class}
				disabled={disabled}
				type={move || {
					if should_submit.get() {
						"submit"
					} else {
						"button"
					}
				}}
				on:click={move |e| {
					if let Some(click) = on_click.as_ref() {
						click(&e);
					}
				}}
			>
				{children()}
			</button>
		}
		.into_view(),
	}
}
