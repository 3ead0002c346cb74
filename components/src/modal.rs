use crate::imports::*;

/// A full-screen backdrop that centers its children. Visibility is handled
/// by the caller, typically with a surrounding `<Show>`.
#[component]
pub fn Modal(
	/// The Color Variant of the backdrop
	#[prop(into, optional)]
	color_variant: MaybeSignal<SecondaryColorVariant>,
	/// The content of the modal
	children: Children,
) -> impl IntoView {
	let class = move || {
		format!(
			"modal-backdrop full-width full-height fr-ct-ct bg-backdrop-{}",
			color_variant.get().as_css_name(),
		)
	};

	view! {
		<div class={class}>
			{children()}
		</div>
	}
}
