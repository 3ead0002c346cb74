use crate::imports::*;

/// An inline notification line, colored by severity.
#[component]
pub fn Alert(
	/// The severity of the alert
	#[prop(into, optional)]
	r#type: MaybeSignal<NotificationType>,
	/// The message to display
	#[prop(into)]
	message: MaybeSignal<String>,
	/// Additional class names to apply to the alert, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
) -> impl IntoView {
	let class = move || {
		format!(
			"alert fr-fs-ct txt-{} {}",
			r#type.get().as_color().as_css_name(),
			class.get(),
		)
	};

	view! {
		<p class={class}>
			<Icon
				icon={IconType::AlertCircle}
				size={Size::ExtraSmall}
				color={Signal::derive(move || r#type.get().as_color())}
				class="mr-xs"
			/>
			{message}
		</p>
	}
}
