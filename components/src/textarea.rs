use crate::imports::*;

/// A multi-line text input, used for certificate and template editing.
#[component]
pub fn Textarea(
	/// Additional class names to apply to the textarea, if any.
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The ID of the textarea.
	#[prop(into, optional)]
	id: MaybeSignal<String>,
	/// Placeholder text for the textarea.
	#[prop(into, optional)]
	placeholder: MaybeSignal<String>,
	/// The number of visible rows.
	#[prop(into, optional, default = 4.into())]
	rows: MaybeSignal<i32>,
	/// Whether the textarea is disabled.
	#[prop(into, optional, default = false.into())]
	disabled: MaybeSignal<bool>,
	/// The current value of the textarea.
	#[prop(into, optional)]
	value: MaybeSignal<String>,
	/// Input event handler
	#[prop(optional, default = Box::new(|_| ()))]
	on_input: Box<dyn FnMut(ev::Event)>,
	/// The Color Variant of the textarea
	#[prop(into, optional)]
	variant: MaybeSignal<SecondaryColorVariant>,
) -> impl IntoView {
	let class = move || {
		format!(
			"textarea code row-card bg-secondary-{} {}",
			variant.get().as_css_name(),
			class.get(),
		)
	};

	view! {
		<textarea
			class={class}
			id={id}
			rows={rows}
			placeholder={placeholder}
			disabled={disabled}
			prop:value={value}
			on:input={on_input}
		/>
	}
}
