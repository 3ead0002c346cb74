use crate::imports::*;

/// The type of an [`Input`], mapped onto the HTML `type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputType {
	/// The default value. A single-line text field.
	#[default]
	Text,
	/// A field for editing an email address.
	Email,
	/// A single-line text field whose value is obscured.
	Password,
	/// A field for editing a URL, with the relevant browser validation.
	Url,
	/// A control for entering a number.
	Number,
}

impl InputType {
	pub const fn as_html_attribute(self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Email => "email",
			Self::Password => "password",
			Self::Url => "url",
			Self::Number => "number",
		}
	}
}

#[component]
pub fn Input(
	/// Additional class names to apply to the input, if any.
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The ID of the input.
	#[prop(into, optional)]
	id: MaybeSignal<String>,
	/// Placeholder text for the input.
	#[prop(into, optional)]
	placeholder: MaybeSignal<String>,
	/// The type of input
	#[prop(into, optional, default = InputType::Text.into())]
	r#type: MaybeSignal<InputType>,
	/// Whether the input is disabled.
	#[prop(into, optional, default = false.into())]
	disabled: MaybeSignal<bool>,
	/// Whether the input must be filled before the surrounding form can be
	/// submitted.
	#[prop(into, optional, default = false.into())]
	required: MaybeSignal<bool>,
	/// A validation pattern for the value, if any.
	#[prop(into, optional)]
	pattern: MaybeProp<String>,
	/// The tooltip shown when the pattern rejects the value.
	#[prop(into, optional)]
	title: MaybeProp<String>,
	/// The current value of the input.
	#[prop(into, optional)]
	value: MaybeSignal<String>,
	/// Input event handler
	#[prop(optional, default = Box::new(|_| ()))]
	on_input: Box<dyn FnMut(ev::Event)>,
	/// The Color Variant of the input
	#[prop(into, optional)]
	variant: MaybeSignal<SecondaryColorVariant>,
) -> impl IntoView {
	let class = move || {
		format!(
			"input row-card bg-secondary-{} {}",
			variant.get().as_css_name(),
			class.get(),
		)
	};

	view! {
		<input
			class={class}
			id={id}
			type={move || r#type.get().as_html_attribute()}
			placeholder={placeholder}
			disabled={disabled}
			required={required}
			pattern={move || pattern.get()}
			title={move || title.get()}
			prop:value={value}
			on:input={on_input}
		/>
	}
}
