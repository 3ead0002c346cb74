use crate::imports::*;

/// A hover hint. The trigger (usually an [`Icon`]) is the child; the content
/// appears next to it on hover, positioned by CSS.
#[component]
pub fn Tooltip(
	/// The content of the tooltip
	children: ChildrenFn,
	/// The trigger the tooltip is attached to
	#[prop(into, optional, default = IconType::HelpCircle.into())]
	icon: MaybeSignal<IconType>,
	/// Additional class names to apply to the tooltip, if any
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// The Color Variant of the tooltip body
	#[prop(into, optional)]
	variant: MaybeSignal<SecondaryColorVariant>,
) -> impl IntoView {
	let is_visible = create_rw_signal(false);

	let body_class = move || {
		format!(
			"tooltip-body row-card bg-secondary-{} {}",
			variant.get().as_css_name(),
			if is_visible.get() { "tooltip-visible" } else { "" },
		)
	};

	view! {
		<span
			class={move || format!("tooltip fr-ct-ct {}", class.get())}
			on:mouseenter={move |_| is_visible.set(true)}
			on:mouseleave={move |_| is_visible.set(false)}
		>
			<Icon icon={icon} size={Size::ExtraSmall} color={Color::Grey} />
			<span class={body_class}>{children()}</span>
		</span>
	}
}
