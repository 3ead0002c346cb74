use std::rc::Rc;

use crate::imports::*;

/// The kind of icon to display. This is taken directly from the Feather icon
/// set; only the icons the console actually uses are listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconType {
	/// <https://feathericons.com/?query=alert-circle>
	AlertCircle,
	/// <https://feathericons.com/?query=chevron-down>
	ChevronDown,
	/// <https://feathericons.com/?query=chevron-up>
	ChevronUp,
	/// <https://feathericons.com/?query=edit-3>
	Edit3,
	/// <https://feathericons.com/?query=help-circle>
	HelpCircle,
	/// <https://feathericons.com/?query=plus>
	Plus,
	/// <https://feathericons.com/?query=refresh-cw>
	RefreshCw,
	/// <https://feathericons.com/?query=trash-2>
	Trash2,
	/// <https://feathericons.com/?query=x>
	X,
}

impl IconType {
	/// Returns the name of the icon in the sprite sheet.
	pub const fn as_sprite_name(self) -> &'static str {
		match self {
			Self::AlertCircle => "alert-circle",
			Self::ChevronDown => "chevron-down",
			Self::ChevronUp => "chevron-up",
			Self::Edit3 => "edit-3",
			Self::HelpCircle => "help-circle",
			Self::Plus => "plus",
			Self::RefreshCw => "refresh-cw",
			Self::Trash2 => "trash-2",
			Self::X => "x",
		}
	}
}

#[component]
pub fn Icon(
	/// The icon to display.
	#[prop(into)]
	icon: MaybeSignal<IconType>,
	/// The size of the icon.
	#[prop(into, optional)]
	size: MaybeSignal<Size>,
	/// The color of the icon stroke.
	#[prop(into, optional)]
	color: MaybeSignal<Color>,
	/// Additional class names to apply to the icon, if any.
	#[prop(into, optional)]
	class: MaybeSignal<String>,
	/// Click handler, if the icon is interactive.
	#[prop(optional)]
	on_click: Option<Rc<dyn Fn(&ev::MouseEvent)>>,
) -> impl IntoView {
	let class = move || {
		format!(
			"icon icon-{} txt-{} {}",
			size.get().as_css_name(),
			color.get().as_css_name(),
			class.get(),
		)
	};
	let href = move || format!("{}#{}", consts::FEATHER_IMG, icon.get().as_sprite_name());

	view! {
		<svg
			class={class}
			on:click={move |e| {
				if let Some(click) = on_click.as_ref() {
					click(&e);
				}
			}}
		>
			<use_ href={href} />
		</svg>
	}
}
