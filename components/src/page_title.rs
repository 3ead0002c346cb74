use crate::imports::*;

/// Where the separator icon sits relative to a [`PageTitle`], when the title
/// is part of a breadcrumb-style trail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageTitleIconPosition {
	/// No separator icon. This is the default.
	#[default]
	None,
	/// The separator comes after the title.
	End,
	/// The separator comes before the title.
	Start,
}

/// The weight of a [`PageTitle`] within its container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageTitleVariant {
	/// The main heading. This is the default.
	#[default]
	Heading,
	/// A sub heading following the main one.
	SubHeading,
	/// Plain text, e.g. the name of the resource being viewed.
	Text,
}

#[component]
pub fn PageTitleContainer(
	/// The titles of the page
	children: Children,
) -> impl IntoView {
	view! { <div class="fr-fs-ct">{children()}</div> }
}

#[component]
pub fn PageTitle(
	/// The title text
	children: Children,
	/// The weight of the title
	#[prop(optional)]
	variant: PageTitleVariant,
	/// Whether to render a separator icon around the title
	#[prop(optional)]
	icon_position: PageTitleIconPosition,
) -> impl IntoView {
	let class = match variant {
		PageTitleVariant::Heading => "txt-xl txt-medium txt-white",
		PageTitleVariant::SubHeading => "txt-lg txt-white",
		PageTitleVariant::Text => "txt-md txt-grey",
	};

	let separator = move || {
		view! {
			<Icon
				icon={IconType::ChevronDown}
				size={Size::ExtraSmall}
				color={Color::Grey}
				class="mx-xs separator"
			/>
		}
	};

	view! {
		<span class={format!("fr-fs-ct {}", class)}>
			{(icon_position == PageTitleIconPosition::Start).then(separator)}
			{children()}
			{(icon_position == PageTitleIconPosition::End).then(separator)}
		</span>
	}
}

#[component]
pub fn PageDescription(
	/// The description text
	#[prop(into)]
	description: String,
	/// An optional link to the relevant documentation
	#[prop(into, optional)]
	doc_link: Option<String>,
) -> impl IntoView {
	view! {
		<p class="txt-sm txt-grey mt-xxs">
			{description}
			{doc_link.map(|link| {
				view! {
					<a href={link} target="_blank" rel="noopener noreferrer" class="txt-primary ml-xxs">
						"Documentation"
					</a>
				}
			})}
		</p>
	}
}
