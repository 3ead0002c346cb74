use std::rc::Rc;

use super::resync_targets;
use crate::prelude::*;

/// A button that schedules a resync of every repository currently known to
/// the dashboard. Does nothing when there are none.
#[component]
pub fn RefreshAllButton(
	/// The repositories currently listed.
	#[prop(into)]
	repositories: Signal<Vec<ChartRepository>>,
) -> impl IntoView {
	let handle_resync_all = move |_: &ev::MouseEvent| {
		let targets = resync_targets(&repositories.get_untracked());
		if targets.is_empty() {
			return;
		}
		spawn_local(async move {
			if let Err(error) = resync_all_repositories(targets).await {
				log::error!("failed to resync repositories: {}", error.body.message);
			}
		});
	};

	view! {
		<Link
			r#type={Variant::Button}
			style_variant={LinkStyleVariant::Outlined}
			on_click={Rc::new(handle_resync_all)}
			class="refresh-all-button"
		>
			<Icon icon={IconType::RefreshCw} size={Size::ExtraSmall} class="mr-xs" />
			"Refresh All"
		</Link>
	}
}
