use crate::imports::*;

/// The standard dashboard table: a heading row followed by caller-rendered
/// rows. Column widths are driven by the `flex-col-*` classes of the
/// headings and cells.
#[component]
pub fn TableDashboard(
	/// The grid width of each column, out of twelve.
	column_grids: Vec<i32>,
	/// The heading cells, one per column.
	headings: Vec<View>,
	/// The rows of the table.
	render_rows: View,
) -> impl IntoView {
	view! {
		<table class="full-width fc-fs-fs">
			<thead class="fr-fs-ct full-width px-xl py-sm">
				<tr class="fr-fs-ct full-width">
					{headings
						.into_iter()
						.zip(column_grids)
						.map(|(heading, width)| {
							view! {
								<th class={format!("flex-col-{} fr-ct-ct", width)}>{heading}</th>
							}
						})
						.collect_view()}
				</tr>
			</thead>
			<tbody class="fc-fs-fs full-width">{render_rows}</tbody>
		</table>
	}
}
