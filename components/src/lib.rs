//! Generic UI building blocks for the console. Nothing in this crate knows
//! about repositories or secrets; pages compose these into screens.

pub mod prelude {
	pub use crate::{
		alert::*,
		containers::*,
		icon::*,
		input::*,
		link::*,
		modal::*,
		page_title::*,
		spinner::*,
		table_dashboard::*,
		textarea::*,
		tooltip::*,
		utils::*,
	};
}

mod imports {
	pub use leptos::*;

	pub use crate::prelude::*;
}

pub mod alert;
pub mod containers;
pub mod icon;
pub mod input;
pub mod link;
pub mod modal;
pub mod page_title;
pub mod spinner;
pub mod table_dashboard;
pub mod textarea;
pub mod tooltip;

pub mod utils;
