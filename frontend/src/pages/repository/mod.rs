mod add_registry_creds;
mod form_model;
mod refresh_all;
mod repository_dashboard;
mod repository_form;
mod repository_form_button;
mod repository_item;

pub use self::{
	add_registry_creds::*,
	form_model::*,
	refresh_all::*,
	repository_dashboard::*,
	repository_form::*,
	repository_form_button::*,
	repository_item::*,
};
