mod chart_repository;
mod create_repository;
mod delete_repository;
mod list_repositories;
mod resync_all_repositories;
mod resync_repository;
mod update_repository;
mod validate_repository;

pub use self::{
	chart_repository::*,
	create_repository::*,
	delete_repository::*,
	list_repositories::*,
	resync_all_repositories::*,
	resync_repository::*,
	update_repository::*,
	validate_repository::*,
};
