mod create_docker_secret;
mod list_pull_secrets;
mod registry_secret;

pub use self::{create_docker_secret::*, list_pull_secrets::*, registry_secret::*};
