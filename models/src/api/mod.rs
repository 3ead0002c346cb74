/// The endpoints that manage chart repository registrations.
pub mod repository;
/// The endpoints that manage registry pull secrets.
pub mod secret;
