//! Shared API contract types for the chart repository console.
//!
//! Everything the frontend sends to, or receives from, the backend API is
//! described here: the request and response body of every endpoint, the JSON
//! response envelope, and the error enumeration. The crate is pure data and
//! compiles for both the wasm frontend and native test runners.

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use crate::{
		api::{repository::*, secret::*},
		error::ErrorType,
		response::*,
		utils::*,
	};
}

/// The request and response types of every API endpoint, one module per
/// resource.
pub mod api;
/// The error enumeration shared between all endpoints.
pub mod error;
/// The JSON envelope every API response is wrapped in.
pub mod response;
/// Utility types used across the API contract.
pub mod utils;

pub use self::error::ErrorType;
