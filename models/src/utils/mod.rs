/// A wrapper around binary data that serializes as base64.
mod base64string;
/// Marker types for constant `true` and `false` JSON booleans.
mod bools;

pub use self::{base64string::*, bools::*};

/// The sentinel namespace name used when a request should span every
/// namespace the caller can see, rather than a single one.
pub const ALL_NAMESPACES: &str = "_all";
