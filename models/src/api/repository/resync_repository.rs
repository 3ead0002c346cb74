use serde::{Deserialize, Serialize};

/// Response body for `POST /namespaces/:namespace/repositories/:name/resync`.
/// The resync itself runs in the background; the response only acknowledges
/// that it was scheduled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResyncRepositoryResponse {}
