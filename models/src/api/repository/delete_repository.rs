use serde::{Deserialize, Serialize};

/// Response body for `DELETE /namespaces/:namespace/repositories/:name`. The
/// repository and its auth secret are removed together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRepositoryResponse {}
