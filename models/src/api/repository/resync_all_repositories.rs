use serde::{Deserialize, Serialize};

/// One repository named in a bulk resync request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryTarget {
	/// The name of the repository.
	pub name: String,
	/// The namespace the repository is registered in.
	pub namespace: String,
}

/// Request body for `POST /repositories/resync`. Schedules a resync of every
/// named repository, in the order given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResyncAllRepositoriesRequest {
	/// The repositories to resync.
	pub repositories: Vec<RepositoryTarget>,
}

/// Response body for a scheduled bulk resync.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResyncAllRepositoriesResponse {}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::{RepositoryTarget, ResyncAllRepositoriesRequest};

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&ResyncAllRepositoriesRequest {
				repositories: vec![RepositoryTarget {
					name: "stable".to_owned(),
					namespace: "team-a".to_owned(),
				}],
			},
			&[
				Token::Struct {
					name: "ResyncAllRepositoriesRequest",
					len: 1,
				},
				Token::Str("repositories"),
				Token::Seq { len: Some(1) },
				Token::Struct {
					name: "RepositoryTarget",
					len: 2,
				},
				Token::Str("name"),
				Token::Str("stable"),
				Token::Str("namespace"),
				Token::Str("team-a"),
				Token::StructEnd,
				Token::SeqEnd,
				Token::StructEnd,
			],
		);
	}
}
