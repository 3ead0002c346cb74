use std::{
	error::Error as StdError,
	fmt::{Display, Formatter},
	mem,
};

use http::StatusCode;
use serde::{de::Error, Deserialize, Serialize};

/// A list of all the possible errors that can be returned by the API
#[derive(Debug)]
pub enum ErrorType {
	/// The repository that was requested does not exist
	RepositoryNotFound,
	/// A repository with the given name is already registered in the
	/// namespace
	RepositoryAlreadyExists,
	/// The repository index could not be fetched with the given URL and
	/// credentials
	RepositoryUnreachable,
	/// The URL provided for the repository is not a valid URL
	InvalidRepositoryUrl,
	/// The secret that was requested does not exist
	SecretNotFound,
	/// A secret with the given name already exists in the namespace
	SecretAlreadyExists,
	/// The parameters sent with the request is invalid. This would ideally
	/// not happen unless there is a bug in the client
	WrongParameters,
	/// The caller is not authorized to perform the requested action
	Unauthorized,
	/// An internal server error occurred. This should not happen unless there
	/// is a bug in the server
	InternalServerError(anyhow::Error),
}

impl ErrorType {
	/// Returns the status code that should be used for this error. Note that
	/// this is only the default status code and specific endpoints can
	/// override this if needed
	pub fn default_status_code(&self) -> StatusCode {
		match self {
			Self::RepositoryNotFound => StatusCode::NOT_FOUND,
			Self::RepositoryAlreadyExists => StatusCode::CONFLICT,
			Self::RepositoryUnreachable => StatusCode::BAD_REQUEST,
			Self::InvalidRepositoryUrl => StatusCode::BAD_REQUEST,
			Self::SecretNotFound => StatusCode::NOT_FOUND,
			Self::SecretAlreadyExists => StatusCode::CONFLICT,
			Self::WrongParameters => StatusCode::BAD_REQUEST,
			Self::Unauthorized => StatusCode::UNAUTHORIZED,
			Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Returns the message that should be used for this error. This is the
	/// message that is user-friendly and can be shown to the user
	pub fn message(&self) -> impl Into<String> {
		match self {
			Self::RepositoryNotFound => "The repository you are trying to access does not exist",
			Self::RepositoryAlreadyExists => {
				"A repository with that name is already registered in this namespace"
			}
			Self::RepositoryUnreachable => {
				"The repository index could not be fetched with the given URL and credentials"
			}
			Self::InvalidRepositoryUrl => "The URL provided is not a valid repository URL",
			Self::SecretNotFound => "The secret you are trying to access does not exist",
			Self::SecretAlreadyExists => "A secret with that name already exists in this namespace",
			Self::WrongParameters => "The parameters sent with that request is invalid",
			Self::Unauthorized => "You are not authorized to perform that action",
			Self::InternalServerError(_) => "An internal server error has occured",
		}
	}

	/// Creates an [`ErrorType::InternalServerError`] with the given message
	pub fn server_error(message: impl Display) -> Self {
		Self::InternalServerError(anyhow::anyhow!(message.to_string()))
	}
}

impl PartialEq for ErrorType {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::InternalServerError(_), Self::InternalServerError(_)) => true,
			_ => mem::discriminant(self) == mem::discriminant(other),
		}
	}
}

impl Eq for ErrorType {}

impl<Error> From<Error> for ErrorType
where
	Error: StdError + Send + Sync + 'static,
{
	fn from(error: Error) -> Self {
		Self::InternalServerError(error.into())
	}
}

impl Clone for ErrorType {
	fn clone(&self) -> Self {
		match self {
			Self::RepositoryNotFound => Self::RepositoryNotFound,
			Self::RepositoryAlreadyExists => Self::RepositoryAlreadyExists,
			Self::RepositoryUnreachable => Self::RepositoryUnreachable,
			Self::InvalidRepositoryUrl => Self::InvalidRepositoryUrl,
			Self::SecretNotFound => Self::SecretNotFound,
			Self::SecretAlreadyExists => Self::SecretAlreadyExists,
			Self::WrongParameters => Self::WrongParameters,
			Self::Unauthorized => Self::Unauthorized,
			Self::InternalServerError(arg0) => {
				Self::InternalServerError(anyhow::anyhow!(arg0.to_string()))
			}
		}
	}
}

impl Display for ErrorType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.message().into())
	}
}

impl Serialize for ErrorType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self {
			Self::RepositoryNotFound => serializer.serialize_str("repositoryNotFound"),
			Self::RepositoryAlreadyExists => serializer.serialize_str("repositoryAlreadyExists"),
			Self::RepositoryUnreachable => serializer.serialize_str("repositoryUnreachable"),
			Self::InvalidRepositoryUrl => serializer.serialize_str("invalidRepositoryUrl"),
			Self::SecretNotFound => serializer.serialize_str("secretNotFound"),
			Self::SecretAlreadyExists => serializer.serialize_str("secretAlreadyExists"),
			Self::WrongParameters => serializer.serialize_str("wrongParameters"),
			Self::Unauthorized => serializer.serialize_str("unauthorized"),
			Self::InternalServerError(_) => serializer.serialize_str("internalServerError"),
		}
	}
}

impl<'de> Deserialize<'de> for ErrorType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let string = String::deserialize(deserializer)?;
		Ok(match string.as_str() {
			"repositoryNotFound" => Self::RepositoryNotFound,
			"repositoryAlreadyExists" => Self::RepositoryAlreadyExists,
			"repositoryUnreachable" => Self::RepositoryUnreachable,
			"invalidRepositoryUrl" => Self::InvalidRepositoryUrl,
			"secretNotFound" => Self::SecretNotFound,
			"secretAlreadyExists" => Self::SecretAlreadyExists,
			"wrongParameters" => Self::WrongParameters,
			"unauthorized" => Self::Unauthorized,
			"internalServerError" => {
				Self::InternalServerError(anyhow::anyhow!("Internal Server Error"))
			}
			unknown => return Err(Error::custom(format!("unknown variant: {unknown}"))),
		})
	}
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::ErrorType;

	#[test]
	fn assert_error_types() {
		assert_tokens(&ErrorType::RepositoryNotFound, &[Token::Str("repositoryNotFound")]);
		assert_tokens(&ErrorType::RepositoryUnreachable, &[Token::Str("repositoryUnreachable")]);
		assert_tokens(&ErrorType::Unauthorized, &[Token::Str("unauthorized")]);
	}
}
