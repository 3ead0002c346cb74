use http::StatusCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
	utils::{False, True},
	ErrorType,
};

/// This struct represents a successful response from the API. It contains the
/// status code and the body of the response, already unwrapped from the JSON
/// envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSuccessResponse<T> {
	/// The status code of the success response. Ideally in the 2xx range.
	pub status_code: StatusCode,
	/// The body of the success response. This is the actual data that was
	/// sent by the backend.
	pub body: T,
}

/// This struct represents the JSON body of a successful response from the
/// API. This is mostly used internally and would ideally not need to be
/// constructed manually.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiSuccessResponseBody<T> {
	/// Whether the request was successful or not. This is always true.
	pub success: True,
	/// The JSON body of the response. This is flattened so that the fields of
	/// the body are at the top level.
	#[serde(flatten)]
	pub response: T,
}

/// This struct represents an error response from the API. It contains the
/// status code and the body of the response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrorResponse {
	/// The status code of the error response. Ideally in the 4xx or 5xx
	/// range.
	pub status_code: StatusCode,
	/// The body of the error response. This is a JSON object that contains
	/// the error message.
	pub body: ApiErrorResponseBody,
}

impl ApiErrorResponse {
	/// Creates a new [`ApiErrorResponse`] with the given [`ErrorType`], using
	/// the default status code.
	pub fn error(error: ErrorType) -> Self {
		Self {
			status_code: error.default_status_code(),
			body: ApiErrorResponseBody {
				success: False,
				message: error.message().into(),
				error,
			},
		}
	}

	/// Creates a new [`ApiErrorResponse`] with the given [`ErrorType`] and
	/// the given message, using the default status code.
	pub fn error_with_message(error: ErrorType, message: impl Into<String>) -> Self {
		Self {
			status_code: error.default_status_code(),
			body: ApiErrorResponseBody {
				success: False,
				error,
				message: message.into(),
			},
		}
	}

	/// Creates a new [`ApiErrorResponse`] with the given message as an
	/// internal server error.
	pub fn internal_error(message: impl Into<String>) -> Self {
		Self::error_with_message(
			ErrorType::InternalServerError(anyhow::Error::msg(message.into())),
			"An internal server error has occured",
		)
	}
}

/// This struct represents the JSON body of an error response from the API.
/// This is mostly used internally and would ideally not need to be
/// constructed manually.
///
/// Use [`ApiErrorResponse`] to create an error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponseBody {
	/// Whether the request was successful or not. This is always false.
	pub success: False,
	/// The error type of the response.
	pub error: ErrorType,
	/// A user-friendly message describing the error.
	pub message: String,
}

/// This struct represents the JSON body of a response from the API. It can be
/// either a success or an error response. This is used to parse the response
/// from the API and determine whether it was successful or not.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ApiResponseBody<T> {
	/// Success response, with the given body.
	Success(ApiSuccessResponseBody<T>),
	/// Error response
	Error(ApiErrorResponseBody),
}

impl<T> ApiResponseBody<T>
where
	T: DeserializeOwned,
{
	/// Unwraps the response body into a `Result`, mapping the error body to
	/// an [`ApiErrorResponse`] with the given status code.
	pub fn into_result(self, status_code: StatusCode) -> Result<T, ApiErrorResponse> {
		match self {
			Self::Success(ApiSuccessResponseBody {
				success: _,
				response,
			}) => Ok(response),
			Self::Error(body) => Err(ApiErrorResponse { status_code, body }),
		}
	}
}

#[cfg(test)]
mod test {
	use http::StatusCode;
	use serde_json::json;

	use super::{ApiResponseBody, ApiSuccessResponseBody};
	use crate::{api::repository::ValidateRepositoryResponse, utils::True, ErrorType};

	#[test]
	fn assert_success_body_types() {
		let body: ApiResponseBody<ValidateRepositoryResponse> =
			serde_json::from_value(json!({ "success": true })).unwrap();
		assert_eq!(
			body,
			ApiResponseBody::Success(ApiSuccessResponseBody {
				success: True,
				response: ValidateRepositoryResponse {},
			})
		);
	}

	#[test]
	fn assert_error_body_types() {
		let body: ApiResponseBody<ValidateRepositoryResponse> = serde_json::from_value(json!({
			"success": false,
			"error": "repositoryUnreachable",
			"message": "index fetch failed",
		}))
		.unwrap();
		let error = body.into_result(StatusCode::BAD_REQUEST).unwrap_err();
		assert_eq!(error.body.error, ErrorType::RepositoryUnreachable);
		assert_eq!(error.body.message, "index fetch failed");
	}
}
