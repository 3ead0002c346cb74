use models::prelude::*;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use super::constants;

/// Makes a request to the console API. Takes the method, the path relative
/// to the API base URL and an optional JSON body, and decodes the response
/// envelope into either the endpoint's response body or an
/// [`ApiErrorResponse`].
pub async fn make_request<TRequest, TResponse>(
	method: Method,
	path: &str,
	body: Option<&TRequest>,
) -> Result<ApiSuccessResponse<TResponse>, ApiErrorResponse>
where
	TRequest: Serialize,
	TResponse: DeserializeOwned,
{
	let url = Url::parse(constants::API_BASE_URL)
		.and_then(|base| base.join(path))
		.map_err(|error| ApiErrorResponse::internal_error(error.to_string()))?;

	let builder = reqwest::Client::new().request(method, url);
	let builder = if let Some(body) = body {
		builder.json(body)
	} else {
		builder
	};

	let response = match builder.send().await {
		Ok(response) => response,
		Err(error) => {
			log::error!("{}", error.to_string());
			return Err(ApiErrorResponse::internal_error(error.to_string()));
		}
	};

	let status_code = response.status();
	match response.json::<ApiResponseBody<TResponse>>().await {
		Ok(body) => body
			.into_result(status_code)
			.map(|body| ApiSuccessResponse { status_code, body }),
		Err(error) => {
			log::error!("{}", error.to_string());
			Err(ApiErrorResponse::internal_error(error.to_string()))
		}
	}
}
