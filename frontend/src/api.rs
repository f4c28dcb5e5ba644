//! Submission transport for the payment request form.
//!
//! One POST per call, no retries and no deduplication; the form component
//! keeps at most one request in flight by ignoring submits while waiting.
//! Status and body interpretation lives in `common::requests` so the
//! protocol rules stay out of the browser glue.

use common::requests::{parse_create_response, CreatePaymentRequest, SubmitError};
use gloo_net::http::Request;

/// Relative endpoint that issues shareable payment links.
const CREATE_PATH: &str = "/create";

/// Performs the creation round trip and extracts the shareable URI.
pub async fn create_payment_request(payload: &CreatePaymentRequest) -> Result<String, SubmitError> {
    let response = Request::post(CREATE_PATH)
        .header("Accept", "application/json")
        .json(payload)
        .map_err(|err| SubmitError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| SubmitError::Network(err.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| SubmitError::Network(err.to_string()))?;
    parse_create_response(status, &body)
}
