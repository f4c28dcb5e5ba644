//! Wire types for the payment request creation endpoint, plus the pure
//! half of the submission protocol: building the outgoing payload and
//! interpreting the HTTP response.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::amount::minor_units_or_zero;
use crate::model::form::{FormInput, RequestDefaults};

/// Request payload for the creation endpoint. `amount` is in integer minor
/// units; the serialized ack memo key is `ackMemo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub address: String,
    pub amount: i64,
    pub memo: String,
    #[serde(rename = "ackMemo")]
    pub ack_memo: String,
}

impl CreatePaymentRequest {
    /// Builds the wire payload from form input.
    ///
    /// Each field defaults independently: a blank memo does not affect how
    /// the address or ack memo are filled. Blankness is an explicit
    /// trimmed-empty check, never truthiness, so intentional text survives.
    /// The address fallback is a defensive sentinel; `validate` rejects
    /// blank addresses before construction runs.
    pub fn from_form(input: &FormInput, defaults: &RequestDefaults) -> Self {
        Self {
            address: text_or_default(&input.address, &defaults.fallback_address),
            amount: minor_units_or_zero(&input.amount),
            memo: text_or_default(&input.memo, &defaults.memo),
            ack_memo: text_or_default(&input.ack_memo, &defaults.ack_memo),
        }
    }
}

fn text_or_default(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Success response of the creation endpoint. The server may send more
/// fields; only `uri` is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentResponse {
    /// Shareable payment link issued by the server.
    pub uri: String,
}

/// Why a submission failed. `Network` covers failures before a status line
/// was read; `Server` keeps the status and body for diagnostics. No variant
/// triggers an automatic retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned status {status}")]
    Server { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Interprets the creation endpoint's HTTP response.
///
/// A 2xx status whose JSON body carries a non-empty `uri` is a success. A
/// 2xx body without one is malformed and handled like any other transport
/// failure. Non-2xx statuses fail with the body preserved for logging.
pub fn parse_create_response(status: u16, body: &str) -> Result<String, SubmitError> {
    if !(200..300).contains(&status) {
        return Err(SubmitError::Server {
            status,
            body: body.to_string(),
        });
    }
    let response: CreatePaymentResponse =
        serde_json::from_str(body).map_err(|err| SubmitError::MalformedResponse(err.to_string()))?;
    if response.uri.is_empty() {
        return Err(SubmitError::MalformedResponse("empty uri".to_string()));
    }
    Ok(response.uri)
}
