use serde::Deserialize;

/// Error body the API returns alongside non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub text: String,
}

/// Token introspection answers either with the token details or, for an
/// unknown or malformed key, with an error text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TokenInfoResponse {
    Rejected(ApiErrorBody),
    Accepted(crate::models::TokenInfo),
}
