use serde::Deserialize;

use crate::errors::ProviderError;

/// The wire envelope every Korastats endpoint answers with.
///
/// `result` is `"Success"` on the happy path; anything else (or an absent
/// `data` field) is a hard failure of that sub-fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub result: String,
    #[serde(default)]
    pub message: String,
    // Path form keeps serde from inferring a `T: Default` bound.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the payload, turning a non-success result or missing `data`
    /// into a [`ProviderError::Api`] carrying the endpoint name.
    pub fn into_data(self, endpoint: &str) -> Result<T, ProviderError> {
        if self.result != "Success" {
            return Err(ProviderError::Api {
                endpoint: endpoint.to_string(),
                message: if self.message.is_empty() {
                    format!("result = {:?}", self.result)
                } else {
                    self.message
                },
            });
        }
        self.data.ok_or_else(|| ProviderError::Api {
            endpoint: endpoint.to_string(),
            message: "success envelope with empty data".to_string(),
        })
    }
}
