//! Envelope wrapping every response body returned by the DDEX API.

use crate::error::{ApiError, Error};
use serde::{de::DeserializeOwned, Deserialize};

/// Body of a DDEX API response.
///
/// A `status` of `0` means success and `data` carries the payload.
/// Any other status is an API-level rejection described by `desc`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    pub status: i64,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ResponseEnvelope {
    /// Parses a raw response body.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Returns the payload, or an [`ApiError`] if the API reported a failure.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, Error> {
        if self.status != 0 {
            tracing::debug!(
                "API rejected request. Status: {}, description: {:?}",
                self.status,
                self.desc
            );

            return Err(ApiError {
                status: self.status,
                desc: self.desc,
            }
            .into());
        }

        Ok(serde_json::from_value(self.data)?)
    }
}
