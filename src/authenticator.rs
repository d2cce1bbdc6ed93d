use crate::{
    common::{FIELD_DELIMITER, HYDRO_AUTHENTICATION_MESSAGE, MESSAGE_DELIMITER, MISSING_ACCOUNT},
    error::Error,
    signer::Signer,
};
use chrono::{DateTime, TimeZone, Utc};
use reqwest::header::HeaderValue;
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
    sync::Arc,
};

/// Builds the `Hydro-Authentication` header for outgoing requests.
#[derive(Clone)]
pub(crate) struct Authenticator {
    account: Option<String>,
    signer: Arc<dyn Signer>,
}

impl Authenticator {
    pub(crate) fn new(account: Option<String>, signer: Arc<dyn Signer>) -> Self {
        Self { account, signer }
    }

    pub(crate) fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// Signs a fresh authentication message stamped with the current time.
    pub(crate) async fn authenticate(&self) -> Result<HydroAuthentication, Error> {
        self.authenticate_at(Utc::now()).await
    }

    #[tracing::instrument(name = "Sign Authentication Message", level = "debug", skip(self))]
    async fn authenticate_at(&self, now: DateTime<Utc>) -> Result<HydroAuthentication, Error> {
        let message = format!(
            "{}{}{}",
            HYDRO_AUTHENTICATION_MESSAGE,
            MESSAGE_DELIMITER,
            now.timestamp_millis()
        );

        let signature = self
            .signer
            .sign(&message)
            .await
            .map_err(Error::SigningError)?;

        Ok(HydroAuthentication {
            account: self.account.clone(),
            message,
            signature,
        })
    }
}

impl Debug for Authenticator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("account", &self.account)
            .finish_non_exhaustive()
    }
}

/// Value of the `Hydro-Authentication` header.
///
/// On the wire it is three `#`-separated fields: the account, the signed message and the
/// signature, e.g. `0xabc#HYDRO-AUTHENTICATION@1546300800000#0xsignature`.
/// A missing account is written as `undefined` so the field count never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HydroAuthentication {
    account: Option<String>,
    message: String,
    signature: String,
}

impl HydroAuthentication {
    /// Account the request was signed for, if any.
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// The signed message, `HYDRO-AUTHENTICATION@<epoch millis>`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Signature produced by the [`Signer`](crate::signer::Signer) over [`message`](Self::message).
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Time embedded in the signed message.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let millis = parse_message_timestamp(&self.message)?;
        Utc.timestamp_millis_opt(millis).single()
    }

    pub(crate) fn to_header_value(&self) -> Result<HeaderValue, Error> {
        let mut header_value = HeaderValue::from_str(&self.to_string())?;
        header_value.set_sensitive(true);
        Ok(header_value)
    }
}

impl Display for HydroAuthentication {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.account.as_deref().unwrap_or(MISSING_ACCOUNT),
            FIELD_DELIMITER,
            self.message,
            FIELD_DELIMITER,
            self.signature
        )
    }
}

/// Error parsing a `Hydro-Authentication` header value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseHydroAuthenticationError {
    #[error("expected 3 '#'-separated fields, found {0}")]
    FieldCount(usize),
    #[error("malformed authentication message: {0}")]
    Message(String),
}

impl FromStr for HydroAuthentication {
    type Err = ParseHydroAuthenticationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(FIELD_DELIMITER).collect();
        let (account, message, signature) = match fields.as_slice() {
            [account, message, signature] => (*account, *message, *signature),
            _ => return Err(ParseHydroAuthenticationError::FieldCount(fields.len())),
        };

        if parse_message_timestamp(message).is_none() {
            return Err(ParseHydroAuthenticationError::Message(message.to_string()));
        }

        Ok(Self {
            account: (account != MISSING_ACCOUNT).then(|| account.to_string()),
            message: message.to_string(),
            signature: signature.to_string(),
        })
    }
}

fn parse_message_timestamp(message: &str) -> Option<i64> {
    let (prefix, millis) = message.split_once(MESSAGE_DELIMITER)?;
    if prefix != HYDRO_AUTHENTICATION_MESSAGE
        || millis.is_empty()
        || !millis.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    millis.parse().ok()
}
