//! Module containing the main DDEX API client.

use crate::{
    authenticator::Authenticator,
    common::{DEFAULT_BASE_URL, HYDRO_AUTHENTICATION_HEADER},
    error::Error,
    middlewares::{
        error_handling::ErrorHandlingMiddleware, inject_user_agent::InjectUserAgentMiddleware,
    },
    response::ResponseEnvelope,
    signer::Signer,
};
use reqwest::{header::HeaderValue, Url};
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use reqwest_tracing::TracingMiddleware;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};

/// Client for the DDEX REST API.
///
/// Every call is a single request: there are no retries, and failures are returned as they
/// happen. Cloning is cheap and clones share the same configuration.
#[derive(Clone, Debug)]
pub struct DdexClient {
    inner: Arc<DdexClientInner>,
}

struct DdexClientInner {
    client: ClientWithMiddleware,
    authenticator: Authenticator,
    base_url: Url,
}

impl Debug for DdexClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DdexClientInner")
            .field("authenticator", &self.authenticator)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DdexClient {
    /// Builds a new [`DdexClient`](crate::client::DdexClient) with the default configuration.
    pub fn new(signer: impl Signer + 'static) -> DdexClient {
        DdexClientBuilder::new(signer).build()
    }

    /// Returns a new builder to configure a new [`DdexClient`](crate::client::DdexClient).
    pub fn builder(signer: impl Signer + 'static) -> DdexClientBuilder {
        DdexClientBuilder::new(signer)
    }

    /// Base URL every request path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Account placed in the `Hydro-Authentication` header, if configured.
    pub fn account(&self) -> Option<&str> {
        self.inner.authenticator.account()
    }

    /// Joins `path` onto the base URL.
    ///
    /// Exactly one `/` separates the two, whether or not the base URL ends with a slash
    /// or the path starts with one.
    pub fn url(&self, path: &str) -> Result<Url, Error> {
        join_url(&self.inner.base_url, path)
    }

    /// Sends a `GET` request with `params` as the query string.
    ///
    /// The `Hydro-Authentication` header is only attached when `sign` is `true`.
    #[tracing::instrument(name = "DDEX GET", skip(self, params))]
    pub async fn get<T, Q>(&self, path: &str, params: &Q, sign: bool) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.inner.client.get(self.url(path)?).query(params);
        self.send(request, sign).await
    }

    /// Sends a signed `POST` request with `data` as its JSON body.
    #[tracing::instrument(name = "DDEX POST", skip(self, data))]
    pub async fn post<T, B>(&self, path: &str, data: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.inner.client.post(self.url(path)?).json(data);
        self.send(request, true).await
    }

    /// Sends a signed `DELETE` request.
    #[tracing::instrument(name = "DDEX DELETE", skip(self))]
    pub async fn delete<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let request = self.inner.client.delete(self.url(path)?);
        self.send(request, true).await
    }

    async fn send<T>(&self, mut request: RequestBuilder, sign: bool) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        if sign {
            let auth = self.inner.authenticator.authenticate().await?;
            request = request.header(HYDRO_AUTHENTICATION_HEADER, auth.to_header_value()?);
        }

        // Non-200 responses have already been turned into errors by the middleware
        let bytes = request.send().await?.bytes().await?;

        ResponseEnvelope::from_slice(&bytes)?.into_data()
    }
}

/// Builder for a [`DdexClient`](crate::client::DdexClient).
pub struct DdexClientBuilder {
    client: reqwest::Client,
    signer: Arc<dyn Signer>,
    account: Option<String>,
    base_url: Url,
    user_agent: Option<HeaderValue>,
}

impl Debug for DdexClientBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DdexClientBuilder")
            .field("account", &self.account)
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl DdexClientBuilder {
    /// Creates a new builder to configure a [`DdexClient`](crate::client::DdexClient).
    pub fn new(signer: impl Signer + 'static) -> Self {
        Self {
            client: reqwest::Client::new(),
            signer: Arc::new(signer),
            account: None,
            base_url: Url::parse(DEFAULT_BASE_URL).expect("Default base URL is valid"),
            user_agent: None,
        }
    }

    /// Consumes the builder and builds a new [`DdexClient`](crate::client::DdexClient).
    pub fn build(self) -> DdexClient {
        let client = reqwest_middleware::ClientBuilder::new(self.client)
            .with(TracingMiddleware::default())
            .with(InjectUserAgentMiddleware::new(self.user_agent.as_ref()))
            .with(ErrorHandlingMiddleware)
            .build();

        DdexClient {
            inner: Arc::new(DdexClientInner {
                client,
                authenticator: Authenticator::new(self.account, self.signer),
                base_url: self.base_url,
            }),
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    ///
    /// Timeouts and connection settings configured on it apply to every request.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the account placed in the `Hydro-Authentication` header.
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Sets the base URL for all requests.
    ///
    /// Defaults to: `https://api.ddex.io/v2/`
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Identifies your application in the `User-Agent` header.
    ///
    /// The value is prepended to this crate's own token, e.g. `market-maker/2.1 ddex-rust/0.1.0`.
    pub fn with_user_agent(mut self, user_agent: HeaderValue) -> Self {
        self.user_agent = Some(user_agent);
        self
    }
}

fn join_url(base_url: &Url, path: &str) -> Result<Url, Error> {
    if base_url.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
    }

    // A query string in `path` is merged with the one on the base URL, if any
    let (path, query) = match path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path, None),
    };

    let mut url = base_url.clone();
    url.set_fragment(None);
    url.set_path(&format!(
        "{}/{}",
        base_url.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    ));

    match (base_url.query(), query) {
        (Some(base_query), Some(query)) => {
            url.set_query(Some(&format!("{}&{}", base_query, query)))
        }
        (None, Some(query)) => url.set_query(Some(query)),
        _ => {}
    }

    Ok(url)
}
