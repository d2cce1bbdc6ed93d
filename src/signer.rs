//! The signing capability used to authenticate requests.

use async_trait::async_trait;
use std::sync::Arc;

/// Produces a signature for an authentication message.
///
/// The client calls [`sign`](Signer::sign) once for every authenticated request and never
/// caches the result. Synchronous signers simply return without awaiting anything.
///
/// Errors are handed back to the caller untouched, wrapped in
/// [`Error::SigningError`](crate::Error::SigningError).
#[async_trait]
pub trait Signer: Send + Sync {
    /// Signs `message`, e.g. `HYDRO-AUTHENTICATION@1546300800000`.
    async fn sign(&self, message: &str) -> anyhow::Result<String>;
}

#[async_trait]
impl<S: Signer + ?Sized> Signer for Arc<S> {
    async fn sign(&self, message: &str) -> anyhow::Result<String> {
        (**self).sign(message).await
    }
}

#[async_trait]
impl<S: Signer + ?Sized> Signer for Box<S> {
    async fn sign(&self, message: &str) -> anyhow::Result<String> {
        (**self).sign(message).await
    }
}
