//! Rust client for the [DDEX](https://ddex.io) REST API.
//!
//! The client joins request paths onto a base URL, signs requests with the
//! `Hydro-Authentication` header, and unwraps the `{ status, desc, data }` envelope every
//! response is wrapped in.
//!
//! # Usage
//!
//! ## Provide a signer
//!
//! Authenticated requests carry a message of the form `HYDRO-AUTHENTICATION@<epoch millis>`
//! signed with the key of your account. The signing itself is up to you: implement
//! [`Signer`](crate::signer::Signer) on top of your wallet or key store.
//!
//! ```rust
//! use async_trait::async_trait;
//! use ddex_rust::Signer;
//!
//! struct WalletSigner;
//!
//! #[async_trait]
//! impl Signer for WalletSigner {
//!     async fn sign(&self, message: &str) -> anyhow::Result<String> {
//!         // Sign `message` with the account's private key here
//!         Ok(format!("0xsignature-of-{}", message))
//!     }
//! }
//! ```
//!
//! ## Initialize a new `DdexClient`
//!
//! ```rust,no_run
//! # use ddex_rust::{DdexClient, Signer};
//! # struct WalletSigner;
//! # #[async_trait::async_trait]
//! # impl Signer for WalletSigner {
//! #     async fn sign(&self, _: &str) -> anyhow::Result<String> { unreachable!() }
//! # }
//! let ddex = DdexClient::builder(WalletSigner)
//!     .with_account("0x31ebd457b999bf99759602f5ece5aa5033cb56b3")
//!     .build();
//! ```
//!
//! By default, a `DdexClient` talks to `https://api.ddex.io/v2/`. Use
//! [`with_base_url`](crate::client::DdexClientBuilder::with_base_url) to point it elsewhere.
//!
//! ## Make requests
//!
//! ```rust,no_run
//! # use ddex_rust::{DdexClient, Error};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let ddex: DdexClient = unreachable!();
//! // Public data, no signature
//! let markets: serde_json::Value = ddex.get("markets", &(), false).await?;
//!
//! // Account data, signed
//! let orders: serde_json::Value = ddex
//!     .get("orders", &[("marketId", "HOT-WETH"), ("status", "pending")], true)
//!     .await?;
//!
//! // POST and DELETE are always signed
//! let order: serde_json::Value = ddex
//!     .post("orders/build", &serde_json::json!({ "marketId": "HOT-WETH", "side": "buy" }))
//!     .await?;
//! let _: () = ddex.delete("orders/0xabc").await?;
//! # Ok(())
//! # }
//! ```
//!
//! Non-200 HTTP responses fail with [`Error::ServerError`](crate::error::Error), and
//! responses whose envelope status is not `0` fail with
//! [`Error::ApiError`](crate::error::Error).

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub(crate) mod authenticator;
pub mod client;
mod common;
pub mod error;
mod middlewares;
pub mod response;
pub mod signer;

pub use authenticator::{HydroAuthentication, ParseHydroAuthenticationError};
pub use client::DdexClient;
pub use error::Error;
pub use signer::Signer;
