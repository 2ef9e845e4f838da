//! Workspace document operations.
//!
//! [`DocsClient`] issues exactly one HTTP request per operation. Authenticated operations sign a
//! fresh challenge with the caller's [`WalletSigner`] before every request; the public recents
//! feed is read without any credentials.

pub mod model;
pub mod request;

mod sharing;
mod workspace;

pub use model::*;
pub use request::*;

// self
use crate::{
	_prelude::*,
	auth::{self, WalletSigner},
	config::DocsConfig,
	http::{OutboundRequest, ReqwestHttpClient, SuccessBody},
};

pub(crate) const DOCS_PATH: &str = "/api/docs";
pub(crate) const SHARE_PATH: &str = "/api/docs/share";
pub(crate) const RECENT_PATH: &str = "/api/docs/recent";

/// Client for the agent workspace document API.
///
/// The client holds no per-call state: it pairs a reqwest transport with the service origin.
/// Cloning is cheap, so a per-call origin override is `client.clone().with_config(..)`.
#[derive(Clone, Debug, Default)]
pub struct DocsClient {
	/// HTTP client wrapper used for every outbound request.
	pub http_client: ReqwestHttpClient,
	/// Service origin.
	pub config: DocsConfig,
}
impl DocsClient {
	/// Creates a client targeting the production origin.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(http_client: impl Into<ReqwestHttpClient>, config: DocsConfig) -> Self {
		Self { http_client: http_client.into(), config }
	}

	/// Replaces the service origin.
	pub fn with_config(mut self, config: DocsConfig) -> Self {
		self.config = config;

		self
	}

	/// Replaces the service origin after validating `base_url`.
	pub fn with_base_url(self, base_url: impl AsRef<str>) -> Result<Self> {
		let config = DocsConfig::new(base_url)?;

		Ok(self.with_config(config))
	}

	/// Signs a fresh challenge with `signer` and sends `request` with the resulting headers.
	async fn send_signed<S>(&self, signer: &S, request: OutboundRequest) -> Result<SuccessBody>
	where
		S: ?Sized + WalletSigner,
	{
		let headers = auth::build_auth_headers(signer).await?;

		self.http_client.dispatch(request.with_auth(headers)).await
	}

	/// Sends `request` without credentials.
	async fn send_public(&self, request: OutboundRequest) -> Result<SuccessBody> {
		self.http_client.dispatch(request).await
	}
}
