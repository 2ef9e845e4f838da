//! Transport primitives for workspace requests.
//!
//! [`ReqwestHttpClient`] is the crate's only dependency on an HTTP stack. It sends one request
//! per operation and applies the uniform response contract: a success body is handed back for
//! decoding, and any non-success status becomes an [`ApiError`] regardless of the body.

// std
use std::ops::Deref;
// crates.io
use reqwest::{Method, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::AuthHeaders,
	error::{ApiError, ApiErrorBody, ConfigError},
};

const APPLICATION_JSON: &str = "application/json";

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Sends `request` and returns the body of a success response.
	pub(crate) async fn dispatch(&self, request: OutboundRequest) -> Result<SuccessBody> {
		let OutboundRequest { method, url, auth, body } = request;
		let mut builder = self.0.request(method, url);

		if let Some(auth) = auth {
			for (name, value) in auth.pairs() {
				builder = builder.header(name, value);
			}
		}
		if let Some(body) = body {
			builder = builder.header(CONTENT_TYPE, APPLICATION_JSON).body(body);
		}

		let response = builder.send().await?;
		let status = response.status();

		if !status.is_success() {
			let body = match response.bytes().await {
				Ok(bytes) => ApiErrorBody::from_bytes(&bytes),
				Err(_) => ApiErrorBody::Absent,
			};

			return Err(ApiError::new(
				status.as_u16(),
				status.canonical_reason().unwrap_or_default(),
				body,
			)
			.into());
		}

		let bytes = response.bytes().await?;

		Ok(SuccessBody { status: status.as_u16(), bytes: bytes.to_vec() })
	}
}
impl From<ReqwestClient> for ReqwestHttpClient {
	fn from(client: ReqwestClient) -> Self {
		Self::with_client(client)
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// A single request ready to be dispatched.
#[derive(Debug)]
pub(crate) struct OutboundRequest {
	pub(crate) method: Method,
	pub(crate) url: Url,
	pub(crate) auth: Option<AuthHeaders>,
	pub(crate) body: Option<Vec<u8>>,
}
impl OutboundRequest {
	pub(crate) fn new(method: Method, url: Url) -> Self {
		Self { method, url, auth: None, body: None }
	}

	pub(crate) fn with_auth(mut self, auth: AuthHeaders) -> Self {
		self.auth = Some(auth);

		self
	}

	pub(crate) fn with_json<B>(mut self, body: &B) -> Result<Self>
	where
		B: ?Sized + Serialize,
	{
		self.body = Some(serde_json::to_vec(body).map_err(ConfigError::from)?);

		Ok(self)
	}
}

/// Raw body of a 2xx response.
#[derive(Debug)]
pub(crate) struct SuccessBody {
	pub(crate) status: u16,
	pub(crate) bytes: Vec<u8>,
}
impl SuccessBody {
	/// Decodes the body into `T`, reporting the failing field path on mismatch.
	pub(crate) fn json<T>(&self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let mut deserializer = serde_json::Deserializer::from_slice(&self.bytes);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| Error::Decode { source, status: self.status })
	}
}
