//! Crate-level error types shared by the auth core and the workspace operations.

// self
use crate::{
	_prelude::*,
	auth::{AuthError, NonceError},
};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The service answered with a non-success status.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// The wallet signer failed; `source` is the signer's own error.
	#[error("Wallet signer failed to sign the challenge message.")]
	Signer {
		/// Error produced by the signer, unmodified.
		#[source]
		source: BoxError,
	},
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// A success response carried a body that does not match the expected payload.
	#[error("Response body does not match the expected payload.")]
	Decode {
		/// Structured parsing failure, including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}
impl Error {
	/// HTTP status associated with the failure, when a response was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api(err) => Some(err.status),
			Self::Decode { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Returns the [`ApiError`] if the service rejected the request.
	pub fn as_api(&self) -> Option<&ApiError> {
		match self {
			Self::Api(err) => Some(err),
			_ => None,
		}
	}

	/// Recovers the signer's concrete error type.
	pub fn signer_error<E>(&self) -> Option<&E>
	where
		E: 'static + StdError,
	{
		match self {
			Self::Signer { source } => source.downcast_ref::<E>(),
			_ => None,
		}
	}
}
impl<E> From<AuthError<E>> for Error
where
	E: 'static + Send + Sync + StdError,
{
	fn from(e: AuthError<E>) -> Self {
		match e {
			AuthError::Nonce(e) => ConfigError::from(e).into(),
			AuthError::Signer(e) => Self::Signer { source: Box::new(e) },
		}
	}
}

/// Non-success response returned by the service.
///
/// Every non-2xx status maps here; callers branch on [`ApiError::status`].
#[derive(Clone, Debug, PartialEq, ThisError)]
#[error("API error {status}: {status_text}.")]
pub struct ApiError {
	/// Numeric HTTP status code.
	pub status: u16,
	/// Reason phrase for the status code, empty when none is registered.
	pub status_text: String,
	/// Response body, parsed as leniently as possible.
	pub body: ApiErrorBody,
}
impl ApiError {
	/// Creates a new API error.
	pub fn new(status: u16, status_text: impl Into<String>, body: ApiErrorBody) -> Self {
		Self { status, status_text: status_text.into(), body }
	}

	/// `401 Unauthorized`, typically a rejected or stale wallet signature.
	pub fn is_unauthorized(&self) -> bool {
		self.status == 401
	}

	/// `404 Not Found`.
	pub fn is_not_found(&self) -> bool {
		self.status == 404
	}

	/// `409 Conflict`.
	pub fn is_conflict(&self) -> bool {
		self.status == 409
	}

	/// `429 Too Many Requests`.
	pub fn is_rate_limited(&self) -> bool {
		self.status == 429
	}

	/// Any `5xx` status.
	pub fn is_server_error(&self) -> bool {
		(500..600).contains(&self.status)
	}
}

/// Body of an [`ApiError`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiErrorBody {
	/// Body parsed as JSON.
	Json(serde_json::Value),
	/// Body that is not JSON but valid UTF-8.
	Text(String),
	/// Empty or unreadable body.
	Absent,
}
impl ApiErrorBody {
	/// Classifies raw response bytes: JSON first, then UTF-8 text, otherwise absent.
	pub fn from_bytes(bytes: &[u8]) -> Self {
		if bytes.is_empty() {
			return Self::Absent;
		}
		if let Ok(value) = serde_json::from_slice(bytes) {
			return Self::Json(value);
		}

		match std::str::from_utf8(bytes) {
			Ok(text) => Self::Text(text.to_owned()),
			Err(_) => Self::Absent,
		}
	}

	/// JSON body, if the response carried one.
	pub fn as_json(&self) -> Option<&serde_json::Value> {
		match self {
			Self::Json(value) => Some(value),
			_ => None,
		}
	}

	/// Text body, if the response was not JSON.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}
}

/// Configuration and request-construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request could not be assembled (e.g. a header value with control characters).
	#[error("HTTP request could not be constructed.")]
	HttpRequest {
		/// Underlying request builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL `{base_url}` is invalid.")]
	InvalidBaseUrl {
		/// Offending value after trailing slashes were stripped.
		base_url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL uses a scheme other than HTTP(S).
	#[error("Base URL scheme `{scheme}` is not supported.")]
	UnsupportedScheme {
		/// Scheme found in the base URL.
		scheme: String,
	},
	/// Request body could not be encoded as JSON.
	#[error("Request body could not be serialized.")]
	BodySerialize(#[from] serde_json::Error),
	/// The host has no usable entropy source for nonces.
	#[error(transparent)]
	EntropyUnavailable(#[from] NonceError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}

	/// Wraps a request construction failure inside [`ConfigError`].
	pub fn http_request(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpRequest { source: Box::new(src) }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the workspace service.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the workspace service.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for Error {
	fn from(e: ReqwestError) -> Self {
		if e.is_builder() {
			ConfigError::http_request(e).into()
		} else {
			TransportError::network(e).into()
		}
	}
}
