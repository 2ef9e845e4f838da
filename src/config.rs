//! Service origin configuration.

// self
use crate::{_prelude::*, error::ConfigError};

/// Production origin of the workspace service.
pub const DEFAULT_BASE_URL: &str = "https://auteng.ai";

/// Base origin that every operation path is appended to.
///
/// Trailing slashes are stripped on construction, so `https://auteng.ai/` and
/// `https://auteng.ai` resolve to the same endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDocsConfig")]
pub struct DocsConfig {
	base_url: String,
}
impl DocsConfig {
	/// Validates and normalizes `base_url`.
	pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
		let base_url = base_url.as_ref().trim_end_matches('/');
		let parsed = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
			base_url: base_url.to_owned(),
			source,
		})?;

		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(ConfigError::UnsupportedScheme { scheme: parsed.scheme().to_owned() });
		}

		Ok(Self { base_url: base_url.to_owned() })
	}

	/// Normalized base origin without trailing slashes.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Resolves an absolute endpoint URL for `path` (which must start with `/`).
	pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		let joined = format!("{}{path}", self.base_url);

		Url::parse(&joined)
			.map_err(|source| ConfigError::InvalidBaseUrl { base_url: self.base_url.clone(), source })
	}
}
impl Default for DocsConfig {
	fn default() -> Self {
		Self { base_url: DEFAULT_BASE_URL.into() }
	}
}

#[derive(Deserialize)]
struct RawDocsConfig {
	#[serde(default = "default_base_url")]
	base_url: String,
}
impl TryFrom<RawDocsConfig> for DocsConfig {
	type Error = ConfigError;

	fn try_from(raw: RawDocsConfig) -> Result<Self, Self::Error> {
		Self::new(raw.base_url)
	}
}

fn default_base_url() -> String {
	DEFAULT_BASE_URL.into()
}
