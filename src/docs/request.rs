//! Operation inputs. Body-carrying requests serialize directly into the JSON payload.

// self
use crate::{
	_prelude::*,
	config::DocsConfig,
	docs::{DOCS_PATH, RECENT_PATH},
	error::ConfigError,
};

/// Input for [`DocsClient::create`](crate::docs::DocsClient::create).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateDocument {
	/// Workspace-relative document path.
	pub path: String,
	/// Document body.
	pub content: String,
	/// Optional display title; omitted from the payload when unset.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
}
impl CreateDocument {
	/// Creates a request without a title.
	pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
		Self { path: path.into(), content: content.into(), title: None }
	}

	/// Sets the display title.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());

		self
	}
}

/// Input for [`DocsClient::update`](crate::docs::DocsClient::update).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateDocument {
	/// Workspace-relative document path.
	pub path: String,
	/// Replacement body.
	pub content: String,
}
impl UpdateDocument {
	/// Creates an update request.
	pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
		Self { path: path.into(), content: content.into() }
	}
}

/// Input for [`DocsClient::list`](crate::docs::DocsClient::list).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListDocuments {
	/// Only return documents whose path starts with this prefix.
	pub prefix: Option<String>,
}
impl ListDocuments {
	/// Lists every document in the workspace.
	pub fn new() -> Self {
		Self::default()
	}

	/// Restricts the listing to `prefix`.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());

		self
	}

	pub(crate) fn url(&self, config: &DocsConfig) -> Result<Url, ConfigError> {
		let mut url = config.endpoint(DOCS_PATH)?;

		if let Some(prefix) = self.prefix.as_deref().filter(|prefix| !prefix.is_empty()) {
			url.query_pairs_mut().append_pair("prefix", prefix);
		}

		Ok(url)
	}
}

/// Input for [`DocsClient::remove`](crate::docs::DocsClient::remove).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RemoveDocument {
	/// Workspace-relative document path.
	pub path: String,
}
impl RemoveDocument {
	/// Creates a removal request.
	pub fn new(path: impl Into<String>) -> Self {
		Self { path: path.into() }
	}
}

/// Share visibility accepted by the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
	/// Listed on the public recents feed.
	#[default]
	Public,
}

/// Input for [`DocsClient::share`](crate::docs::DocsClient::share).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShareDocument {
	/// Workspace-relative document path.
	pub path: String,
	/// Visibility of the share; defaults to [`Visibility::Public`].
	pub visibility: Visibility,
}
impl ShareDocument {
	/// Shares `path` publicly.
	pub fn new(path: impl Into<String>) -> Self {
		Self { path: path.into(), visibility: Visibility::default() }
	}

	/// Overrides the visibility.
	pub fn with_visibility(mut self, visibility: Visibility) -> Self {
		self.visibility = visibility;

		self
	}
}

/// Input for [`DocsClient::list_recent`](crate::docs::DocsClient::list_recent).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListRecent {
	/// Page number; the service default applies when unset.
	pub page: Option<u32>,
	/// Page size; the service default applies when unset.
	pub limit: Option<u32>,
}
impl ListRecent {
	/// Requests the first page with the service's default size.
	pub fn new() -> Self {
		Self::default()
	}

	/// Selects a page.
	pub fn with_page(mut self, page: u32) -> Self {
		self.page = Some(page);

		self
	}

	/// Sets the page size.
	pub fn with_limit(mut self, limit: u32) -> Self {
		self.limit = Some(limit);

		self
	}

	pub(crate) fn url(&self, config: &DocsConfig) -> Result<Url, ConfigError> {
		let mut url = config.endpoint(RECENT_PATH)?;

		if self.page.is_none() && self.limit.is_none() {
			return Ok(url);
		}

		let mut pairs = url.query_pairs_mut();

		if let Some(page) = self.page {
			pairs.append_pair("page", &page.to_string());
		}
		if let Some(limit) = self.limit {
			pairs.append_pair("limit", &limit.to_string());
		}

		drop(pairs);

		Ok(url)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn local() -> DocsConfig {
		DocsConfig::new("http://localhost:8000").expect("Local origin should parse.")
	}

	#[test]
	fn create_body_omits_missing_title() {
		let body = serde_json::to_value(CreateDocument::new("report.md", "# Hello"))
			.expect("Create body should serialize.");

		assert_eq!(body, serde_json::json!({ "path": "report.md", "content": "# Hello" }));

		let body =
			serde_json::to_value(CreateDocument::new("report.md", "# Hello").with_title("My Report"))
				.expect("Create body should serialize.");

		assert_eq!(body["title"], "My Report");
	}

	#[test]
	fn share_defaults_to_public() {
		let body = serde_json::to_value(ShareDocument::new("report.md"))
			.expect("Share body should serialize.");

		assert_eq!(body, serde_json::json!({ "path": "report.md", "visibility": "public" }));
	}

	#[test]
	fn list_prefix_is_percent_encoded() {
		let url = ListDocuments::new()
			.with_prefix("reports/")
			.url(&local())
			.expect("List URL should resolve.");

		assert_eq!(url.as_str(), "http://localhost:8000/api/docs?prefix=reports%2F");
	}

	#[test]
	fn list_without_prefix_has_no_query() {
		let url = ListDocuments::new().url(&local()).expect("List URL should resolve.");

		assert_eq!(url.as_str(), "http://localhost:8000/api/docs");

		let url = ListDocuments::new().with_prefix("").url(&local()).expect("List URL should resolve.");

		assert_eq!(url.as_str(), "http://localhost:8000/api/docs");
	}

	#[test]
	fn recent_query_only_carries_supplied_params() {
		let url = ListRecent::new().url(&DocsConfig::default()).expect("Recent URL should resolve.");

		assert_eq!(url.as_str(), "https://auteng.ai/api/docs/recent");

		let url = ListRecent::new()
			.with_page(2)
			.with_limit(10)
			.url(&local())
			.expect("Recent URL should resolve.");

		assert_eq!(url.as_str(), "http://localhost:8000/api/docs/recent?page=2&limit=10");

		let url = ListRecent::new().with_limit(5).url(&local()).expect("Recent URL should resolve.");

		assert_eq!(url.query(), Some("limit=5"));
	}
}
