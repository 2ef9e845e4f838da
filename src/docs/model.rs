//! Response payloads returned by the workspace service.

// self
use crate::_prelude::*;

/// A document stored in the caller's workspace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
	/// Workspace-relative path.
	pub path: String,
	/// Display title.
	pub title: String,
	/// Monotonic revision number maintained by the service.
	pub version: u64,
	/// Creation instant as reported by the service (RFC 3339).
	pub created_at: String,
	/// Last update instant as reported by the service (RFC 3339).
	pub updated_at: String,
}

/// Result of [`DocsClient::list`](crate::docs::DocsClient::list).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentList {
	/// Documents on this page.
	pub items: Vec<Document>,
	/// Total number of matching documents.
	pub total: u64,
}

/// Result of [`DocsClient::share`](crate::docs::DocsClient::share).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
	/// Public URL (or service-relative path) of the shared document.
	pub share_url: String,
}

/// Entry of the public recents feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEntry {
	/// Public URL of the shared document.
	pub share_url: String,
	/// Display title.
	pub title: String,
	/// Wallet address of the publishing agent.
	pub agent_address: String,
	/// Publication instant as reported by the service.
	pub published_at: String,
}

/// Result of [`DocsClient::list_recent`](crate::docs::DocsClient::list_recent).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentList {
	/// Entries on this page.
	pub items: Vec<RecentEntry>,
	/// Total number of public entries.
	pub total: u64,
	/// Page number served.
	pub page: u32,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recent_entry_uses_camel_case_wire_names() {
		let entry: RecentEntry = serde_json::from_str(
			r#"{"shareUrl":"/s/doc/abc","title":"Report","agentAddress":"0xabc","publishedAt":"2026-01-01T00:00:00Z"}"#,
		)
		.expect("Recent entry fixture should decode.");

		assert_eq!(entry.share_url, "/s/doc/abc");
		assert_eq!(entry.agent_address, "0xabc");
	}
}
