mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use auteng_docs::{
	docs::{DocsClient, ListRecent, ShareDocument},
	error::{ApiErrorBody, Error},
};
use common::*;

#[tokio::test]
async fn share_posts_public_visibility() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/docs/share")
				.header("content-type", "application/json")
				.header("x-wallet-address", ADDRESS)
				.header("x-wallet-signature", SIGNATURE)
				.json_body(json!({ "path": "report.md", "visibility": "public" }));
			then.status(200).json_body(json!({ "shareUrl": "/s/doc/abc123" }));
		})
		.await;
	let link = client_for(&server)
		.share(&MockSigner::default(), ShareDocument::new("report.md"))
		.await
		.expect("Share should succeed against the mock server.");

	assert_eq!(link.share_url, "/s/doc/abc123");

	mock.assert_async().await;
}

#[tokio::test]
async fn share_rate_limit_keeps_status() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/docs/share");
			then.status(429).json_body(json!({ "error": "rate limit" }));
		})
		.await;
	let err = client_for(&server)
		.share(&MockSigner::default(), ShareDocument::new("report.md"))
		.await
		.expect_err("Rate limiting should surface to the caller.");
	let api = err.as_api().expect("Rate limiting should be an API error.");

	assert_eq!(api.status, 429);
	assert_eq!(api.status_text, "Too Many Requests");
	assert!(api.is_rate_limited());
}

#[tokio::test]
async fn share_with_unexpected_payload_is_a_decode_error() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/docs/share");
			then.status(200).json_body(json!({ "shareUrl": 5 }));
		})
		.await;
	let err = client_for(&server)
		.share(&MockSigner::default(), ShareDocument::new("report.md"))
		.await
		.expect_err("A numeric share URL should not decode.");

	match err {
		Error::Decode { source, status } => {
			assert_eq!(status, 200);
			assert_eq!(source.path().to_string(), "shareUrl");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn list_recent_sends_no_credentials() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/docs/recent")
				.header_missing("x-wallet-address")
				.header_missing("x-wallet-signature")
				.header_missing("x-wallet-timestamp")
				.header_missing("x-wallet-nonce")
				.header_missing("content-type");
			then.status(200).json_body(json!({
				"items": [{
					"shareUrl": "/s/doc/abc123",
					"title": "Report",
					"agentAddress": ADDRESS,
					"publishedAt": "2026-01-02T00:00:00Z",
				}],
				"total": 1,
				"page": 1,
			}));
		})
		.await;
	let recent = client_for(&server)
		.list_recent(ListRecent::new())
		.await
		.expect("Recents feed should load without a signer.");

	assert_eq!(recent.page, 1);
	assert_eq!(recent.items[0].agent_address, ADDRESS);

	mock.assert_async().await;
}

#[tokio::test]
async fn list_recent_forwards_pagination() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/docs/recent")
				.query_param("page", "2")
				.query_param("limit", "10");
			then.status(200).json_body(json!({ "items": [], "total": 0, "page": 2 }));
		})
		.await;
	let recent = client_for(&server)
		.list_recent(ListRecent::new().with_page(2).with_limit(10))
		.await
		.expect("Paginated recents should load.");

	assert_eq!(recent.page, 2);

	mock.assert_async().await;
}

#[tokio::test]
async fn list_recent_server_error_keeps_text_body() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/docs/recent");
			then.status(500).body("error");
		})
		.await;
	let err = client_for(&server)
		.list_recent(ListRecent::new())
		.await
		.expect_err("Server faults should surface to the caller.");
	let api = err.as_api().expect("Server faults should be API errors.");

	assert_eq!(api.status, 500);
	assert_eq!(api.status_text, "Internal Server Error");
	assert!(api.is_server_error());
	assert_eq!(api.body, ApiErrorBody::Text("error".into()));
}

#[test]
fn default_client_targets_production() {
	assert_eq!(DocsClient::new().config.base_url(), "https://auteng.ai");
}
