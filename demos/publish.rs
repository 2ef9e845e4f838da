//! Demonstrates the full publishing round trip (create, update, list, share, remove, and the
//! public recents feed) against an `httpmock` stand-in for the workspace service.
//!
//! The toy signer below hex-encodes the challenge instead of producing a real EIP-191
//! signature; plug in a wallet integration to talk to the production origin.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use auteng_docs::{
	auth::{self, SignFuture, WalletSigner},
	docs::{
		CreateDocument, DocsClient, ListDocuments, ListRecent, RemoveDocument, ShareDocument,
		UpdateDocument,
	},
};

struct DemoSigner;
impl WalletSigner for DemoSigner {
	type Error = std::convert::Infallible;

	fn address(&self) -> &str {
		"0x1234567890abcdef1234567890abcdef12345678"
	}

	fn sign_message<'a>(&'a self, message: &'a str) -> SignFuture<'a, Self::Error> {
		Box::pin(async move { Ok(format!("0x{}", hex::encode(message))) })
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let doc = json!({
		"path": "reports/q1.md",
		"title": "Q1",
		"version": 1,
		"created_at": "2026-01-01T00:00:00Z",
		"updated_at": "2026-01-01T00:00:00Z",
	});

	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/docs");
			then.status(201).json_body(doc.clone());
		})
		.await;
	let update_mock = server
		.mock_async(|when, then| {
			when.method(PUT).path("/api/docs");
			then.status(200).json_body(doc.clone());
		})
		.await;
	let list_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/docs");
			then.status(200).json_body(json!({ "items": [doc.clone()], "total": 1 }));
		})
		.await;
	let share_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/docs/share");
			then.status(200).json_body(json!({ "shareUrl": "/s/doc/q1" }));
		})
		.await;
	let recent_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/docs/recent");
			then.status(200).json_body(json!({ "items": [], "total": 0, "page": 1 }));
		})
		.await;
	let remove_mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/docs");
			then.status(204);
		})
		.await;

	let signer = DemoSigner;
	let headers = auth::build_auth_headers(&signer).await?;

	println!("Signed challenge `{}` as {headers:?}.", headers.message());

	let client = DocsClient::new().with_base_url(server.base_url())?;
	let created =
		client.create(&signer, CreateDocument::new("reports/q1.md", "# Q1").with_title("Q1")).await?;

	println!("Created {} (v{}).", created.path, created.version);

	client.update(&signer, UpdateDocument::new("reports/q1.md", "# Q1, revised")).await?;

	let listing = client.list(&signer, ListDocuments::new().with_prefix("reports/")).await?;

	println!("Workspace holds {} document(s) under reports/.", listing.total);

	let link = client.share(&signer, ShareDocument::new("reports/q1.md")).await?;

	println!("Shared at {}.", link.share_url);

	let recent = client.list_recent(ListRecent::new().with_limit(5)).await?;

	println!("Recents page {} lists {} entries.", recent.page, recent.items.len());

	client.remove(&signer, RemoveDocument::new("reports/q1.md")).await?;

	for mock in [create_mock, update_mock, list_mock, share_mock, recent_mock, remove_mock] {
		mock.assert_async().await;
	}

	Ok(())
}
