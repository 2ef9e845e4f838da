//! Public sharing and the unauthenticated recents feed.

// crates.io
use reqwest::Method;
// self
use crate::{
	_prelude::*,
	auth::WalletSigner,
	docs::{DocsClient, ListRecent, RecentList, SHARE_PATH, ShareDocument, ShareLink},
	http::OutboundRequest,
	obs::{self, OperationKind},
};

impl DocsClient {
	/// Publishes a document and returns its share URL (`POST /api/docs/share`).
	pub async fn share<S>(&self, signer: &S, request: ShareDocument) -> Result<ShareLink>
	where
		S: ?Sized + WalletSigner,
	{
		obs::observe(OperationKind::Share, "POST /api/docs/share", async move {
			let url = self.config.endpoint(SHARE_PATH)?;
			let outbound = OutboundRequest::new(Method::POST, url).with_json(&request)?;

			self.send_signed(signer, outbound).await?.json()
		})
		.await
	}

	/// Reads the public recents feed (`GET /api/docs/recent`). No signer is involved.
	pub async fn list_recent(&self, request: ListRecent) -> Result<RecentList> {
		obs::observe(OperationKind::ListRecent, "GET /api/docs/recent", async move {
			let url = request.url(&self.config)?;

			self.send_public(OutboundRequest::new(Method::GET, url)).await?.json()
		})
		.await
	}
}
