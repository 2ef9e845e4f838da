//! Authenticated CRUD operations on the caller's workspace.

// crates.io
use reqwest::Method;
// self
use crate::{
	_prelude::*,
	auth::WalletSigner,
	docs::{
		CreateDocument, DOCS_PATH, DocsClient, Document, DocumentList, ListDocuments,
		RemoveDocument, UpdateDocument,
	},
	http::OutboundRequest,
	obs::{self, OperationKind},
};

impl DocsClient {
	/// Creates a new document (`POST /api/docs`).
	pub async fn create<S>(&self, signer: &S, request: CreateDocument) -> Result<Document>
	where
		S: ?Sized + WalletSigner,
	{
		obs::observe(OperationKind::Create, "POST /api/docs", async move {
			let url = self.config.endpoint(DOCS_PATH)?;
			let outbound = OutboundRequest::new(Method::POST, url).with_json(&request)?;

			self.send_signed(signer, outbound).await?.json()
		})
		.await
	}

	/// Replaces the content of an existing document (`PUT /api/docs`).
	pub async fn update<S>(&self, signer: &S, request: UpdateDocument) -> Result<Document>
	where
		S: ?Sized + WalletSigner,
	{
		obs::observe(OperationKind::Update, "PUT /api/docs", async move {
			let url = self.config.endpoint(DOCS_PATH)?;
			let outbound = OutboundRequest::new(Method::PUT, url).with_json(&request)?;

			self.send_signed(signer, outbound).await?.json()
		})
		.await
	}

	/// Lists documents, optionally filtered by path prefix (`GET /api/docs`).
	pub async fn list<S>(&self, signer: &S, request: ListDocuments) -> Result<DocumentList>
	where
		S: ?Sized + WalletSigner,
	{
		obs::observe(OperationKind::List, "GET /api/docs", async move {
			let url = request.url(&self.config)?;

			self.send_signed(signer, OutboundRequest::new(Method::GET, url)).await?.json()
		})
		.await
	}

	/// Deletes a document (`DELETE /api/docs`). The response body is ignored.
	pub async fn remove<S>(&self, signer: &S, request: RemoveDocument) -> Result<()>
	where
		S: ?Sized + WalletSigner,
	{
		obs::observe(OperationKind::Remove, "DELETE /api/docs", async move {
			let url = self.config.endpoint(DOCS_PATH)?;
			let outbound = OutboundRequest::new(Method::DELETE, url).with_json(&request)?;

			self.send_signed(signer, outbound).await?;

			Ok(())
		})
		.await
	}
}
