#![allow(dead_code)]

// std
use std::sync::{Arc, Mutex};
// crates.io
use httpmock::MockServer;
// self
use auteng_docs::{
	auth::{SignFuture, WalletSigner},
	docs::DocsClient,
};

pub const ADDRESS: &str = "0x1234567890abcdef1234567890abcdef12345678";
pub const SIGNATURE: &str = "0xmocksignature";

/// Signer that returns a fixed signature and remembers every challenge it saw.
#[derive(Clone, Default)]
pub struct MockSigner {
	messages: Arc<Mutex<Vec<String>>>,
}
impl MockSigner {
	pub fn messages(&self) -> Vec<String> {
		self.messages.lock().expect("Signer log should not be poisoned.").clone()
	}
}
impl WalletSigner for MockSigner {
	type Error = std::io::Error;

	fn address(&self) -> &str {
		ADDRESS
	}

	fn sign_message<'a>(&'a self, message: &'a str) -> SignFuture<'a, Self::Error> {
		Box::pin(async move {
			self.messages.lock().expect("Signer log should not be poisoned.").push(message.into());

			Ok(SIGNATURE.into())
		})
	}
}

#[derive(Debug, thiserror::Error)]
#[error("Wallet is locked.")]
pub struct WalletLocked;

/// Signer whose wallet refuses every request.
pub struct LockedSigner;
impl WalletSigner for LockedSigner {
	type Error = WalletLocked;

	fn address(&self) -> &str {
		ADDRESS
	}

	fn sign_message<'a>(&'a self, _message: &'a str) -> SignFuture<'a, Self::Error> {
		Box::pin(async { Err(WalletLocked) })
	}
}

pub fn client_for(server: &MockServer) -> DocsClient {
	DocsClient::new()
		.with_base_url(server.base_url())
		.expect("Mock server origin should be a valid base URL.")
}

pub fn document(version: u64) -> serde_json::Value {
	serde_json::json!({
		"path": "report.md",
		"title": "report",
		"version": version,
		"created_at": "2026-01-01T00:00:00Z",
		"updated_at": "2026-01-01T00:00:00Z",
	})
}
