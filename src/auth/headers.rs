//! Signed header bundle attached to every authenticated request.

// self
use crate::{
	_prelude::*,
	auth::{
		challenge,
		nonce::{self, NonceError},
		signer::WalletSigner,
	},
};

/// Header carrying the signer's wallet address.
pub const HEADER_ADDRESS: &str = "X-Wallet-Address";
/// Header carrying the signature over the challenge message.
pub const HEADER_SIGNATURE: &str = "X-Wallet-Signature";
/// Header carrying the challenge timestamp in decimal seconds.
pub const HEADER_TIMESTAMP: &str = "X-Wallet-Timestamp";
/// Header carrying the 32-character hex nonce.
pub const HEADER_NONCE: &str = "X-Wallet-Nonce";

/// Failure while building [`AuthHeaders`].
#[derive(Debug, ThisError)]
pub enum AuthError<E>
where
	E: 'static + StdError,
{
	/// Nonce generation failed; the host has no usable entropy source.
	#[error(transparent)]
	Nonce(#[from] NonceError),
	/// The signer rejected or failed to sign the challenge message.
	#[error("Wallet signer failed to sign the challenge message.")]
	Signer(#[source] E),
}

/// The four wallet-authentication headers for a single request.
///
/// A bundle is valid for exactly one request. The timestamp and nonce are what the backend
/// uses to reject replays, so build a new bundle for every call.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeaders {
	address: String,
	signature: String,
	timestamp: i64,
	nonce: String,
}
impl AuthHeaders {
	/// Wallet address reported by the signer.
	pub fn address(&self) -> &str {
		&self.address
	}

	/// Signature returned by the signer.
	pub fn signature(&self) -> &str {
		&self.signature
	}

	/// Unix timestamp (seconds) embedded in the challenge.
	pub fn timestamp(&self) -> i64 {
		self.timestamp
	}

	/// Hex nonce embedded in the challenge.
	pub fn nonce(&self) -> &str {
		&self.nonce
	}

	/// Rebuilds the challenge message that was signed for this bundle.
	pub fn message(&self) -> String {
		challenge::build_message(self.timestamp, &self.nonce)
	}

	/// Header name/value pairs in protocol order.
	pub fn pairs(&self) -> [(&'static str, String); 4] {
		[
			(HEADER_ADDRESS, self.address.clone()),
			(HEADER_SIGNATURE, self.signature.clone()),
			(HEADER_TIMESTAMP, self.timestamp.to_string()),
			(HEADER_NONCE, self.nonce.clone()),
		]
	}

	/// Returns the headers as a name-to-value map.
	pub fn to_map(&self) -> BTreeMap<&'static str, String> {
		self.pairs().into_iter().collect()
	}
}
impl Debug for AuthHeaders {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthHeaders")
			.field("address", &self.address)
			.field("signature", &"<redacted>")
			.field("timestamp", &self.timestamp)
			.field("nonce", &self.nonce)
			.finish()
	}
}

/// Signs a fresh challenge with `signer` and assembles the four authentication headers.
///
/// The timestamp and nonce are captured before the message is built, and the message is built
/// before the signer is invoked. The signer is awaited without a timeout. Its error is returned
/// as [`AuthError::Signer`] carrying the original value.
pub async fn build_auth_headers<S>(signer: &S) -> Result<AuthHeaders, AuthError<S::Error>>
where
	S: ?Sized + WalletSigner,
{
	let timestamp = challenge::current_timestamp();
	let nonce = nonce::generate_nonce()?;
	let message = challenge::build_message(timestamp, &nonce);
	let signature = signer.sign_message(&message).await.map_err(AuthError::Signer)?;

	Ok(AuthHeaders { address: signer.address().to_owned(), signature, timestamp, nonce })
}
