//! Signer capability consumed by the header builder.
//!
//! The crate never holds key material. Callers hand in anything that can report a wallet
//! address and sign a plain-text (EIP-191 `personal_sign`) message: a hardware wallet bridge,
//! a custodial signing service, or a local key.

// self
use crate::_prelude::*;

/// Boxed future returned by [`WalletSigner::sign_message`].
pub type SignFuture<'a, E> = Pin<Box<dyn Future<Output = Result<String, E>> + 'a + Send>>;

/// Wallet capability that can prove control of an address by signing a message.
///
/// Implementations own any timeout or cancellation policy; the header builder awaits the
/// returned future without limits and surfaces its error untouched.
pub trait WalletSigner
where
	Self: Send + Sync,
{
	/// Error produced when signing fails or is rejected.
	type Error: 'static + Send + Sync + StdError;

	/// Wallet address sent as `X-Wallet-Address`. Copied verbatim.
	fn address(&self) -> &str;

	/// Signs `message` and resolves to the encoded signature.
	fn sign_message<'a>(&'a self, message: &'a str) -> SignFuture<'a, Self::Error>;
}
impl<S> WalletSigner for &S
where
	S: ?Sized + WalletSigner,
{
	type Error = S::Error;

	fn address(&self) -> &str {
		(**self).address()
	}

	fn sign_message<'a>(&'a self, message: &'a str) -> SignFuture<'a, Self::Error> {
		(**self).sign_message(message)
	}
}
impl<S> WalletSigner for Arc<S>
where
	S: ?Sized + WalletSigner,
{
	type Error = S::Error;

	fn address(&self) -> &str {
		(**self).address()
	}

	fn sign_message<'a>(&'a self, message: &'a str) -> SignFuture<'a, Self::Error> {
		(**self).sign_message(message)
	}
}
impl<S> WalletSigner for Box<S>
where
	S: ?Sized + WalletSigner,
{
	type Error = S::Error;

	fn address(&self) -> &str {
		(**self).address()
	}

	fn sign_message<'a>(&'a self, message: &'a str) -> SignFuture<'a, Self::Error> {
		(**self).sign_message(message)
	}
}
