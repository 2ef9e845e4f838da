//! Replay-resistant nonce generation.

// crates.io
use rand::{TryRngCore, rngs::OsRng};
// self
use crate::_prelude::*;

/// Number of random bytes drawn for each nonce.
pub const NONCE_BYTES: usize = 16;
/// Length of the hex-encoded nonce.
pub const NONCE_LEN: usize = NONCE_BYTES * 2;

/// Raised when the operating system entropy source cannot be read.
#[derive(Debug, ThisError)]
#[error("Operating system entropy source is unavailable.")]
pub struct NonceError {
	#[source]
	source: Box<dyn StdError + Send + Sync>,
}
impl NonceError {
	fn entropy(src: impl 'static + Send + Sync + StdError) -> Self {
		Self { source: Box::new(src) }
	}
}

/// Generates a 32-character lowercase hex nonce from 16 bytes of OS randomness.
pub fn generate_nonce() -> Result<String, NonceError> {
	let mut bytes = [0_u8; NONCE_BYTES];

	OsRng.try_fill_bytes(&mut bytes).map_err(NonceError::entropy)?;

	Ok(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashSet;
	// self
	use super::*;

	#[test]
	fn nonce_is_lowercase_hex() {
		let nonce = generate_nonce().expect("OS entropy should be available in tests.");

		assert_eq!(nonce.len(), NONCE_LEN);
		assert!(nonce.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')), "Bad nonce: {nonce}.");
	}

	#[test]
	fn nonces_do_not_repeat() {
		let nonces = (0..100)
			.map(|_| generate_nonce().expect("OS entropy should be available in tests."))
			.collect::<HashSet<_>>();

		assert_eq!(nonces.len(), 100);
	}
}
