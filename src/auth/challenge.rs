//! Challenge message layout shared with the backend verifier.

// self
use crate::_prelude::*;

/// Protocol tag that prefixes every challenge message.
pub const CHALLENGE_TAG: &str = "auteng";

const DELIMITER: char = ':';

/// Builds the challenge message `auteng:{timestamp}:{nonce}` signed by the wallet.
///
/// The timestamp is rendered in whole seconds and the nonce is embedded verbatim.
pub fn build_message(timestamp: i64, nonce: &str) -> String {
	format!("{CHALLENGE_TAG}{DELIMITER}{timestamp}{DELIMITER}{nonce}")
}

/// Returns the current Unix timestamp in whole seconds.
pub fn current_timestamp() -> i64 {
	OffsetDateTime::now_utc().unix_timestamp()
}

#[cfg(test)]
mod tests {
	// std
	use std::time::{SystemTime, UNIX_EPOCH};
	// self
	use super::*;

	#[test]
	fn message_joins_tag_timestamp_and_nonce() {
		assert_eq!(build_message(1708700000, "abc123"), "auteng:1708700000:abc123");
	}

	#[test]
	fn timestamp_is_expressed_in_seconds() {
		let now = current_timestamp();
		let expected = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.expect("System clock should be after the Unix epoch.")
			.as_secs() as i64;

		assert!((now - expected).abs() <= 1, "Timestamp {now} drifted from {expected}.");
	}
}
