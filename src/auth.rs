//! Wallet-authentication header protocol.
//!
//! Every authenticated request carries four headers derived from a freshly signed challenge
//! message: the signer's address, the signature, the Unix timestamp (seconds), and a 128-bit
//! nonce. [`build_auth_headers`] produces that bundle from any [`WalletSigner`]; the remaining
//! helpers are exposed so callers can reproduce or verify the exact message that was signed.

pub mod challenge;
pub mod headers;
pub mod nonce;
pub mod signer;

pub use challenge::*;
pub use headers::*;
pub use nonce::*;
pub use signer::*;
