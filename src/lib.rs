//! Wallet-signed client for the AutEng agent workspace: create, update, list, remove, and share
//! documents with EIP-191 challenge headers instead of API keys, and browse the public recents
//! feed.
//!
//! The [`auth`] module is transport-agnostic and builds the four `X-Wallet-*` headers from any
//! [`auth::WalletSigner`]. With the default `reqwest` feature, [`docs::DocsClient`] wraps every
//! workspace endpoint on top of it.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
#[cfg(feature = "reqwest")] pub mod docs;
pub mod error;
#[cfg(feature = "reqwest")] pub mod http;
pub mod obs;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
