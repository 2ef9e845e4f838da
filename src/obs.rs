//! Optional observability helpers for workspace operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `auteng_docs.operation` with the
//!   `operation` and `route` fields.
//! - Enable `metrics` to increment the `auteng_docs_operation_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.
//!
//! Neither layer records header values, so signatures never reach logs or metrics.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Workspace operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// `POST /api/docs`.
	Create,
	/// `PUT /api/docs`.
	Update,
	/// `GET /api/docs`.
	List,
	/// `DELETE /api/docs`.
	Remove,
	/// `POST /api/docs/share`.
	Share,
	/// `GET /api/docs/recent`.
	ListRecent,
}
impl OperationKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationKind::Create => "create",
			OperationKind::Update => "update",
			OperationKind::List => "list",
			OperationKind::Remove => "remove",
			OperationKind::Share => "share",
			OperationKind::ListRecent => "list_recent",
		}
	}
}
impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::Failure => "failure",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside an operation span and records attempt + outcome.
pub async fn observe<T, Fut>(kind: OperationKind, route: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = OperationSpan::new(kind, route);

	record_operation_outcome(kind, OperationOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => record_operation_outcome(kind, OperationOutcome::Success),
		Err(_) => record_operation_outcome(kind, OperationOutcome::Failure),
	}

	result
}
