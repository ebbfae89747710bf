//! Editor error types.

use thiserror::Error;

use super::types::NodeId;

/// Everything that can go wrong in an editor operation. None of these are
/// fatal: the editor state is left as it was.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditorError {
	/// Submit without a start node.
	#[error("select a start node before submitting")]
	MissingStart,

	/// Submit without any stop nodes.
	#[error("select at least one stop node before submitting")]
	MissingStops,

	/// Connect-grid without a generated lattice.
	#[error("generate a grid before connecting it")]
	NoLattice,

	/// Requested lattice side exceeds the configured limit.
	#[error("grid size {requested} exceeds the limit of {max}")]
	GridTooLarge {
		/// Side that was asked for.
		requested: u32,
		/// Configured maximum side.
		max: u32,
	},

	/// The request body could not be serialized.
	#[error("could not encode path request: {0}")]
	Encode(String),

	/// The request never produced a response.
	#[error("network error: {0}")]
	Network(String),

	/// The service answered with a non-success status.
	#[error("path service returned HTTP {status}")]
	Service {
		/// HTTP status code.
		status: u16,
	},

	/// The response body was not a path.
	#[error("malformed path response: {0}")]
	Decode(String),

	/// The graph was replaced while the request was in flight.
	#[error("path response is for a graph that no longer exists")]
	StaleResponse,

	/// The response names a node the graph does not have.
	#[error("path response references unknown node {0}")]
	UnknownNode(NodeId),
}

impl EditorError {
	/// Validation errors are shown to the user; the rest are diagnostics.
	pub fn is_validation(&self) -> bool {
		matches!(self, Self::MissingStart | Self::MissingStops)
	}
}
