//! Editor interaction modes.
//!
//! One tagged state replaces the Node/Path tag, the eraser switch and the
//! two selection flags, so a pointer event always has exactly one meaning.

use super::types::NodeId;

/// The drawing tool the editor returns to after erasing or selecting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
	/// Clicking blank canvas places nodes.
	#[default]
	Node,
	/// Clicking two nodes in turn draws an edge between them.
	Path,
}

/// Selection modes keep the armed node so it is still armed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
	Placing { armed: Option<NodeId> },
	Drawing { armed: Option<NodeId> },
	Erasing { resume: Tool },
	SelectingStart { resume: Tool, armed: Option<NodeId> },
	SelectingStop { resume: Tool, armed: Option<NodeId> },
}

impl Default for EditorMode {
	fn default() -> Self {
		Self::Placing { armed: None }
	}
}

impl EditorMode {
	fn from_tool(tool: Tool, armed: Option<NodeId>) -> Self {
		match tool {
			Tool::Node => Self::Placing { armed },
			Tool::Path => Self::Drawing { armed },
		}
	}

	/// The tool that is active now or that will be resumed.
	pub fn tool(&self) -> Tool {
		match *self {
			Self::Placing { .. } => Tool::Node,
			Self::Drawing { .. } => Tool::Path,
			Self::Erasing { resume }
			| Self::SelectingStart { resume, .. }
			| Self::SelectingStop { resume, .. } => resume,
		}
	}

	pub fn armed(&self) -> Option<NodeId> {
		match *self {
			Self::Placing { armed }
			| Self::Drawing { armed }
			| Self::SelectingStart { armed, .. }
			| Self::SelectingStop { armed, .. } => armed,
			Self::Erasing { .. } => None,
		}
	}

	/// Switch to a drawing tool. An armed node survives a Node ↔ Path
	/// switch so it can become the source of the next edge.
	pub fn use_tool(self, tool: Tool) -> Self {
		Self::from_tool(tool, self.armed())
	}

	/// Erasing drops the armed node; it may be the node being erased.
	pub fn toggle_eraser(self) -> Self {
		match self {
			Self::Erasing { resume } => Self::from_tool(resume, None),
			other => Self::Erasing { resume: other.tool() },
		}
	}

	pub fn begin_select_start(self) -> Self {
		Self::SelectingStart {
			resume: self.tool(),
			armed: self.armed(),
		}
	}

	pub fn begin_select_stops(self) -> Self {
		Self::SelectingStop {
			resume: self.tool(),
			armed: self.armed(),
		}
	}

	/// Leave a selection mode; other modes are unchanged.
	pub fn finish_selecting(self) -> Self {
		match self {
			Self::SelectingStart { resume, armed } | Self::SelectingStop { resume, armed } => {
				Self::from_tool(resume, armed)
			}
			other => other,
		}
	}

	pub fn arm(self, id: NodeId) -> Self {
		Self::from_tool(self.tool(), Some(id))
	}

	pub fn disarm(self) -> Self {
		match self {
			Self::Placing { .. } | Self::Drawing { .. } => Self::from_tool(self.tool(), None),
			Self::SelectingStart { resume, .. } => Self::SelectingStart { resume, armed: None },
			Self::SelectingStop { resume, .. } => Self::SelectingStop { resume, armed: None },
			other => other,
		}
	}

	/// Drop the armed node if it is `id`.
	pub fn forget(self, id: NodeId) -> Self {
		if self.armed() == Some(id) { self.disarm() } else { self }
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Placing { .. } => "Node mode",
			Self::Drawing { .. } => "Path mode",
			Self::Erasing { .. } => "Eraser",
			Self::SelectingStart { .. } => "Selecting start node",
			Self::SelectingStop { .. } => "Selecting stop nodes",
		}
	}
}
