//! Core types for the flowtree workflow model.
//!
//! This module defines the fundamental types used throughout flowtree for
//! identifying and classifying nodes in a workflow tree. These are the core
//! domain concepts that define what a workflow *is*; the records built from
//! them live in [`crate::node`] and [`crate::workflow`].
//!
//! # Key Types
//!
//! - [`NodeId`]: Stable, globally unique node identifier
//! - [`NodeType`]: Classifies a node as start, action, branch, or end
//! - [`BranchSlot`]: Names the two positional child slots of a branch node
//! - [`NodeField`]: Selects which user-editable text field an update targets
//!
//! # Examples
//!
//! ```rust
//! use flowtree::types::{BranchSlot, NodeType};
//!
//! let kind = NodeType::Branch;
//! assert!(kind.is_branch());
//! assert_eq!(kind.to_string(), "branch");
//!
//! // Branch slots are positional: True is slot 0, False is slot 1.
//! assert_eq!(BranchSlot::True.index(), 0);
//! assert_eq!(BranchSlot::from_index(1), Some(BranchSlot::False));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a node within a workflow.
///
/// Identifiers are allocated once when a node is created and never change or
/// get reused. They are globally unique (uuid v4), so ids remain unambiguous
/// across undo/redo snapshots and across exported/imported workflows.
///
/// `NodeId` serializes as a plain uuid string, which also makes it usable as
/// a JSON map key in the exported snapshot shape.
///
/// # Examples
///
/// ```rust
/// use flowtree::types::NodeId;
///
/// let a = NodeId::fresh();
/// let b = NodeId::fresh();
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Allocates a fresh, globally unique identifier.
    #[must_use]
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying uuid.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classifies a node within the workflow tree.
///
/// The type is fixed at creation and determines the node's child capacity:
///
/// - [`Start`](Self::Start): the unique entry node, at most one successor
/// - [`Action`](Self::Action): a step, at most one successor
/// - [`Branch`](Self::Branch): a decision, exactly two positional slots
/// - [`End`](Self::End): a terminal, no children ever
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Entry node of the workflow. Exactly one exists, it is the root.
    Start,
    /// A single step with at most one successor.
    Action,
    /// A two-way decision with fixed True/False slots.
    Branch,
    /// Terminal node. Never has children.
    End,
}

impl NodeType {
    /// Returns `true` if this is a [`Start`](Self::Start) node.
    #[must_use]
    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start)
    }

    /// Returns `true` if this is a [`Branch`](Self::Branch) node.
    #[must_use]
    pub fn is_branch(&self) -> bool {
        matches!(self, Self::Branch)
    }

    /// Returns `true` if this is an [`End`](Self::End) node.
    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }

    /// The lowercase string form used in serialized snapshots.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Action => "action",
            Self::Branch => "branch",
            Self::End => "end",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names one of the two positional child slots of a branch node.
///
/// Slot identity is positional, not content-derived: `True` is always slot 0
/// and `False` is always slot 1, regardless of which slots are occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchSlot {
    /// The "True" arm, slot index 0.
    True,
    /// The "False" arm, slot index 1.
    False,
}

impl BranchSlot {
    /// The slot's fixed position in a branch's child pair.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::True => 0,
            Self::False => 1,
        }
    }

    /// Maps a position back to its slot name. Only 0 and 1 are valid.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::True),
            1 => Some(Self::False),
            _ => None,
        }
    }
}

impl fmt::Display for BranchSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
        }
    }
}

/// Selects which user-editable text field an update targets.
///
/// Label and notes are independent: updating one never touches the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeField {
    /// The node's display label.
    Label,
    /// The node's free-text annotation.
    Notes,
}

impl fmt::Display for NodeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label => write!(f, "label"),
            Self::Notes => write!(f, "notes"),
        }
    }
}
