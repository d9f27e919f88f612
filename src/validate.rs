//! Advisory validation of a workflow snapshot.
//!
//! [`validate`] is a pure read over the present snapshot: it never mutates,
//! it is not part of history, and its warnings are advisory: an incomplete
//! workflow is still editable and exportable.
//!
//! # Examples
//!
//! ```rust
//! use flowtree::types::NodeType;
//! use flowtree::validate::{ValidationWarning, validate};
//! use flowtree::workflow::Workflow;
//!
//! let wf = Workflow::new();
//! let warnings = validate(&wf);
//! assert!(warnings.contains(&ValidationWarning::MissingEnd));
//!
//! let done = wf.add_node(wf.root_id(), NodeType::End, None)?;
//! assert!(validate(&done.workflow).is_empty());
//! # Ok::<(), flowtree::workflow::WorkflowError>(())
//! ```

use serde::Serialize;
use std::fmt;

use crate::types::NodeId;
use crate::workflow::Workflow;

/// A single advisory finding about a workflow snapshot.
///
/// The `Display` text is the exact user-facing warning string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ValidationWarning {
    /// No node of kind end exists anywhere in the map.
    MissingEnd,
    /// A branch node has fewer than two occupied slots. Emitted once per
    /// offending branch.
    IncompleteBranch {
        /// The under-filled branch node.
        node: NodeId,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEnd => write!(f, "Workflow has no End node"),
            Self::IncompleteBranch { .. } => write!(f, "This workflow has an incomplete branch"),
        }
    }
}

/// Collects advisory warnings for a snapshot.
///
/// The "no End node" check scans the whole map rather than the set reachable
/// from the root, so an unreachable end node still satisfies it. Reachability
/// is the tree invariants' job, not the validator's.
///
/// Warnings are produced in map iteration order: stable within one call, but
/// no ordering is promised across snapshots.
#[must_use]
pub fn validate(workflow: &Workflow) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if !workflow.iter().any(|node| node.kind.is_end()) {
        warnings.push(ValidationWarning::MissingEnd);
    }

    for node in workflow.iter() {
        if node.kind.is_branch() && node.children.occupied() < 2 {
            warnings.push(ValidationWarning::IncompleteBranch { node: node.id });
        }
    }

    warnings
}
