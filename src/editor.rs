//! The editing facade tying the workflow operations to history.
//!
//! [`WorkflowEditor`] is the command boundary consumed by UI event handlers
//! (and tests): every edit command runs the corresponding pure operation
//! against the present snapshot and, only on success, commits the result to
//! history. A failed operation returns its error and commits nothing, so the
//! present snapshot is exactly as it was, and the caller can surface the
//! failure as a no-op.
//!
//! The editor assumes one in-flight command at a time (it takes `&mut self`
//! for every edit); concurrent callers must serialize externally.
//!
//! # Examples
//!
//! ```rust
//! use flowtree::editor::WorkflowEditor;
//! use flowtree::types::{BranchSlot, NodeType};
//!
//! let mut editor = WorkflowEditor::new();
//! let root = editor.workflow().root_id();
//!
//! let action = editor.add_node(root, NodeType::Action, None)?;
//! let branch = editor.add_node(action, NodeType::Branch, None)?;
//! editor.add_node(branch, NodeType::Action, Some(BranchSlot::True))?;
//! editor.add_node(branch, NodeType::End, Some(BranchSlot::False))?;
//!
//! assert!(editor.validate().is_empty());
//! assert_eq!(editor.workflow().len(), 5);
//!
//! // Two undos roll back to the bare branch; two redos restore everything.
//! assert!(editor.undo() && editor.undo());
//! assert_eq!(editor.workflow().len(), 3);
//! assert!(editor.redo() && editor.redo());
//! assert_eq!(editor.workflow().len(), 5);
//! # Ok::<(), flowtree::workflow::WorkflowError>(())
//! ```

use tracing::debug;

use crate::history::History;
use crate::types::{BranchSlot, NodeField, NodeId, NodeType};
use crate::validate::{ValidationWarning, validate};
use crate::workflow::{Deletion, NodeAdded, Workflow, WorkflowError};

/// Owns the history and dispatches edit commands against the present
/// snapshot.
#[derive(Clone, Debug)]
pub struct WorkflowEditor {
    history: History,
}

impl WorkflowEditor {
    /// Starts an editing session on a fresh single-start workflow.
    #[must_use]
    pub fn new() -> Self {
        Self::from_workflow(Workflow::new())
    }

    /// Starts an editing session on an existing snapshot (for example one
    /// restored by a persistence collaborator). History starts empty.
    #[must_use]
    pub fn from_workflow(workflow: Workflow) -> Self {
        Self {
            history: History::new(workflow),
        }
    }

    /// Restores a session from the exported JSON snapshot shape.
    ///
    /// # Errors
    ///
    /// Any `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_workflow(serde_json::from_str(json)?))
    }

    /// The present snapshot.
    #[must_use]
    pub fn workflow(&self) -> &Workflow {
        self.history.present()
    }

    /// Read access to the undo/redo state.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Adds a node under `parent` and commits. Returns the new node's id.
    ///
    /// # Errors
    ///
    /// Propagates [`WorkflowError`] from the underlying operation; nothing
    /// is committed on failure.
    pub fn add_node(
        &mut self,
        parent: NodeId,
        kind: NodeType,
        slot: Option<BranchSlot>,
    ) -> Result<NodeId, WorkflowError> {
        let NodeAdded {
            workflow,
            id,
            displaced,
        } = self.workflow().add_node(parent, kind, slot)?;
        if !displaced.is_empty() {
            debug!(
                parent = %parent,
                displaced = displaced.len(),
                "add replaced an occupied slot"
            );
        }
        self.history.commit(workflow);
        Ok(id)
    }

    /// Replaces a node's label or notes and commits.
    ///
    /// # Errors
    ///
    /// Propagates [`WorkflowError::NodeNotFound`]; nothing is committed on
    /// failure.
    pub fn update_field(
        &mut self,
        id: NodeId,
        field: NodeField,
        value: impl Into<String>,
    ) -> Result<(), WorkflowError> {
        let workflow = self.workflow().update_field(id, field, value)?;
        self.history.commit(workflow);
        Ok(())
    }

    /// Deletes a node with its subtree and commits. Returns every removed
    /// id.
    ///
    /// # Errors
    ///
    /// Propagates [`WorkflowError`] from the underlying operation; nothing
    /// is committed on failure (deleting the root is a no-op for the UI).
    pub fn delete_node(&mut self, id: NodeId) -> Result<Vec<NodeId>, WorkflowError> {
        let Deletion {
            workflow, removed, ..
        } = self.workflow().delete_node(id)?;
        self.history.commit(workflow);
        Ok(removed)
    }

    /// Steps the history back one snapshot; `false` at the boundary.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Steps the history forward one snapshot; `false` at the boundary.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Runs the validator over the present snapshot.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationWarning> {
        validate(self.workflow())
    }

    /// Serializes the present snapshot to the plain structured JSON shape
    /// (`root_id` + nodes mapping) for export or persistence.
    ///
    /// # Errors
    ///
    /// Any `serde_json` serialization error.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.workflow())
    }
}

impl Default for WorkflowEditor {
    fn default() -> Self {
        Self::new()
    }
}
