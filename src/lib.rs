//! # flowtree: Workflow-tree Data Model with Undo/Redo
//!
//! flowtree is the data core of a visual workflow builder: a rooted tree of
//! typed nodes (start, action, branch, end) with invariant-preserving pure
//! mutations, a linear snapshot-based undo/redo history, and a read-only
//! validator producing advisory warnings.
//!
//! ## Core Concepts
//!
//! - **Workflow**: an immutable value, the root id plus a map of nodes.
//!   Every mutation returns a fresh snapshot; published snapshots are never
//!   modified in place.
//! - **Slots**: child links live in fixed per-kind slot layouts. A branch
//!   node always has exactly two positional slots ("True" and "False"); a
//!   start or action node has a single successor slot; an end node has none.
//! - **History**: past/present/future snapshot stacks. Commits clear the
//!   redo stack; undo and redo are boundary-safe no-ops.
//! - **Validation**: a pure pass over the present snapshot, advisory only.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowtree::editor::WorkflowEditor;
//! use flowtree::types::{BranchSlot, NodeField, NodeType};
//!
//! let mut editor = WorkflowEditor::new();
//! let root = editor.workflow().root_id();
//!
//! // Build: Start -> Action -> Branch -> (Action | End)
//! let action = editor.add_node(root, NodeType::Action, None)?;
//! editor.update_field(action, NodeField::Label, "Fetch order")?;
//! let branch = editor.add_node(action, NodeType::Branch, None)?;
//! editor.add_node(branch, NodeType::Action, Some(BranchSlot::True))?;
//! editor.add_node(branch, NodeType::End, Some(BranchSlot::False))?;
//!
//! // Complete workflows validate clean.
//! assert!(editor.validate().is_empty());
//!
//! // Any edit can be undone and redone.
//! assert!(editor.undo());
//! assert!(editor.redo());
//!
//! // The present snapshot exports as plain structured JSON.
//! let json = editor.export_json()?;
//! let restored = WorkflowEditor::from_json(&json)?;
//! assert_eq!(restored.workflow(), editor.workflow());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Every mutation returns an explicit [`Result`]; a failed operation never
//! reaches history, so the present snapshot is untouched and callers can
//! treat failures as no-ops:
//!
//! ```rust
//! use flowtree::editor::WorkflowEditor;
//! use flowtree::workflow::WorkflowError;
//!
//! let mut editor = WorkflowEditor::new();
//! let root = editor.workflow().root_id();
//!
//! let err = editor.delete_node(root).unwrap_err();
//! assert_eq!(err, WorkflowError::CannotDeleteRoot);
//! assert_eq!(editor.workflow().len(), 1);
//! ```
//!
//! ## Module Guide
//!
//! - [`types`] - Identifiers, node kinds, branch slots, editable fields
//! - [`node`] - Node records and the fixed child-slot structure
//! - [`workflow`] - The aggregate and its pure mutation operations
//! - [`history`] - Snapshot-based linear undo/redo
//! - [`validate`] - Advisory warnings over a snapshot
//! - [`editor`] - The command facade wiring operations to history

pub mod editor;
pub mod history;
pub mod node;
pub mod types;
pub mod validate;
pub mod workflow;
