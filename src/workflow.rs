//! The workflow aggregate and its pure mutation operations.
//!
//! A [`Workflow`] is a rooted tree of [`WorkflowNode`]s held in a single map
//! keyed by [`NodeId`]. It is a value object: every mutation operation takes
//! the current snapshot by reference and returns a fresh snapshot (or an
//! error), never modifying its input. That is what makes the snapshot-based
//! undo/redo in [`crate::history`] trivially correct: once a snapshot is
//! published it is never touched again.
//!
//! # Invariants
//!
//! Every operation preserves all of the following:
//!
//! 1. The root exists, has kind [`NodeType::Start`], and is never deleted or
//!    reparented.
//! 2. The structure reachable from the root is a tree: each id is held by at
//!    most one parent slot and there are no cycles.
//! 3. Every occupied slot points at an existing node, and that node's
//!    `parent` back-reference points back at the slot holder.
//! 4. Branch nodes always carry exactly two slots (structural, see
//!    [`ChildSlots`]).
//! 5. No node is retained outside the root's reachable set: deletion and
//!    slot replacement cascade over the whole displaced subtree.
//!
//! # Examples
//!
//! ```rust
//! use flowtree::types::NodeType;
//! use flowtree::workflow::Workflow;
//!
//! let wf = Workflow::new();
//! let added = wf.add_node(wf.root_id(), NodeType::Action, None)?;
//!
//! assert_eq!(added.workflow.len(), 2);
//! // The input snapshot is untouched.
//! assert_eq!(wf.len(), 1);
//! # Ok::<(), flowtree::workflow::WorkflowError>(())
//! ```

use miette::Diagnostic;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::node::{ChildSlots, WorkflowNode};
use crate::types::{BranchSlot, NodeField, NodeId, NodeType};

/// Errors returned by the workflow operations.
///
/// Operations fail by returning one of these without mutating anything;
/// callers must not commit a failed operation to history. User-facing layers
/// are expected to surface failures as no-ops, not crashes.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// The operation referenced an id that is not in the workflow.
    #[error("node not found: {id}")]
    #[diagnostic(
        code(flowtree::workflow::node_not_found),
        help("The node may have been deleted by an earlier edit or undo.")
    )]
    NodeNotFound { id: NodeId },

    /// The root start node was targeted for deletion.
    #[error("the root start node cannot be deleted")]
    #[diagnostic(
        code(flowtree::workflow::cannot_delete_root),
        help("Every workflow keeps its start node; delete its children instead.")
    )]
    CannotDeleteRoot,

    /// An add had nowhere to place the new node: both branch slots occupied
    /// with no explicit slot given, or the parent is a terminal end node.
    #[error("no available slot on node {parent}")]
    #[diagnostic(
        code(flowtree::workflow::no_available_slot),
        help("Target a slot explicitly to replace its subtree, or pick another parent.")
    )]
    NoAvailableSlot { parent: NodeId },
}

/// Result of a successful [`Workflow::add_node`].
#[derive(Clone, Debug)]
pub struct NodeAdded {
    /// The new snapshot containing the added node.
    pub workflow: Workflow,
    /// Identifier of the freshly created node.
    pub id: NodeId,
    /// Ids removed because the add replaced an occupied slot: the previous
    /// occupant and its whole subtree. Empty when the slot was free.
    pub displaced: Vec<NodeId>,
}

/// Result of a successful [`Workflow::delete_node`].
#[derive(Clone, Debug)]
pub struct Deletion {
    /// The new snapshot without the deleted subtree.
    pub workflow: Workflow,
    /// Every id removed from the map: the target node and all descendants.
    pub removed: Vec<NodeId>,
    /// `true` when the target had no live parent link: an invariant
    /// violation that was repaired by removing the node anyway. Report-only;
    /// never an error.
    pub dangling: bool,
}

/// A complete workflow snapshot: the root id plus the node map.
///
/// The map is the single source of truth; there is no separate edge list.
/// Serializes to the plain structured shape (`root_id` + `nodes`) consumed
/// by export and persistence collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    root_id: NodeId,
    nodes: FxHashMap<NodeId, WorkflowNode>,
}

impl Workflow {
    /// Creates the initial workflow: a single start node labeled "Start".
    #[must_use]
    pub fn new() -> Self {
        let root = WorkflowNode::new(NodeId::fresh(), NodeType::Start, None, "Start");
        let root_id = root.id;
        let mut nodes = FxHashMap::default();
        nodes.insert(root_id, root);
        Self { root_id, nodes }
    }

    /// Identifier of the root start node.
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.root_id
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&WorkflowNode> {
        self.nodes.get(&id)
    }

    /// Returns `true` if `id` is present in the map.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of nodes in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false` for workflows built through the public operations:
    /// the root is never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all nodes, in map iteration order (stable within one
    /// snapshot, not insertion order).
    pub fn iter(&self) -> impl Iterator<Item = &WorkflowNode> {
        self.nodes.values()
    }

    /// Adds a fresh node of `kind` under `parent_id` and returns the new
    /// snapshot together with the new node's id.
    ///
    /// Slot selection:
    ///
    /// - Branch parent with an explicit `slot`: that slot is targeted; if it
    ///   is occupied the previous subtree is replaced (removed wholesale,
    ///   reported in [`NodeAdded::displaced`]).
    /// - Branch parent without `slot`: the first empty slot is used,
    ///   scanning True then False; [`WorkflowError::NoAvailableSlot`] when
    ///   both are occupied.
    /// - Start/action parent: the single successor slot is targeted
    ///   (`slot`, if given, is ignored with a warning); an occupied slot is
    ///   replaced like an explicit branch slot.
    /// - End parent: always [`WorkflowError::NoAvailableSlot`]; terminals
    ///   have no slots.
    ///
    /// The new node starts with the `"..."` placeholder label and empty
    /// notes; a new branch node starts with both slots empty.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::NodeNotFound`] if `parent_id` is absent, or
    /// [`WorkflowError::NoAvailableSlot`] as described above.
    pub fn add_node(
        &self,
        parent_id: NodeId,
        kind: NodeType,
        slot: Option<BranchSlot>,
    ) -> Result<NodeAdded, WorkflowError> {
        let parent = self
            .nodes
            .get(&parent_id)
            .ok_or(WorkflowError::NodeNotFound { id: parent_id })?;

        // None = the single successor slot, Some = a positional branch slot.
        let choice = match (&parent.children, slot) {
            (ChildSlots::Terminal, _) => {
                return Err(WorkflowError::NoAvailableSlot { parent: parent_id });
            }
            (ChildSlots::Single(_), requested) => {
                if let Some(requested) = requested {
                    warn!(
                        parent = %parent_id,
                        slot = %requested,
                        "slot argument ignored for non-branch parent"
                    );
                }
                None
            }
            (ChildSlots::Pair(_), Some(requested)) => Some(requested),
            (ChildSlots::Pair(_), None) => Some(
                parent
                    .children
                    .first_empty()
                    .ok_or(WorkflowError::NoAvailableSlot { parent: parent_id })?,
            ),
        };

        let displaced_root = match choice {
            Some(branch) => parent.children.get(branch),
            None => parent.children.iter().next(),
        };

        let mut next = self.clone();
        let displaced = match displaced_root {
            Some(old) => next.remove_subtree(old),
            None => Vec::new(),
        };

        let id = NodeId::fresh();
        next.nodes
            .insert(id, WorkflowNode::new(id, kind, Some(parent_id), "..."));
        next.attach(parent_id, choice, id);

        Ok(NodeAdded {
            workflow: next,
            id,
            displaced,
        })
    }

    /// Replaces one user-editable text field of a node, leaving every other
    /// node untouched.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::NodeNotFound`] if `id` is absent.
    pub fn update_field(
        &self,
        id: NodeId,
        field: NodeField,
        value: impl Into<String>,
    ) -> Result<Workflow, WorkflowError> {
        if !self.nodes.contains_key(&id) {
            return Err(WorkflowError::NodeNotFound { id });
        }
        let mut next = self.clone();
        if let Some(node) = next.nodes.get_mut(&id) {
            match field {
                NodeField::Label => node.label = value.into(),
                NodeField::Notes => node.notes = value.into(),
            }
        }
        Ok(next)
    }

    /// Deletes a node and its entire subtree, detaching the link from the
    /// parent slot that held it.
    ///
    /// Deletion is always "delete subtree": every descendant is removed from
    /// the map in the same step, so no orphans remain. If the target's
    /// parent link turns out to be stale (no live slot holds the id), the
    /// subtree is still removed and the outcome is flagged
    /// [`Deletion::dangling`].
    ///
    /// # Errors
    ///
    /// [`WorkflowError::CannotDeleteRoot`] when targeting the root (checked
    /// first), or [`WorkflowError::NodeNotFound`] if `id` is absent.
    pub fn delete_node(&self, id: NodeId) -> Result<Deletion, WorkflowError> {
        if id == self.root_id {
            return Err(WorkflowError::CannotDeleteRoot);
        }
        let node = self
            .nodes
            .get(&id)
            .ok_or(WorkflowError::NodeNotFound { id })?;

        let dangling = match node.parent.and_then(|p| self.nodes.get(&p)) {
            Some(parent) => !parent.children.contains(id),
            None => true,
        };
        if dangling {
            warn!(node = %id, "removing node with no live parent link");
        }

        let mut next = self.clone();
        let removed = next.remove_subtree(id);
        Ok(Deletion {
            workflow: next,
            removed,
            dangling,
        })
    }

    /// Detaches `id` from its parent slot and removes it plus all of its
    /// descendants from the map. Returns the removed ids.
    fn remove_subtree(&mut self, id: NodeId) -> Vec<NodeId> {
        if let Some(parent_id) = self.nodes.get(&id).and_then(|node| node.parent)
            && let Some(parent) = self.nodes.get_mut(&parent_id)
        {
            parent.children.release(id);
        }

        let mut removed = Vec::new();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                pending.extend(node.children.iter());
                removed.push(current);
            }
        }
        removed
    }

    /// Points the chosen slot of `parent_id` at `id`. The caller has already
    /// verified the parent exists and that `choice` matches its slot layout.
    fn attach(&mut self, parent_id: NodeId, choice: Option<BranchSlot>, id: NodeId) {
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            match (&mut parent.children, choice) {
                (ChildSlots::Single(slot), None) => *slot = Some(id),
                (ChildSlots::Pair(slots), Some(branch)) => slots[branch.index()] = Some(id),
                (_, _) => debug_assert!(false, "slot choice does not match parent layout"),
            }
        }
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}
