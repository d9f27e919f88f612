//! Linear undo/redo history over workflow snapshots.
//!
//! [`History`] is the exclusive owner of three snapshot sequences: the undo
//! stack (`past`), the single current snapshot (`present`), and the redo
//! stack (`future`). Because [`Workflow`] operations return fresh values and
//! never mutate published snapshots, history can hold plain clones and hand
//! out references without any copy-on-read.
//!
//! The history is linear, not a tree: committing a new edit discards the
//! entire redo stack. Depth is unbounded; there is no eviction.
//!
//! # Examples
//!
//! ```rust
//! use flowtree::history::History;
//! use flowtree::types::NodeType;
//! use flowtree::workflow::Workflow;
//!
//! let wf = Workflow::new();
//! let mut history = History::new(wf.clone());
//!
//! let added = wf.add_node(wf.root_id(), NodeType::Action, None)?;
//! history.commit(added.workflow);
//! assert_eq!(history.present().len(), 2);
//!
//! assert!(history.undo());
//! assert_eq!(history.present().len(), 1);
//!
//! assert!(history.redo());
//! assert_eq!(history.present().len(), 2);
//! # Ok::<(), flowtree::workflow::WorkflowError>(())
//! ```

use tracing::debug;

use crate::workflow::Workflow;

/// Undo/redo state machine over immutable workflow snapshots.
///
/// Both stacks keep their boundary-nearest snapshot at the end of the
/// vector, so every transition is a push/pop pair.
#[derive(Clone, Debug)]
pub struct History {
    past: Vec<Workflow>,
    present: Workflow,
    future: Vec<Workflow>,
}

impl History {
    /// Starts a history at `initial` with empty undo and redo stacks.
    #[must_use]
    pub fn new(initial: Workflow) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: Vec::new(),
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn present(&self) -> &Workflow {
        &self.present
    }

    /// Number of snapshots available to undo.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of snapshots available to redo.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Returns `true` if at least one undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Returns `true` if at least one redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Makes `next` the present snapshot, pushing the previous present onto
    /// the undo stack and discarding the redo stack.
    ///
    /// This is the only way forward progress happens; it must only be called
    /// with the result of a successful workflow operation.
    pub fn commit(&mut self, next: Workflow) {
        debug!(
            nodes = next.len(),
            undo_depth = self.past.len() + 1,
            discarded_redo = self.future.len(),
            "commit"
        );
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push(previous);
        self.future.clear();
    }

    /// Steps back one snapshot. No-op at the boundary: returns `false` when
    /// the undo stack is empty, `true` after moving.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push(current);
        debug!(
            undo_depth = self.past.len(),
            redo_depth = self.future.len(),
            "undo"
        );
        true
    }

    /// Steps forward one snapshot. No-op at the boundary: returns `false`
    /// when the redo stack is empty, `true` after moving.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        debug!(
            undo_depth = self.past.len(),
            redo_depth = self.future.len(),
            "redo"
        );
        true
    }
}
