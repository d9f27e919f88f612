//! Node records and child-slot structure for the workflow tree.
//!
//! A [`WorkflowNode`] is the atomic unit of a workflow: a typed record with a
//! user-editable label and notes, a back-reference to its parent, and a
//! [`ChildSlots`] value holding its outgoing child links.
//!
//! `ChildSlots` is deliberately a tagged structure rather than a generic
//! vector: a branch node always carries exactly two positional slots and a
//! terminal node carries none, so the arity invariants cannot be violated by
//! construction.
//!
//! # Examples
//!
//! ```rust
//! use flowtree::node::ChildSlots;
//! use flowtree::types::{BranchSlot, NodeId};
//!
//! let child = NodeId::fresh();
//! let slots = ChildSlots::Pair([Some(child), None]);
//!
//! assert_eq!(slots.occupied(), 1);
//! assert_eq!(slots.get(BranchSlot::True), Some(child));
//! assert_eq!(slots.first_empty(), Some(BranchSlot::False));
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{BranchSlot, NodeId, NodeType};

/// The outgoing child links of a node, shaped by the node's type.
///
/// - `Terminal`: end nodes; no child capacity at all.
/// - `Single`: start/action nodes; one slot that is either empty or holds
///   the single successor.
/// - `Pair`: branch nodes; exactly two positional slots, True at index 0 and
///   False at index 1, each independently empty or occupied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChildSlots {
    /// No slots. The node can never have children.
    Terminal,
    /// A single successor slot.
    Single(Option<NodeId>),
    /// The fixed True/False slot pair of a branch node.
    Pair([Option<NodeId>; 2]),
}

impl ChildSlots {
    /// The empty slot layout a freshly created node of `kind` starts with.
    pub(crate) fn for_kind(kind: NodeType) -> Self {
        match kind {
            NodeType::End => ChildSlots::Terminal,
            NodeType::Branch => ChildSlots::Pair([None, None]),
            NodeType::Start | NodeType::Action => ChildSlots::Single(None),
        }
    }

    /// Iterates over the occupied slots, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        let slots: &[Option<NodeId>] = match self {
            ChildSlots::Terminal => &[],
            ChildSlots::Single(slot) => std::slice::from_ref(slot),
            ChildSlots::Pair(slots) => slots,
        };
        slots.iter().filter_map(|slot| *slot)
    }

    /// Returns `true` if any slot holds `id`.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.iter().any(|child| child == id)
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.iter().count()
    }

    /// The occupant of a positional branch slot. Always `None` for
    /// non-branch layouts.
    #[must_use]
    pub fn get(&self, slot: BranchSlot) -> Option<NodeId> {
        match self {
            ChildSlots::Pair(slots) => slots[slot.index()],
            _ => None,
        }
    }

    /// First empty positional slot of a branch, scanning True then False.
    /// `None` when both are occupied or the layout is not a pair.
    #[must_use]
    pub fn first_empty(&self) -> Option<BranchSlot> {
        match self {
            ChildSlots::Pair([None, _]) => Some(BranchSlot::True),
            ChildSlots::Pair([_, None]) => Some(BranchSlot::False),
            _ => None,
        }
    }

    /// Empties whichever slot holds `id`. Returns `true` if a slot was
    /// released.
    pub(crate) fn release(&mut self, id: NodeId) -> bool {
        match self {
            ChildSlots::Terminal => false,
            ChildSlots::Single(slot) => {
                if *slot == Some(id) {
                    *slot = None;
                    true
                } else {
                    false
                }
            }
            ChildSlots::Pair(slots) => {
                let mut released = false;
                for slot in slots.iter_mut() {
                    if *slot == Some(id) {
                        *slot = None;
                        released = true;
                    }
                }
                released
            }
        }
    }
}

/// A single node of the workflow tree.
///
/// The `kind` is fixed at creation; `label` and `notes` are the two
/// independently user-editable text fields. `parent` is a non-owning
/// back-reference maintained by the workflow operations (only the root has
/// `None`), which makes parent lookup O(1) instead of a scan over the map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// Unique, immutable identifier.
    pub id: NodeId,
    /// Node classification, fixed at creation.
    pub kind: NodeType,
    /// User-editable display label.
    pub label: String,
    /// User-editable free-text annotation.
    pub notes: String,
    /// Back-reference to the node whose slot holds this id. `None` only for
    /// the root.
    pub parent: Option<NodeId>,
    /// Outgoing child links, shaped by `kind`.
    pub children: ChildSlots,
}

impl WorkflowNode {
    /// Creates a node of `kind` with empty notes and the empty slot layout
    /// for that kind.
    pub(crate) fn new(
        id: NodeId,
        kind: NodeType,
        parent: Option<NodeId>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            notes: String::new(),
            parent,
            children: ChildSlots::for_kind(kind),
        }
    }
}
