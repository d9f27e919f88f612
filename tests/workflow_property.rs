mod common;

use common::*;
use proptest::prelude::*;

use flowtree::editor::WorkflowEditor;
use flowtree::types::{BranchSlot, NodeField, NodeId, NodeType};

// Abstract edit commands; node targets are picked by index into the sorted
// id list of the present snapshot so every generated op is applicable to
// whatever tree the previous ops produced.
#[derive(Clone, Debug)]
enum Op {
    Add {
        parent_pick: usize,
        kind: NodeType,
        slot: Option<BranchSlot>,
    },
    Update {
        pick: usize,
        field: NodeField,
        value: String,
    },
    Delete {
        pick: usize,
    },
    Undo,
    Redo,
}

fn kind_strategy() -> impl Strategy<Value = NodeType> {
    prop_oneof![
        Just(NodeType::Action),
        Just(NodeType::Branch),
        Just(NodeType::End),
    ]
}

fn slot_strategy() -> impl Strategy<Value = Option<BranchSlot>> {
    prop_oneof![
        Just(None),
        Just(Some(BranchSlot::True)),
        Just(Some(BranchSlot::False)),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (any::<usize>(), kind_strategy(), slot_strategy()).prop_map(
            |(parent_pick, kind, slot)| Op::Add {
                parent_pick,
                kind,
                slot,
            }
        ),
        2 => (
            any::<usize>(),
            prop_oneof![Just(NodeField::Label), Just(NodeField::Notes)],
            "[a-z ]{0,12}",
        )
            .prop_map(|(pick, field, value)| Op::Update { pick, field, value }),
        2 => any::<usize>().prop_map(|pick| Op::Delete { pick }),
        1 => Just(Op::Undo),
        1 => Just(Op::Redo),
    ]
}

fn pick_node(editor: &WorkflowEditor, pick: usize) -> NodeId {
    let mut ids: Vec<NodeId> = editor.workflow().iter().map(|n| n.id).collect();
    ids.sort();
    ids[pick % ids.len()]
}

// Errors (occupied slots, terminal parents, root deletion) are expected
// outcomes of random targeting; the properties only require that state stays
// coherent either way.
fn apply(editor: &mut WorkflowEditor, op: &Op) {
    match op {
        Op::Add {
            parent_pick,
            kind,
            slot,
        } => {
            let parent = pick_node(editor, *parent_pick);
            let _ = editor.add_node(parent, *kind, *slot);
        }
        Op::Update { pick, field, value } => {
            let id = pick_node(editor, *pick);
            let _ = editor.update_field(id, *field, value.clone());
        }
        Op::Delete { pick } => {
            let id = pick_node(editor, *pick);
            let _ = editor.delete_node(id);
        }
        Op::Undo => {
            editor.undo();
        }
        Op::Redo => {
            editor.redo();
        }
    }
}

proptest! {
    // The structural invariants hold after every single operation of any
    // edit sequence, including interleaved undo/redo.
    #[test]
    fn prop_random_edit_sequences_preserve_tree_invariants(
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let mut editor = WorkflowEditor::new();
        for op in &ops {
            apply(&mut editor, op);
            assert_tree_invariants(editor.workflow());
        }
    }
}

proptest! {
    // Undo immediately followed by redo restores the present snapshot and
    // both stack depths, from any reachable history state.
    #[test]
    fn prop_undo_redo_round_trip(
        ops in prop::collection::vec(op_strategy(), 1..30),
    ) {
        let mut editor = WorkflowEditor::new();
        for op in &ops {
            apply(&mut editor, op);
        }
        prop_assume!(editor.history().can_undo());

        let present = editor.workflow().clone();
        let undo_depth = editor.history().undo_depth();
        let redo_depth = editor.history().redo_depth();

        prop_assert!(editor.undo());
        prop_assert!(editor.redo());

        prop_assert_eq!(editor.workflow(), &present);
        prop_assert_eq!(editor.history().undo_depth(), undo_depth);
        prop_assert_eq!(editor.history().redo_depth(), redo_depth);
    }
}

proptest! {
    // After any successful edit the redo stack is empty.
    #[test]
    fn prop_commits_invalidate_redo(
        ops in prop::collection::vec(op_strategy(), 1..30),
        kind in kind_strategy(),
    ) {
        let mut editor = WorkflowEditor::new();
        for op in &ops {
            apply(&mut editor, op);
        }

        let root = editor.workflow().root_id();
        if editor.add_node(root, kind, None).is_ok() {
            prop_assert!(!editor.history().can_redo());
        }
    }
}

proptest! {
    // Deleting any non-root node shrinks the map by exactly the size of the
    // subtree it roots, and every removed id really leaves the map.
    #[test]
    fn prop_delete_removes_exactly_the_subtree(
        ops in prop::collection::vec(op_strategy(), 1..30),
        pick in any::<usize>(),
    ) {
        let mut editor = WorkflowEditor::new();
        for op in &ops {
            apply(&mut editor, op);
        }
        prop_assume!(editor.workflow().len() > 1);

        // Pick among non-root nodes only.
        let mut ids: Vec<NodeId> = editor
            .workflow()
            .iter()
            .map(|n| n.id)
            .filter(|id| *id != editor.workflow().root_id())
            .collect();
        ids.sort();
        let target = ids[pick % ids.len()];

        let size_before = editor.workflow().len();
        let removed = editor.delete_node(target).unwrap();

        prop_assert_eq!(editor.workflow().len(), size_before - removed.len());
        for id in removed {
            prop_assert!(!editor.workflow().contains(id));
        }
        assert_tree_invariants(editor.workflow());
    }
}
