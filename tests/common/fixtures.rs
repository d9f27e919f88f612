#![allow(dead_code)]

use flowtree::editor::WorkflowEditor;
use flowtree::types::{BranchSlot, NodeId, NodeType};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Start -> Action.
pub fn editor_with_action() -> (WorkflowEditor, NodeId) {
    let mut editor = WorkflowEditor::new();
    let root = editor.workflow().root_id();
    let action = editor
        .add_node(root, NodeType::Action, None)
        .expect("add action under start");
    (editor, action)
}

/// Start -> Action -> Branch, both branch slots empty.
pub fn editor_with_branch() -> (WorkflowEditor, NodeId, NodeId) {
    let (mut editor, action) = editor_with_action();
    let branch = editor
        .add_node(action, NodeType::Branch, None)
        .expect("add branch under action");
    (editor, action, branch)
}

/// A fully wired workflow:
/// Start -> Action -> Branch -> (Action | End).
pub struct CompleteFixture {
    pub editor: WorkflowEditor,
    pub action: NodeId,
    pub branch: NodeId,
    pub true_child: NodeId,
    pub false_child: NodeId,
}

pub fn complete_editor() -> CompleteFixture {
    let (mut editor, action, branch) = editor_with_branch();
    let true_child = editor
        .add_node(branch, NodeType::Action, Some(BranchSlot::True))
        .expect("fill True slot");
    let false_child = editor
        .add_node(branch, NodeType::End, Some(BranchSlot::False))
        .expect("fill False slot");
    CompleteFixture {
        editor,
        action,
        branch,
        true_child,
        false_child,
    }
}
