#![allow(dead_code)]

use rustc_hash::{FxHashMap, FxHashSet};

use flowtree::node::ChildSlots;
use flowtree::types::{NodeId, NodeType};
use flowtree::workflow::Workflow;

/// Checks every structural invariant of a workflow snapshot: rooted at a
/// start node, tree-shaped (single holder per id, no cycles), resolvable
/// child references with agreeing parent back-references, per-kind slot
/// layouts, and no orphans outside the root's reachable set.
pub fn assert_tree_invariants(wf: &Workflow) {
    let root = wf.get(wf.root_id()).expect("root exists in the map");
    assert!(root.kind.is_start(), "root must be a start node");
    assert_eq!(root.parent, None, "root has no parent");

    let mut holders: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    for node in wf.iter() {
        for child in node.children.iter() {
            if let Some(other) = holders.insert(child, node.id) {
                panic!("child {child} held by both {other} and {}", node.id);
            }
            let child_node = wf
                .get(child)
                .unwrap_or_else(|| panic!("slot of {} points at missing node {child}", node.id));
            assert_eq!(
                child_node.parent,
                Some(node.id),
                "parent back-reference of {child} disagrees with its slot holder"
            );
        }
    }

    let mut seen: FxHashSet<NodeId> = FxHashSet::default();
    let mut pending = vec![wf.root_id()];
    while let Some(id) = pending.pop() {
        assert!(seen.insert(id), "cycle reached {id} twice");
        let node = wf.get(id).expect("reachable node exists");
        pending.extend(node.children.iter());
    }
    assert_eq!(
        seen.len(),
        wf.len(),
        "map contains nodes unreachable from the root"
    );

    for node in wf.iter() {
        match (node.kind, &node.children) {
            (NodeType::Branch, ChildSlots::Pair(_)) => {}
            (NodeType::End, ChildSlots::Terminal) => {}
            (NodeType::Start | NodeType::Action, ChildSlots::Single(_)) => {}
            (kind, slots) => panic!("node {} of kind {kind} has slot layout {slots:?}", node.id),
        }
    }
}
