//! Search tree nodes and the arena that owns expanded ones

use std::hash::{Hash, Hasher};

use crate::state::{Action, State};

/// Index of a node stored in a [`SearchTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node of the search tree.
///
/// Two nodes are equal when they wrap the same state, whatever their
/// estimate or the path that produced them.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    state: State,
    estimate: u32,
    parent: Option<NodeId>,
    action: Option<Action>,
}

impl Node {
    pub fn root(state: State, estimate: u32) -> Self {
        Self {
            state,
            estimate,
            parent: None,
            action: None,
        }
    }

    pub fn child(state: State, estimate: u32, parent: NodeId, action: Action) -> Self {
        Self {
            state,
            estimate,
            parent: Some(parent),
            action: Some(action),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn estimate(&self) -> u32 {
        self.estimate
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn action(&self) -> Option<Action> {
        self.action
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

/// Arena of expanded nodes. Children refer to their parent by [`NodeId`],
/// so the tree is only ever walked from a leaf back to the root.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `(action, state)` pairs from the root down to `leaf`
    pub fn path_to(&self, leaf: &Node) -> Vec<(Option<Action>, State)> {
        let mut path = vec![(leaf.action, leaf.state)];
        let mut parent = leaf.parent;

        while let Some(id) = parent {
            let node = self.get(id);
            path.push((node.action, node.state));
            parent = node.parent;
        }

        path.reverse();
        path
    }
}
