//! Unique-id tree
//!
//! An arena-backed tree whose node ids are unique across the whole tree,
//! not only among siblings. Nodes are addressed by `NodeId` (arena index);
//! each node stores its parent as an index, so there are no reference
//! cycles. The root is implicit and carries no data: top-level nodes have
//! no parent.
//!
//! Nodes can only be added under an existing node, so the structure is
//! acyclic by construction and every traversal terminates.

use std::collections::HashMap;

/// Arena index of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// What a visitor wants the traversal to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitControl {
    /// Descend into the children of the current node
    Continue,
    /// Do not visit the children, go on with the next sibling
    SkipChildren,
    /// Abort the whole traversal
    Stop,
}

/// Callbacks for a depth-first, pre-order traversal.
///
/// `depth` is 0 for top-level nodes.
pub trait TreeVisitor<T> {
    fn on_item_before_children(
        &mut self,
        tree: &UniqueIdTree<T>,
        node: NodeId,
        depth: usize,
    ) -> VisitControl;

    fn on_item_after_children(
        &mut self,
        _tree: &UniqueIdTree<T>,
        _node: NodeId,
        _depth: usize,
    ) -> VisitControl {
        VisitControl::Continue
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    id: String,
    data: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct UniqueIdTree<T> {
    slots: Vec<Slot<T>>,
    top_level: Vec<NodeId>,
    index: HashMap<String, NodeId>,
}

impl<T> Default for UniqueIdTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UniqueIdTree<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            top_level: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Number of nodes, the implicit root excluded
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Add `data` under `parent` (`None` = root).
    ///
    /// Returns `None` and leaves the tree unchanged if `id` is already used.
    pub fn create_child(
        &mut self,
        parent: Option<NodeId>,
        id: impl Into<String>,
        data: T,
    ) -> Option<NodeId> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return None;
        }

        let node = NodeId(self.slots.len());
        self.slots.push(Slot {
            id: id.clone(),
            data,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(parent) => self.slots[parent.0].children.push(node),
            None => self.top_level.push(node),
        }
        self.index.insert(id, node);
        Some(node)
    }

    pub fn node_with_id(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    // Accessors below index the arena directly. A `NodeId` is only ever
    // handed out by this tree, so an out-of-range id is a caller bug and
    // panics like slice indexing does.

    pub fn id(&self, node: NodeId) -> &str {
        &self.slots[node.0].id
    }

    pub fn data(&self, node: NodeId) -> &T {
        &self.slots[node.0].data
    }

    pub fn data_mut(&mut self, node: NodeId) -> &mut T {
        &mut self.slots[node.0].data
    }

    /// Swap the payload of a node, keeping its id and position
    pub fn replace_data(&mut self, node: NodeId, data: T) -> T {
        std::mem::replace(&mut self.slots[node.0].data, data)
    }

    /// Parent node, `None` for top-level nodes
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.slots[node.0].parent
    }

    /// Children of `parent`, or the top-level nodes for `None`
    pub fn children(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            Some(parent) => &self.slots[parent.0].children,
            None => &self.top_level,
        }
    }

    pub fn top_level(&self) -> &[NodeId] {
        &self.top_level
    }

    pub fn has_children(&self, node: NodeId) -> bool {
        !self.slots[node.0].children.is_empty()
    }

    pub fn depth(&self, node: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(node);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }

    /// True if `node` is `ancestor` or lies somewhere below it
    pub fn is_same_or_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            current = self.parent(candidate);
        }
        false
    }

    /// The top-level node whose subtree contains `node`
    pub fn top_level_ancestor(&self, node: NodeId) -> NodeId {
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    pub fn node(&self, node: NodeId) -> NodeRef<'_, T> {
        NodeRef { tree: self, node }
    }

    /// Depth-first, pre-order walk over all nodes
    pub fn visit<V: TreeVisitor<T>>(&self, visitor: &mut V) {
        for &node in &self.top_level {
            if self.visit_node(node, 0, visitor) == VisitControl::Stop {
                return;
            }
        }
    }

    fn visit_node<V: TreeVisitor<T>>(
        &self,
        node: NodeId,
        depth: usize,
        visitor: &mut V,
    ) -> VisitControl {
        match visitor.on_item_before_children(self, node, depth) {
            VisitControl::Stop => return VisitControl::Stop,
            VisitControl::SkipChildren => {}
            VisitControl::Continue => {
                for &child in &self.slots[node.0].children {
                    if self.visit_node(child, depth + 1, visitor) == VisitControl::Stop {
                        return VisitControl::Stop;
                    }
                }
            }
        }
        visitor.on_item_after_children(self, node, depth)
    }

    /// Pre-order iterator yielding each node with its depth
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            tree: self,
            stack: self.top_level.iter().rev().map(|&node| (node, 0)).collect(),
        }
    }
}

/// Iterator returned by [`UniqueIdTree::pre_order`]
pub struct PreOrder<'a, T> {
    tree: &'a UniqueIdTree<T>,
    stack: Vec<(NodeId, usize)>,
}

impl<T> Iterator for PreOrder<'_, T> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        self.stack.extend(
            self.tree.slots[node.0]
                .children
                .iter()
                .rev()
                .map(|&child| (child, depth + 1)),
        );
        Some((node, depth))
    }
}

/// Borrowed view of one node
pub struct NodeRef<'a, T> {
    tree: &'a UniqueIdTree<T>,
    node: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub fn node_id(&self) -> NodeId {
        self.node
    }

    pub fn id(&self) -> &'a str {
        self.tree.id(self.node)
    }

    pub fn data(&self) -> &'a T {
        self.tree.data(self.node)
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.tree.parent(self.node).map(|node| self.tree.node(node))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, T>> + 'a {
        let tree = self.tree;
        tree.children(Some(self.node))
            .iter()
            .map(move |&node| tree.node(node))
    }

    pub fn has_children(&self) -> bool {
        self.tree.has_children(self.node)
    }

    pub fn depth(&self) -> usize {
        self.tree.depth(self.node)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id())
            .field("data", self.data())
            .finish()
    }
}
