use crate::parser::iter::PostOrderIter;
use std::ops::{Index, Range};
use super::node::{Node, NodeId, NodeKind, Op};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An expression tree.
///
/// Nodes live in an arena owned by the tree and refer to each other through [`NodeId`] handles.
/// Children are owned by their parent; the `parent` link of a node is only used to walk upwards
/// and never owns anything. Removing a node from the tree releases its whole subtree, and the
/// released slots are reused by later allocations.
///
/// A tree built with [`Ast::new`] has no nodes. It iterates as empty and compares equal only to
/// other empty trees; [`Ast::set_root`] must be called before its root is inspected.
///
/// # Panics
///
/// Accessors that take a [`NodeId`] panic if the handle does not belong to this tree. In
/// particular, [`Ast::root`] of an empty tree is not a valid handle.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ast {
    /// Arena of nodes, including released ones.
    nodes: Vec<Node>,

    /// Released slots, available for reuse.
    free: Vec<NodeId>,

    /// The root of the tree.
    root: NodeId,
}

impl Ast {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the root of the tree.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Makes the given node the root of the tree.
    pub fn set_root(&mut self, id: NodeId) {
        self.nodes[id.0].parent = None;
        self.root = id;
    }

    /// Returns the number of nodes currently in use.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Returns true if no nodes are in use.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores a node in the arena, reusing a released slot if there is one.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            },
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            },
        }
    }

    /// Creates a leaf node.
    pub fn leaf(&mut self, kind: NodeKind, span: Range<usize>) -> NodeId {
        self.alloc(Node::new(kind, span))
    }

    /// Creates a binary operator node that owns the two given nodes.
    pub fn binary(&mut self, op: Op, left: NodeId, right: NodeId, span: Range<usize>) -> NodeId {
        let id = self.alloc(Node::new(NodeKind::Operator(op), span));
        self.link(id, Some(left), Some(right));
        id
    }

    /// Creates a unary-prefix operator node (a named function or unary negation) that owns the
    /// given operand as its right child.
    pub fn unary(&mut self, op: Op, operand: NodeId, span: Range<usize>) -> NodeId {
        let id = self.alloc(Node::new(NodeKind::Operator(op), span));
        self.link(id, None, Some(operand));
        id
    }

    /// Sets the children of `parent` and points their parent links back at it.
    fn link(&mut self, parent: NodeId, left: Option<NodeId>, right: Option<NodeId>) {
        self.nodes[parent.0].left = left;
        self.nodes[parent.0].right = right;
        for child in left.into_iter().chain(right) {
            self.nodes[child.0].parent = Some(parent);
        }
    }

    /// Returns the kind of the given node.
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.0].kind
    }

    /// Returns the operator of the given node, if it is an operator node.
    pub fn op(&self, id: NodeId) -> Option<Op> {
        self.nodes[id.0].kind.as_op()
    }

    /// Returns the left child of the given node.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].left
    }

    /// Returns the right child of the given node.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].right
    }

    /// Returns the parent of the given node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Returns true if the node is the left child of its parent.
    pub fn is_left_child(&self, id: NodeId) -> bool {
        self.parent(id).is_some_and(|parent| self.left(parent) == Some(id))
    }

    /// Returns true if the node is the right child of its parent.
    pub fn is_right_child(&self, id: NodeId) -> bool {
        self.parent(id).is_some_and(|parent| self.right(parent) == Some(id))
    }

    /// Returns an iterator over the node ids of the tree in left-to-right post-order.
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self, (!self.is_empty()).then_some(self.root))
    }

    /// Deep-copies the subtree of `src` rooted at `id` into this tree, returning the root of the
    /// copy. The copy is detached: its root has no parent.
    pub fn copy_from(&mut self, src: &Ast, id: NodeId) -> NodeId {
        let node = &src[id];
        let left = node.left.map(|left| self.copy_from(src, left));
        let right = node.right.map(|right| self.copy_from(src, right));
        let copy = self.alloc(Node::new(node.kind, node.span.clone()));
        self.link(copy, left, right);
        copy
    }

    /// Releases the given node and its whole subtree. The caller is responsible for clearing the
    /// parent's reference to it.
    pub fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let node = &mut self.nodes[id.0];
            stack.extend(node.left.take());
            stack.extend(node.right.take());
            node.parent = None;
            self.free.push(id);
        }
    }

    /// Turns the given node into a leaf of the given kind, releasing its children.
    pub fn make_leaf(&mut self, id: NodeId, kind: NodeKind) {
        let node = &mut self.nodes[id.0];
        let children = [node.left.take(), node.right.take()];
        node.kind = kind;
        for child in children.into_iter().flatten() {
            self.free_subtree(child);
        }
    }

    /// Replaces the node with one of its own children, in place: the node keeps its identity and
    /// position in the tree, but takes over the child's kind and children. The other child, if
    /// any, is released.
    pub fn hoist(&mut self, id: NodeId, child: NodeId) {
        let (left, right) = (self.left(id), self.right(id));
        debug_assert!(left == Some(child) || right == Some(child));
        let other = if left == Some(child) { right } else { left };
        if let Some(other) = other {
            self.free_subtree(other);
        }

        let Node { kind, left, right, span, .. } = self.nodes[child.0].clone();
        self.nodes[id.0].kind = kind;
        self.nodes[id.0].span = span;
        self.link(id, left, right);

        self.nodes[child.0].left = None;
        self.nodes[child.0].right = None;
        self.free_subtree(child);
    }

    /// Detaches the children of the node and returns them as `(left, right)`. The node is left
    /// without children, and the detached subtrees have no parent.
    pub fn take_children(&mut self, id: NodeId) -> (Option<NodeId>, Option<NodeId>) {
        let node = &mut self.nodes[id.0];
        let (left, right) = (node.left.take(), node.right.take());
        for child in left.into_iter().chain(right) {
            self.nodes[child.0].parent = None;
        }
        (left, right)
    }

    /// Releases the left child of the node, turning a binary `-` into unary negation.
    pub fn remove_left(&mut self, id: NodeId) {
        if let Some(left) = self.nodes[id.0].left.take() {
            self.free_subtree(left);
        }
    }

    /// Rewrites the node, in place, into an operator node with the given children. The children
    /// must already be detached from any other position in the tree.
    pub fn rewrite(&mut self, id: NodeId, op: Op, left: Option<NodeId>, right: Option<NodeId>) {
        self.nodes[id.0].kind = NodeKind::Operator(op);
        self.link(id, left, right);
    }

    /// Returns the priority class of the node. Leaves have priority `1`; operators use
    /// [`Op::priority`].
    pub fn priority(&self, id: NodeId) -> u8 {
        self.op(id).map_or(1, Op::priority)
    }

    /// Returns true if the node is the integer literal `0`.
    pub fn is_zero(&self, id: NodeId) -> bool {
        self.kind(id) == NodeKind::Integer(0)
    }

    /// Returns true if the node is the integer literal `1`.
    pub fn is_one(&self, id: NodeId) -> bool {
        self.kind(id) == NodeKind::Integer(1)
    }

    /// Returns true if the node is a negative integer literal, or the unary negation of a
    /// non-negative integer literal.
    pub fn is_negative(&self, id: NodeId) -> bool {
        match self.kind(id) {
            NodeKind::Integer(n) => n < 0,
            NodeKind::Operator(Op::Sub) if self.left(id).is_none() => self
                .right(id)
                .and_then(|operand| self.kind(operand).as_integer())
                .is_some_and(|n| n >= 0),
            _ => false,
        }
    }

    /// Returns true if the node is one of the operators `+`, `-`, `*`, `/`.
    pub fn is_arith(&self, id: NodeId) -> bool {
        self.op(id).is_some_and(Op::is_arith)
    }

    /// Returns true if the node is an arithmetic operator whose operands are both integer
    /// literals.
    pub fn is_calculable(&self, id: NodeId) -> bool {
        match (self.left(id), self.right(id)) {
            (Some(left), Some(right)) => self.is_arith(id)
                && self.kind(left).as_integer().is_some()
                && self.kind(right).as_integer().is_some(),
            _ => false,
        }
    }

    /// Returns true if the node must be wrapped in parentheses to be rendered correctly relative
    /// to its parent.
    pub fn need_parentheses(&self, id: NodeId) -> bool {
        let Some(parent) = self.parent(id) else {
            return false;
        };
        let parent_op = self.op(parent);

        if parent_op == Some(Op::Pwr) {
            if self.is_right_child(id) {
                return false;
            }

            // `(a^b)^c`
            if self.op(id) == Some(Op::Pwr) {
                return true;
            }
        }

        let (parent_priority, priority) = (self.priority(parent), self.priority(id));
        if parent_priority < priority {
            return true;
        }

        parent_priority == priority
            && self.is_right_child(id)
            && parent_op.is_some_and(|op| !op.is_commutative())
    }

    /// Returns true if the subtree of `self` rooted at `a` has the same shape and payloads as the
    /// subtree of `other` rooted at `b`.
    fn subtree_eq(&self, a: NodeId, other: &Ast, b: NodeId) -> bool {
        let children_eq = |x: Option<NodeId>, y: Option<NodeId>| match (x, y) {
            (Some(x), Some(y)) => self.subtree_eq(x, other, y),
            (None, None) => true,
            _ => false,
        };

        self.kind(a) == other.kind(b)
            && children_eq(self.left(a), other.left(b))
            && children_eq(self.right(a), other.right(b))
    }
}

impl Index<NodeId> for Ast {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

/// Trees are equal when their reachable structure is equal, regardless of how the nodes are laid
/// out in the arena.
impl PartialEq for Ast {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (false, false) => self.subtree_eq(self.root, other, other.root),
            (empty, other_empty) => empty == other_empty,
        }
    }
}
