use super::ast::{node::NodeId, tree::Ast};

/// An iterator that iteratively traverses a tree in left-to-right post-order (i.e. depth-first),
/// yielding the id of each node after the ids of its children.
///
/// This iterator is created by [`Ast::post_order_iter`].
pub struct PostOrderIter<'a> {
    ast: &'a Ast,
    stack: Vec<NodeId>,
    last_visited: Option<NodeId>,
}

impl<'a> PostOrderIter<'a> {
    /// Creates a new iterator that traverses the subtree rooted at `root` in left-to-right
    /// post-order. With no root, the iterator is empty.
    pub fn new(ast: &'a Ast, root: Option<NodeId>) -> Self {
        Self {
            ast,
            stack: root.into_iter().collect(),
            last_visited: None,
        }
    }

    /// Pops the current node in the stack and marks it as the last visited node.
    fn visit(&mut self) -> Option<NodeId> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }
}

impl Iterator for PostOrderIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = *self.stack.last()?;
            let (left, right) = (self.ast.left(id), self.ast.right(id));

            // the last child to be visited is the right one if it exists
            let last_child = right.or(left);
            match last_child {
                Some(child) if self.last_visited != Some(child) => {
                    self.stack.extend(right);
                    self.stack.extend(left);
                },
                _ => return self.visit(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::parser::ast::node::{NodeKind, Op};
    use super::*;

    #[test]
    fn children_before_parents() {
        // (x + 2) * -a
        let mut ast = Ast::new();
        let x = ast.leaf(NodeKind::Variable, 0..0);
        let two = ast.leaf(NodeKind::Integer(2), 0..0);
        let sum = ast.binary(Op::Add, x, two, 0..0);
        let a = ast.leaf(NodeKind::Parameter(0), 0..0);
        let neg = ast.unary(Op::Sub, a, 0..0);
        let product = ast.binary(Op::Mul, sum, neg, 0..0);
        ast.set_root(product);

        let order = ast.post_order_iter().collect::<Vec<_>>();
        assert_eq!(order, vec![x, two, sum, a, neg, product]);
    }

    #[test]
    fn single_leaf() {
        let mut ast = Ast::new();
        let x = ast.leaf(NodeKind::Variable, 0..0);
        ast.set_root(x);
        assert_eq!(ast.post_order_iter().collect::<Vec<_>>(), vec![x]);
    }
}
