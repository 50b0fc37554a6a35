//! Derivatives of the named functions, without the chain rule factor.

use acram_parser::parser::ast::{node::Op, NodeId};
use super::Differentiator;

impl Differentiator<'_> {
    /// Builds `-node`.
    fn negate(&mut self, node: NodeId) -> NodeId {
        self.unary(Op::Sub, node)
    }

    /// Builds `1/node`.
    fn reciprocal(&mut self, node: NodeId) -> NodeId {
        let one = self.int(1);
        self.binary(Op::Div, one, node)
    }

    /// Builds `v^2` from a copy of the source subtree `v`.
    fn square(&mut self, v: NodeId) -> NodeId {
        let (cv, two) = (self.copy(v), self.int(2));
        self.binary(Op::Pwr, cv, two)
    }

    /// Builds `f(v)^2` from a copy of the source subtree `v`.
    fn square_of(&mut self, f: Op, v: NodeId) -> NodeId {
        let cv = self.copy(v);
        let call = self.unary(f, cv);
        let two = self.int(2);
        self.binary(Op::Pwr, call, two)
    }

    /// Builds `1 - v^2`.
    fn one_minus_square(&mut self, v: NodeId) -> NodeId {
        let one = self.int(1);
        let square = self.square(v);
        self.binary(Op::Sub, one, square)
    }

    /// Builds `1 + v^2`.
    fn one_plus_square(&mut self, v: NodeId) -> NodeId {
        let one = self.int(1);
        let square = self.square(v);
        self.binary(Op::Add, one, square)
    }

    /// Returns the derivative of the named function `op` evaluated at its argument `v`, where
    /// `id` is the call node in the source tree. The caller multiplies the result by the
    /// derivative of the argument.
    ///
    /// Returns [`None`] if `op` is not a named function. The logarithm is handled by the caller.
    pub(super) fn outer_derivative(&mut self, op: Op, id: NodeId, v: NodeId) -> Option<NodeId> {
        Some(match op {
            // 1 / (2 * sqrt(v))
            Op::Sqrt => {
                let (two, root) = (self.int(2), self.copy(id));
                let denominator = self.binary(Op::Mul, two, root);
                self.reciprocal(denominator)
            },
            // exp(v)
            Op::Exp => self.copy(id),
            // cos(v)
            Op::Sin => {
                let cv = self.copy(v);
                self.unary(Op::Cos, cv)
            },
            // -sin(v)
            Op::Cos => {
                let cv = self.copy(v);
                let sin = self.unary(Op::Sin, cv);
                self.negate(sin)
            },
            // 1 / cos(v)^2
            Op::Tan => {
                let square = self.square_of(Op::Cos, v);
                self.reciprocal(square)
            },
            // -(1 / sin(v)^2)
            Op::Cot => {
                let square = self.square_of(Op::Sin, v);
                let reciprocal = self.reciprocal(square);
                self.negate(reciprocal)
            },
            // 1 / sqrt(1 - v^2)
            Op::Asin => {
                let radicand = self.one_minus_square(v);
                let root = self.unary(Op::Sqrt, radicand);
                self.reciprocal(root)
            },
            // -(1 / sqrt(1 - v^2))
            Op::Acos => {
                let radicand = self.one_minus_square(v);
                let root = self.unary(Op::Sqrt, radicand);
                let reciprocal = self.reciprocal(root);
                self.negate(reciprocal)
            },
            // 1 / (1 + v^2)
            Op::Atan => {
                let denominator = self.one_plus_square(v);
                self.reciprocal(denominator)
            },
            // -(1 / (1 + v^2))
            Op::Acot => {
                let denominator = self.one_plus_square(v);
                let reciprocal = self.reciprocal(denominator);
                self.negate(reciprocal)
            },
            Op::Log | Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Pwr => return None,
        })
    }
}
