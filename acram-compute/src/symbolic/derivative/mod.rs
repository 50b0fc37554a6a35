//! Symbolic differentiation with respect to a function's bound variable.

mod function;

use acram_parser::parser::ast::{function::Function, node::{NodeKind, Op}, tree::Ast, NodeId};
use log::debug;

/// Builds the derivative tree of a source tree.
///
/// Nodes of the derivative are allocated in a new tree; subtrees that appear unchanged in the
/// derivative are deep-copied from the source, which is never modified. Nodes created here do not
/// come from the source code, so they have an empty span.
struct Differentiator<'a> {
    src: &'a Ast,
    dst: Ast,
}

impl<'a> Differentiator<'a> {
    fn new(src: &'a Ast) -> Self {
        Self { src, dst: Ast::new() }
    }

    /// Copies a subtree of the source into the derivative tree.
    fn copy(&mut self, id: NodeId) -> NodeId {
        self.dst.copy_from(self.src, id)
    }

    fn int(&mut self, n: i64) -> NodeId {
        self.dst.leaf(NodeKind::Integer(n), 0..0)
    }

    fn binary(&mut self, op: Op, left: NodeId, right: NodeId) -> NodeId {
        self.dst.binary(op, left, right, 0..0)
    }

    fn unary(&mut self, op: Op, operand: NodeId) -> NodeId {
        self.dst.unary(op, operand, 0..0)
    }

    /// Returns the root of the derivative of the given source subtree.
    fn derive(&mut self, id: NodeId) -> NodeId {
        let op = match self.src.kind(id) {
            NodeKind::Variable => return self.int(1),
            NodeKind::Integer(_) | NodeKind::Fraction(_) | NodeKind::Parameter(_) => return self.int(0),
            NodeKind::Operator(op) => op,
        };

        match (op, self.src.left(id), self.src.right(id)) {
            // u' + v'
            (Op::Add, Some(u), Some(v)) => {
                let (du, dv) = (self.derive(u), self.derive(v));
                self.binary(Op::Add, du, dv)
            },
            // u' - v'
            (Op::Sub, Some(u), Some(v)) => {
                let (du, dv) = (self.derive(u), self.derive(v));
                self.binary(Op::Sub, du, dv)
            },
            // -v'
            (Op::Sub, None, Some(v)) => {
                let dv = self.derive(v);
                self.unary(Op::Sub, dv)
            },
            // u'*v + u*v'
            (Op::Mul, Some(u), Some(v)) => {
                let (du, cv) = (self.derive(u), self.copy(v));
                let lhs = self.binary(Op::Mul, du, cv);
                let (cu, dv) = (self.copy(u), self.derive(v));
                let rhs = self.binary(Op::Mul, cu, dv);
                self.binary(Op::Add, lhs, rhs)
            },
            // (u'*v - u*v') / v^2
            (Op::Div, Some(u), Some(v)) => {
                let (du, cv) = (self.derive(u), self.copy(v));
                let lhs = self.binary(Op::Mul, du, cv);
                let (cu, dv) = (self.copy(u), self.derive(v));
                let rhs = self.binary(Op::Mul, cu, dv);
                let numerator = self.binary(Op::Sub, lhs, rhs);

                let (cv, two) = (self.copy(v), self.int(2));
                let denominator = self.binary(Op::Pwr, cv, two);
                self.binary(Op::Div, numerator, denominator)
            },
            // u' * (v * u^(v-1)), treating the exponent as a constant
            (Op::Pwr, Some(u), Some(v)) => {
                let du = self.derive(u);
                let (cv, one) = (self.copy(v), self.int(1));
                let exponent = self.binary(Op::Sub, cv, one);
                let cu = self.copy(u);
                let power = self.binary(Op::Pwr, cu, exponent);
                let cv = self.copy(v);
                let factor = self.binary(Op::Mul, cv, power);
                self.binary(Op::Mul, du, factor)
            },
            // v' / v
            (Op::Log, None, Some(v)) => {
                let (dv, cv) = (self.derive(v), self.copy(v));
                self.binary(Op::Div, dv, cv)
            },
            (op, None, Some(v)) => match self.outer_derivative(op, id, v) {
                // chain rule: f'(v) * v'
                Some(outer) => {
                    let dv = self.derive(v);
                    self.binary(Op::Mul, outer, dv)
                },
                None => self.int(0),
            },
            // binary operators always have both operands
            _ => self.int(0),
        }
    }
}

/// Returns the derivative of the function with respect to its bound variable.
///
/// The derivative is a new function with its own tree. It shares the parameters and variable
/// name of the source function, and is named after it with a prime mark appended, so the
/// derivative of `f` is `f'`. The derivative is not simplified.
pub fn derivative(function: &Function) -> Function {
    let mut differentiator = Differentiator::new(&function.ast);
    let root = differentiator.derive(function.ast.root());
    let mut ast = differentiator.dst;
    ast.set_root(root);

    let derived = Function::new(
        function.derivative_name(),
        function.variable.clone(),
        function.params.clone(),
        ast,
    );
    debug!("differentiated `{}` into `{}` with {} node(s)", function.name, derived.name, derived.ast.len());
    derived
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use acram_parser::parser::parse_function;

    /// Differentiates the function, returning the derivative's unsimplified body.
    fn derive(source: &str) -> String {
        derivative(&parse_function(source).unwrap()).to_str()
    }

    #[test]
    fn leaves() {
        assert_eq!(derive("f(x) = x"), "1");
        assert_eq!(derive("f(x) = 5"), "0");
        assert_eq!(derive("f(x) = 2.5"), "0");
        assert_eq!(derive("f(x) = c"), "0");
        assert_eq!(derive("f(t) = x"), "0");
    }

    #[test]
    fn sums_and_negation() {
        assert_eq!(derive("f(x) = x + c"), "1+0");
        assert_eq!(derive("f(x) = x - 1"), "1-0");
        assert_eq!(derive("f(x) = -x"), "-1");
    }

    #[test]
    fn product_rule() {
        assert_eq!(derive("f(x) = a*x"), "0*x+a*1");
    }

    #[test]
    fn quotient_rule() {
        assert_eq!(derive("f(x) = 1/x"), "(0*x-1*1)/x^2");
    }

    #[test]
    fn constant_exponent_power_rule() {
        assert_eq!(derive("f(x) = x^3"), "1*3*x^3-1");
        assert_eq!(derive("f(x) = x^n"), "1*n*x^n-1");
    }

    #[test]
    fn logarithm() {
        assert_eq!(derive("f(x) = ln(x)"), "1/x");
    }

    #[test]
    fn source_is_untouched() {
        let function = parse_function("f(x) = a*x^2 + sin(x)").unwrap();
        let before = function.clone();
        let derived = derivative(&function);
        assert_eq!(function, before);
        assert_eq!(derived.name, "f'");
        assert_eq!(derived.variable, "x");
        assert_eq!(derived.params, function.params);
    }

    #[test]
    fn second_derivative_name() {
        let function = parse_function("f(x) = x").unwrap();
        assert_eq!(derivative(&derivative(&function)).name, "f''");
    }

    #[test]
    fn parent_links_are_consistent() {
        let derived = derivative(&parse_function("f(x) = x*sin(x)/exp(x)").unwrap());
        let ast = &derived.ast;
        for id in ast.post_order_iter() {
            for child in [ast.left(id), ast.right(id)].into_iter().flatten() {
                assert_eq!(ast.parent(child), Some(id));
            }
        }
        assert_eq!(ast.parent(ast.root()), None);
    }
}
