//! Module to simplify expression trees.
//!
//! Simplification is a single post-order pass over the tree: every operator node is visited after
//! both of its operands have been simplified. If both operands of an arithmetic node are integer
//! literals, the node is folded into its value (see [`fold`]), or left as it is when the value is
//! not an exact integer. Otherwise, the rules for the node's operator (see [`rules`]) are tried in
//! order until one applies.
//!
//! All rewrites happen in place. A rewritten node keeps its position in the tree, so the
//! simplified tree shares no nodes with anything else and needs no relinking by the caller.
//!
//! Simplification is idempotent: simplifying an already simplified tree leaves it unchanged.

pub mod fold;
pub mod rules;
pub mod step;

use acram_parser::parser::ast::{function::Function, node::Op, tree::Ast, NodeId};
use crate::symbolic::step_collector::{StepCollector, Traced};
use log::debug;
use step::Step;

/// Simplifies a single node whose operands are already simplified.
fn simplify_node(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) {
    if ast.op(id).is_none() {
        return;
    }

    // arithmetic on two integer literals is either folded or left exactly as written
    if fold::fold_constants(ast, id, step_collector).is_some() || ast.is_calculable(id) {
        return;
    }

    let was_product = ast.op(id) == Some(Op::Mul);
    if rules::all(ast, id, step_collector).is_some() && was_product && ast.op(id) == Some(Op::Div) {
        // a product fused with a reciprocal is now a quotient, which may simplify further
        simplify_node(ast, id, step_collector);
    }
}

/// Simplifies the given tree in place, reporting every applied rule to the step collector.
pub fn simplify_ast(ast: &mut Ast, step_collector: &mut dyn StepCollector<Step>) {
    // rules only release nodes that were already visited, so the order stays valid
    let order = ast.post_order_iter().collect::<Vec<_>>();
    let mut step_collector = Traced(step_collector);
    for id in order {
        simplify_node(ast, id, &mut step_collector);
    }
}

/// Simplifies the body of the function in place.
pub fn simplify(function: &mut Function) {
    simplify_ast(&mut function.ast, &mut ());
    debug!("simplified `{}` to {} node(s)", function.name, function.ast.len());
}

/// Simplifies the body of the function in place, and returns the steps taken, in the order they
/// were applied.
pub fn simplify_with_steps(function: &mut Function) -> Vec<Step> {
    let mut steps = Vec::new();
    simplify_ast(&mut function.ast, &mut steps);
    debug!("simplified `{}` in {} step(s)", function.name, steps.len());
    steps
}

#[cfg(test)]
pub(crate) mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use acram_parser::parser::parse_function;

    /// Parses and simplifies the function, returning the simplified body.
    pub(crate) fn simplified(source: &str) -> String {
        let mut function = parse_function(source).unwrap();
        simplify(&mut function);
        function.to_str()
    }

    #[test]
    fn constant_folding() {
        assert_eq!(simplified("f(x) = 2 + 3*4"), "14");
        assert_eq!(simplified("f(x) = 2 - 5"), "-3");
        assert_eq!(simplified("f(x) = 7/2"), "7/2");
        assert_eq!(simplified("f(x) = x * (6/3)"), "x*2");
        assert_eq!(simplified("f(x) = 9223372036854775807 + 1"), "9223372036854775807+1");
    }

    #[test]
    fn unfoldable_literals_are_left_alone() {
        let mut function = parse_function("f(x) = 0/0 + 7/2 + 0*x").unwrap();
        let steps = simplify_with_steps(&mut function);
        assert_eq!(steps, vec![Step::MultiplyZero, Step::AddZero]);
        assert_eq!(function.to_str(), "0/0+7/2");
    }

    #[test]
    fn fractions_are_not_folded() {
        assert_eq!(simplified("f(x) = 1.5 + 2"), "1.5+2");
    }

    #[test]
    fn nested_rewrites() {
        assert_eq!(simplified("f(x) = (x + 0) * 1"), "x");
        assert_eq!(simplified("f(x) = (x - 0)^(2 - 1) + 0*y"), "x");
        assert_eq!(simplified("f(x) = sin(0 + x*1)"), "sin(x)");
    }

    #[test]
    fn steps_in_order() {
        let mut function = parse_function("f(x) = x*1 + (2 + x)*0").unwrap();
        let steps = simplify_with_steps(&mut function);
        assert_eq!(steps, vec![Step::MultiplyOne, Step::MultiplyZero, Step::AddZero]);
        assert_eq!(function.to_str(), "x");
    }

    #[test]
    fn fusion_then_folding() {
        let mut function = parse_function("f(x) = (1/2) * 8").unwrap();
        let steps = simplify_with_steps(&mut function);
        assert_eq!(steps, vec![Step::MultiplyReciprocal, Step::FoldConstants]);
        assert_eq!(function.to_str(), "4");
    }

    #[test]
    fn idempotent() {
        for source in [
            "f(x) = a*x^2 + b*x + c",
            "f(x) = (1/3) * x + 0",
            "f(x) = -(0 - x) / (x - 0)",
            "f(x) = sin(x)^1 * (1/cos(x))",
        ] {
            let mut once = parse_function(source).unwrap();
            simplify(&mut once);
            let mut twice = once.clone();
            let steps = simplify_with_steps(&mut twice);
            assert_eq!(steps, vec![]);
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn released_nodes() {
        let mut function = parse_function("f(x) = (x + 0) * 1").unwrap();
        assert_eq!(function.ast.len(), 5);
        simplify(&mut function);
        assert_eq!(function.ast.len(), 1);
    }
}
