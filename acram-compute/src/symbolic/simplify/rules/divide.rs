//! Simplification rules for division.

use acram_parser::parser::ast::{node::{NodeKind, Op}, tree::Ast, NodeId};
use crate::symbolic::{simplify::{rules::do_binary, step::Step}, step_collector::StepCollector};

/// `0/a = 0`
pub fn divide_zero(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    let (lhs, _) = do_binary(ast, id, Op::Div)?;
    if !ast.is_zero(lhs) {
        return None;
    }

    ast.make_leaf(id, NodeKind::Integer(0));
    step_collector.push(Step::DivideZero);
    Some(())
}

/// `a/1 = a`
pub fn divide_one(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    let (lhs, rhs) = do_binary(ast, id, Op::Div)?;
    if !ast.is_one(rhs) {
        return None;
    }

    ast.hoist(id, lhs);
    step_collector.push(Step::DivideOne);
    Some(())
}

/// Applies all division rules.
pub fn all(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    divide_zero(ast, id, step_collector)
        .or_else(|| divide_one(ast, id, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::simplify::tests::simplified;

    #[test]
    fn zero_numerator() {
        assert_eq!(simplified("f(x) = 0 / (x + 1)"), "0");
    }

    #[test]
    fn unit_denominator() {
        assert_eq!(simplified("f(x) = sin(x) / 1"), "sin(x)");
        assert_eq!(simplified("f(x) = x / (2 - 1)"), "x");
    }
}
