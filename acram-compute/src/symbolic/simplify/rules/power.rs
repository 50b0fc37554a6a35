//! Simplification rules for powers.

use acram_parser::parser::ast::{node::{NodeKind, Op}, tree::Ast, NodeId};
use crate::symbolic::{simplify::{rules::do_binary, step::Step}, step_collector::StepCollector};

/// `a^0 = 1`
///
/// `0^0` is also rewritten to `1`; the semantic check rejects it in parsed functions.
pub fn power_zero(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    let (_, rhs) = do_binary(ast, id, Op::Pwr)?;
    if !ast.is_zero(rhs) {
        return None;
    }

    ast.make_leaf(id, NodeKind::Integer(1));
    step_collector.push(Step::PowerZero);
    Some(())
}

/// `a^1 = a`
pub fn power_one(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    let (lhs, rhs) = do_binary(ast, id, Op::Pwr)?;
    if !ast.is_one(rhs) {
        return None;
    }

    ast.hoist(id, lhs);
    step_collector.push(Step::PowerOne);
    Some(())
}

/// Applies all power rules.
pub fn all(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    power_zero(ast, id, step_collector)
        .or_else(|| power_one(ast, id, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::simplify::tests::simplified;

    #[test]
    fn zero_exponent() {
        assert_eq!(simplified("f(x) = (x + 1)^0"), "1");
        assert_eq!(simplified("f(x) = 0^0"), "1");
        assert_eq!(simplified("f(x) = x^(1 - 1)"), "1");
    }

    #[test]
    fn unit_exponent() {
        assert_eq!(simplified("f(x) = sin(x)^1"), "sin(x)");
        assert_eq!(simplified("f(x) = x^(3 - 2)"), "x");
    }

    #[test]
    fn other_powers_are_kept() {
        assert_eq!(simplified("f(x) = 2^3"), "2^3");
        assert_eq!(simplified("f(x) = 1^x"), "1^x");
    }
}
