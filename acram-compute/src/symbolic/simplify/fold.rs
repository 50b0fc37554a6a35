//! Constant folding of arithmetic on integer literals.

use acram_parser::parser::ast::{node::{NodeKind, Op}, tree::Ast, NodeId};
use crate::symbolic::step_collector::StepCollector;
use super::step::Step;

/// Computes `lhs op rhs`. Returns [`None`] if the result overflows, or if it is a division that
/// does not come out even, which is left symbolic.
fn compute(op: Op, lhs: i64, rhs: i64) -> Option<i64> {
    match op {
        Op::Add => lhs.checked_add(rhs),
        Op::Sub => lhs.checked_sub(rhs),
        Op::Mul => lhs.checked_mul(rhs),
        Op::Div if lhs.checked_rem(rhs)? == 0 => lhs.checked_div(rhs),
        _ => None,
    }
}

/// `2+3 = 5`
/// `6/3 = 2`
///
/// Replaces an arithmetic node whose operands are both integer literals with the integer result.
pub fn fold_constants(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    if !ast.is_calculable(id) {
        return None;
    }

    let op = ast.op(id)?;
    let lhs = ast.kind(ast.left(id)?).as_integer()?;
    let rhs = ast.kind(ast.right(id)?).as_integer()?;
    let value = compute(op, lhs, rhs)?;

    ast.make_leaf(id, NodeKind::Integer(value));
    step_collector.push(Step::FoldConstants);
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_division_only() {
        assert_eq!(compute(Op::Div, 6, 3), Some(2));
        assert_eq!(compute(Op::Div, -6, 3), Some(-2));
        assert_eq!(compute(Op::Div, 7, 2), None);
        assert_eq!(compute(Op::Div, 7, 0), None);
        assert_eq!(compute(Op::Div, 0, 5), Some(0));
    }

    #[test]
    fn overflow_is_not_folded() {
        assert_eq!(compute(Op::Add, i64::MAX, 1), None);
        assert_eq!(compute(Op::Mul, i64::MIN, -1), None);
        assert_eq!(compute(Op::Div, i64::MIN, -1), None);
        assert_eq!(compute(Op::Sub, 2, 5), Some(-3));
    }
}
