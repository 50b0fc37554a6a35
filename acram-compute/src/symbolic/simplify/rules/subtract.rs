//! Simplification rules for subtraction and negation.

use acram_parser::parser::ast::{node::{NodeKind, Op}, tree::Ast, NodeId};
use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};

/// `0-a = -a`
/// `-0 = 0`
/// `a-0 = a`
pub fn subtract_zero(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    if ast.op(id) != Some(Op::Sub) {
        return None;
    }
    let rhs = ast.right(id)?;

    match ast.left(id) {
        Some(lhs) if ast.is_zero(lhs) => {
            ast.remove_left(id);
            step_collector.push(Step::SubtractFromZero);
        },
        None if ast.is_zero(rhs) => {
            ast.make_leaf(id, NodeKind::Integer(0));
            step_collector.push(Step::NegateZero);
        },
        Some(lhs) if ast.is_zero(rhs) => {
            ast.hoist(id, lhs);
            step_collector.push(Step::SubtractZero);
        },
        _ => return None,
    }

    Some(())
}

/// Applies all subtraction rules.
pub fn all(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    subtract_zero(ast, id, step_collector)
}
