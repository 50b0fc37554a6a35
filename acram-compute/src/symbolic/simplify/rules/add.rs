//! Simplification rules for addition.

use acram_parser::parser::ast::{node::Op, tree::Ast, NodeId};
use crate::symbolic::{simplify::{rules::do_binary, step::Step}, step_collector::StepCollector};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    let (lhs, rhs) = do_binary(ast, id, Op::Add)?;
    let keep = if ast.is_zero(lhs) {
        rhs
    } else if ast.is_zero(rhs) {
        lhs
    } else {
        return None;
    };

    ast.hoist(id, keep);
    step_collector.push(Step::AddZero);
    Some(())
}

/// Applies all addition rules.
pub fn all(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    add_zero(ast, id, step_collector)
}
