//! Simplification rules for multiplication.

use acram_parser::parser::ast::{node::{NodeKind, Op}, tree::Ast, NodeId};
use crate::symbolic::{simplify::{rules::do_binary, step::Step}, step_collector::StepCollector};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    let (lhs, rhs) = do_binary(ast, id, Op::Mul)?;
    if !ast.is_zero(lhs) && !ast.is_zero(rhs) {
        return None;
    }

    ast.make_leaf(id, NodeKind::Integer(0));
    step_collector.push(Step::MultiplyZero);
    Some(())
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    let (lhs, rhs) = do_binary(ast, id, Op::Mul)?;
    let keep = if ast.is_one(lhs) {
        rhs
    } else if ast.is_one(rhs) {
        lhs
    } else {
        return None;
    };

    ast.hoist(id, keep);
    step_collector.push(Step::MultiplyOne);
    Some(())
}

/// Returns true if the node is `1/a`.
fn is_reciprocal(ast: &Ast, id: NodeId) -> bool {
    do_binary(ast, id, Op::Div).is_some_and(|(numerator, _)| ast.is_one(numerator))
}

/// `(1/a)*b = b/a`
/// `b*(1/a) = b/a`
///
/// The product node is rewritten into the quotient; the reciprocal node is removed from the tree.
pub fn multiply_reciprocal(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    let (lhs, rhs) = do_binary(ast, id, Op::Mul)?;
    let (reciprocal, other) = if is_reciprocal(ast, lhs) {
        (lhs, rhs)
    } else if is_reciprocal(ast, rhs) {
        (rhs, lhs)
    } else {
        return None;
    };

    let (one, denominator) = ast.take_children(reciprocal);
    if let Some(one) = one {
        ast.free_subtree(one);
    }
    ast.take_children(id);
    ast.free_subtree(reciprocal);
    ast.rewrite(id, Op::Div, Some(other), denominator);

    step_collector.push(Step::MultiplyReciprocal);
    Some(())
}

/// Applies all multiplication rules.
pub fn all(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    multiply_zero(ast, id, step_collector)
        .or_else(|| multiply_one(ast, id, step_collector))
        .or_else(|| multiply_reciprocal(ast, id, step_collector))
}
