//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the tree and the node to simplify, and
//! rewrites the node in place if the rule applies, returning `Some(())`. If the rule does not
//! apply, it returns [`None`] and leaves the tree unchanged.
//!
//! A rewritten node keeps its identity: the parent's link to it stays valid.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod power;
pub mod subtract;

use acram_parser::parser::ast::{node::Op, tree::Ast, NodeId};
use crate::symbolic::step_collector::StepCollector;
use super::step::Step;

/// If the node is a binary node with the given operator, returns its operands.
pub(crate) fn do_binary(ast: &Ast, id: NodeId, op: Op) -> Option<(NodeId, NodeId)> {
    if ast.op(id) == Some(op) {
        Some((ast.left(id)?, ast.right(id)?))
    } else {
        None
    }
}

/// Applies all rules.
pub fn all(ast: &mut Ast, id: NodeId, step_collector: &mut dyn StepCollector<Step>) -> Option<()> {
    add::all(ast, id, step_collector)
        .or_else(|| subtract::all(ast, id, step_collector))
        .or_else(|| multiply::all(ast, id, step_collector))
        .or_else(|| divide::all(ast, id, step_collector))
        .or_else(|| power::all(ast, id, step_collector))
}
