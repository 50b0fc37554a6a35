//! Checks a parsed function for operations that are undefined for every value of the variable.
//!
//! The check only looks at literal operands: `1/0` is rejected, but `1/(x-x)` is not, even
//! though its denominator is always zero.

pub mod error;

use acram_error::Error;
use acram_parser::parser::ast::{function::Function, node::Op, tree::Ast, NodeId};
use log::debug;

/// Checks a single node, returning the error it causes, if any.
fn check_node(ast: &Ast, id: NodeId) -> Result<(), Error> {
    let Some(op) = ast.op(id) else {
        return Ok(());
    };
    let is_zero = |child: Option<NodeId>| child.is_some_and(|child| ast.is_zero(child));
    let (left, right) = (ast.left(id), ast.right(id));
    let spans = vec![ast[id].span.clone()];

    match op {
        Op::Pwr if is_zero(left) && is_zero(right) => Err(Error::new(spans, error::ZeroToZero)),
        Op::Div if is_zero(right) => Err(Error::new(spans, error::DivisionByZero)),
        Op::Log if is_zero(right) => Err(Error::new(spans, error::LogOfZero)),
        Op::Log if right.is_some_and(|arg| ast.is_negative(arg)) => {
            Err(Error::new(spans, error::LogOfNegative))
        },
        _ => Ok(()),
    }
}

/// Checks the function for undefined operations on literal operands. The tree is visited in
/// post-order, so when there are several problems, the deepest, leftmost one is reported.
///
/// The function is not modified.
pub fn check_semantics(function: &Function) -> Result<(), Error> {
    function.ast
        .post_order_iter()
        .try_for_each(|id| check_node(&function.ast, id))?;

    debug!("`{}` passed the semantic check", function.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use acram_parser::parser::parse_function;

    /// Parses the source and runs the semantic check on it.
    fn check(source: &str) -> Result<(), Error> {
        check_semantics(&parse_function(source).unwrap())
    }

    #[test]
    fn valid_functions() {
        assert!(check("f(x) = x^2 + 3*x - 5").is_ok());
        assert!(check("f(x) = log(x) / x").is_ok());
        assert!(check("f(x) = 0^x + x^0").is_ok());
        assert!(check("f(x) = 0 / x").is_ok());
    }

    #[test]
    fn zero_to_zero() {
        assert!(check("f(x) = x + 0^0").unwrap_err().is::<error::ZeroToZero>());
    }

    #[test]
    fn division_by_zero() {
        let err = check("f(x) = 1/0").unwrap_err();
        assert!(err.is::<error::DivisionByZero>());
        assert_eq!(err.spans, vec![7..10]);
    }

    #[test]
    fn logarithms() {
        assert!(check("f(x) = log(0)").unwrap_err().is::<error::LogOfZero>());
        assert!(check("f(x) = ln(-2)").unwrap_err().is::<error::LogOfNegative>());
        assert!(check("f(x) = log(-x)").is_ok());
        assert!(check("f(x) = log(0.0)").is_ok());
    }

    #[test]
    fn only_literals_are_checked() {
        assert!(check("f(x) = 1/(x-x)").is_ok());
        assert!(check("f(x) = 1/(1-1)").is_ok());
    }

    #[test]
    fn deepest_error_wins() {
        let err = check("f(x) = log(0) / 0").unwrap_err();
        assert!(err.is::<error::LogOfZero>());
    }
}
